use std::future::Future;
use std::sync::Arc;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::client::GeminiClient;
use crate::recipe::{self, RecipeRequest};

#[derive(Clone)]
pub struct RecipeMcpServer {
    client: Arc<GeminiClient>,
    tool_router: ToolRouter<RecipeMcpServer>,
}

#[tool_router]
impl RecipeMcpServer {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Generate a simple recipe from a list of ingredients, in French (fr) or English (en)")]
    pub async fn generate_recipe(
        &self,
        Parameters(params): Parameters<RecipeRequest>,
    ) -> Result<CallToolResult, McpError> {
        match recipe::generate_recipe(&self.client, &params).await {
            Ok(response) => {
                let result = json!({
                    "message": response.message,
                    "recipe": response.recipe,
                });
                Ok(CallToolResult::success(vec![Content::text(result.to_string())]))
            }
            Err(e) => {
                let error = json!({
                    "error": e.public_message(),
                    "details": e.to_string(),
                    "status": e.http_status(),
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for RecipeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server generates simple, encouraging recipes from the ingredients you have on hand. Call generate_recipe with a list of ingredients and a language (\"fr\" or \"en\"); the answer is the model's recipe text with a name, a short description and step-by-step instructions.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
