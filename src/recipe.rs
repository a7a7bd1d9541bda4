//! Recipe generation: request validation, prompting and the upstream call.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::{GeminiClient, UpstreamError};
use crate::prompt::{build_prompt, Language};

pub const SUCCESS_MESSAGE: &str = "Recette générée avec succès 🎉";

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct RecipeRequest {
    /// Ingredients to cook with, in the order they should be mentioned
    pub ingredients: Vec<String>,
    /// Language of the generated recipe ("fr" or "en")
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecipeResponse {
    pub message: String,
    /// Raw text returned by the model
    pub recipe: String,
}

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RecipeError {
    /// Status code returned to the caller.
    pub fn http_status(&self) -> u16 {
        match self {
            RecipeError::InvalidRequest(_) => 422,
            RecipeError::Upstream(e) => e.kind().http_status(),
        }
    }

    /// Message safe to show the caller. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            RecipeError::InvalidRequest(reason) => reason.clone(),
            RecipeError::Upstream(e) => e.kind().public_message().to_string(),
        }
    }
}

impl RecipeRequest {
    /// Checks that at least one ingredient was given and none is blank.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.ingredients.is_empty() {
            return Err(RecipeError::InvalidRequest(
                "ingredients must contain at least one item".to_string(),
            ));
        }

        if let Some(index) = self.ingredients.iter().position(|i| i.trim().is_empty()) {
            return Err(RecipeError::InvalidRequest(format!(
                "ingredient at position {} is empty",
                index
            )));
        }

        Ok(())
    }
}

/// Validates `request`, builds its prompt and asks Gemini for a recipe.
pub async fn generate_recipe(
    client: &GeminiClient,
    request: &RecipeRequest,
) -> Result<RecipeResponse, RecipeError> {
    request.validate()?;

    let prompt = build_prompt(&request.ingredients, request.language);
    tracing::info!(
        "Prompt built for {} ingredient(s) in '{}', sending to model {}",
        request.ingredients.len(),
        request.language,
        client.model()
    );

    let recipe = client.generate_content(&prompt).await.map_err(|e| {
        tracing::warn!("Recipe generation failed: {}", e);
        e
    })?;

    tracing::info!("Recipe generated successfully");

    Ok(RecipeResponse {
        message: SUCCESS_MESSAGE.to_string(),
        recipe,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ErrorKind;

    fn request(ingredients: &[&str]) -> RecipeRequest {
        RecipeRequest {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            language: Language::En,
        }
    }

    #[test]
    fn test_validate_accepts_ingredients() {
        assert!(request(&["tomato", "basil"]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        let error = request(&[]).validate().unwrap_err();
        assert_eq!(error.http_status(), 422);
    }

    #[test]
    fn test_validate_rejects_blank_ingredient() {
        let error = request(&["tomato", "  "]).validate().unwrap_err();
        assert!(error.public_message().contains("position 1"));
    }

    #[test]
    fn test_validate_keeps_padded_ingredients() {
        let request = request(&[" tomato ", "basil\n"]);
        assert!(request.validate().is_ok());
        assert_eq!(request.ingredients, vec![" tomato ", "basil\n"]);
    }

    #[test]
    fn test_upstream_error_uses_public_message() {
        let error = RecipeError::from(UpstreamError::new(
            ErrorKind::UpstreamMisconfigured,
            "API key not valid",
        ));
        assert_eq!(error.http_status(), 500);
        assert!(!error.public_message().contains("API key"));
    }
}
