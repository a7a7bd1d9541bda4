//! # Recipe Chef Library
//!
//! This library turns a list of ingredients into a recipe by prompting the
//! Gemini generative-language API. It consists of these components:
//!
//! ## Prompt Module
//!
//! The [`prompt`] module builds the French or English prompt for an ingredient
//! list. It is pure and deterministic.
//!
//! ## Client Module
//!
//! The [`client`] module performs the single upstream call and maps every
//! failure onto one of five error kinds.
//!
//! ## Serving
//!
//! The [`api`] module exposes `POST /generate-recipe` over HTTP, and the
//! [`server`] module exposes the same operation as an MCP tool.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_chef::{Config, GeminiClient, Language, RecipeRequest};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let client = GeminiClient::new(&config)?;
//!
//! let request = RecipeRequest {
//!     ingredients: vec!["tomato".to_string(), "basil".to_string()],
//!     language: Language::En,
//! };
//! let response = recipe_chef::recipe::generate_recipe(&client, &request).await?;
//! println!("{}", response.recipe);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod prompt;
pub mod recipe;
pub mod server;

pub use client::GeminiClient;
pub use config::Config;
pub use prompt::{build_prompt, Language};
pub use recipe::{RecipeRequest, RecipeResponse};
pub use server::RecipeMcpServer;
