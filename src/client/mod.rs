//! # Gemini HTTP Client
//!
//! This module provides the upstream client used to generate recipes with the
//! Gemini `generateContent` API and the error taxonomy its failures map to.
//!
//! ## Modules
//!
//! - [`auth`] - API key wrapper that keeps the secret out of logs
//! - [`client`] - The HTTP client performing the single upstream call
//! - [`error`] - Failure kinds and their caller-facing statuses
//! - [`types`] - Request and response wire types
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_chef::{client::GeminiClient, config::Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::new("my-api-key");
//! let client = GeminiClient::new(&config)?;
//!
//! let text = client.generate_content("Give me a pancake recipe").await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod types;

pub use auth::ApiKey;
pub use client::GeminiClient;
pub use error::{ErrorKind, UpstreamError};
