//! PromptFetch - fetch and render remotely managed prompts
//!
//! Wraps the pure [`promptcore`] engine with the collaborators it needs in
//! practice: an HTTP transport, a typed client over the prompt endpoints,
//! YAML configuration and the `pf` command-line tool.
//!
//! # Modules
//!
//! - [`client`] - Transport trait, reqwest transport and [`PromptClient`]
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use promptfetch::{Config, GetPromptRequest, PromptClient, Variables};
//!
//! let config = Config::load(None)?;
//! let client = PromptClient::from_config(&config.api)?;
//! let vars = Variables::new().with("customer", "Ada");
//! let prompt = client.get_prompt(&GetPromptRequest::new("welcome"), &vars).await?;
//! println!("{}", prompt.text);
//! ```

pub mod cli;
pub mod client;
pub mod config;

pub use client::{
    ClientError, DescribePromptRequest, GetPromptRequest, HttpTransport, ListPromptsRequest, PromptClient, Transport,
};
pub use config::{ApiConfig, Config};

// Re-export the core so callers need a single dependency
pub use promptcore::{
    DescribePromptResponse, GetPromptResponse, ListPromptsResponse, PromptError, RenderedPrompt, VariableValue,
    Variables, extract_variable_names, pick_variables, replace_variables,
};
