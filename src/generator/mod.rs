//! Content generator: prompt composition, the remote Workers AI call and
//! assembly of the final list of lines.

/// Result assembly and the fallback jokes.
pub mod content;
/// Supported humor categories.
pub mod content_type;
/// Cloudflare account credentials.
pub mod credentials;
/// Error type shared by the generator.
pub mod error;
/// Prompt templates.
pub mod prompt;
/// Workers AI text-generation client.
pub mod workers_ai;

pub use content::{
    FALLBACK_CONTENT, MAX_LINES, collect_lines, generate_content, generate_content_for_tag,
};
pub use content_type::ContentType;
pub use credentials::Credentials;
pub use error::GenerateError;
pub use prompt::{PERSONA, compose_prompt, compose_prompt_for_tag};
pub use workers_ai::{ChatMessage, RunRequest, WorkersAiClient};
