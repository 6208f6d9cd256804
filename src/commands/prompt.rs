use clap::Args;
use tracing::warn;

use crate::generator::{ContentType, compose_prompt};
use crate::logging;

#[derive(Debug, Args, Clone)]
pub struct PromptArgs {
    /// Topic to write about.
    pub topic: String,
    /// Content type: puns, jokes, wordplay, riddles or epigrams.
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "puns")]
    pub content_type: String,
}

/// Prints the prompt that `generate` would send, without calling the model.
pub fn run(args: PromptArgs) -> Result<(), String> {
    logging::init(false, false);

    let (kind, recognized) = ContentType::normalize(args.content_type.trim());
    if !recognized {
        warn!(tag = %args.content_type, "unknown content type, using puns");
    }
    println!("{}", compose_prompt(&args.topic, kind));
    Ok(())
}
