use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::{self, ProfileConfig};
use crate::generator::workers_ai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::generator::{
    ContentType, Credentials, RunRequest, WorkersAiClient, compose_prompt, generate_content,
};
use crate::logging;

const ACCOUNT_PLACEHOLDER: &str = "{account_id}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Topic to write about. Read from stdin when omitted.
    pub topic: Option<String>,
    /// Content type: puns, jokes, wordplay, riddles or epigrams.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub content_type: Option<String>,
    /// Profile name from the config file.
    #[arg(long)]
    pub profile: Option<String>,
    /// Workers AI model id.
    #[arg(long)]
    pub model: Option<String>,
    /// Cloudflare API base URL.
    #[arg(long)]
    pub base_url: Option<String>,
    /// Request timeout in seconds. No timeout by default.
    #[arg(long)]
    pub timeout: Option<u64>,
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
    /// Shorthand for `--output json`.
    #[arg(long)]
    pub json: bool,
    /// Print the request that would be sent and exit.
    #[arg(long)]
    pub dry_run: bool,
    /// Also write the JSON result to this file.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
    #[arg(short, long)]
    pub verbose: bool,
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
struct Settings {
    content_type: ContentType,
    model: String,
    base_url: String,
    timeout_secs: Option<u64>,
    output: OutputFormat,
}

impl Settings {
    // CLI > env > profile > default.
    fn resolve(args: &GenerateArgs, profile: &ProfileConfig) -> Result<Self, String> {
        let tag = pick(
            args.content_type.clone(),
            "PUNSMITH_TYPE",
            profile.content_type.clone(),
        )
        .unwrap_or_else(|| ContentType::default().as_str().to_string());
        let (content_type, recognized) = ContentType::normalize(tag.trim());
        if !recognized {
            warn!(tag = %tag, "unknown content type, using puns");
        }

        let model = pick(args.model.clone(), "PUNSMITH_MODEL", profile.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = pick(
            args.base_url.clone(),
            "PUNSMITH_BASE_URL",
            profile.base_url.clone(),
        )
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match args.timeout {
            Some(value) => Some(value),
            None => match env_value("PUNSMITH_TIMEOUT") {
                Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                    format!("Invalid PUNSMITH_TIMEOUT '{raw}'. Expected a whole number of seconds.")
                })?),
                None => profile.timeout,
            },
        }
        .filter(|secs| *secs > 0);

        let output = if args.json {
            OutputFormat::Json
        } else if let Some(output) = args.output {
            output
        } else if let Some(raw) = profile.output.as_deref() {
            OutputFormat::parse(raw).ok_or_else(|| {
                format!("Invalid profile output '{raw}'. Supported values: text, json.")
            })?
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            content_type,
            model,
            base_url,
            timeout_secs,
            output,
        })
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn pick(cli: Option<String>, env_name: &str, profile: Option<String>) -> Option<String> {
    cli.or_else(|| env_value(env_name)).or(profile)
}

pub async fn run(args: GenerateArgs) -> Result<(), String> {
    logging::init(args.verbose, args.quiet);

    let topic = resolve_topic(args.topic.as_deref())?;
    let profile = match args.profile.as_deref() {
        Some(name) => config::load_profile(name)?,
        None => ProfileConfig::default(),
    };
    let settings = Settings::resolve(&args, &profile)?;

    let client = WorkersAiClient::new()
        .with_base_url(&settings.base_url)
        .with_model(&settings.model)
        .with_timeout(settings.timeout_secs);
    let credentials = Credentials::from_env();

    debug!(
        credentials_present = credentials.is_some(),
        model = %settings.model,
        base_url = %client.base_url(),
        content_type = %settings.content_type,
        "resolved generation settings"
    );

    if args.dry_run {
        let account_id = credentials
            .as_ref()
            .map_or(ACCOUNT_PLACEHOLDER, Credentials::account_id);
        let prompt = compose_prompt(&topic, settings.content_type);
        let document = json!({
            "dry_run": true,
            "url": client.endpoint(account_id),
            "model": settings.model,
            "type": settings.content_type.as_str(),
            "credentials_present": credentials.is_some(),
            "timeout_secs": settings.timeout_secs,
            "output": settings.output.as_str(),
            "request": RunRequest::for_prompt(&prompt),
        });
        print_json(&document)?;
        if let Some(path) = &args.save {
            write_output(path, &document)?;
        }
        return Ok(());
    }

    let source = if credentials.is_some() {
        "model"
    } else {
        "fallback"
    };
    let lines = generate_content(
        &client,
        credentials.as_ref(),
        &topic,
        settings.content_type,
    )
    .await
    .map_err(|err| err.to_string())?;

    let document = json!({
        "topic": topic,
        "type": settings.content_type.as_str(),
        "source": source,
        "content": lines,
    });

    match settings.output {
        OutputFormat::Text => {
            for line in &lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => print_json(&document)?,
    }

    if let Some(path) = &args.save {
        write_output(path, &document)?;
    }

    Ok(())
}

fn resolve_topic(arg: Option<&str>) -> Result<String, String> {
    let topic = match arg {
        Some(topic) => topic.to_string(),
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(no_topic_error());
            }
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|err| format!("Failed to read topic from stdin: {err}"))?;
            buffer
        }
    };

    let topic = topic.trim();
    if topic.is_empty() {
        return Err(no_topic_error());
    }
    Ok(topic.to_string())
}

fn no_topic_error() -> String {
    "No topic provided. Pass a topic argument or pipe one on stdin.".to_string()
}

fn print_json(document: &Value) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(document)
        .map_err(|err| format!("Failed to render JSON output: {err}"))?;
    println!("{rendered}");
    Ok(())
}

fn write_output(path: &Path, document: &Value) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| {
            format!(
                "Failed to create output directory '{}': {err}",
                parent.display()
            )
        })?;
    }
    let rendered = serde_json::to_string(document)
        .map_err(|err| format!("Failed to render JSON output: {err}"))?;
    fs::write(path, rendered)
        .map_err(|err| format!("Failed to write output file '{}': {err}", path.display()))
}
