use std::io;
use std::process;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, shells};
use punsmith::LONG_VERSION;
use punsmith::commands::config::{self, ConfigArgs};
use punsmith::commands::generate::{self as generate_cmd, GenerateArgs};
use punsmith::commands::prompt::{self, PromptArgs};

const ROOT_HELP_EXAMPLES: &str = "Examples:\n  punsmith generate cats\n  punsmith generate --type riddles --json \"coffee\"\n  echo \"time travel\" | punsmith generate --type epigrams\n  punsmith prompt --type jokes cats\n  punsmith config check\n  punsmith completion bash > ~/.local/share/bash-completion/completions/punsmith";

const GENERATE_HELP_EXAMPLES: &str = "Examples:\n  punsmith generate cats\n  punsmith generate --type wordplay --output json \"bread\"\n  punsmith generate --profile work --dry-run \"deadlines\"\n\nCredentials are read from VITE_CLOUDFLARE_ACCOUNT_ID and VITE_CLOUDFLARE_API_TOKEN.\nWithout them a fixed set of fallback jokes is printed.";

#[derive(Debug, Parser)]
#[command(
    name = "punsmith",
    about = "Witty content generator backed by Cloudflare Workers AI",
    version,
    long_version = LONG_VERSION,
    after_help = ROOT_HELP_EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(
        about = "Generate content about a topic",
        after_help = GENERATE_HELP_EXAMPLES
    )]
    Generate(GenerateArgs),
    #[command(about = "Print the prompt for a topic without calling the model")]
    Prompt(PromptArgs),
    #[command(about = "Manage local config")]
    Config(ConfigArgs),
    #[command(about = "Generate shell completion script")]
    Completion {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

fn print_completion(shell: CompletionShell) {
    let mut cmd = Cli::command();
    let out = &mut io::stdout();
    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut cmd, "punsmith", out),
        CompletionShell::Zsh => generate(shells::Zsh, &mut cmd, "punsmith", out),
        CompletionShell::Fish => generate(shells::Fish, &mut cmd, "punsmith", out),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => generate_cmd::run(args).await,
        Commands::Prompt(args) => prompt::run(args),
        Commands::Config(args) => config::run(args),
        Commands::Completion { shell } => {
            print_completion(shell);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
