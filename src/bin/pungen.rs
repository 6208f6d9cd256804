use std::process;

use clap::Parser;
use punsmith::LONG_VERSION;
use punsmith::commands::generate::{self, GenerateArgs};

#[derive(Debug, Parser)]
#[command(
    name = "pungen",
    about = "Generate puns, jokes and other wordplay about a topic",
    version,
    long_version = LONG_VERSION
)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = generate::run(cli.generate).await {
        eprintln!("{err}");
        process::exit(1);
    }
}
