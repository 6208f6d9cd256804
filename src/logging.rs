use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr subscriber used by the binaries.
///
/// `RUST_LOG` wins when set, except under `quiet`, which silences everything.
pub fn init(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_env_filter(verbose))
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .with_level(true);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn default_env_filter(verbose: bool) -> EnvFilter {
    let spec = if verbose {
        "punsmith=debug,pungen=debug,warn"
    } else {
        "punsmith=warn,pungen=warn,error"
    };
    EnvFilter::new(spec)
}
