use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Filter used when `RUST_LOG` is unset. Only this crate logs; storage
/// engine chatter from fjall stays quiet even when verbose.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "off" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Installs the global subscriber. Logs go to stderr so tables on stdout
/// stay clean.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}
