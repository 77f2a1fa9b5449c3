//! DiskTally: per-extension disk usage tally for the console.
//!
//! Thin binary entry point. All logic lives in the `disktally-core`
//! and `disktally-cli` crates.

/// Set to any value to raise the log level from WARN to DEBUG.
const DEBUG_ENV: &str = "DISKTALLY_DEBUG";

fn main() -> anyhow::Result<()> {
    // Structured logging goes to stderr so it never lands inside the
    // positioned console output on stdout.
    let level = if std::env::var_os(DEBUG_ENV).is_some() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("DiskTally starting");

    disktally_cli::run_cli(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    )
}
