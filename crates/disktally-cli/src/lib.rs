/// Console frontend for DiskTally.
///
/// This crate owns the terminal. Business logic lives in `disktally-core`.
pub mod app;
pub mod args;
pub mod console;

pub use app::{run, RunReport};
pub use args::{parse_args, RunConfig};
pub use console::ConsoleSurface;

use anyhow::Context;
use disktally_core::model::Color;
use disktally_core::report::Surface;
use std::path::PathBuf;

/// Prompt shown once the report is complete.
pub const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Full command-line session: echo the arguments, scan, report, wait.
pub fn run_cli<I>(raw_args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let raw_args: Vec<String> = raw_args.into_iter().collect();
    let mut surface = ConsoleSurface::stdout();

    for (i, arg) in raw_args.iter().enumerate() {
        surface.paint(Color::White, &format!("  [{}]: {arg}\n", i + 1))?;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = parse_args(&raw_args, cwd);
    tracing::debug!(?config, "parsed arguments");

    run(&config, &mut surface).context("failed to render report")?;

    console::wait_for_acknowledgement(&mut surface, EXIT_PROMPT)?;
    surface.finish()?;
    Ok(())
}
