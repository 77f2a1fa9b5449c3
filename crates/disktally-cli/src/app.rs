/// The run loop: walk every target, feed the accumulator and the top-K
/// selector, keep the live output current, then print the final report.
///
/// Everything happens on the calling thread, one entry at a time.
use crate::args::RunConfig;
use disktally_core::report::{Reporter, Surface};
use disktally_core::scanner::{self, progress::WalkEvent, ScanSummary};
use disktally_core::stats::{AccumulatorStore, TopKSelector};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Minimum time between two redraws of the live summary panel.
///
/// Redrawing for every file would make terminal I/O dominate the walk on
/// large trees; the panel is always redrawn once more when a root finishes.
pub const PANEL_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

/// Results of a completed run, kept for callers that want more than the
/// printed report.
#[derive(Debug)]
pub struct RunReport {
    pub summary: ScanSummary,
    pub store: AccumulatorStore,
}

/// Walk all targets of `config` and render the full report on `surface`.
pub fn run<S: Surface + ?Sized>(config: &RunConfig, surface: &mut S) -> io::Result<RunReport> {
    let start = Instant::now();
    let mut store = AccumulatorStore::new();
    let mut top = TopKSelector::new(config.top_count);
    let mut summary = ScanSummary::default();
    let mut reporter = Reporter::new(surface);

    if !config.walk {
        reporter.anchor_panel()?;
    }

    for root in &config.targets {
        let mut last_draw: Option<Instant> = None;
        let mut last_path = root.clone();

        for event in scanner::walk(root) {
            summary.record(&event);
            match event {
                WalkEvent::Entry(record) => {
                    if !record.is_dir() {
                        store.add_record(&record);
                    }
                    if config.walk {
                        reporter.trace_entry(&record)?;
                    } else if last_draw.map_or(true, |t| t.elapsed() >= PANEL_REFRESH_INTERVAL) {
                        reporter.summary_panel(&record.path, store.total())?;
                        last_draw = Some(Instant::now());
                    }
                    last_path.clone_from(&record.path);
                    if !record.is_dir() {
                        top.offer(record);
                    }
                }
                WalkEvent::Error(err) => {
                    // Already on screen; the log copy is for DISKTALLY_DEBUG runs.
                    debug!("{err}");
                    let message = err.to_string();
                    if config.walk {
                        reporter.trace_error(&message)?;
                    } else {
                        reporter.panel_error(&message)?;
                    }
                }
            }
        }

        if !config.walk {
            reporter.summary_panel(&last_path, store.total())?;
        }
    }

    summary.duration = start.elapsed();
    info!(
        "Walk complete: {} files, {} dirs, {} errors in {:?}",
        summary.files, summary.dirs, summary.errors, summary.duration
    );

    let top_count = top.capacity();
    let top_files = top.finalize();
    let snapshot = store.snapshot();
    reporter.begin_report()?;
    reporter.kind_table(&snapshot)?;
    reporter.extension_table(&snapshot)?;
    reporter.top_files(top_count, &top_files)?;
    reporter.footer(&summary)?;

    Ok(RunReport { summary, store })
}

#[cfg(test)]
mod tests {
    use super::*;
    use disktally_core::report::BufferSurface;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config(targets: Vec<PathBuf>, walk: bool) -> RunConfig {
        RunConfig {
            targets,
            walk,
            ..Default::default()
        }
    }

    #[test]
    fn summary_mode_ends_with_final_totals_on_panel() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), vec![0u8; 100]).unwrap();
        fs::write(tmp.path().join("b.txt"), vec![0u8; 200]).unwrap();

        let mut surface = BufferSurface::new(120, 40);
        let report = run(&config(vec![tmp.path().to_path_buf()], false), &mut surface).unwrap();

        assert_eq!(report.summary.files, 2);
        assert_eq!(report.store.total().total_logical_size, 300);
        // The panel is cleared before the tables; the tables are streamed.
        assert_eq!(surface.clears(), 1);
        assert!(surface.text().contains("Top 500 files:"));
    }

    #[test]
    fn walk_mode_traces_directories_and_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("x.log"), vec![0u8; 2_048]).unwrap();

        let mut surface = BufferSurface::new(120, 40);
        run(&config(vec![tmp.path().to_path_buf()], true), &mut surface).unwrap();

        let text = surface.text();
        assert!(text.contains("<DIR>"));
        assert!(text.contains("|  x.log\n"));
        assert!(text.contains("2,048 B"));
    }

    /// A missing root is reported and the remaining roots are still scanned.
    #[test]
    fn missing_root_does_not_abort_the_run() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("kept.bin"), vec![0u8; 10]).unwrap();
        let missing = tmp.path().join("nope");

        let mut surface = BufferSurface::new(120, 40);
        let report = run(
            &config(vec![missing, tmp.path().to_path_buf()], true),
            &mut surface,
        )
        .unwrap();

        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.files, 1);
        assert!(surface.text().contains("ERROR: "));
    }

    /// Writer shared between the test and the subscriber it installs.
    #[derive(Clone, Default)]
    struct LogCapture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// With the binary's default WARN filter, per-entry errors are shown
    /// once by the reporter and nothing reaches the log stream, which shares
    /// the terminal with the positioned panel.
    #[test]
    fn entry_errors_stay_out_of_the_default_log() {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let mut surface = BufferSurface::new(120, 40);
        let report = tracing::subscriber::with_default(subscriber, || {
            run(&config(vec![missing], true), &mut surface)
        })
        .unwrap();

        assert_eq!(report.summary.errors, 1);
        assert_eq!(surface.text().matches("ERROR: ").count(), 1);
        assert!(capture.0.lock().unwrap().is_empty());
    }
}
