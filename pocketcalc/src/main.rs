//! PocketCalc - a four-function calculator
//!
//! Opens the calculator window by default; `press` and `repl` run the same
//! calculator in the terminal.

mod app;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use app::PocketCalcApp;
use clap::{Parser, Subcommand};
use eframe::NativeOptions;
use pocketcore::{storage, Preferences};

const APP_NAME: &str = "pocketcalc";

#[derive(Parser, Debug)]
#[command(name = "pocketcalc", version, about = "A four-function pocket calculator")]
struct Cli {
    /// Preferences file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Press keys by label and print the display after each one
    Press {
        /// Key labels, e.g. `1 2 + 3 =` or `clear`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
        /// Only print the final display
        #[arg(short, long)]
        quiet: bool,
    },
    /// Read keys from stdin, one line at a time
    Repl,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let prefs_path = cli.config.unwrap_or_else(|| storage::preferences_path(APP_NAME));
    let prefs = load_preferences(&prefs_path, pocketcore::logging::init);

    match cli.command {
        Some(Command::Press { keys, quiet }) => {
            pocketcalc::shell::run_press(&keys, quiet, io::stdout().lock()).context("writing to stdout")
        }
        Some(Command::Repl) => {
            pocketcalc::shell::run_repl(io::stdin().lock(), io::stdout().lock()).context("terminal session failed")
        }
        None => run_window(prefs, prefs_path),
    }
}

/// Read preferences, start logging with their filter, then report any
/// load failure through that logger.
fn load_preferences(path: &Path, init_logging: impl FnOnce(&str)) -> Preferences {
    let loaded = Preferences::load_or_default(path);
    let prefs = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&prefs.log_filter);
    match loaded {
        Ok(_) => tracing::debug!(path = %path.display(), "preferences loaded"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not read preferences, using defaults"),
    }
    prefs
}

fn run_window(prefs: Preferences, prefs_path: PathBuf) -> anyhow::Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([prefs.window_width, prefs.window_height])
        .with_title("calculator");
    if let Some(pos) = pocketcore::cascade_position() {
        viewport = viewport.with_position(pos);
    }
    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!(width = prefs.window_width, height = prefs.window_height, "opening calculator window");
    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            pocketcore::PocketTheme::default().apply(&cc.egui_ctx);
            Box::new(PocketCalcApp::new(cc, prefs, prefs_path))
        }),
    )
    .map_err(|e| anyhow::anyhow!("calculator window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_opens_window() {
        let cli = Cli::try_parse_from(["pocketcalc"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_path() {
        let cli = Cli::try_parse_from(["pocketcalc", "--config", "prefs.json", "repl"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("prefs.json")));
        assert!(matches!(cli.command, Some(Command::Repl)));
    }

    #[test]
    fn test_press_quiet_with_minus_key() {
        let cli = Cli::try_parse_from(["pocketcalc", "press", "-q", "9", "-", "4", "="]).unwrap();
        match cli.command {
            Some(Command::Press { keys, quiet }) => {
                assert!(quiet);
                assert_eq!(keys, vec!["9", "-", "4", "="]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_press_needs_keys() {
        assert!(Cli::try_parse_from(["pocketcalc", "press"]).is_err());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        let text = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        (value, text)
    }

    #[test]
    fn test_bad_preferences_warn_after_logging_starts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let mut filter_seen = None;
        let (prefs, logs) = capture(|| load_preferences(&path, |f| filter_seen = Some(f.to_string())));

        assert_eq!(prefs, Preferences::default());
        assert_eq!(filter_seen.as_deref(), Some("info"));
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("could not read preferences"), "{logs}");
    }

    #[test]
    fn test_good_preferences_pass_their_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{ "log_filter": "pocketcalc=trace" }"#).unwrap();

        let mut filter_seen = None;
        let (prefs, logs) = capture(|| load_preferences(&path, |f| filter_seen = Some(f.to_string())));

        assert_eq!(prefs.log_filter, "pocketcalc=trace");
        assert_eq!(filter_seen.as_deref(), Some("pocketcalc=trace"));
        assert!(!logs.contains("WARN"), "{logs}");
    }
}
