//! # mdpeek CLI Entry Point
//!
//! ## Usage
//!
//! ```bash
//! # Browse the current directory
//! mdpeek
//!
//! # Start somewhere else
//! mdpeek --path ~/notes
//!
//! # Keep the "Only markdown files supported" notice up for two seconds
//! mdpeek --notice-ms 2000
//! ```
//!
//! ## Key Bindings
//!
//! ### Browsing
//! - `j` / `k` / arrows - Move the cursor
//! - `Enter` / `l` - Open a directory or view a file
//! - `Esc` / `h` / `Backspace` - Parent directory
//! - `g` / `G` - First / last entry
//!
//! ### Viewing
//! - `j` / `k` / arrows - Scroll one line
//! - `PgUp` / `PgDn` - Scroll one page
//! - Mouse wheel - Scroll three lines
//! - `Esc` - Back to the browser
//!
//! `q` or `Ctrl+c` quits from anywhere.

use mdpeek::browser::Browser;
use mdpeek::logging;
use mdpeek::ui::app::Settings;
use mdpeek::ui::config::Config;
use mdpeek::ui::events::{CrosstermEventReader, Scheduler};
use mdpeek::ui::runtime::run_app;
use mdpeek::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;

/// mdpeek - browse a directory and read markdown files
#[derive(Parser, Debug)]
#[command(name = "mdpeek")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse a directory and read markdown files", long_about = None)]
struct Args {
    /// Directory to start browsing in (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// How long the rejected-selection notice stays visible, in milliseconds
    #[arg(long, value_name = "MS")]
    notice_ms: Option<u64>,

    /// Horizontal padding of the panel; twice this is kept free vertically
    #[arg(long, value_name = "N")]
    padding: Option<u16>,

    /// Color theme
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Show dot-files in the browser
    #[arg(long)]
    show_hidden: bool,
}

impl Args {
    /// Layer command-line values over the loaded configuration.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(ms) = self.notice_ms {
            config.notice_delay_ms = ms;
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(theme) = &self.theme {
            config.theme.clone_from(theme);
        }
        if self.show_hidden {
            config.show_hidden = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = logging::init() {
        eprintln!("Warning: {err:#}");
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;
    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "mdpeek exited with an error");
    }
    result
}

async fn run_application(args: Args) -> Result<()> {
    let start_dir = match &args.path {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("Failed to access directory: {}", path.display()))?,
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };

    let config = args.apply(Config::load());
    let settings = Settings::from(&config);
    let browser = Browser::new(&start_dir, config.extensions.clone(), config.show_hidden)
        .with_context(|| format!("Failed to open directory: {}", start_dir.display()))?;

    tracing::info!(
        dir = %start_dir.display(),
        notice_delay_ms = settings.notice_delay.as_millis() as u64,
        theme = settings.theme.name,
        "starting"
    );

    let mut app = App::new(browser, &settings);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (scheduler, mut timers) = Scheduler::channel();
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        &scheduler,
        &mut timers,
    )
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdpeek::ui::theme::Theme;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn args_with_path(path: Option<PathBuf>) -> Args {
        Args {
            path,
            notice_ms: None,
            padding: None,
            theme: None,
            show_hidden: false,
        }
    }

    #[tokio::test]
    async fn test_run_application_nonexistent_directory() {
        let args = args_with_path(Some(PathBuf::from(
            "/nonexistent/directory/that/does/not/exist",
        )));

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to access directory"));
    }

    #[tokio::test]
    async fn test_run_application_file_instead_of_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notadir.md");
        fs::write(&file_path, "test content").unwrap();

        let result = run_application(args_with_path(Some(file_path))).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to open directory"));
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::parse_from([
            "mdpeek",
            "--path",
            "/some/path",
            "--notice-ms",
            "2000",
            "--padding",
            "2",
            "--theme",
            "nord",
            "--show-hidden",
        ]);
        assert_eq!(args.path, Some(PathBuf::from("/some/path")));
        assert_eq!(args.notice_ms, Some(2000));
        assert_eq!(args.padding, Some(2));
        assert_eq!(args.theme.as_deref(), Some("nord"));
        assert!(args.show_hidden);
    }

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from(["mdpeek", "--notice-ms", "250", "--theme", "Paper"]);
        let config = args.apply(Config::default());

        assert_eq!(config.notice_delay(), Duration::from_millis(250));
        assert_eq!(config.theme, "Paper");
        assert_eq!(config.padding, 5);
        assert!(!config.show_hidden);
        assert_eq!(Settings::from(&config).theme, Theme::by_name("paper").unwrap());
    }

    #[test]
    fn test_args_without_flags_keep_config() {
        let config = Config {
            padding: 1,
            show_hidden: true,
            ..Config::default()
        };
        let applied = args_with_path(None).apply(config.clone());
        assert_eq!(applied, config);
    }
}
