use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use plasma_status::app::export_view;
use plasma_status::settings::Overrides;
use plasma_status::source::{DataSource, FileSource, StreamSource};
use plasma_status::ui::Theme;
use plasma_status::{events, logging, settings, ui, App, PanelConfig, PanelView};

#[derive(Parser, Debug)]
#[command(name = "plasma-status")]
#[command(about = "Terminal status panel for a Plasma wallet's Watcher and network health")]
struct Args {
    /// Path to a status snapshot JSON file
    #[arg(short, long, default_value = "status.json", conflicts_with = "stdin")]
    file: PathBuf,

    /// Read newline-delimited snapshots from stdin instead of a file
    #[arg(long)]
    stdin: bool,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sync lag in seconds above which the Watcher is shown as syncing
    #[arg(long)]
    sync_threshold: Option<f64>,

    /// Watcher URL to display
    #[arg(long)]
    watcher_url: Option<String>,

    /// Block explorer URL to display
    #[arg(long)]
    block_explorer_url: Option<String>,

    /// Plasma Framework contract address
    #[arg(long)]
    contract: Option<String>,

    /// Refresh interval in seconds (only used with --file)
    #[arg(short, long, default_value = "1")]
    refresh: u64,

    /// Render once, write the panel as JSON ("-" for stdout) and exit
    #[arg(short, long, conflicts_with = "stdin")]
    export: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Settings given as flags, applied over the loaded configuration.
    fn overrides(&self) -> Overrides {
        Overrides {
            sync_threshold: self.sync_threshold,
            watcher_url: self.watcher_url.clone(),
            block_explorer_url: self.block_explorer_url.clone(),
            contract_address: self.contract.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref log_file) = args.log_file {
        logging::init_file_logging(log_file)?;
    }

    let config = args.overrides().apply(settings::load(args.config.as_deref())?);

    if let Some(ref export_path) = args.export {
        return export_once(&args.file, export_path, &config);
    }

    if args.stdin {
        return run_with_stdin(config);
    }

    run_with_file(&args.file, config, Duration::from_secs(args.refresh))
}

/// Run with a file-based data source
fn run_with_file(path: &Path, config: PanelConfig, refresh: Duration) -> Result<()> {
    info!("Watching {}", path.display());
    run_tui(Box::new(FileSource::new(path)), config, refresh)
}

/// Run with snapshots piped through stdin
fn run_with_stdin(config: PanelConfig) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    // The reader task needs a runtime context to spawn into
    let source = {
        let _guard = rt.enter();
        StreamSource::spawn(tokio::io::stdin(), "stdin")
    };

    // Poll continuously; the stream pushes snapshots as they arrive
    run_tui(Box::new(source), config, Duration::from_millis(100))
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, config: PanelConfig, refresh: Duration) -> Result<()> {
    // Detect before raw mode; the query talks to the terminal
    let theme = Theme::auto_detect();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal before a panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(source, config).with_theme(theme);
    app.reload_data();

    let result = run_app(&mut terminal, &mut app, refresh);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        // None while only the too-small notice is on screen
        let mut layout = None;
        terminal.draw(|frame| {
            layout = ui::draw(frame, app);
        })?;

        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    if let Some(ref layout) = layout {
                        events::handle_mouse_event(app, mouse, layout);
                    }
                }
                // Redrawn on the next iteration
                _ => {}
            }
        }

        if last_refresh.elapsed() >= refresh {
            app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Render the panel for the current snapshot file once and write it as JSON.
fn export_once(snapshot_path: &Path, export_path: &Path, config: &PanelConfig) -> Result<()> {
    let mut source = FileSource::new(snapshot_path);
    let Some(snapshot) = source.poll() else {
        anyhow::bail!(
            "No snapshot in {}: {}",
            snapshot_path.display(),
            source.error().unwrap_or("unknown error")
        );
    };

    let view = PanelView::build(&snapshot, config, chrono::Utc::now().timestamp());
    export_view(&view, export_path)?;

    if export_path != Path::new("-") {
        println!("Exported status panel to: {}", export_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_become_overrides() {
        let args = Args::try_parse_from([
            "plasma-status",
            "--sync-threshold",
            "2.5",
            "--watcher-url",
            "https://watcher.example.network",
            "--contract",
            "0xabc",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.sync_threshold, Some(2.5));
        assert_eq!(overrides.watcher_url.as_deref(), Some("https://watcher.example.network"));
        assert_eq!(overrides.contract_address.as_deref(), Some("0xabc"));
        assert_eq!(overrides.block_explorer_url, None);
    }

    #[test]
    fn test_no_flags_no_overrides() {
        let args = Args::try_parse_from(["plasma-status"]).unwrap();
        assert_eq!(args.overrides(), Overrides::default());
    }

    #[test]
    fn test_stdin_conflicts_with_export() {
        let result = Args::try_parse_from(["plasma-status", "--stdin", "--export", "-"]);
        assert!(result.is_err());
    }
}
