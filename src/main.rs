use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use moodtune::app::cli::Args;
use moodtune::app::config::{AppConfig, UserConfig};
use moodtune::app::events::AppEvent;
use moodtune::app::poller::DetectionPoller;
use moodtune::app::{input_handler, loader, App};
use moodtune::detector::{ExpressionDetector, HttpDetector, ModelStore, ReplayDetector};
use moodtune::links::{LinkOpener, LogOpener, SystemOpener};
use moodtune::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Spinner / toast animation rate
const TICK_RATE: Duration = Duration::from_millis(100);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Log to a daily file; the terminal belongs to the UI.
fn init_logging() -> Option<WorkerGuard> {
    let log_dir = dirs::data_dir()
        .map(|d| d.join("moodtune").join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/moodtune/logs"));
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "moodtune.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_env("MOODTUNE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("moodtune=info"));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    // Chained after human-panic so the terminal is back before it prints
    ui::terminal::restore_on_panic();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", UserConfig::default().to_toml());
        return Ok(());
    }

    let _log_guard = init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "moodtune starting");

    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_args(&args);

    // Shared HTTP client for models and the detector service
    let client = reqwest::Client::builder()
        .user_agent(concat!("moodtune/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .context("building HTTP client")?;

    let detector: Arc<dyn ExpressionDetector> = match &config.replay {
        Some(path) => Arc::new(
            ReplayDetector::from_path(path)
                .with_context(|| format!("loading replay script {}", path.display()))?,
        ),
        None => Arc::new(HttpDetector::new(client.clone(), &config.detector_url)),
    };

    let opener: Box<dyn LinkOpener> = if args.dry_run_links {
        Box::new(LogOpener)
    } else {
        Box::new(SystemOpener::new())
    };

    let cache_dir = config
        .model_cache_dir
        .clone()
        .unwrap_or_else(ModelStore::default_cache_dir);
    let store = ModelStore::new(client, &config.model_base_url, cache_dir);

    let mut app = App::new(&config, ui::theme::load_current_theme(), detector.name());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app, &config, store, detector, opener.as_ref()).await;

    ui::terminal::restore()?;

    info!("moodtune exiting");
    result
}

async fn run(
    terminal: &mut Tui,
    app: &mut App,
    config: &UserConfig,
    store: ModelStore,
    detector: Arc<dyn ExpressionDetector>,
    opener: &dyn LinkOpener,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. One-shot model load; polling starts when it reports back
    loader::spawn_model_load(store, detector.clone(), config.capture.clone(), tx.clone());

    // 3. Animation Tick Task ⚡
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_RATE);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    let mut poller: Option<DetectionPoller> = None;

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            AppEvent::Input(Event::Key(key)) => input_handler::handle_key(key, app, opener),
            AppEvent::Input(_) => {}
            AppEvent::ModelsReady(models) => {
                info!(dir = %models.dir.display(), "Models ready");
                if app.on_models_loaded() {
                    poller = Some(DetectionPoller::spawn(
                        detector.clone(),
                        config.poll_interval(),
                        tx.clone(),
                    ));
                }
            }
            AppEvent::ModelLoadFailed(reason) => app.on_model_load_failed(&reason),
            AppEvent::Detection(detection) => {
                app.apply_detection(detection);
            }
            AppEvent::Tick => app.on_tick(),
        }

        if !app.is_running {
            break;
        }
    }

    if let Some(poller) = poller {
        poller.shutdown().await;
    }
    Ok(())
}
