use anyhow::{Context, Result};
use clap::Parser;
use dev_cli_config::AppConfig;
use dev_cli_theme::Theme;
use gh_client::{GhCliClient, GitHubClient};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

mod actions;
mod capabilities;
mod cli;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod utils;
mod views;

use actions::{Action, GlobalAction, MergeAction, StatusAction};
use cli::{Cli, Commands, PrCommands};
use middleware::{
    browser::BrowserMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    merge::MergeMiddleware, navigation::NavigationMiddleware, status::StatusMiddleware,
    timer::TimerMiddleware,
};
use state::{AppState, SessionExit};
use store::Store;

/// Spinner animation interval
const TICK_RATE: Duration = Duration::from_millis(150);

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            1
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting dev, logging to {}", log_file.display());

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let client: Arc<dyn GitHubClient> = Arc::new(GhCliClient::new(config.gh_command.clone()));

    match cli.command {
        Commands::Pr { command } => match command {
            PrCommands::Merge { identifier } => {
                merge_pull_request(identifier.unwrap_or_default(), config, &runtime, client)
            }
            PrCommands::Create {
                title,
                body,
                base,
                draft,
            } => runtime.block_on(create_pull_request(
                client.as_ref(),
                title,
                body,
                base.unwrap_or_default(),
                draft,
            )),
            PrCommands::View { identifier } => {
                let identifier = identifier.unwrap_or_default();
                runtime.block_on(client.view_pull_request(&identifier))?;
                Ok(0)
            }
        },
    }
}

/// Report a failed `gh auth status` to the user
async fn is_authenticated(client: &dyn GitHubClient) -> bool {
    match client.auth_status().await {
        Ok(()) => true,
        Err(e) => {
            log::error!("Not authenticated with gh: {:#}", e);
            eprintln!("error: not authenticated with gh: {:#}", e);
            false
        }
    }
}

/// Create a pull request for the current branch, returns the process exit code
async fn create_pull_request(
    client: &dyn GitHubClient,
    title: Option<String>,
    body: String,
    base: String,
    draft: bool,
) -> Result<i32> {
    if !is_authenticated(client).await {
        return Ok(1);
    }

    let branch = utils::branch::current_branch().await?;
    let title = match title {
        Some(title) => title,
        None => utils::branch::title_from_branch(&branch),
    };
    if title.is_empty() {
        eprintln!(
            "error: no title given and branch {:?} has no ticket key, use --title",
            branch
        );
        return Ok(1);
    }

    println!("Creating pull request {:?} from {}", title, branch);
    let url = client
        .create_pull_request(&title, &body, &base, draft)
        .await?;
    println!("{}", url);
    Ok(0)
}

/// Interactive merge session, returns the process exit code
fn merge_pull_request(
    identifier: String,
    config: AppConfig,
    runtime: &Runtime,
    client: Arc<dyn GitHubClient>,
) -> Result<i32> {
    if !runtime.block_on(is_authenticated(client.as_ref())) {
        return Ok(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(identifier, config, Theme::dark()));
    let handle = runtime.handle().clone();

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(StatusMiddleware::new(
        handle.clone(),
        Arc::clone(&client),
    )));
    store.add_middleware(Box::new(MergeMiddleware::new(handle.clone(), client)));
    store.add_middleware(Box::new(TimerMiddleware::new(handle.clone())));
    store.add_middleware(Box::new(BrowserMiddleware::new(handle)));

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    let mut exit = store.state().exit.clone().unwrap_or(SessionExit::UserQuit);
    if let SessionExit::MergeDetached(method) = exit {
        // Out of raw mode a second Ctrl+C ends the process
        eprintln!("waiting for gh to finish the merge, press Ctrl+C to stop waiting");
        exit = match store.await_merge_outcome() {
            Some(MergeAction::Completed) => SessionExit::Merged(method),
            Some(MergeAction::Failed(reason)) => SessionExit::MergeFailed(reason),
            _ => exit,
        };
    }
    log::info!("Session ended: {:?}", exit);
    if exit.is_error() {
        eprintln!("{}", exit);
    } else {
        println!("{}", exit);
    }
    Ok(exit.exit_code())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize(size.width, size.height)));
    store.dispatch(Action::Status(StatusAction::Poll));

    let mut last_tick = Instant::now();
    loop {
        // Pick up results of background tasks and timers
        store.drain();

        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if store.state().is_terminated() {
            break;
        }

        // Handle events
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(width, height) => {
                    store.dispatch(Action::Global(GlobalAction::Resize(width, height)));
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            store.dispatch(Action::Global(GlobalAction::Tick));
            last_tick = Instant::now();
        }
    }

    Ok(())
}
