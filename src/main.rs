use lens::adapters::ReqwestHttpClient;
use lens::api::LensClient;
use lens::app::{App, AppMessage};
use lens::cli::{parse_args, run_cli_command};
use lens::startup::{init_default_logging, DashboardConfig};
use lens::terminal::{setup_panic_hook, TerminalManager};
use lens::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main loop tick; drives the spinner and cache garbage collection
const TICK: std::time::Duration = std::time::Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle CLI flags before any initialization
    let api_url_override = match run_cli_command(parse_args(std::env::args())) {
        Ok(api_url) => api_url,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    init_default_logging();

    let mut config = DashboardConfig::from_env();
    if let Some(url) = api_url_override {
        config = config.with_api_url(url);
    }
    tracing::info!("Starting lens {} with {:?}", lens::cli::VERSION, config);

    let runtime = tokio::runtime::Runtime::new()?;

    let http = ReqwestHttpClient::with_timeout(config.request_timeout);
    let client = LensClient::with_base_url(config.api_url.clone(), Arc::new(http));
    let mut app = App::new(client, config.query_config());

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        app.mount();
        run_app(term_manager.terminal(), &mut app).await
    });
    term_manager.restore();

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        app.handle_key_event(key);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse_event(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
