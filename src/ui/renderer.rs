//! Terminal setup and the main event loop

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::api::HttpClient;
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app::AppComponent;
use crate::ui::core::{EventHandler, EventType};
use crate::ui::routes::Route;
use crate::ui::theme::Theme;

/// Run the TUI against the configured backend, starting at `route`
pub async fn run_app(config: &Config, logger: Logger, route: Route) -> Result<()> {
    let client = HttpClient::new(&config.api.base_url).context("Failed to create API client")?;
    log::info!("Using API at {}", client.base_url());
    let theme = Theme::install(Theme::from_config(&config.display));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(Arc::new(client), config, logger);
    app.navigate(route);

    let mut event_handler = EventHandler::default();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler, theme).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
    theme: &Theme,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area, theme);
            })?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                let had_toasts = !app.toasts().is_empty();
                let processed = app.process_background_actions();
                // Redraw for results, for the busy indicator and when toasts expire
                needs_render = processed > 0 || app.is_busy() || had_toasts;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
