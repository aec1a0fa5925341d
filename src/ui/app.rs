//! Application shell: routing, the dialog layer, toasts and background work.
//!
//! Keys go to the open dialog first, then to the active page, then to the
//! global bindings. The resulting [`Action`] flows through the dialog, the
//! page and finally [`AppComponent::handle_app_action`]. Results of background
//! requests arrive over the [`TaskManager`] channel and take the same path on
//! the next tick.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use crate::api::Api;
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::components::header::render_header;
use crate::ui::components::{DialogComponent, StatusBar, Toast, ToastHost};
use crate::ui::confirm::{Confirm, DialogConfirm};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component, TaskManager,
};
use crate::ui::layout::LayoutManager;
use crate::ui::pages::{Dashboard, TaskListDetails};
use crate::ui::routes::Route;
use crate::ui::theme::Theme;

/// The page mounted for the current route
pub enum Page {
    Dashboard(Dashboard),
    TaskList(TaskListDetails),
}

impl Page {
    fn component(&mut self) -> &mut dyn Component {
        match self {
            Page::Dashboard(page) => page,
            Page::TaskList(page) => page,
        }
    }
}

pub struct AppComponent {
    api: Arc<dyn Api>,
    confirm: Arc<dyn Confirm>,
    route: Route,
    page: Page,
    dialog: DialogComponent,
    toasts: ToastHost,

    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    /// Shell whose confirmations go through the dialog layer
    pub fn new(api: Arc<dyn Api>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let confirm: Arc<dyn Confirm> = Arc::new(DialogConfirm::new(task_manager.action_sender()));
        Self::assemble(api, confirm, task_manager, background_action_rx, config, logger)
    }

    /// Shell with an injected confirmation capability
    pub fn with_confirm(api: Arc<dyn Api>, confirm: Arc<dyn Confirm>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        Self::assemble(api, confirm, task_manager, background_action_rx, config, logger)
    }

    fn assemble(
        api: Arc<dyn Api>,
        confirm: Arc<dyn Confirm>,
        task_manager: TaskManager,
        background_action_rx: mpsc::UnboundedReceiver<Action>,
        config: &Config,
        logger: Logger,
    ) -> Self {
        let page = Page::Dashboard(Dashboard::new(Arc::clone(&api), Arc::clone(&confirm)));

        Self {
            api,
            confirm,
            route: Route::Dashboard,
            page,
            dialog: DialogComponent::new().with_logger(logger),
            toasts: ToastHost::new(Duration::from_secs(config.ui.toast_seconds)),
            task_manager,
            background_action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.page {
            Page::Dashboard(page) => Some(page),
            Page::TaskList(_) => None,
        }
    }

    pub fn task_list_details(&self) -> Option<&TaskListDetails> {
        match &self.page {
            Page::TaskList(page) => Some(page),
            Page::Dashboard(_) => None,
        }
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn toasts(&self) -> &ToastHost {
        &self.toasts
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.is_busy()
    }

    /// Mount the page for `route` and start its initial fetch.
    /// Pages are never reused, so every navigation fetches fresh data.
    pub fn navigate(&mut self, route: Route) {
        log::info!("Navigation: {} -> {}", self.route, route);
        self.dialog.clear_dialog();

        let api = Arc::clone(&self.api);
        let confirm = Arc::clone(&self.confirm);
        self.page = match route {
            Route::Dashboard => Page::Dashboard(Dashboard::new(api, confirm)),
            Route::TaskList(id) => Page::TaskList(TaskListDetails::new(api, confirm, id)),
        };
        self.route = route;

        match &mut self.page {
            Page::Dashboard(page) => page.mount(&mut self.task_manager),
            Page::TaskList(page) => page.mount(&mut self.task_manager),
        }
    }

    /// Handle global keyboard shortcuts that aren't page-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    /// Route a key to the dialog, the page or the global bindings
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.page.component().handle_key_events(key) {
            Action::None => self.handle_global_key(key),
            action => action,
        }
    }

    /// Run an action through the dialog, the page and the shell
    pub fn handle_action(&mut self, action: Action) {
        if matches!(action, Action::None) {
            return;
        }

        let action = self.dialog.update(action, &mut self.task_manager);
        let action = self.page.component().update(action, &mut self.task_manager);
        self.handle_app_action(action);
    }

    /// Handle whatever neither the dialog nor the page consumed
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Navigate(route) => self.navigate(route),
            Action::Notify(toast) => self.toasts.push(toast),
            // Succeeded for a route that is no longer shown; still worth telling
            Action::MutationSucceeded { message, .. } => self.toasts.push(Toast::success(message)),
            Action::MutationFailed(message) => self.toasts.push(Toast::error(message)),
            other => log::debug!("App: dropping unhandled action {:?}", other),
        }
    }

    /// Drain results from background tasks and expire old toasts.
    /// Returns the number of actions processed.
    pub fn process_background_actions(&mut self) -> usize {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let count = actions.len();
        for action in actions {
            self.handle_action(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if finished > 0 {
            log::debug!("Background: cleaned up {} finished tasks", finished);
        }
        self.toasts.prune(Instant::now());

        count
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key(key);
                self.handle_action(action);
            }
            EventType::Tick => {
                self.process_background_actions();
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let chunks = LayoutManager::main_layout(rect);

        render_header(f, chunks[0], &self.route, theme);
        self.page.component().render(f, chunks[1], theme);
        StatusBar::render(f, chunks[2], &self.route, self.is_busy(), theme);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect, theme);
        }
        self.toasts.render(f, rect, theme);
    }
}
