use super::actions::Action;
use super::task_manager::TaskManager;
use crate::ui::theme::Theme;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume the actions this component owns, spawning background work on
    /// `tasks` as needed, and pass everything else through.
    fn update(&mut self, action: Action, _tasks: &mut TaskManager) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme);
}
