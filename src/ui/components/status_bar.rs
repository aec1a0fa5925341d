//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::routes::Route;
use crate::ui::theme::Theme;

const DASHBOARD_HINTS: &str = "←↓↑→: move • Enter: open • n: new list • d: delete • r: refresh • ?: help • q: quit";
const TASK_LIST_HINTS: &str =
    "j/k: move • Space: toggle • n: new • e: edit • d: delete • E: edit list • Esc: back • ?: help • q: quit";

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Key hints for the current page, replaced by a busy line while
    /// background requests are in flight
    #[must_use]
    pub fn status_text(route: &Route, busy_icon: Option<&str>) -> String {
        match busy_icon {
            Some(icon) => format!("{} Working...", icon),
            None => match route {
                Route::Dashboard => DASHBOARD_HINTS.to_string(),
                Route::TaskList(_) => TASK_LIST_HINTS.to_string(),
            },
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, route: &Route, busy: bool, theme: &Theme) {
        let busy_icon = busy.then(|| theme.icons.busy());
        let status_color = if busy { theme.palette.warning } else { theme.palette.muted };

        let status_bar = Paragraph::new(Self::status_text(route, busy_icon))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
