use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::APP_TITLE;
use crate::ui::routes::Route;
use crate::ui::theme::Theme;

/// One-line header: app title and the current route
pub fn render_header(f: &mut Frame, area: Rect, route: &Route, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} {} ", theme.icons.app(), APP_TITLE),
            Style::default().fg(theme.palette.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(route.path(), Style::default().fg(theme.palette.muted)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
