use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::api::TaskPriority;
use crate::ui::theme::Theme;
use crate::utils::datetime::format_human_datetime;
use chrono::NaiveDateTime;

/// Priority pill, e.g. ` High `, on the priority color
#[must_use]
pub fn create_priority_badge(priority: TaskPriority, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} {} ", theme.icons.priority(priority), priority.label()),
        Style::default()
            .fg(Color::White)
            .bg(theme.priority_color(priority))
            .add_modifier(Modifier::BOLD),
    )
}

/// Due date rendered relative to `now`; red when overdue
#[must_use]
pub fn create_due_badge(due: NaiveDateTime, now: NaiveDateTime, overdue: bool, theme: &Theme) -> Span<'static> {
    let text = format_human_datetime(due, now, &theme.date_format, &theme.time_format);
    let color = if overdue { theme.palette.error } else { theme.palette.muted };

    let mut style = Style::default().fg(color);
    if overdue {
        style = style.add_modifier(Modifier::BOLD);
    }

    Span::styled(format!("{} {}", theme.icons.due_date(overdue), text), style)
}
