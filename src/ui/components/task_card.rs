//! List entry for one task on the details page.

use chrono::NaiveDateTime;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::api::Task;
use crate::constants::NO_DESCRIPTION;
use crate::ui::components::badge::{create_due_badge, create_priority_badge};
use crate::ui::theme::Theme;
use crate::utils::datetime::is_overdue;

/// Overdue only matters while the task is still open
#[must_use]
pub fn is_task_overdue(task: &Task, now: NaiveDateTime) -> bool {
    !task.status.is_closed() && task.due_date.is_some_and(|due| is_overdue(due, now))
}

#[must_use]
pub fn task_lines(task: &Task, now: NaiveDateTime, theme: &Theme) -> Vec<Line<'static>> {
    let closed = task.status.is_closed();

    let status_color = if closed { theme.palette.success } else { theme.palette.muted };
    let mut title_style = Style::default().fg(theme.palette.text).add_modifier(Modifier::BOLD);
    if closed {
        title_style = Style::default()
            .fg(theme.palette.muted)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", theme.icons.task_status(task.status)),
            Style::default().fg(status_color),
        ),
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        create_priority_badge(task.priority, theme),
    ])];

    if theme.show_descriptions {
        let description = match task.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => NO_DESCRIPTION,
        };
        lines.push(Line::from(Span::styled(
            format!("   {}", description),
            Style::default().fg(theme.palette.muted),
        )));
    }

    if let Some(due) = task.due_date {
        lines.push(Line::from(vec![
            Span::raw("   "),
            create_due_badge(due, now, is_task_overdue(task, now), theme),
        ]));
    }

    lines
}

#[must_use]
pub fn task_list_item(task: &Task, now: NaiveDateTime, theme: &Theme) -> ListItem<'static> {
    let mut lines = task_lines(task, now, theme);
    lines.push(Line::default());
    ListItem::new(lines)
}
