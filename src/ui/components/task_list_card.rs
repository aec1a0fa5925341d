//! Dashboard card for one task list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::api::TaskList;
use crate::constants::NO_DESCRIPTION;
use crate::ui::components::progress::render_progress;
use crate::ui::theme::Theme;

/// `1 Task` / `N Tasks`
#[must_use]
pub fn task_count_label(count: u32) -> String {
    if count == 1 {
        "1 Task".to_string()
    } else {
        format!("{} Tasks", count)
    }
}

pub fn render_task_list_card(f: &mut Frame, area: Rect, task_list: &TaskList, selected: bool, theme: &Theme) {
    let border_color = if selected { theme.palette.primary } else { theme.palette.border };
    let border_type = if selected { BorderType::Thick } else { BorderType::Rounded };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} {} ", theme.icons.task_list(), task_list.title))
        .title_style(Style::default().fg(theme.palette.text).add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let [description_area, progress_area, count_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    if theme.show_descriptions {
        let description = match task_list.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => NO_DESCRIPTION,
        };
        f.render_widget(
            Paragraph::new(Span::styled(description.to_string(), Style::default().fg(theme.palette.muted))),
            description_area,
        );
    }

    render_progress(f, progress_area, "Progress", task_list.progress(), theme);

    f.render_widget(
        Paragraph::new(Span::styled(
            task_count_label(task_list.task_count()),
            Style::default().fg(theme.palette.text),
        )),
        count_area,
    );
}
