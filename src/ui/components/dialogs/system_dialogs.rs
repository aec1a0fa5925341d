use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
TASKAZ - Task lists in your terminal
====================================

DASHBOARD
---------
←↓↑→ / hjkl  Move between task list cards
Enter        Open the selected task list
n            Create a new task list
d            Delete the selected task list (with confirmation)
r            Refresh

TASK LIST DETAILS
-----------------
j/k          Navigate tasks (down/up)
Space        Toggle task open/closed
n            Create a new task
e            Edit the selected task
d            Delete the selected task (with confirmation)
E            Edit the task list's title and description
r            Refresh
Esc          Back to the dashboard

FORMS
-----
Tab/Shift+Tab  Next/previous field
←/→            Change priority or status
Enter          Save
Esc            Cancel

GENERAL
-------
?            Toggle this help
G            Show logs
q / Ctrl+C   Quit

Progress bars turn green at 100%, indigo from 50% and amber below.
";

pub fn render_confirm_dialog(f: &mut Frame, area: Rect, theme: &Theme, prompt: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} Confirm ", theme.icons.warning()), theme.palette.error);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(inner);

    let message = Paragraph::new(prompt.to_string())
        .style(Style::default().fg(theme.palette.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(message, chunks[0]);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_NO]),
        chunks[1],
    );
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_scrollable_text(f, area, HELP_CONTENT, DIALOG_TITLE_HELP, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();

    let logs_content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_text(f, area, &logs_content, DIALOG_TITLE_LOGS, scroll_offset, scrollbar_state);
}

fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    content: &str,
    title: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = dialog_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, dialog_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, dialog_area, scrollbar_state);
    }
}
