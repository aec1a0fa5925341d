use super::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, shortcuts,
};
use crate::ui::components::forms::{TaskField, TaskForm, TaskListField, TaskListForm};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Clear, Paragraph},
    Frame,
};

fn render_error_line(f: &mut Frame, area: Rect, error: Option<&str>, theme: &Theme) {
    if let Some(error) = error {
        let paragraph = Paragraph::new(format!("{} {}", theme.icons.warning(), error))
            .style(Style::default().fg(theme.palette.error));
        f.render_widget(paragraph, area);
    }
}

pub fn render_task_list_form_dialog(f: &mut Frame, area: Rect, theme: &Theme, form: &TaskListForm, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 11, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} {} ", theme.icons.task_list(), title), theme.palette.primary);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    f.render_widget(
        create_input_paragraph(&form.title, "Title", form.focus == TaskListField::Title, theme),
        chunks[0],
    );
    f.render_widget(
        create_input_paragraph(
            &form.description,
            "Description (optional)",
            form.focus == TaskListField::Description,
            theme,
        ),
        chunks[1],
    );
    render_error_line(f, chunks[2], form.error.as_deref(), theme);

    let submit = if form.can_submit() {
        shortcuts::ENTER_SAVE
    } else {
        ("Enter", theme.palette.muted, " Save (title required)")
    };
    f.render_widget(
        create_instructions_paragraph(&[
            submit,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        chunks[3],
    );
}

pub fn render_task_form_dialog(f: &mut Frame, area: Rect, theme: &Theme, form: &TaskForm, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 19, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} ", title), theme.palette.primary);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    f.render_widget(
        create_input_paragraph(&form.title, "Title", form.focus == TaskField::Title, theme),
        chunks[0],
    );
    f.render_widget(
        create_input_paragraph(
            &form.description,
            "Description (optional)",
            form.focus == TaskField::Description,
            theme,
        ),
        chunks[1],
    );
    f.render_widget(
        create_input_paragraph(
            &form.due_date,
            "Due date (YYYY-MM-DD HH:MM, optional)",
            form.focus == TaskField::DueDate,
            theme,
        ),
        chunks[2],
    );
    f.render_widget(
        create_selection_paragraph(
            &format!("{} {}", theme.icons.priority(form.priority), form.priority.label()),
            theme.priority_color(form.priority),
            "Priority",
            form.focus == TaskField::Priority,
            theme,
        ),
        chunks[3],
    );
    f.render_widget(
        create_selection_paragraph(
            &format!("{} {}", theme.icons.task_status(form.status), form.status.label()),
            theme.palette.text,
            "Status",
            form.focus == TaskField::Status,
            theme,
        ),
        chunks[4],
    );
    render_error_line(f, chunks[5], form.error.as_deref(), theme);

    let submit = if form.can_submit() {
        shortcuts::ENTER_SAVE
    } else {
        ("Enter", theme.palette.muted, " Save (title required)")
    };
    f.render_widget(
        create_instructions_paragraph(&[
            submit,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_CHANGE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        chunks[6],
    );
}
