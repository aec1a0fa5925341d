use crate::ui::components::input::TextInput;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block(field_title: &str, focused: bool, theme: &Theme) -> Block<'static> {
    let border_color = if focused { theme.palette.primary } else { theme.palette.border };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(theme.palette.text))
        .border_style(Style::default().fg(border_color))
}

/// Creates an input field block; the focused field shows a block cursor
pub fn create_input_paragraph(input: &TextInput, field_title: &str, focused: bool, theme: &Theme) -> Paragraph<'static> {
    let text_style = Style::default().fg(theme.palette.text);
    let line = if focused {
        let (before, after) = input.split_at_cursor();
        Line::from(vec![
            Span::styled(before.to_string(), text_style),
            Span::styled("█", Style::default().fg(theme.palette.primary)),
            Span::styled(after.to_string(), text_style),
        ])
    } else {
        Line::from(Span::styled(input.value().to_string(), text_style))
    };

    Paragraph::new(line).block(field_block(field_title, focused, theme))
}

/// Creates a selector field (`◀ value ▶` when focused)
pub fn create_selection_paragraph(
    value: &str,
    value_color: Color,
    field_title: &str,
    focused: bool,
    theme: &Theme,
) -> Paragraph<'static> {
    let value_span = Span::styled(
        value.to_string(),
        Style::default().fg(value_color).add_modifier(Modifier::BOLD),
    );
    let line = if focused {
        let arrow_style = Style::default().fg(theme.palette.primary);
        Line::from(vec![
            Span::styled("◀ ", arrow_style),
            value_span,
            Span::styled(" ▶", arrow_style),
        ])
    } else {
        Line::from(value_span)
    };

    Paragraph::new(line).block(field_block(field_title, focused, theme))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter/y", Color::Green, " Confirm");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_NO: InstructionShortcut = ("Esc/n", Color::Red, " Cancel");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CHANGE: InstructionShortcut = ("←/→", Color::Cyan, " Change");
}
