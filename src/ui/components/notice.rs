//! Placeholders shown in place of page content: loading, empty, error banner.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Theme;

/// Single-line error banner with the error icon
pub fn render_banner(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let banner = Paragraph::new(Line::from(vec![
        Span::raw(format!(" {} ", theme.icons.error())),
        Span::styled(message.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .style(Style::default().fg(theme.palette.error));

    f.render_widget(banner, area);
}

/// Centered muted text, e.g. the loading placeholder
pub fn render_placeholder(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let [_, middle, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    f.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(theme.palette.muted))
            .alignment(Alignment::Center),
        middle,
    );
}

/// Boxed call-to-action for an empty collection
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, hint: &str, action: &str, theme: &Theme) {
    let [_, middle, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(7), Constraint::Fill(1)]).areas(area);
    let [_, boxed, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(70),
        Constraint::Fill(1),
    ])
    .areas(middle);

    let text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(theme.palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(theme.palette.muted))),
        Line::default(),
        Line::from(Span::styled(
            action.to_string(),
            Style::default().fg(theme.palette.primary).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.palette.border)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, boxed);
}
