use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{LineGauge, Paragraph},
    Frame,
};

use crate::api::Progress;
use crate::ui::theme::Theme;

/// `label ... NN%` on one line and a colored gauge on the next.
/// Needs a two-line area; a one-line area gets the gauge only.
pub fn render_progress(f: &mut Frame, area: Rect, label: &str, progress: Progress, theme: &Theme) {
    let color = theme.progress_color(progress.tier());

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(color))
        .unfilled_style(Style::default().fg(theme.palette.border))
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(progress.ratio());

    if area.height < 2 {
        f.render_widget(gauge, area);
        return;
    }

    let [label_area, gauge_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    let [name_area, percent_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(6)]).areas(label_area);

    f.render_widget(
        Paragraph::new(Span::styled(label.to_string(), Style::default().fg(theme.palette.muted))),
        name_area,
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{}%", progress.percent()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(ratatui::layout::Alignment::Right),
        percent_area,
    );
    f.render_widget(gauge, gauge_area);
}
