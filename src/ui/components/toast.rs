//! Short-lived notifications stacked in the bottom-right corner.

use crate::constants::TOAST_MAX_VISIBLE;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

/// Holds active toasts and drops them once their lifetime has passed.
pub struct ToastHost {
    toasts: VecDeque<(Toast, Instant)>,
    lifetime: Duration,
}

impl ToastHost {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.push_at(toast, Instant::now());
    }

    pub fn push_at(&mut self, toast: Toast, now: Instant) {
        if self.toasts.len() >= TOAST_MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back((toast, now + self.lifetime));
    }

    /// Drop expired toasts; returns how many were removed
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|(_, expires_at)| *expires_at > now);
        before - self.toasts.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().map(|(toast, _)| toast)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut bottom = area.y + area.height;

        for toast in self.visible().collect::<Vec<_>>().into_iter().rev() {
            let text = format!(" {} {} ", theme.icons.toast(toast.kind), toast.message);
            let width = (text.chars().count() as u16 + 2).min(area.width);
            let height = 3;
            if bottom < area.y + height {
                break;
            }
            bottom -= height;

            let toast_area = Rect::new(area.x + area.width - width, bottom, width, height);
            let color = theme.toast_color(toast.kind);
            let paragraph = Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );

            f.render_widget(Clear, toast_area);
            f.render_widget(paragraph, toast_area);
        }
    }
}
