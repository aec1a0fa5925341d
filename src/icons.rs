//! Icon sets for the three supported terminal capabilities.
//!
//! Every glyph the UI draws comes from here, so switching `display.icon_theme`
//! swaps them all at once.

use crate::api::{TaskPriority, TaskStatus};
use crate::ui::components::toast::ToastKind;
use serde::{Deserialize, Serialize};

/// Value of `display.icon_theme` in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Needs a font with colour emoji
    Emoji,
    /// Plain Unicode symbols, single-width in most fonts
    #[default]
    Unicode,
    /// For terminals without Unicode support
    Ascii,
}

/// One glyph per thing the UI marks
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    pub open: &'static str,
    pub closed: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub app: &'static str,
    pub task_list: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub due: &'static str,
    pub overdue: &'static str,
    pub busy: &'static str,
}

const EMOJI: IconSet = IconSet {
    open: "🔳",
    closed: "✅",
    high: "🔴",
    medium: "🟡",
    low: "🟢",
    app: "✨",
    task_list: "📋",
    error: "❌",
    info: "💡",
    warning: "⚠️",
    success: "✅",
    due: "📅",
    overdue: "⏰",
    busy: "🔄",
};

const UNICODE: IconSet = IconSet {
    open: "○",
    closed: "●",
    high: "▲",
    medium: "◆",
    low: "▼",
    app: "✦",
    task_list: "▤",
    error: "✗",
    info: "ⓘ",
    warning: "⚠",
    success: "✓",
    due: "◷",
    overdue: "◷!",
    busy: "⟳",
};

const ASCII: IconSet = IconSet {
    open: "[ ]",
    closed: "[x]",
    high: "!!!",
    medium: "!!",
    low: "!",
    app: "*",
    task_list: "#",
    error: "X",
    info: "i",
    warning: "!",
    success: "+",
    due: "@",
    overdue: "@!",
    busy: "...",
};

/// Looks up glyphs for the configured [`IconTheme`]
#[derive(Debug, Clone, Default)]
pub struct IconService {
    theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.theme
    }

    #[must_use]
    pub fn icons(&self) -> &'static IconSet {
        match self.theme {
            IconTheme::Emoji => &EMOJI,
            IconTheme::Unicode => &UNICODE,
            IconTheme::Ascii => &ASCII,
        }
    }

    #[must_use]
    pub fn task_status(&self, status: TaskStatus) -> &'static str {
        match status {
            TaskStatus::Open => self.icons().open,
            TaskStatus::Closed => self.icons().closed,
        }
    }

    #[must_use]
    pub fn priority(&self, priority: TaskPriority) -> &'static str {
        match priority {
            TaskPriority::High => self.icons().high,
            TaskPriority::Medium => self.icons().medium,
            TaskPriority::Low => self.icons().low,
        }
    }

    #[must_use]
    pub fn toast(&self, kind: ToastKind) -> &'static str {
        match kind {
            ToastKind::Success => self.success(),
            ToastKind::Error => self.error(),
            ToastKind::Info => self.info(),
        }
    }

    #[must_use]
    pub fn app(&self) -> &'static str {
        self.icons().app
    }

    #[must_use]
    pub fn task_list(&self) -> &'static str {
        self.icons().task_list
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().success
    }

    /// Calendar glyph, or the alarm variant once the due date has passed
    #[must_use]
    pub fn due_date(&self, overdue: bool) -> &'static str {
        if overdue {
            self.icons().overdue
        } else {
            self.icons().due
        }
    }

    #[must_use]
    pub fn busy(&self) -> &'static str {
        self.icons().busy
    }
}
