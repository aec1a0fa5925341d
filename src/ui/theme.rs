//! Process-wide theme: palette, icon set and display preferences.
//!
//! Installed once at startup from the `[display]` config section and passed by
//! reference into every render call; never mutated afterwards.

use crate::api::{ProgressTier, TaskPriority};
use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::ui::components::toast::ToastKind;
use once_cell::sync::OnceCell;
use ratatui::style::Color;

static THEME: OnceCell<Theme> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(99, 102, 241),
            secondary: Color::Rgb(139, 92, 246),
            success: Color::Rgb(16, 185, 129),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(220, 38, 38),
            text: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: IconService,
    pub date_format: String,
    pub time_format: String,
    pub show_descriptions: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl Theme {
    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            palette: Palette::default(),
            icons: IconService::new(display.icon_theme),
            date_format: display.date_format.clone(),
            time_format: display.time_format.clone(),
            show_descriptions: display.show_descriptions,
        }
    }

    /// Install the process-wide theme. Only the first call takes effect.
    pub fn install(theme: Theme) -> &'static Theme {
        let mut theme = Some(theme);
        let installed = THEME.get_or_init(|| theme.take().unwrap_or_default());
        if theme.is_some() {
            log::debug!("Theme: already installed, keeping the existing one");
        }
        installed
    }

    /// The installed theme, or the default one if none was installed
    pub fn global() -> &'static Theme {
        THEME.get_or_init(Theme::default)
    }

    #[must_use]
    pub fn progress_color(&self, tier: ProgressTier) -> Color {
        match tier {
            ProgressTier::Complete => self.palette.success,
            ProgressTier::Good => self.palette.primary,
            ProgressTier::Low => self.palette.warning,
        }
    }

    #[must_use]
    pub fn priority_color(&self, priority: TaskPriority) -> Color {
        match priority {
            TaskPriority::High => Color::Rgb(220, 38, 38),
            TaskPriority::Medium => Color::Rgb(217, 119, 6),
            TaskPriority::Low => Color::Rgb(5, 150, 105),
        }
    }

    #[must_use]
    pub fn toast_color(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => self.palette.success,
            ToastKind::Error => self.palette.error,
            ToastKind::Info => self.palette.primary,
        }
    }
}
