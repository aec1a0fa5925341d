//! Layout management and calculations

use crate::constants::{CARD_HEIGHT, CARD_MAX_COLUMNS, CARD_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header (1 line), page body and status bar (1 line)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Number of card columns that fit in `width` (1 to 3)
    #[must_use]
    pub fn grid_columns(width: u16) -> usize {
        ((width / CARD_MIN_WIDTH) as usize).clamp(1, CARD_MAX_COLUMNS)
    }

    /// Number of card rows that fit in `height`, at least one
    #[must_use]
    pub fn grid_rows(height: u16) -> usize {
        ((height / CARD_HEIGHT) as usize).max(1)
    }

    /// Cell rectangles for `count` cards laid out row-major in `columns`
    /// columns, starting at row `first_row`. Cards that don't fit are omitted.
    #[must_use]
    pub fn card_grid(area: Rect, columns: usize, count: usize, first_row: usize) -> Vec<Rect> {
        let columns = columns.max(1);
        let visible_rows = Self::grid_rows(area.height);
        let card_width = area.width / columns as u16;

        (0..count)
            .skip(first_row * columns)
            .take(visible_rows * columns)
            .map(|index| {
                let row = (index / columns - first_row) as u16;
                let column = (index % columns) as u16;
                Rect::new(
                    area.x + column * card_width,
                    area.y + row * CARD_HEIGHT,
                    card_width,
                    CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
                )
            })
            .collect()
    }
}
