use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// The regions that make up the TUI layout.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub status_bar: Rect,
    pub conversations_pane: Rect,
    pub input_pane: Rect,
    pub error_bar: Rect,
}

impl AppLayout {
    /// Calculate layout regions from a `Rect` (terminal area).
    pub fn compute(area: Rect, error_visible: bool) -> Self {
        let status_height = 1u16;
        let input_height = 5u16;
        let error_height = if error_visible { 1u16 } else { 0u16 };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(status_height),
                Constraint::Min(10),
                Constraint::Length(input_height),
                Constraint::Length(error_height),
            ])
            .split(area);

        AppLayout {
            status_bar: vertical[0],
            conversations_pane: vertical[1],
            input_pane: vertical[2],
            error_bar: vertical[3],
        }
    }

    /// Convenience wrapper — derive the area from the current frame.
    pub fn new(frame: &Frame, error_visible: bool) -> Self {
        Self::compute(frame.area(), error_visible)
    }

    /// The number of text rows visible inside the conversations pane's border.
    /// (pane height minus the two border rows)
    pub fn conversations_inner_height(&self) -> u16 {
        self.conversations_pane.height.saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_bar_collapses_when_hidden() {
        let area = Rect::new(0, 0, 80, 24);
        let without = AppLayout::compute(area, false);
        assert_eq!(without.error_bar.height, 0);
        let with = AppLayout::compute(area, true);
        assert_eq!(with.error_bar.height, 1);
        assert!(with.conversations_pane.height < without.conversations_pane.height);
    }

    #[test]
    fn inner_height_subtracts_borders() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), false);
        assert_eq!(
            layout.conversations_inner_height(),
            layout.conversations_pane.height - 2
        );
    }
}
