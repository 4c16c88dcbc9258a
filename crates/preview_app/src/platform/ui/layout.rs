use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub input: Rect,
    pub status: Rect,
    pub response: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn split(area: Rect) -> Self {
        let [input, status, response, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            input,
            status,
            response,
            footer,
        }
    }
}
