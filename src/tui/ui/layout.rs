use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Area inside a one-cell border; collapses to nothing on tiny terminals.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let band = |direction: Direction, percent: u16, area: Rect| {
        Layout::default()
            .direction(direction)
            .constraints([
                Constraint::Percentage((100 - percent) / 2),
                Constraint::Percentage(percent),
                Constraint::Percentage((100 - percent) / 2),
            ])
            .split(area)[1]
    };
    band(Direction::Horizontal, percent_x, band(Direction::Vertical, percent_y, r))
}
