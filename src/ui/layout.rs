use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical regions of the converter screen.
pub struct ScreenRegions {
    pub header: Rect,
    pub form: Rect,
    pub summary: Rect,
    pub history: Rect,
    pub footer: Rect,
}

pub fn screen_regions(area: Rect) -> ScreenRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenRegions {
        header: chunks[0],
        form: chunks[1],
        summary: chunks[2],
        history: chunks[3],
        footer: chunks[4],
    }
}

/// Splits the form row into amount, origin, destination and button cells.
pub fn form_cells(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(27),
            Constraint::Percentage(27),
            Constraint::Percentage(16),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// A rect of at most `width` x `height`, centered inside `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
