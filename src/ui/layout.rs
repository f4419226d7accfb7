use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct InputLayout {
    pub header_area: Rect,
    pub editor_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct CardLayout {
    pub header_area: Rect,
    pub card_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_input_chunks(area: Rect) -> InputLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    InputLayout {
        header_area: chunks[0],
        editor_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_card_chunks(area: Rect) -> CardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    CardLayout {
        header_area: chunks[0],
        card_area: chunks[1],
        help_area: chunks[2],
    }
}

/// The card itself, centered within the card area.
pub fn card_rect(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    horizontal[1]
}
