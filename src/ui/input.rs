use crate::models::InputState;
use crate::ui::layout::calculate_input_chunks;
use crate::utils::wrapped_cursor_position;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_input(f: &mut Frame, input: &mut InputState, saved_count: usize) {
    let layout = calculate_input_chunks(f.area());

    let title = Paragraph::new("Question Cards v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let editor_text = if input.buffer.is_empty() {
        Text::from("[One question per line, commas work too...]")
    } else {
        Text::from(input.buffer.as_str())
    };

    // Cursor-follow scrolling so the cursor line stays visible while typing.
    let visible_height = layout.editor_area.height.saturating_sub(2) as usize;
    let text_width = layout.editor_area.width.saturating_sub(2) as usize;
    let (cursor_line, cursor_col) =
        wrapped_cursor_position(&input.buffer, input.cursor_position, text_width);

    let mut scroll = input.scroll_y as usize;
    if cursor_line < scroll {
        scroll = cursor_line;
    } else if visible_height > 0 && cursor_line >= scroll + visible_height {
        scroll = cursor_line - visible_height + 1;
    }
    input.scroll_y = scroll as u16;

    let editor = Paragraph::new(editor_text)
        .wrap(Wrap { trim: true })
        .scroll((input.scroll_y, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Questions (one per line, or comma separated)"),
        );
    f.render_widget(editor, layout.editor_area);

    let cursor_x = layout.editor_area.x + 1 + cursor_col as u16;
    let cursor_y = layout.editor_area.y + 1 + (cursor_line as u16).saturating_sub(input.scroll_y);
    f.set_cursor_position((cursor_x, cursor_y));

    let status = if let Some(error) = &input.error {
        Paragraph::new(error.as_str()).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else if saved_count > 0 {
        Paragraph::new(format!("{} saved questions (auto-saved)", saved_count)).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Paragraph::new("Type questions, then press Ctrl+S to start.")
            .style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(status.alignment(Alignment::Center), layout.status_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Ctrl+S",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" New Line  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
