use crate::models::DrawSession;
use crate::ui::layout::{calculate_card_chunks, card_rect};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_card(f: &mut Frame, session: &DrawSession) {
    let layout = calculate_card_chunks(f.area());

    let progress = format!(
        "Remaining: {} / {}",
        session.remaining_in_pass(),
        session.total()
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let card_content = match &session.current {
        Some(question) => {
            let mut text = Text::default();
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                question.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            text
        }
        None => {
            let mut text = Text::default();
            text.push_line(Line::from(""));
            text.push_line(Line::from("🎴"));
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                "Press Space to draw a question",
                Style::default().fg(Color::DarkGray),
            )));
            text
        }
    };

    let card = Paragraph::new(card_content)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, card_rect(layout.card_area));

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Space/Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Draw  "),
        Span::styled(
            "e/Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Edit Questions  "),
        Span::styled(
            "q",
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
