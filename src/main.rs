use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use question_cards::{
    draw_card, draw_input, handle_draw_keys, handle_input_keys, logger, AppState, DrawSession,
    FileStore, InputState, QuestionStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    logger::init();

    let mut store = FileStore::new();
    let mut questions = store.load();
    let mut input = InputState::from_questions(&questions);
    let mut draw_session: Option<DrawSession> = None;
    let mut app_state = AppState::Input;
    let mut rng = rand::thread_rng();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Input => draw_input(f, &mut input, questions.len()),
            AppState::Draw => {
                if let Some(session) = &draw_session {
                    draw_card(f, session);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            match app_state {
                AppState::Input => match key.code {
                    KeyCode::Esc => break,
                    _ => handle_input_keys(
                        &mut input,
                        &mut questions,
                        &mut draw_session,
                        &mut store,
                        &mut rng,
                        &mut app_state,
                        key,
                    ),
                },
                AppState::Draw => match key.code {
                    KeyCode::Char('q') => break,
                    _ => handle_draw_keys(
                        &mut draw_session,
                        &mut input,
                        &questions,
                        &mut rng,
                        &mut app_state,
                        key,
                    ),
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
