use crate::models::{AppState, DrawSession, InputState};
use crate::store::{parse_questions, QuestionStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

const EMPTY_INPUT_MESSAGE: &str = "Enter at least one question.";

/// Byte index where the char before `cursor` starts, if any.
fn prev_char_start(buffer: &str, cursor: usize) -> Option<usize> {
    buffer[..cursor].char_indices().next_back().map(|(idx, _)| idx)
}

pub fn handle_input_keys<S: QuestionStore, R: Rng>(
    input: &mut InputState,
    questions: &mut Vec<String>,
    session: &mut Option<DrawSession>,
    store: &mut S,
    rng: &mut R,
    app_state: &mut AppState,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let parsed = parse_questions(&input.buffer);
            if parsed.is_empty() {
                input.error = Some(EMPTY_INPUT_MESSAGE.to_string());
                return;
            }
            *questions = parsed;
            store.save(questions);
            *session = Some(DrawSession::start(questions.clone(), rng));
            input.error = None;
            *app_state = AppState::Draw;
        }
        KeyCode::Enter => {
            input.error = None;
            input.buffer.insert(input.cursor_position, '\n');
            input.cursor_position += 1;
        }
        KeyCode::Backspace => {
            if let Some(prev) = prev_char_start(&input.buffer, input.cursor_position) {
                input.buffer.remove(prev);
                input.cursor_position = prev;
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_char_start(&input.buffer, input.cursor_position) {
                input.cursor_position = prev;
            }
        }
        KeyCode::Right => {
            if let Some(ch) = input.buffer[input.cursor_position..].chars().next() {
                input.cursor_position += ch.len_utf8();
            }
        }
        KeyCode::Char(c) => {
            input.error = None;
            input.buffer.insert(input.cursor_position, c);
            input.cursor_position += c.len_utf8();
        }
        _ => {}
    }
}

pub fn handle_draw_keys<R: Rng>(
    session: &mut Option<DrawSession>,
    input: &mut InputState,
    questions: &[String],
    rng: &mut R,
    app_state: &mut AppState,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(active) = session.as_mut() {
                active.draw_next(rng);
            }
        }
        KeyCode::Char('e') | KeyCode::Esc => {
            *session = None;
            *input = InputState::from_questions(questions);
            *app_state = AppState::Input;
        }
        _ => {}
    }
}
