#[derive(Debug, PartialEq)]
pub enum AppState {
    Input,
    Draw,
}

/// State of the question entry screen.
#[derive(Debug, Default)]
pub struct InputState {
    pub buffer: String,
    /// Byte index into `buffer`, always on a char boundary.
    pub cursor_position: usize,
    pub scroll_y: u16,
    pub error: Option<String>,
}

impl InputState {
    pub fn from_questions(questions: &[String]) -> Self {
        let buffer = questions.join("\n");
        let cursor_position = buffer.len();
        Self {
            buffer,
            cursor_position,
            scroll_y: 0,
            error: None,
        }
    }
}

/// One shuffle pass over the question list. Created by `DrawSession::start`,
/// discarded when the user goes back to editing.
#[derive(Debug)]
pub struct DrawSession {
    pub questions: Vec<String>,
    pub pool: Vec<String>,
    pub current: Option<String>,
}
