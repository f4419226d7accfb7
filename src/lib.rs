pub mod deck;
pub mod logger;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use deck::shuffled;
pub use models::{AppState, DrawSession, InputState};
pub use session::{handle_draw_keys, handle_input_keys};
pub use store::{parse_questions, FileStore, MemoryStore, QuestionStore};
pub use ui::{draw_card, draw_input};
pub use utils::{truncate_string, wrapped_cursor_position};
