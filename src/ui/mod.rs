pub mod layout;
mod card;
mod input;

pub use card::draw_card;
pub use input::draw_input;
pub use layout::{calculate_card_chunks, calculate_input_chunks, card_rect};
