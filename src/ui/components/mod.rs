//! Reusable widgets for the terminal UI.

pub mod input;
pub mod prompt;
pub mod result_card;

pub use input::SearchInput;
pub use prompt::{InputContext, LoadingState, render_input_row};
pub use result_card::{ResultView, render_result};
