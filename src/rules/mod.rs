//! Game rules as pure functions over a borrowed strip.
//!
//! - `board`: initial layout generation
//! - `validator`: move legality and destinations
//! - `terminal`: end-of-game detection
//!
//! Nothing here mutates state; `GameState::apply` calls into these and
//! commits the result.

pub mod board;
pub mod terminal;
pub mod validator;

pub use board::generate_board;
pub use terminal::is_terminal;
pub use validator::{check_move, destination, is_legal, legal_moves, lower_bound};
