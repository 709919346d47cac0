//! Turn orchestration and its collaborators.
//!
//! The controller owns the game state and talks to the outside world only
//! through the traits in `io`.

pub mod controller;
pub mod io;

pub use controller::{TurnController, TurnPhase};
pub use io::{BoardRenderer, MoveInput, ResultAnnouncer};
