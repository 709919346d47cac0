//! Collaborator traits for input and output.
//!
//! The turn controller never prints or reads anything itself. Front ends
//! implement these traits; tests implement them with scripted moves and
//! recording renderers.

use crate::core::{Move, MoveError, PlayerId};

/// Supplies move requests.
pub trait MoveInput {
    /// Block until `player` has entered a move.
    ///
    /// Returns `None` once no more input will ever arrive.
    fn next_move(&mut self, player: PlayerId) -> Option<Move>;
}

/// Displays the strip and rejected moves.
pub trait BoardRenderer {
    /// Draw the strip. Called once after setup and after every committed move.
    fn render(&mut self, positions: &[i64], board_length: i64);

    /// Tell `player` why their move was refused.
    fn report_illegal_move(&mut self, player: PlayerId, error: &MoveError);
}

/// Announces the end of the game.
pub trait ResultAnnouncer {
    /// Called exactly once, when the game ends.
    fn announce_winner(&mut self, player: PlayerId);
}

impl<T: MoveInput + ?Sized> MoveInput for &mut T {
    fn next_move(&mut self, player: PlayerId) -> Option<Move> {
        (**self).next_move(player)
    }
}

impl<T: BoardRenderer + ?Sized> BoardRenderer for &mut T {
    fn render(&mut self, positions: &[i64], board_length: i64) {
        (**self).render(positions, board_length);
    }

    fn report_illegal_move(&mut self, player: PlayerId, error: &MoveError) {
        (**self).report_illegal_move(player, error);
    }
}

impl<T: ResultAnnouncer + ?Sized> ResultAnnouncer for &mut T {
    fn announce_winner(&mut self, player: PlayerId) {
        (**self).announce_winner(player);
    }
}
