//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They hold no state and
//! never fail, so the session can call them on any recorded snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, evaluate_winner, winner};
