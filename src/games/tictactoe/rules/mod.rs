//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Both the board queries and
//! the search read terminal state through here.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner};
