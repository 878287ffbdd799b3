//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). The turn loop must check
//! [`has_won`] before [`is_draw`] after every move: a full board that also
//! holds a line is a win for whoever moved last.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, has_won, winner};
