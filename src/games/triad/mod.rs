//! Triple Triad on a 3x3 board.
//!
//! A compact rules simulation used to drive the agents:
//! - Each side holds five cards with four side values (1-10)
//! - Placing a card flips adjacent opposing cards whose facing value is lower
//! - When the board is full, board cards owned plus cards still in hand
//!   decide the winner
//!
//! Supports the `Reverse`, `FallenAce` and `Order` rule modifiers.

mod cards;
mod game;
mod modifiers;

pub use cards::{deal, starter_registry};
pub use game::TriadGame;
pub use modifiers::{FallenAce, Order, Reverse};
