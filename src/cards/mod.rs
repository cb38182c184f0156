//! Card catalog: static definitions and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Name, side values and optimizer score
//! - `Card`: Compact copy held by decks and board cells
//! - `CardRegistry`: Definition lookup and deck building

pub mod definition;
pub mod registry;

pub use definition::{Card, CardDefinition, CardId};
pub use registry::CardRegistry;
