mod error;
mod key;
mod layer;
mod table;

pub use error::Error;
pub use key::KeyDefinition;
pub use layer::Layer;
pub use table::{KeyTable, COLS, KEY_COUNT, ROWS};
