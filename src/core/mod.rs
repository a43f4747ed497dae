pub mod board;
pub mod error;
pub mod setup;
pub mod types;

pub use board::Board;
pub use error::{BoardError, SetupError};
pub use types::{Cell, Mark, Position, SIZE};
