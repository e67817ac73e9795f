//! APU channel implementations

pub mod square;
pub mod triangle;

pub use square::SquareChannel;
pub use triangle::TriangleChannel;
