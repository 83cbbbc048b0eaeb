//! Grid coordinates and the eight compass directions.
mod direction;
mod position;

pub use direction::Direction;
pub use position::Position;
