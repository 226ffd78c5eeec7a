// src/math/types/mod.rs
pub mod circle;
pub mod edge;
pub mod point;
pub mod rect;
pub mod triangle;

pub use circle::*;
pub use edge::*;
pub use point::*;
pub use rect::*;
pub use triangle::*;
