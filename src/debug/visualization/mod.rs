// src/debug/visualization/mod.rs
pub mod sink;
pub mod svg;

pub use self::sink::{Color, DebugSink};
pub use self::svg::SvgSink;
