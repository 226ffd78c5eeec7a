// src/lib.rs
pub mod debug;
pub mod dungeon;
pub mod math;
