// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod probability;
pub mod structures;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::*,
        error::{MathError, MathResult},
        probability::SeedResource,
        structures::*,
        types::*,
    };
}
