// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Toleranz für allgemeine Float-Vergleiche
    pub const EPSILON: f64 = 1e-6;
    /// Rastergröße, auf die Punkt-Koordinaten für Gleichheit und Hashing gerundet werden
    pub const POINT_GRID: f64 = 1e-6;
    pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        nearly_equal_eps(a, b, EPSILON)
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind.
    /// The tolerance scales with the magnitude of the operands.
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= epsilon * scale
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }

    /// Sign with a dead zone around zero: -1, 0 or 1.
    pub fn sign(a: f64) -> i32 {
        if nearly_zero(a) {
            0
        } else if a > 0.0 {
            1
        } else {
            -1
        }
    }
}
