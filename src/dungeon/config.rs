// src/dungeon/config.rs
use crate::math::{
    error::{MathError, MathResult},
    probability::SeedResource,
};

/// Kleinste erlaubte Raumanzahl.
pub const MINIMUM_ROOM_COUNT: usize = 5;
/// Kleinste erlaubte Teilungstiefe.
pub const MINIMUM_GENERATION: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct MapGenerationConfig {
    pub width: f64,
    pub height: f64,
    pub room_count: usize,
    pub generation: u32,
    /// Share of each side in which a BSP split line may fall.
    pub partitioning_range: f64,
    /// Probability that a dead end receives an extra connection.
    pub connection_random_range: f64,
    pub seed: Option<u64>,
}

impl MapGenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_room_count(mut self, count: usize) -> Self {
        self.room_count = count;
        self
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_partitioning_range(mut self, range: f64) -> Self {
        self.partitioning_range = range;
        self
    }

    pub fn with_connection_random_range(mut self, probability: f64) -> Self {
        self.connection_random_range = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for this configuration: seeded if a seed is set,
    /// otherwise from a random seed.
    pub fn seed_resource(&self) -> SeedResource {
        self.seed
            .map(SeedResource::from_seed)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.room_count < MINIMUM_ROOM_COUNT {
            return Err(MathError::out_of_range(
                "room_count",
                format!("at least {MINIMUM_ROOM_COUNT}"),
                self.room_count,
            ));
        }

        if self.generation < MINIMUM_GENERATION {
            return Err(MathError::out_of_range(
                "generation",
                format!("at least {MINIMUM_GENERATION}"),
                self.generation,
            ));
        }

        if self.width.is_nan() || self.width <= 0.0 {
            return Err(MathError::out_of_range("width", "greater than 0", self.width));
        }

        if self.height.is_nan() || self.height <= 0.0 {
            return Err(MathError::out_of_range("height", "greater than 0", self.height));
        }

        if !self.partitioning_range.is_finite() {
            return Err(MathError::out_of_range(
                "partitioning_range",
                "a finite number",
                self.partitioning_range,
            ));
        }

        if !(0.0..=1.0).contains(&self.connection_random_range) {
            return Err(MathError::out_of_range(
                "connection_random_range",
                "between 0 and 1",
                self.connection_random_range,
            ));
        }

        Ok(())
    }
}

impl Default for MapGenerationConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            room_count: 8,
            generation: 5,
            partitioning_range: 0.3,
            connection_random_range: 0.5,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MapGenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.room_count, 8);
        assert_eq!(config.generation, 5);
        assert_eq!((config.width, config.height), (100.0, 100.0));
    }

    #[test]
    fn test_too_few_rooms() {
        let err = MapGenerationConfig::new()
            .with_room_count(4)
            .validate()
            .unwrap_err();
        assert_eq!(err, MathError::out_of_range("room_count", "at least 5", 4));
        assert_eq!(
            err.to_string(),
            "'room_count' must be at least 5, but 'room_count' is 4."
        );
    }

    #[test]
    fn test_shallow_generation() {
        let err = MapGenerationConfig::new()
            .with_generation(3)
            .validate()
            .unwrap_err();
        assert_eq!(err, MathError::out_of_range("generation", "at least 4", 3));
    }

    #[test]
    fn test_non_positive_size() {
        assert!(MapGenerationConfig::new().with_size(0.0, 10.0).validate().is_err());
        assert!(MapGenerationConfig::new().with_size(10.0, -1.0).validate().is_err());
        assert!(MapGenerationConfig::new().with_size(f64::NAN, 10.0).validate().is_err());
    }

    #[test]
    fn test_connection_probability_bounds() {
        assert!(MapGenerationConfig::new()
            .with_connection_random_range(1.5)
            .validate()
            .is_err());
        assert!(MapGenerationConfig::new()
            .with_connection_random_range(1.0)
            .validate()
            .is_ok());
        assert!(MapGenerationConfig::new()
            .with_connection_random_range(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_non_finite_partitioning_range() {
        let err = MapGenerationConfig::new()
            .with_partitioning_range(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, MathError::OutOfRange { .. }));
        assert!(MapGenerationConfig::new()
            .with_partitioning_range(f64::INFINITY)
            .validate()
            .is_err());
        // Werte außerhalb von [0, 1] werden von der BSP geklemmt
        assert!(MapGenerationConfig::new()
            .with_partitioning_range(1.5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_seeded_resource_is_reproducible() {
        let config = MapGenerationConfig::new().with_seed(42);
        let mut a = config.seed_resource();
        let mut b = config.seed_resource();
        assert_eq!(a.seed, 42);
        assert_eq!(a.next_value_normalized(), b.next_value_normalized());
    }
}
