// src/math/algorithms/binary_space_partition.rs

//! # Binary Space Partitioning
//!
//! Recursively splits a rectangle into a [`BinaryTree`] of sub-rectangles.
//! Every node down to the configured generation is split in two, so a
//! generation `D` partition has exactly `2^D` leaves that tile the root.

use crate::math::{
    error::MathResult,
    probability::SeedResource,
    structures::{BinaryTree, NodeIndex},
    types::Rect,
    utils::comparison,
};
use crate::{next_random_bool, next_random_range};
use tracing::{debug, warn};

/// Default share of each side in which the split line may fall.
pub const DEFAULT_RANDOM_RANGE: f64 = 0.3;

/// Konfiguration und Ausführung der Raumaufteilung.
#[derive(Debug, Clone)]
pub struct BinarySpacePartition {
    bounds: Rect,
    generation: u32,
    random_range: f64,
}

/// Ergebnis einer Raumaufteilung.
#[derive(Debug, Clone)]
pub struct SpacePartition {
    tree: BinaryTree<Rect>,
}

impl SpacePartition {
    pub fn tree(&self) -> &BinaryTree<Rect> {
        &self.tree
    }

    /// Leaf rectangles in breadth-first order.
    pub fn leaves(&self) -> Vec<Rect> {
        self.tree.leaves().into_iter().copied().collect()
    }

    pub fn root(&self) -> &Rect {
        self.tree.element(self.tree.root())
    }
}

impl BinarySpacePartition {
    pub fn new(bounds: Rect, generation: u32) -> Self {
        Self {
            bounds,
            generation,
            random_range: DEFAULT_RANDOM_RANGE,
        }
    }

    /// Sets the split randomness. Values outside `[0, 1]` are clamped to the
    /// nearest bound with a warning.
    pub fn with_random_range(mut self, random_range: f64) -> Self {
        self.random_range = clamp_random_range(random_range);
        self
    }

    pub fn random_range(&self) -> f64 {
        self.random_range
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn run(&self, seed_resource: &mut SeedResource) -> MathResult<SpacePartition> {
        let mut tree = BinaryTree::new(self.bounds);
        self.split(&mut tree, BinaryTree::<Rect>::ROOT, 0, seed_resource);

        debug!(
            "BinarySpacePartition: split {} into {} nodes over {} generations",
            self.bounds,
            tree.len(),
            self.generation
        );
        Ok(SpacePartition { tree })
    }

    fn split(
        &self,
        tree: &mut BinaryTree<Rect>,
        index: NodeIndex,
        generation: u32,
        seed_resource: &mut SeedResource,
    ) {
        if generation >= self.generation {
            return;
        }

        let rect = *tree.element(index);
        let is_vertical = if comparison::nearly_equal(rect.width, rect.height) {
            next_random_bool!(seed_resource)
        } else {
            rect.height < rect.width
        };

        let (first, second) = if is_vertical {
            let line = self.split_offset(rect.width, seed_resource);
            (
                Rect::new(rect.x, rect.y, line, rect.height),
                Rect::new(rect.x + line, rect.y, rect.width - line, rect.height),
            )
        } else {
            let line = self.split_offset(rect.height, seed_resource);
            (
                Rect::new(rect.x, rect.y, rect.width, line),
                Rect::new(rect.x, rect.y + line, rect.width, rect.height - line),
            )
        };

        let (left, right) = tree.set_children(index, first, second);
        self.split(tree, left, generation + 1, seed_resource);
        self.split(tree, right, generation + 1, seed_resource);
    }

    /// Offset of the split line from the start of a side of length `length`.
    fn split_offset(&self, length: f64, seed_resource: &mut SeedResource) -> f64 {
        let center = length / 2.0;
        let range_offset = length * self.random_range / 2.0;
        next_random_range!(seed_resource, (center - range_offset)..=(center + range_offset))
    }
}

fn clamp_random_range(value: f64) -> f64 {
    if value.is_nan() {
        warn!("Range of BSP is NaN. It has been reset to {DEFAULT_RANDOM_RANGE}.");
        DEFAULT_RANDOM_RANGE
    } else if value < 0.0 {
        warn!("Range of BSP is '{value}', but it cannot be negative. It has been clamped to 0.");
        0.0
    } else if value > 1.0 {
        warn!("Range of BSP is '{value}', but it cannot be larger than 1. It has been clamped to 1.");
        1.0
    } else {
        value
    }
}
