//! Procedural data generators for sketch content
//!
//! Pure functions producing point sequences for map paths, chart series,
//! globe trajectories, and point clouds. Every generator takes its random
//! source explicitly so callers decide between entropy and a fixed seed.

pub mod chart;
pub mod cloud;
pub mod globe;
pub mod path2d;

use serde::Serialize;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 3D point as `[x, y, z]`.
pub type Point3 = [f64; 3];
