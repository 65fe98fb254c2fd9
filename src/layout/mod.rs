//! Border-collapse analysis over the resolved tree
//!
//! This module decides, for every bordered box, which of its four edges
//! should be drawn fused with an adjacent border instead of doubling up.
//! It never computes geometry; positioning belongs to the host box-model
//! layout, which consumes these flags purely for drawing.

pub mod collapse;

pub use collapse::{analyze, CollapseMap, EdgeFlags};
