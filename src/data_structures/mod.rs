//! Engine data structures: scene trees, model handles and vertex data.
//!
//! This module contains the core data types for scene representation:
//!
//! - `scene_tree` holds the arena-based node tree with kind dispatch,
//!   deep cloning and world-transform propagation
//! - `model` wraps one tree into a registry handle with family and
//!   instance identity
//! - `vertex` defines the interleaved per-vertex layout shared by the mesh
//!   cache and GPU vertex buffers

pub mod model;
pub mod scene_tree;
pub mod vertex;
