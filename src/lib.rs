//! arbor3d
//!
//! A scene-graph import and instancing library for wgpu-based renderers.
//! This crate imports hierarchical scene descriptions (glTF by default),
//! converts them into an internal node tree, caches per-node mesh data for
//! the lifetime of the session and hands out cheap deep-cloned instances of
//! already-imported models so that many logical scene objects can share one
//! canonical asset while keeping independent transform state.
//!
//! High-level modules
//! - `data_structures`: the in-memory scene representation (node trees,
//!   model handles, interleaved vertices)
//! - `error`: the typed error taxonomy surfaced by import operations
//! - `resources`: loading logic (source providers, the asset importer, the
//!   mesh cache and the model registry)
//!

pub mod data_structures;
pub mod error;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use data_structures::model::Model;
pub use data_structures::scene_tree::SceneTree;
