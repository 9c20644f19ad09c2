//! Read-only source scene data model.
//!
//! A [`SourceSceneProvider`] parses one interchange format and exposes the
//! result as a plain tree of [`SourceNode`]s. The importer walks that tree
//! synchronously and retains nothing from it afterwards, so providers are
//! free to rebuild it per call. Tests supply in-memory providers instead of
//! touching the filesystem.

use std::path::Path;

use cgmath::Matrix4;

use crate::error::ImportError;

/// One node of the source hierarchy, exactly as the interchange file
/// reports it: name, local transform, typed attributes and ordered
/// children. No coordinate-system conversion happens at this layer.
#[derive(Debug, Clone)]
pub struct SourceNode {
    pub name: String,
    pub local_transform: Matrix4<f32>,
    pub attributes: Vec<SourceAttribute>,
    pub children: Vec<SourceNode>,
}

/// Typed node attribute. Only mesh attributes exist today; light and
/// camera attributes will slot in here.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SourceAttribute {
    Mesh(SourceMesh),
}

/// Parallel per-vertex arrays of one mesh attribute.
///
/// `positions` is mandatory and defines the vertex count; every other
/// array is either empty (the cache substitutes defaults) or must match
/// the position count.
#[derive(Debug, Clone, Default)]
pub struct SourceMesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub uvs: Vec<[f32; 2]>,
    pub tangents: Vec<[f32; 3]>,
    pub binormals: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

/// Parses one source file into a [`SourceNode`] tree.
pub trait SourceSceneProvider {
    fn load_scene(&self, path: &Path) -> Result<SourceNode, ImportError>;
}
