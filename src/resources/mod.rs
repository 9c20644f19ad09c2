use std::path::Path;

use crate::{
    data_structures::model::Model,
    error::ImportError,
    resources::{gltf::GltfSceneProvider, mesh::MeshCache, registry::ModelRegistry},
};

/**
 * This module contains all logic for loading scenes from external files and
 * turning them into reusable models: the read-only source data model, the
 * glTF-backed provider, the asset importer, the session-wide mesh cache and
 * the model registry.
 */
pub mod gltf;
pub mod importer;
pub mod mesh;
pub mod registry;
pub mod source;

/// Imports (or re-instances) a glTF model through the given registry.
///
/// Convenience wrapper around [`ModelRegistry::get_or_create_model`] with
/// the shipped [`GltfSceneProvider`].
pub fn load_model_gltf(
    path: impl AsRef<Path>,
    registry: &mut ModelRegistry,
    meshes: &mut MeshCache,
) -> Result<Model, ImportError> {
    registry.get_or_create_model(path, &GltfSceneProvider, meshes)
}
