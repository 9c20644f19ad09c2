//! Model registry: one canonical tree per source path, cheap instances for
//! everyone else.

use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
};

use crate::{
    data_structures::model::{FamilyId, InstanceId, Model},
    error::ImportError,
    resources::{importer::AssetImporter, mesh::MeshCache, source::SourceSceneProvider},
};

/// Path-keyed cache of canonical models.
///
/// The first request for a path runs the importer and stores the resulting
/// tree under a fresh family id; every request (including the first)
/// returns a deep clone tagged with that family id and a globally unique
/// instance id. The canonical tree never leaves the registry and is never
/// mutated, so instances can freely rewrite their transform state.
///
/// A failed import caches nothing; calling again retries from scratch.
///
/// The registry is a plain context object with `&mut` methods. One
/// instance per session is the expected setup; an embedding system that
/// introduces threads wraps it (and the mesh cache) in a lock around the
/// whole import-then-insert sequence.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    canonical: HashMap<PathBuf, Model>,
    next_family: u64,
    next_instance: u64,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh instance of the model at `path`, importing it first
    /// if no canonical tree is cached yet.
    pub fn get_or_create_model(
        &mut self,
        path: impl AsRef<Path>,
        provider: &dyn SourceSceneProvider,
        meshes: &mut MeshCache,
    ) -> Result<Model, ImportError> {
        let key = normalize_path(path.as_ref());
        if !self.canonical.contains_key(&key) {
            let tree = AssetImporter::new(provider, meshes).import(&key)?;
            let family = FamilyId::new(self.next_family);
            self.next_family += 1;
            let canonical = Model::new(tree, key.clone(), family, self.alloc_instance());
            self.canonical.insert(key.clone(), canonical);
        }
        let instance = self.alloc_instance();
        Ok(self.canonical[&key].instantiate(instance))
    }

    /// Read-only view of the canonical model for `path`, if one is cached.
    /// The canonical is never handed out by value; mutate instances instead.
    pub fn canonical(&self, path: impl AsRef<Path>) -> Option<&Model> {
        self.canonical.get(&normalize_path(path.as_ref()))
    }

    /// Whether a canonical model is cached for `path`.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.canonical.contains_key(&normalize_path(path.as_ref()))
    }

    /// Number of canonical models imported so far.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    fn alloc_instance(&mut self) -> InstanceId {
        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        id
    }
}

/// Purely lexical path normalization so that `./a//b.gltf` and `a/b.gltf`
/// share one registry entry. No filesystem access.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
