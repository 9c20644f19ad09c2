//! Model handles tying a scene tree to registry identity.

use std::path::{Path, PathBuf};

use crate::data_structures::scene_tree::SceneTree;

/// Identity shared by a canonical model and every instance cloned from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyId(u64);

impl FamilyId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identity of one specific model handle, unique across every handle the
/// registry ever produced, regardless of family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// One imported model handle: a privately owned scene tree plus the source
/// path and registry identity.
///
/// `Model` deliberately does not implement `Clone`; instances are only
/// produced by the registry so that every handle carries a fresh
/// `InstanceId`. Mutating an instance's tree (local transforms, world
/// propagation) never affects the canonical tree or any sibling instance.
/// Mesh ids inside the tree keep referring to the shared mesh cache.
#[derive(Debug)]
pub struct Model {
    pub tree: SceneTree,
    path: PathBuf,
    family: FamilyId,
    instance: InstanceId,
}

impl Model {
    pub(crate) fn new(tree: SceneTree, path: PathBuf, family: FamilyId, instance: InstanceId) -> Self {
        Self {
            tree,
            path,
            family,
            instance,
        }
    }

    /// Deep-clones the tree into a new handle of the same family.
    pub(crate) fn instantiate(&self, instance: InstanceId) -> Model {
        Model {
            tree: self.tree.clone(),
            path: self.path.clone(),
            family: self.family,
            instance,
        }
    }

    /// Normalized source path this model was imported from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn family(&self) -> FamilyId {
        self.family
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }
}
