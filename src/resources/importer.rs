//! Converts a source scene into the internal node tree.

use std::path::Path;

use crate::{
    data_structures::scene_tree::{NodeId, NodeKind, SceneNode, SceneTree},
    error::ImportError,
    resources::{
        mesh::MeshCache,
        source::{SourceAttribute, SourceMesh, SourceNode, SourceSceneProvider},
    },
};

/// Walks a [`SourceSceneProvider`] tree depth-first and builds a
/// [`SceneTree`], resolving geometry through the given mesh cache.
///
/// Importing either completes as a whole or fails as a whole: on any error
/// the partially built tree is dropped and nothing reaches the caller.
/// Mesh records appended to the cache before the failing node remain there
/// (ids are append-only and never rolled back).
pub struct AssetImporter<'a> {
    provider: &'a dyn SourceSceneProvider,
    meshes: &'a mut MeshCache,
}

impl<'a> AssetImporter<'a> {
    pub fn new(provider: &'a dyn SourceSceneProvider, meshes: &'a mut MeshCache) -> Self {
        Self { provider, meshes }
    }

    pub fn import(&mut self, path: &Path) -> Result<SceneTree, ImportError> {
        let source = self.provider.load_scene(path)?;
        let mut tree = SceneTree::with_root(self.make_node(&source)?);
        let root = tree.root();
        for child in &source.children {
            self.attach(&mut tree, root, child)?;
        }
        log::info!("imported `{}`: {} nodes, {} meshes cached", path.display(), tree.len(), self.meshes.len());
        Ok(tree)
    }

    fn attach(
        &mut self,
        tree: &mut SceneTree,
        parent: NodeId,
        source: &SourceNode,
    ) -> Result<(), ImportError> {
        let id = tree.add_child(parent, self.make_node(source)?);
        for child in &source.children {
            self.attach(tree, id, child)?;
        }
        Ok(())
    }

    fn make_node(&mut self, source: &SourceNode) -> Result<SceneNode, ImportError> {
        let kind = match first_mesh(source) {
            Some(mesh) => {
                let mesh = self
                    .meshes
                    .get_or_create_mesh(mesh)
                    .map_err(|e| ImportError::Mesh {
                        node: source.name.clone(),
                        source: e,
                    })?;
                NodeKind::Geometry { mesh }
            }
            None => NodeKind::Base,
        };
        // Local transform taken verbatim from the source, row for row.
        Ok(SceneNode::new(source.name.clone(), kind, source.local_transform))
    }
}

/// Only the first mesh attribute (in source iteration order) is honored;
/// later ones on the same node are dropped.
fn first_mesh(source: &SourceNode) -> Option<&SourceMesh> {
    let mut meshes = source.attributes.iter().map(|attribute| match attribute {
        SourceAttribute::Mesh(mesh) => mesh,
    });
    let first = meshes.next();
    if meshes.next().is_some() {
        log::debug!(
            "node `{}` carries more than one mesh attribute, importing only the first",
            source.name
        );
    }
    first
}
