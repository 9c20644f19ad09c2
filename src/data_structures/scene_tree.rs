//! Arena-based scene tree with hierarchical transform state.
//!
//! A `SceneTree` owns all of its nodes in one arena and addresses them by
//! `NodeId` indices. Parent and child links are indices into that arena
//! rather than owning references, so deep-cloning or dropping a tree can
//! never dangle or double-free: cloning the arena clones every node object
//! while `NodeId`s keep their meaning inside the new tree.
//!
//! World transforms are derived state. They are only valid after
//! [`SceneTree::propagate_world_transforms`] ran to completion for the
//! current tick; consumers reading world transforms before that see the
//! values of the previous pass (or identity right after import).

use cgmath::{Matrix4, SquareMatrix};

use crate::resources::mesh::MeshId;

/// Index of a node inside one specific [`SceneTree`] arena.
///
/// Ids are only meaningful for the tree that issued them. A clone of a tree
/// accepts the same ids as its source since the arena layout is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node represents in the scene.
///
/// `Light` and `Camera` are reserved for future source attribute types;
/// the importer currently only produces `Base` and `Geometry` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Base,
    Geometry { mesh: MeshId },
    Light,
    Camera,
}

/// Checked geometry view of a node, only obtainable when the node's kind
/// actually is [`NodeKind::Geometry`].
#[derive(Debug, Clone, Copy)]
pub struct GeometryView {
    pub mesh: MeshId,
}

/// One imported scene-graph element.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    /// Transform relative to the parent's coordinate frame, as reported by
    /// the source (no basis conversion is applied on import).
    pub local_transform: Matrix4<f32>,
    /// Derived local-to-world transform, cached by the last propagation
    /// pass. Not authoritative.
    pub world_transform: Matrix4<f32>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, kind: NodeKind, local_transform: Matrix4<f32>) -> Self {
        Self {
            name: name.into(),
            kind,
            local_transform,
            world_transform: Matrix4::identity(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// The node this one is attached to, `None` for the tree root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in source order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Checked kind dispatch: a populated view for geometry nodes, `None`
    /// for every other kind.
    pub fn geometry(&self) -> Option<GeometryView> {
        match self.kind {
            NodeKind::Geometry { mesh } => Some(GeometryView { mesh }),
            NodeKind::Base | NodeKind::Light | NodeKind::Camera => None,
        }
    }
}

/// A whole node tree. Each tree (canonical or clone) owns its own arena.
#[derive(Debug, Clone)]
pub struct SceneTree {
    nodes: Vec<SceneNode>,
}

impl SceneTree {
    /// Creates a tree containing only `root`. The root never has a parent.
    pub fn with_root(root: SceneNode) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attaches `node` as the last child of `parent` and returns its id.
    ///
    /// Nodes only ever enter a tree through this method, so every node has
    /// exactly one parent and the tree stays acyclic by construction.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Looks up a node. Panics if `id` was not issued by this tree (or a
    /// tree it was cloned from); ids are never invalidated, so that is a
    /// programmer error.
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal, parent before its descendants and
    /// siblings in child order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// First node (in pre-order) carrying `name`.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, node)| node.name == name).map(|(id, _)| id)
    }

    pub fn set_local_transform(&mut self, id: NodeId, local_transform: Matrix4<f32>) {
        self.nodes[id.index()].local_transform = local_transform;
    }

    /// Recomputes every node's world transform for this tick.
    ///
    /// `root_world` stands in for the parent world of the root; each node's
    /// world transform is its parent's world with the node's local
    /// transform appended (parent applied first, child right-multiplied
    /// on). The pass covers the whole tree before returning; there is no
    /// partial update mode.
    pub fn propagate_world_transforms(&mut self, root_world: Matrix4<f32>) {
        let mut stack = vec![(self.root(), root_world)];
        while let Some((id, parent_world)) = stack.pop() {
            let world = parent_world * self.nodes[id.index()].local_transform;
            self.nodes[id.index()].world_transform = world;
            // Reversed push so the left-most sibling is visited first.
            for &child in self.nodes[id.index()].children.iter().rev() {
                stack.push((child, world));
            }
        }
    }
}

pub struct PreOrder<'a> {
    tree: &'a SceneTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeId, &'a SceneNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((id, node))
    }
}
