#![allow(dead_code)]

use std::{
    cell::Cell,
    collections::HashMap,
    path::{Path, PathBuf},
};

use arbor3d::{
    Matrix4,
    error::ImportError,
    resources::source::{SourceAttribute, SourceMesh, SourceNode, SourceSceneProvider},
    vec3,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// In-memory provider serving pre-registered source trees, with a call
/// counter so tests can assert whether an import actually ran.
#[derive(Default)]
pub struct FakeSceneProvider {
    scenes: HashMap<PathBuf, SourceNode>,
    calls: Cell<usize>,
}

impl FakeSceneProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, scene: SourceNode) {
        self.scenes.insert(path.into(), scene);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SourceSceneProvider for FakeSceneProvider {
    fn load_scene(&self, path: &Path) -> Result<SourceNode, ImportError> {
        self.calls.set(self.calls.get() + 1);
        self.scenes
            .get(path)
            .cloned()
            .ok_or_else(|| ImportError::Source {
                path: path.display().to_string(),
                source: anyhow::anyhow!("no such test scene"),
            })
    }
}

pub fn translate(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::from_translation(vec3(x, y, z))
}

pub fn leaf(name: &str, local_transform: Matrix4<f32>) -> SourceNode {
    SourceNode {
        name: name.to_string(),
        local_transform,
        attributes: Vec::new(),
        children: Vec::new(),
    }
}

pub fn group(name: &str, local_transform: Matrix4<f32>, children: Vec<SourceNode>) -> SourceNode {
    SourceNode {
        name: name.to_string(),
        local_transform,
        attributes: Vec::new(),
        children,
    }
}

pub fn geometry(name: &str, local_transform: Matrix4<f32>, mesh: SourceMesh) -> SourceNode {
    SourceNode {
        name: name.to_string(),
        local_transform,
        attributes: vec![SourceAttribute::Mesh(mesh)],
        children: Vec::new(),
    }
}

pub fn triangle_mesh() -> SourceMesh {
    SourceMesh {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        normals: vec![[0.0, 0.0, 1.0]; 3],
        uvs: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        ..Default::default()
    }
}

pub fn quad_mesh() -> SourceMesh {
    SourceMesh {
        positions: vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        normals: vec![[0.0, 0.0, 1.0]; 4],
        ..Default::default()
    }
}

/// Flattens a source tree into its pre-order (name, local transform)
/// sequence, the reference order for import fidelity checks.
pub fn flatten_preorder(source: &SourceNode) -> Vec<(String, Matrix4<f32>)> {
    let mut out = vec![(source.name.clone(), source.local_transform)];
    for child in &source.children {
        out.extend(flatten_preorder(child));
    }
    out
}

pub fn assert_matrix_eq(actual: Matrix4<f32>, expected: Matrix4<f32>, tolerance: f32) {
    let a: [[f32; 4]; 4] = actual.into();
    let e: [[f32; 4]; 4] = expected.into();
    for (i, (row_a, row_e)) in a.iter().zip(e.iter()).enumerate() {
        for (j, (va, ve)) in row_a.iter().zip(row_e.iter()).enumerate() {
            assert!(
                (va - ve).abs() <= tolerance,
                "matrix mismatch at [{}][{}]: {} vs {}",
                i,
                j,
                va,
                ve
            );
        }
    }
}
