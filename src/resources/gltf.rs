//! glTF-backed source scene provider.
//!
//! The `gltf` crate does all binary-layout parsing; this module only maps
//! its document tree onto the read-only [`SourceNode`] model. Each glTF
//! primitive becomes one mesh attribute on its node, so multi-primitive
//! meshes surface as multi-attribute source nodes.

use std::path::Path;

use cgmath::{Matrix4, SquareMatrix, Vector3, Vector4};

use crate::{
    error::ImportError,
    resources::source::{SourceAttribute, SourceMesh, SourceNode, SourceSceneProvider},
};

pub struct GltfSceneProvider;

impl SourceSceneProvider for GltfSceneProvider {
    fn load_scene(&self, path: &Path) -> Result<SourceNode, ImportError> {
        let (document, buffers, _images) =
            gltf::import(path).map_err(|e| ImportError::Source {
                path: path.display().to_string(),
                source: anyhow::Error::new(e),
            })?;

        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or_else(|| ImportError::EmptyScene {
                path: path.display().to_string(),
            })?;

        let mut roots: Vec<SourceNode> = scene
            .nodes()
            .map(|node| convert_node(&node, &buffers))
            .collect();

        match roots.len() {
            0 => Err(ImportError::EmptyScene {
                path: path.display().to_string(),
            }),
            1 => Ok(roots.remove(0)),
            // Multiple scene roots get gathered under a synthetic root so
            // the importer always sees a single tree.
            _ => Ok(SourceNode {
                name: String::new(),
                local_transform: Matrix4::identity(),
                attributes: Vec::new(),
                children: roots,
            }),
        }
    }
}

fn convert_node(node: &gltf::Node, buffers: &[gltf::buffer::Data]) -> SourceNode {
    let mut attributes = Vec::new();
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            attributes.push(SourceAttribute::Mesh(read_primitive(&primitive, buffers)));
        }
    }

    SourceNode {
        name: node.name().unwrap_or("").to_string(),
        local_transform: Matrix4::from(node.transform().matrix()),
        attributes,
        children: node
            .children()
            .map(|child| convert_node(&child, buffers))
            .collect(),
    }
}

fn read_primitive(primitive: &gltf::Primitive, buffers: &[gltf::buffer::Data]) -> SourceMesh {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

    let mut mesh = SourceMesh::default();
    if let Some(positions) = reader.read_positions() {
        mesh.positions = positions.collect();
    }
    if let Some(normals) = reader.read_normals() {
        mesh.normals = normals.collect();
    }
    if let Some(uvs) = reader.read_tex_coords(0) {
        mesh.uvs = uvs.into_f32().collect();
    }
    if let Some(colors) = reader.read_colors(0) {
        mesh.colors = colors.into_rgba_f32().collect();
    }
    if let Some(tangents) = reader.read_tangents() {
        for (i, tangent) in tangents.enumerate() {
            // GLTF represents tangents as vec4 where the 4th elem can be used to calculate the binormal
            let tangent: Vector4<f32> = tangent.into();
            mesh.tangents.push(tangent.truncate().into());
            let normal: Vector3<f32> = mesh.normals.get(i).copied().unwrap_or([0.0; 3]).into();
            mesh.binormals
                .push((normal.cross(tangent.truncate()) * tangent.w).into());
        }
    }
    mesh
}
