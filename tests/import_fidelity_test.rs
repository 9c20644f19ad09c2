use std::path::Path;

use arbor3d::{
    Matrix4, SquareMatrix,
    data_structures::scene_tree::NodeKind,
    resources::{importer::AssetImporter, mesh::MeshCache},
};

use crate::common::test_utils::{
    FakeSceneProvider, assert_matrix_eq, flatten_preorder, geometry, group, init_logging, leaf,
    quad_mesh, translate, triangle_mesh,
};

mod common;

fn ship_scene() -> arbor3d::resources::source::SourceNode {
    group(
        "root",
        Matrix4::identity(),
        vec![
            geometry("hull", translate(1.0, 2.0, 3.0), triangle_mesh()),
            group(
                "arm",
                translate(0.0, 1.0, 0.0),
                vec![leaf("hand", translate(2.0, 0.0, 0.0))],
            ),
        ],
    )
}

#[test]
fn imported_tree_matches_source_preorder() {
    init_logging();
    let mut provider = FakeSceneProvider::new();
    let source = ship_scene();
    let expected = flatten_preorder(&source);
    provider.insert("ship.gltf", source);

    let mut meshes = MeshCache::new();
    let tree = AssetImporter::new(&provider, &mut meshes)
        .import(Path::new("ship.gltf"))
        .unwrap();

    let imported: Vec<_> = tree.iter().collect();
    assert_eq!(imported.len(), expected.len());
    for ((_, node), (name, local)) in imported.iter().zip(expected.iter()) {
        assert_eq!(&node.name, name);
        assert_matrix_eq(node.local_transform, *local, 1e-5);
    }
}

#[test]
fn geometry_view_only_for_geometry_nodes() {
    init_logging();
    let mut provider = FakeSceneProvider::new();
    provider.insert("ship.gltf", ship_scene());

    let mut meshes = MeshCache::new();
    let tree = AssetImporter::new(&provider, &mut meshes)
        .import(Path::new("ship.gltf"))
        .unwrap();

    for (_, node) in tree.iter() {
        match node.name.as_str() {
            "hull" => {
                let view = node.geometry().expect("hull is a geometry node");
                assert_eq!(meshes.record(view.mesh).vertex_count(), 3);
                assert!(matches!(node.kind, NodeKind::Geometry { .. }));
            }
            _ => {
                assert!(node.geometry().is_none());
                assert_eq!(node.kind, NodeKind::Base);
            }
        }
    }
}

#[test]
fn only_first_mesh_attribute_is_imported() {
    init_logging();
    let mut provider = FakeSceneProvider::new();
    let mut node = geometry("multi", Matrix4::identity(), triangle_mesh());
    node.attributes.push(
        arbor3d::resources::source::SourceAttribute::Mesh(quad_mesh()),
    );
    provider.insert("multi.gltf", node);

    let mut meshes = MeshCache::new();
    let tree = AssetImporter::new(&provider, &mut meshes)
        .import(Path::new("multi.gltf"))
        .unwrap();

    // Exactly one record, and it is the triangle, not the quad.
    assert_eq!(meshes.len(), 1);
    let view = tree.node(tree.root()).geometry().unwrap();
    assert_eq!(meshes.record(view.mesh).vertex_count(), 3);
}

#[test]
fn missing_names_import_as_empty_strings() {
    init_logging();
    let mut provider = FakeSceneProvider::new();
    provider.insert(
        "anon.gltf",
        group("", Matrix4::identity(), vec![leaf("", translate(1.0, 0.0, 0.0))]),
    );

    let mut meshes = MeshCache::new();
    let tree = AssetImporter::new(&provider, &mut meshes)
        .import(Path::new("anon.gltf"))
        .unwrap();

    assert_eq!(tree.len(), 2);
    for (_, node) in tree.iter() {
        assert_eq!(node.name, "");
    }
}

#[test]
fn children_keep_source_order_and_parent_links() {
    init_logging();
    let mut provider = FakeSceneProvider::new();
    provider.insert(
        "row.gltf",
        group(
            "root",
            Matrix4::identity(),
            vec![
                leaf("a", Matrix4::identity()),
                leaf("b", Matrix4::identity()),
                leaf("c", Matrix4::identity()),
            ],
        ),
    );

    let mut meshes = MeshCache::new();
    let tree = AssetImporter::new(&provider, &mut meshes)
        .import(Path::new("row.gltf"))
        .unwrap();

    let names: Vec<_> = tree.iter().map(|(_, node)| node.name.clone()).collect();
    assert_eq!(names, ["root", "a", "b", "c"]);

    let root = tree.root();
    assert!(tree.node(root).parent().is_none());
    for &child in tree.node(root).children() {
        assert_eq!(tree.node(child).parent(), Some(root));
    }
}
