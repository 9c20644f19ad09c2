//! Session-wide mesh cache.
//!
//! Every geometry node resolved during import appends one record here and
//! receives a [`MeshId`] back. Ids are dense, monotonically assigned and
//! never recycled; records live for the lifetime of the cache so that any
//! number of model instances created later can keep referring to them.
//!
//! There is deliberately no content-based deduplication: two nodes with
//! byte-identical geometry get two records, matching the observed behavior
//! of the interchange pipeline this replaces.

use wgpu::util::DeviceExt;

use crate::{
    data_structures::vertex::MeshVertex,
    error::MeshResolutionError,
    resources::source::SourceMesh,
};

/// Stable identifier of one mesh record. Valid for the lifetime of the
/// cache that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(u32);

impl MeshId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One cached mesh: the interleaved vertex array plus the lazily created
/// GPU-resident buffer.
#[derive(Debug)]
pub struct MeshRecord {
    vertices: Vec<MeshVertex>,
    gpu_buffer: Option<wgpu::Buffer>,
}

impl MeshRecord {
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// The GPU buffer, if one was created already.
    pub fn gpu_buffer(&self) -> Option<&wgpu::Buffer> {
        self.gpu_buffer.as_ref()
    }
}

/// Growing collection of mesh records, one cache per session.
#[derive(Debug, Default)]
pub struct MeshCache {
    records: Vec<MeshRecord>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the vertex arrays of `source` into a fresh record and
    /// returns its id. One record per call.
    pub fn get_or_create_mesh(&mut self, source: &SourceMesh) -> Result<MeshId, MeshResolutionError> {
        let vertices = interleave(source)?;
        let id = MeshId(self.records.len() as u32);
        self.records.push(MeshRecord {
            vertices,
            gpu_buffer: None,
        });
        log::debug!("mesh cache: created record {:?} ({} vertices)", id, self.records[id.index()].vertex_count());
        Ok(id)
    }

    /// Looks up a record. Panics if `id` was never issued by this cache;
    /// issued ids are never invalidated, so that is a programmer error.
    pub fn record(&self, id: MeshId) -> &MeshRecord {
        match self.records.get(id.index()) {
            Some(record) => record,
            None => panic!("mesh id {:?} was never issued by this cache", id),
        }
    }

    /// Number of records created so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the GPU vertex buffer for `id`, creating it on first use.
    /// Subsequent calls for the same id return the same buffer.
    pub fn vertex_buffer(&mut self, id: MeshId, device: &wgpu::Device) -> &wgpu::Buffer {
        let index = id.index();
        if index >= self.records.len() {
            panic!("mesh id {:?} was never issued by this cache", id);
        }
        let record = &mut self.records[index];
        record.gpu_buffer.get_or_insert_with(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("Mesh {} Vertex Buffer", index)),
                contents: bytemuck::cast_slice(&record.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
        })
    }
}

fn interleave(source: &SourceMesh) -> Result<Vec<MeshVertex>, MeshResolutionError> {
    if source.positions.is_empty() {
        return Err(MeshResolutionError::MissingPositions);
    }
    let count = source.positions.len();
    check_len("color", count, &source.colors)?;
    check_len("uv", count, &source.uvs)?;
    check_len("tangent", count, &source.tangents)?;
    check_len("binormal", count, &source.binormals)?;
    check_len("normal", count, &source.normals)?;

    let defaults = MeshVertex::default();
    Ok((0..count)
        .map(|i| MeshVertex {
            position: source.positions[i],
            color: source.colors.get(i).copied().unwrap_or(defaults.color),
            uv: source.uvs.get(i).copied().unwrap_or(defaults.uv),
            tangent: source.tangents.get(i).copied().unwrap_or(defaults.tangent),
            binormal: source.binormals.get(i).copied().unwrap_or(defaults.binormal),
            normal: source.normals.get(i).copied().unwrap_or(defaults.normal),
        })
        .collect())
}

fn check_len<T>(
    attribute: &'static str,
    expected: usize,
    values: &[T],
) -> Result<(), MeshResolutionError> {
    if values.is_empty() || values.len() == expected {
        Ok(())
    } else {
        Err(MeshResolutionError::AttributeLengthMismatch {
            attribute,
            expected,
            actual: values.len(),
        })
    }
}
