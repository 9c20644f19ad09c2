//! Error taxonomy for import and mesh resolution.
//!
//! Import failures are atomic: when any variant below is returned, the
//! whole attempted tree is discarded and nothing is cached in the model
//! registry, so a later call simply retries the import.

use thiserror::Error;

/// The enclosing import failed as a unit. No `Model` is produced and the
/// registry retains no entry for the requested path.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The source scene could not be opened or parsed.
    #[error("failed to read source scene `{path}`")]
    Source {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// The source parsed but exposes no root node to import.
    #[error("source scene `{path}` has no root node")]
    EmptyScene { path: String },

    /// A mesh attribute was present on a node but its vertex data could not
    /// be resolved. Substituting empty geometry into an otherwise valid
    /// tree is never done; the import aborts instead.
    #[error("could not resolve mesh data on node `{node}`")]
    Mesh {
        node: String,
        #[source]
        source: MeshResolutionError,
    },
}

/// Vertex data of a single mesh attribute could not be read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshResolutionError {
    #[error("mesh attribute carries no positions")]
    MissingPositions,

    /// A secondary per-vertex array was supplied but disagrees with the
    /// position count.
    #[error("{attribute} array has {actual} entries, expected {expected}")]
    AttributeLengthMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },
}
