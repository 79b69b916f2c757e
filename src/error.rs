//! Error types for the turkiye-map crate.
//!
//! The interactive core itself performs no fallible work; errors only arise
//! when a caller-supplied dataset violates the dataset invariants, or when a
//! dataset fails to parse.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MapResult<T> = Result<T, MapError>;

/// Errors reported when constructing a map from a caller-supplied dataset.
#[derive(Debug, Error)]
pub enum MapError {
    /// Two regions in the dataset share the same id.
    #[error("duplicate region id: {0}")]
    DuplicateRegion(String),

    /// A region was supplied with an empty outline list.
    #[error("region {0} has no outlines")]
    EmptyOutlines(String),

    /// A region was supplied with an empty id.
    #[error("region \"{name}\" (plate {plate_number}) has an empty id")]
    EmptyRegionId {
        /// Display name of the offending region.
        name: String,
        /// Plate number of the offending region.
        plate_number: u16,
    },

    /// The dataset could not be parsed as JSON.
    #[error("invalid dataset: {0}")]
    InvalidDataset(#[from] serde_json::Error),
}
