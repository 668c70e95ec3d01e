use thiserror::Error;

use crate::net::FaceId;

/// Top-level error type for the netfold kernel.
#[derive(Debug, Error)]
pub enum NetfoldError {
    #[error(transparent)]
    Net(#[from] NetError),

    #[error(transparent)]
    Fold(#[from] FoldError),
}

/// Errors raised while constructing or cloning nets.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("a net needs exactly 6 faces, got {0}")]
    WrongFaceCount(usize),

    #[error("duplicate face id {0}")]
    DuplicateFaceId(FaceId),

    #[error("faces {a} and {b} overlap in grid space")]
    OverlappingFaces { a: FaceId, b: FaceId },

    #[error("unknown rectangular-prism layout id {0} (expected 1..=6)")]
    UnknownLayout(u32),

    #[error("prism extent {name} = {value} must be positive")]
    InvalidExtent { name: &'static str, value: i32 },

    #[error("net faces do not form a single edge-connected region")]
    Disconnected,
}

/// Errors raised by the fold simulator.
#[derive(Debug, Error)]
pub enum FoldError {
    #[error("face {0} has no hinge in the active fold tree")]
    MissingHinge(FaceId),

    #[error("no net is loaded into the simulator")]
    NoNetLoaded,

    #[error("unknown face id {0}")]
    UnknownFace(FaceId),
}

/// Convenience type alias for results using [`NetfoldError`].
pub type Result<T> = std::result::Result<T, NetfoldError>;
