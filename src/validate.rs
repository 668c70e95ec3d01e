//! Catalog-backed validation of user-built nets.
//!
//! A wrong answer is a deterministic verdict, not an error: the result is a
//! boolean plus a reason, and nothing here panics or retries.

use thiserror::Error;

use crate::canonical::canonical_key;
use crate::net::catalog::Catalog;
use crate::net::{FaceId, Net, FACE_COUNT};

/// Why a net was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("a net needs exactly 6 faces, got {0}")]
    WrongFaceCount(usize),

    #[error("face {0} is not a unit square")]
    NonUnitFace(FaceId),

    #[error("faces {a} and {b} occupy the same grid cell")]
    OverlappingFaces { a: FaceId, b: FaceId },

    #[error("the shape is not one of the 11 cube unfoldings")]
    NoCanonicalMatch,
}

/// Outcome of validating a user-built net.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<RejectReason> {
        match *self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Decides whether a user-built net is a valid cube unfolding.
///
/// Face identity and placement order are ignored; acceptance is invariant
/// to rotation and reflection. The sole semantic criterion is that the
/// cell layout is one of the 11 reference hexominoes.
#[must_use]
pub fn validate_net(net: &Net, catalog: &Catalog) -> Verdict {
    if net.faces.len() != FACE_COUNT {
        return Verdict::Rejected(RejectReason::WrongFaceCount(net.faces.len()));
    }
    for face in &net.faces {
        if !face.is_unit() {
            return Verdict::Rejected(RejectReason::NonUnitFace(face.id));
        }
    }
    for (i, a) in net.faces.iter().enumerate() {
        for b in &net.faces[i + 1..] {
            if a.u == b.u && a.v == b.v {
                return Verdict::Rejected(RejectReason::OverlappingFaces { a: a.id, b: b.id });
            }
        }
    }

    if catalog.contains_key(&canonical_key(&net.cells())) {
        Verdict::Accepted
    } else {
        Verdict::Rejected(RejectReason::NoCanonicalMatch)
    }
}
