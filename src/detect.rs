//! Feature picking and coincidence detection.
//!
//! Selections are made on the flat net (vertex or edge of a face, in grid
//! units) and compared in world space through the fold simulator's poses.
//! A post-fold sweep distinguishes legitimate face-to-face contact in a
//! closed solid from an actual collision.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fold::FoldSimulator;
use crate::math::{point_to_segment_dist_sq, Point2, Point3};
use crate::net::{FaceId, Net};

/// Squared world-distance under which two same-kind features count as the
/// same point of the folded solid, in the solid's own unit scale. Large
/// enough to absorb floating-point divergence along different hinge chains,
/// small enough to reject features that remain visually distinct.
pub const MATCH_TOLERANCE_SQ: f64 = 4e-4;

/// Click tolerance in grid units for vertex and edge picking on the flat
/// net.
pub const CLICK_TOLERANCE: f64 = 0.15;

/// Squared distance under which two intersecting face bounding boxes count
/// as a true collision rather than edge contact.
const COLLISION_CENTER_TOL_SQ: f64 = 1e-4;

/// A face corner, ordered to match [`crate::net::Face::corners`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Index into [`crate::net::Face::corners`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }
}

/// A face edge; `Top` is the +v side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Indices of the edge's endpoints in [`crate::net::Face::corners`].
    #[must_use]
    pub fn corner_indices(self) -> (usize, usize) {
        match self {
            Self::Top => (0, 1),
            Self::Right => (1, 2),
            Self::Bottom => (2, 3),
            Self::Left => (3, 0),
        }
    }
}

/// A user-picked feature of the flat net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Vertex { face: FaceId, corner: Corner },
    Edge { face: FaceId, side: EdgeSide },
}

impl Selection {
    /// The feature's position on the flat net: the corner itself, or the
    /// edge midpoint.
    #[must_use]
    pub fn flat_point(&self, net: &Net) -> Option<Point2> {
        match *self {
            Self::Vertex { face, corner } => {
                Some(net.face(face)?.corners()[corner.index()])
            }
            Self::Edge { face, side } => {
                let corners = net.face(face)?.corners();
                let (i, j) = side.corner_indices();
                Some(nalgebra::center(&corners[i], &corners[j]))
            }
        }
    }
}

/// Classifies a click (already in net-grid units) as a vertex or edge pick.
///
/// Vertex proximity is tested first at all four corners of every face, then
/// edge-band membership, both against [`CLICK_TOLERANCE`]; the first match
/// wins. Faces marked removed are not pickable.
#[must_use]
pub fn classify_click(net: &Net, click: &Point2) -> Option<Selection> {
    let tol_sq = CLICK_TOLERANCE * CLICK_TOLERANCE;
    let pickable = net
        .faces
        .iter()
        .filter(|f| net.removed_face != Some(f.id));

    for face in pickable.clone() {
        let corners = face.corners();
        for corner in Corner::ALL {
            if (click - corners[corner.index()]).norm_squared() <= tol_sq {
                return Some(Selection::Vertex { face: face.id, corner });
            }
        }
    }
    for face in pickable {
        let corners = face.corners();
        for side in EdgeSide::ALL {
            let (i, j) = side.corner_indices();
            if point_to_segment_dist_sq(click, &corners[i], &corners[j]) <= tol_sq {
                return Some(Selection::Edge { face: face.id, side });
            }
        }
    }
    None
}

/// World position of a selection under the simulator's current poses.
///
/// # Errors
///
/// Fails when no net is loaded or the selection names an unknown face.
pub fn selection_world(sim: &FoldSimulator, sel: &Selection) -> Result<Point3> {
    let (Selection::Vertex { face, .. } | Selection::Edge { face, .. }) = *sel;
    let pose = sim.face_pose(face)?;
    let net = sim.net().ok_or(crate::error::FoldError::NoNetLoaded)?;
    let flat = sel
        .flat_point(net)
        .ok_or(crate::error::FoldError::UnknownFace(face))?;
    Ok(pose.world_point(&flat))
}

/// Decides whether two picked features coincide on the folded solid.
///
/// A vertex selection and an edge selection never match; same-kind
/// selections match when their squared world distance is below
/// [`MATCH_TOLERANCE_SQ`].
///
/// # Errors
///
/// Fails when no net is loaded or a selection names an unknown face.
pub fn check_answer(sim: &FoldSimulator, a: &Selection, b: &Selection) -> Result<bool> {
    let same_kind = matches!(
        (a, b),
        (Selection::Vertex { .. }, Selection::Vertex { .. })
            | (Selection::Edge { .. }, Selection::Edge { .. })
    );
    if !same_kind {
        return Ok(false);
    }
    let wa = selection_world(sim, a)?;
    let wb = selection_world(sim, b)?;
    Ok((wa - wb).norm_squared() < MATCH_TOLERANCE_SQ)
}

#[derive(Debug, Clone, Copy)]
struct Aabb {
    min: Point3,
    max: Point3,
}

impl Aabb {
    fn of_face(sim: &FoldSimulator, net: &Net, face: FaceId) -> Result<Self> {
        let pose = sim.face_pose(face)?;
        let f = net
            .face(face)
            .ok_or(crate::error::FoldError::UnknownFace(face))?;
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in f.corners() {
            let w = pose.world_point(&corner);
            min = Point3::from(min.coords.inf(&w.coords));
            max = Point3::from(max.coords.sup(&w.coords));
        }
        Ok(Self { min, max })
    }

    fn intersects(&self, other: &Self) -> bool {
        let eps = 1e-9;
        (0..3).all(|i| self.min[i] <= other.max[i] + eps && other.min[i] <= self.max[i] + eps)
    }

    fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Post-fold sanity sweep: reports face pairs that truly collide.
///
/// Boxes of touching neighbors intersect in any correctly folded solid, so
/// an intersection is flagged only when the box centers nearly coincide,
/// which separates face-on-face collisions from legitimate edge contact.
///
/// # Errors
///
/// Fails when no net is loaded into the simulator.
pub fn fold_collisions(sim: &FoldSimulator) -> Result<Vec<(FaceId, FaceId)>> {
    let net = sim.net().ok_or(crate::error::FoldError::NoNetLoaded)?;
    let boxes: Vec<(FaceId, Aabb)> = net
        .faces
        .iter()
        .map(|f| Ok((f.id, Aabb::of_face(sim, net, f.id)?)))
        .collect::<Result<_>>()?;

    let mut collisions = Vec::new();
    for (i, (id_a, box_a)) in boxes.iter().enumerate() {
        for (id_b, box_b) in &boxes[i + 1..] {
            if box_a.intersects(box_b)
                && (box_a.center() - box_b.center()).norm_squared() < COLLISION_CENTER_TOL_SQ
            {
                collisions.push((*id_a, *id_b));
            }
        }
    }
    Ok(collisions)
}
