pub mod catalog;
pub mod rect;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::math::Point2;

/// Identifier of a face within a net. Always in `0..6`, equal to the face's
/// position in the construction input; shared with the UI layer as-is.
pub type FaceId = usize;

/// RGB face color.
pub type Color = [u8; 3];

/// Default face colors, indexed by face id.
pub const PALETTE: [Color; 6] = [
    [0xe5, 0x39, 0x35], // red
    [0x1e, 0x88, 0xe5], // blue
    [0xfd, 0xd8, 0x35], // yellow
    [0x43, 0xa0, 0x47], // green
    [0xfb, 0x8c, 0x00], // orange
    [0x8e, 0x24, 0xaa], // purple
];

/// Direction from one face to a grid-adjacent neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One face of a net: an axis-aligned rectangle on the grid.
///
/// `u`/`v` anchor the lower-left cell corner, `w`/`h` are the positive
/// extents in grid units. Cube-family faces are always unit squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub id: FaceId,
    pub u: i32,
    pub v: i32,
    pub w: i32,
    pub h: i32,
    pub color: Color,
}

impl Face {
    /// Creates a unit face at grid cell `(u, v)` with the palette color for
    /// its id.
    #[must_use]
    pub fn unit(id: FaceId, u: i32, v: i32) -> Self {
        Self {
            id,
            u,
            v,
            w: 1,
            h: 1,
            color: PALETTE[id % PALETTE.len()],
        }
    }

    /// Returns `true` if the face is a 1x1 grid square.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.w == 1 && self.h == 1
    }

    /// Center of the face in flat grid coordinates.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            f64::from(self.u) + f64::from(self.w) / 2.0,
            f64::from(self.v) + f64::from(self.h) / 2.0,
        )
    }

    /// The four corners in flat grid coordinates, ordered top-left,
    /// top-right, bottom-right, bottom-left ("top" is +v).
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let (u0, v0) = (f64::from(self.u), f64::from(self.v));
        let (u1, v1) = (u0 + f64::from(self.w), v0 + f64::from(self.h));
        [
            Point2::new(u0, v1),
            Point2::new(u1, v1),
            Point2::new(u1, v0),
            Point2::new(u0, v0),
        ]
    }
}

/// A hinge edge between two grid-adjacent faces.
///
/// Stored symmetrically: for every `(from, to, dir)` the net also holds
/// `(to, from, dir.opposite())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    pub from: FaceId,
    pub to: FaceId,
    pub dir: Direction,
}

/// A flat net of six faces, the boundary record exchanged with the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Net {
    pub id: u32,
    pub label: String,
    pub faces: Vec<Face>,
    pub adjacency: Vec<Adjacency>,
    pub canonical_key: Option<String>,
    pub removed_face: Option<FaceId>,
}

/// Required number of faces in every net.
pub const FACE_COUNT: usize = 6;

/// Builds a net from six unit-cell anchors.
///
/// Face ids follow the input order. Adjacency is derived from the grid: two
/// cells are hinged when their anchors differ by one along exactly one axis.
///
/// # Errors
///
/// Returns [`NetError::WrongFaceCount`] unless exactly 6 cells are given.
pub fn build_net_from_cells(cells: &[(i32, i32)]) -> Result<Net> {
    if cells.len() != FACE_COUNT {
        return Err(NetError::WrongFaceCount(cells.len()).into());
    }

    let faces: Vec<Face> = cells
        .iter()
        .enumerate()
        .map(|(id, &(u, v))| Face::unit(id, u, v))
        .collect();

    let adjacency = derive_adjacency(&faces);

    Ok(Net {
        id: 0,
        label: "custom".to_owned(),
        faces,
        adjacency,
        canonical_key: None,
        removed_face: None,
    })
}

/// Computes the symmetric adjacency list for a face set.
#[must_use]
pub fn derive_adjacency(faces: &[Face]) -> Vec<Adjacency> {
    let mut adjacency = Vec::new();
    for a in faces {
        for b in faces {
            if a.id < b.id {
                if let Some(dir) = adjacent_direction(a, b) {
                    adjacency.push(Adjacency { from: a.id, to: b.id, dir });
                    adjacency.push(Adjacency {
                        from: b.id,
                        to: a.id,
                        dir: dir.opposite(),
                    });
                }
            }
        }
    }
    adjacency
}

/// Returns the direction of `b` relative to `a` if the two rectangles share
/// a boundary segment of positive length, `None` otherwise.
///
/// For unit faces this reduces to the Manhattan-distance-1 test on anchors.
#[must_use]
pub fn adjacent_direction(a: &Face, b: &Face) -> Option<Direction> {
    let overlap = |s0: i32, s1: i32, t0: i32, t1: i32| s0.max(t0) < s1.min(t1);

    let u_overlap = overlap(a.u, a.u + a.w, b.u, b.u + b.w);
    let v_overlap = overlap(a.v, a.v + a.h, b.v, b.v + b.h);

    if b.v == a.v + a.h && u_overlap {
        Some(Direction::Up)
    } else if a.v == b.v + b.h && u_overlap {
        Some(Direction::Down)
    } else if b.u == a.u + a.w && v_overlap {
        Some(Direction::Right)
    } else if a.u == b.u + b.w && v_overlap {
        Some(Direction::Left)
    } else {
        None
    }
}

impl Net {
    /// Looks up a face by id.
    #[must_use]
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.iter().find(|f| f.id == id)
    }

    /// The face anchors in face-id order.
    #[must_use]
    pub fn cells(&self) -> Vec<(i32, i32)> {
        self.faces.iter().map(|f| (f.u, f.v)).collect()
    }

    /// Produces a value-independent deep copy for puzzle play, re-asserting
    /// the structural invariants instead of trusting the source.
    ///
    /// # Errors
    ///
    /// Returns a [`NetError`] if the net does not have exactly 6 faces with
    /// unique ids forming a single edge-connected region.
    pub fn checked_clone(&self) -> Result<Net> {
        if self.faces.len() != FACE_COUNT {
            return Err(NetError::WrongFaceCount(self.faces.len()).into());
        }
        let mut seen = [false; FACE_COUNT];
        for face in &self.faces {
            if face.id >= FACE_COUNT || seen[face.id] {
                return Err(NetError::DuplicateFaceId(face.id).into());
            }
            seen[face.id] = true;
        }
        if !self.is_connected() {
            return Err(NetError::Disconnected.into());
        }
        Ok(self.clone())
    }

    /// Returns `true` if the faces form a single edge-connected region.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        // Recomputed from the grid footprints, not the stored adjacency.
        let mut visited = vec![false; self.faces.len()];
        let mut stack = vec![0];
        visited[0] = true;
        while let Some(i) = stack.pop() {
            for (j, other) in self.faces.iter().enumerate() {
                if !visited[j] && adjacent_direction(&self.faces[i], other).is_some() {
                    visited[j] = true;
                    stack.push(j);
                }
            }
        }
        visited.into_iter().all(|v| v)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // Horizontal Latin cross: row of four with one cell above and below the
    // second column.
    const CROSS: [(i32, i32); 6] =
        [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1), (3, 1)];

    #[test]
    fn build_assigns_ids_in_input_order() {
        let net = build_net_from_cells(&CROSS).unwrap();
        assert_eq!(net.faces.len(), 6);
        for (i, face) in net.faces.iter().enumerate() {
            assert_eq!(face.id, i);
            assert!(face.is_unit());
        }
        assert_eq!((net.faces[5].u, net.faces[5].v), (3, 1));
    }

    #[test]
    fn build_derives_symmetric_adjacency() {
        let net = build_net_from_cells(&CROSS).unwrap();
        // Face 2 at (1,1) touches all of 0,1,3,4; plus 4-5: ten directed
        // edges in total.
        assert_eq!(net.adjacency.len(), 10);
        assert!(net.adjacency.contains(&Adjacency {
            from: 2,
            to: 4,
            dir: Direction::Right
        }));
        assert!(net.adjacency.contains(&Adjacency {
            from: 4,
            to: 2,
            dir: Direction::Left
        }));
        assert!(net.adjacency.contains(&Adjacency {
            from: 2,
            to: 3,
            dir: Direction::Up
        }));
        assert!(net.adjacency.contains(&Adjacency {
            from: 2,
            to: 1,
            dir: Direction::Down
        }));
    }

    #[test]
    fn build_rejects_wrong_cell_count() {
        let result = build_net_from_cells(&[(0, 0), (1, 0)]);
        assert!(result.is_err());
    }

    #[test]
    fn checked_clone_is_value_independent() {
        let net = build_net_from_cells(&CROSS).unwrap();
        let mut copy = net.checked_clone().unwrap();
        copy.removed_face = Some(3);
        assert_eq!(net.removed_face, None);
        assert_eq!(copy.removed_face, Some(3));
    }

    #[test]
    fn checked_clone_rejects_disconnected_net() {
        let net =
            build_net_from_cells(&[(0, 0), (1, 0), (2, 0), (4, 0), (5, 0), (6, 0)]).unwrap();
        assert!(net.checked_clone().is_err());
    }

    #[test]
    fn sized_faces_need_positive_shared_segment() {
        let a = Face { id: 0, u: 0, v: 0, w: 2, h: 2, color: PALETTE[0] };
        // Touches only at the corner (2, 2).
        let b = Face { id: 1, u: 2, v: 2, w: 1, h: 1, color: PALETTE[1] };
        assert_eq!(adjacent_direction(&a, &b), None);

        let c = Face { id: 2, u: 2, v: 1, w: 1, h: 1, color: PALETTE[2] };
        assert_eq!(adjacent_direction(&a, &c), Some(Direction::Right));
        assert_eq!(adjacent_direction(&c, &a), Some(Direction::Left));
    }
}
