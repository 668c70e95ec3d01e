//! Rectangular-prism net generator.
//!
//! An `a x b x c` prism has two `a x b` faces (ids 0/1), two `a x c` faces
//! (ids 2/3) and two `b x c` faces (ids 4/5). Six fixed layout templates
//! place the sized faces at grid offsets; all six are genuine edge
//! unfoldings of the prism, so the derived hinge tree folds each of them
//! closed.

use crate::error::{NetError, Result};
use crate::net::{derive_adjacency, Color, Face, FaceId, Net, PALETTE};

/// Builds a rectangular-prism net for extents `a`, `b`, `c` and one of the
/// six layout templates.
///
/// # Errors
///
/// Returns [`NetError::InvalidExtent`] for non-positive extents and
/// [`NetError::UnknownLayout`] for layout ids outside `1..=6`.
pub fn make_rect_net(a: i32, b: i32, c: i32, layout_id: u32) -> Result<Net> {
    for (name, value) in [("a", a), ("b", b), ("c", c)] {
        if value <= 0 {
            return Err(NetError::InvalidExtent { name, value }.into());
        }
    }

    // (id, u, v, w, h) per face; "bottom" (id 0) sits at (c, c) except in
    // the staircase layout, which anchors the band one column in.
    let placements: [(FaceId, i32, i32, i32, i32); 6] = match layout_id {
        // Side cross, lid chained past the right face.
        1 => [
            (0, c, c, a, b),
            (1, c + a + c, c, a, b),
            (2, c, 0, a, c),
            (3, c, c + b, a, c),
            (4, 0, c, c, b),
            (5, c + a, c, c, b),
        ],
        // Side cross, lid chained past the back face.
        2 => [
            (0, c, c, a, b),
            (1, c, c + b + c, a, b),
            (2, c, 0, a, c),
            (3, c, c + b, a, c),
            (4, 0, c, c, b),
            (5, c + a, c, c, b),
        ],
        // Vertical band front-bottom-back-top, side flaps on the top.
        3 => [
            (0, c, c, a, b),
            (1, c, c + b + c, a, b),
            (2, c, 0, a, c),
            (3, c, c + b, a, c),
            (4, 0, c + b + c, c, b),
            (5, c + a, c + b + c, c, b),
        ],
        // Vertical band, flaps split between bottom and top.
        4 => [
            (0, c, c, a, b),
            (1, c, c + b + c, a, b),
            (2, c, 0, a, c),
            (3, c, c + b, a, c),
            (4, 0, c, c, b),
            (5, c + a, c + b + c, c, b),
        ],
        // Staircase: flaps hang off the front and back faces.
        5 => [
            (0, b, c, a, b),
            (1, b, c + b + c, a, b),
            (2, b, 0, a, c),
            (3, b, c + b, a, c),
            (4, 0, 0, b, c),
            (5, b + a, c + b, b, c),
        ],
        // L-shape: bottom-right-top chain with the back riding the top.
        6 => [
            (0, c, c, a, b),
            (1, c + a + c, c, a, b),
            (2, c, 0, a, c),
            (3, c + a + c, c + b, a, c),
            (4, 0, c, c, b),
            (5, c + a, c, c, b),
        ],
        other => return Err(NetError::UnknownLayout(other).into()),
    };

    let faces: Vec<Face> = placements
        .iter()
        .map(|&(id, u, v, w, h)| Face {
            id,
            u,
            v,
            w,
            h,
            color: face_color(id),
        })
        .collect();
    let adjacency = derive_adjacency(&faces);

    Ok(Net {
        id: layout_id,
        label: format!("prism {a}x{b}x{c} layout {layout_id}"),
        faces,
        adjacency,
        canonical_key: None,
        removed_face: None,
    })
}

fn face_color(id: FaceId) -> Color {
    PALETTE[id % PALETTE.len()]
}
