//! Rotation/reflection-invariant canonical keys for hexomino cell layouts.
//!
//! Two nets describe the same cutout shape exactly when their cell layouts
//! agree up to a plane symmetry. The canonical key quotients out the eight
//! symmetries of the grid (4 rotations x optional flip) plus translation, so
//! key equality is shape equality.

/// Computes the canonical key of a cell layout.
///
/// For each of the 8 plane symmetries the cells are transformed, translated
/// so the minimum coordinates become 0, sorted lexicographically and
/// serialized; the key is the smallest serialization. Deterministic, fixed
/// 6x8 work.
#[must_use]
pub fn canonical_key(cells: &[(i32, i32)]) -> String {
    let mut best: Option<String> = None;
    for rotations in 0..4 {
        for flip in [false, true] {
            let mut transformed: Vec<(i32, i32)> = cells
                .iter()
                .map(|&(mut x, mut y)| {
                    if flip {
                        y = -y;
                    }
                    for _ in 0..rotations {
                        (x, y) = (-y, x);
                    }
                    (x, y)
                })
                .collect();
            normalize(&mut transformed);
            let key = serialize(&transformed);
            if best.as_ref().is_none_or(|b| key < *b) {
                best = Some(key);
            }
        }
    }
    best.unwrap_or_default()
}

/// Translates cells so the minimum u and v become 0, then sorts them.
fn normalize(cells: &mut [(i32, i32)]) {
    let min_u = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let min_v = cells.iter().map(|c| c.1).min().unwrap_or(0);
    for cell in cells.iter_mut() {
        cell.0 -= min_u;
        cell.1 -= min_v;
    }
    cells.sort_unstable();
}

fn serialize(cells: &[(i32, i32)]) -> String {
    let parts: Vec<String> = cells.iter().map(|&(u, v)| format!("{u},{v}")).collect();
    parts.join(";")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const CROSS: [(i32, i32); 6] = [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1), (3, 1)];
    const STAIRCASE: [(i32, i32); 6] = [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2)];

    fn rotate(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
        cells.iter().map(|&(x, y)| (-y, x)).collect()
    }

    fn flip(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
        cells.iter().map(|&(x, y)| (x, -y)).collect()
    }

    #[test]
    fn key_survives_all_eight_symmetries() {
        let reference = canonical_key(&CROSS);
        let mut cells: Vec<(i32, i32)> = CROSS.to_vec();
        for _ in 0..4 {
            cells = rotate(&cells);
            assert_eq!(canonical_key(&cells), reference);
            assert_eq!(canonical_key(&flip(&cells)), reference);
        }
    }

    #[test]
    fn key_ignores_translation_and_order() {
        let shifted: Vec<(i32, i32)> = CROSS.iter().map(|&(u, v)| (u + 7, v - 3)).collect();
        assert_eq!(canonical_key(&shifted), canonical_key(&CROSS));

        let mut reversed: Vec<(i32, i32)> = CROSS.to_vec();
        reversed.reverse();
        assert_eq!(canonical_key(&reversed), canonical_key(&CROSS));
    }

    #[test]
    fn distinct_shapes_get_distinct_keys() {
        assert_ne!(canonical_key(&CROSS), canonical_key(&STAIRCASE));
    }

    #[test]
    fn half_turn_of_cross_matches() {
        let rotated: Vec<(i32, i32)> = CROSS.iter().map(|&(x, y)| (-x, -y)).collect();
        assert_eq!(canonical_key(&rotated), canonical_key(&CROSS));
    }

    /// Grows a connected hexomino by attaching each next cell to a previously
    /// placed one, direction chosen by the seed (duplicates collapse, so the
    /// result has up to 6 cells, always connected).
    fn hexomino_from_seed(seed: &[usize; 10]) -> Vec<(i32, i32)> {
        const STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let mut cells: Vec<(i32, i32)> = vec![(0, 0)];
        let mut i = 0;
        while cells.len() < 6 && i < seed.len() {
            let base = cells[seed[i] % cells.len()];
            let step = STEPS[(seed[i] / 4) % 4];
            let next = (base.0 + step.0, base.1 + step.1);
            if !cells.contains(&next) {
                cells.push(next);
            }
            i += 1;
        }
        cells
    }

    proptest! {
        #[test]
        fn key_invariant_under_random_symmetry(
            seed in prop::array::uniform10(0usize..64),
            rotations in 0usize..4,
            do_flip in proptest::bool::ANY,
            du in -20i32..20,
            dv in -20i32..20,
        ) {
            let cells = hexomino_from_seed(&seed);
            let mut image: Vec<(i32, i32)> = cells.clone();
            if do_flip {
                image = flip(&image);
            }
            for _ in 0..rotations {
                image = rotate(&image);
            }
            let image: Vec<(i32, i32)> =
                image.iter().map(|&(u, v)| (u + du, v + dv)).collect();
            prop_assert_eq!(canonical_key(&image), canonical_key(&cells));
        }
    }
}
