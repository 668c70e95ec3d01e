//! The reference catalog of the 11 cube unfoldings.
//!
//! Hand-authored hexomino layouts, built once and used as ground truth for
//! validation. Entry 1 is the Latin cross written as a horizontal row of
//! four with one cell above and below the second column.

use rand::Rng;

use crate::canonical::canonical_key;
use crate::net::{derive_adjacency, Face, Net};

/// Layout table: `(id, label, cells)`. Face ids follow cell order.
///
/// Entries 1-6 are the 1-4-1 family (strip of four, one cell on each side),
/// 7-9 the 2-3-1 family, 10 the 2-2-2 staircase, 11 the 3-3 double row.
const LAYOUTS: [(u32, &str, [(i32, i32); 6]); 11] = [
    (1, "1-4-1 a", [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1), (3, 1)]),
    (2, "1-4-1 b", [(0, 2), (1, 0), (1, 1), (1, 2), (1, 3), (2, 1)]),
    (3, "1-4-1 c", [(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (2, 0)]),
    (4, "1-4-1 d", [(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (2, 1)]),
    (5, "1-4-1 e", [(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (2, 2)]),
    (6, "1-4-1 f", [(0, 0), (1, 0), (1, 1), (1, 2), (1, 3), (2, 3)]),
    (7, "2-3-1 a", [(0, 2), (1, 2), (1, 1), (2, 1), (3, 1), (1, 0)]),
    (8, "2-3-1 b", [(0, 2), (1, 2), (1, 1), (2, 1), (3, 1), (2, 0)]),
    (9, "2-3-1 c", [(0, 2), (1, 2), (1, 1), (2, 1), (3, 1), (3, 0)]),
    (10, "2-2-2", [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2)]),
    (11, "3-3", [(0, 0), (1, 0), (2, 0), (2, 1), (3, 1), (4, 1)]),
];

/// The immutable catalog of reference cube nets.
#[derive(Debug, Clone)]
pub struct Catalog {
    nets: Vec<Net>,
}

impl Catalog {
    /// Builds the catalog with canonical keys precomputed.
    #[must_use]
    pub fn new() -> Self {
        let nets = LAYOUTS
            .iter()
            .map(|&(id, label, cells)| {
                let faces: Vec<Face> = cells
                    .iter()
                    .enumerate()
                    .map(|(i, &(u, v))| Face::unit(i, u, v))
                    .collect();
                let adjacency = derive_adjacency(&faces);
                Net {
                    id,
                    label: label.to_owned(),
                    canonical_key: Some(canonical_key(&cells)),
                    faces,
                    adjacency,
                    removed_face: None,
                }
            })
            .collect();
        Self { nets }
    }

    /// All reference nets in catalog order.
    #[must_use]
    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    /// Looks up a reference net by its catalog id (1..=11).
    #[must_use]
    pub fn by_id(&self, id: u32) -> Option<&Net> {
        self.nets.iter().find(|n| n.id == id)
    }

    /// Picks a uniformly random reference net.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Net {
        &self.nets[rng.gen_range(0..self.nets.len())]
    }

    /// Returns `true` if `key` is the canonical key of some reference net.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.nets
            .iter()
            .any(|n| n.canonical_key.as_deref() == Some(key))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn eleven_connected_nets_with_keys() {
        let catalog = Catalog::new();
        assert_eq!(catalog.nets().len(), 11);
        for net in catalog.nets() {
            assert_eq!(net.faces.len(), 6);
            assert!(net.is_connected(), "net {} disconnected", net.id);
            assert!(net.canonical_key.is_some());
            assert!(net.checked_clone().is_ok());
        }
    }

    #[test]
    fn all_shapes_are_pairwise_distinct() {
        let catalog = Catalog::new();
        for a in catalog.nets() {
            for b in catalog.nets() {
                if a.id != b.id {
                    assert_ne!(
                        a.canonical_key, b.canonical_key,
                        "nets {} and {} share a shape",
                        a.id, b.id
                    );
                }
            }
        }
    }

    #[test]
    fn by_id_finds_every_entry() {
        let catalog = Catalog::new();
        for id in 1..=11 {
            assert_eq!(catalog.by_id(id).unwrap().id, id);
        }
        assert!(catalog.by_id(12).is_none());
    }

    #[test]
    fn random_returns_catalog_members() {
        let catalog = Catalog::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let net = catalog.random(&mut rng);
            assert!(catalog.by_id(net.id).is_some());
        }
    }
}
