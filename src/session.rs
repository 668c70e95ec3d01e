//! Per-puzzle session state.
//!
//! One session owns a deep-cloned net, its fold simulator and the current
//! selection pair. All state is explicit and caller-owned, so several
//! puzzle instances can coexist and tests stay deterministic; the catalog's
//! canonical nets are never mutated through a session.

use crate::detect::{check_answer, classify_click, Selection};
use crate::error::{FoldError, Result};
use crate::fold::FoldSimulator;
use crate::math::Point2;
use crate::net::{FaceId, Net};

/// A running puzzle instance.
#[derive(Debug)]
pub struct Session {
    net: Net,
    simulator: FoldSimulator,
    picks: [Option<Selection>; 2],
}

impl Session {
    /// Starts a session on a deep clone of `net`.
    ///
    /// # Errors
    ///
    /// Fails when the net violates its structural invariants or cannot be
    /// folded.
    pub fn new(net: &Net) -> Result<Self> {
        let net = net.checked_clone()?;
        let mut simulator = FoldSimulator::new();
        simulator.load_net(&net)?;
        Ok(Self {
            net,
            simulator,
            picks: [None, None],
        })
    }

    /// The session's net.
    #[must_use]
    pub fn net(&self) -> &Net {
        &self.net
    }

    /// The session's fold simulator.
    #[must_use]
    pub fn simulator(&self) -> &FoldSimulator {
        &self.simulator
    }

    /// Current selection pair, in pick order.
    #[must_use]
    pub fn picks(&self) -> [Option<Selection>; 2] {
        self.picks
    }

    /// Classifies a click on the flat net and records it as a pick.
    ///
    /// The first two picks fill the pair; a further pick restarts it. Clicks
    /// that hit nothing leave the pair untouched.
    pub fn select(&mut self, click: &Point2) -> Option<Selection> {
        let selection = classify_click(&self.net, click)?;
        match self.picks {
            [Some(_), Some(_)] | [None, _] => self.picks = [Some(selection), None],
            [Some(_), None] => self.picks[1] = Some(selection),
        }
        Some(selection)
    }

    /// Clears the selection pair.
    pub fn clear_selection(&mut self) {
        self.picks = [None, None];
    }

    /// Sets the fold parameter.
    pub fn set_fold_progress(&mut self, t: f64) {
        self.simulator.set_fold_progress(t);
    }

    /// Jumps straight to the fully folded solid (the reference behavior for
    /// "fold animate"; interpolation, if wanted, is the caller's loop).
    pub fn fold_instantly(&mut self) {
        self.simulator.set_fold_progress(1.0);
    }

    /// Returns to the flat net.
    pub fn unfold(&mut self) {
        self.simulator.set_fold_progress(0.0);
    }

    /// Whether the two picked features coincide on the folded solid.
    /// `Ok(None)` while fewer than two picks are recorded.
    ///
    /// # Errors
    ///
    /// Fails when a pick names a face the simulator does not know.
    pub fn answer_matches(&self) -> Result<Option<bool>> {
        match self.picks {
            [Some(a), Some(b)] => Ok(Some(check_answer(&self.simulator, &a, &b)?)),
            _ => Ok(None),
        }
    }

    /// Marks a face as removed from the flat net (the "missing piece"
    /// puzzle); removed faces cannot be picked.
    ///
    /// # Errors
    ///
    /// Returns [`FoldError::UnknownFace`] for ids outside the net.
    pub fn remove_face(&mut self, id: FaceId) -> Result<()> {
        if self.net.face(id).is_none() {
            return Err(FoldError::UnknownFace(id).into());
        }
        self.net.removed_face = Some(id);
        Ok(())
    }

    /// Restores a previously removed face.
    pub fn restore_face(&mut self) {
        self.net.removed_face = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::net::catalog::Catalog;

    #[test]
    fn full_puzzle_round_trip() {
        let catalog = Catalog::new();
        let mut session = Session::new(catalog.by_id(1).unwrap()).unwrap();

        assert_eq!(session.answer_matches().unwrap(), None);

        // Corners (1, 0) on face 1 and (4, 1) on face 5 meet on the folded
        // cube.
        assert!(session.select(&Point2::new(1.02, 0.03)).is_some());
        assert!(session.select(&Point2::new(3.97, 1.02)).is_some());
        session.fold_instantly();
        assert_eq!(session.answer_matches().unwrap(), Some(true));

        session.unfold();
        session.clear_selection();
        assert_eq!(session.answer_matches().unwrap(), None);
    }

    #[test]
    fn a_third_pick_restarts_the_pair() {
        let catalog = Catalog::new();
        let mut session = Session::new(catalog.by_id(1).unwrap()).unwrap();

        session.select(&Point2::new(1.0, 0.0));
        session.select(&Point2::new(2.0, 0.0));
        let third = session.select(&Point2::new(4.0, 1.0)).unwrap();
        assert_eq!(session.picks(), [Some(third), None]);
    }

    #[test]
    fn sessions_never_mutate_the_catalog() {
        let catalog = Catalog::new();
        let reference = catalog.by_id(2).unwrap();
        let mut session = Session::new(reference).unwrap();
        session.remove_face(3).unwrap();

        assert_eq!(session.net().removed_face, Some(3));
        assert_eq!(catalog.by_id(2).unwrap().removed_face, None);

        session.restore_face();
        assert_eq!(session.net().removed_face, None);
    }

    #[test]
    fn remove_face_checks_the_id() {
        let catalog = Catalog::new();
        let mut session = Session::new(catalog.by_id(1).unwrap()).unwrap();
        assert!(session.remove_face(9).is_err());
        assert!(session.remove_face(0).is_ok());
    }

    #[test]
    fn misses_do_not_disturb_the_pair() {
        let catalog = Catalog::new();
        let mut session = Session::new(catalog.by_id(1).unwrap()).unwrap();
        let first = session.select(&Point2::new(1.0, 0.0)).unwrap();
        assert!(session.select(&Point2::new(8.0, 8.0)).is_none());
        assert_eq!(session.picks(), [Some(first), None]);
    }
}
