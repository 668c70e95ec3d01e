//! Hinge-tree fold simulation.
//!
//! A net folds by rotating every non-base face about the grid edge it shares
//! with its parent in a rooted spanning tree of the net adjacency. Each
//! hinge is a value-typed descriptor (`parent`, anchor, axis, target angle);
//! poses are recomputed from scratch for every query, so repeated calls with
//! the same fold parameter can never accumulate drift. The 3D engine is
//! reached only through the [`SceneAdapter`] trait and is never the source
//! of truth.

use std::f64::consts::FRAC_PI_2;

use crate::error::{FoldError, NetError, Result};
use crate::math::{rotation_about_line, Matrix4, Point2, Point3, Vector3};
use crate::net::{Direction, Face, FaceId, Net, FACE_COUNT};

/// A fold hinge connecting a face to its parent.
///
/// The anchor and axis are expressed in the flat (unfolded) frame, which
/// coincides with the parent's local frame; ancestor rotations carry the
/// hinge to its world placement during pose composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hinge {
    pub face: FaceId,
    pub parent: FaceId,
    pub anchor: Point3,
    pub axis: Vector3,
    pub target_angle: f64,
}

/// Immutable rooted hinge tree over the six face ids.
///
/// Face 0 is the base and carries no hinge. The tree is a breadth-first
/// spanning tree of the net adjacency in stored edge order, so it is
/// deterministic for a given net. For the catalog cross net this produces
/// the two-stage fold where the far lid face hangs off a hinge that itself
/// hangs off a non-base face.
#[derive(Debug, Clone)]
pub struct HingeTree {
    hinges: [Option<Hinge>; FACE_COUNT],
}

impl HingeTree {
    /// Derives the hinge tree for a net.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::WrongFaceCount`] for nets without exactly 6
    /// faces, and [`FoldError::MissingHinge`] when some face cannot be
    /// reached from the base through the adjacency list.
    pub fn from_net(net: &Net) -> Result<Self> {
        if net.faces.len() != FACE_COUNT {
            return Err(NetError::WrongFaceCount(net.faces.len()).into());
        }

        let mut hinges: [Option<Hinge>; FACE_COUNT] = [None; FACE_COUNT];
        let mut reached = [false; FACE_COUNT];
        reached[0] = true;
        let mut queue = std::collections::VecDeque::from([0]);

        while let Some(parent) = queue.pop_front() {
            for edge in net.adjacency.iter().filter(|e| e.from == parent) {
                let child = edge.to;
                if child >= FACE_COUNT || reached[child] {
                    continue;
                }
                let face = net.face(child).ok_or(FoldError::UnknownFace(child))?;
                hinges[child] = Some(Self::hinge_for(parent, face, edge.dir));
                reached[child] = true;
                queue.push_back(child);
            }
        }

        if let Some(unreached) = reached.iter().position(|r| !r) {
            return Err(FoldError::MissingHinge(unreached).into());
        }
        Ok(Self { hinges })
    }

    /// Builds the hinge rotating `child` about the edge it shares with its
    /// parent, signed so the face folds toward +z.
    fn hinge_for(parent: FaceId, child: &Face, dir: Direction) -> Hinge {
        let x_axis = Vector3::new(1.0, 0.0, 0.0);
        let y_axis = Vector3::new(0.0, 1.0, 0.0);
        let (anchor, axis, target_angle) = match dir {
            Direction::Right => (
                Point3::new(f64::from(child.u), f64::from(child.v), 0.0),
                y_axis,
                -FRAC_PI_2,
            ),
            Direction::Left => (
                Point3::new(f64::from(child.u + child.w), f64::from(child.v), 0.0),
                y_axis,
                FRAC_PI_2,
            ),
            Direction::Up => (
                Point3::new(f64::from(child.u), f64::from(child.v), 0.0),
                x_axis,
                FRAC_PI_2,
            ),
            Direction::Down => (
                Point3::new(f64::from(child.u), f64::from(child.v + child.h), 0.0),
                x_axis,
                -FRAC_PI_2,
            ),
        };
        Hinge {
            face: child.id,
            parent,
            anchor,
            axis,
            target_angle,
        }
    }

    /// The hinge attached to `face`, or `None` for the base face.
    #[must_use]
    pub fn hinge(&self, face: FaceId) -> Option<&Hinge> {
        self.hinges.get(face).and_then(Option::as_ref)
    }

    /// Composes the world transform for a face at fold parameter `t` by
    /// walking root to face and applying each ancestor hinge's absolute
    /// angle `target_angle * t`.
    #[must_use]
    pub fn pose_matrix(&self, face: FaceId, t: f64) -> Matrix4 {
        let mut chain = Vec::with_capacity(FACE_COUNT);
        let mut current = face;
        while let Some(hinge) = self.hinge(current) {
            chain.push(hinge);
            current = hinge.parent;
        }

        let mut matrix = Matrix4::identity();
        for hinge in chain.iter().rev() {
            matrix *= rotation_about_line(&hinge.anchor, &hinge.axis, hinge.target_angle * t);
        }
        matrix
    }
}

/// Rigid world pose of one face at a given fold parameter.
///
/// Derived per query, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePose {
    matrix: Matrix4,
    center: Point3,
}

impl FacePose {
    /// The world transform mapping flat-frame points to world space.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Maps a flat-frame point to world space.
    #[must_use]
    pub fn world_point(&self, flat: &Point2) -> Point3 {
        self.matrix
            .transform_point(&Point3::new(flat.x, flat.y, 0.0))
    }

    /// Maps an offset relative to the face center to world space.
    #[must_use]
    pub fn point_from_center(&self, du: f64, dv: f64) -> Point3 {
        self.matrix
            .transform_point(&Point3::new(self.center.x + du, self.center.y + dv, 0.0))
    }

    /// World position of the face center.
    #[must_use]
    pub fn world_center(&self) -> Point3 {
        self.matrix.transform_point(&self.center)
    }
}

/// Rendering boundary: planar primitives and their world transforms.
///
/// The simulator pushes poses through this trait; implementations own the
/// actual scene objects and may be swapped freely (tests use a recording
/// stub).
pub trait SceneAdapter {
    /// Creates the planar primitive for one face of the freshly loaded net.
    fn add_panel(&mut self, face: &Face);

    /// Updates the world transform of a face's primitive.
    fn set_panel_pose(&mut self, face: FaceId, pose: &Matrix4);

    /// Removes all primitives. Called before a new net is loaded and on
    /// disposal; must complete before the next tree is built.
    fn clear(&mut self);
}

/// Maps `(net, fold parameter)` to rigid 3D poses per face.
///
/// Single-threaded mutable state driven by one caller; "animating" a fold is
/// the caller's loop of [`FoldSimulator::set_fold_progress`] calls.
#[derive(Default)]
pub struct FoldSimulator {
    adapter: Option<Box<dyn SceneAdapter>>,
    net: Option<Net>,
    tree: Option<HingeTree>,
    progress: f64,
}

impl std::fmt::Debug for FoldSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldSimulator")
            .field("net", &self.net.as_ref().map(|n| n.id))
            .field("progress", &self.progress)
            .field("has_adapter", &self.adapter.is_some())
            .finish()
    }
}

impl FoldSimulator {
    /// Creates an empty simulator with no scene attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the rendering adapter. Panels for an already-loaded net are
    /// created immediately.
    pub fn init(&mut self, adapter: Box<dyn SceneAdapter>) {
        self.adapter = Some(adapter);
        if let Some(net) = self.net.clone() {
            self.populate_panels(&net);
            self.push_poses();
        }
    }

    /// Loads a net, replacing any previous hinge tree and panels.
    ///
    /// The hinge tree is derived before the old state is touched, so a
    /// malformed net leaves the simulator unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::WrongFaceCount`] or [`FoldError::MissingHinge`]
    /// for nets the fold tree cannot be built from.
    pub fn load_net(&mut self, net: &Net) -> Result<()> {
        let tree = HingeTree::from_net(net)?;
        let net = net.checked_clone()?;

        // Dispose the previous tree fully before installing the new one.
        self.tree = None;
        self.net = None;
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.clear();
        }

        self.populate_panels(&net);
        self.net = Some(net);
        self.tree = Some(tree);
        self.progress = 0.0;
        self.push_poses();
        Ok(())
    }

    fn populate_panels(&mut self, net: &Net) {
        if let Some(adapter) = self.adapter.as_mut() {
            for face in &net.faces {
                adapter.add_panel(face);
            }
        }
    }

    /// Sets the absolute fold parameter, clamped to `[0, 1]`.
    ///
    /// Idempotent: every hinge angle is `target_angle * t`, so repeated
    /// calls with the same `t` produce identical poses.
    pub fn set_fold_progress(&mut self, t: f64) {
        self.progress = t.clamp(0.0, 1.0);
        self.push_poses();
    }

    /// The current fold parameter.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The currently loaded net, if any.
    #[must_use]
    pub fn net(&self) -> Option<&Net> {
        self.net.as_ref()
    }

    /// Computes the world pose of a face at the current fold parameter.
    ///
    /// # Errors
    ///
    /// Returns [`FoldError::NoNetLoaded`] or [`FoldError::UnknownFace`].
    pub fn face_pose(&self, face: FaceId) -> Result<FacePose> {
        let net = self.net.as_ref().ok_or(FoldError::NoNetLoaded)?;
        let tree = self.tree.as_ref().ok_or(FoldError::NoNetLoaded)?;
        let face = net.face(face).ok_or(FoldError::UnknownFace(face))?;
        let center = face.center();
        Ok(FacePose {
            matrix: tree.pose_matrix(face.id, self.progress),
            center: Point3::new(center.x, center.y, 0.0),
        })
    }

    /// Drops the net, hinge tree and all scene panels.
    pub fn dispose(&mut self) {
        self.tree = None;
        self.net = None;
        self.progress = 0.0;
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.clear();
        }
    }

    fn push_poses(&mut self) {
        let Some((net, tree)) = self.net.as_ref().zip(self.tree.as_ref()) else {
            return;
        };
        let poses: Vec<(FaceId, Matrix4)> = net
            .faces
            .iter()
            .map(|f| (f.id, tree.pose_matrix(f.id, self.progress)))
            .collect();
        if let Some(adapter) = self.adapter.as_mut() {
            for (face, matrix) in &poses {
                adapter.set_panel_pose(*face, matrix);
            }
        }
    }
}
