//! Turtle state and operations for curve tracing.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Operations that can be performed by the tracing turtle.
///
/// Every rotation is an exact quarter turn about one of the three canonical
/// body axes; no other angles exist in this model, which is what keeps the
/// traced path on an integer lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move one step along the current heading, appending a path point (`F`).
    Forward,
    /// Quarter turn about the up axis (`+`).
    TurnLeft,
    /// Quarter turn about the up axis, opposite sense (`-`).
    TurnRight,
    /// Quarter turn about the lateral axis (`^`).
    PitchUp,
    /// Quarter turn about the lateral axis, opposite sense (`&`).
    PitchDown,
    /// Quarter turn about the heading axis (`<`).
    RollLeft,
    /// Quarter turn about the heading axis, opposite sense (`>`).
    RollRight,
    /// No-op — symbol has no geometric effect.
    Ignore,
}

impl TurtleOp {
    /// The fixed rotation matrix for this operation, or `None` for
    /// [`TurtleOp::Forward`] and [`TurtleOp::Ignore`].
    ///
    /// The turtle advances along its local X axis, so rolls rotate about X,
    /// turns about Y and pitches about Z. Signs follow the convention that
    /// `TurnLeft` then `Forward` from the identity heading moves toward -Z,
    /// and `PitchUp` then `Forward` moves toward +Y.
    pub fn rotation(self) -> Option<Mat3> {
        match self {
            TurtleOp::TurnLeft => Some(Mat3::from_rotation_y(FRAC_PI_2)),
            TurtleOp::TurnRight => Some(Mat3::from_rotation_y(-FRAC_PI_2)),
            TurtleOp::PitchUp => Some(Mat3::from_rotation_z(FRAC_PI_2)),
            TurtleOp::PitchDown => Some(Mat3::from_rotation_z(-FRAC_PI_2)),
            TurtleOp::RollLeft => Some(Mat3::from_rotation_x(-FRAC_PI_2)),
            TurtleOp::RollRight => Some(Mat3::from_rotation_x(FRAC_PI_2)),
            TurtleOp::Forward | TurtleOp::Ignore => None,
        }
    }
}

/// The state of the tracing turtle.
///
/// A plain value: stepping produces a new state rather than mutating shared
/// data, so interpretation is a fold over the sentence and no turtle object
/// is observable outside it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the "cursor".
    pub position: Vec3,

    /// Current orientation as a 3×3 matrix. Columns are the turtle's local
    /// heading, up and lateral axes expressed in world space.
    pub heading: Mat3,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: Mat3::IDENTITY,
        }
    }
}

impl TurtleState {
    /// A turtle at `position` with the identity orientation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            heading: Mat3::IDENTITY,
        }
    }

    /// The turtle's local forward direction (X-axis) in world space.
    pub fn forward(&self) -> Vec3 {
        self.heading * Vec3::X
    }

    /// Returns the state with `rotation` composed onto the heading.
    ///
    /// Right-multiplication: rotations apply in the turtle's local frame.
    pub fn rotated(self, rotation: Mat3) -> Self {
        Self {
            position: self.position,
            heading: self.heading * rotation,
        }
    }

    /// Returns the state advanced one step along the heading.
    ///
    /// The rotated displacement is rounded component-wise before it is added,
    /// which pins the path to the integer lattice despite the floating-point
    /// quarter-turn matrices.
    pub fn advanced(self, step: f32) -> Self {
        let displacement = (self.heading * Vec3::new(step, 0.0, 0.0)).round();
        Self {
            position: self.position + displacement,
            heading: self.heading,
        }
    }
}
