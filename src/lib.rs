//! # hilbert-tube
//!
//! An engine-agnostic generation crate for space-filling curves that translates
//! L-System grammars into renderable tube geometry.
//!
//! It decouples the *Grammar* (L-System definition) from the *Geometry* (mesh
//! data), producing plain point paths and [`TubeMesh`] structures that can be
//! ingested by any 3D engine or exporter. No renderer, camera or windowing
//! concern lives here.
//!
//! The pipeline is one-way: [`expand`] rewrites the grammar's axiom into a
//! symbol sentence, [`interpret`] traces the sentence into a 3D point path,
//! [`PolylineCurve`] exposes the path as a continuous `t ∈ [0,1]`
//! parametrization, and [`sweep`] samples that curve into a tube surface.

pub mod config;
pub mod curve;
pub mod grammar;
pub mod interpreter;
pub mod tube;
pub mod turtle;

pub use config::*;
pub use curve::*;
pub use grammar::*;
pub use interpreter::*;
pub use tube::*;
pub use turtle::*;

/// Errors produced by grammar expansion, curve sampling and tube sweeping.
#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    #[error("no rewrite rule for variable '{0}'")]
    UndefinedRule(char),

    #[error("invalid grammar definition: {0}")]
    InvalidGrammar(String),

    #[error("cannot sample an empty point path")]
    EmptyPath,

    #[error("curve parameter {0} is outside [0, 1]")]
    Domain(f32),

    #[error("invalid value for parameter {0}")]
    InvalidParameter(String),
}
