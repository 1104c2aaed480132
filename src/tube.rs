//! Tube surface sweeping.
//!
//! Sweeps a circular cross-section along a [`Curve`] and emits a
//! [`TubeMesh`]: flat position/normal/uv/index arrays with no engine types,
//! ready to be uploaded by whatever renderer consumes the crate. The sweep
//! is the only in-crate caller of the curve sampler and exercises it at
//! `segments + 1` uniform parameters.

use crate::{Curve, CurveError};
use glam::{Mat3, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use tracing::debug;

/// Parameter step used for finite-difference tangents.
const TANGENT_DELTA: f32 = 1e-4;

/// Sampling parameters for a tube sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TubeSpec {
    /// Number of rings along the curve; the mesh has `segments + 1` rings.
    pub segments: u32,

    /// Radius of the circular cross-section.
    pub radius: f32,

    /// Vertices per ring; the seam vertex is duplicated for UV continuity.
    pub radial_segments: u32,
}

impl Default for TubeSpec {
    fn default() -> Self {
        Self {
            segments: 64,
            radius: 0.35,
            radial_segments: 32,
        }
    }
}

/// An engine-agnostic triangle mesh of a swept tube.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TubeMesh {
    /// Vertex positions, `(segments + 1) * (radial_segments + 1)` entries.
    pub positions: Vec<Vec3>,

    /// Unit outward surface normals, parallel to `positions`.
    pub normals: Vec<Vec3>,

    /// Texture coordinates: `u` along the tube, `v` around the ring.
    pub uvs: Vec<Vec2>,

    /// Triangle list, `segments * radial_segments * 6` entries.
    pub indices: Vec<u32>,
}

/// Sweeps `spec`'s cross-section along `curve`.
///
/// Ring frames are carried by parallel transport: the first normal is seeded
/// perpendicular to the initial tangent, and each subsequent frame is the
/// previous one rotated by the rotation that aligns consecutive tangents.
/// This keeps the tube twist-free along the axis-aligned runs of a lattice
/// curve.
///
/// Fails with [`CurveError::InvalidParameter`] on a degenerate spec
/// (`segments == 0`, `radial_segments < 3`, or a non-positive radius), and
/// propagates sampling errors from the curve.
pub fn sweep(curve: &impl Curve, spec: &TubeSpec) -> Result<TubeMesh, CurveError> {
    if spec.segments == 0 {
        return Err(CurveError::InvalidParameter("segments".to_string()));
    }
    if spec.radial_segments < 3 {
        return Err(CurveError::InvalidParameter("radial_segments".to_string()));
    }
    if !(spec.radius > 0.0 && spec.radius.is_finite()) {
        return Err(CurveError::InvalidParameter("radius".to_string()));
    }

    let rings = spec.segments as usize + 1;
    let ring_vertices = spec.radial_segments as usize + 1;

    let mut centers = Vec::with_capacity(rings);
    let mut tangents = Vec::with_capacity(rings);
    for i in 0..rings {
        let t = i as f32 / spec.segments as f32;
        centers.push(curve.point_at(t)?);
        let tangent = tangent_at(curve, t)?;
        // A zero difference (coincident path points) keeps the previous
        // direction instead of collapsing the frame.
        if tangent == Vec3::ZERO {
            tangents.push(tangents.last().copied().unwrap_or(Vec3::X));
        } else {
            tangents.push(tangent);
        }
    }

    let mut mesh = TubeMesh {
        positions: Vec::with_capacity(rings * ring_vertices),
        normals: Vec::with_capacity(rings * ring_vertices),
        uvs: Vec::with_capacity(rings * ring_vertices),
        indices: Vec::with_capacity(spec.segments as usize * spec.radial_segments as usize * 6),
    };

    let mut normal = seed_normal(tangents[0]);
    for i in 0..rings {
        if i > 0 {
            normal = transport(normal, tangents[i - 1], tangents[i]);
        }
        let binormal = tangents[i].cross(normal);

        for j in 0..ring_vertices {
            let theta = j as f32 / spec.radial_segments as f32 * TAU;
            let dir = (theta.cos() * normal + theta.sin() * binormal).normalize();
            mesh.positions.push(centers[i] + spec.radius * dir);
            mesh.normals.push(dir);
            mesh.uvs.push(Vec2::new(
                i as f32 / spec.segments as f32,
                j as f32 / spec.radial_segments as f32,
            ));
        }
    }

    let stride = ring_vertices as u32;
    for i in 1..=spec.segments {
        for j in 1..=spec.radial_segments {
            let a = stride * (i - 1) + (j - 1);
            let b = stride * i + (j - 1);
            let c = stride * i + j;
            let d = stride * (i - 1) + j;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    debug!(
        vertices = mesh.positions.len(),
        triangles = mesh.indices.len() / 3,
        "swept tube"
    );
    Ok(mesh)
}

/// Unit tangent from a symmetric finite difference, clamped to the domain.
fn tangent_at(curve: &impl Curve, t: f32) -> Result<Vec3, CurveError> {
    let t0 = (t - TANGENT_DELTA).max(0.0);
    let t1 = (t + TANGENT_DELTA).min(1.0);
    let delta = curve.point_at(t1)? - curve.point_at(t0)?;
    Ok(delta.normalize_or_zero())
}

/// First frame normal: perpendicular to `tangent`, seeded from the axis the
/// tangent points along least.
fn seed_normal(tangent: Vec3) -> Vec3 {
    let abs = tangent.abs();
    let reference = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let side = tangent.cross(reference).normalize();
    tangent.cross(side)
}

/// Rotates `normal` by the rotation carrying `from` onto `to`.
fn transport(normal: Vec3, from: Vec3, to: Vec3) -> Vec3 {
    let axis = from.cross(to);
    if axis.length_squared() <= f32::EPSILON {
        return normal;
    }
    let angle = from.dot(to).clamp(-1.0, 1.0).acos();
    Mat3::from_axis_angle(axis.normalize(), angle) * normal
}
