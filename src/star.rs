//! Eight-point (or N-point) star motifs built from quadratic arcs, the unit
//! cell of the tiled geometric pattern.

use std::f64::consts::TAU;

use crate::{
    core::{BezPath, Point},
    error::{ArabesqueError, ArabesqueResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StarSpec {
    pub point_count: usize,
    pub outer_radius: f64,
    /// Control points sit at `outer_radius * inner_radius_ratio`. Values are
    /// clamped into `[0, 1]`; the boundaries give a degenerate but valid path.
    pub inner_radius_ratio: f64,
    pub rotation: f64,
}

impl StarSpec {
    pub fn validate(&self) -> ArabesqueResult<()> {
        if self.point_count == 0 {
            return Err(ArabesqueError::invalid_spec(
                "star point_count must be >= 1",
            ));
        }
        let finite = self.outer_radius.is_finite()
            && self.inner_radius_ratio.is_finite()
            && self.rotation.is_finite();
        if !finite {
            return Err(ArabesqueError::invalid_spec(
                "star parameters must be finite",
            ));
        }
        Ok(())
    }
}

/// Generate the closed star outline centered on the origin.
///
/// The path is one `move_to` to the first outer vertex, `point_count`
/// quadratic segments whose control points sit on the inner radius at the
/// half-step angle, and a `close_path`. The final segment ends exactly on the
/// first vertex, so the outline is closed even before `close_path`.
pub fn star_path(spec: &StarSpec) -> ArabesqueResult<BezPath> {
    spec.validate()?;

    let n = spec.point_count;
    let step = TAU / n as f64;
    let ratio = spec.inner_radius_ratio.clamp(0.0, 1.0);
    let inner = spec.outer_radius * ratio;

    let outer_vertex = |i: usize| {
        let angle = spec.rotation + (i % n) as f64 * step;
        Point::new(angle.cos() * spec.outer_radius, angle.sin() * spec.outer_radius)
    };

    let mut path = BezPath::new();
    path.move_to(outer_vertex(0));
    for i in 0..n {
        let angle = spec.rotation + i as f64 * step;
        let ctrl_angle = angle + step / 2.0;
        let ctrl = Point::new(ctrl_angle.cos() * inner, ctrl_angle.sin() * inner);
        path.quad_to(ctrl, outer_vertex(i + 1));
    }
    path.close_path();
    Ok(path)
}
