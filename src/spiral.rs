//! Spiral path sampling: the 3D rail the timeline orbs orbit along, and the
//! 2D Archimedean curve drawn on the canvas spiral view.

use std::f64::consts::TAU;

use crate::{
    core::{Point, Point3},
    error::{ArabesqueError, ArabesqueResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SpiralSpec {
    /// Number of full rotations over the sampled span.
    pub turns: f64,
    pub base_radius: f64,
    pub radius_growth_per_turn: f64,
    pub height_per_turn: f64,
    /// Must be >= 2; a single point cannot define a path.
    pub sample_count: usize,
}

impl SpiralSpec {
    pub fn validate(&self) -> ArabesqueResult<()> {
        if self.sample_count < 2 {
            return Err(ArabesqueError::invalid_spec(
                "spiral sample_count must be >= 2",
            ));
        }
        let finite = self.turns.is_finite()
            && self.base_radius.is_finite()
            && self.radius_growth_per_turn.is_finite()
            && self.height_per_turn.is_finite();
        if !finite {
            return Err(ArabesqueError::invalid_spec(
                "spiral parameters must be finite",
            ));
        }
        Ok(())
    }
}

/// Sample the spiral into `sample_count` points with `t` inclusive at both
/// ends. The output is raw control points; fitting a smooth curve through
/// them (e.g. Catmull-Rom) is the renderer's job.
pub fn sample_spiral(spec: &SpiralSpec) -> ArabesqueResult<Vec<Point3>> {
    spec.validate()?;
    let n = spec.sample_count;
    Ok((0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            let angle = t * spec.turns * TAU;
            let radius = spec.base_radius + t * spec.turns * spec.radius_growth_per_turn;
            Point3::new(
                angle.cos() * radius,
                t * spec.turns * spec.height_per_turn,
                angle.sin() * radius,
            )
        })
        .collect())
}

/// Flat spiral `r = base_radius + θ * radius_per_radian`, sampled in fixed
/// angle steps over `θ ∈ [0, sweep)` and rotated as a whole by `rotation`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ArchimedeanSpec {
    pub base_radius: f64,
    pub radius_per_radian: f64,
    /// Total swept angle in radians; negative sweeps produce an empty curve.
    pub sweep: f64,
    pub angle_step: f64,
    pub rotation: f64,
}

impl ArchimedeanSpec {
    pub fn validate(&self) -> ArabesqueResult<()> {
        if !(self.angle_step.is_finite() && self.angle_step > 0.0) {
            return Err(ArabesqueError::invalid_spec(
                "archimedean angle_step must be > 0",
            ));
        }
        let finite = self.base_radius.is_finite()
            && self.radius_per_radian.is_finite()
            && self.sweep.is_finite()
            && self.rotation.is_finite();
        if !finite {
            return Err(ArabesqueError::invalid_spec(
                "archimedean parameters must be finite",
            ));
        }
        Ok(())
    }
}

pub fn spiral_polyline(spec: &ArchimedeanSpec) -> ArabesqueResult<Vec<Point>> {
    spec.validate()?;
    let mut points = Vec::new();
    let mut theta = 0.0;
    while theta < spec.sweep {
        let radius = spec.base_radius + theta * spec.radius_per_radian;
        let angle = theta + spec.rotation;
        points.push(Point::new(angle.cos() * radius, angle.sin() * radius));
        theta += spec.angle_step;
    }
    Ok(points)
}
