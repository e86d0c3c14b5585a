//! Radial placement of decorative items around a center.
//!
//! Placement is pure and deterministic: identical specs yield identical
//! sequences. Decorative scatter comes in as an explicit jitter slice, never
//! from an internal RNG.

use crate::{
    core::{Point, Point3, Vec2},
    error::{ArabesqueError, ArabesqueResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PlacementSpec {
    pub count: usize,
    pub base_radius: f64,
    /// Added per item index; 0 keeps everything on one circle.
    pub radius_growth: f64,
    pub angle_step: f64,
    pub rotation_offset: f64,
}

impl PlacementSpec {
    pub fn validate(&self) -> ArabesqueResult<()> {
        if self.count == 0 {
            return Err(ArabesqueError::invalid_spec(
                "placement count must be >= 1",
            ));
        }
        let finite = self.base_radius.is_finite()
            && self.radius_growth.is_finite()
            && self.angle_step.is_finite()
            && self.rotation_offset.is_finite();
        if !finite {
            return Err(ArabesqueError::invalid_spec(
                "placement parameters must be finite",
            ));
        }
        Ok(())
    }

    fn polar(&self, i: usize) -> (f64, f64) {
        let angle = self.rotation_offset + i as f64 * self.angle_step;
        let radius = self.base_radius + i as f64 * self.radius_growth;
        (angle, radius)
    }
}

/// Place `spec.count` items on a circle (or outward spiral when
/// `radius_growth != 0`).
pub fn place_radial(spec: &PlacementSpec) -> ArabesqueResult<Vec<Point>> {
    spec.validate()?;
    Ok((0..spec.count)
        .map(|i| {
            let (angle, radius) = spec.polar(i);
            Point::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect())
}

/// [`place_radial`] with a per-item offset applied on top. Missing jitter
/// entries fall back to zero so a short slice never truncates the placement.
pub fn place_radial_jittered(spec: &PlacementSpec, jitter: &[Vec2]) -> ArabesqueResult<Vec<Point>> {
    let points = place_radial(spec)?;
    Ok(points
        .into_iter()
        .enumerate()
        .map(|(i, p)| p + jitter.get(i).copied().unwrap_or(Vec2::ZERO))
        .collect())
}

/// 3D placement: the circle lies in the xz plane and `height` supplies the
/// y coordinate per item, matching the spiral sampler's y-up convention.
pub fn place_radial_with_height<F>(spec: &PlacementSpec, height: F) -> ArabesqueResult<Vec<Point3>>
where
    F: Fn(usize) -> f64,
{
    spec.validate()?;
    Ok((0..spec.count)
        .map(|i| {
            let (angle, radius) = spec.polar(i);
            Point3::new(angle.cos() * radius, height(i), angle.sin() * radius)
        })
        .collect())
}
