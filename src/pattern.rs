//! Viewport tiling for the repeated star motif.

use crate::{
    core::Point,
    error::{ArabesqueError, ArabesqueResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    pub width: f64,
    pub height: f64,
    /// Cell size; also the motif spacing. Must be > 0.
    pub cell: f64,
}

impl GridSpec {
    pub fn validate(&self) -> ArabesqueResult<()> {
        if !(self.cell.is_finite() && self.cell > 0.0) {
            return Err(ArabesqueError::invalid_spec("grid cell must be > 0"));
        }
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(ArabesqueError::invalid_spec(
                "grid dimensions must be finite",
            ));
        }
        Ok(())
    }
}

/// Cell origins covering the viewport, with one extra cell of overscan on
/// each axis so a motif straddling the right/bottom edge still gets drawn.
pub fn tile_origins(spec: &GridSpec) -> ArabesqueResult<Vec<Point>> {
    spec.validate()?;
    let mut origins = Vec::new();
    let mut x = 0.0;
    while x < spec.width + spec.cell {
        let mut y = 0.0;
        while y < spec.height + spec.cell {
            origins.push(Point::new(x, y));
            y += spec.cell;
        }
        x += spec.cell;
    }
    Ok(origins)
}
