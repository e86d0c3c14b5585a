use crate::error::{ArabesqueError, ArabesqueResult};
use crate::progress::map_progress;

/// Straight-alpha RGBA8. These values feed stroke/fill colors at the
/// presentation layer, so alpha stays unmultiplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channel-wise linear mix, `t` clamped into `[0, 1]`.
    pub fn mix(a: Self, b: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        let t = t.clamp(0.0, 1.0);
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Multi-stop progress-to-color mapping, e.g. a timeline marker warming from
/// muted white to the accent color as progress approaches it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ColorRamp {
    /// `(progress, color)` stops, sorted by progress.
    pub stops: Vec<(f64, Rgba8)>,
}

impl ColorRamp {
    pub fn new(stops: Vec<(f64, Rgba8)>) -> ArabesqueResult<Self> {
        let ramp = Self { stops };
        ramp.validate()?;
        Ok(ramp)
    }

    pub fn validate(&self) -> ArabesqueResult<()> {
        if self.stops.is_empty() {
            return Err(ArabesqueError::invalid_spec(
                "color ramp needs at least one stop",
            ));
        }
        if !self.stops.iter().all(|s| s.0.is_finite()) {
            return Err(ArabesqueError::invalid_spec(
                "color ramp stops must be finite",
            ));
        }
        if !self.stops.windows(2).all(|w| w[0].0 <= w[1].0) {
            return Err(ArabesqueError::invalid_spec(
                "color ramp stops must be sorted by progress",
            ));
        }
        Ok(())
    }

    /// Sample the ramp at `t`, clamped to the outermost stops.
    pub fn sample(&self, t: f64) -> Rgba8 {
        let idx = self.stops.partition_point(|s| s.0 <= t);
        if idx == 0 {
            return self.stops[0].1;
        }
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].1;
        }
        let a = self.stops[idx - 1];
        let b = self.stops[idx];
        Rgba8::mix(a.1, b.1, map_progress(t, [a.0, b.0], [0.0, 1.0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_midpoint_rounds_channels() {
        let a = Rgba8::new(0, 0, 0, 0);
        let b = Rgba8::new(255, 215, 0, 255);
        let mid = Rgba8::mix(a, b, 0.5);
        assert_eq!(mid, Rgba8::new(128, 108, 0, 128));
    }

    #[test]
    fn mix_clamps_t() {
        let a = Rgba8::new(10, 10, 10, 255);
        let b = Rgba8::new(20, 20, 20, 255);
        assert_eq!(Rgba8::mix(a, b, -1.0), a);
        assert_eq!(Rgba8::mix(a, b, 2.0), b);
    }

    #[test]
    fn ramp_clamps_to_outer_stops() {
        let muted = Rgba8::new(255, 255, 255, 102);
        let accent = Rgba8::new(255, 215, 0, 255);
        let ramp = ColorRamp::new(vec![(0.0, muted), (0.5, accent)]).unwrap();
        assert_eq!(ramp.sample(-1.0), muted);
        assert_eq!(ramp.sample(1.0), accent);
        assert_eq!(ramp.sample(0.25), Rgba8::mix(muted, accent, 0.5));
    }

    #[test]
    fn ramp_rejects_empty_and_unsorted() {
        assert!(ColorRamp::new(vec![]).is_err());
        let a = Rgba8::new(0, 0, 0, 255);
        assert!(ColorRamp::new(vec![(0.5, a), (0.1, a)]).is_err());
    }
}
