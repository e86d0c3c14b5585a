//! Per-view scene evaluation.
//!
//! Each scene struct is a thin configuration of the kernel: one struct per
//! view, one `eval` per animation tick. Progress, elapsed time, and cursor
//! position all arrive as explicit arguments — scenes never read a clock or
//! scroll state — and every frame struct serializes, so ticks can be
//! snapshotted and diffed in tests.

use crate::{
    core::{BezPath, Point, Point3, Vec2},
    error::{ArabesqueError, ArabesqueResult},
    pattern::{GridSpec, tile_origins},
    progress::{active_index, map_piecewise, map_progress, stagger_domain},
    radial::{PlacementSpec, place_radial, place_radial_with_height},
    spiral::{ArchimedeanSpec, SpiralSpec, sample_spiral, spiral_polyline},
    star::{StarSpec, star_path},
};

/// Index of the closest point within `radius` of `cursor`, or `None` when
/// nothing is in reach.
pub fn nearest_within(points: &[Point], cursor: Point, radius: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance(cursor);
        if d <= radius && best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Hero banner: fades out over the top of the scroll range while the title
/// characters enter staggered.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HeroScene {
    /// Unit-progress sub-domain over which the banner fades from 1 to 0.
    pub fade_out: [f64; 2],
    pub title_chars: usize,
    /// Fraction of the entrance each character occupies.
    pub char_share: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct HeroFrame {
    pub progress: f64,
    pub opacity: f64,
    /// Entrance progress per title character, in order.
    pub char_progress: Vec<f64>,
}

impl HeroScene {
    #[tracing::instrument(skip(self))]
    pub fn eval(&self, scroll: f64, domain: [f64; 2]) -> ArabesqueResult<HeroFrame> {
        let p = map_progress(scroll, domain, [0.0, 1.0]);
        let opacity = map_progress(p, self.fade_out, [1.0, 0.0]);
        let mut char_progress = Vec::with_capacity(self.title_chars);
        for i in 0..self.title_chars {
            let window = stagger_domain(i, self.title_chars, self.char_share)?;
            char_progress.push(map_progress(p, window, [0.0, 1.0]));
        }
        Ok(HeroFrame {
            progress: p,
            opacity,
            char_progress,
        })
    }
}

/// Full-viewport tiled star pattern with a slow rotation and two breathing
/// stroke alphas (warm/cool ends of the gradient).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PatternScene {
    pub grid: GridSpec,
    pub star: StarSpec,
    pub base_alpha: f64,
    pub alpha_swing: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PatternFrame {
    /// Cell origins; the motif is drawn once per origin.
    pub cells: Vec<Point>,
    pub motif: BezPath,
    pub warm_alpha: f64,
    pub cool_alpha: f64,
}

impl PatternScene {
    /// `time_angle` is the accumulated rotation in radians (one full loop of
    /// the original animation sweeps 0..2π).
    #[tracing::instrument(skip(self))]
    pub fn eval(&self, time_angle: f64) -> ArabesqueResult<PatternFrame> {
        let cells = tile_origins(&self.grid)?;
        let motif = star_path(&StarSpec {
            rotation: self.star.rotation + time_angle,
            ..self.star.clone()
        })?;
        let warm_alpha = (self.base_alpha + time_angle.sin() * self.alpha_swing).clamp(0.0, 1.0);
        let cool_alpha = (self.base_alpha + time_angle.cos() * self.alpha_swing).clamp(0.0, 1.0);
        Ok(PatternFrame {
            cells,
            motif,
            warm_alpha,
            cool_alpha,
        })
    }
}

/// Rotating flat spiral with sign orbs placed along it and hover pickup.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SpiralScene {
    pub curve: ArchimedeanSpec,
    pub orbs: PlacementSpec,
    pub hover_radius: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SpiralFrame {
    pub curve: Vec<Point>,
    pub orbs: Vec<Point>,
    /// Index of the orb under the cursor, if any.
    pub hovered: Option<usize>,
}

impl SpiralScene {
    #[tracing::instrument(skip(self))]
    pub fn eval(&self, rotation: f64, cursor: Option<Point>) -> ArabesqueResult<SpiralFrame> {
        let curve = spiral_polyline(&ArchimedeanSpec {
            rotation: self.curve.rotation + rotation,
            ..self.curve.clone()
        })?;
        let orbs = place_radial(&PlacementSpec {
            rotation_offset: self.orbs.rotation_offset + rotation,
            ..self.orbs.clone()
        })?;
        let hovered = cursor.and_then(|c| nearest_within(&orbs, c, self.hover_radius));
        Ok(SpiralFrame {
            curve,
            orbs,
            hovered,
        })
    }
}

/// 3D timeline: a rising spiral rail plus orbs lifted out of the plane, each
/// bobbing gently on its own phase.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OrbitScene {
    pub rail: SpiralSpec,
    pub orbs: PlacementSpec,
    pub height_per_orb: f64,
    pub bob_amplitude: f64,
    pub bob_phase: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct OrbitFrame {
    pub rail: Vec<Point3>,
    pub orbs: Vec<Point3>,
    /// Per-orb vertical bob offset for this tick.
    pub bob: Vec<f64>,
}

impl OrbitScene {
    #[tracing::instrument(skip(self))]
    pub fn eval(&self, elapsed: f64) -> ArabesqueResult<OrbitFrame> {
        let rail = sample_spiral(&self.rail)?;
        let orbs = place_radial_with_height(&self.orbs, |i| i as f64 * self.height_per_orb)?;
        let bob = (0..orbs.len())
            .map(|i| (elapsed + i as f64 * self.bob_phase).sin() * self.bob_amplitude)
            .collect();
        Ok(OrbitFrame { rail, orbs, bob })
    }
}

/// Scroll-driven progress timeline: a fill bar, a fading content panel, the
/// active sign index, and per-marker emphasis ramps.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimelineScene {
    pub item_count: usize,
    /// Piecewise opacity stops over unit progress (fade in, hold, fade out).
    pub fade: Vec<(f64, f64)>,
    /// How far ahead of a marker its emphasis starts ramping in.
    pub marker_lead: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct TimelineFrame {
    pub progress: f64,
    pub bar_height_pct: f64,
    pub content_opacity: f64,
    pub active: usize,
    /// Emphasis in `[0, 1]` per marker; feeds a color ramp at the call site.
    pub marker_emphasis: Vec<f64>,
}

impl TimelineScene {
    #[tracing::instrument(skip(self))]
    pub fn eval(&self, scroll: f64, domain: [f64; 2]) -> ArabesqueResult<TimelineFrame> {
        if self.item_count == 0 {
            return Err(ArabesqueError::invalid_spec(
                "timeline item_count must be >= 1",
            ));
        }
        let p = map_progress(scroll, domain, [0.0, 1.0]);
        let active = active_index(p, self.item_count)?;
        let bar_height_pct = map_progress(p, [0.0, 1.0], [0.0, 100.0]);
        let content_opacity = map_piecewise(p, &self.fade)?;
        let marker_emphasis = (0..self.item_count)
            .map(|i| {
                let at = if self.item_count == 1 {
                    0.0
                } else {
                    i as f64 / (self.item_count - 1) as f64
                };
                map_progress(p, [at - self.marker_lead, at], [0.0, 1.0])
            })
            .collect();
        Ok(TimelineFrame {
            progress: p,
            bar_height_pct,
            content_opacity,
            active,
            marker_emphasis,
        })
    }
}

/// Convenience for callers scattering decorative elements (hero orbs,
/// floating pattern tiles): jitter in unit coordinates scaled onto the
/// viewport. The jitter itself is produced and seeded by the caller.
pub fn scatter_unit(jitter: &[Vec2], width: f64, height: f64) -> Vec<Point> {
    jitter
        .iter()
        .map(|j| Point::new(j.x.clamp(0.0, 1.0) * width, j.y.clamp(0.0, 1.0) * height))
        .collect()
}
