//! Keyframe tracks over unit progress.
//!
//! A [`Track`] is the keyframed counterpart of the free functions in
//! [`crate::progress`]: values of any [`Lerp`] type keyed by a progress
//! position in `[0, 1]`, with per-key easing toward the next key.

use crate::{
    color::Rgba8,
    core::{Point, Point3, Vec2},
    ease::Ease,
    error::{ArabesqueError, ArabesqueResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point3::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rgba8::mix(*a, *b, t)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    pub keys: Vec<Key<T>>, // sorted by `at`
    pub mode: InterpMode,
    pub default: Option<T>, // value when no keys exist
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Key<T> {
    pub at: f64,
    pub value: T,
    pub ease: Ease, // ease applied toward the next key
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Key {
                at: 0.0,
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        }
    }

    pub fn validate(&self) -> ArabesqueResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(ArabesqueError::invalid_spec(
                "track must have at least one key or a default value",
            ));
        }
        if !self.keys.iter().all(|k| k.at.is_finite()) {
            return Err(ArabesqueError::invalid_spec(
                "track key positions must be finite",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ArabesqueError::invalid_spec(
                "track keys must be sorted by position",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, at: f64) -> ArabesqueResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| ArabesqueError::invalid_spec("track has no keys and no default"));
        }

        let idx = self.keys.partition_point(|k| k.at <= at);
        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at - a.at;
        if denom <= 0.0 {
            return Ok(a.value.clone());
        }

        let t = (at - a.at) / denom;
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Track<f64> {
        Track {
            keys: vec![
                Key {
                    at: 0.0,
                    value: 0.0,
                    ease: Ease::Linear,
                },
                Key {
                    at: 1.0,
                    value: 10.0,
                    ease: Ease::Linear,
                },
            ],
            mode: InterpMode::Linear,
            default: None,
        }
    }

    #[test]
    fn linear_interpolates_between_keys() {
        assert_eq!(ramp().sample(0.5).unwrap(), 5.0);
    }

    #[test]
    fn hold_is_constant_between_keys() {
        let mut track = ramp();
        track.mode = InterpMode::Hold;
        assert_eq!(track.sample(0.5).unwrap(), 0.0);
        assert_eq!(track.sample(1.0).unwrap(), 10.0);
    }

    #[test]
    fn samples_clamp_outside_key_span() {
        let track = ramp();
        assert_eq!(track.sample(-1.0).unwrap(), 0.0);
        assert_eq!(track.sample(2.0).unwrap(), 10.0);
    }

    #[test]
    fn duplicate_key_positions_do_not_divide_by_zero() {
        let track: Track<f64> = Track {
            keys: vec![
                Key {
                    at: 0.5,
                    value: 1.0,
                    ease: Ease::Linear,
                },
                Key {
                    at: 0.5,
                    value: 2.0,
                    ease: Ease::Linear,
                },
            ],
            mode: InterpMode::Linear,
            default: None,
        };
        track.validate().unwrap();
        let v = track.sample(0.5).unwrap();
        assert!(v.is_finite());
    }

    #[test]
    fn empty_track_needs_a_default() {
        let track: Track<f64> = Track {
            keys: vec![],
            mode: InterpMode::Linear,
            default: None,
        };
        assert!(track.validate().is_err());
        assert!(track.sample(0.0).is_err());

        let track = Track {
            keys: vec![],
            mode: InterpMode::Linear,
            default: Some(7.0),
        };
        track.validate().unwrap();
        assert_eq!(track.sample(0.3).unwrap(), 7.0);
    }

    #[test]
    fn unsorted_keys_fail_validation() {
        let track = Track {
            keys: vec![
                Key {
                    at: 0.8,
                    value: 0.0,
                    ease: Ease::Linear,
                },
                Key {
                    at: 0.2,
                    value: 1.0,
                    ease: Ease::Linear,
                },
            ],
            mode: InterpMode::Linear,
            default: None,
        };
        assert!(track.validate().is_err());
    }
}
