#![forbid(unsafe_code)]

pub mod color;
pub mod core;
pub mod ease;
pub mod error;
pub mod pattern;
pub mod progress;
pub mod radial;
pub mod scene;
pub mod spiral;
pub mod star;
pub mod track;

pub use color::{ColorRamp, Rgba8};
pub use self::core::{BezPath, Point, Point3, Vec2};
pub use ease::Ease;
pub use error::{ArabesqueError, ArabesqueResult};
pub use pattern::{GridSpec, tile_origins};
pub use progress::{active_index, map_piecewise, map_progress, stagger_domain};
pub use radial::{PlacementSpec, place_radial, place_radial_jittered, place_radial_with_height};
pub use scene::{
    HeroFrame, HeroScene, OrbitFrame, OrbitScene, PatternFrame, PatternScene, SpiralFrame,
    SpiralScene, TimelineFrame, TimelineScene, nearest_within, scatter_unit,
};
pub use spiral::{ArchimedeanSpec, SpiralSpec, sample_spiral, spiral_polyline};
pub use star::{StarSpec, star_path};
pub use track::{InterpMode, Key, Lerp, Track};
