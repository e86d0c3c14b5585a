//! Scene evaluation is pure: a full pass over every scene at a grid of tick
//! values must serialize identically on every run.

use std::f64::consts::{FRAC_PI_2, TAU};

use arabesque::{
    ArchimedeanSpec, GridSpec, HeroScene, OrbitScene, PatternScene, PlacementSpec, Point,
    SpiralScene, SpiralSpec, StarSpec, TimelineScene,
};

fn mix64(mut z: u64) -> u64 {
    // SplitMix64 mixing function.
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

fn evaluate_all(ticks: usize) -> u64 {
    let hero = HeroScene {
        fade_out: [0.0, 0.3],
        title_chars: 17,
        char_share: 0.2,
    };
    let pattern = PatternScene {
        grid: GridSpec {
            width: 1280.0,
            height: 720.0,
            cell: 100.0,
        },
        star: StarSpec {
            point_count: 8,
            outer_radius: 40.0,
            inner_radius_ratio: 0.4,
            rotation: 0.0,
        },
        base_alpha: 0.1,
        alpha_swing: 0.05,
    };
    let spiral = SpiralScene {
        curve: ArchimedeanSpec {
            base_radius: 50.0,
            radius_per_radian: 30.0,
            sweep: 2.0 * TAU,
            angle_step: 0.1,
            rotation: 0.0,
        },
        orbs: PlacementSpec {
            count: 7,
            base_radius: 100.0,
            radius_growth: 50.0,
            angle_step: FRAC_PI_2,
            rotation_offset: 0.0,
        },
        hover_radius: 50.0,
    };
    let orbit = OrbitScene {
        rail: SpiralSpec {
            turns: 2.0,
            base_radius: 3.0,
            radius_growth_per_turn: 1.0,
            height_per_turn: 2.5,
            sample_count: 100,
        },
        orbs: PlacementSpec {
            count: 7,
            base_radius: 2.0,
            radius_growth: 0.4,
            angle_step: 1.1,
            rotation_offset: 0.0,
        },
        height_per_orb: 0.7,
        bob_amplitude: 0.001,
        bob_phase: FRAC_PI_2,
    };
    let timeline = TimelineScene {
        item_count: 7,
        fade: vec![(0.0, 0.0), (0.1, 1.0), (0.9, 1.0), (1.0, 0.0)],
        marker_lead: 0.1,
    };

    let mut digest = 0u64;
    for tick in 0..ticks {
        let t = tick as f64 / (ticks - 1) as f64;

        let frames = (
            hero.eval(t, [0.0, 1.0]).unwrap(),
            pattern.eval(t * TAU).unwrap(),
            spiral
                .eval(t * TAU, Some(Point::new(95.0, 5.0)))
                .unwrap(),
            orbit.eval(t * 30.0).unwrap(),
            timeline.eval(t * 3000.0, [0.0, 3000.0]).unwrap(),
        );

        let bytes = serde_json::to_vec(&(
            &frames.0, &frames.1, &frames.2, &frames.3, &frames.4,
        ))
        .unwrap();
        digest ^= digest_u64(&bytes);
    }
    digest
}

#[test]
fn scene_evaluation_is_deterministic() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let a = evaluate_all(20);
    let b = evaluate_all(20);
    assert_eq!(a, b);
}
