//! Keyframe animation for the cube's color and rotation.
//!
//! Every tick the animator nudges the color toward the current target and
//! integrates the rotation angle. Once per interval (300 ticks by default)
//! it samples a fresh target color and a fresh rotation sweep from a
//! uniform random source.

use std::ops::{AddAssign, Div, Sub};

use rand::Rng;
use tracing::debug;

use crate::state::CubeState;

/// Default number of ticks between keyframe resamples.
pub const DEFAULT_INTERVAL: u32 = 300;

/// A three-component vector, used both as an RGB color and as a direction.
///
/// Components are not range-clamped; the animator's delta construction keeps
/// colors inside [0, 1] by itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The components in (x, y, z) order.
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, k: f64) -> Vec3 {
        Vec3::new(self.x / k, self.y / k, self.z / k)
    }
}

/// A source of uniform random draws in [0, 1).
///
/// Injected into the animator so tests can substitute deterministic
/// sequences for the entropy-seeded generator the binary uses.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// Adapter exposing any `rand` generator as a [`UniformSource`].
pub struct RngSource<R>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Drives the cube's color and rotation, one discrete tick per frame.
///
/// Color moves piecewise-linearly between randomly sampled keyframes: the
/// per-tick delta is the exact difference of two targets divided by the
/// interval, so the color lands on the target after a full interval of
/// ticks. The rotation sweep sampled at a keyframe is the total rotation
/// for the following interval, not a per-tick amount.
pub struct KeyframeAnimator<S> {
    cube: CubeState,
    prev_target: Vec3,
    target: Vec3,
    delta: Vec3,
    sweep_deg: f64,
    ticks_left: u32,
    interval: u32,
    source: S,
}

impl<S: UniformSource> KeyframeAnimator<S> {
    /// Animator over the default cube state and interval.
    pub fn new(source: S) -> Self {
        Self::with_interval(source, DEFAULT_INTERVAL)
    }

    pub fn with_interval(source: S, interval: u32) -> Self {
        Self::with_state(source, interval, CubeState::default())
    }

    /// Animator starting from an explicit cube state. The state's color
    /// becomes the initial keyframe target, and the countdown starts at
    /// zero so the first tick resamples immediately.
    pub fn with_state(source: S, interval: u32, cube: CubeState) -> Self {
        debug_assert!(interval > 0);
        Self {
            prev_target: Vec3::ZERO,
            target: cube.color,
            delta: Vec3::ZERO,
            sweep_deg: 0.0,
            ticks_left: 0,
            interval,
            cube,
            source,
        }
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    pub fn color(&self) -> Vec3 {
        self.cube.color
    }

    pub fn rotation_deg(&self) -> f64 {
        self.cube.rotation_deg
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn previous_target(&self) -> Vec3 {
        self.prev_target
    }

    /// Per-tick color delta currently being applied.
    pub fn per_tick_delta(&self) -> Vec3 {
        self.delta
    }

    /// Total rotation (degrees, signed) swept over the current interval.
    pub fn sweep_deg(&self) -> f64 {
        self.sweep_deg
    }

    pub fn ticks_until_resample(&self) -> u32 {
        self.ticks_left
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn set_size(&mut self, size: f64) {
        self.cube.size = size;
    }

    /// Advance the animation by one tick.
    ///
    /// The color delta is added before the resample check, and the rotation
    /// increment uses the sweep that was stored entering the tick, so a
    /// resample only changes what later ticks apply.
    pub fn advance(&mut self) {
        self.cube.color += self.delta;

        let per_tick = self.sweep_deg / f64::from(self.interval);

        if self.ticks_left == 0 {
            self.ticks_left = self.interval;
            self.prev_target = self.target;
            self.target = Vec3::new(
                self.source.next_uniform(),
                self.source.next_uniform(),
                self.source.next_uniform(),
            );
            self.delta = (self.target - self.prev_target) / f64::from(self.interval);
            let sign = if self.source.next_uniform() > 0.5 {
                -1.0
            } else {
                1.0
            };
            self.sweep_deg = sign * 45.0 * (1.0 + self.source.next_uniform());
            debug!(
                color = ?self.target,
                sweep_deg = self.sweep_deg,
                "sampled keyframe"
            );
        } else {
            self.ticks_left -= 1;
        }

        self.cube.rotation_deg += per_tick;
        if self.cube.rotation_deg > 180.0 {
            self.cube.rotation_deg -= 360.0;
        }
        // The <= boundary keeps the angle in exactly (-180, 180].
        if self.cube.rotation_deg <= -180.0 {
            self.cube.rotation_deg += 360.0;
        }
    }
}
