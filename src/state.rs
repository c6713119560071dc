use crate::anim::Vec3;

/// Scene state for the animated cube
#[derive(Clone, Copy, Debug)]
pub struct CubeState {
    /// Current face color, interpolated between keyframes
    pub color: Vec3,
    /// Current rotation angle around the spin axis, in degrees, kept in (-180, 180]
    pub rotation_deg: f64,
    /// Edge length scale factor
    pub size: f64,
}

impl Default for CubeState {
    /// The demo's starting state: a red, unrotated, unit-size cube.
    fn default() -> Self {
        CubeState {
            color: Vec3::new(1.0, 0.0, 0.0),
            rotation_deg: 0.0,
            size: 1.0,
        }
    }
}
