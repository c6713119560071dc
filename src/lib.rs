//! Console cube demo: keyframe color interpolation and wrapped rotation.
//!
//! The reusable piece is [`anim::KeyframeAnimator`], which advances one
//! discrete tick per rendered frame; the rest is a small software
//! rasterizer and a crossterm presentation layer.

pub mod anim;
pub mod graphics;
pub mod math;
pub mod state;
pub mod term;
