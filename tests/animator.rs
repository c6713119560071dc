//! Long-run properties of the keyframe animator under a real generator.

use rand::rngs::StdRng;
use rand::SeedableRng;

use chromacube::anim::{KeyframeAnimator, RngSource, Vec3};

fn seeded(seed: u64) -> KeyframeAnimator<RngSource<StdRng>> {
    KeyframeAnimator::new(RngSource(StdRng::seed_from_u64(seed)))
}

#[test]
fn rotation_invariant_holds_for_100k_ticks() {
    let mut anim = seeded(1);
    for tick in 0..100_000 {
        anim.advance();
        let rot = anim.rotation_deg();
        assert!(
            rot > -180.0 && rot <= 180.0,
            "angle {rot} out of range at tick {tick}"
        );
    }
}

#[test]
fn color_steps_match_stored_delta_between_resamples() {
    let mut anim = seeded(2);
    anim.advance();
    for _ in 0..5_000 {
        let before = anim.color();
        let delta = anim.per_tick_delta();
        anim.advance();
        let mut expected = before;
        expected += delta;
        // Step 1 adds the stored delta before any resample, so this holds
        // on every tick including resample ticks.
        assert_eq!(anim.color(), expected);
    }
}

#[test]
fn delta_sum_telescopes_over_every_interval() {
    let mut anim = seeded(3);
    anim.advance(); // first resample

    for _ in 0..20 {
        let prev = anim.previous_target();
        let target = anim.target();
        let mut applied = Vec3::ZERO;
        // A full interval of plain ticks runs the countdown back to zero.
        for _ in 0..anim.interval() {
            applied += anim.per_tick_delta();
            anim.advance();
        }
        let d = applied - (target - prev);
        assert!(
            d.x.abs() < 1e-9 && d.y.abs() < 1e-9 && d.z.abs() < 1e-9,
            "applied {applied:?} != {:?}",
            target - prev
        );
        anim.advance(); // next resample tick
    }
}

#[test]
fn sweep_sign_is_balanced_over_10k_resamples() {
    // Interval 1 resamples every other tick, keeping the run short.
    let mut anim = KeyframeAnimator::with_interval(RngSource(StdRng::seed_from_u64(4)), 1);

    let mut sweeps = Vec::with_capacity(10_000);
    let mut last = 0.0;
    while sweeps.len() < 10_000 {
        anim.advance();
        if anim.sweep_deg() != last {
            last = anim.sweep_deg();
            sweeps.push(last);
        }
    }

    let negatives = sweeps.iter().filter(|s| **s < 0.0).count() as f64;
    let positives = sweeps.len() as f64 - negatives;

    // Chi-square with one degree of freedom against a fair coin; 6.63 is
    // the 99% critical value.
    let expected = sweeps.len() as f64 / 2.0;
    let chi2 = (negatives - expected).powi(2) / expected
        + (positives - expected).powi(2) / expected;
    assert!(chi2 < 6.63, "sign distribution skewed: chi2 = {chi2}");

    for s in &sweeps {
        let mag = s.abs();
        assert!((45.0..90.0).contains(&mag), "sweep magnitude {mag}");
    }
}

#[test]
fn colors_stay_near_the_unit_range() {
    let mut anim = seeded(5);
    // Keyframe endpoints are uniform draws in [0, 1). The delta applied on
    // a resample tick belongs to the outgoing segment, which leaves a
    // residual that telescopes across intervals and is bounded by one
    // per-tick delta, so components never stray more than 1/interval
    // outside the unit range.
    let margin = 1.0 / f64::from(anim.interval()) + 1e-9;
    for _ in 0..50_000 {
        anim.advance();
        let [r, g, b] = anim.color().components();
        for c in [r, g, b] {
            assert!(
                (-margin..1.0 + margin).contains(&c),
                "component {c} out of range"
            );
        }
    }
}

#[test]
fn zero_advances_leave_state_at_its_initial_values() {
    let anim = seeded(6);
    assert_eq!(anim.color(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(anim.rotation_deg(), 0.0);
    assert_eq!(anim.ticks_until_resample(), 0);
    assert_eq!(anim.sweep_deg(), 0.0);
}
