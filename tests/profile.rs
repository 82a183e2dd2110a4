// tests/profile.rs
use approx::assert_abs_diff_eq;
use otg_core::{sample, solve};

#[test]
fn rest_to_rest_reaches_target() {
    let profile = solve(0.0, 0.0, 0.0, 10.0, 0.0, 2.0, 3.0, 5.0).expect("feasible");
    assert_abs_diff_eq!(profile.p[7], 10.0, epsilon = 5e-7);
    assert_abs_diff_eq!(profile.v[7], 0.0, epsilon = 5e-8);
}

#[test]
fn short_displacement_uses_pure_jerk_shape() {
    // Too short to ever reach vMax or aMax: only the `none` shape fits.
    let profile = solve(0.0, 0.0, 0.0, 0.0005, 0.0, 100.0, 100.0, 100.0).expect("feasible");
    assert_abs_diff_eq!(profile.p[7], 0.0005, epsilon = 5e-7);
    assert!(profile.v.iter().all(|&v| v.abs() <= 100.0 + 1e-6));
}

#[test]
fn negative_direction_mirrors_positive() {
    let up = solve(0.0, 0.0, 0.0, 5.0, 0.0, 1.0, 1.0, 1.0).expect("feasible");
    let down = solve(0.0, 0.0, 0.0, -5.0, 0.0, 1.0, 1.0, 1.0).expect("feasible");
    assert_abs_diff_eq!(up.duration(), down.duration(), epsilon = 1e-6);
    assert_abs_diff_eq!(down.p[7], -5.0, epsilon = 5e-7);
}

#[test]
fn over_bound_initial_velocity_is_handled() {
    // v0 starts above vMax; the profile must still land inside tolerance.
    let profile = solve(0.0, 3.0, 0.0, 10.0, 1.0, 2.0, 2.0, 4.0).expect("feasible");
    assert_abs_diff_eq!(profile.p[7], 10.0, epsilon = 5e-7);
    assert_abs_diff_eq!(profile.v[7], 1.0, epsilon = 5e-8);
}

#[test]
fn nonzero_initial_acceleration_is_handled() {
    let profile = solve(0.0, 0.0, 1.5, 5.0, 0.0, 3.0, 2.0, 4.0).expect("feasible");
    assert_abs_diff_eq!(profile.p[7], 5.0, epsilon = 5e-7);
    assert_abs_diff_eq!(profile.v[7], 0.0, epsilon = 5e-8);
}

#[test]
fn zero_target_velocity_acc1_vel_case() {
    // Large deceleration-only move landing at vf = 0, exercising the
    // acc1_vel solver's dedicated vf == 0 subcase.
    let profile = solve(0.0, 4.0, 0.0, 8.0, 0.0, 5.0, 2.0, 3.0).expect("feasible");
    assert_abs_diff_eq!(profile.v[7], 0.0, epsilon = 5e-8);
}

#[test]
fn sampling_at_endpoints_matches_knots() {
    let profile = solve(0.0, 0.0, 0.0, 4.0, 0.0, 1.0, 1.0, 1.0).expect("feasible");
    let (p_start, v_start, a_start) = sample(&profile, 0.0);
    assert_eq!((p_start, v_start, a_start), (profile.p[0], profile.v[0], profile.a[0]));

    let (p_end, v_end, a_end) = sample(&profile, profile.duration());
    assert_abs_diff_eq!(p_end, profile.p[7], epsilon = 1e-9);
    assert_abs_diff_eq!(v_end, profile.v[7], epsilon = 1e-9);
    assert_abs_diff_eq!(a_end, profile.a[7], epsilon = 1e-9);
}

#[test]
fn sampling_never_exceeds_bounds() {
    let profile = solve(0.0, 0.0, 0.0, 20.0, 0.0, 2.0, 3.0, 5.0).expect("feasible");
    let total = profile.duration();
    let steps = 200;
    for i in 0..=steps {
        let tau = total * (i as f64) / (steps as f64);
        let (_, v, a) = sample(&profile, tau);
        assert!(v.abs() <= 2.0 + 1e-6, "velocity {v} exceeds bound at tau={tau}");
        assert!(a.abs() <= 3.0 + 1e-6, "acceleration {a} exceeds bound at tau={tau}");
    }
}

#[test]
fn reset_rescales_duration_predictably() {
    let mut profile = solve(0.0, 0.0, 0.0, 10.0, 0.0, 2.0, 3.0, 5.0).expect("feasible");
    let original_duration = profile.duration();
    profile.reset(0.0, 0.0, 0.0, 10.0);
    assert!(profile.duration() <= original_duration);
}

#[test]
fn no_feasible_shape_never_panics() {
    // Pathological bounds (zero jerk) must fail gracefully, not panic.
    let result = solve(0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0);
    assert!(result.is_err());
}
