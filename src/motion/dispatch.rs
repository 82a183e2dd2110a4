// src/motion/dispatch.rs
use super::error::ProfileError;
use super::profile::Profile;
use super::shapes;

/// Tries every shape, most-constrained first, for a given direction's bounds.
/// `v_max`/`a_max`/`j_max` are passed already sign-adjusted by the caller:
/// positive for the "up" direction, negated for "down".
#[allow(clippy::too_many_arguments)]
fn try_direction(
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> Option<Profile> {
    type Shape = fn(&mut Profile, f64, f64, f64, f64, f64, f64, f64, f64) -> bool;
    const SHAPES: [Shape; 8] = [
        shapes::acc0_acc1_vel,
        shapes::acc0_vel,
        shapes::acc1_vel,
        shapes::vel,
        shapes::acc0_acc1,
        shapes::acc0,
        shapes::acc1,
        shapes::none,
    ];

    for shape in SHAPES {
        let mut profile = Profile::default();
        if shape(&mut profile, p0, v0, a0, pf, vf, v_max, a_max, j_max) {
            return Some(profile);
        }
    }
    None
}

/// Computes the time-optimal seven-segment profile from `(p0, v0, a0)` to
/// `(pf, vf)` under symmetric velocity/acceleration/jerk bounds.
///
/// Tries all eight shapes in most-constrained-first order for the positive
/// direction, then the same eight with sign-flipped bounds for the negative
/// direction, returning the first candidate that verifies. Fails only if
/// none of the sixteen attempts produces a feasible profile.
pub fn solve(
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> Result<Profile, ProfileError> {
    if let Some(profile) = try_direction(p0, v0, a0, pf, vf, v_max, a_max, j_max) {
        return Ok(profile);
    }
    if let Some(profile) = try_direction(p0, v0, a0, pf, vf, -v_max, -a_max, -j_max) {
        return Ok(profile);
    }
    Err(ProfileError::NoFeasibleShape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_to_rest_positive_displacement_solves() {
        let profile = solve(0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0).expect("feasible");
        assert!((profile.p[7] - 1.0).abs() < 5e-7);
        assert!(profile.v[7].abs() < 5e-8);
    }

    #[test]
    fn rest_to_rest_negative_displacement_solves() {
        let profile = solve(0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 1.0, 1.0).expect("feasible");
        assert!((profile.p[7] + 1.0).abs() < 5e-7);
        assert!(profile.v[7].abs() < 5e-8);
    }

    #[test]
    fn zero_displacement_zero_velocity_is_trivially_feasible() {
        let profile = solve(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0).expect("feasible");
        assert!(profile.p[7].abs() < 5e-7);
    }
}
