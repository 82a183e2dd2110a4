// src/motion/integrator.rs
use super::profile::Profile;

/// Kinematic state at `dt` under constant jerk `j`, starting from `(p, v, a)`.
///
/// This is the single forward-integration primitive shared by `Profile::set`
/// and the external sampling interface below — one piece of arithmetic, two
/// call sites.
pub fn integrate(dt: f64, p: f64, v: f64, a: f64, j: f64) -> (f64, f64, f64) {
    let p_new = p + dt * v + 0.5 * dt * dt * a + (1.0 / 6.0) * dt * dt * dt * j;
    let v_new = v + dt * a + 0.5 * dt * dt * j;
    let a_new = a + dt * j;
    (p_new, v_new, a_new)
}

/// Samples a valid profile at time `tau` measured from the start of the move.
///
/// Locates the segment `k` with `t_sum[k-1] <= tau < t_sum[k]` and integrates
/// from that segment's starting knot. `tau` outside `[0, t_sum[6]]` clamps to
/// the nearest endpoint.
pub fn sample(profile: &Profile, tau: f64) -> (f64, f64, f64) {
    if tau <= 0.0 {
        return (profile.p[0], profile.v[0], profile.a[0]);
    }
    let total = profile.t_sum[6];
    if tau >= total {
        return (profile.p[7], profile.v[7], profile.a[7]);
    }
    let k = profile
        .t_sum
        .iter()
        .position(|&ts| tau < ts)
        .unwrap_or(6);
    let t_prev = if k == 0 { 0.0 } else { profile.t_sum[k - 1] };
    integrate(
        tau - t_prev,
        profile.p[k],
        profile.v[k],
        profile.a[k],
        profile.j[k],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_is_identity() {
        let (p, v, a) = integrate(0.0, 1.0, 2.0, 3.0, 4.0);
        assert_eq!((p, v, a), (1.0, 2.0, 3.0));
    }

    #[test]
    fn constant_jerk_matches_closed_form() {
        let (p, v, a) = integrate(2.0, 0.0, 0.0, 0.0, 3.0);
        assert_eq!(a, 6.0);
        assert_eq!(v, 6.0);
        assert_eq!(p, 4.0);
    }
}
