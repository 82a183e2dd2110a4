// src/motion/shapes.rs - closed-form candidate solvers, one per profile shape.
//
// Each `acc*`/`vel`/`none` function below computes `t[0..7]` for the
// *positive-direction* problem from the closed-form solution of the
// seven-segment equations of motion under that shape's active constraints,
// writes the canonical jerk pattern, forward-integrates via `Profile::set`,
// and returns whether the result verifies. This is dense generated algebra,
// not hand-written arithmetic: the variable names (`h1`, `h2`, ...) mirror
// the closed-form derivation directly rather than being renamed for
// readability, since renaming would make cross-checking against the
// derivation harder, not easier.
use num_complex::Complex64;

use super::profile::Profile;

const REAL_TOLERANCE: f64 = 1e-8;
const CANCELLATION_GUARD: f64 = 1e-3;
const SERIES_GUARD: f64 = 1e-11;
pub(crate) const ZERO_TOLERANCE: f64 = 1e-16;

#[inline]
fn cplx(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

#[inline]
fn sqrt_c(v: f64) -> Complex64 {
    cplx(v).sqrt()
}

/// `t[2]`/`t[4]` are analytically equal for every `vel`-active shape; average
/// them to kill numerical drift between the two independently-derived forms.
#[inline]
fn symmetrize(profile: &mut Profile) {
    let avg = (profile.t[2] + profile.t[4]) / 2.0;
    profile.t[2] = avg;
    profile.t[4] = avg;
}

/// Shape `acc0_acc1_vel`: every coast is active. Linear system, one candidate.
pub fn acc0_acc1_vel(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    profile.t[0] = (-a0 + a_max) / j_max;
    profile.t[1] = (a0.powi(2) - 2.0 * a_max.powi(2) - 2.0 * j_max * v0 + 2.0 * j_max * v_max)
        / (2.0 * a_max * j_max);
    profile.t[2] = a_max / j_max;
    profile.t[3] = (3.0 * a0.powi(4) - 8.0 * a0.powi(3) * a_max
        + 24.0 * a0 * a_max * j_max * v0
        + 6.0 * a0.powi(2) * (a_max.powi(2) - 2.0 * j_max * v0)
        - 12.0
            * j_max
            * (2.0 * a_max * j_max * (p0 - pf) + a_max.powi(2) * (v0 + vf + 2.0 * v_max)
                - j_max * (v0.powi(2) + vf.powi(2) - 2.0 * v_max.powi(2))))
        / (24.0 * a_max * j_max.powi(2) * v_max);
    profile.t[4] = a_max / j_max;
    profile.t[5] = (-(a_max.powi(2) / j_max) - vf + v_max) / a_max;
    profile.t[6] = a_max / j_max;

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// Shape `vel`: velocity coast only, both acceleration limits reached and
/// released within the same burst. Depressed quadratic, one positive root.
pub fn vel(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let radicand = a_max.powi(2)
        * j_max.powi(2)
        * (3.0 * a0.powi(4) - 8.0 * a0.powi(3) * a_max + 24.0 * a0 * a_max * j_max * v0
            + 6.0 * a0.powi(2) * (a_max.powi(2) - 2.0 * j_max * v0)
            + 6.0
                * (a_max.powi(4) + 4.0 * a_max * j_max.powi(2) * (-p0 + pf)
                    - 2.0 * a_max.powi(2) * j_max * (v0 + vf)
                    + 2.0 * j_max.powi(2) * (v0.powi(2) + vf.powi(2))));
    let root = 6f64.sqrt() * radicand.sqrt();

    profile.t[0] = (-a0 + a_max) / j_max;
    profile.t[1] = (6.0 * a0.powi(2) * a_max * j_max - 18.0 * a_max.powi(3) * j_max
        - 12.0 * a_max * j_max.powi(2) * v0
        + root)
        / (12.0 * a_max.powi(2) * j_max.powi(2));
    profile.t[2] = a_max / j_max;
    profile.t[3] = 0.0;
    profile.t[4] = a_max / j_max;
    profile.t[5] = (-18.0 * a_max.powi(3) * j_max - 12.0 * a_max * j_max.powi(2) * vf + root)
        / (12.0 * a_max.powi(2) * j_max.powi(2));
    profile.t[6] = a_max / j_max;

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// Shape `acc0`: the first acceleration coast is active, the second is not.
pub fn acc0(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let disc = a0.powi(2) + 2.0 * j_max * (-v0 + v_max);
    let sqrt_disc = disc.sqrt();

    profile.t[0] = (-2.0 * a0 * j_max + 2f64.sqrt() * sqrt_disc * j_max.abs())
        / (2.0 * j_max.powi(2));
    profile.t[1] = 0.0;
    profile.t[2] = ((a0.powi(2) / 2.0 + j_max * (-v0 + v_max)).sqrt() * j_max.abs())
        / j_max.powi(2);
    profile.t[3] = (-2.0
        * j_max
        * (2.0 * a0.powi(3) * a_max - 6.0 * a0 * a_max * j_max * v0
            + 3.0
                * j_max
                * (2.0 * a_max * j_max * (p0 - pf) + a_max.powi(2) * (vf + v_max)
                    + j_max * (-vf.powi(2) + v_max.powi(2))))
        + 3.0 * 2f64.sqrt() * a_max * sqrt_disc * (a0.powi(2) - 2.0 * j_max * (v0 + v_max))
            * j_max.abs())
        / (12.0 * a_max * j_max.powi(3) * v_max);
    profile.t[4] = a_max / j_max;
    profile.t[5] = (-(a_max.powi(2) / j_max) - vf + v_max) / a_max;
    profile.t[6] = a_max / j_max;

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// Shape `acc1`: the second acceleration coast is active, the first is not.
pub fn acc1(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let sqrt_j = sqrt_c(j_max);
    let sqrt_vdiff = sqrt_c(-vf + v_max);
    let t4_c = sqrt_vdiff / sqrt_j;

    profile.t[0] = (-a0 + a_max) / j_max;
    profile.t[1] = (a0.powi(2) - 2.0 * a_max.powi(2) - 2.0 * j_max * v0 + 2.0 * j_max * v_max)
        / (2.0 * a_max * j_max);
    profile.t[2] = a_max / j_max;
    profile.t[3] = ((3.0 * a0.powi(4) - 8.0 * a0.powi(3) * a_max
        + 24.0 * a0 * a_max * j_max * v0
        + 6.0 * a0.powi(2) * (a_max.powi(2) - 2.0 * j_max * v0)
        - 12.0
            * j_max
            * (a_max.powi(2) * (v0 + v_max) + j_max * (-v0.powi(2) + v_max.powi(2))
                + 2.0 * a_max * (j_max * (p0 - pf) + sqrt_j * sqrt_vdiff * (vf + v_max))))
        / (24.0 * a_max * j_max.powi(2) * v_max))
        .re;
    profile.t[4] = t4_c.re;
    profile.t[5] = 0.0;
    profile.t[6] = t4_c.re;

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// Shape `acc0_acc1`: both acceleration coasts active, velocity coast is not.
pub fn acc0_acc1(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let disc_c = sqrt_c(a0.powi(2) + 2.0 * j_max * (-v0 + v_max));
    let sqrt_j = sqrt_c(j_max);
    let sqrt_vdiff = sqrt_c(-vf + v_max);
    let t4_c = sqrt_vdiff / sqrt_j;

    profile.t[0] = ((-2.0 * a0 * j_max + 2f64.sqrt() * disc_c * j_max.abs())
        / (2.0 * j_max.powi(2)))
    .re;
    profile.t[1] = 0.0;
    profile.t[2] =
        (sqrt_c(a0.powi(2) / 2.0 + j_max * (-v0 + v_max)) * j_max.abs()).re / j_max.powi(2);
    profile.t[3] = ((-4.0
        * j_max
        * (a0.powi(3) + 3.0 * j_max.powi(2) * (p0 - pf) - 3.0 * a0 * j_max * v0
            + 3.0 * j_max * sqrt_j * sqrt_vdiff * (vf + v_max))
        + 3.0 * 2f64.sqrt() * disc_c * (a0.powi(2) - 2.0 * j_max * (v0 + v_max)) * j_max.abs())
        / (12.0 * j_max.powi(3) * v_max))
        .re;
    profile.t[4] = t4_c.re;
    profile.t[5] = 0.0;
    profile.t[6] = t4_c.re;

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// Shape `acc0_vel`: first acceleration coast and velocity coast active.
/// The characteristic polynomial's root is real throughout (no explicit
/// complex intermediate in the source), so this is plain `f64` arithmetic;
/// an ill-conditioned input simply yields NaN, rejected by `check`.
pub fn acc0_vel(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let h1 = 5.0 * a0.powi(2) + 6.0 * a0 * a_max + a_max.powi(2) + 2.0 * j_max * v0;
    let h2 = 2.0 * a0 + a_max;
    let h3 = 3.0 * a0.powi(4) + 8.0 * a0.powi(3) * a_max + 24.0 * a0 * a_max * j_max * v0
        + 6.0 * a0.powi(2) * (a_max.powi(2) + 2.0 * j_max * v0)
        + 12.0
            * j_max
            * (2.0 * a_max * j_max * (p0 - pf) + a_max.powi(2) * (v0 + vf)
                + j_max * (v0.powi(2) - vf.powi(2)));
    let h4 = (a0 + a_max) * (a0.powi(2) + a0 * a_max + 2.0 * j_max * v0);
    let h5 = 4.0 * a0.powi(4) + 8.0 * a0.powi(3) * a_max + a_max.powi(4)
        + 24.0 * a_max * j_max.powi(2) * (p0 - pf)
        - 24.0 * a0 * a_max * j_max * v0
        + 4.0 * a0.powi(2) * (a_max.powi(2) - 4.0 * j_max * v0)
        + a_max.powi(2) * j_max * (-8.0 * v0 + 12.0 * vf)
        + 4.0 * j_max.powi(2) * (4.0 * v0.powi(2) - 3.0 * vf.powi(2));
    let h6 = 1728.0
        * (2.0 * h1.powi(3) - 6.0 * h1 * (h3 + 6.0 * h2 * h4)
            + 9.0 * (h2.powi(2) * h3 + 12.0 * h4.powi(2)))
        * j_max.powi(6);
    let cbrt2 = 2f64.cbrt();
    let cbrt4 = 4f64.cbrt();
    let h7 = (h6 + (h6.powi(2) - 11943936.0 * h5.powi(3) * j_max.powi(12)).sqrt()).cbrt();
    let h8 = ((4.0 * cbrt2 * h5) / h7
        + (cbrt4 * h7 + 24.0 * (-2.0 * h1 + 3.0 * h2.powi(2)) * j_max.powi(2))
            / (72.0 * j_max.powi(4)))
    .sqrt();

    let big_sqrt = ((-576.0 * cbrt2 * h5) / h7 - (2.0 * cbrt4 * h7) / j_max.powi(4)
        - (96.0
            * (h1 * (3.0 * h2 + 2.0 * h8 * j_max)
                - 3.0 * (h2.powi(3) + 2.0 * h4 + h2.powi(2) * h8 * j_max)))
            / (h8 * j_max.powi(3)))
    .sqrt();

    profile.t[0] = -h2 / (2.0 * j_max) + (-12.0 * h8 + big_sqrt) / 24.0;
    profile.t[1] = 0.0;
    profile.t[2] = -a_max / (2.0 * j_max) + (-12.0 * h8 + big_sqrt) / 24.0;
    profile.t[3] = 0.0;
    profile.t[4] = -(12.0 * a0.powi(2) * a_max
        + j_max
            * (12.0 * a_max.powi(2) * h8 + a_max * (-12.0 * h8.powi(2) * j_max + h8 * j_max * big_sqrt - 24.0 * v0)
                + h8 * j_max * (h8 * j_max * big_sqrt + 24.0 * vf)))
        / (24.0 * a_max * h8 * j_max.powi(2));
    profile.t[5] = 0.0;
    profile.t[6] = a_max / j_max;

    symmetrize(profile);

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// Shape `acc1_vel`: second acceleration coast and velocity coast active.
/// Singular at `vf == 0` (division by `vf` in the main closed form); that
/// case is routed to a dedicated quadratic branch instead.
pub fn acc1_vel(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    if vf.abs() < ZERO_TOLERANCE {
        return acc1_vel_zero_vf(profile, p0, v0, a0, pf, vf, v_max, a_max, j_max);
    }

    let h1 = a_max.powi(2) + 2.0 * j_max * vf;
    let h2 = 3.0 * a0.powi(4) - 8.0 * a0.powi(3) * a_max + 24.0 * a0 * a_max * j_max * v0
        + 6.0 * a0.powi(2) * (a_max.powi(2) - 2.0 * j_max * v0)
        - 12.0
            * j_max
            * (2.0 * a_max * j_max * (p0 - pf) + a_max.powi(2) * (v0 + vf)
                + j_max * (-v0.powi(2) + vf.powi(2)));
    let h3 = j_max.powi(4)
        * (-3.0 * a0.powi(4) + 8.0 * a0.powi(3) * a_max + a_max.powi(4)
            + 24.0 * a_max * j_max.powi(2) * (p0 - pf)
            - 24.0 * a0 * a_max * j_max * v0
            - 6.0 * a0.powi(2) * (a_max.powi(2) - 2.0 * j_max * v0)
            + 4.0 * a_max.powi(2) * j_max * (3.0 * v0 - 2.0 * vf)
            + 4.0 * j_max.powi(2) * (-3.0 * v0.powi(2) + 4.0 * vf.powi(2)));
    let h4 = 1728.0
        * j_max.powi(6)
        * (-2.0 * h1.powi(3) - 6.0 * h1 * (h2 - 12.0 * a_max.powi(2) * j_max * vf)
            + 9.0 * a_max.powi(2) * (h2 - 48.0 * j_max.powi(2) * vf.powi(2)));
    let cbrt2 = 2f64.cbrt();
    let h5 = (h4 + (-11943936.0 * h3.powi(3) + h4.powi(2)).sqrt()).cbrt();
    let h6 = ((-4.0 * cbrt2 * h3) / (h5 * j_max.powi(4)) - h5 / (36.0 * cbrt2 * j_max.powi(4))
        + a_max.powi(2) / j_max.powi(2)
        - (2.0 * h1) / (3.0 * j_max.powi(2)))
    .sqrt();
    let h7 = ((288.0 * cbrt2 * h3 * h6
        + h5 * (4f64.cbrt() * h5 * h6
            + 48.0 * j_max * (3.0 * a_max.powi(3) - 3.0 * a_max * h1 + 3.0 * a_max.powi(2) * h6 * j_max
                - 2.0 * h1 * h6 * j_max
                + 12.0 * a_max * j_max * vf)))
        / (h5 * h6 * j_max.powi(4)))
    .sqrt()
        / (6.0 * 2f64.sqrt());

    profile.t[0] = (-a0 + a_max) / j_max;
    profile.t[1] = -(-a0.powi(2) + a_max.powi(2) + j_max * (h6 * h7 * j_max + 2.0 * v0)
        + a_max * (-(h6 * j_max) + h7 * j_max - (2.0 * vf) / h6))
        / (2.0 * a_max * j_max);
    profile.t[2] = a_max / j_max;
    profile.t[3] = 0.0;
    profile.t[4] = -(a_max + h6 * j_max - h7 * j_max) / (2.0 * j_max);
    profile.t[5] = 0.0;
    profile.t[6] = -(a_max + h6 * j_max - h7 * j_max) / (2.0 * j_max);

    symmetrize(profile);

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// `acc1_vel`'s dedicated branch for `vf == 0`, a quadratic with two
/// candidate root pairs ("solution 2" tried before "solution 1").
fn acc1_vel_zero_vf(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let radicand = -3.0 * a0.powi(4) + 8.0 * a0.powi(3) * a_max - 24.0 * a0 * a_max * j_max * v0
        - 6.0 * a0.powi(2) * (a_max.powi(2) - 2.0 * j_max * v0)
        + 12.0 * j_max * (2.0 * a_max * j_max * (p0 - pf) + a_max.powi(2) * v0 - j_max * v0.powi(2));
    let inner = sqrt_c(radicand);
    let i = Complex64::new(0.0, 1.0);

    // Solution 2
    {
        let disc = 9.0 * a_max.powi(2) - i * 6.0 * 3f64.sqrt() * inner;
        let sqrt_disc = disc.sqrt();

        profile.t[0] = (-a0 + a_max) / j_max;
        profile.t[1] = (-(-3.0 * a0.powi(2) + 3.0 * a_max.powi(2) + 6.0 * j_max * v0
            + i * 3f64.sqrt() * inner)
            + a_max * sqrt_disc)
            .re
            / (6.0 * a_max * j_max);
        profile.t[2] = a_max / j_max;
        profile.t[3] = 0.0;
        profile.t[4] = (-3.0 * a_max + sqrt_disc).re / (6.0 * j_max);
        profile.t[5] = 0.0;
        profile.t[6] = profile.t[4];

        profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
        if profile.check(pf, vf, v_max, a_max) {
            return true;
        }
    }

    // Solution 1
    {
        let disc = 9.0 * a_max.powi(2) - i * 6.0 * 3f64.sqrt() * inner;
        let sqrt_disc = disc.sqrt();

        profile.t[0] = (-a0 + a_max) / j_max;
        profile.t[1] = (3.0 * a0.powi(2) - 3.0 * a_max.powi(2) - 6.0 * j_max * v0
            - i * 3f64.sqrt() * inner
            + a_max * sqrt_disc)
            .re
            / (6.0 * a_max * j_max);
        profile.t[2] = a_max / j_max;
        profile.t[3] = 0.0;
        profile.t[4] = -(3.0 * a_max + sqrt_disc).re / (6.0 * j_max);
        profile.t[5] = 0.0;
        profile.t[6] = profile.t[4];

        profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
        if profile.check(pf, vf, v_max, a_max) {
            return true;
        }
    }

    false
}

/// Shape `none`: no bound is coasted; the quartic shape. Dispatches to the
/// two rest-related degenerate closed forms first, then the general quartic
/// with up to four candidate roots.
pub fn none(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    if v0.abs() < ZERO_TOLERANCE && a0.abs() < ZERO_TOLERANCE && vf.abs() < ZERO_TOLERANCE {
        let t = ((pf - p0) / (2.0 * j_max)).cbrt();
        profile.t = [t, 0.0, t, 0.0, t, 0.0, t];
        profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
        return profile.check(pf, vf, v_max, a_max);
    }

    if v0.abs() < ZERO_TOLERANCE
        && vf.abs() < ZERO_TOLERANCE
        && none_rest_velocity(profile, p0, a0, pf, vf, v_max, a_max, j_max)
    {
        return true;
    }

    none_general(profile, p0, v0, a0, pf, vf, v_max, a_max, j_max)
}

/// `none` shape, `v0 = vf = 0, a0 != 0` subcase: avoids the `1/v0`, `1/vf`
/// singularities of the general quartic's intermediates.
fn none_rest_velocity(
    profile: &mut Profile,
    p0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let h1 = a0.powi(3) + 3.0 * j_max.powi(2) * (p0 - pf);
    let h2 = -a0.powi(8) + 192.0 * a0.powi(5) * j_max.powi(2) * (p0 - pf)
        + 288.0 * a0.powi(2) * j_max.powi(4) * (p0 - pf).powi(2);
    let h3 = a0.powi(2) * j_max * (a0.powi(3) + 3.0 * j_max.powi(2) * (p0 - pf));
    let h4 = 17.0 * a0.powi(6) + 48.0 * a0.powi(3) * j_max.powi(2) * (p0 - pf)
        + 72.0 * j_max.powi(4) * (p0 - pf).powi(2);
    let h5 = 3.0
        * (-576.0 * a0.powi(2) * h3.powi(2) + 96.0 * a0.powi(4) * h1 * h3 * j_max
            + 3.0 * a0.powi(12) * j_max.powi(2)
            + (12.0 * a0.powi(6) + 16.0 * h1.powi(2)) * h4 * j_max.powi(2));
    let h6 = 648.0 * j_max.powi(4) * (h5 + (h5.powi(2) - 3.0 * h2.powi(3) * j_max.powi(4)).sqrt());
    let h7 = (h2 / h6.cbrt() + h6.cbrt() / (108.0 * j_max.powi(4))) / a0.powi(2);
    let h8 = (-9.0 * h7 + (3.0 * a0.powi(6) + 4.0 * h1.powi(2)) / (a0.powi(4) * j_max.powi(2)))
        .sqrt()
        / 3.0;
    let h9 = (8.0 * h1 * (-27.0 + (8.0 * h1.powi(2)) / a0.powi(6))) / (27.0 * j_max.powi(3));
    let inner = 36.0 * h7 - (9.0 * h9) / h8
        + (8.0 * (3.0 * a0.powi(6) + 4.0 * h1.powi(2))) / (a0.powi(4) * j_max.powi(2));
    let sqrt_inner = inner.sqrt();
    let h10 = (-6.0 * h8 + sqrt_inner + (4.0 * h1) / (a0.powi(2) * j_max)) / 12.0;

    profile.t[0] =
        (-6.0 * h8 + sqrt_inner - (8.0 * a0) / j_max + (12.0 * j_max * (p0 - pf)) / a0.powi(2))
            / 12.0;
    profile.t[1] = 0.0;
    profile.t[2] = h10;
    profile.t[3] = 0.0;
    profile.t[4] = (-12.0 * a0.powi(7) + 17.0 * a0.powi(6) * h10 * j_max
        + 12.0 * a0.powi(5) * h10.powi(2) * j_max.powi(2)
        - 18.0 * a0.powi(4) * j_max.powi(2) * (h10.powi(3) * j_max + 2.0 * p0 - 2.0 * pf)
        + 48.0 * a0.powi(3) * h10 * j_max.powi(3) * (p0 - pf)
        + 36.0 * a0.powi(2) * h10.powi(2) * j_max.powi(4) * (p0 - pf)
        + 72.0 * h10 * j_max.powi(5) * (p0 - pf).powi(2))
        / (-(a0.powi(6) * j_max) + 48.0 * a0.powi(3) * j_max.powi(3) * (p0 - pf)
            + 72.0 * j_max.powi(5) * (p0 - pf).powi(2));
    profile.t[5] = 0.0;
    profile.t[6] = profile.t[4];

    profile.set(p0, 0.0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

/// `none` shape general quartic: up to four candidates, tried in order
/// `h13, h14, h15, h16`.
fn none_general(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
) -> bool {
    let h1 = 2.0 * a0.powi(3) + 3.0 * j_max.powi(2) * (-p0 + pf) - 3.0 * a0 * j_max * (v0 - 2.0 * vf);
    let h2 = a0.powi(2) + 2.0 * j_max * (-v0 + vf);
    let h3 = a0.powi(5) - 24.0 * a0.powi(2) * j_max.powi(2) * (p0 - pf)
        + 24.0 * j_max.powi(3) * (-p0 + pf) * v0
        + 4.0 * a0.powi(3) * j_max * (v0 + 3.0 * vf)
        + 12.0 * a0 * j_max.powi(2) * (v0.powi(2) + 2.0 * v0 * vf - vf.powi(2));
    let h4 = 3.0 * a0.powi(4) - 24.0 * a0 * j_max.powi(2) * (p0 - pf)
        - 4.0 * j_max.powi(2) * (v0 - vf).powi(2)
        + 4.0 * a0.powi(2) * j_max * (v0 + 5.0 * vf);
    let h5 = a0.powi(6) - 48.0 * a0.powi(3) * j_max.powi(2) * (p0 - pf)
        - 144.0 * a0 * j_max.powi(3) * (p0 - pf) * v0
        + 6.0 * a0.powi(4) * j_max * (v0 + 3.0 * vf)
        + 36.0 * a0.powi(2) * j_max.powi(2) * (v0.powi(2) + 2.0 * v0 * vf - vf.powi(2))
        - 72.0 * j_max.powi(3) * (j_max * (p0 - pf).powi(2) - (v0 - vf) * (v0 + vf).powi(2));
    let h17 = j_max
        * (-a0.powi(6) + 48.0 * a0.powi(3) * j_max.powi(2) * (p0 - pf)
            - 144.0 * a0 * j_max.powi(3) * (p0 - pf) * v0
            + 6.0 * a0.powi(4) * j_max * (v0 - 3.0 * vf)
            - 36.0 * a0.powi(2) * j_max.powi(2) * (v0.powi(2) - 2.0 * v0 * vf - vf.powi(2))
            + 72.0 * j_max.powi(3) * (j_max * (p0 - pf).powi(2) + (v0 - vf).powi(2) * (v0 + vf)));
    let h6 = -a0.powi(8) + 192.0 * a0.powi(5) * j_max.powi(2) * (p0 - pf)
        + 8.0 * a0.powi(6) * j_max * (v0 - 5.0 * vf)
        + 1152.0 * a0 * j_max.powi(4) * (p0 - pf) * v0 * (v0 + vf)
        - 192.0 * a0.powi(3) * j_max.powi(3) * (p0 - pf) * (5.0 * v0 + 2.0 * vf)
        - 120.0 * a0.powi(4) * j_max.powi(2) * (v0.powi(2) - 2.0 * v0 * vf - 3.0 * vf.powi(2))
        + 96.0
            * a0.powi(2)
            * j_max.powi(3)
            * (3.0 * j_max * (p0 - pf).powi(2) + 5.0 * v0.powi(3) - 3.0 * v0.powi(2) * vf
                - 15.0 * v0 * vf.powi(2)
                + vf.powi(3))
        - 48.0
            * j_max.powi(4)
            * (12.0 * j_max * (p0 - pf).powi(2) * (v0 + vf)
                + (v0 - vf).powi(2) * (11.0 * v0.powi(2) + 26.0 * v0 * vf + 11.0 * vf.powi(2)));

    let h8 = 4.0 * h1.powi(2) / (9.0 * h2) - h4 / 3.0;
    let h9 = -2.0 * (2.0 * h1 / h2 * (h8 - h4 / 6.0) + h3) / (3.0 * j_max);
    let h7 = 3.0 * (36.0 * h2 * h3.powi(2) + 16.0 * h1.powi(2) * h5
        + 3.0 * h4 * (h4.powi(2) - 8.0 * h1 * h3 - 4.0 * h2 * h5));

    let h6_h7_sq = (h6 / h7).powi(2);
    let h10_x = h6 * h6_h7_sq;
    let mut h10 = (cplx(3.0 * h7) * (cplx(1.0) - sqrt_c(1.0 - 3.0 * h10_x))).powf(1.0 / 3.0);
    if h6_h7_sq.abs() < SERIES_GUARD {
        let base = cplx(9.0 * h7 / 2.0).powf(1.0 / 3.0);
        h10 = cplx(h10_x).powf(1.0 / 3.0) * base
            + cplx(h10_x).powf(4.0 / 3.0) * base / 4.0
            + cplx(h10_x).powf(7.0 / 3.0) * base * 5.0 / 16.0;
    }

    let h11 = h6 / (6.0 * h10) + h10 / 18.0;

    let h11_h2 = h11 / h2;
    let h8_h2 = cplx(h8 / h2);
    let mut h12 = (h11_h2 + h8_h2).sqrt() / j_max;

    if (h11 + h8).norm() < CANCELLATION_GUARD {
        h12 = (h6 / (6.0 * h10 * h2)
            + cplx((2.0 * h1).powi(2) / (3.0 * h2).powi(2))
            + (h10 - 6.0 * h4) / (18.0 * h2))
        .sqrt()
            / j_max;
    }

    let norm12 = h12.norm_sqr();
    let h9_h12_real = (h12.re * h9) / (norm12 * h2);
    let h9_h12_imag = (-h12.im * h9) / (norm12 * h2);
    let h9_h12 = Complex64::new(h9_h12_real, h9_h12_imag);

    let h12_a = (-h11_h2 + 2.0 * h8_h2 + h9_h12).sqrt() / j_max;
    let h12_b = (-h11_h2 + 2.0 * h8_h2 - h9_h12).sqrt() / j_max;

    let offset = h1 / (3.0 * h2 * j_max);
    let h13_c = (h12 - h12_a) / 2.0 - offset;
    let h14_c = (h12 + h12_a) / 2.0 - offset;
    let h15_c = (-h12 + h12_b) / 2.0 - offset;
    let h16_c = (-h12 - h12_b) / 2.0 - offset;

    // Solution 3
    if h13_c.re > 0.0 && h13_c.im.abs() < REAL_TOLERANCE {
        let h13 = h13_c.norm();
        let t2 = (-4.0 * a0.powi(3) + 3.0 * j_max * (h2 * (h12 - h12_a) + 2.0 * j_max * (p0 - pf))
            + 6.0 * a0 * (h2 + j_max * (v0 - 2.0 * vf)))
            .re
            / (6.0 * h2 * j_max);
        if none_try_root(profile, p0, v0, a0, pf, vf, v_max, a_max, j_max, h13, t2, h17) {
            return true;
        }
    }

    // Solution 4
    if h14_c.re > 0.0 && h14_c.im.abs() < REAL_TOLERANCE {
        let h14 = h14_c.norm();
        let t2 = (-4.0 * a0.powi(3) + 3.0 * j_max * (h2 * (h12 + h12_a) + 2.0 * j_max * (p0 - pf))
            + 6.0 * a0 * (h2 + j_max * (v0 - 2.0 * vf)))
            .re
            / (6.0 * h2 * j_max);
        if none_try_root(profile, p0, v0, a0, pf, vf, v_max, a_max, j_max, h14, t2, h17) {
            return true;
        }
    }

    // Solution 2
    if h15_c.re > 0.0 && h15_c.im.abs() < REAL_TOLERANCE {
        let h15 = h15_c.re;
        let t2 = (-4.0 * a0.powi(3) + 3.0 * j_max * (h2 * (-h12 + h12_b) + 2.0 * j_max * (p0 - pf))
            + 6.0 * a0 * (h2 + j_max * (v0 - 2.0 * vf)))
            .re
            / (6.0 * h2 * j_max);
        if none_try_root(profile, p0, v0, a0, pf, vf, v_max, a_max, j_max, h15, t2, h17) {
            return true;
        }
    }

    // Solution 1
    if h16_c.re > 0.0 && h16_c.im.abs() < REAL_TOLERANCE {
        let h16 = h16_c.re;
        let t2 = (-4.0 * a0.powi(3) + 3.0 * j_max * (h2 * (-h12 - h12_b) + 2.0 * j_max * (p0 - pf))
            + 6.0 * a0 * (h2 + j_max * (v0 - 2.0 * vf)))
            .re
            / (6.0 * h2 * j_max);
        if none_try_root(profile, p0, v0, a0, pf, vf, v_max, a_max, j_max, h16, t2, h17) {
            return true;
        }
    }

    false
}

#[allow(clippy::too_many_arguments)]
fn none_try_root(
    profile: &mut Profile,
    p0: f64,
    v0: f64,
    a0: f64,
    pf: f64,
    vf: f64,
    v_max: f64,
    a_max: f64,
    j_max: f64,
    t0: f64,
    t2: f64,
    h17: f64,
) -> bool {
    let t4 = -(a0.powi(7) + 13.0 * a0.powi(6) * t0 * j_max
        + 72.0
            * j_max.powi(4)
            * (-(t0 * (j_max * (p0 - pf).powi(2) - (v0 - vf).powi(3)))
                + t0.powi(2) * j_max * (p0 - pf) * (v0 - vf)
                + 2.0 * (p0 - pf) * v0 * (v0 - vf)
                + t0.powi(3) * j_max * (v0 - vf).powi(2))
        + 6.0 * a0.powi(5) * j_max * (7.0 * t0.powi(2) * j_max + v0 + 3.0 * vf)
        - 12.0
            * a0.powi(3)
            * j_max.powi(2)
            * (10.0 * t0 * j_max * (p0 - pf) - v0.powi(2) + t0.powi(2) * j_max * (13.0 * v0 - 16.0 * vf)
                - 2.0 * v0 * vf
                + 3.0 * vf.powi(2))
        + 6.0 * a0.powi(4) * j_max.powi(2) * (3.0 * t0.powi(3) * j_max - 8.0 * p0 + 8.0 * pf
            + t0 * (v0 + 19.0 * vf))
        - 36.0
            * a0.powi(2)
            * j_max.powi(3)
            * (t0.powi(2) * j_max * (p0 - pf) + 2.0 * (-p0 + pf) * v0
                + 2.0 * t0.powi(3) * j_max * (v0 - vf)
                + t0 * (3.0 * v0.powi(2) + 2.0 * v0 * vf - 3.0 * vf.powi(2)))
        - 72.0
            * a0
            * j_max.powi(3)
            * (v0.powi(3) + v0.powi(2) * vf - 3.0 * v0 * vf.powi(2) + vf.powi(3)
                + j_max
                    * (p0.powi(2) + pf.powi(2) + t0 * pf * (4.0 * v0 - 2.0 * vf)
                        - 2.0 * p0 * (pf + 2.0 * t0 * v0 - t0 * vf)
                        + t0.powi(2) * (-2.0 * v0.powi(2) + 5.0 * v0 * vf - 3.0 * vf.powi(2)))))
        / h17;

    profile.t[0] = t0;
    profile.t[1] = 0.0;
    profile.t[2] = t2;
    profile.t[3] = 0.0;
    profile.t[4] = t4;
    profile.t[5] = 0.0;
    profile.t[6] = t4;

    symmetrize(profile);

    profile.set(p0, v0, a0, [j_max, 0.0, -j_max, 0.0, -j_max, 0.0, j_max]);
    profile.check(pf, vf, v_max, a_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_to_rest_is_triple_jerk() {
        let mut profile = Profile::default();
        let ok = none(&mut profile, 0.0, 0.0, 0.0, 0.1, 0.0, 10.0, 10.0, 1.0);
        assert!(ok);
        let expected = (0.05f64).cbrt();
        assert!((profile.t[0] - expected).abs() < 1e-9);
        assert_eq!(profile.t[1], 0.0);
        assert_eq!(profile.t[3], 0.0);
        assert_eq!(profile.t[5], 0.0);
    }

    #[test]
    fn acc0_acc1_vel_reaches_target() {
        let mut profile = Profile::default();
        let ok = acc0_acc1_vel(&mut profile, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0);
        assert!(ok);
        assert!((profile.p[7] - 1.0).abs() < 5e-7);
        assert!((profile.v[7]).abs() < 5e-8);
    }
}
