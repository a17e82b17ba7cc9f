// src/heading.rs

//! # Angular Error Resolution Module
//!
//! This module converts a raw heading difference into the signals the PID
//! loop consumes. Headings are circular, so a raw subtraction of two angles
//! is meaningless until it is wrapped; all arithmetic here is wrap-aware and
//! carried out in radians. The single degree conversion in the crate lives
//! in the forward-alignment check, next to its named threshold.
//!
//! The normalized error follows a three-region policy. A pure `sin` error
//! signal collapses to zero near ±π, exactly where the vehicle is most
//! misaligned, so the two "far side" quadrants force full saturation
//! instead: `(π/2, π)` commands `1`, `(π, 3π/2)` commands `-1`, and the
//! remaining near-aligned quadrants use `sin(e)` for a smooth, sign-correct
//! response. All four region boundaries are exclusive and fall through to
//! the `sin` branch.

use crate::Number;

/// Forward thrust is allowed within this many degrees of alignment.
///
/// The proximity test takes the residual `(360 - deg(d)) mod 360` of the raw
/// heading difference `d` and compares it against this threshold. The test
/// is intentionally one-sided around the wrap boundary; see [`resolve`].
pub const FORWARD_ALIGNMENT_THRESHOLD_DEG: f64 = 10.0;

/// Degrees in a full turn, for the forward-alignment residual.
const FULL_TURN_DEG: f64 = 360.0;

/// Result of resolving a heading difference into PID-ready signals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeadingError<T> {
    /// Normalized error in `[-1, 1]`, suitable for feeding the PID loop.
    pub normalized: T,
    /// Whether the vehicle points close enough to the target heading for
    /// forward thrust.
    pub go_forward: bool,
}

/// Euclidean remainder; `Float` has no `rem_euclid`.
fn modulo<T: Number>(value: T, modulus: T) -> T {
    let remainder = value % modulus;
    if remainder < T::zero() {
        remainder + modulus
    } else {
        remainder
    }
}

/// Wraps any angle into `[0, 2π)`.
pub fn wrap_to_tau<T: Number>(angle: T) -> T {
    modulo(angle, T::TAU())
}

/// Wraps any angle into `(-π, π]` via `atan2(sin, cos)`.
pub fn wrap_to_pi<T: Number>(angle: T) -> T {
    angle.sin().atan2(angle.cos())
}

/// Resolves a target and current heading into PID-ready signals.
///
/// The raw difference `d = target - current` may be any real value; both
/// outputs are derived from it without prior normalization of the inputs.
///
/// `go_forward` is true when the residual `(360 - deg(d)) mod 360` falls
/// under [`FORWARD_ALIGNMENT_THRESHOLD_DEG`]. The residual only detects
/// proximity from one side of the wrap boundary; the test ships as the
/// operator-facing behavior and is not symmetrized here.
///
/// The function is total over all real inputs. Non-finite values propagate
/// into `normalized`; callers reject those at the system boundary.
pub fn resolve<T: Number>(target: T, current: T) -> HeadingError<T> {
    let difference = target - current;

    let full_turn = T::from_f64(FULL_TURN_DEG);
    let residual = modulo(full_turn - difference.to_degrees(), full_turn);
    let go_forward = residual < T::from_f64(FORWARD_ALIGNMENT_THRESHOLD_DEG);

    let wrapped = wrap_to_tau(difference);
    let half_pi = T::FRAC_PI_2();
    let pi = T::PI();
    let three_half_pi = pi + half_pi;
    let normalized = if wrapped > half_pi && wrapped < pi {
        T::one()
    } else if wrapped > pi && wrapped < three_half_pi {
        -T::one()
    } else {
        wrapped.sin()
    };

    HeadingError {
        normalized,
        go_forward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    /// Test that an aligned vehicle produces zero error and forward thrust.
    #[test]
    fn test_resolve_aligned() {
        let error = resolve(1.25_f32, 1.25);
        assert!(
            value_close(0.0, error.normalized),
            "Aligned headings should produce zero error."
        );
        assert!(error.go_forward, "Aligned headings should allow forward thrust.");
    }

    /// Test that exact multiples of a full turn produce zero error.
    #[test]
    fn test_resolve_full_turn_multiples() {
        assert!(value_close(0.0, resolve(TAU, 0.0).normalized));
        assert!(value_close(0.0, resolve(0.0, 2.0 * TAU).normalized));
        assert!(value_close(0.0, resolve(3.5 + TAU, 3.5).normalized));
    }

    /// Test the positive saturation region `(π/2, π)`.
    #[test]
    fn test_resolve_positive_saturation() {
        let error = resolve(2.0_f32, 0.0);
        assert!(
            value_close(1.0, error.normalized),
            "Errors in (π/2, π) should saturate to 1."
        );
    }

    /// Test the negative saturation region `(π, 3π/2)`.
    #[test]
    fn test_resolve_negative_saturation() {
        let error = resolve(4.0_f32, 0.0);
        assert!(
            value_close(-1.0, error.normalized),
            "Errors in (π, 3π/2) should saturate to -1."
        );
    }

    /// Test that the saturation boundaries fall through to the sin branch.
    #[test]
    fn test_resolve_boundaries_fall_through_to_sin() {
        // At exactly π the saturated regions do not apply; sin(π) is (near)
        // zero, not a saturated constant.
        let at_pi = resolve(PI, 0.0_f32);
        assert!(
            value_close(0.0, at_pi.normalized),
            "The boundary π should return sin(π), not ±1."
        );

        let at_half_pi = resolve(FRAC_PI_2, 0.0_f32);
        assert!(value_close(1.0, at_half_pi.normalized));

        let at_three_half_pi = resolve(PI + FRAC_PI_2, 0.0_f32);
        assert!(value_close(-1.0, at_three_half_pi.normalized));
    }

    /// Test the smooth sinusoid response in the near-aligned quadrants.
    #[test]
    fn test_resolve_smooth_region() {
        let small_positive = resolve(0.3_f32, 0.0);
        assert!(
            value_close(0.29552022, small_positive.normalized),
            "Small positive errors should follow sin(e)."
        );

        // d = -π/4 wraps to 7π/4, inside the upper smooth quadrant.
        let small_negative = resolve(0.0_f32, FRAC_PI_4);
        assert!(
            value_close(-0.70710678, small_negative.normalized),
            "Small negative errors should follow sin(e) with negative sign."
        );
        assert!(!small_negative.go_forward);
    }

    /// Test that the forward proximity test only detects one side of the
    /// wrap boundary.
    #[test]
    fn test_resolve_forward_asymmetry() {
        let eight_deg = 8.0_f32.to_radians();

        // Current heading slightly past the target: residual is small.
        let past = resolve(0.0_f32, eight_deg);
        assert!(past.go_forward, "d = -8° should allow forward thrust.");

        // Current heading slightly short of the target: residual is large.
        let short = resolve(eight_deg, 0.0_f32);
        assert!(!short.go_forward, "d = +8° should not allow forward thrust.");
    }

    /// Test that headings far from the target never flag forward thrust.
    #[test]
    fn test_resolve_forward_requires_proximity() {
        assert!(!resolve(PI, 0.0_f32).go_forward);
        assert!(!resolve(0.0_f32, FRAC_PI_2).go_forward);
        assert!(!resolve(2.0_f32, 0.5).go_forward);
    }

    /// Test wrapping into `[0, 2π)`.
    #[test]
    fn test_wrap_to_tau() {
        assert!(value_close(0.0, wrap_to_tau(0.0_f32)));
        assert!(value_close(1.0, wrap_to_tau(1.0_f32)));
        assert!(value_close(TAU - 1.0, wrap_to_tau(-1.0_f32)));
        assert!(value_close(0.5, wrap_to_tau(TAU + 0.5)));
    }

    /// Test wrapping into `(-π, π]`.
    #[test]
    fn test_wrap_to_pi() {
        assert!(value_close(0.0, wrap_to_pi(0.0_f32)));
        assert!(value_close(1.0, wrap_to_pi(1.0_f32)));
        assert!(value_close(0.5 - PI, wrap_to_pi(PI + 0.5)));
        assert!(value_close(-1.0, wrap_to_pi(TAU - 1.0)));
    }
}
