use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Easing curve mapping elapsed fraction `t` in `[0, 1]` to tween progress.
///
/// Curves return exactly 0 at `t = 0` and 1 at `t = 1`; `Overshoot` leaves
/// `[0, 1]` in between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interpolator {
    Linear,
    /// Starts slow and speeds up; `factor` 1 is a quadratic curve.
    Accelerate { factor: f64 },
    /// Starts fast and slows down; `factor` 1 is a quadratic curve.
    Decelerate { factor: f64 },
    /// Cosine ease-in-out.
    AccelerateDecelerate,
    /// Flings past the target and settles back.
    Overshoot { tension: f64 },
    /// Host-provided curve. Not serializable.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::Decelerate { factor: 1.0 }
    }
}

impl PartialEq for Interpolator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Linear, Self::Linear)
            | (Self::AccelerateDecelerate, Self::AccelerateDecelerate) => true,
            (Self::Accelerate { factor: a }, Self::Accelerate { factor: b })
            | (Self::Decelerate { factor: a }, Self::Decelerate { factor: b }) => a == b,
            (Self::Overshoot { tension: a }, Self::Overshoot { tension: b }) => a == b,
            (Self::Custom(a), Self::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Interpolator {
    #[must_use]
    pub fn interpolate(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Accelerate { factor } => {
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Self::Decelerate { factor } => {
                let rest = 1.0 - t;
                if factor == 1.0 {
                    1.0 - rest * rest
                } else {
                    1.0 - rest.powf(2.0 * factor)
                }
            }
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Self::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
            Self::Custom(curve) => curve(t),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        let (name, value) = match self {
            Self::Accelerate { factor } | Self::Decelerate { factor } => ("factor", factor),
            Self::Overshoot { tension } => ("tension", tension),
            Self::Linear | Self::AccelerateDecelerate | Self::Custom(_) => return Ok(()),
        };
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "interpolator `{name}` must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Interpolator;

    fn ease_in_cubic(t: f64) -> f64 {
        t * t * t
    }

    #[test]
    fn built_in_curves_hit_both_endpoints() {
        for interpolator in [
            Interpolator::Linear,
            Interpolator::Accelerate { factor: 1.0 },
            Interpolator::Accelerate { factor: 1.5 },
            Interpolator::Decelerate { factor: 1.0 },
            Interpolator::Decelerate { factor: 2.0 },
            Interpolator::AccelerateDecelerate,
            Interpolator::Overshoot { tension: 2.0 },
        ] {
            assert!(interpolator.interpolate(0.0).abs() <= 1e-12, "{interpolator:?}");
            assert!((interpolator.interpolate(1.0) - 1.0).abs() <= 1e-12, "{interpolator:?}");
        }
    }

    #[test]
    fn decelerate_is_ahead_of_linear() {
        let decelerate = Interpolator::default();
        assert!(decelerate.interpolate(0.5) > 0.5);
        assert_eq!(decelerate.interpolate(0.5), 0.75);
    }

    #[test]
    fn overshoot_leaves_unit_range() {
        let overshoot = Interpolator::Overshoot { tension: 2.0 };
        assert!(overshoot.interpolate(0.8) > 1.0);
    }

    #[test]
    fn custom_curve_is_used_and_compared_by_address() {
        let custom = Interpolator::Custom(ease_in_cubic);
        assert_eq!(custom.interpolate(0.5), 0.125);
        assert_eq!(custom, Interpolator::Custom(ease_in_cubic));
        assert_ne!(custom, Interpolator::Linear);
    }

    #[test]
    fn validate_rejects_negative_factor() {
        assert!(Interpolator::Decelerate { factor: -1.0 }.validate().is_err());
        assert!(Interpolator::Overshoot { tension: f64::NAN }.validate().is_err());
        assert!(Interpolator::Linear.validate().is_ok());
    }
}
