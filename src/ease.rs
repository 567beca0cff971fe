use kurbo::{CubicBez, ParamCurve, Point};

use crate::error::{LoopstripError, LoopstripResult};

/// Easing curve applied by the host animator to horizontal translation and
/// the height pyramid alike.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` with implicit endpoints
    /// (0,0) and (1,1).
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// The product's standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    pub fn standard() -> Self {
        Self::CubicBezier {
            x1: 0.4,
            y1: 0.0,
            x2: 0.2,
            y2: 1.0,
        }
    }

    pub fn validate(self) -> LoopstripResult<()> {
        match self {
            Self::Linear => Ok(()),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                    return Err(LoopstripError::config(
                        "cubic-bezier control points must be finite",
                    ));
                }
                // x outside [0,1] makes progress-over-time multi-valued.
                if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                    return Err(LoopstripError::config(
                        "cubic-bezier x1/x2 must be in [0, 1]",
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                let bez = CubicBez::new(
                    Point::new(0.0, 0.0),
                    Point::new(x1, y1),
                    Point::new(x2, y2),
                    Point::new(1.0, 1.0),
                );
                // x(s) is monotone for x1/x2 in [0,1]; invert by bisection.
                let mut lo = 0.0f64;
                let mut hi = 1.0f64;
                for _ in 0..48 {
                    let mid = (lo + hi) * 0.5;
                    if bez.eval(mid).x < t {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                bez.eval((lo + hi) * 0.5).y
            }
        }
    }
}
