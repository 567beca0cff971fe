use crate::config::CarouselConfig;

/// Responsive tier derived from viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Single prominent card with neighbor slivers.
    Mobile,
    /// Four cards visible.
    Tablet,
    /// Five cards visible.
    Desktop,
}

impl Breakpoint {
    pub fn visible_cards(self) -> usize {
        match self {
            Breakpoint::Mobile => 1,
            Breakpoint::Tablet => 4,
            Breakpoint::Desktop => 5,
        }
    }
}

pub fn breakpoint(cfg: &CarouselConfig, viewport_width: f64) -> Breakpoint {
    if viewport_width < cfg.mobile_breakpoint_px {
        Breakpoint::Mobile
    } else if viewport_width < cfg.desktop_breakpoint_px {
        Breakpoint::Tablet
    } else {
        Breakpoint::Desktop
    }
}

/// Card width for a viewport. Mobile is 80% of the viewport; wider tiers fit
/// the visible card count with one gap per card, capped at the configured
/// maximum. An unmeasured viewport falls back to a fixed default so the first
/// render is always well-defined.
pub fn card_width(cfg: &CarouselConfig, viewport_width: f64) -> f64 {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return cfg.fallback_card_width_px;
    }
    match breakpoint(cfg, viewport_width) {
        Breakpoint::Mobile => viewport_width * 0.8,
        bp => {
            let visible = bp.visible_cards() as f64;
            let fitted = ((viewport_width - visible * cfg.gap_px) / visible).floor();
            fitted.min(cfg.max_card_width_px)
        }
    }
}

/// Pyramid height: the centered card is tallest, neighbors shrink with
/// distance from the center slot.
pub fn card_height(cfg: &CarouselConfig, distance_from_center: usize, viewport_width: f64) -> f64 {
    let mobile = viewport_width.is_finite()
        && viewport_width > 0.0
        && breakpoint(cfg, viewport_width) == Breakpoint::Mobile;
    match distance_from_center {
        0 => 420.0,
        1 => {
            if mobile {
                340.0
            } else {
                360.0
            }
        }
        _ => {
            if mobile {
                320.0
            } else {
                310.0
            }
        }
    }
}

/// Strip translation that horizontally centers the card at `center`.
pub fn x_offset(cfg: &CarouselConfig, center: usize, card_width: f64, viewport_width: f64) -> f64 {
    viewport_width / 2.0 - card_width / 2.0 - center as f64 * (card_width + cfg.gap_px)
}
