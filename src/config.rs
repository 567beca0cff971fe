use crate::ease::Ease;
use crate::error::{LoopstripError, LoopstripResult};

/// Fixed tunables supplied by the hosting page. Serde round-trippable; the
/// host app ships them as JSON alongside the item list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Horizontal translation (and height) animation duration.
    pub transition_duration_ms: u64,
    /// Extra slack past the transition duration before the watchdog
    /// force-completes a transition whose finished signal was dropped.
    pub watchdog_margin_ms: u64,
    /// Easing curve handed to the host animator.
    pub ease: Ease,
    /// Inter-card spacing in pixels.
    pub gap_px: f64,
    /// Below this viewport width the layout is single-prominent-card.
    pub mobile_breakpoint_px: f64,
    /// At or above this viewport width five cards are visible (four between
    /// the two breakpoints).
    pub desktop_breakpoint_px: f64,
    /// Upper bound on computed card width.
    pub max_card_width_px: f64,
    /// Width used when the viewport has not been measured yet.
    pub fallback_card_width_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4000,
            transition_duration_ms: 700,
            watchdog_margin_ms: 250,
            ease: Ease::standard(),
            gap_px: 16.0,
            mobile_breakpoint_px: 768.0,
            desktop_breakpoint_px: 1024.0,
            max_card_width_px: 340.0,
            fallback_card_width_px: 280.0,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> LoopstripResult<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(LoopstripError::config("autoplay_interval_ms must be > 0"));
        }
        if self.transition_duration_ms == 0 {
            return Err(LoopstripError::config("transition_duration_ms must be > 0"));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(LoopstripError::config("gap_px must be finite and >= 0"));
        }
        if !self.mobile_breakpoint_px.is_finite() || !self.desktop_breakpoint_px.is_finite() {
            return Err(LoopstripError::config("breakpoints must be finite"));
        }
        if self.mobile_breakpoint_px <= 0.0 || self.mobile_breakpoint_px >= self.desktop_breakpoint_px
        {
            return Err(LoopstripError::config(
                "breakpoints must satisfy 0 < mobile < desktop",
            ));
        }
        if !self.max_card_width_px.is_finite() || self.max_card_width_px <= 0.0 {
            return Err(LoopstripError::config("max_card_width_px must be > 0"));
        }
        if !self.fallback_card_width_px.is_finite() || self.fallback_card_width_px <= 0.0 {
            return Err(LoopstripError::config("fallback_card_width_px must be > 0"));
        }
        self.ease.validate()
    }
}
