use tracing::{debug, warn};

use crate::autoplay::Autoplay;
use crate::config::CarouselConfig;
use crate::error::LoopstripResult;
use crate::position::PositionController;
use crate::track::{self, Item, Track};
use crate::view::{self, SlotFrame};

/// What the host should do after an entry point ran.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineUpdate {
    /// State changed in a way the projection reflects; re-render.
    pub needs_render: bool,
    /// The engine is inside the silent re-center window and needs
    /// display-refresh ticks delivered via [`CarouselEngine::frame_tick`].
    pub wants_frame_ticks: bool,
}

/// The carousel driver. Owns the track, the position state machine and the
/// autoplay schedule; every mutation flows through one of the entry points
/// below, serialized by the host event loop. Time is an explicit `now`
/// parameter in host milliseconds.
///
/// Typical wiring:
///
/// ```text
/// timer fire            -> poll(now)
/// translate-end event   -> transition_finished()
/// animation frame       -> frame_tick()            (while wants_frame_ticks)
/// resize observer       -> resize(width)
/// pointer enter / leave -> pointer_enter() / pointer_leave()
/// unmount               -> stop()
/// ```
#[derive(Clone, Debug)]
pub struct CarouselEngine {
    track: Track,
    cfg: CarouselConfig,
    position: PositionController,
    autoplay: Autoplay,
    viewport_width: f64,
    pending_viewport: Option<f64>,
    transition_started_at: Option<u64>,
    alive: bool,
}

impl CarouselEngine {
    /// Build the engine and arm autoplay. An empty item list is not an
    /// error: the track is empty, the projection renders nothing, and
    /// autoplay is never started. Duplicate item ids are rejected.
    pub fn new(
        items: &[Item],
        cfg: CarouselConfig,
        viewport_width: f64,
        now: u64,
    ) -> LoopstripResult<Self> {
        cfg.validate()?;
        track::validate_items(items)?;
        let track = Track::build(items);
        let position = PositionController::new(track.source_len());
        let mut autoplay = Autoplay::new(cfg.autoplay_interval_ms)?;
        if !track.is_empty() {
            autoplay.start(now);
        }
        Ok(Self {
            track,
            cfg,
            position,
            autoplay,
            viewport_width,
            pending_viewport: None,
            transition_started_at: None,
            alive: true,
        })
    }

    /// Timer fire. Runs the transition watchdog, then the autoplay decision.
    pub fn poll(&mut self, now: u64) -> EngineUpdate {
        if !self.alive {
            return EngineUpdate::default();
        }
        let mut update = self.run_watchdog(now);
        if self.autoplay.due(now) && self.position.advance() {
            self.transition_started_at = Some(now);
            update.needs_render = true;
        }
        update.wants_frame_ticks = !self.position.is_settled() && !self.position.is_animating();
        update
    }

    /// The rendering layer finished the horizontal translation. A spurious
    /// notification with no transition in flight is ignored.
    pub fn transition_finished(&mut self) -> EngineUpdate {
        if !self.alive || !self.position.is_animating() {
            return EngineUpdate::default();
        }
        self.transition_started_at = None;
        let recentering = self.position.transition_finished();
        self.apply_pending_viewport();
        EngineUpdate {
            needs_render: true,
            wants_frame_ticks: recentering,
        }
    }

    /// One display-refresh tick, delivered while the last update asked for
    /// frame ticks.
    pub fn frame_tick(&mut self) -> EngineUpdate {
        if !self.alive {
            return EngineUpdate::default();
        }
        let settled = self.position.frame_tick();
        EngineUpdate {
            needs_render: settled,
            wants_frame_ticks: !self.position.is_settled() && !self.position.is_animating(),
        }
    }

    /// Viewport resize. Applied immediately while settled; deferred to the
    /// end of the in-flight transition otherwise, so layout never snaps
    /// mid-animation.
    pub fn resize(&mut self, viewport_width: f64) -> EngineUpdate {
        if !self.alive {
            return EngineUpdate::default();
        }
        if self.position.is_animating() {
            self.pending_viewport = Some(viewport_width);
            EngineUpdate::default()
        } else {
            self.viewport_width = viewport_width;
            EngineUpdate {
                needs_render: true,
                wants_frame_ticks: false,
            }
        }
    }

    pub fn pointer_enter(&mut self) {
        if self.alive {
            self.autoplay.pause();
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.alive {
            self.autoplay.resume();
        }
    }

    /// Teardown. Releases the autoplay schedule and turns every later entry
    /// point into a no-op, so a late transition-finished notification or a
    /// stray frame tick cannot mutate dead state.
    pub fn stop(&mut self) {
        if self.alive {
            self.autoplay.stop();
            self.alive = false;
            debug!("engine stopped");
        }
    }

    /// Per-slot visual frames for the rendering layer.
    pub fn frames(&self) -> Vec<SlotFrame> {
        view::project(
            &self.track,
            &self.cfg,
            self.viewport_width,
            self.position.center(),
            self.position.transition_enabled(),
        )
    }

    pub fn center(&self) -> usize {
        self.position.center()
    }

    /// Item index (mod N) of the centered slot, or `None` for an empty track.
    pub fn center_item_index(&self) -> Option<usize> {
        self.track.item_index(self.position.center())
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating()
    }

    pub fn is_settled(&self) -> bool {
        self.position.is_settled()
    }

    pub fn is_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    pub fn wants_frame_ticks(&self) -> bool {
        !self.position.is_settled() && !self.position.is_animating()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Force-complete a transition whose finished signal never arrived. The
    /// source behavior was to stall forever; the watchdog trades exact
    /// compatibility for liveness.
    fn run_watchdog(&mut self, now: u64) -> EngineUpdate {
        let deadline = self.cfg.transition_duration_ms + self.cfg.watchdog_margin_ms;
        let overdue = self.position.is_animating()
            && self
                .transition_started_at
                .is_some_and(|t0| now.saturating_sub(t0) > deadline);
        if !overdue {
            return EngineUpdate::default();
        }
        warn!(
            center = self.position.center(),
            deadline_ms = deadline,
            "transition-finished signal missing; force-completing"
        );
        self.transition_finished()
    }

    fn apply_pending_viewport(&mut self) {
        if let Some(vw) = self.pending_viewport.take() {
            debug!(viewport_width = vw, "applying deferred resize");
            self.viewport_width = vw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: u64) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                id: i,
                image_ref: format!("img/{i}.jpg"),
                alt_text: format!("item {i}"),
            })
            .collect()
    }

    fn engine(n: u64) -> CarouselEngine {
        CarouselEngine::new(&items(n), CarouselConfig::default(), 1200.0, 0).unwrap()
    }

    #[test]
    fn empty_items_never_start_autoplay() {
        let mut eng = engine(0);
        assert!(eng.frames().is_empty());
        for now in (4000..60_000).step_by(4000) {
            assert_eq!(eng.poll(now), EngineUpdate::default());
        }
        assert_eq!(eng.center_item_index(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = CarouselConfig {
            autoplay_interval_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(CarouselEngine::new(&items(5), cfg, 1200.0, 0).is_err());
    }

    #[test]
    fn duplicate_item_ids_are_rejected() {
        let mut list = items(5);
        list[4].id = 0;
        let err = CarouselEngine::new(&list, CarouselConfig::default(), 1200.0, 0).unwrap_err();
        assert!(err.to_string().contains("duplicate item id"));
    }

    #[test]
    fn spurious_transition_finished_is_ignored() {
        let mut eng = engine(5);
        // Nothing in flight yet.
        assert_eq!(eng.transition_finished(), EngineUpdate::default());

        eng.poll(4000);
        assert!(eng.transition_finished().needs_render);
        // A duplicate signal after the settle changes nothing either.
        assert_eq!(eng.transition_finished(), EngineUpdate::default());
        assert_eq!(eng.center(), 6);
    }

    #[test]
    fn poll_advances_on_schedule() {
        let mut eng = engine(5);
        assert!(!eng.poll(3999).needs_render);
        let update = eng.poll(4000);
        assert!(update.needs_render);
        assert!(eng.is_animating());
        assert_eq!(eng.center(), 6);
    }

    #[test]
    fn watchdog_force_completes_a_dropped_signal() {
        let mut eng = engine(5);
        assert!(eng.poll(4000).needs_render);
        // Signal never arrives. Next timer fire is past duration + margin.
        assert!(eng.is_animating());
        let update = eng.poll(8000);
        assert!(update.needs_render);
        // The forced settle unblocked this fire's advance.
        assert_eq!(eng.center(), 7);
        assert!(eng.is_animating());
    }

    #[test]
    fn stop_makes_entry_points_inert() {
        let mut eng = engine(5);
        eng.poll(4000);
        eng.stop();
        assert_eq!(eng.transition_finished(), EngineUpdate::default());
        assert_eq!(eng.poll(8000), EngineUpdate::default());
        assert_eq!(eng.resize(400.0), EngineUpdate::default());
        assert_eq!(eng.center(), 6);
        eng.stop(); // idempotent
    }

    #[test]
    fn resize_mid_transition_is_deferred_to_settle() {
        let mut eng = engine(5);
        eng.poll(4000);
        assert!(eng.is_animating());
        assert_eq!(eng.resize(400.0), EngineUpdate::default());
        assert_eq!(eng.viewport_width(), 1200.0);
        eng.transition_finished();
        assert_eq!(eng.viewport_width(), 400.0);
        assert_eq!(eng.frames()[6].height, 420.0);
    }
}
