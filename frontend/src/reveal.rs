//! One-shot "reveal when first visible" state machine.
//!
//! The controller knows nothing about the DOM. The `FadeIn` component feeds it
//! intersection samples from an `IntersectionObserver` and stops observing as
//! soon as [`RevealController::observe`] answers [`Transition::Reveal`].

use crate::config::{REVEAL_DURATION_MS, REVEAL_OFFSET, REVEAL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchPhase {
    /// Created, observer not attached yet.
    Idle,
    Watching,
    /// Revealed; the watch ended on the success path.
    Finished,
    /// Torn down before the block was ever revealed.
    Cancelled,
}

/// One intersection report for the watched block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The block just became visible. The caller must stop watching it.
    Reveal,
    Ignore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealController {
    visible: bool,
    phase: WatchPhase,
    threshold: f64,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealController {
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            visible: false,
            phase: WatchPhase::Idle,
            threshold,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> WatchPhase {
        self.phase
    }

    pub fn start_watch(&mut self) {
        if self.phase == WatchPhase::Idle {
            self.phase = WatchPhase::Watching;
        }
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> Transition {
        if self.phase != WatchPhase::Watching || !sample.meets(self.threshold) {
            return Transition::Ignore;
        }
        self.visible = true;
        self.phase = WatchPhase::Finished;
        Transition::Reveal
    }

    /// Fail-open path for hosts that cannot watch intersections at all.
    pub fn reveal_unwatched(&mut self) {
        if self.phase == WatchPhase::Cancelled {
            return;
        }
        self.visible = true;
        self.phase = WatchPhase::Finished;
    }

    /// Ends the watch on teardown. Returns true if a live watch was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            WatchPhase::Idle | WatchPhase::Watching => {
                let was_watching = self.phase == WatchPhase::Watching;
                self.phase = WatchPhase::Cancelled;
                was_watching
            }
            WatchPhase::Finished | WatchPhase::Cancelled => false,
        }
    }
}

/// Classes and inline style for a wrapped block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPresentation {
    pub classes: Vec<&'static str>,
    pub style: String,
}

impl RevealPresentation {
    pub fn for_state(visible: bool, delay_ms: u32) -> Self {
        let mut classes = vec!["fade-in"];
        if visible {
            classes.push("is-visible");
        }
        Self {
            classes,
            style: format!("transition-delay: {}ms;", delay_ms),
        }
    }
}

/// Shared stylesheet for every `FadeIn` instance.
pub fn stylesheet() -> String {
    format!(
        ".fade-in {{ opacity: 0; transform: translateY({offset}); \
         transition-property: opacity, transform; \
         transition-duration: {duration}ms; transition-timing-function: ease-out; }} \
         .fade-in.is-visible {{ opacity: 1; transform: translateY(0); }}",
        offset = REVEAL_OFFSET,
        duration = REVEAL_DURATION_MS,
    )
}

/// Delay for the `index`-th sibling of a cascading reveal.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watching() -> RevealController {
        let mut controller = RevealController::new();
        controller.start_watch();
        controller
    }

    #[test]
    fn starts_hidden_and_idle() {
        let controller = RevealController::new();
        assert!(!controller.visible());
        assert_eq!(controller.phase(), WatchPhase::Idle);
    }

    #[test]
    fn reveals_once_threshold_is_met_and_stays_visible() {
        let mut controller = watching();

        assert_eq!(controller.observe(IntersectionSample::new(false, 0.0)), Transition::Ignore);
        assert!(!controller.visible());

        assert_eq!(controller.observe(IntersectionSample::new(true, 0.15)), Transition::Reveal);
        assert!(controller.visible());
        assert_eq!(controller.phase(), WatchPhase::Finished);

        assert_eq!(controller.observe(IntersectionSample::new(false, 0.0)), Transition::Ignore);
        assert!(controller.visible());
    }

    #[test]
    fn reveal_transition_fires_at_most_once() {
        let mut controller = watching();
        let reveals = [0.2, 0.5, 1.0, 0.3]
            .into_iter()
            .map(|ratio| controller.observe(IntersectionSample::new(true, ratio)))
            .filter(|t| *t == Transition::Reveal)
            .count();
        assert_eq!(reveals, 1);
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut controller = watching();
        assert_eq!(controller.observe(IntersectionSample::new(true, 0.05)), Transition::Ignore);
        assert!(!controller.visible());
        assert_eq!(controller.observe(IntersectionSample::new(true, 0.1)), Transition::Reveal);
    }

    #[test]
    fn samples_before_watch_starts_are_ignored() {
        let mut controller = RevealController::new();
        assert_eq!(controller.observe(IntersectionSample::new(true, 1.0)), Transition::Ignore);
        assert!(!controller.visible());
    }

    #[test]
    fn late_callback_after_teardown_is_ignored() {
        let mut controller = watching();
        assert!(controller.cancel());
        assert_eq!(controller.observe(IntersectionSample::new(true, 1.0)), Transition::Ignore);
        assert!(!controller.visible());
        assert_eq!(controller.phase(), WatchPhase::Cancelled);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut controller = watching();
        assert!(controller.cancel());
        assert!(!controller.cancel());

        let mut revealed = watching();
        revealed.observe(IntersectionSample::new(true, 0.5));
        assert!(!revealed.cancel());
        assert!(revealed.visible());
        assert_eq!(revealed.phase(), WatchPhase::Finished);
    }

    #[test]
    fn fails_open_without_observer() {
        let mut controller = RevealController::new();
        controller.reveal_unwatched();
        assert!(controller.visible());
        assert_eq!(controller.phase(), WatchPhase::Finished);
    }

    #[test]
    fn presentation_tracks_visibility_and_delay() {
        let hidden = RevealPresentation::for_state(false, 0);
        assert_eq!(hidden.classes, vec!["fade-in"]);
        assert_eq!(hidden.style, "transition-delay: 0ms;");

        let shown = RevealPresentation::for_state(true, 400);
        assert_eq!(shown.classes, vec!["fade-in", "is-visible"]);
        assert_eq!(shown.style, "transition-delay: 400ms;");
    }

    #[test]
    fn stylesheet_hides_with_offset_and_animates_for_a_second() {
        let css = stylesheet();
        assert!(css.contains("translateY(3rem)"));
        assert!(css.contains("transition-duration: 1000ms"));
        assert!(css.contains(".fade-in.is-visible { opacity: 1; transform: translateY(0); }"));
    }

    #[test]
    fn stagger_delay_cascades() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay(i, 150)).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
    }
}
