use std::rc::Rc;

use log::debug;
use serde::Serialize;
use yew::prelude::*;

use crate::evasive::ButtonAnchor;

/// Top-level phase of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    /// Question card with the Yes/No buttons
    Idle,
    /// Success card with the "Play again" action
    Affirmed,
}

pub enum PageAction {
    /// "Yes" was pressed
    Affirm,
    /// The "No" button was triggered and moved to a new anchor
    Evade(ButtonAnchor),
    /// "Play again"
    Reset,
}

/// Everything the page needs to render the card.
///
/// A pinned anchor always comes with `has_evaded` set; both change in the
/// same `Evade` update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InteractionState {
    pub affirmed: bool,
    pub anchor: ButtonAnchor,
    pub has_evaded: bool,
}

impl InteractionState {
    pub fn phase(&self) -> PagePhase {
        if self.affirmed {
            PagePhase::Affirmed
        } else {
            PagePhase::Idle
        }
    }

    pub fn apply(&self, action: &PageAction) -> Self {
        match action {
            PageAction::Affirm => Self {
                affirmed: true,
                ..*self
            },
            // The button is hidden on the success card
            PageAction::Evade(_) if self.affirmed => *self,
            PageAction::Evade(anchor) => Self {
                anchor: *anchor,
                has_evaded: true,
                ..*self
            },
            PageAction::Reset => Self::default(),
        }
    }
}

impl Reducible for InteractionState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(&action);
        if next == *self {
            return self;
        }
        debug!(
            "Page state -> {}",
            serde_json::to_string(&next).unwrap_or_else(|e| e.to_string())
        );
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evasive::{compute_anchor, AnchorMode, Viewport};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn evade(state: InteractionState, viewport: Viewport, rng: &mut Pcg32) -> InteractionState {
        state.apply(&PageAction::Evade(compute_anchor(viewport, rng)))
    }

    #[test]
    fn test_initial_state() {
        let state = InteractionState::default();
        assert_eq!(state.phase(), PagePhase::Idle);
        assert!(!state.affirmed);
        assert!(!state.has_evaded);
        assert_eq!(state.anchor.mode, AnchorMode::Static);
        assert_eq!((state.anchor.x, state.anchor.y), (0.0, 0.0));
    }

    #[test]
    fn test_affirm_from_idle() {
        let state = InteractionState::default().apply(&PageAction::Affirm);
        assert_eq!(state.phase(), PagePhase::Affirmed);
        assert!(!state.has_evaded);
        assert_eq!(state.anchor, ButtonAnchor::default());
    }

    #[test]
    fn test_evade_scenario() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let state = evade(InteractionState::default(), Viewport::new(1000.0, 800.0), &mut rng);
        assert_eq!(state.phase(), PagePhase::Idle);
        assert!(state.has_evaded);
        assert_eq!(state.anchor.mode, AnchorMode::Pinned);
        assert!((50.0..=850.0).contains(&state.anchor.x));
        assert!((50.0..=740.0).contains(&state.anchor.y));
    }

    #[test]
    fn test_degenerate_evade_scenario() {
        let mut rng = Pcg32::seed_from_u64(5);
        let state = evade(InteractionState::default(), Viewport::new(100.0, 100.0), &mut rng);
        assert_eq!(state.anchor, ButtonAnchor::pinned(50.0, 50.0));
        assert!(state.has_evaded);
    }

    #[test]
    fn test_evade_never_affirms() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut state = InteractionState::default();
        for _ in 0..25 {
            state = evade(state, Viewport::new(800.0, 600.0), &mut rng);
            assert!(!state.affirmed);
            assert!(state.anchor.is_pinned() && state.has_evaded);
        }
    }

    #[test]
    fn test_affirm_preserves_evasive_state() {
        let mut rng = Pcg32::seed_from_u64(7);
        let evaded = evade(InteractionState::default(), Viewport::new(1280.0, 720.0), &mut rng);
        let affirmed = evaded.apply(&PageAction::Affirm);
        assert!(affirmed.affirmed);
        assert_eq!(affirmed.anchor, evaded.anchor);
        assert!(affirmed.has_evaded);
    }

    #[test]
    fn test_only_reset_leaves_affirmed() {
        let mut rng = Pcg32::seed_from_u64(8);
        let affirmed = InteractionState::default().apply(&PageAction::Affirm);
        assert!(affirmed.apply(&PageAction::Affirm).affirmed);
        assert_eq!(evade(affirmed, Viewport::new(1000.0, 800.0), &mut rng), affirmed);
        assert_eq!(affirmed.apply(&PageAction::Reset).phase(), PagePhase::Idle);
    }

    #[test]
    fn test_reset_restores_initial_value() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = InteractionState::default();
        for _ in 0..5 {
            state = evade(state, Viewport::new(1024.0, 768.0), &mut rng);
        }
        state = state.apply(&PageAction::Affirm).apply(&PageAction::Reset);
        assert_eq!(state, InteractionState::default());

        // Reset straight from Idle as well
        let state = evade(InteractionState::default(), Viewport::ZERO, &mut rng);
        assert_eq!(state.apply(&PageAction::Reset), InteractionState::default());
    }

    #[test]
    fn test_reducer_keeps_rc_on_noop() {
        let state = Rc::new(InteractionState::default().apply(&PageAction::Affirm));
        let next = Rc::clone(&state).reduce(PageAction::Affirm);
        assert!(Rc::ptr_eq(&state, &next));

        let reset = next.reduce(PageAction::Reset);
        assert_eq!(*reset, InteractionState::default());
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&InteractionState::default()).unwrap();
        assert_eq!(
            json,
            r#"{"affirmed":false,"anchor":{"mode":"static","x":0.0,"y":0.0},"has_evaded":false}"#
        );
    }
}
