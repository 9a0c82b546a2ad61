//! Resolution of commits and button presses into domain actions.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{
    CardId, DirectionMap, ExitVector, InteractionRecordError, SwipeAction, SwipeDirection,
};
use crate::deck::Deck;
use crate::feed::InteractionRecorder;

/// Exit velocity attributed to button-invoked resolutions, units/ms.
const BUTTON_EXIT_VELOCITY: f32 = 0.5;

/// A card's resolution: the action taken and the exit trajectory.
///
/// Consumed by the deck lifecycle manager, which schedules the exit and
/// advances the stack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolved {
    /// The resolved card.
    pub card: CardId,

    /// The domain action.
    pub action: SwipeAction,

    /// Exit trajectory for the animation coordinator.
    pub exit: ExitVector,
}

/// Result of a successful routing step.
#[derive(Clone, Debug, PartialEq)]
pub struct RouterOutcome {
    /// The resolution to act on.
    pub resolved: Resolved,

    /// Failure from the fire-and-forget recorder call, if any. The
    /// optimistic flag stays applied either way.
    pub record_error: Option<InteractionRecordError>,
}

/// Classifies commits and button presses, guarded by the resolved set.
///
/// The guard ordering is the engine's core correctness property: the
/// resolved-set insertion happens synchronously inside `mark_resolved`,
/// before any animation is scheduled, so a fast double-tap or a race
/// between a drag release and a button press resolves exactly once.
#[derive(Clone, Debug)]
pub struct ResolutionRouter {
    directions: DirectionMap,
}

impl ResolutionRouter {
    /// Create a router over a direction map.
    #[must_use]
    pub fn new(directions: DirectionMap) -> Self {
        Self { directions }
    }

    /// Resolve a committed gesture on `card`.
    ///
    /// Returns `None` on a guard trip (already resolved, or a reset is in
    /// progress) — the caller must do nothing further.
    pub fn resolve_commit<R: InteractionRecorder>(
        &self,
        deck: &mut Deck,
        recorder: &mut R,
        card: CardId,
        direction: SwipeDirection,
        velocity: f32,
        reset_in_progress: bool,
    ) -> Option<RouterOutcome> {
        let action = self.directions.action_for(direction);
        let exit = ExitVector::from_direction(direction, velocity);
        self.resolve(deck, recorder, card, action, exit, reset_in_progress)
    }

    /// Resolve an explicit button press (Pass/Like/Save) on `card`.
    ///
    /// The exit direction comes from the direction map's reverse lookup.
    /// Follow/Unfollow go through [`ResolutionRouter::toggle_follow`].
    pub fn resolve_press<R: InteractionRecorder>(
        &self,
        deck: &mut Deck,
        recorder: &mut R,
        card: CardId,
        action: SwipeAction,
        reset_in_progress: bool,
    ) -> Option<RouterOutcome> {
        let direction = self.directions.direction_for(action)?;
        let exit = ExitVector::from_direction(direction, BUTTON_EXIT_VELOCITY);
        self.resolve(deck, recorder, card, action, exit, reset_in_progress)
    }

    /// Toggle the follow flag for `card`'s author.
    ///
    /// No exit and no resolved-set entry: the card stays in the stack, and
    /// marking it resolved would wrongly block a later like/pass on it.
    pub fn toggle_follow<R: InteractionRecorder>(
        &self,
        deck: &mut Deck,
        recorder: &mut R,
        card: CardId,
        reset_in_progress: bool,
    ) -> Option<(SwipeAction, Option<InteractionRecordError>)> {
        if reset_in_progress {
            debug!("follow toggle for {card} rejected: deck reset in progress");
            return None;
        }
        if deck.is_resolved(card) {
            debug!("follow toggle for exiting {card} ignored");
            return None;
        }

        let target = deck.card_mut(card)?;
        let action = if target.is_following {
            SwipeAction::Unfollow
        } else {
            SwipeAction::Follow
        };
        target.set_following(action == SwipeAction::Follow);

        let record_error = recorder.record_action(card, action).err();
        if let Some(err) = &record_error {
            warn!("interaction record failed: {err}");
        }
        Some((action, record_error))
    }

    fn resolve<R: InteractionRecorder>(
        &self,
        deck: &mut Deck,
        recorder: &mut R,
        card: CardId,
        action: SwipeAction,
        exit: ExitVector,
        reset_in_progress: bool,
    ) -> Option<RouterOutcome> {
        if reset_in_progress {
            debug!("resolution of {card} rejected: deck reset in progress");
            return None;
        }

        // Synchronous guard before any asynchronous effect. A second call
        // for the same id lands here and is dropped.
        if !deck.mark_resolved(card) {
            debug!("double-resolution attempt for {card} ignored");
            return None;
        }

        if let Some(target) = deck.card_mut(card) {
            match action {
                SwipeAction::Like => target.mark_liked(),
                SwipeAction::Save => target.mark_saved(),
                SwipeAction::Pass | SwipeAction::Follow | SwipeAction::Unfollow => {}
            }
        }

        let record_error = recorder.record_action(card, action).err();
        if let Some(err) = &record_error {
            warn!("interaction record failed: {err}");
        }

        Some(RouterOutcome {
            resolved: Resolved { card, action, exit },
            record_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AuthorInfo, Card};
    use crate::feed::CollectingRecorder;

    fn deck_of(ids: &[u64]) -> Deck {
        Deck::from_cards(ids.iter().map(|&i| {
            Card::new(CardId::new(i), "https://cdn.test/m.jpg", AuthorInfo::new(1, "ana"))
        }))
    }

    fn router() -> ResolutionRouter {
        ResolutionRouter::new(DirectionMap::default())
    }

    #[test]
    fn test_right_commit_resolves_like() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();

        let outcome = router()
            .resolve_commit(&mut deck, &mut recorder, CardId::new(1), SwipeDirection::Right, 0.3, false)
            .unwrap();

        assert_eq!(outcome.resolved.action, SwipeAction::Like);
        assert_eq!(outcome.resolved.exit.dx, 1.0);
        assert!(deck.is_resolved(CardId::new(1)));
        assert!(deck.card(CardId::new(1)).unwrap().is_liked);
        assert_eq!(recorder.recorded(), &[(CardId::new(1), SwipeAction::Like)]);
    }

    #[test]
    fn test_left_commit_resolves_pass() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();

        let outcome = router()
            .resolve_commit(&mut deck, &mut recorder, CardId::new(1), SwipeDirection::Left, 0.3, false)
            .unwrap();

        assert_eq!(outcome.resolved.action, SwipeAction::Pass);
        assert!(!deck.card(CardId::new(1)).unwrap().is_liked);
    }

    #[test]
    fn test_up_commit_resolves_save() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();

        let outcome = router()
            .resolve_commit(&mut deck, &mut recorder, CardId::new(1), SwipeDirection::Up, 0.3, false)
            .unwrap();

        assert_eq!(outcome.resolved.action, SwipeAction::Save);
        assert_eq!(outcome.resolved.exit.dy, -1.0);
        assert!(deck.card(CardId::new(1)).unwrap().is_saved);
    }

    #[test]
    fn test_double_resolution_guard() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();
        let router = router();

        let first = router.resolve_commit(
            &mut deck, &mut recorder, CardId::new(1), SwipeDirection::Right, 0.3, false,
        );
        // Drag release and button press racing on the same card
        let second = router.resolve_press(
            &mut deck, &mut recorder, CardId::new(1), SwipeAction::Like, false,
        );

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(recorder.recorded().len(), 1);
    }

    #[test]
    fn test_reset_in_progress_rejects() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();

        let outcome = router().resolve_commit(
            &mut deck, &mut recorder, CardId::new(1), SwipeDirection::Right, 0.3, true,
        );

        assert!(outcome.is_none());
        assert!(!deck.is_resolved(CardId::new(1)));
        assert!(recorder.recorded().is_empty());
    }

    #[test]
    fn test_press_uses_mapped_direction() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();

        let outcome = router()
            .resolve_press(&mut deck, &mut recorder, CardId::new(1), SwipeAction::Save, false)
            .unwrap();

        assert_eq!(outcome.resolved.exit.dy, -1.0);
    }

    #[test]
    fn test_follow_toggles_without_resolving() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();
        let router = router();

        let (action, _) = router
            .toggle_follow(&mut deck, &mut recorder, CardId::new(1), false)
            .unwrap();
        assert_eq!(action, SwipeAction::Follow);
        assert!(deck.card(CardId::new(1)).unwrap().is_following);
        assert!(!deck.is_resolved(CardId::new(1)));

        let (action, _) = router
            .toggle_follow(&mut deck, &mut recorder, CardId::new(1), false)
            .unwrap();
        assert_eq!(action, SwipeAction::Unfollow);
        assert!(!deck.card(CardId::new(1)).unwrap().is_following);

        // Card still resolvable after toggles
        assert!(router
            .resolve_press(&mut deck, &mut recorder, CardId::new(1), SwipeAction::Like, false)
            .is_some());
    }

    #[test]
    fn test_follow_on_exiting_card_ignored() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();
        deck.mark_resolved(CardId::new(1));

        assert!(router()
            .toggle_follow(&mut deck, &mut recorder, CardId::new(1), false)
            .is_none());
    }

    #[test]
    fn test_record_failure_keeps_optimistic_flag() {
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::failing("offline");

        let outcome = router()
            .resolve_commit(&mut deck, &mut recorder, CardId::new(1), SwipeDirection::Right, 0.3, false)
            .unwrap();

        assert!(outcome.record_error.is_some());
        // Deliberately not rolled back
        assert!(deck.card(CardId::new(1)).unwrap().is_liked);
        assert!(deck.is_resolved(CardId::new(1)));
    }

    #[test]
    fn test_remapped_direction_classification() {
        let map = DirectionMap {
            right: SwipeAction::Pass,
            left: SwipeAction::Like,
            up: SwipeAction::Save,
        };
        let router = ResolutionRouter::new(map);
        let mut deck = deck_of(&[1]);
        let mut recorder = CollectingRecorder::new();

        let outcome = router
            .resolve_commit(&mut deck, &mut recorder, CardId::new(1), SwipeDirection::Right, 0.3, false)
            .unwrap();

        assert_eq!(outcome.resolved.action, SwipeAction::Pass);
    }
}
