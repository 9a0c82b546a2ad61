//! The engine facade: owns all mutable state and enforces ordering.

use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::animate::{AnimationCoordinator, AnimationKind};
use crate::core::{
    Card, CardId, DeckRng, EngineConfig, FeedFetchError, SwipeAction, SwipeDirection,
};
use crate::deck::{Deck, Lifecycle, LifecycleState};
use crate::feed::{FeedProvider, InteractionRecorder};
use crate::gesture::{DragTracker, GestureOutcome, GestureSample};
use crate::position::{position_for_index, StackPosition, Transform};
use crate::resolve::{ResolutionRouter, RouterOutcome};

use super::events::EngineEvent;
use super::view::CardView;

/// Card-stack interaction engine.
///
/// Single-threaded and event-driven: the host forwards pointer input and
/// calls [`DeckEngine::tick`] from its frame loop with a monotonic
/// timestamp in milliseconds. The engine never reads a clock and never
/// calls back into the host except through the traits it was given; host
/// hooks are delivered as [`EngineEvent`] values.
///
/// The deck and resolved set are written only here and in the resolution
/// router; every other component reads per-frame snapshots. Correctness
/// under input/animation races rests on one ordering rule: the resolved
/// set is updated synchronously before any exit animation is scheduled,
/// and the deck splice happens only in the exit-completion path.
pub struct DeckEngine<F: FeedProvider, R: InteractionRecorder> {
    config: EngineConfig,
    deck: Deck,
    lifecycle: Lifecycle,
    tracker: DragTracker,
    router: ResolutionRouter,
    coordinator: AnimationCoordinator,
    feed: F,
    recorder: R,
    rng: DeckRng,
    cursor: Option<String>,
    rest_tilt: FxHashMap<CardId, f32>,
    slots: FxHashMap<CardId, StackPosition>,
    events: Vec<EngineEvent>,
    refill_error: Option<FeedFetchError>,
}

impl<F: FeedProvider, R: InteractionRecorder> DeckEngine<F, R> {
    /// Create an engine with an empty deck.
    ///
    /// Call [`DeckEngine::mount`] to load the first batch from the feed,
    /// or [`DeckEngine::admit_cards`] to supply cards directly.
    #[must_use]
    pub fn new(config: EngineConfig, feed: F, recorder: R, seed: u64) -> Self {
        let tracker = DragTracker::new(config.gesture);
        let router = ResolutionRouter::new(config.directions);
        let coordinator = AnimationCoordinator::new(config.animation);
        Self {
            config,
            deck: Deck::new(),
            lifecycle: Lifecycle::new(),
            tracker,
            router,
            coordinator,
            feed,
            recorder,
            rng: DeckRng::new(seed),
            cursor: None,
            rest_tilt: FxHashMap::default(),
            slots: FxHashMap::default(),
            events: Vec::new(),
            refill_error: None,
        }
    }

    // === Host API: lifecycle ===

    /// Load the initial batch from the feed provider.
    ///
    /// No-op if the deck already has cards.
    pub fn mount(&mut self, now_ms: f64) {
        if !self.deck.is_empty() || self.lifecycle.state() == LifecycleState::Refilling {
            return;
        }
        self.tracker.lock();
        self.lifecycle.on_refill_started();
        self.request_batch(now_ms);
    }

    /// Re-issue a failed refill request.
    ///
    /// Only meaningful in `Refilling`; no automatic retry loop runs inside
    /// the engine.
    pub fn retry_refill(&mut self, now_ms: f64) {
        if self.lifecycle.state() == LifecycleState::Refilling {
            self.request_batch(now_ms);
        }
    }

    /// Append a host-supplied batch outside the refill cycle (mid-session
    /// top-up). Rejected during a deck reset.
    ///
    /// Returns false if the batch was rejected.
    pub fn admit_cards(&mut self, cards: Vec<Card>, now_ms: f64) -> bool {
        if self.lifecycle.state().is_resetting() {
            return false;
        }
        let mut cycle_rng = self.rng.fork();
        self.admit(cards, &mut cycle_rng, now_ms);
        true
    }

    /// Advance animations to `now_ms` and process completions.
    ///
    /// Exit completions splice their card out of the deck and clear its
    /// resolved-set entry in the same step; emptying the deck starts the
    /// exhaustion/refill cycle.
    pub fn tick(&mut self, now_ms: f64) {
        let completions = self.coordinator.tick(now_ms);
        let mut removed_any = false;
        for done in completions {
            if done.kind == AnimationKind::Exit {
                self.deck.splice(done.card);
                self.rest_tilt.remove(&done.card);
                self.slots.remove(&done.card);
                removed_any = true;
            }
        }

        if removed_any && !self.coordinator.has_exits() {
            let exhausted = self.lifecycle.on_exits_drained(self.deck.is_empty());
            if exhausted {
                self.enter_exhausted(now_ms);
            }
        }
    }

    // === Host API: gestures (Front card only) ===

    /// Begin a drag on the Front card.
    ///
    /// Returns false (and tracks nothing) during a reset cycle, with no
    /// Front card, or mid-drag.
    pub fn begin_drag(&mut self, now_ms: f64) -> bool {
        if !self.lifecycle.state().accepts_input() {
            return false;
        }
        let front = match self.deck.front() {
            Some(card) => card.id,
            None => return false,
        };
        if !self.tracker.begin(now_ms) {
            return false;
        }
        // The drag owns the front transform while the pointer is down
        self.coordinator.cancel_settle(front);
        true
    }

    /// Apply a pointer delta to the active drag.
    pub fn drag_by(&mut self, dx: f32, dy: f32, now_ms: f64) -> bool {
        self.tracker.update(dx, dy, now_ms)
    }

    /// Release the drag: commit resolves the Front card, cancel settles it
    /// back to rest.
    pub fn end_drag(&mut self, now_ms: f64) {
        let sample = self.tracker.sample();
        let tilt = self.tracker.drag_tilt();
        let outcome = match self.tracker.release(now_ms) {
            Some(outcome) => outcome,
            None => return,
        };
        let front = match self.deck.front() {
            Some(card) => card.id,
            None => return,
        };
        let dragged = self.dragged_transform(front, &sample, tilt);

        match outcome {
            GestureOutcome::Commit {
                direction,
                velocity,
            } => self.resolve_commit(front, direction, velocity, dragged, now_ms),
            GestureOutcome::Cancel => {
                if let Some(rest) = self.resting_transform(front, StackPosition::Front) {
                    self.coordinator.schedule_settle(front, dragged, rest, now_ms);
                }
            }
        }
    }

    /// Snapshot of the in-flight drag.
    #[must_use]
    pub fn gesture_sample(&self) -> GestureSample {
        self.tracker.sample()
    }

    // === Host API: action buttons (Front card only) ===

    /// Invoke an action button on the Front card.
    ///
    /// Pass/Like/Save resolve the card with its mapped exit direction;
    /// Follow/Unfollow toggle the follow flag in place. Returns false on a
    /// guard trip (reset in progress, no front card, already resolved).
    pub fn press(&mut self, action: SwipeAction, now_ms: f64) -> bool {
        let reset = self.lifecycle.state().is_resetting();
        let front = match self.deck.front() {
            Some(card) => card.id,
            None => return false,
        };

        if !action.removes_card() {
            match self
                .router
                .toggle_follow(&mut self.deck, &mut self.recorder, front, reset)
            {
                Some((applied, record_error)) => {
                    self.events.push(EngineEvent::Swiped {
                        card: front,
                        action: applied,
                    });
                    if let Some(error) = record_error {
                        self.events.push(EngineEvent::RecordFailed { error });
                    }
                    true
                }
                None => false,
            }
        } else {
            let from = self.current_transform(front, StackPosition::Front, now_ms);
            match self
                .router
                .resolve_press(&mut self.deck, &mut self.recorder, front, action, reset)
            {
                Some(outcome) => {
                    self.apply_resolution(outcome, from, now_ms);
                    true
                }
                None => false,
            }
        }
    }

    // === Host API: render state ===

    /// Render state for every visible card this frame.
    ///
    /// Exactly one card is interactive for any non-empty deck outside a
    /// reset cycle. Hidden cards are omitted entirely.
    #[must_use]
    pub fn frame(&self, now_ms: f64) -> Vec<CardView> {
        let mut views = Vec::new();
        let mut unresolved_index = 0usize;

        for card in self.deck.iter() {
            if self.deck.is_resolved(card.id) {
                if let Some(transform) = self.coordinator.transform_for(card.id, now_ms) {
                    views.push(CardView {
                        card: card.clone(),
                        position: StackPosition::Front,
                        transform,
                        interactive: false,
                        exiting: true,
                    });
                }
                continue;
            }

            let position = position_for_index(unresolved_index);
            unresolved_index += 1;
            if position.is_hidden() {
                continue;
            }

            let rest = self
                .resting_transform(card.id, position)
                .unwrap_or_default();
            let mut transform = self
                .coordinator
                .transform_for(card.id, now_ms)
                .unwrap_or(rest);
            let interactive = position.is_front()
                && self.lifecycle.state().accepts_input()
                && !self.tracker.is_locked();

            if position.is_front() && self.tracker.is_active() {
                let sample = self.tracker.sample();
                transform = Transform {
                    x: rest.x + sample.offset_x,
                    y: rest.y + sample.offset_y,
                    rotation: rest.rotation + self.tracker.drag_tilt(),
                    ..rest
                };
            }

            views.push(CardView {
                card: card.clone(),
                position,
                transform,
                interactive,
                exiting: false,
            });
        }

        views
    }

    /// Current lifecycle state for loading/empty/error affordances.
    #[must_use]
    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Drain pending host events in emission order.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// The Front card, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.deck.front()
    }

    /// Total cards, including those animating out.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Cards still awaiting resolution.
    #[must_use]
    pub fn unresolved_len(&self) -> usize {
        self.deck.unresolved_len()
    }

    /// The last refill failure, if the engine is waiting on a retry.
    #[must_use]
    pub fn refill_error(&self) -> Option<&FeedFetchError> {
        self.refill_error.as_ref()
    }

    /// The interaction recorder (host-side inspection).
    #[must_use]
    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// The feed provider (host-side inspection).
    #[must_use]
    pub fn feed(&self) -> &F {
        &self.feed
    }

    // === Internals ===

    fn resolve_commit(
        &mut self,
        front: CardId,
        direction: SwipeDirection,
        velocity: f32,
        from: Transform,
        now_ms: f64,
    ) {
        let reset = self.lifecycle.state().is_resetting();
        if let Some(outcome) = self.router.resolve_commit(
            &mut self.deck,
            &mut self.recorder,
            front,
            direction,
            velocity,
            reset,
        ) {
            self.apply_resolution(outcome, from, now_ms);
        }
    }

    /// Ordering: the resolved-set entry is already in place (router);
    /// only now is the exit animation scheduled and the stack advanced.
    fn apply_resolution(&mut self, outcome: RouterOutcome, from: Transform, now_ms: f64) {
        let resolved = outcome.resolved;
        self.tracker.cancel();
        self.coordinator
            .schedule_exit(resolved.card, from, resolved.exit, now_ms);
        self.lifecycle.on_resolved();
        self.events.push(EngineEvent::Swiped {
            card: resolved.card,
            action: resolved.action,
        });
        if let Some(error) = outcome.record_error {
            self.events.push(EngineEvent::RecordFailed { error });
        }
        // The next card becomes Front (and interactive) immediately, while
        // the old Front is still animating away.
        self.refresh_slots(now_ms);
    }

    fn enter_exhausted(&mut self, now_ms: f64) {
        self.deck.clear_resolved();
        self.tracker.lock();
        self.coordinator.clear();
        self.rest_tilt.clear();
        self.slots.clear();
        self.events.push(EngineEvent::Exhausted);
        info!("deck exhausted, requesting refill");
        self.lifecycle.on_refill_started();
        self.request_batch(now_ms);
    }

    fn request_batch(&mut self, now_ms: f64) {
        match self.feed.fetch_next_batch(self.cursor.as_deref()) {
            Ok(batch) if batch.cards.is_empty() => {
                self.fail_refill(FeedFetchError::EmptyBatch);
            }
            Ok(batch) => {
                self.cursor = batch.next_cursor;
                let mut cards = batch.cards;
                let mut cycle_rng = self.rng.fork();
                if self.config.refill.shuffle_on_refill {
                    cycle_rng.shuffle(&mut cards);
                }
                let count = cards.len();
                self.admit(cards, &mut cycle_rng, now_ms);
                self.refill_error = None;
                self.lifecycle.on_refill_complete();
                self.tracker.unlock();
                self.events.push(EngineEvent::Refilled { count });
                info!("deck refilled with {count} cards");
            }
            Err(error) => self.fail_refill(error),
        }
    }

    fn fail_refill(&mut self, error: FeedFetchError) {
        warn!("refill failed: {error}");
        self.refill_error = Some(error.clone());
        self.events.push(EngineEvent::RefillFailed { error });
        // Stay in Refilling, input locked, until the host retries
    }

    fn admit(&mut self, cards: Vec<Card>, rng: &mut DeckRng, now_ms: f64) {
        let start = self.deck.unresolved_len();
        for card in cards {
            let tilt = rng.jitter(self.config.refill.rotation_jitter_deg);
            self.rest_tilt.insert(card.id, tilt);
            self.deck.push_back(card);
        }

        let entries: Vec<(CardId, usize)> = self
            .deck
            .unresolved()
            .enumerate()
            .skip(start)
            .map(|(index, card)| (card.id, index))
            .collect();
        for (id, index) in entries {
            let position = position_for_index(index);
            self.slots.insert(id, position);
            if let Some(rest) = self.resting_transform(id, position) {
                let delay = (index - start) as f64 * self.config.refill.stagger_ms;
                self.coordinator.schedule_entrance(id, rest, delay, now_ms);
            }
        }
    }

    /// Recompute slot assignment for the unresolved deck and settle every
    /// card whose slot changed.
    fn refresh_slots(&mut self, now_ms: f64) {
        let assignment: Vec<(CardId, StackPosition)> = self
            .deck
            .unresolved()
            .enumerate()
            .map(|(index, card)| (card.id, position_for_index(index)))
            .collect();

        let mut slots = FxHashMap::default();
        for (id, position) in assignment {
            let old = self.slots.get(&id).copied();
            slots.insert(id, position);
            if old == Some(position) {
                continue;
            }

            let target = match self.resting_transform(id, position) {
                Some(target) => target,
                None => {
                    // Moved out of the visible slots; nothing to animate
                    self.coordinator.cancel_settle(id);
                    continue;
                }
            };
            let from = self
                .coordinator
                .transform_for(id, now_ms)
                .or_else(|| old.and_then(|p| self.resting_transform(id, p)))
                .unwrap_or(target);
            if from.approx_eq(&target, 1e-3) {
                continue;
            }
            self.coordinator.schedule_settle(id, from, target, now_ms);
        }
        self.slots = slots;
    }

    /// Resting transform for a card in a slot: the layout table plus the
    /// card's randomized resting rotation.
    fn resting_transform(&self, id: CardId, position: StackPosition) -> Option<Transform> {
        let mut transform = position.resting_transform(&self.config.slots)?;
        transform.rotation += self.rest_tilt.get(&id).copied().unwrap_or(0.0);
        Some(transform)
    }

    fn current_transform(&self, id: CardId, position: StackPosition, now_ms: f64) -> Transform {
        self.coordinator
            .transform_for(id, now_ms)
            .or_else(|| self.resting_transform(id, position))
            .unwrap_or_default()
    }

    fn dragged_transform(&self, front: CardId, sample: &GestureSample, tilt: f32) -> Transform {
        let rest = self
            .resting_transform(front, StackPosition::Front)
            .unwrap_or_default();
        Transform {
            x: rest.x + sample.offset_x,
            y: rest.y + sample.offset_y,
            rotation: rest.rotation + tilt,
            ..rest
        }
    }
}
