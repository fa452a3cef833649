use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::input::InputEvent;
use crate::render::Batcher;

/// One screen on the [`ViewStack`].
///
/// `K` identifies registered views, `C` is the application context handed to
/// every callback.
pub trait View<K, C> {
    /// Advances the view by `dt` seconds. Returning `true` keeps the views
    /// below from updating.
    fn update(&mut self, cx: &mut C, requests: &mut Requests<K>, dt: f32) -> bool;

    /// Returns `true` when the event was consumed.
    fn handle_event(&mut self, cx: &mut C, requests: &mut Requests<K>, event: &InputEvent) -> bool;

    fn render(&self, cx: &C, batch: &mut Batcher);
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Change<K> {
    Push(K),
    Pop,
    Clear,
}

/// Queued stack changes.
#[derive(Debug)]
pub struct Requests<K> {
    pending: Vec<Change<K>>,
}

impl<K> Default for Requests<K> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<K> Requests<K> {
    pub fn push(&mut self, id: K) {
        self.pending.push(Change::Push(id));
    }

    pub fn pop(&mut self) {
        self.pending.push(Change::Pop);
    }

    pub fn clear(&mut self) {
        self.pending.push(Change::Clear);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

type Factory<K, C> = Box<dyn Fn(&mut C) -> Box<dyn View<K, C>>>;

/// Views in stacking order plus the factories that create them.
pub struct ViewStack<K, C> {
    factories: HashMap<K, Factory<K, C>>,
    stack: Vec<Box<dyn View<K, C>>>,
    requests: Requests<K>,
}

impl<K, C> Default for ViewStack<K, C>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> ViewStack<K, C>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            stack: Vec::new(),
            requests: Requests::default(),
        }
    }

    /// Makes `id` pushable. Re-registering replaces the factory.
    pub fn register<F>(&mut self, id: K, factory: F)
    where
        F: Fn(&mut C) -> Box<dyn View<K, C>> + 'static,
    {
        self.factories.insert(id, Box::new(factory));
    }

    /// Queues a push; the view is created when pending changes are applied.
    pub fn push(&mut self, id: K) {
        self.requests.push(id);
    }

    pub fn pop(&mut self) {
        self.requests.pop();
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Updates views top-down until one returns `true`, then applies pending
    /// changes. Returns whether a view stopped the traversal.
    pub fn update(&mut self, cx: &mut C, dt: f32) -> bool {
        let mut handled = false;
        for view in self.stack.iter_mut().rev() {
            if view.update(cx, &mut self.requests, dt) {
                handled = true;
                break;
            }
        }
        self.apply_pending(cx);
        handled
    }

    /// Offers `event` top-down until a view consumes it, then applies pending
    /// changes.
    pub fn handle_event(&mut self, cx: &mut C, event: &InputEvent) -> bool {
        let mut handled = false;
        for view in self.stack.iter_mut().rev() {
            if view.handle_event(cx, &mut self.requests, event) {
                handled = true;
                break;
            }
        }
        self.apply_pending(cx);
        handled
    }

    /// Renders every view bottom-up.
    pub fn render(&self, cx: &C, batch: &mut Batcher) {
        for view in &self.stack {
            view.render(cx, batch);
        }
    }

    /// Applies queued changes in request order.
    ///
    /// # Panics
    ///
    /// If a pushed id was never registered.
    pub fn apply_pending(&mut self, cx: &mut C) {
        let mut pending = std::mem::take(&mut self.requests.pending);

        for change in pending.drain(..) {
            match change {
                Change::Push(id) => {
                    let Some(factory) = self.factories.get(&id) else {
                        panic!("ViewStack: view {id:?} was never registered");
                    };
                    log::debug!("push view {id:?}");
                    self.stack.push(factory(cx));
                }
                Change::Pop => {
                    if self.stack.pop().is_none() {
                        log::debug!("pop on an empty view stack ignored");
                    }
                }
                Change::Clear => {
                    log::debug!("clear view stack ({} views)", self.stack.len());
                    self.stack.clear();
                }
            }
        }

        // Keep the allocation for the next traversal.
        self.requests.pending = pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonState, Key};

    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    enum Id {
        Game,
        Pause,
        Unregistered,
    }

    /// Test context: a trace of callbacks.
    #[derive(Default)]
    struct Log(Vec<String>);

    struct Probe {
        name: &'static str,
        blocks: bool,
        on_update: Option<Change<Id>>,
    }

    impl View<Id, Log> for Probe {
        fn update(&mut self, cx: &mut Log, requests: &mut Requests<Id>, _dt: f32) -> bool {
            cx.0.push(format!("update {}", self.name));
            match self.on_update.take() {
                Some(Change::Push(id)) => requests.push(id),
                Some(Change::Pop) => requests.pop(),
                Some(Change::Clear) => requests.clear(),
                None => {}
            }
            self.blocks
        }

        fn handle_event(&mut self, cx: &mut Log, _: &mut Requests<Id>, _: &InputEvent) -> bool {
            cx.0.push(format!("event {}", self.name));
            self.blocks
        }

        fn render(&self, _cx: &Log, _batch: &mut Batcher) {}
    }

    fn probe(name: &'static str, blocks: bool, on_update: Option<Change<Id>>) -> Box<dyn View<Id, Log>> {
        Box::new(Probe { name, blocks, on_update })
    }

    fn stack() -> ViewStack<Id, Log> {
        let mut s = ViewStack::new();
        s.register(Id::Game, |cx: &mut Log| {
            cx.0.push("create game".into());
            probe("game", false, None)
        });
        s.register(Id::Pause, |_: &mut Log| probe("pause", true, Some(Change::Pop)));
        s
    }

    fn escape() -> InputEvent {
        InputEvent::Key { key: Key::Escape, state: ButtonState::Pressed, repeat: false }
    }

    // ── deferred changes ──────────────────────────────────────────────────

    #[test]
    fn push_is_deferred_until_applied() {
        let mut s = stack();
        let mut cx = Log::default();

        s.push(Id::Game);
        assert!(s.is_empty());
        assert!(cx.0.is_empty());

        s.update(&mut cx, 0.0);
        assert_eq!(s.len(), 1);
        assert_eq!(cx.0, ["create game"]);
    }

    #[test]
    fn requests_from_views_apply_after_traversal() {
        let mut s = stack();
        let mut cx = Log::default();
        s.push(Id::Game);
        s.push(Id::Pause);
        s.apply_pending(&mut cx);
        assert_eq!(s.len(), 2);

        // Pause requests a pop while updating; it still blocks this update.
        let handled = s.update(&mut cx, 0.1);
        assert!(handled);
        assert_eq!(s.len(), 1);
        assert_eq!(cx.0.last().map(String::as_str), Some("update pause"));
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut s = stack();
        let mut cx = Log::default();
        s.push(Id::Game);
        s.push(Id::Game);
        s.apply_pending(&mut cx);

        s.clear();
        s.apply_pending(&mut cx);
        assert!(s.is_empty());
    }

    #[test]
    fn pop_on_empty_stack_is_ignored() {
        let mut s = stack();
        s.pop();
        s.apply_pending(&mut Log::default());
        assert!(s.is_empty());
    }

    #[test]
    #[should_panic(expected = "never registered")]
    fn pushing_unregistered_view_panics() {
        let mut s = stack();
        s.push(Id::Unregistered);
        s.apply_pending(&mut Log::default());
    }

    // ── traversal ─────────────────────────────────────────────────────────

    #[test]
    fn non_blocking_views_let_updates_through() {
        let mut s = stack();
        let mut cx = Log::default();
        s.push(Id::Game);
        s.push(Id::Game);
        s.apply_pending(&mut cx);
        cx.0.clear();

        assert!(!s.update(&mut cx, 0.0));
        assert_eq!(cx.0, ["update game", "update game"]);
    }

    #[test]
    fn top_view_consuming_an_event_hides_it_from_below() {
        let mut s = stack();
        let mut cx = Log::default();
        s.push(Id::Game);
        s.push(Id::Pause);
        s.apply_pending(&mut cx);
        cx.0.clear();

        assert!(s.handle_event(&mut cx, &escape()));
        assert_eq!(cx.0, ["event pause"]);
    }

    #[test]
    fn unconsumed_event_reports_false() {
        let mut s = stack();
        let mut cx = Log::default();
        s.push(Id::Game);
        s.apply_pending(&mut cx);

        assert!(!s.handle_event(&mut cx, &escape()));
    }
}
