//! Open/active state shared by compound containers, plus their dismiss listeners.

use std::cell::Cell;

use leptos::*;

use crate::ElementRef;

#[derive(Debug, Clone, Copy)]
/// Two-state open/closed flag owned by a container instance.
///
/// Transitions are idempotent and report whether the state actually changed,
/// so subscribers only re-render on real transitions.
pub struct OpenState {
    open: RwSignal<bool>,
}

impl OpenState {
    /// Creates the state in `initial`.
    pub fn new(initial: bool) -> Self {
        Self {
            open: create_rw_signal(initial),
        }
    }

    /// Tracked read.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Untracked read, for event handlers.
    pub fn is_open_untracked(&self) -> bool {
        self.open.get_untracked()
    }

    /// Moves to `open`. Returns `false` when already there.
    pub fn set(&self, open: bool) -> bool {
        if self.open.get_untracked() == open {
            return false;
        }
        self.open.set(open);
        true
    }

    /// Opens. Returns `false` when already open.
    pub fn open(&self) -> bool {
        self.set(true)
    }

    /// Closes. Returns `false` when already closed.
    pub fn close(&self) -> bool {
        self.set(false)
    }

    /// Flips the state. Always transitions.
    pub fn toggle(&self) -> bool {
        self.set(!self.is_open_untracked())
    }

    /// Read-only view for context consumers.
    pub fn signal(&self) -> Signal<bool> {
        self.open.into()
    }
}

impl Default for OpenState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which document-level events close a container.
pub struct DismissPolicy {
    /// Close on pointer activity outside the container (or on its backdrop).
    pub close_on_blur: bool,
    /// Close on the Escape key.
    pub close_on_esc: bool,
}

impl DismissPolicy {
    /// Whether a keydown with `key` should close the container.
    pub fn should_close_on_key(&self, key: &str) -> bool {
        self.close_on_esc && key == "Escape"
    }

    /// Whether pointer activity should close the container.
    pub fn should_close_on_pointer(&self, inside: bool) -> bool {
        self.close_on_blur && !inside
    }

    /// Applies a keydown to `close`. Returns whether `close` was invoked.
    pub fn handle_key(&self, key: &str, close: impl FnOnce()) -> bool {
        if !self.should_close_on_key(key) {
            return false;
        }
        close();
        true
    }

    /// Applies pointer activity to `close`. Returns whether `close` was invoked.
    pub fn handle_pointer(&self, inside: bool, close: impl FnOnce()) -> bool {
        if !self.should_close_on_pointer(inside) {
            return false;
        }
        close();
        true
    }

    /// Like [`handle_pointer`](Self::handle_pointer) for a hit test against the
    /// container element. `None` means the element is not attached (for example a
    /// component render target that dropped the ref) and never dismisses.
    pub fn handle_pointer_target(&self, inside: Option<bool>, close: impl FnOnce()) -> bool {
        match inside {
            Some(inside) => self.handle_pointer(inside, close),
            None => false,
        }
    }
}

thread_local! {
    static ACTIVE_LISTENERS: Cell<usize> = const { Cell::new(0) };
}

/// Number of document-level dismiss listeners currently registered on this thread.
pub fn active_listener_count() -> usize {
    ACTIVE_LISTENERS.with(Cell::get)
}

/// Document-level dismiss listeners for one container instance.
///
/// Listeners are removed when the guard drops, which covers component
/// cleanup as well as unwinding out of a failed render.
pub struct DismissListeners {
    count: usize,
    #[cfg(target_arch = "wasm32")]
    handles: Vec<WindowListenerHandle>,
}

impl DismissListeners {
    /// Registers a keydown listener when `close_on_esc` is set and a pointerdown
    /// listener when `close_on_blur` is set and an `inside` reference is available.
    pub fn install(policy: DismissPolicy, inside: Option<ElementRef>, close: Callback<()>) -> Self {
        let wants_key = policy.close_on_esc;
        let wants_pointer = policy.close_on_blur && inside.is_some();
        let count = usize::from(wants_key) + usize::from(wants_pointer);

        #[cfg(target_arch = "wasm32")]
        let handles = {
            let mut handles = Vec::with_capacity(count);
            if wants_key {
                handles.push(window_event_listener(ev::keydown, move |ev| {
                    if ev.default_prevented() {
                        return;
                    }
                    policy.handle_key(&ev.key(), || close.call(()));
                }));
            }
            if let Some(inside) = inside.filter(|_| wants_pointer) {
                handles.push(window_event_listener(ev::pointerdown, move |ev| {
                    let within = pointer_within(inside, &ev);
                    policy.handle_pointer_target(within, || close.call(()));
                }));
            }
            handles
        };
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (inside, close);

        ACTIVE_LISTENERS.with(|active| active.set(active.get() + count));
        Self {
            count,
            #[cfg(target_arch = "wasm32")]
            handles,
        }
    }

    /// Number of listeners this guard registered.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the policy needed no listeners at all.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Drop for DismissListeners {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        for handle in self.handles.drain(..) {
            handle.remove();
        }
        let count = self.count;
        ACTIVE_LISTENERS.with(|active| active.set(active.get().saturating_sub(count)));
    }
}

#[cfg(target_arch = "wasm32")]
fn pointer_within(inside: ElementRef, ev: &web_sys::PointerEvent) -> Option<bool> {
    use wasm_bindgen::JsCast;

    let element = inside.get_untracked()?;
    let target = ev.target();
    let node = target
        .as_ref()
        .and_then(|target| target.dyn_ref::<web_sys::Node>());
    Some(node.is_some_and(|node| element.contains(Some(node))))
}

/// Installs dismiss listeners for the current reactive owner and removes them on cleanup.
pub(crate) fn install_dismiss_listeners(
    policy: DismissPolicy,
    inside: Option<ElementRef>,
    close: Callback<()>,
) {
    let listeners = DismissListeners::install(policy, inside, close);
    if listeners.is_empty() {
        return;
    }
    on_cleanup(move || drop(listeners));
}

/// Runs the caller's click handler, then the container transition.
///
/// Compound leaves route every click through here so that the caller
/// callback always precedes the state change.
pub fn run_click_sequence<E: 'static>(
    event: E,
    on_click: Option<Callback<E>>,
    transition: impl FnOnce(),
) {
    if let Some(on_click) = on_click {
        on_click.call(event);
    }
    transition();
}
