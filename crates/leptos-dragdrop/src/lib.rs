//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Items are identified by a caller-chosen key `K`. Dropping a dragged item
//! onto another item reports `(dragged, target)` through the `on_drop`
//! callback given to [`bind_global_mouseup`]; what that means is up to the
//! caller.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the "just ended" flag stays up after a drop, so the click that
/// follows mouseup can be ignored
pub const DRAG_END_SUPPRESS_MS: u32 = 100;

/// Bounds every drag key must satisfy to live in a signal
pub trait DragKey: Clone + PartialEq + Send + Sync + 'static {}

impl<T: Clone + PartialEq + Send + Sync + 'static> DragKey for T {}

/// DnD state signals
pub struct DndSignals<K: DragKey> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<K>>,
    pub drop_target_write: WriteSignal<Option<K>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

// Signal handles are Copy regardless of K, derive would demand K: Copy.
impl<K: DragKey> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: DragKey> Copy for DndSignals<K> {}

impl<K: DragKey> DndSignals<K> {
    /// True while an item is being dragged (threshold passed)
    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.with(Option::is_some)
    }

    /// True if `id` is the item being dragged
    pub fn is_dragging_item(&self, id: &K) -> bool {
        self.dragging_id_read.with(|d| d.as_ref() == Some(id))
    }

    /// True if `id` is the current drop target
    pub fn is_drop_target(&self, id: &K) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(id))
    }

    /// True right after a drop; clicks arriving now belong to the drag
    pub fn drag_just_ended(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

pub fn create_dnd_signals<K: DragKey>() -> DndSignals<K> {
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Pair up the dragged item with its drop target.
/// Dropping an item onto itself resolves to nothing.
pub fn resolve_drop<K: PartialEq>(dragging: Option<K>, target: Option<K>) -> Option<(K, K)> {
    match (dragging, target) {
        (Some(dragged), Some(target)) if dragged != target => Some((dragged, target)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    // The owner may be gone by the time this fires
    gloo_timers::callback::Timeout::new(DRAG_END_SUPPRESS_MS, move || {
        let _ = clear.try_set(false);
    })
    .forget();
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on controls inside the item
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(item_id.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for items (become drop target)
pub fn make_on_item_mouseenter<K: DragKey>(dnd: DndSignals<K>, item_id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != item_id {
                dnd.drop_target_write.set(Some(item_id.clone()));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mousemove - starts drag once the pointer moved enough
fn bind_global_mousemove<K: DragKey>(dnd: DndSignals<K>) -> WindowListenerHandle {
    window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_none() || dnd.dragging_id_read.with_untracked(Option::is_some) {
            return;
        }
        let start = dnd.start_read.get_untracked();
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            log::debug!("[DND] drag started");
            dnd.dragging_id_write.set(pending);
        }
    })
}

/// Bind global mouseup handler for drop detection (and the mousemove
/// handler that starts drags). Both listeners are removed when the calling
/// component's owner is cleaned up.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, K) + 'static,
{
    let on_mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        let was_dragging = dragging_id.is_some();

        if !was_dragging {
            // Plain click - the click event fires naturally on the element
            dnd.pending_id_write.set(None);
            return;
        }

        end_drag(&dnd);
        if let Some((dragged, target)) = resolve_drop(dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });
    let on_mousemove = bind_global_mousemove(dnd);

    on_cleanup(move || {
        on_mouseup.remove();
        on_mousemove.remove();
    });
}
