//! Leptos DragDrop Utilities
//!
//! Row drag-and-drop for flat Leptos lists using mouse events.
//! Uses a movement threshold to distinguish click from drag; while a
//! drag is active, each row doubles as an insertion slot. The document
//! listeners are unbound when the binding scope is disposed, and their
//! bodies tolerate stale signals so a late event cannot panic.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals for one list
#[derive(Clone, Copy)]
pub struct DndState {
    /// Row currently being dragged
    pub dragging: RwSignal<Option<u32>>,
    /// Insertion slot (row index) under the cursor
    pub drop_slot: RwSignal<Option<usize>>,
    /// Row pressed down on but not yet past the threshold
    pending: RwSignal<Option<u32>>,
    /// Cursor position at mousedown, for movement detection
    start_pos: RwSignal<(i32, i32)>,
}

impl DndState {
    pub fn new() -> Self {
        Self {
            dragging: RwSignal::new(None),
            drop_slot: RwSignal::new(None),
            pending: RwSignal::new(None),
            start_pos: RwSignal::new((0, 0)),
        }
    }

    /// Mousedown handler for a draggable row
    pub fn on_row_mousedown(self, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        move |ev: web_sys::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            // Ignore presses on inputs and buttons inside the row
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            self.pending.set(Some(row_id));
            self.start_pos.set((ev.client_x(), ev.client_y()));
        }
    }

    /// Mouseenter handler marking a row as the insertion slot
    pub fn on_row_mouseenter(self, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        move |_ev: web_sys::MouseEvent| {
            if self.dragging.get_untracked().is_some() {
                self.drop_slot.set(Some(slot));
            }
        }
    }

    /// Mouseleave handler clearing the insertion slot
    pub fn on_row_mouseleave(self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        move |_ev: web_sys::MouseEvent| {
            if self.dragging.get_untracked().is_some() {
                self.drop_slot.set(None);
            }
        }
    }

    /// Reset all drag state after a drop or an abandoned press.
    /// Runs from the document listeners, which can fire once more while
    /// the scope is being disposed, so every write is a `try_set`.
    fn end_drag(self) {
        let _ = self.dragging.try_set(None);
        let _ = self.drop_slot.try_set(None);
        let _ = self.pending.try_set(None);
    }

    /// Promote a pending press to a drag once the cursor moves far enough
    fn track_movement(self, ev: &web_sys::MouseEvent) {
        let pending = match self.pending.try_get_untracked() {
            Some(Some(id)) => id,
            _ => return,
        };
        if self.dragging.try_get_untracked().flatten().is_some() {
            return;
        }
        let (start_x, start_y) = match self.start_pos.try_get_untracked() {
            Some(pos) => pos,
            None => return,
        };
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            let _ = self.dragging.try_set(Some(pending));
        }
    }

    /// Bind document-level mousemove/mouseup listeners. `on_drop` receives
    /// the dragged row id and the insertion slot it was released over.
    /// Both listeners are removed again when the current owner is cleaned
    /// up, so remounting the bound component does not stack handlers.
    pub fn bind_global_handlers<F>(self, on_drop: F)
    where
        F: Fn(u32, usize) + Clone + 'static,
    {
        use wasm_bindgen::closure::Closure;

        let doc = match web_sys::window().and_then(|w| w.document()) {
            Some(doc) => doc,
            None => return,
        };

        let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |ev: web_sys::MouseEvent| {
                self.track_movement(&ev);
            },
        );

        let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |_ev: web_sys::MouseEvent| {
                let dragging = self.dragging.try_get_untracked().flatten();
                let slot = self.drop_slot.try_get_untracked().flatten();
                self.end_drag();

                if let (Some(dragged), Some(slot)) = (dragging, slot) {
                    on_drop(dragged, slot);
                }
            },
        );

        let _ = doc.add_event_listener_with_callback(
            "mousemove",
            on_mousemove.as_ref().unchecked_ref(),
        );
        let _ = doc.add_event_listener_with_callback(
            "mouseup",
            on_mouseup.as_ref().unchecked_ref(),
        );

        // `on_cleanup` requires `Send + Sync`, but the document and closures
        // are wasm single-threaded types; `SendWrapper` bridges the bound.
        let cleanup_state = send_wrapper::SendWrapper::new((doc, on_mousemove, on_mouseup));
        on_cleanup(move || {
            let (doc, on_mousemove, on_mouseup) = cleanup_state.take();
            let _ = doc.remove_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
            let _ = doc.remove_event_listener_with_callback(
                "mouseup",
                on_mouseup.as_ref().unchecked_ref(),
            );
        });
    }
}

impl Default for DndState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_drag_clears_state() {
        let owner = Owner::new();
        let dnd = owner.with(DndState::new);

        dnd.dragging.set(Some(7));
        dnd.drop_slot.set(Some(2));
        dnd.pending.set(Some(7));

        dnd.end_drag();

        assert_eq!(dnd.dragging.get_untracked(), None);
        assert_eq!(dnd.drop_slot.get_untracked(), None);
        assert_eq!(dnd.pending.get_untracked(), None);
        drop(owner);
    }

    #[test]
    fn test_listener_body_noops_after_scope_disposal() {
        let owner = Owner::new();
        let dnd = owner.with(DndState::new);
        drop(owner);

        // A document listener can fire once more between disposal and
        // cleanup; stale state must read as empty and writes must not panic.
        assert!(dnd.dragging.try_get_untracked().is_none());
        assert!(dnd.drop_slot.try_get_untracked().is_none());
        assert!(dnd.pending.try_get_untracked().is_none());
        dnd.end_drag();
    }
}
