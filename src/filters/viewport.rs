use serde::Serialize;
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

/// Viewports narrower than this (in CSS pixels) are considered narrow.
pub const NARROW_VIEWPORT_THRESHOLD: u32 = 1024;

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: u32) -> Self {
        if width < NARROW_VIEWPORT_THRESHOLD {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

type ResizeCallback = Box<dyn FnMut(u32)>;

/// Registry of viewport resize callbacks. Callbacks stay registered for as long as the
/// corresponding [`ResizeSubscription`] is alive.
#[derive(Default)]
pub struct ResizeListeners {
    callbacks: Rc<RefCell<Vec<(u64, ResizeCallback)>>>,
    next_id: Cell<u64>,
}

impl ResizeListeners {
    pub fn subscribe(&self, callback: impl FnMut(u32) + 'static) -> ResizeSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().push((id, Box::new(callback)));

        ResizeSubscription {
            id,
            callbacks: Rc::downgrade(&self.callbacks),
        }
    }

    /// Invokes all registered callbacks with the new viewport width. Callbacks must not subscribe
    /// or unsubscribe while being notified.
    pub fn notify(&self, width: u32) {
        for (_, callback) in self.callbacks.borrow_mut().iter_mut() {
            callback(width);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deregisters the resize callback when dropped.
pub struct ResizeSubscription {
    id: u64,
    callbacks: Weak<RefCell<Vec<(u64, ResizeCallback)>>>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(callbacks) = self.callbacks.upgrade() {
            callbacks.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
