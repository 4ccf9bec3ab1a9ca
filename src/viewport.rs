// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewport size tracking and resize subscriptions.
//!
//! Listeners are registered explicitly and receive a [`ResizeSubscription`]
//! guard. Dropping the guard removes the listener, so it is deregistered
//! exactly once no matter how its owner goes away.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type ResizeCallback = Box<dyn FnMut(f32, f32)>;

struct ViewportInner {
    width: f32,
    height: f32,
    next_id: u64,
    listeners: Vec<(u64, ResizeCallback)>,
    /// Ids dropped while their listeners were out of the cell being notified
    dropped: Vec<u64>,
}

/// The window area the canvas is laid out in. Single-threaded.
#[derive(Clone)]
pub struct Viewport {
    inner: Rc<RefCell<ViewportInner>>,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewportInner {
                width,
                height,
                next_id: 0,
                listeners: Vec::new(),
                dropped: Vec::new(),
            })),
        }
    }

    /// Current (width, height).
    pub fn size(&self) -> (f32, f32) {
        let inner = self.inner.borrow();
        (inner.width, inner.height)
    }

    /// Register a resize listener.
    ///
    /// Callbacks may read the viewport and drop subscriptions. Listeners
    /// registered from inside a callback first hear the next resize.
    pub fn subscribe(&self, callback: impl FnMut(f32, f32) + 'static) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(callback)));
        log::debug!("Registered resize listener {}", id);

        ResizeSubscription {
            id,
            viewport: Rc::downgrade(&self.inner),
        }
    }

    /// Record a new viewport size, notifying listeners if it changed.
    pub fn resize(&self, width: f32, height: f32) {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.width == width && inner.height == height {
                return;
            }
            inner.width = width;
            inner.height = height;
            std::mem::take(&mut inner.listeners)
        };

        for (_, listener) in listeners.iter_mut() {
            listener(width, height);
        }

        let removed = {
            let mut inner = self.inner.borrow_mut();
            let added = std::mem::replace(&mut inner.listeners, listeners);
            inner.listeners.extend(added);

            let dropped = std::mem::take(&mut inner.dropped);
            let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut inner.listeners)
                .into_iter()
                .partition(|(id, _)| dropped.contains(id));
            inner.listeners = kept;
            // Ids not restored here belong to an outer notification
            inner.dropped = dropped
                .into_iter()
                .filter(|id| !removed.iter().any(|(gone, _)| *gone == *id))
                .collect();
            removed
        };
        // Closures may own subscriptions, so drop them outside the borrow
        drop(removed);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Guard for a registered resize listener.
pub struct ResizeSubscription {
    id: u64,
    viewport: Weak<RefCell<ViewportInner>>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(inner) = self.viewport.upgrade() else {
            return;
        };
        let removed = {
            let mut inner = inner.borrow_mut();
            match inner.listeners.iter().position(|(id, _)| *id == self.id) {
                Some(index) => Some(inner.listeners.remove(index)),
                None => {
                    // Out of the cell for a notification; removed once it returns
                    inner.dropped.push(self.id);
                    None
                }
            }
        };
        drop(removed);
        log::debug!("Removed resize listener {}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_listener_sees_resizes() {
        let viewport = Viewport::new(800.0, 600.0);
        let seen = Rc::new(Cell::new((0.0, 0.0)));
        let sink = Rc::clone(&seen);
        let _sub = viewport.subscribe(move |w, h| sink.set((w, h)));

        viewport.resize(1024.0, 768.0);
        assert_eq!(seen.get(), (1024.0, 768.0));
        assert_eq!(viewport.size(), (1024.0, 768.0));
    }

    #[test]
    fn test_unchanged_size_does_not_notify() {
        let viewport = Viewport::new(800.0, 600.0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _sub = viewport.subscribe(move |_, _| counter.set(counter.get() + 1));

        viewport.resize(800.0, 600.0);
        assert_eq!(calls.get(), 0);
        viewport.resize(801.0, 600.0);
        viewport.resize(801.0, 600.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_drop_deregisters_once() {
        let viewport = Viewport::new(100.0, 100.0);
        let first = viewport.subscribe(|_, _| {});
        let _second = viewport.subscribe(|_, _| {});
        assert_eq!(viewport.listener_count(), 2);

        drop(first);
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn test_listener_can_read_viewport() {
        let viewport = Viewport::new(100.0, 100.0);
        let seen = Rc::new(Cell::new((0.0, 0.0)));
        let sink = Rc::clone(&seen);
        let handle = viewport.clone();
        let sub = viewport.subscribe(move |_, _| sink.set(handle.size()));

        viewport.resize(300.0, 200.0);
        assert_eq!(seen.get(), (300.0, 200.0));
        drop(sub);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_drop_subscriptions() {
        let viewport = Viewport::new(100.0, 100.0);
        let slot: Rc<RefCell<Option<ResizeSubscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let own = Rc::clone(&slot);
        let counter = Rc::clone(&calls);
        *slot.borrow_mut() = Some(viewport.subscribe(move |_, _| {
            counter.set(counter.get() + 1);
            own.borrow_mut().take();
        }));
        let _other = viewport.subscribe(|_, _| {});
        assert_eq!(viewport.listener_count(), 2);

        viewport.resize(200.0, 100.0);
        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.listener_count(), 1);

        viewport.resize(300.0, 100.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscription_outliving_viewport() {
        let viewport = Viewport::new(100.0, 100.0);
        let sub = viewport.subscribe(|_, _| {});
        drop(viewport);
        drop(sub);
    }
}
