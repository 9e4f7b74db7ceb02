// File: crates/chart-engine/src/observer.rs
// Summary: Container width observation: publish-on-change pub/sub with scoped subscriptions.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Box<dyn FnMut(f32)>;

struct Registry {
    width: Cell<Option<f32>>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
    // ids whose guard dropped while a dispatch held the subscriber list
    retired: RefCell<Vec<u64>>,
    next_id: Cell<u64>,
}

/// Tracks the chart container's content-box width and republishes it on
/// change. Height is fixed configuration and never observed.
///
/// Single-threaded: observations and callbacks run on the hosting event
/// loop, so at most one recomputation pass is in flight at a time.
/// Callbacks must not register new subscriptions from inside a dispatch.
pub struct ContainerObserver {
    registry: Rc<Registry>,
}

impl ContainerObserver {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                width: Cell::new(None),
                subscribers: RefCell::new(Vec::new()),
                retired: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Last observed width, if any observation has arrived yet.
    pub fn width(&self) -> Option<f32> {
        self.registry.width.get()
    }

    /// Record a width observation. Non-finite and negative widths are
    /// ignored; repeating the current width publishes nothing.
    pub fn observe(&self, width: f32) {
        if !width.is_finite() || width < 0.0 {
            return;
        }
        if self.registry.width.get() == Some(width) {
            return;
        }
        self.registry.width.set(Some(width));
        self.dispatch(width);
    }

    fn dispatch(&self, width: f32) {
        {
            let mut subs = self.registry.subscribers.borrow_mut();
            for (_, callback) in subs.iter_mut() {
                callback(width);
            }
        }
        // sweep guards dropped mid-dispatch
        let retired: Vec<u64> = self.registry.retired.borrow_mut().drain(..).collect();
        if !retired.is_empty() {
            self.registry
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| !retired.contains(id));
        }
    }

    /// Register `callback` for width updates. An already-observed width is
    /// replayed immediately, so a chart mounted after measurement starts
    /// from the real size. Delivery lasts until the returned guard drops.
    pub fn subscribe(&self, mut callback: impl FnMut(f32) + 'static) -> WidthSubscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        if let Some(width) = self.registry.width.get() {
            callback(width);
        }
        self.registry
            .subscribers
            .borrow_mut()
            .push((id, Box::new(callback)));
        WidthSubscription { registry: Rc::downgrade(&self.registry), id }
    }
}

impl Default for ContainerObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped handle for one width subscription. Dropping it unregisters the
/// callback on every exit path, so resize events can never fire into a
/// torn-down chart.
pub struct WidthSubscription {
    registry: Weak<Registry>,
    id: u64,
}

impl Drop for WidthSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else { return };
        match registry.subscribers.try_borrow_mut() {
            Ok(mut subs) => subs.retain(|(id, _)| *id != self.id),
            // dropped from inside a dispatch; the dispatcher sweeps it
            Err(_) => registry.retired.borrow_mut().push(self.id),
        }
    }
}
