use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::traits::{InputEvent, InputHandler, InputSource};

type SharedHandler = Rc<RefCell<InputHandler>>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, SharedHandler)>>,
}

impl Listeners {
    fn remove(&self, id: u64) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }
}

/// Single-threaded input broadcaster.
///
/// Hosts push events in with [`InputHub::dispatch`]; every subscribed
/// handler sees every event in registration order.
#[derive(Default)]
pub struct InputHub {
    listeners: Rc<Listeners>,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to all current handlers.
    ///
    /// The handler list is snapshotted first, so handlers may drop
    /// subscriptions (their own included) while the event is in flight.
    /// A handler that dispatches back into the hub does not see its own
    /// nested event; it is skipped while it is still running.
    pub fn dispatch(&self, event: &InputEvent) {
        let snapshot: Vec<SharedHandler> = self
            .listeners
            .entries
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in snapshot {
            match handler.try_borrow_mut() {
                Ok(mut handler) => (*handler)(event),
                Err(_) => log::trace!("skipping busy input handler for nested {event:?}"),
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }
}

impl InputSource for InputHub {
    fn subscribe(&self, handler: InputHandler) -> Subscription {
        let id = self.listeners.next_id.get();
        self.listeners.next_id.set(id + 1);
        self.listeners
            .entries
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        log::debug!("input subscription {id} registered");

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }
}

impl fmt::Debug for InputHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle to a registered input handler.
///
/// Dropping the handle deregisters the handler exactly once. If the hub is
/// already gone the drop is a no-op.
#[must_use = "dropping a subscription immediately deregisters its handler"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the handler is still registered with a live source
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .map(|l| l.entries.borrow().iter().any(|(id, _)| *id == self.id))
            .unwrap_or(false)
    }

    /// Explicitly deregister. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if listeners.remove(self.id) {
                log::debug!("input subscription {} released", self.id);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
