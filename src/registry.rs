use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Token returned when a callback is added, used to remove it again.
///
/// Ids are unique across every registry in the process and are never reused, so an
/// id issued by one handler never removes anything from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered list of callbacks of a single shape `F`.
///
/// Insertion order is kept and the same callback may be present more than once.
pub struct HandlerRegistry<F: ?Sized> {
    handlers: Vec<(HandlerId, Rc<F>)>,
}

impl<F: ?Sized> HandlerRegistry<F> {
    pub fn new() -> Self {
        HandlerRegistry {
            handlers: vec![],
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HandlerRegistry {
            handlers: Vec::with_capacity(capacity),
        }
    }

    /// Append a callback to the end of the list.
    pub fn add(&mut self, handler: Rc<F>) -> HandlerId {
        let id = HandlerId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
        self.handlers.push((id, handler));
        tracing::trace!(%id, len = self.handlers.len(), "handler added");
        id
    }

    /// Remove the callback registered under `id`. Returns false if there was none.
    pub fn remove(&mut self, id: HandlerId) -> bool {
        match self.handlers.iter().position(|(hid, _)| *hid == id) {
            Some(pos) => {
                self.handlers.remove(pos);
                tracing::trace!(%id, len = self.handlers.len(), "handler removed");
                true
            }
            None => false,
        }
    }

    /// Remove the first entry that points to the same callback as `handler`.
    pub fn remove_callback(&mut self, handler: &Rc<F>) -> bool {
        match self.handlers.iter().position(|(_, h)| Rc::ptr_eq(h, handler)) {
            Some(pos) => {
                let (id, _) = self.handlers.remove(pos);
                tracing::trace!(%id, len = self.handlers.len(), "handler removed");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: HandlerId) -> bool {
        self.handlers.iter().any(|(hid, _)| *hid == id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Iterate over the callbacks and their ids in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (HandlerId, &F)> {
        self.handlers.iter().map(|(id, h)| (*id, h.as_ref()))
    }
}

impl<F: ?Sized> Default for HandlerRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> fmt::Debug for HandlerRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("ids", &self.handlers.iter().map(|(id, _)| id).collect::<Vec<_>>())
            .finish()
    }
}

/// Subscription management shared by every event handler type.
///
/// Implementors only expose their registry; adding, removing and counting
/// callbacks come for free.
pub trait Handlers {
    type Callback: ?Sized;

    fn registry(&self) -> &HandlerRegistry<Self::Callback>;

    fn registry_mut(&mut self) -> &mut HandlerRegistry<Self::Callback>;

    /// Add a callback the caller keeps a handle to, so it can later be passed to
    /// [`remove_shared`](Handlers::remove_shared).
    fn add_shared(&mut self, handler: Rc<Self::Callback>) -> HandlerId {
        self.registry_mut().add(handler)
    }

    /// Remove the callback added under `id`. Does nothing if it is not present.
    fn remove(&mut self, id: HandlerId) -> bool {
        self.registry_mut().remove(id)
    }

    /// Remove a single instance of `handler`, if it is present.
    fn remove_shared(&mut self, handler: &Rc<Self::Callback>) -> bool {
        self.registry_mut().remove_callback(handler)
    }

    fn contains(&self, id: HandlerId) -> bool {
        self.registry().contains(id)
    }

    fn len(&self) -> usize {
        self.registry().len()
    }

    fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    fn clear(&mut self) {
        self.registry_mut().clear()
    }
}
