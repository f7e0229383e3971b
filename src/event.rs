use crate::event_args::EventArgs;
use crate::registry::{HandlerId, HandlerRegistry, Handlers};
use std::any::Any;
use std::fmt;
use std::ops::{AddAssign, SubAssign};
use std::rc::Rc;

/// Callback shape for events that carry an argument payload.
pub type Event<'a, T> = dyn Fn(&dyn Any, &T) + 'a;

/// Callback shape for events without a payload.
pub type NoArgsEvent<'a> = dyn Fn(&dyn Any) + 'a;

/// An event whose callbacks receive the sender and an argument payload.
///
/// ```rust
/// use csevents::EventHandler;
/// use std::any::Any;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(vec![]);
/// let mut on_changed: EventHandler<i32> = EventHandler::new();
/// on_changed += |_sender: &dyn Any, value: &i32| log.borrow_mut().push(*value);
/// on_changed.invoke(&"counter", &42);
/// assert_eq!(*log.borrow(), vec![42]);
/// ```
pub struct EventHandler<'a, T: EventArgs> {
    handlers: HandlerRegistry<Event<'a, T>>,
}

impl<'a, T: EventArgs> EventHandler<'a, T> {
    pub fn new() -> Self {
        EventHandler {
            handlers: HandlerRegistry::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        EventHandler {
            handlers: HandlerRegistry::with_capacity(capacity),
        }
    }

    /// Subscribe a callback. The returned id removes it again.
    pub fn add(&mut self, handler: impl Fn(&dyn Any, &T) + 'a) -> HandlerId {
        self.handlers.add(Rc::new(handler))
    }

    /// Fires every callback in the order they were added.
    ///
    /// A panicking callback unwinds out of this call and the remaining
    /// callbacks are not run.
    pub fn invoke(&self, sender: &dyn Any, args: &T) {
        tracing::trace!(handlers = self.handlers.len(), "invoking event");
        for (_, f) in self.handlers.iter() {
            f(sender, args);
        }
    }
}

impl<'a, T: EventArgs> Handlers for EventHandler<'a, T> {
    type Callback = Event<'a, T>;

    fn registry(&self) -> &HandlerRegistry<Self::Callback> {
        &self.handlers
    }

    fn registry_mut(&mut self) -> &mut HandlerRegistry<Self::Callback> {
        &mut self.handlers
    }
}

impl<'a, T: EventArgs> Default for EventHandler<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: EventArgs> fmt::Debug for EventHandler<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("handlers", &self.handlers)
            .finish()
    }
}

impl<'a, T, F> AddAssign<F> for EventHandler<'a, T>
where
    T: EventArgs,
    F: Fn(&dyn Any, &T) + 'a,
{
    fn add_assign(&mut self, handler: F) {
        self.add(handler);
    }
}

impl<'a, T: EventArgs> SubAssign<HandlerId> for EventHandler<'a, T> {
    fn sub_assign(&mut self, id: HandlerId) {
        self.handlers.remove(id);
    }
}

impl<'a, T: EventArgs> SubAssign<&Rc<Event<'a, T>>> for EventHandler<'a, T> {
    fn sub_assign(&mut self, handler: &Rc<Event<'a, T>>) {
        self.handlers.remove_callback(handler);
    }
}

/// An event whose callbacks only receive the sender.
pub struct NoArgsEventHandler<'a> {
    handlers: HandlerRegistry<NoArgsEvent<'a>>,
}

impl<'a> NoArgsEventHandler<'a> {
    pub fn new() -> Self {
        NoArgsEventHandler {
            handlers: HandlerRegistry::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NoArgsEventHandler {
            handlers: HandlerRegistry::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, handler: impl Fn(&dyn Any) + 'a) -> HandlerId {
        self.handlers.add(Rc::new(handler))
    }

    /// Fires every callback in the order they were added.
    pub fn invoke(&self, sender: &dyn Any) {
        tracing::trace!(handlers = self.handlers.len(), "invoking event");
        for (_, f) in self.handlers.iter() {
            f(sender);
        }
    }
}

impl<'a> Handlers for NoArgsEventHandler<'a> {
    type Callback = NoArgsEvent<'a>;

    fn registry(&self) -> &HandlerRegistry<Self::Callback> {
        &self.handlers
    }

    fn registry_mut(&mut self) -> &mut HandlerRegistry<Self::Callback> {
        &mut self.handlers
    }
}

impl<'a> Default for NoArgsEventHandler<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> fmt::Debug for NoArgsEventHandler<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NoArgsEventHandler")
            .field("handlers", &self.handlers)
            .finish()
    }
}

impl<'a, F> AddAssign<F> for NoArgsEventHandler<'a>
where
    F: Fn(&dyn Any) + 'a,
{
    fn add_assign(&mut self, handler: F) {
        self.add(handler);
    }
}

impl<'a> SubAssign<HandlerId> for NoArgsEventHandler<'a> {
    fn sub_assign(&mut self, id: HandlerId) {
        self.handlers.remove(id);
    }
}

impl<'a> SubAssign<&Rc<NoArgsEvent<'a>>> for NoArgsEventHandler<'a> {
    fn sub_assign(&mut self, handler: &Rc<NoArgsEvent<'a>>) {
        self.handlers.remove_callback(handler);
    }
}

/// Create an empty handler of whichever kind the call site expects.
///
/// ```rust
/// use csevents::{event_handler, EventHandler, NoArgsEventHandler};
///
/// let on_click: NoArgsEventHandler = event_handler();
/// let on_resize: EventHandler<u32> = event_handler();
/// # let _ = (on_click, on_resize);
/// ```
pub fn event_handler<H: Default + Handlers>() -> H {
    H::default()
}

pub fn new_args_event_handler<'a, T: EventArgs>() -> EventHandler<'a, T> {
    EventHandler::new()
}

pub fn new_no_args_event_handler<'a>() -> NoArgsEventHandler<'a> {
    NoArgsEventHandler::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    struct Button;

    #[test]
    fn invokes_in_order_with_sender_and_args() {
        let calls = RefCell::new(vec![]);
        let mut handler: EventHandler<String> = EventHandler::new();
        for n in 0..4 {
            let calls = &calls;
            handler.add(move |sender, args: &String| {
                let sender = sender.downcast_ref::<&'static str>().copied();
                calls.borrow_mut().push((n, sender, args.clone()));
            });
        }
        handler.invoke(&"source", &"payload".to_owned());
        drop(handler);

        let calls = calls.into_inner();
        assert_eq!(calls.len(), 4);
        for (i, (n, sender, args)) in calls.into_iter().enumerate() {
            assert_eq!(n, i);
            assert_eq!(sender, Some("source"));
            assert_eq!(args, "payload");
        }
    }

    #[test]
    fn empty_invoke_is_noop() {
        let handler: EventHandler<i32> = EventHandler::default();
        handler.invoke(&Button, &1);
        let handler = NoArgsEventHandler::default();
        handler.invoke(&Button);
        assert!(handler.is_empty());
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let hits = Cell::new(0);
        let mut other: NoArgsEventHandler = NoArgsEventHandler::new();
        let foreign = other.add(|_| {});

        let mut handler = NoArgsEventHandler::new();
        handler += |_: &dyn Any| hits.set(hits.get() + 1);
        handler.add(|_| {});
        let stale = handler.add(|_| {});
        assert!(!handler.remove(foreign));
        assert!(handler.remove(stale));
        assert!(!handler.remove(stale));
        handler -= stale;
        assert_eq!(handler.len(), 2);

        handler.invoke(&Button);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn shared_callback_removed_once() {
        let hits = Cell::new(0);
        let mut handler: EventHandler<u8> = EventHandler::new();
        let shared: Rc<Event<u8>> = Rc::new(|_: &dyn Any, n: &u8| hits.set(hits.get() + *n as u32));
        handler.add_shared(shared.clone());
        handler.add_shared(shared.clone());

        handler -= &shared;
        assert_eq!(handler.len(), 1);
        handler.invoke(&Button, &1);
        assert_eq!(hits.get(), 1);

        assert!(handler.remove_shared(&shared));
        assert!(!handler.remove_shared(&shared));
        handler.invoke(&Button, &1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn panicking_handler_stops_fanout() {
        let hits = RefCell::new(vec![]);
        let mut handler = NoArgsEventHandler::new();
        handler += |_: &dyn Any| hits.borrow_mut().push(1);
        handler += |_: &dyn Any| panic!("second handler failed");
        handler += |_: &dyn Any| hits.borrow_mut().push(3);

        let result = catch_unwind(AssertUnwindSafe(|| handler.invoke(&Button)));
        assert!(result.is_err());
        assert_eq!(*hits.borrow(), vec![1]);
    }

    #[test]
    fn factory_infers_variant() {
        let mut args: EventHandler<i64> = event_handler();
        let mut no_args: NoArgsEventHandler = event_handler();
        args.add(|_, _| {});
        no_args.add(|_| {});
        assert_eq!(args.len(), 1);
        assert_eq!(no_args.len(), 1);

        let named = new_args_event_handler::<bool>();
        assert!(named.is_empty());
        assert!(new_no_args_event_handler().is_empty());
    }
}
