use crate::error::{Error, Result};
use crate::event_args::EventArgs;
use crate::registry::{HandlerId, HandlerRegistry, Handlers};
use std::any::Any;
use std::fmt;
use std::ops::{AddAssign, SubAssign};
use std::rc::Rc;

/// Callback shape for events whose callbacks can fail.
pub type TryEvent<'a, T, E> = dyn Fn(&dyn Any, &T) -> std::result::Result<(), E> + 'a;

/// An event whose callbacks return a `Result`.
///
/// [`try_invoke`](TryEventHandler::try_invoke) stops at the first callback that
/// returns an error and hands that error back to the caller.
pub struct TryEventHandler<'a, T: EventArgs, E: std::error::Error + 'static> {
    handlers: HandlerRegistry<TryEvent<'a, T, E>>,
}

impl<'a, T: EventArgs, E: std::error::Error + 'static> TryEventHandler<'a, T, E> {
    pub fn new() -> Self {
        TryEventHandler {
            handlers: HandlerRegistry::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TryEventHandler {
            handlers: HandlerRegistry::with_capacity(capacity),
        }
    }

    pub fn add(
        &mut self,
        handler: impl Fn(&dyn Any, &T) -> std::result::Result<(), E> + 'a,
    ) -> HandlerId {
        self.handlers.add(Rc::new(handler))
    }

    /// Fires the callbacks in the order they were added, stopping at the first failure.
    pub fn try_invoke(&self, sender: &dyn Any, args: &T) -> Result<(), E> {
        tracing::trace!(handlers = self.handlers.len(), "invoking fallible event");
        for (id, f) in self.handlers.iter() {
            if let Err(source) = f(sender, args) {
                tracing::debug!(%id, error = %source, "event handler failed");
                return Err(Error::Handler { id, source });
            }
        }
        Ok(())
    }
}

impl<'a, T: EventArgs, E: std::error::Error + 'static> Handlers for TryEventHandler<'a, T, E> {
    type Callback = TryEvent<'a, T, E>;

    fn registry(&self) -> &HandlerRegistry<Self::Callback> {
        &self.handlers
    }

    fn registry_mut(&mut self) -> &mut HandlerRegistry<Self::Callback> {
        &mut self.handlers
    }
}

impl<'a, T: EventArgs, E: std::error::Error + 'static> Default for TryEventHandler<'a, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: EventArgs, E: std::error::Error + 'static> fmt::Debug for TryEventHandler<'a, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TryEventHandler")
            .field("handlers", &self.handlers)
            .finish()
    }
}

impl<'a, T, E, F> AddAssign<F> for TryEventHandler<'a, T, E>
where
    T: EventArgs,
    E: std::error::Error + 'static,
    F: Fn(&dyn Any, &T) -> std::result::Result<(), E> + 'a,
{
    fn add_assign(&mut self, handler: F) {
        self.add(handler);
    }
}

impl<'a, T: EventArgs, E: std::error::Error + 'static> SubAssign<HandlerId>
    for TryEventHandler<'a, T, E>
{
    fn sub_assign(&mut self, id: HandlerId) {
        self.handlers.remove(id);
    }
}
