//! C#-style typed events.
//!
//! A producer owns an [`EventHandler`] (or [`NoArgsEventHandler`]) as a field,
//! consumers subscribe callbacks to it with `add`/`+=`, and the producer fires
//! it with `invoke`, which calls every callback in the order it was added.

pub mod error;
pub mod event;
pub mod event_args;
pub mod fallible;
pub mod registry;

mod test_setup;

pub use error::{Error, Result};
pub use event::{
    event_handler, new_args_event_handler, new_no_args_event_handler, Event, EventHandler,
    NoArgsEvent, NoArgsEventHandler,
};
pub use event_args::EventArgs;
pub use fallible::{TryEvent, TryEventHandler};
pub use registry::{HandlerId, HandlerRegistry, Handlers};
