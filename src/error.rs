use crate::registry::HandlerId;

pub type Result<T, E> = std::result::Result<T, Error<E>>;

/// Error returned by [`TryEventHandler::try_invoke`](crate::TryEventHandler::try_invoke).
///
/// Wraps the error of the first callback that failed together with the id
/// it was registered under. Callbacks after it were not run.
#[derive(Debug, thiserror::Error)]
pub enum Error<E: std::error::Error + 'static> {
    #[error("Event handler {id} failed: {source}")]
    Handler {
        id: HandlerId,
        #[source]
        source: E,
    },
}

impl<E: std::error::Error + 'static> Error<E> {
    /// Id of the callback that failed.
    pub fn id(&self) -> HandlerId {
        match self {
            Error::Handler { id, .. } => *id,
        }
    }

    pub fn into_source(self) -> E {
        match self {
            Error::Handler { source, .. } => source,
        }
    }
}
