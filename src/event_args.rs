use std::borrow::Cow;
use std::rc::Rc;

/// Marker for values that can be passed as the payload of an [`EventHandler`](crate::EventHandler).
///
/// Implement it for your own argument types with an empty impl:
///
/// ```rust
/// use csevents::EventArgs;
///
/// struct ValueChanged {
///     old: i32,
///     new: i32,
/// }
///
/// impl EventArgs for ValueChanged {}
/// ```
pub trait EventArgs {}

macro_rules! impl_event_args {
    ($($ty:ty),* $(,)?) => {
        $(impl EventArgs for $ty {})*
    };
}

impl_event_args!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl EventArgs for &str {}

impl EventArgs for Cow<'_, str> {}

impl<T: EventArgs> EventArgs for Option<T> {}

impl<T: EventArgs> EventArgs for Vec<T> {}

impl<T: EventArgs + ?Sized> EventArgs for Box<T> {}

impl<T: EventArgs + ?Sized> EventArgs for Rc<T> {}
