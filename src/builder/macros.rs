//! Macros for ergonomic machine construction.

/// Declare an enum of event identifiers usable with `Machine::trigger`.
///
/// Every variant needs an explicit discriminant; it becomes the
/// [`EventId`](crate::core::EventId) value.
///
/// # Example
///
/// ```
/// use tickfsm::core::EventId;
/// use tickfsm::event_ids;
///
/// event_ids! {
///     pub enum DoorEvent {
///         Open = 1,
///         Close = 2,
///     }
/// }
///
/// assert_eq!(EventId::from(DoorEvent::Close), EventId(2));
/// ```
#[macro_export]
macro_rules! event_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value
            ),*
        }

        impl ::core::convert::From<$name> for $crate::core::EventId {
            fn from(event: $name) -> Self {
                $crate::core::EventId(event as i32)
            }
        }
    };
}
