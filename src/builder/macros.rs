//! Macros for declaring state and event enums.

/// Generate a State trait implementation for a simple enum.
///
/// The enum gets `Clone, Copy, PartialEq, Eq, Hash, Debug` derived, and each
/// variant's name is its identifier. Further derives can be added as
/// attributes.
///
/// # Example
///
/// ```
/// use genfsm::state_enum;
/// use genfsm::core::State;
///
/// state_enum! {
///     pub enum PaymentState {
///         Pending,
///         Authorized,
///         Captured,
///         Refunded,
///     }
/// }
///
/// assert_eq!(PaymentState::Captured.name(), "Captured");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an Event trait implementation.
///
/// Two forms are accepted:
///
/// - a plain enumeration, keyed by its own value:
///   `enum LightEvent { Timer, Emergency }`
/// - a tagged union with payloads, keyed by a generated fieldless kind enum
///   named after `=>`: `enum DoorEvent => DoorEventKind { ... }`
///
/// Plain enumerations get `Clone, Copy, PartialEq, Eq, Hash, Debug`
/// derived. Tagged unions get `Debug` only; add further derives with
/// attributes. The kind enum always derives `Clone, Copy, PartialEq, Eq,
/// Hash, Debug`.
///
/// # Example
///
/// ```
/// use genfsm::event_enum;
/// use genfsm::core::Event;
///
/// event_enum! {
///     pub enum LightEvent {
///         Timer,
///         Emergency,
///     }
/// }
///
/// event_enum! {
///     #[derive(Clone)]
///     pub enum DoorEvent => DoorEventKind {
///         Unlock { code: String },
///         Lock,
///         ForceOpen(bool),
///     }
/// }
///
/// assert_eq!(LightEvent::Timer.key(), LightEvent::Timer);
/// assert_eq!(
///     DoorEvent::Unlock { code: "1234".into() }.key(),
///     DoorEventKind::Unlock
/// );
/// assert_eq!(DoorEvent::ForceOpen(true).key(), DoorEventKind::ForceOpen);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $({ $($field:ident : $field_ty:ty),* $(,)? })?
                $(( $($tuple_ty:ty),* $(,)? ))?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $({ $($field : $field_ty),* })?
                $(( $($tuple_ty),* ))?
            ),*
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Event for $name {
            type Key = $kind;

            fn key(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            type Key = Self;

            fn key(&self) -> Self {
                *self
            }
        }
    };
}
