//! Macros for declaring state and trigger enums.

/// Declare a fieldless enum ready to be used as a state or trigger.
///
/// Derives `Clone, Copy, PartialEq, Eq, Hash, Debug`, makes the first
/// variant the `Default`, and adds `name()` plus a `Display` impl.
///
/// # Example
///
/// ```
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum DoorState {
///         Closed,
///         Open,
///         Locked,
///     }
/// }
///
/// assert_eq!(DoorState::default(), DoorState::Closed);
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert_eq!(DoorState::Open.to_string(), "Open");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident
            $(,
                $(#[$variant_meta:meta])*
                $variant:ident
            )* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(#[$first_meta])*
            $first,
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    Self::$first => stringify!($first),
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
