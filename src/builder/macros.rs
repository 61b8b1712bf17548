//! Macros for ergonomic state declarations.

/// Declare a fieldless enum ready to be used as a machine state.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug` and gains a
/// `name()` method, an `ALL` constant listing every variant in declaration
/// order, and a `Display` impl printing the variant name.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum Route {
///         Entry,
///         Authentication,
///         Main,
///     }
/// }
///
/// assert_eq!(Route::Authentication.name(), "Authentication");
/// assert_eq!(Route::ALL.len(), 3);
/// assert_eq!(Route::Main.to_string(), "Main");
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

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Variant name as written in the declaration.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
