/// Declares a type with a closed set of named, valued variants.
///
/// Generates a unit marker type implementing [`Enum`](crate::Enum), and one associated
/// constructor per variant taking the call arguments of that instance.
///
/// ```
/// use variants::{enumeration, Enum};
///
/// enumeration! {
///     pub struct Level: u8 {
///         LOW = 1,
///         HIGH = 2,
///     }
/// }
///
/// let high = Level::HIGH(["loud"]);
/// assert_eq!(*high.value(), 2);
/// assert!(high.is(&Level::HIGH(())));
/// assert_eq!(Level::name_of(&1), Ok("LOW"));
/// ```
///
/// The marker type already derives `Clone`, `Copy`, `Debug`, `PartialEq`, `Eq` and `Hash`.
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident: $value:ty {
            $($variant:ident = $val:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis struct $ty;

        impl $crate::Enum for $ty {
            type Value = $value;

            const NAME: &'static str = stringify!($ty);

            fn declare() -> ::std::vec::Vec<(&'static str, $value)> {
                ::std::vec![$((stringify!($variant), $val)),*]
            }
        }

        #[allow(non_snake_case, dead_code)]
        impl $ty {
            $(
                #[doc = concat!("Constructs `", stringify!($ty), "::", stringify!($variant), "` with the given arguments.")]
                ///
                /// # Panics
                ///
                /// If the declaration of this type repeats a name or a value.
                $vis fn $variant(
                    arguments: impl ::core::convert::Into<$crate::Arguments>,
                ) -> $crate::Variant<$ty> {
                    $crate::Variant::declared(stringify!($variant), arguments)
                }
            )*
        }
    };
}
