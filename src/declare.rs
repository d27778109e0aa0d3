use crate::{registry, Arguments, Result, Scalar, Variant};

/// A type declaring a closed set of named, valued variants.
///
/// Usually implemented through [`enumeration!`](crate::enumeration).
pub trait Enum: Sized + 'static {
    type Value: Scalar;

    /// Name of the declaring type, used in diagnostics
    const NAME: &'static str;

    /// The `(name, value)` pairs in declaration order.
    ///
    /// Called once per process, the first time any variant of the type is looked up.
    fn declare() -> Vec<(&'static str, Self::Value)>;

    fn value_of(name: &str) -> Result<Self::Value> {
        registry::value_for::<Self>(name)
    }

    fn name_of(value: &Self::Value) -> Result<&'static str> {
        registry::name_for::<Self>(value)
    }

    /// Constructs the variant called `name`, see [`Variant::create`]
    fn create(name: &str, arguments: impl Into<Arguments>) -> Result<Variant<Self>> {
        Variant::create(name, arguments)
    }
}
