use crate::{registry, Arguments, Enum, Result};
use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// One occurrence of a variant of `E`, together with the arguments it was constructed with.
///
/// Instances are never interned. Two calls with the same name give two separate values that are
/// compared with [`Variant::is`] or [`Variant::is_exactly`].
pub struct Variant<E: Enum> {
    name: &'static str,
    value: E::Value,
    arguments: Arguments,
    declaring: PhantomData<fn() -> E>,
}

impl<E: Enum> Variant<E> {
    /// Resolves `name` in the registry of `E` and attaches `arguments` in call order.
    ///
    /// Only names declared by `E` itself are accepted.
    pub fn create(name: &str, arguments: impl Into<Arguments>) -> Result<Self> {
        let (name, value) = registry::entry::<E>()?.variant(name)?;
        let arguments = arguments.into();

        trace!(ty = E::NAME, name, arguments = arguments.len(), "constructing variant");

        Ok(Self {
            name,
            value: value.clone(),
            arguments,
            declaring: PhantomData,
        })
    }

    /// Constructor behind the functions generated by `enumeration!`.
    ///
    /// # Panics
    ///
    /// If the declaration of `E` is invalid or does not contain `name`.
    #[doc(hidden)]
    pub fn declared(name: &str, arguments: impl Into<Arguments>) -> Self {
        match Self::create(name, arguments) {
            Ok(variant) => variant,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &E::Value {
        &self.value
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn into_arguments(self) -> Arguments {
        self.arguments
    }

    pub fn declaring_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    pub fn type_name(&self) -> &'static str {
        E::NAME
    }

    /// Same declaring type and same variant, ignoring arguments.
    ///
    /// Variants of different declaring types are never the same variant, even if they share a
    /// name.
    pub fn is<F: Enum>(&self, other: &Variant<F>) -> bool {
        self.declaring_type() == other.declaring_type() && self.name == other.name
    }

    /// Same variant as `other` with equal arguments in equal order
    pub fn is_exactly<F: Enum>(&self, other: &Variant<F>) -> bool {
        self.is(other) && self.arguments == other.arguments
    }
}

impl<E: Enum> Clone for Variant<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            value: self.value.clone(),
            arguments: self.arguments.clone(),
            declaring: PhantomData,
        }
    }
}

impl<E: Enum> PartialEq for Variant<E> {
    fn eq(&self, other: &Self) -> bool {
        self.is_exactly(other)
    }
}

impl<E: Enum> fmt::Debug for Variant<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Variant")
            .field("type", &E::NAME)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("arguments", &self.arguments.as_slice())
            .finish()
    }
}

impl<E: Enum> fmt::Display for Variant<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.arguments.is_empty() {
            write!(f, "{}::{}", E::NAME, self.name)
        } else {
            write!(f, "{}::{}({})", E::NAME, self.name, self.arguments)
        }
    }
}
