use crate::{Error, Result, Scalar};
use itertools::Itertools;
use owo_colors::OwoColorize;
use rustc_hash::FxHashMap;
use std::fmt;

/// The bidirectional name/value map of one declaring type.
///
/// Entries are built from the declaration list exactly once and never change afterwards.
#[derive(Debug, Clone)]
pub struct Entry<V: Scalar> {
    ty: &'static str,
    // declaration order
    variants: Vec<(&'static str, V)>,
    by_name: FxHashMap<&'static str, usize>,
    by_value: FxHashMap<V, usize>,
}

impl<V: Scalar> Entry<V> {
    /// Builds both directions of the map, rejecting repeated names and repeated values.
    pub(crate) fn build(ty: &'static str, declared: Vec<(&'static str, V)>) -> Result<Self> {
        let mut by_name: FxHashMap<&'static str, usize> =
            FxHashMap::with_capacity_and_hasher(declared.len(), Default::default());
        let mut by_value: FxHashMap<V, usize> =
            FxHashMap::with_capacity_and_hasher(declared.len(), Default::default());

        for (i, (name, value)) in declared.iter().enumerate() {
            if by_name.insert(*name, i).is_some() {
                return Err(Error::DuplicateName { ty, name: *name });
            }

            if let Some(first) = by_value.insert(value.clone(), i) {
                return Err(Error::DuplicateValue {
                    ty,
                    value: value.to_string(),
                    first: declared[first].0,
                    second: *name,
                });
            }
        }

        Ok(Self {
            ty,
            variants: declared,
            by_name,
            by_value,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.ty
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Resolves a name to its declared spelling and value
    pub fn variant(&self, name: &str) -> Result<(&'static str, &V)> {
        match self.by_name.get(name) {
            Some(&i) => {
                let (name, value) = &self.variants[i];
                Ok((*name, value))
            }
            None => Err(Error::UnknownName {
                ty: self.ty,
                name: name.to_string(),
            }),
        }
    }

    pub fn value_for(&self, name: &str) -> Result<&V> {
        self.variant(name).map(|(_, value)| value)
    }

    pub fn name_for(&self, value: &V) -> Result<&'static str> {
        match self.by_value.get(value) {
            Some(&i) => Ok(self.variants[i].0),
            None => Err(Error::UnknownValue {
                ty: self.ty,
                value: value.to_string(),
            }),
        }
    }
}

impl<V: Scalar> fmt::Display for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}\n  {}",
            "variants of".green(),
            self.ty,
            self.variants
                .iter()
                .format_with("\n  ", |(name, value), f| f(&format_args!(
                    "{} {} {}",
                    name,
                    "->".purple(),
                    value
                ))),
        )
    }
}
