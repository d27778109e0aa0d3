use std::fmt;
use std::hash::Hash;

/// A value a variant can be declared with.
///
/// Values are looked up in both directions, so they have to hash and compare. `Display` is only
/// used when reporting unknown or duplicated values.
pub trait Scalar: PartialEq + Eq + fmt::Debug + Clone + Hash + fmt::Display + Send + Sync + 'static {}

impl Scalar for &'static str {}
impl Scalar for String {}
impl Scalar for bool {}
impl Scalar for char {}
impl Scalar for usize {}
impl Scalar for u64 {}
impl Scalar for u32 {}
impl Scalar for u16 {}
impl Scalar for u8 {}
impl Scalar for isize {}
impl Scalar for i64 {}
impl Scalar for i32 {}
impl Scalar for i16 {}
impl Scalar for i8 {}
