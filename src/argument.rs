use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// A single call-time argument attached to a variant instance.
///
/// Arguments are opaque to the registry; they are only stored, handed back and compared by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Unit,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    List(Vec<Argument>),
}

/// The ordered arguments of one variant instance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments(SmallVec<[Argument; 4]>);

impl Arguments {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Used by `args!`, where an empty list still has to infer its element type.
    pub fn from_vec(arguments: Vec<Argument>) -> Self {
        Self(SmallVec::from_vec(arguments))
    }

    pub fn as_slice(&self) -> &[Argument] {
        self.0.as_slice()
    }

    pub fn into_vec(self) -> Vec<Argument> {
        self.0.into_vec()
    }
}

impl Deref for Arguments {
    type Target = [Argument];

    fn deref(&self) -> &[Argument] {
        self.0.as_slice()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Into<Argument>> FromIterator<T> for Arguments {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Arguments {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl<T: Into<Argument>, const N: usize> From<[T; N]> for Arguments {
    fn from(arguments: [T; N]) -> Self {
        IntoIterator::into_iter(arguments).collect()
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Arguments {
    fn from(arguments: Vec<T>) -> Self {
        arguments.into_iter().collect()
    }
}

/// Builds `Arguments` out of differently typed values.
///
/// ```
/// let arguments = variants::args!["a", 2, true];
/// assert_eq!(arguments.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        $crate::Arguments::from_vec(::std::vec![$($crate::Argument::from($arg)),*])
    };
}

macro_rules! impl_from {
    ($kind:ident as $as:ty: $($from:ty),*) => {
        $(
            impl From<$from> for Argument {
                fn from(v: $from) -> Argument {
                    Argument::$kind(v as $as)
                }
            }
        )*
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<()> for Argument {
    fn from(_: ()) -> Argument {
        Argument::Unit
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Argument {
        Argument::Bool(b)
    }
}

impl From<char> for Argument {
    fn from(c: char) -> Argument {
        Argument::Char(c)
    }
}

impl<'a> From<&'a str> for Argument {
    fn from(s: &'a str) -> Argument {
        Argument::Str(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Argument {
        Argument::Str(s)
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(list: Vec<T>) -> Argument {
        Argument::List(list.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(opt: Option<T>) -> Argument {
        opt.map(Into::into).unwrap_or(Argument::Unit)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Argument::Unit => f.write_str("()"),
            Argument::Bool(b) => write!(f, "{}", b),
            Argument::Int(n) => write!(f, "{}", n),
            Argument::UInt(n) => write!(f, "{}", n),
            Argument::Float(n) => write!(f, "{}", n),
            Argument::Char(c) => write!(f, "{:?}", c),
            Argument::Str(s) => write!(f, "{:?}", s),
            Argument::List(list) => write!(f, "[{}]", list.iter().format(", ")),
        }
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(", "))
    }
}
