use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures of variant lookup and registry construction.
///
/// `UnknownName` and `UnknownValue` are input errors of a single lookup. The `Duplicate*` errors
/// are defects in the declaration of a type; once one is hit it is what every lookup on that type
/// reports for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("`{name}` is not a variant of `{ty}`")]
    UnknownName { ty: &'static str, name: String },

    #[error("no variant of `{ty}` has the value `{value}`")]
    UnknownValue { ty: &'static str, value: String },

    #[error("variants `{first}` and `{second}` of `{ty}` share the value `{value}`")]
    DuplicateValue {
        ty: &'static str,
        value: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("variant `{name}` of `{ty}` is declared more than once")]
    DuplicateName { ty: &'static str, name: &'static str },
}

impl Error {
    /// Whether this error stems from a broken declaration rather than a bad lookup
    pub fn is_definition_error(&self) -> bool {
        matches!(self, Error::DuplicateValue { .. } | Error::DuplicateName { .. })
    }
}
