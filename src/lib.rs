mod scalar;
pub use scalar::Scalar;

mod error;
pub use error::{Error, Result};

mod argument;
pub use argument::{Argument, Arguments};

mod entry;
pub use entry::Entry;

pub mod registry;

mod declare;
pub use declare::Enum;

mod variant;
pub use variant::Variant;

mod macros;
