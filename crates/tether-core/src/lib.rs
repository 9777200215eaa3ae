#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod model;
pub use model::{Instance, Model};

mod record;
pub use record::Record;

mod value;
pub use value::Value;

/// A Result type alias that uses Tether's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
