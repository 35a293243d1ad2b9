mod error;
mod interpreter;
mod value;

pub use error::Error;
pub use interpreter::evaluate;
pub use value::Value;
