mod error;
mod parser;
mod scan;

pub use error::{ParseError, ScanError};
pub use parser::parse;
pub use scan::scan;
