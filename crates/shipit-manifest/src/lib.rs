mod error;
mod reader;
mod writer;

pub use error::ManifestError;
pub use reader::{read_document, read_package, read_version};
pub use writer::write_version;
