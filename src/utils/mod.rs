pub mod error;

pub use error::ReaderError;
