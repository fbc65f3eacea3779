pub mod document_reader;
pub mod models;
pub mod processing;
pub mod utils;
pub mod validation;

pub use document_reader::DocumentReader;
pub use models::{DocumentRecord, RecognizedSide, Side};
pub use utils::ReaderError;
