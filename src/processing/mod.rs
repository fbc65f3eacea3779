pub mod assembler;
pub mod events;
pub mod extractors;
pub mod image;
pub mod ocr;
pub mod text;

pub use assembler::assemble;
pub use events::{ExtractionEvent, ExtractionObserver, LogObserver, NoopObserver, Source};
pub use self::image::ImageProcessor;
pub use ocr::{OcrEngine, OcrSettings, TesseractEngine};
pub use text::normalize;
