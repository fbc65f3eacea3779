use std::sync::Arc;

use log::{debug, info};

use crate::models::{DocumentRecord, RecognizedSide, Side};
use crate::processing::{assemble, ExtractionObserver, LogObserver, OcrEngine};
use crate::utils::ReaderError;

/// Runs OCR on both card sides and assembles the record.
pub struct DocumentReader {
    engine: Arc<dyn OcrEngine>,
    observer: Arc<dyn ExtractionObserver>,
}

impl DocumentReader {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        DocumentReader {
            engine,
            observer: Arc::new(LogObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ExtractionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// OCR both sides concurrently and merge them.
    ///
    /// The first engine fault wins: the other side's result is dropped and no
    /// partial record is returned. Missing fields are never an error.
    pub async fn extract_document(
        &self,
        front_image: Vec<u8>,
        back_image: Vec<u8>,
    ) -> Result<DocumentRecord, ReaderError> {
        let (front, back) = tokio::try_join!(
            self.recognize(Side::Front, front_image),
            self.recognize(Side::Back, back_image),
        )?;

        let record = assemble(&front, &back, self.observer.as_ref());
        info!(
            "extracted document (number found: {}, name found: {})",
            record.document_number.is_some(),
            record.name.is_some()
        );
        Ok(record)
    }

    /// OCR one side on the blocking pool and run the side-local extractors.
    pub async fn recognize(&self, side: Side, image: Vec<u8>) -> Result<RecognizedSide, ReaderError> {
        let engine = Arc::clone(&self.engine);
        debug!("recognizing {} side ({} bytes)", side, image.len());

        let text = tokio::task::spawn_blocking(move || engine.recognize(&image))
            .await
            .map_err(|e| ReaderError::processing(side, format!("OCR task aborted: {}", e)))?
            .map_err(|e| ReaderError::processing(side, e))?;

        Ok(RecognizedSide::from_ocr_text(&text))
    }
}
