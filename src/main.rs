// Aadhar card field extraction from the command line.
// Reads the two card sides, prints the extracted record as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use aadhar_ocr::models::RecordValidationResult;
use aadhar_ocr::processing::ocr::{DEFAULT_CHAR_WHITELIST, DEFAULT_LANGUAGE};
use aadhar_ocr::processing::{ImageProcessor, OcrSettings, TesseractEngine};
use aadhar_ocr::validation::RecordValidator;
use aadhar_ocr::{DocumentReader, DocumentRecord, ReaderError};
use clap::Parser;
use log::{error, info};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "aadhar-ocr", version, about = "Extract Aadhar card fields from front and back scans")]
struct Args {
    /// Image of the card front (JPEG or PNG)
    #[arg(long)]
    front: PathBuf,

    /// Image of the card back (JPEG or PNG)
    #[arg(long)]
    back: PathBuf,

    /// Tesseract language
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Characters tesseract is allowed to emit
    #[arg(long, default_value = DEFAULT_CHAR_WHITELIST)]
    whitelist: String,

    /// Directory with tesseract traineddata (defaults to TESSDATA_PREFIX)
    #[arg(long)]
    tessdata: Option<String>,

    /// Feed the raw images to tesseract without grayscale/contrast preprocessing
    #[arg(long)]
    no_preprocess: bool,

    /// Attach a checksum/date/postal code report to the output
    #[arg(long)]
    validate: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    record: &'a DocumentRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<RecordValidationResult>,
}

#[derive(Serialize)]
struct Failure {
    error: &'static str,
    details: String,
}

fn read_upload(path: &Path) -> Result<Vec<u8>, ReaderError> {
    let bytes = std::fs::read(path)?;
    ImageProcessor::validate_upload(&bytes)?;
    Ok(bytes)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> ExitCode {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn fail(err: ReaderError, pretty: bool) -> ExitCode {
    error!("{}", err);
    let error = match err {
        ReaderError::InvalidUpload(_) | ReaderError::Io(_) => "Invalid upload",
        ReaderError::Engine(_) | ReaderError::Processing { .. } => "Processing failed",
    };
    print_json(
        &Failure {
            error,
            details: err.details(),
        },
        pretty,
    );
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (front, back) = match (read_upload(&args.front), read_upload(&args.back)) {
        (Ok(front), Ok(back)) => (front, back),
        (Err(err), _) | (_, Err(err)) => return fail(err, args.pretty),
    };

    let settings = OcrSettings {
        language: args.lang,
        char_whitelist: args.whitelist,
        tessdata_path: args.tessdata,
        preprocess: !args.no_preprocess,
    };
    info!(
        "Reading {:?} and {:?} with tesseract ({})",
        args.front, args.back, settings.language
    );

    let reader = DocumentReader::new(Arc::new(TesseractEngine::new(settings)));
    match reader.extract_document(front, back).await {
        Ok(record) => {
            let validation = args.validate.then(|| RecordValidator::validate(&record));
            print_json(
                &Output {
                    record: &record,
                    validation,
                },
                args.pretty,
            )
        }
        Err(err) => fail(err, args.pretty),
    }
}
