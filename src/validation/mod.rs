pub mod checksum;
pub mod record;

pub use checksum::verhoeff_is_valid;
pub use record::RecordValidator;
