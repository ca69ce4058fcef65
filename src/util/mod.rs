//! Utility modules

pub mod file_validation;
pub mod fs;

pub use file_validation::{
    filename_for_display, validate_file_for_opening, FileOpenError, MAX_FILE_SIZE,
};
pub use fs::write_file;
