//! Utility modules

pub mod input_file;
pub mod text;

pub use input_file::{check_input_file, InputFileError};
pub use text::{char_len, char_to_byte, leading_whitespace_len, slice_chars, split_at_char};
