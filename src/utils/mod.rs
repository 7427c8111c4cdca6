//! Shared helpers: text decoding and path handling.

pub mod encoding;
pub mod paths;

pub use encoding::{decode_text, read_text_file};
pub use paths::{base_name, extension_with_dot, is_hidden};
