//! I/O utilities.
//!
//! Input reading (file or stdin), chunk file output, and the Unicode
//! helpers the chunker uses to map character limits onto byte offsets.

pub mod reader;
pub mod unicode;

pub use reader::{
    FileReader, STDIN_SOURCE, chunk_file_name, is_chunk_file_name, read_file, read_input,
    write_file,
};
pub use unicode::{char_byte_offset, char_count, leading_whitespace_len, truncate_graphemes};
