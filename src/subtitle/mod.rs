//! SRT subtitle merging.
//!
//! This module parses SRT files, drops blocks without meaningful text,
//! merges blocks separated by short gaps and writes the result back as SRT.

pub mod command;
mod filter;
mod merger;
mod parser;
mod timestamp;
mod writer;

pub use command::{MergeSettings, ProcessedBlocks, process_blocks};
pub use filter::{clean_char_count, filter_single_char_blocks, has_meaningful_text};
pub use merger::{MergeOptions, merge_adjacent};
pub use parser::{Block, ParseError, parse_srt, parse_srt_file};
pub use timestamp::Timestamp;
pub use writer::{render_srt, write_srt_file};
