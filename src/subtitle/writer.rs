//! SRT serialization.
//!
//! Renders blocks back into SRT text and writes it to disk.

use std::fs;
use std::path::Path;

use super::Block;
use crate::Error;
use crate::constants::srt::ARROW;

/// Render blocks as SRT text.
///
/// Every block is emitted as an index line (empty when the block has no
/// index), the timeline, its body lines (a single empty line when the body
/// is empty) and a blank separator. Trailing whitespace of the whole
/// document is trimmed and exactly one newline is appended.
pub fn render_srt(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len() * 4);

    for block in blocks {
        lines.push(block.index.map(|i| i.to_string()).unwrap_or_default());
        lines.push(format!("{} {ARROW} {}", block.start, block.end));
        if block.text.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(block.text.iter().cloned());
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

/// Render blocks and write them to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or the file cannot be written.
pub fn write_srt_file(path: &Path, blocks: &[Block]) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, render_srt(blocks)).map_err(|e| Error::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
