//! Merge command execution.

use std::path::Path;

use tracing::debug;

use crate::Error;
use crate::config::OutputMode;
use crate::output::{MergeSummary, ResultType, emit_json_result};

use super::{
    Block, MergeOptions, filter_single_char_blocks, merge_adjacent, parse_srt_file,
    write_srt_file,
};

/// Resolved settings for one merge run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeSettings {
    /// Gap threshold and duration cap.
    pub merge: MergeOptions,
    /// Whether single-character blocks are dropped before merging.
    pub drop_single_char: bool,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            merge: MergeOptions::default(),
            drop_single_char: true,
        }
    }
}

/// Blocks left after filtering and merging, with per-stage counts.
#[derive(Debug, Clone)]
pub struct ProcessedBlocks {
    /// Surviving blocks in output order.
    pub blocks: Vec<Block>,
    /// Number of blocks the parser produced.
    pub parsed: usize,
    /// Number of blocks removed by the single-character filter.
    pub filtered: usize,
    /// Number of blocks absorbed into a predecessor.
    pub merged: usize,
}

/// Run the filter and merge stages over parsed blocks.
pub fn process_blocks(blocks: Vec<Block>, settings: &MergeSettings) -> ProcessedBlocks {
    let parsed = blocks.len();

    let blocks = if settings.drop_single_char {
        filter_single_char_blocks(blocks)
    } else {
        blocks
    };
    let filtered = parsed - blocks.len();

    let before_merge = blocks.len();
    let blocks = merge_adjacent(blocks, &settings.merge);
    let merged = before_merge - blocks.len();

    ProcessedBlocks {
        blocks,
        parsed,
        filtered,
        merged,
    }
}

/// Execute the merge command: read `input`, process it, write `output`.
///
/// The output file is only written once every stage has succeeded.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output
/// cannot be written.
pub fn execute(
    input: &Path,
    output: &Path,
    settings: &MergeSettings,
    output_mode: OutputMode,
) -> Result<MergeSummary, Error> {
    debug!(
        "Settings: threshold={:.3}s, max_duration={:.3}s, drop_single_char={}",
        settings.merge.threshold, settings.merge.max_duration, settings.drop_single_char
    );

    let blocks = parse_srt_file(input)?;
    debug!("Parsed {} blocks from {}", blocks.len(), input.display());

    let processed = process_blocks(blocks, settings);
    debug!("Dropped {} single-character blocks", processed.filtered);
    debug!(
        "Merged {} blocks, {} remain",
        processed.merged,
        processed.blocks.len()
    );

    write_srt_file(output, &processed.blocks)?;
    debug!("Wrote {}", output.display());

    let summary = MergeSummary {
        result_type: ResultType::Merge,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        blocks_parsed: processed.parsed,
        blocks_filtered: processed.filtered,
        blocks_merged: processed.merged,
        blocks_written: processed.blocks.len(),
    };

    if output_mode.is_structured() {
        emit_json_result(&summary);
    } else if summary.blocks_filtered > 0 {
        println!(
            "Removed {} single-character subtitle block(s).",
            summary.blocks_filtered
        );
    }

    Ok(summary)
}
