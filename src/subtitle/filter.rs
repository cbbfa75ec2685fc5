//! Removal of degenerate single-character blocks.

use super::Block;
use crate::constants::filter::MAX_DEGENERATE_CHARS;

/// Count the characters of a block body that carry meaning.
///
/// The body lines are joined without separators and trimmed. ASCII letters
/// and digits count, as does every non-ASCII character (Hangul, kana, accented
/// letters and so on). ASCII punctuation, symbols and whitespace do not.
pub fn clean_char_count(text: &[String]) -> usize {
    let joined = text.concat();
    joined
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || !c.is_ascii())
        .count()
}

/// Whether a block is kept by the single-character filter.
pub fn has_meaningful_text(block: &Block) -> bool {
    clean_char_count(&block.text) > MAX_DEGENERATE_CHARS
}

/// Drop blocks with fewer than two meaningful characters.
///
/// Order is preserved and surviving blocks keep their original index.
pub fn filter_single_char_blocks(mut blocks: Vec<Block>) -> Vec<Block> {
    blocks.retain(has_meaningful_text);
    blocks
}
