//! SRT file parsing.
//!
//! Splits raw text into blank-line separated blocks and extracts the
//! sequence number, timeline, and body lines from each one. Parsing is
//! lenient about where the timeline sits inside a block but strict about
//! the timestamp layout.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::Timestamp;
use crate::Error;
use crate::constants::srt::{
    ARROW, BLOCK_SEPARATOR_PATTERN, BOM, ERROR_CONTEXT_LINES, TIMELINE_SEARCH_WINDOW,
};

#[allow(clippy::unwrap_used)]
static BLOCK_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BLOCK_SEPARATOR_PATTERN).unwrap());

/// A subtitle block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Sequence number, if the block had one.
    pub index: Option<u64>,
    /// Time the block appears.
    pub start: Timestamp,
    /// Time the block disappears.
    pub end: Timestamp,
    /// Body lines, in order. May be empty.
    pub text: Vec<String>,
}

impl Block {
    /// Length of the block in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end.seconds_since(self.start)
    }
}

/// Malformed SRT content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No line in the block's search window contains the `-->` separator.
    #[error("SRT timeline missing in block starting with: {lines:?}")]
    MissingTimeline {
        /// Leading lines of the offending block.
        lines: Vec<String>,
    },

    /// A timestamp does not match `HH:MM:SS,mmm`.
    #[error("invalid time format: {value:?}")]
    InvalidTimestamp {
        /// The text that failed to parse.
        value: String,
    },
}

/// Parse SRT text into blocks.
///
/// A leading UTF-8 BOM is ignored. `\r\n` and bare `\r` both count as line
/// breaks. Empty or whitespace-only input yields an empty list.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial result is kept.
pub fn parse_srt(text: &str) -> Result<Vec<Block>, ParseError> {
    let text = normalize_line_endings(text.strip_prefix(BOM).unwrap_or(text));
    let text = text.trim();

    let mut blocks = Vec::new();
    for chunk in BLOCK_SEPARATOR_RE.split(text) {
        let lines: Vec<&str> = chunk.lines().collect();
        if lines.is_empty() {
            continue;
        }
        blocks.push(parse_block(&lines)?);
    }

    Ok(blocks)
}

/// Read and parse an SRT file.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 or is malformed.
pub fn parse_srt_file(path: &Path) -> Result<Vec<Block>, Error> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_srt(&contents).map_err(|e| Error::SubtitleParse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_block(lines: &[&str]) -> Result<Block, ParseError> {
    let index = parse_index(lines[0]);

    // Head candidate and the position body lines start at
    let (mut head, mut body_start) = if index.is_some() {
        (lines.get(1).copied().unwrap_or(""), 2)
    } else {
        (lines[0], 1)
    };

    if !head.contains(ARROW) {
        let window_end = lines.len().min(1 + TIMELINE_SEARCH_WINDOW);
        if let Some(pos) = (1..window_end).find(|&i| lines[i].contains(ARROW)) {
            head = lines[pos];
            body_start = pos + 1;
        }
    }

    let Some((start, end)) = head.split_once(ARROW) else {
        return Err(ParseError::MissingTimeline {
            lines: lines
                .iter()
                .take(ERROR_CONTEXT_LINES)
                .map(|l| (*l).to_string())
                .collect(),
        });
    };

    let text = lines
        .get(body_start..)
        .unwrap_or_default()
        .iter()
        .map(|l| (*l).to_string())
        .collect();

    Ok(Block {
        index,
        start: Timestamp::parse(start)?,
        end: Timestamp::parse(end)?,
        text,
    })
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// A first line made only of ASCII digits is the sequence number.
fn parse_index(line: &str) -> Option<u64> {
    let line = line.trim();
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_block() {
        let blocks = parse_srt("1\n00:00:01,000 --> 00:00:02,000\nHello\n").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].index, Some(1));
        assert_eq!(blocks[0].start.as_millis(), 1_000);
        assert_eq!(blocks[0].end.as_millis(), 2_000);
        assert_eq!(blocks[0].text, vec!["Hello"]);
    }

    #[test]
    fn test_parse_index_rules() {
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("  7 "), Some(7));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("4a"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }

    #[test]
    fn test_block_without_index() {
        let blocks = parse_srt("00:00:01,000 --> 00:00:02,000\nNo number").unwrap();
        assert_eq!(blocks[0].index, None);
        assert_eq!(blocks[0].text, vec!["No number"]);
    }

    #[test]
    fn test_timeline_found_in_search_window() {
        // Index line followed by a stray line before the timeline
        let blocks = parse_srt("3\nstray\n00:00:01,000 --> 00:00:02,000\nBody").unwrap();
        assert_eq!(blocks[0].index, Some(3));
        assert_eq!(blocks[0].text, vec!["Body"]);
    }

    #[test]
    fn test_timeline_search_without_index() {
        let blocks =
            parse_srt("note\nmore\n00:00:01,000 --> 00:00:02,000\nfirst\nsecond").unwrap();
        assert_eq!(blocks[0].index, None);
        assert_eq!(blocks[0].text, vec!["first", "second"]);
    }

    #[test]
    fn test_timeline_beyond_window_fails() {
        let err = parse_srt("a\nb\nc\nd\n00:00:01,000 --> 00:00:02,000").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingTimeline {
                lines: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            }
        );
    }

    #[test]
    fn test_index_only_block_fails() {
        let err = parse_srt("5").unwrap_err();
        assert!(matches!(err, ParseError::MissingTimeline { .. }));
    }

    #[test]
    fn test_bad_timestamp_fails() {
        let err = parse_srt("1\n00:00:01 --> 00:00:02,000\nx").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_crlf_and_multiple_blank_lines() {
        let text = "1\r\n00:00:01,000 --> 00:00:02,000\r\nA line\r\n\r\n  \r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nB line\r\n";
        let blocks = parse_srt(text).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, vec!["A line"]);
        assert_eq!(blocks[1].index, Some(2));
    }

    #[test]
    fn test_cr_only_line_endings() {
        let text = "1\r00:00:01,000 --> 00:00:02,000\rHello\r\r2\r00:00:03,000 --> 00:00:04,000\rWorld\r";
        let blocks = parse_srt(text).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].index, Some(1));
        assert_eq!(blocks[0].text, vec!["Hello"]);
        assert_eq!(blocks[1].start.as_millis(), 3_000);
        assert_eq!(blocks[1].text, vec!["World"]);
    }

    #[test]
    fn test_empty_body() {
        let blocks = parse_srt("1\n00:00:01,000 --> 00:00:02,000").unwrap();
        assert!(blocks[0].text.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_srt("").unwrap().is_empty());
        assert!(parse_srt("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_bom_is_stripped() {
        let blocks = parse_srt("\u{FEFF}1\n00:00:01,000 --> 00:00:02,000\nHi").unwrap();
        assert_eq!(blocks[0].index, Some(1));
    }

    #[test]
    fn test_duration() {
        let blocks = parse_srt("00:00:01,000 --> 00:00:03,500\nx").unwrap();
        assert!((blocks[0].duration() - 2.5).abs() < f64::EPSILON);
    }
}
