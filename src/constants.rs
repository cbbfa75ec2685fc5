//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "srt-merge";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default maximum gap (seconds) between two blocks that still merges them.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Default maximum length (seconds) a merged block may span.
pub const DEFAULT_MAX_DURATION: f64 = 120.0;

/// SRT format constants shared by the parser and the serializer.
pub mod srt {
    /// Separator between start and end time on a timeline.
    pub const ARROW: &str = "-->";

    /// Timestamp layout, anchored at the start of the trimmed field.
    ///
    /// `HH:MM:SS,mmm` with exactly 2-2-2-3 digits.
    pub const TIMESTAMP_PATTERN: &str = r"^([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})";

    /// Blank-line run that separates blocks.
    pub const BLOCK_SEPARATOR_PATTERN: &str = r"\n\s*\n";

    /// How many lines after the first are searched for a misplaced timeline.
    pub const TIMELINE_SEARCH_WINDOW: usize = 3;

    /// Number of leading lines quoted in a missing-timeline error.
    pub const ERROR_CONTEXT_LINES: usize = 3;

    /// UTF-8 byte order mark.
    pub const BOM: char = '\u{FEFF}';
}

/// Single-character filter constants.
pub mod filter {
    /// A block must have more than this many countable characters to survive.
    pub const MAX_DEGENERATE_CHARS: usize = 1;
}
