//! Tests for SRT serialization.

use srt_merge::subtitle::{parse_srt, parse_srt_file, render_srt, write_srt_file};
use tempfile::TempDir;

#[test]
fn test_round_trip_preserves_timestamps_and_text() {
    let original = "1
00:00:01,000 --> 00:00:02,000
Hello

2
00:00:02,500 --> 00:00:04,000
There
friend

10
01:23:45,678 --> 01:23:46,000
<i>tags are kept verbatim</i>
";

    let blocks = parse_srt(original).unwrap();
    assert_eq!(render_srt(&blocks), original);
}

#[test]
fn test_round_trip_normalizes_line_endings_and_spacing() {
    let original = "1\r\n00:00:01,000 --> 00:00:02,000\r\nA\r\nB\r\n\r\n\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nC\r\n\r\n";

    let blocks = parse_srt(original).unwrap();

    assert_eq!(
        render_srt(&blocks),
        "1\n00:00:01,000 --> 00:00:02,000\nA\nB\n\n2\n00:00:03,000 --> 00:00:04,000\nC\n"
    );
}

#[test]
fn test_reparse_of_output_is_stable() {
    let original = "00:00:01,000 --> 00:00:02,000\nno index\n\n3\n00:00:05,000 --> 00:00:06,000\nx y\n";

    let first = parse_srt(original).unwrap();
    let rendered = render_srt(&first);
    let second = parse_srt(&rendered).unwrap();

    assert_eq!(first, second);
    assert_eq!(render_srt(&second), rendered);
}

#[test]
fn test_write_srt_file_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("merged.srt");
    let blocks = parse_srt("1\n00:00:01,000 --> 00:00:02,000\nHi\n").unwrap();

    write_srt_file(&path, &blocks).unwrap();

    assert_eq!(parse_srt_file(&path).unwrap(), blocks);
}
