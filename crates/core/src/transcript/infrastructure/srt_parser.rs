use once_cell::sync::Lazy;
use regex::Regex;

use crate::transcript::domain::caption_entry::CaptionEntry;
use crate::transcript::domain::time_code::parse_time_code;
use crate::transcript::domain::transcript_parser::TranscriptParser;

static RE_SRT_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2},\d{3}) --> (\d{2}:\d{2}:\d{2},\d{3})").unwrap()
});

/// SubRip parser.
///
/// Input is split into blocks on blank lines. A block is kept only when it
/// has at least three lines (index, timing, text...) and its second line
/// carries a comma-millisecond `start --> end` range. Anything else is
/// dropped with a warning; the source index line is ignored.
pub struct SrtParser;

impl TranscriptParser for SrtParser {
    fn parse(&self, content: &str) -> Vec<CaptionEntry> {
        let normalized = normalize_newlines(content);
        let mut entries = Vec::new();

        for (block_no, block) in split_blocks(&normalized).iter().enumerate() {
            match parse_block(block) {
                Some((start, end, text)) => {
                    entries.push(CaptionEntry::new(entries.len() + 1, start, end, text));
                }
                None => log::warn!("Skipping malformed SRT block #{}", block_no + 1),
            }
        }

        entries
    }
}

/// Strips a leading byte-order mark and converts CRLF/CR line endings to LF.
pub(super) fn normalize_newlines(content: &str) -> String {
    content
        .trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_block(lines: &[&str]) -> Option<(f64, f64, String)> {
    if lines.len() < 3 {
        return None;
    }
    let caps = RE_SRT_TIMING.captures(lines[1])?;
    let start = parse_time_code(&caps[1])?;
    let end = parse_time_code(&caps[2])?;
    if end < start {
        return None;
    }
    let text = lines[2..].join("\n").trim().to_string();
    Some((start, end, text))
}
