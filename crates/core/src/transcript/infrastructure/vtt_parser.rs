use once_cell::sync::Lazy;
use regex::Regex;

use super::srt_parser::normalize_newlines;
use crate::transcript::domain::caption_entry::CaptionEntry;
use crate::transcript::domain::time_code::parse_time_code;
use crate::transcript::domain::transcript_parser::TranscriptParser;

static RE_VTT_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2}\.\d{3}) --> (\d{2}:\d{2}:\d{2}\.\d{3})").unwrap()
});

/// WebVTT parser.
///
/// Scans line by line. A timing line starts a new cue and flushes the
/// previous one if it collected any text. Other non-blank lines become cue
/// text, except the `WEBVTT` header and a cue identifier that opens a block
/// directly above a timing line.
pub struct VttParser;

struct PendingCue {
    start: f64,
    end: f64,
    lines: Vec<String>,
}

impl TranscriptParser for VttParser {
    fn parse(&self, content: &str) -> Vec<CaptionEntry> {
        let normalized = normalize_newlines(content);
        let lines: Vec<&str> = normalized.lines().map(str::trim).collect();
        let mut entries = Vec::new();
        let mut current: Option<PendingCue> = None;

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() || is_header(line) {
                continue;
            }

            if let Some(caps) = RE_VTT_TIMING.captures(line) {
                flush(current.take(), &mut entries);
                current = match (parse_time_code(&caps[1]), parse_time_code(&caps[2])) {
                    (Some(start), Some(end)) if start <= end => Some(PendingCue {
                        start,
                        end,
                        lines: Vec::new(),
                    }),
                    _ => {
                        log::warn!("Skipping VTT cue with invalid timing on line {}", i + 1);
                        None
                    }
                };
                continue;
            }

            if is_cue_identifier(&lines, i) {
                continue;
            }

            if let Some(cue) = current.as_mut() {
                cue.lines.push(line.to_string());
            }
        }
        flush(current, &mut entries);

        entries
    }
}

/// A cue identifier opens a block (start of input, or after a blank or
/// header line) and sits directly above a timing line. A line that follows
/// cue text is always text, even when a timing line comes next.
fn is_cue_identifier(lines: &[&str], i: usize) -> bool {
    let opens_block = i == 0 || lines[i - 1].is_empty() || is_header(lines[i - 1]);
    opens_block
        && lines
            .get(i + 1)
            .is_some_and(|next| RE_VTT_TIMING.is_match(next))
}

fn is_header(line: &str) -> bool {
    line == "WEBVTT" || line.starts_with("WEBVTT ") || line.starts_with("WEBVTT\t")
}

fn flush(cue: Option<PendingCue>, entries: &mut Vec<CaptionEntry>) {
    let Some(cue) = cue else {
        return;
    };
    let text = cue.lines.join("\n").trim().to_string();
    if text.is_empty() {
        log::warn!("Skipping VTT cue at {:.3}s with no text", cue.start);
        return;
    }
    entries.push(CaptionEntry::new(entries.len() + 1, cue.start, cue.end, text));
}
