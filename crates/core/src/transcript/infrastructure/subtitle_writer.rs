use crate::transcript::domain::caption_entry::CaptionEntry;
use crate::transcript::domain::subtitle_format::SubtitleFormat;
use crate::transcript::domain::time_code::{format_time_code, MillisSeparator};

/// Renders entries as SubRip text, numbering blocks by position.
pub fn to_srt(entries: &[CaptionEntry]) -> String {
    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_time_code(entry.start_time, MillisSeparator::Comma),
            format_time_code(entry.end_time, MillisSeparator::Comma),
            entry.text
        ));
    }
    output
}

/// Renders entries as WebVTT text with a bare `WEBVTT` header.
pub fn to_vtt(entries: &[CaptionEntry]) -> String {
    let mut output = String::from("WEBVTT\n\n");
    for entry in entries {
        output.push_str(&format!(
            "{} --> {}\n{}\n\n",
            format_time_code(entry.start_time, MillisSeparator::Dot),
            format_time_code(entry.end_time, MillisSeparator::Dot),
            entry.text
        ));
    }
    output
}

pub fn render(entries: &[CaptionEntry], format: SubtitleFormat) -> String {
    match format {
        SubtitleFormat::Srt => to_srt(entries),
        SubtitleFormat::Vtt => to_vtt(entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::domain::transcript_parser::TranscriptParser;
    use crate::transcript::infrastructure::srt_parser::SrtParser;
    use crate::transcript::infrastructure::vtt_parser::VttParser;

    fn sample() -> Vec<CaptionEntry> {
        vec![
            CaptionEntry::new(1, 1.0, 4.0, "Hello there."),
            CaptionEntry::new(2, 65.25, 70.5, "Second line\nwrapped."),
        ]
    }

    #[test]
    fn test_to_srt_layout() {
        let srt = to_srt(&sample());
        assert!(srt.starts_with("1\n00:00:01,000 --> 00:00:04,000\nHello there.\n\n2\n"));
        assert!(srt.contains("00:01:05,250 --> 00:01:10,500"));
    }

    #[test]
    fn test_to_vtt_layout() {
        let vtt = to_vtt(&sample());
        assert!(vtt.starts_with("WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nHello there.\n\n"));
    }

    #[test]
    fn test_rendered_output_parses_back() {
        let entries = sample();
        assert_eq!(SrtParser.parse(&render(&entries, SubtitleFormat::Srt)), entries);
        assert_eq!(VttParser.parse(&render(&entries, SubtitleFormat::Vtt)), entries);
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(to_srt(&[]), "");
        assert_eq!(to_vtt(&[]), "WEBVTT\n\n");
    }
}
