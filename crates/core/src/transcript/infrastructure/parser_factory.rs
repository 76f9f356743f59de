use crate::transcript::domain::subtitle_format::SubtitleFormat;
use crate::transcript::domain::transcript_parser::TranscriptParser;

use super::srt_parser::SrtParser;
use super::vtt_parser::VttParser;

/// Returns the parser for a format. Callers resolve the format from the file
/// name first and reject anything unsupported before reaching this point.
pub fn create_parser(format: SubtitleFormat) -> Box<dyn TranscriptParser> {
    match format {
        SubtitleFormat::Srt => Box::new(SrtParser),
        SubtitleFormat::Vtt => Box::new(VttParser),
    }
}
