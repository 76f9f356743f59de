use std::path::Path;

use crate::transcript::domain::caption_entry::CaptionEntry;
use crate::transcript::domain::sentence_regenerator::SentenceRegenerator;
use crate::transcript::domain::subtitle_format::SubtitleFormat;
use crate::transcript::domain::transcript_error::TranscriptError;
use crate::transcript::domain::transcript_source::TranscriptSource;
use crate::transcript::infrastructure::parser_factory::create_parser;

/// Transcript ingestion: resolve format → read → parse → [regenerate].
pub struct LoadTranscriptUseCase {
    source: Box<dyn TranscriptSource>,
    regenerate: bool,
}

impl LoadTranscriptUseCase {
    pub fn new(source: Box<dyn TranscriptSource>, regenerate: bool) -> Self {
        Self { source, regenerate }
    }

    /// Loads the transcript at `path`. The extension is checked before
    /// anything is read.
    pub fn execute(&self, path: &Path) -> Result<Vec<CaptionEntry>, TranscriptError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = resolve_format(&file_name)?;
        let content = self.source.read_text(path)?;
        let entries = parse_with(format, &file_name, &content)?;

        if self.regenerate {
            let sentences = SentenceRegenerator::regenerate(&entries);
            log::info!(
                "Regenerated {} caption entries into {} sentences",
                entries.len(),
                sentences.len()
            );
            return Ok(sentences);
        }
        Ok(entries)
    }
}

/// Parses raw subtitle text, dispatching on the extension of `file_name`.
pub fn parse_transcript(file_name: &str, content: &str) -> Result<Vec<CaptionEntry>, TranscriptError> {
    let format = resolve_format(file_name)?;
    parse_with(format, file_name, content)
}

fn resolve_format(file_name: &str) -> Result<SubtitleFormat, TranscriptError> {
    SubtitleFormat::from_file_name(file_name).ok_or_else(|| TranscriptError::UnsupportedFormat {
        file_name: file_name.to_string(),
    })
}

fn parse_with(
    format: SubtitleFormat,
    file_name: &str,
    content: &str,
) -> Result<Vec<CaptionEntry>, TranscriptError> {
    let entries = create_parser(format).parse(content);
    if entries.is_empty() {
        return Err(TranscriptError::NoEntries {
            file_name: file_name.to_string(),
        });
    }
    log::info!("Parsed {} entries from {file_name} ({format})", entries.len());
    Ok(entries)
}
