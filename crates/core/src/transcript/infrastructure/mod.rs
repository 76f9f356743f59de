pub mod file_transcript_source;
pub mod parser_factory;
pub mod srt_parser;
pub mod subtitle_writer;
pub mod vtt_parser;
