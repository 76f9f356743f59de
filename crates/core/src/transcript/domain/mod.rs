pub mod caption_entry;
pub mod sentence_regenerator;
pub mod subtitle_format;
pub mod time_code;
pub mod transcript_error;
pub mod transcript_parser;
pub mod transcript_regeneration;
pub mod transcript_source;
pub mod transcript_stats;
