pub mod load_transcript_use_case;
