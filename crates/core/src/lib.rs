pub mod comparison;
pub mod pipeline;
pub mod playback;
pub mod practice;
pub mod recording;
pub mod shared;
pub mod transcript;
