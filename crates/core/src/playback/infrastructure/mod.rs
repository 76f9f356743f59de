pub mod simulated_audio_player;
