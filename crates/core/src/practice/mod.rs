pub mod dictation_controller;
pub mod domain;
pub mod listening_controller;
pub mod practice_context;
pub mod practice_session;
pub mod shadowing_controller;
