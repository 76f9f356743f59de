use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use listenloop_core::pipeline::load_transcript_use_case::parse_transcript;
use listenloop_core::playback::domain::sentence_locator::SentenceLocator;
use listenloop_core::playback::infrastructure::simulated_audio_player::{
    SimulatedAudioPlayer, SimulatedPlayerHandle,
};
use listenloop_core::practice::domain::keyboard_shortcuts::{
    InputFocus, Key, KeyPress, ShortcutAction,
};
use listenloop_core::practice::domain::practice_config::PracticeConfig;
use listenloop_core::practice::domain::practice_mode::{PracticeMode, ShadowingSubmode};
use listenloop_core::practice::practice_session::PracticeSession;
use listenloop_core::recording::domain::recorded_clip::RecordedClip;
use listenloop_core::recording::domain::recording_capture::RecordingCapture;
use listenloop_core::recording::domain::recording_error::RecordingError;
use listenloop_core::recording::domain::recording_key::RecordingKey;
use listenloop_core::transcript::domain::caption_entry::CaptionEntry;
use listenloop_core::transcript::domain::sentence_regenerator::SentenceRegenerator;

const LESSON_VTT: &str = "\
WEBVTT

00:00:00.000 --> 00:00:10.000
I'm fine, thank you.

00:00:10.000 --> 00:00:20.000
Don't worry about it.

00:00:20.000 --> 00:00:30.000
See you tomorrow.
";

fn session_with(entries: Vec<CaptionEntry>) -> (PracticeSession, SimulatedPlayerHandle) {
    let player = SimulatedAudioPlayer::new(Some(30.0));
    let handle = player.handle();
    let mut session = PracticeSession::new(Box::new(player), PracticeConfig::default());
    session.load_transcript(entries);
    (session, handle)
}

fn lesson() -> (PracticeSession, SimulatedPlayerHandle) {
    session_with(parse_transcript("lesson.vtt", LESSON_VTT).unwrap())
}

/// Plays in fixed steps, feeding each position back as a tick, until the
/// player stops or `max_ticks` is reached.
fn run_ticks(session: &mut PracticeSession, handle: &SimulatedPlayerHandle, dt: f64, max_ticks: usize) {
    for _ in 0..max_ticks {
        let t = handle.advance(dt);
        session.on_time_update(t);
        if !handle.is_playing() {
            break;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RecorderCall {
    Start(RecordingKey),
    Stop,
    Play(String),
}

struct StubRecorder {
    calls: Arc<Mutex<Vec<RecorderCall>>>,
}

impl RecordingCapture for StubRecorder {
    fn start_capture(&mut self, key: RecordingKey) -> Result<(), RecordingError> {
        self.calls.lock().unwrap().push(RecorderCall::Start(key));
        Ok(())
    }

    fn stop_capture(&mut self) -> Result<(), RecordingError> {
        self.calls.lock().unwrap().push(RecorderCall::Stop);
        Ok(())
    }

    fn play_clip(&mut self, clip: &RecordedClip) -> Result<(), RecordingError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecorderCall::Play(clip.url.clone()));
        Ok(())
    }
}

fn with_recorder(session: PracticeSession) -> (PracticeSession, Arc<Mutex<Vec<RecorderCall>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorder = StubRecorder {
        calls: Arc::clone(&calls),
    };
    (session.with_recorder(Box::new(recorder)), calls)
}

fn enter() -> KeyPress {
    KeyPress::new(Key::Enter)
}

#[test]
fn test_dictation_correct_answer_advances_and_resumes() {
    let (mut session, handle) = lesson();
    session.select_mode(PracticeMode::Dictation);
    assert_eq!(session.pinned_index(), Some(0));

    let result = session.type_input("I'm fine, thank you.").unwrap();
    assert!(result.is_correct);

    let action = session.handle_key(enter(), InputFocus::Practice);

    assert_eq!(action, Some(ShortcutAction::Next));
    assert_eq!(session.pinned_index(), Some(1));
    assert_relative_eq!(handle.position(), 10.0);
    assert_relative_eq!(session.current_time(), 10.0);
    assert!(handle.is_playing());
    assert_eq!(session.dictation().unwrap().input(), "");
}

#[test]
fn test_dictation_incorrect_answer_keeps_pin() {
    let (mut session, handle) = lesson();
    session.select_mode(PracticeMode::Dictation);

    session.type_input("I'm fine thanks");
    session.handle_key(enter(), InputFocus::Practice);

    assert_eq!(session.pinned_index(), Some(0));
    assert!(!handle.is_playing());
}

#[test]
fn test_dictation_reveal_then_next_advances_exactly_one() {
    let (mut session, _handle) = lesson();
    session.select_mode(PracticeMode::Dictation);

    assert!(!session.next());
    assert!(session.reveal_answer());
    assert_eq!(session.masked_sentence().as_deref(), Some("I'm fine, thank you."));
    assert!(session.next());
    assert_eq!(session.pinned_index(), Some(1));
    assert!(!session.can_advance());
}

#[test]
fn test_dictation_auto_stops_at_sentence_end() {
    let (mut session, handle) = lesson();
    session.select_mode(PracticeMode::Dictation);
    session.play();

    run_ticks(&mut session, &handle, 0.25, 200);

    let stopped_at = handle.position();
    assert!(!handle.is_playing());
    assert!((9.9..=10.0).contains(&stopped_at), "stopped at {stopped_at}");
    assert_eq!(session.pinned_index(), Some(0));
}

#[test]
fn test_replay_shortcut_restarts_pinned_sentence() {
    let (mut session, handle) = lesson();
    session.select_mode(PracticeMode::Dictation);
    session.seek_to_sentence(1);
    run_ticks(&mut session, &handle, 0.5, 200);
    assert!(!handle.is_playing());

    let action = session.handle_key(KeyPress::new(Key::Tab), InputFocus::Practice);

    assert_eq!(action, Some(ShortcutAction::Replay));
    assert_relative_eq!(handle.position(), 10.0);
    assert!(handle.is_playing());
}

#[test]
fn test_shortcuts_suppressed_in_popup_and_listening() {
    let (mut session, _handle) = lesson();
    session.select_mode(PracticeMode::Dictation);
    session.reveal_answer();
    assert_eq!(session.handle_key(enter(), InputFocus::Popup), None);
    assert_eq!(session.pinned_index(), Some(0));

    session.select_mode(PracticeMode::Listening);
    assert_eq!(session.handle_key(enter(), InputFocus::Practice), None);
    assert_eq!(session.active_index(), Some(0));
}

#[test]
fn test_scrubbing_does_not_move_pin_until_synced() {
    let (mut session, _handle) = lesson();
    session.select_mode(PracticeMode::Shadowing);

    session.seek(25.0);
    session.on_time_update(25.0);
    assert_eq!(session.pinned_index(), Some(0));
    assert_eq!(session.live_index(), Some(2));

    session.sync_pin_to_playhead();
    assert_eq!(session.pinned_index(), Some(2));
}

#[test]
fn test_mode_entry_pins_live_sentence_or_first() {
    let (mut session, _handle) = session_with(vec![
        CaptionEntry::new(1, 0.0, 4.0, "One."),
        CaptionEntry::new(2, 6.0, 9.0, "Two."),
    ]);
    session.on_time_update(7.0);
    session.select_mode(PracticeMode::Dictation);
    assert_eq!(session.pinned_index(), Some(1));

    session.select_mode(PracticeMode::Listening);
    session.on_time_update(5.0);
    assert_eq!(session.active_index(), None);
    session.select_mode(PracticeMode::Shadowing);
    assert_eq!(session.pinned_index(), Some(0));
}

#[test]
fn test_mode_switch_resets_dictation_attempt() {
    let (mut session, _handle) = lesson();
    session.select_mode(PracticeMode::Dictation);
    session.type_input("I'm");
    session.reveal_answer();

    session.select_mode(PracticeMode::Shadowing);
    session.select_mode(PracticeMode::Dictation);

    let dictation = session.dictation().unwrap();
    assert_eq!(dictation.input(), "");
    assert!(!dictation.show_answer());
}

#[test]
fn test_loading_shorter_transcript_repins_in_range() {
    let (mut session, _handle) = lesson();
    session.select_mode(PracticeMode::Dictation);
    session.seek_to_sentence(2);
    session.type_input("See");

    session.load_transcript(vec![CaptionEntry::new(1, 0.0, 3.0, "Hello.")]);

    assert_eq!(session.mode(), PracticeMode::Dictation);
    assert_eq!(session.pinned_index(), Some(0));
    assert_eq!(session.dictation().unwrap().input(), "");
    assert_eq!(session.current_sentence().unwrap().text, "Hello.");
}

#[test]
fn test_empty_transcript_degrades_gracefully() {
    let (mut session, _handle) = session_with(Vec::new());
    session.select_mode(PracticeMode::Dictation);

    assert_eq!(session.pinned_index(), None);
    assert!(session.current_sentence().is_none());
    assert!(!session.replay());
    assert!(!session.next());
    let result = session.type_input("anything").unwrap();
    assert!(!result.is_correct);
    session.on_time_update(1.0);
}

#[test]
fn test_shadowing_recordings_survive_submode_switch() {
    let (session, _handle) = lesson();
    let (mut session, calls) = with_recorder(session);
    session.select_mode(PracticeMode::Shadowing);
    session.seek_to_sentence(1);

    let space = KeyPress::new(Key::Space);
    assert_eq!(
        session.handle_key(space, InputFocus::Practice),
        Some(ShortcutAction::ToggleRecording)
    );
    session.handle_key(space, InputFocus::Practice);
    session.deliver_recording(
        RecordingKey::Sentence(1),
        RecordedClip::new(vec![1, 2, 3], "blob:s1", "audio/webm"),
    );

    session.set_shadowing_submode(ShadowingSubmode::Full);
    session.toggle_recording().unwrap();
    session.toggle_recording().unwrap();
    session.deliver_recording(
        RecordingKey::FullSession,
        RecordedClip::new(vec![4], "blob:full", "audio/webm"),
    );

    assert_eq!(
        session.recordings().keys(),
        vec![RecordingKey::Sentence(1), RecordingKey::FullSession]
    );
    session.play_recording(RecordingKey::Sentence(1)).unwrap();
    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            RecorderCall::Start(RecordingKey::Sentence(1)),
            RecorderCall::Stop,
            RecorderCall::Start(RecordingKey::FullSession),
            RecorderCall::Stop,
            RecorderCall::Play("blob:s1".to_string()),
        ]
    );
}

#[test]
fn test_leaving_shadowing_stops_capture() {
    let (session, _handle) = lesson();
    let (mut session, calls) = with_recorder(session);
    session.select_mode(PracticeMode::Shadowing);
    session.toggle_recording().unwrap();

    session.select_mode(PracticeMode::Listening);

    assert_eq!(calls.lock().unwrap().last(), Some(&RecorderCall::Stop));
    assert!(session.toggle_recording().is_err());
}

#[test]
fn test_full_shadowing_plays_through_sentences() {
    let (mut session, handle) = lesson();
    session.set_shadowing_submode(ShadowingSubmode::Full);
    session.select_mode(PracticeMode::Shadowing);
    session.play();

    run_ticks(&mut session, &handle, 0.5, 200);

    assert_relative_eq!(handle.position(), 30.0);
}

#[test]
fn test_entry_speed_override_applied_on_jump() {
    let (mut session, handle) = lesson();
    session.set_entry_speed(2, Some(0.5)).unwrap();
    session.select_mode(PracticeMode::Shadowing);

    session.seek_to_sentence(2);

    assert_relative_eq!(handle.rate(), 0.5);
    assert!(session.set_entry_speed(7, Some(1.0)).is_err());
    assert!(session.set_entry_volume(0, Some(1.5)).is_err());
}

#[test]
fn test_skip_clamps_to_media() {
    let (mut session, _handle) = lesson();
    assert_relative_eq!(session.skip_backward(false), 0.0);
    session.seek(28.0);
    assert_relative_eq!(session.skip_forward(true), 30.0);
}

#[test]
fn test_locator_touching_boundaries_first_wins() {
    let entries = vec![
        CaptionEntry::new(1, 0.0, 5.0, "a"),
        CaptionEntry::new(2, 5.0, 10.0, "b"),
    ];
    assert_eq!(SentenceLocator::locate(5.0, &entries), Some(0));
}

#[test]
fn test_regenerates_five_fragments_into_two_sentences() {
    let entries = vec![
        CaptionEntry::new(1, 0.0, 1.5, "when we got"),
        CaptionEntry::new(2, 1.5, 3.0, "to the station."),
        CaptionEntry::new(3, 3.5, 5.0, "the train"),
        CaptionEntry::new(4, 5.0, 6.5, "had already"),
        CaptionEntry::new(5, 6.5, 8.0, "left!"),
    ];

    let sentences = SentenceRegenerator::regenerate(&entries);

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].index, 1);
    assert_relative_eq!(sentences[0].start_time, 0.0);
    assert_relative_eq!(sentences[0].end_time, 3.0);
    assert_eq!(sentences[0].text, "when we got to the station.");
    assert_eq!(sentences[1].index, 2);
    assert_relative_eq!(sentences[1].start_time, 3.5);
    assert_relative_eq!(sentences[1].end_time, 8.0);
    assert_eq!(sentences[1].text, "the train had already left!");
    assert_eq!(SentenceRegenerator::regenerate(&sentences), sentences);
}

#[test]
fn test_session_regeneration_resets_pins() {
    let (mut session, _handle) = session_with(vec![
        CaptionEntry::new(1, 0.0, 2.0, "so we"),
        CaptionEntry::new(2, 2.0, 4.0, "left."),
        CaptionEntry::new(3, 4.0, 6.0, "then"),
        CaptionEntry::new(4, 6.0, 8.0, "came back."),
    ]);
    session.select_mode(PracticeMode::Dictation);
    session.seek_to_sentence(3);

    let mut regeneration = session.begin_regeneration();
    assert_eq!(regeneration.preview().len(), 2);
    assert!(session.apply_regeneration(regeneration));

    assert_eq!(session.entries().len(), 2);
    assert_eq!(session.pinned_index(), Some(1));
}
