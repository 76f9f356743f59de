mod settings;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use listenloop_core::comparison::domain::text_comparator::{TextComparator, WordMatchResult};
use listenloop_core::pipeline::load_transcript_use_case::LoadTranscriptUseCase;
use listenloop_core::playback::infrastructure::simulated_audio_player::{
    SimulatedAudioPlayer, SimulatedPlayerHandle,
};
use listenloop_core::practice::domain::keyboard_shortcuts::{InputFocus, Key, KeyPress};
use listenloop_core::practice::domain::practice_config::PracticeConfig;
use listenloop_core::practice::domain::practice_mode::PracticeMode;
use listenloop_core::practice::practice_session::PracticeSession;
use listenloop_core::shared::clock::{format_clock, format_duration};
use listenloop_core::shared::constants::PLAYBACK_SPEEDS;
use listenloop_core::transcript::domain::caption_entry::CaptionEntry;
use listenloop_core::transcript::domain::subtitle_format::SubtitleFormat;
use listenloop_core::transcript::domain::transcript_regeneration::TranscriptRegeneration;
use listenloop_core::transcript::domain::transcript_stats::{transcript_preview, TranscriptStats};
use listenloop_core::transcript::infrastructure::file_transcript_source::FileTranscriptSource;
use listenloop_core::transcript::infrastructure::subtitle_writer::render;

/// Simulated playback step for the terminal dictation loop, in seconds.
const TICK: f64 = 0.05;

/// Transcript tools and terminal dictation practice.
#[derive(Parser)]
#[command(name = "listenloop")]
struct Cli {
    /// Settings file (defaults to <config dir>/listenloop/settings.json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the entries of a subtitle file.
    Parse {
        /// .srt or .vtt file.
        file: PathBuf,

        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Merge caption fragments into sentences.
    Regenerate {
        file: PathBuf,

        /// Write the result as .srt or .vtt, chosen by extension.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show transcript statistics and a preview.
    Stats { file: PathBuf },
    /// Check typed text against a reference sentence.
    Compare {
        reference: String,
        input: String,

        #[arg(long)]
        json: bool,
    },
    /// Practise dictation sentence by sentence on stdin.
    Dictate {
        file: PathBuf,

        /// Regenerate sentences before practising.
        #[arg(long)]
        regenerate: bool,

        /// Playback speed: 0.25, 0.5, 0.75 or 1.
        #[arg(long)]
        speed: Option<f64>,
    },
    /// Show or update saved settings.
    Config {
        #[arg(long)]
        speed: Option<f64>,

        #[arg(long)]
        volume: Option<f64>,

        /// Seconds before a sentence end at which playback stops.
        #[arg(long)]
        tolerance: Option<f64>,

        /// Regenerate sentences whenever a transcript is loaded.
        #[arg(long)]
        auto_regenerate: Option<bool>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let config = settings::load(config_path);

    match cli.command {
        Command::Parse { file, json } => run_parse(&file, json),
        Command::Regenerate { file, output } => run_regenerate(&file, output.as_deref()),
        Command::Stats { file } => run_stats(&file),
        Command::Compare {
            reference,
            input,
            json,
        } => run_compare(&reference, &input, json),
        Command::Dictate {
            file,
            regenerate,
            speed,
        } => run_dictate(&file, regenerate, speed, config),
        Command::Config {
            speed,
            volume,
            tolerance,
            auto_regenerate,
        } => {
            let mut config = config;
            let changed = speed.is_some()
                || volume.is_some()
                || tolerance.is_some()
                || auto_regenerate.is_some();
            if let Some(speed) = speed {
                config.playback_speed = speed;
            }
            if let Some(volume) = volume {
                config.volume = volume;
            }
            if let Some(tolerance) = tolerance {
                config.auto_stop_tolerance = tolerance;
            }
            if let Some(auto_regenerate) = auto_regenerate {
                config.auto_regenerate = auto_regenerate;
            }
            config.validate()?;
            if changed {
                let path = settings::save(&config, config_path)?;
                log::info!("Settings saved to {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn load_entries(file: &Path, regenerate: bool) -> Result<Vec<CaptionEntry>, Box<dyn std::error::Error>> {
    let use_case = LoadTranscriptUseCase::new(Box::new(FileTranscriptSource), regenerate);
    Ok(use_case.execute(file)?)
}

fn run_parse(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = load_entries(file, false)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

fn run_regenerate(file: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_format = match output {
        Some(path) => Some(output_format(path)?),
        None => None,
    };

    let mut regeneration = TranscriptRegeneration::new(load_entries(file, false)?);
    let sentences = regeneration.preview().to_vec();
    print_stats("Before", &regeneration.original_stats());
    if let Some(stats) = regeneration.preview_stats() {
        print_stats("After", &stats);
    }

    match (output, output_format) {
        (Some(path), Some(format)) => {
            fs::write(path, render(&sentences, format))?;
            log::info!("Wrote {} sentences to {}", sentences.len(), path.display());
        }
        _ => {
            for entry in &sentences {
                print_entry(entry);
            }
        }
    }
    Ok(())
}

fn output_format(path: &Path) -> Result<SubtitleFormat, Box<dyn std::error::Error>> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    SubtitleFormat::from_file_name(&name)
        .ok_or_else(|| format!("Output must be a .srt or .vtt file, got '{name}'").into())
}

fn run_stats(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let entries = load_entries(file, false)?;
    print_stats("Transcript", &TranscriptStats::of(&entries));
    if let Some(last) = entries.last() {
        println!("  duration:   {}", format_duration(last.end_time));
    }
    println!("  preview:    {}", transcript_preview(&entries));
    Ok(())
}

fn run_compare(reference: &str, input: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = TextComparator::default().compare(input, reference);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    println!("{}", if result.is_correct { "correct" } else { "incorrect" });
    println!("{}", word_marks(&result));
    Ok(())
}

fn run_dictate(
    file: &Path,
    regenerate: bool,
    speed: Option<f64>,
    config: PracticeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(speed) = speed {
        if !PLAYBACK_SPEEDS.contains(&speed) {
            return Err(format!("Speed must be one of 0.25, 0.5, 0.75, 1, got {speed}").into());
        }
    }

    let entries = load_entries(file, regenerate || config.auto_regenerate)?;
    let duration = entries.last().map(|e| e.end_time);
    let player = SimulatedAudioPlayer::new(duration);
    let handle = player.handle();

    let mut session = PracticeSession::new(Box::new(player), config);
    if let Some(speed) = speed {
        session.set_playback_speed(speed)?;
    }
    session.load_transcript(entries);
    session.select_mode(PracticeMode::Dictation);

    println!("Type what you hear. Empty line replays; :answer, :prev, :next, :quit.");
    session.replay();
    play_until_stopped(&mut session, &handle);
    show_prompt(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let before = session.pinned_index();

        match line.trim() {
            ":quit" => break,
            ":answer" => {
                session.reveal_answer();
            }
            ":prev" => {
                session.previous();
            }
            ":next" => {
                session.handle_key(KeyPress::new(Key::Enter), InputFocus::Practice);
            }
            "" => {
                session.handle_key(KeyPress::new(Key::Tab), InputFocus::Practice);
            }
            input => {
                let correct = session.type_input(input).is_some_and(|r| r.is_correct);
                if correct {
                    println!("  correct");
                    if !session.next() {
                        println!("Finished all {} sentences.", session.entries().len());
                        break;
                    }
                } else if let Some(dictation) = session.dictation() {
                    println!(
                        "  {} ({:.0}%)",
                        word_marks(dictation.result()),
                        dictation.typing_progress() * 100.0
                    );
                }
            }
        }

        if session.pinned_index() != before || session.is_playing() {
            play_until_stopped(&mut session, &handle);
        }
        show_prompt(&session);
    }
    Ok(())
}

/// Drives the simulated clock until auto-stop or end of media.
fn play_until_stopped(session: &mut PracticeSession, handle: &SimulatedPlayerHandle) {
    let start = session.current_time();
    while handle.is_playing() {
        let t = handle.advance(TICK);
        session.on_time_update(t);
    }
    log::debug!(
        "played {} to {}",
        format_clock(start),
        format_clock(session.current_time())
    );
}

fn show_prompt(session: &PracticeSession) {
    let Some(index) = session.pinned_index() else {
        println!("No subtitle available for the current time.");
        return;
    };
    let total = session.entries().len();
    if let (Some(sentence), Some(masked)) = (session.current_sentence(), session.masked_sentence()) {
        println!(
            "[{}/{}] {}-{}  {}",
            index + 1,
            total,
            format_clock(sentence.start_time),
            format_clock(sentence.end_time),
            masked
        );
    }
    print!("> ");
    let _ = io::stdout().flush();
}

fn print_entry(entry: &CaptionEntry) {
    println!(
        "{:>4}  {} --> {}  {}",
        entry.index,
        format_clock(entry.start_time),
        format_clock(entry.end_time),
        entry.display_text()
    );
}

fn print_stats(label: &str, stats: &TranscriptStats) {
    println!("{label}:");
    println!("  sentences:  {}", stats.total_sentences);
    println!("  words:      {}", stats.total_words);
    println!("  avg words:  {:.1}", stats.average_words_per_sentence);
    println!("  short/long: {}/{}", stats.short_sentences, stats.long_sentences);
}

/// Reference words with a mark for each positional match.
fn word_marks(result: &WordMatchResult) -> String {
    result
        .correct_words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let matched = result.matched_words.get(i).copied().unwrap_or(false);
            format!("{word}{}", if matched { "+" } else { "?" })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
