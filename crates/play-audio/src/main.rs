//! play-audio - play audio files or URIs one after another through OpenSL ES
//!
//! Each input gets its own player; the next one starts only after the previous
//! reported completion, a stall or an underflow. The first platform error aborts.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use play_audio_core::{LoggingCallback, PlayerConfig, Session, SessionReport, StreamType};
use play_audio_opensles::OpenSlBackend;

#[cfg(any(target_os = "android", test))]
mod terminal;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "play-audio")]
#[command(about = "Play audio files or URIs sequentially using OpenSL ES")]
#[command(version)]
struct Args {
    /// Files or URIs to play, in order
    files: Vec<String>,

    /// Android stream type: voice, system, ring, media, alarm, notification
    #[arg(short, long, default_value = "alarm", env = "PLAY_AUDIO_STREAM")]
    stream: StreamType,

    /// Abort if a file has not finished after this many seconds
    #[arg(short, long, env = "PLAY_AUDIO_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Hand local paths to the platform without checking they exist
    #[arg(long)]
    no_check: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            stream_type: self.stream,
            completion_timeout: self.timeout.map(Duration::from_secs),
            check_local_files: !self.no_check,
            ..Default::default()
        }
    }

    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn init_logging(level: log::LevelFilter) {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(level)
                .with_tag("play-audio"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        let default = level.to_string().to_lowercase();
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
            .init();
    }
}

fn run(args: &Args) -> Result<SessionReport> {
    let config = args.player_config();
    config.validate().context("Invalid configuration")?;

    let backend =
        OpenSlBackend::new(config.clone()).context("Failed to initialize audio engine")?;
    let mut session = Session::new(backend, config);
    session.add_callback(Arc::new(LoggingCallback));
    #[cfg(target_os = "android")]
    session.add_callback(Arc::new(terminal::TerminalCallback::stderr()));

    session.run(&args.files).context("Playback aborted")
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.files.is_empty() {
        let _ = Args::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    }

    init_logging(args.log_level());
    log::info!(
        "Playing {} file(s) on the {} stream",
        args.files.len(),
        args.stream
    );

    match run(&args) {
        Ok(report) => {
            log::info!(
                "Done: {} played, {} failed in {:.1}s",
                report.completed(),
                report.failed(),
                report.total_elapsed().as_secs_f32()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Session errors were already logged; logcat is not visible from a shell
            eprintln!("play-audio: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["play-audio", "/sdcard/a.ogg", "/sdcard/b.ogg"]).unwrap();
        assert_eq!(args.files, vec!["/sdcard/a.ogg", "/sdcard/b.ogg"]);
        assert_eq!(args.stream, StreamType::Alarm);

        let config = args.player_config();
        assert!(config.completion_timeout.is_none());
        assert!(config.check_local_files);
        assert_eq!(args.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "play-audio",
            "-s",
            "media",
            "--timeout",
            "30",
            "--no-check",
            "-vv",
            "http://host/x.mp3",
        ])
        .unwrap();

        let config = args.player_config();
        assert_eq!(config.stream_type, StreamType::Media);
        assert_eq!(config.completion_timeout, Some(Duration::from_secs(30)));
        assert!(!config.check_local_files);
        assert_eq!(args.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_no_files_parses() {
        let args = Args::try_parse_from(["play-audio"]).unwrap();
        assert!(args.files.is_empty());
    }

    #[test]
    fn test_bad_stream_rejected() {
        assert!(Args::try_parse_from(["play-audio", "-s", "speaker", "a.ogg"]).is_err());
    }

    #[test]
    fn test_zero_timeout_fails_validation() {
        let args = Args::try_parse_from(["play-audio", "-t", "0", "a.ogg"]).unwrap();
        assert!(args.player_config().validate().is_err());
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
