// Runtime settings: defaults overridden by command line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::algorithms::Algorithm;
use crate::playback::controller::DEFAULT_MAX_STEPS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Slug or `/algorithm/<slug>` route to open on start
    pub startup_algorithm: Option<String>,
    pub list_only: bool,
    /// Overrides every algorithm's own pacing when set
    pub interval: Option<Duration>,
    pub python: String,
    pub seed: u64,
    pub max_steps: usize,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            startup_algorithm: None,
            list_only: false,
            interval: None,
            python: "python3".to_string(),
            seed: 42,
            max_steps: DEFAULT_MAX_STEPS,
            log_dir: None,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn interval_for(&self, algorithm: Algorithm) -> Duration {
        self.interval
            .unwrap_or_else(|| Duration::from_millis(algorithm.interval_ms()))
    }
}

pub fn cli() -> Command {
    Command::new("algotrace")
        .about("algotrace - step through classic algorithms in the terminal")
        .args([
            // NOTE: arguments
            Arg::new("algorithm")
                .action(ArgAction::Set)
                .help("algorithm slug (or /algorithm/<slug> route) to open on startup"),
            // NOTE: options
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("print the algorithm catalog and exit"),
            Arg::new("interval")
                .long("interval")
                .value_name("MS")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64).range(1..))
                .help("milliseconds between animation steps for every algorithm"),
            Arg::new("python")
                .long("python")
                .value_name("PROGRAM")
                .action(ArgAction::Set)
                .help("interpreter used to run reference code"),
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("seed for TSP city placement"),
            Arg::new("max-steps")
                .long("max-steps")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("maximum number of steps kept per run"),
            Arg::new("log-dir")
                .long("log-dir")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("directory for log files"),
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("log at debug level"),
        ])
}

pub fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.startup_algorithm = args.get_one::<String>("algorithm").cloned();
    settings.list_only = args.get_flag("list");
    settings.verbose = args.get_flag("verbose");
    if let Some(ms) = args.get_one::<u64>("interval") {
        settings.interval = Some(Duration::from_millis(*ms));
    }
    if let Some(python) = args.get_one::<String>("python") {
        settings.python = python.clone();
    }
    if let Some(seed) = args.get_one::<u64>("seed") {
        settings.seed = *seed;
    }
    if let Some(max_steps) = args.get_one::<usize>("max-steps") {
        settings.max_steps = *max_steps;
    }
    if let Some(dir) = args.get_one::<PathBuf>("log-dir") {
        settings.log_dir = Some(dir.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        let mut settings = Settings::default();
        let matches = cli().get_matches_from(std::iter::once("algotrace").chain(args.iter().copied()));
        map_args_to_settings(&matches, &mut settings);
        settings
    }

    #[test]
    fn test_defaults_without_args() {
        assert_eq!(parse(&[]), Settings::default());
    }

    #[test]
    fn test_options_override_defaults() {
        let settings = parse(&[
            "/algorithm/round-robin",
            "--interval",
            "250",
            "--python",
            "python3.12",
            "--seed",
            "7",
            "--max-steps",
            "100",
            "-v",
        ]);
        assert_eq!(settings.startup_algorithm.as_deref(), Some("/algorithm/round-robin"));
        assert_eq!(settings.interval, Some(Duration::from_millis(250)));
        assert_eq!(settings.python, "python3.12");
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.max_steps, 100);
        assert!(settings.verbose);
        assert_eq!(
            settings.interval_for(Algorithm::Fcfs),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_interval_defaults_to_algorithm_pacing() {
        let settings = Settings::default();
        assert_eq!(
            settings.interval_for(Algorithm::TspExact),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(cli()
            .try_get_matches_from(["algotrace", "--interval", "0"])
            .is_err());
    }
}
