#![warn(clippy::all, rust_2018_idioms)]

// native only: computes a figure and prints it as RON for an external renderer.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::{path::PathBuf, process::ExitCode};

    use clap::{Parser, Subcommand};

    use planet_dance::{
        Correspondence, Parameters, Settings,
        dance,
        figure::{
            ChordSet, ChordStyle, DanceAndEpicycloid, Knot, KnotAndSampleDance, KnotSample,
            checked_count, knot_diagram,
        },
        settings::pretty_ron,
    };

    #[derive(Parser)]
    #[command(name = "planet-dance")]
    #[command(about = "Planet dances, epicycloids and modular multiplication tables as plain data")]
    #[command(version)]
    struct Cli {
        /// RON file with settings, defaults are used if it can not be read
        #[arg(short, long)]
        settings: Option<PathBuf>,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// All four pictures linked by sam = |alpha * mult - beta|
        Correspondence {
            #[arg(allow_hyphen_values = true)]
            alpha: i32,
            #[arg(allow_hyphen_values = true)]
            beta: i32,
            #[arg(allow_hyphen_values = true)]
            mult: i32,
        },

        /// Planet dance of (alpha, beta) next to its epicycloid
        Dance {
            #[arg(allow_hyphen_values = true)]
            alpha: i64,
            #[arg(allow_hyphen_values = true)]
            beta: i64,

            /// Overrides the sample count of the settings
            #[arg(long)]
            samples: Option<usize>,
        },

        /// Torus knot (alpha, beta) and planet dance, both sampled at the same rate
        KnotSample {
            #[arg(allow_hyphen_values = true)]
            alpha: i64,
            #[arg(allow_hyphen_values = true)]
            beta: i64,
            samples: u64,
        },

        /// Several knots on one torus, given as alpha:beta (options go before the knots)
        Knots {
            #[arg(required = true, allow_hyphen_values = true, value_parser = parse_knot)]
            knots: Vec<Knot>,

            /// Sample one knot, given as index:count
            #[arg(long, value_parser = parse_sample)]
            sample: Option<KnotSample>,
        },

        /// Modular multiplication table MMT(modulus, mult)
        Mmt {
            modulus: u64,
            #[arg(allow_hyphen_values = true)]
            mult: i64,
        },

        /// Only print sam = |alpha * mult - beta|
        Sam {
            #[arg(allow_hyphen_values = true)]
            alpha: i32,
            #[arg(allow_hyphen_values = true)]
            beta: i32,
            #[arg(allow_hyphen_values = true)]
            mult: i32,
        },

        /// Write the default settings to a file, to be edited
        WriteSettings { path: PathBuf },
    }

    fn parse_pair<A: std::str::FromStr, B: std::str::FromStr>(s: &str) -> Result<(A, B), String> {
        let (fst, snd) = s
            .split_once(':')
            .ok_or_else(|| format!("expected two numbers separated by ':', got {s:?}"))?;
        let fst = fst.trim().parse().map_err(|_| format!("not a number: {fst:?}"))?;
        let snd = snd.trim().parse().map_err(|_| format!("not a number: {snd:?}"))?;
        Ok((fst, snd))
    }

    fn parse_knot(s: &str) -> Result<Knot, String> {
        parse_pair(s).map(|(alpha, beta)| Knot::new(alpha, beta))
    }

    fn parse_sample(s: &str) -> Result<KnotSample, String> {
        parse_pair(s).map(|(knot, count)| KnotSample { knot, count })
    }

    fn settings_from(path: Option<&PathBuf>) -> Settings {
        match path {
            Some(path) => Settings::load_or_default(path),
            None => Settings::default(),
        }
    }

    fn print<T: serde::Serialize>(value: &T) -> ExitCode {
        match pretty_ron(value) {
            Ok(as_str) => {
                println!("{as_str}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("could not serialize result: {e}");
                ExitCode::FAILURE
            }
        }
    }

    fn print_or_report<T: serde::Serialize>(result: planet_dance::DanceResult<T>) -> ExitCode {
        match result {
            Ok(value) => print(&value),
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        }
    }

    pub fn run() -> ExitCode {
        let cli = Cli::parse();
        let mut settings = settings_from(cli.settings.as_ref());

        match cli.command {
            Commands::Correspondence { alpha, beta, mult } => {
                let params = Parameters { alpha, beta, multiplier: mult };
                print_or_report(Correspondence::new(params, &settings))
            }
            Commands::Dance { alpha, beta, samples } => {
                if let Some(samples) = samples {
                    settings.dance_samples = samples;
                }
                print_or_report(DanceAndEpicycloid::new(alpha, beta, &settings))
            }
            Commands::KnotSample { alpha, beta, samples } => {
                print_or_report(KnotAndSampleDance::new(alpha, beta, samples, &settings))
            }
            Commands::Knots { knots, sample } => {
                print_or_report(knot_diagram(&knots, sample, &settings))
            }
            Commands::Mmt { modulus, mult } => {
                let table = checked_count(modulus).map(|modulus| {
                    let chords = dance::mod_multiplication_chords(modulus, mult);
                    ChordSet::new(chords, ChordStyle::Segment, &settings)
                });
                print_or_report(table)
            }
            Commands::Sam { alpha, beta, mult } => {
                println!("{}", dance::sam(alpha, beta, mult));
                ExitCode::SUCCESS
            }
            Commands::WriteSettings { path } => match settings.store(&path) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("{e}");
                    ExitCode::FAILURE
                }
            },
        }
    }

}
