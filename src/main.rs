//! vmode CLI
//!
//! Usage:
//!   vmode --text "your text here"                 # Single detection
//!   vmode --text "..." --lang de --json           # JSON output
//!   vmode --interactive                           # One session, SPRT per line
//!   vmode --calibrate cases.json --output out.json
//!   vmode --serve                                 # HTTP API server

use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use vmode::core::{load_cases, run_server, save_calibration, Detector, EvidenceAccumulator, ThresholdCalibrator};
use vmode::types::{CalibrationResult, Language, StabilityLevel, TurnEvidence, TurnOutput};
use vmode::{EngineConfig, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "vmode",
    version = VERSION,
    about = "Vertical dimension detection with sequential evidence and calibrated gating",
    long_about = "vmode scores conversational turns on five vertical dimensions\n\
                  (SOMATIC, FUNCTIONAL, RELATIONAL, EXISTENTIAL, TRANSCENDENT),\n\
                  flags V-mode and somatic emergencies, accumulates existential\n\
                  evidence across turns with an SPRT, and calibrates the threshold\n\
                  used to skip secondary checks.\n\n\
                  Modes:\n  \
                  --text         Single detection\n  \
                  --interactive  One session, one line per turn\n  \
                  --calibrate    Calibrate a threshold from labeled cases\n  \
                  --serve        HTTP API server"
)]
struct Args {
    /// Text to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Language code (en, de, nl; unknown codes fall back to en)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Interactive mode - read turns from stdin into one session
    #[arg(short, long)]
    interactive: bool,

    /// Calibrate from a JSON array of {text, language, label} cases
    #[arg(short, long, value_name = "CASES")]
    calibrate: Option<PathBuf>,

    /// Where to write the calibration record (default: config calibration_path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use ceil(q·n) instead of ceil(q·(n+1))
    #[arg(long)]
    no_correction: bool,

    /// Override the target recall for calibration
    #[arg(long)]
    target_recall: Option<f64>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// JSON config file (partial files override only the named fields)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show per-dimension breakdown and debug logs
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args);
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(!args.no_color)
        .init();
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    if args.serve {
        run_server(&args.addr, config).await
    } else if let Some(cases) = &args.calibrate {
        run_calibrate(cases, &args, config)
    } else if args.interactive {
        run_interactive(&args, config)
    } else if let Some(text) = &args.text {
        run_single(text, &args)
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args, config)
    }
}

/// Run single text detection
fn run_single(text: &str, args: &Args) -> Result<(), Box<dyn Error>> {
    let state = Detector::new().detect(text, &args.lang);
    let output = TurnOutput::new(state, None);
    print_turn(&output, args)
}

/// Read turns from stdin and accumulate them into one session
fn run_interactive(args: &Args, config: EngineConfig) -> Result<(), Box<dyn Error>> {
    const SESSION: &str = "interactive";

    let detector = Detector::new();
    let accumulator = EvidenceAccumulator::new(config.accumulator)?;

    print_header(Language::resolve(&args.lang));
    println!("One line per turn. 'reset' starts a new session, 'quit' exits.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let decision = accumulator
            .get_state(SESSION)
            .map(|s| s.decision.to_string())
            .unwrap_or_else(|| "NEW".to_string());
        print!("[{}] > ", decision);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.eq_ignore_ascii_case("reset") {
            accumulator.reset_session(SESSION);
            println!("session reset");
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let state = detector.detect(line, &args.lang);
        let evidence = TurnEvidence::new(line, state.clone());
        let session = accumulator.accumulate(SESSION, &evidence);
        print_turn(&TurnOutput::new(state, Some(session)), args)?;
    }

    if let Some(session) = accumulator.get_state(SESSION) {
        println!(
            "\nSession ended. Turns: {} | decision: {} ({})",
            session.turns,
            session.decision,
            session.decision.label()
        );
    }
    Ok(())
}

/// Calibrate from labeled cases and persist the record
fn run_calibrate(cases_path: &Path, args: &Args, mut config: EngineConfig) -> Result<(), Box<dyn Error>> {
    if args.no_correction {
        config.calibrator.finite_sample_correction = false;
    }
    if let Some(target) = args.target_recall {
        config.calibrator.target_recall = target;
    }

    let cases = load_cases(cases_path)?;
    let calibrator = ThresholdCalibrator::new(config.calibrator)?;
    let result = calibrator.calibrate(&cases);
    let output = args.output.as_deref().unwrap_or(config.calibration_path.as_path());
    let written = save_calibration(&result, Some(output))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_calibration(&result, &written);
    }
    Ok(())
}

fn print_turn(output: &TurnOutput, args: &Args) -> Result<(), Box<dyn Error>> {
    if args.json {
        println!("{}", serde_json::to_string(output)?);
    } else if args.verbose {
        print!("{}", output.to_verbose_string(!args.no_color));
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
    Ok(())
}

fn print_header(language: Language) {
    println!("{}", "========================================".bold());
    println!("{}", format!("  vmode v{} - interactive ({})", VERSION, language).bold());
    println!("{}", "========================================".bold());
    println!();
}

fn print_calibration(result: &CalibrationResult, path: &Path) {
    println!("{} {:.4}", "threshold:".bold(), result.threshold);
    println!(
        "target recall: {:.3} (alpha {:.3}, correction {})",
        result.target_recall, result.alpha, result.finite_sample_correction
    );
    println!(
        "cases: {} ({} positive, {} negative)",
        result.case_count, result.n_positives, result.n_negatives
    );
    println!("empirical recall: {:.3}", result.empirical_recall);
    println!("estimated skip rate: {:.3}", result.estimated_skip_rate);
    if let Some(warning) = &result.stability_warning {
        let line = format!("warning: {}", warning);
        match result.stability {
            StabilityLevel::Critical => println!("{}", line.red().bold()),
            _ => println!("{}", line.yellow()),
        }
    }
    println!("saved to {}", path.display());
}
