//! CallGuard CLI
//!
//! Usage:
//!   callguard --text "Caller: ..."          # Assess one transcript
//!   callguard --file a.txt b.txt            # Assess files in parallel
//!   callguard --demo                        # Built-in suspicious call
//!   callguard --demo --analysis saved.json  # Replay saved classifier output, no network
//!   callguard --serve                       # HTTP API server
//!   cat call.txt | callguard                # Read transcript from stdin

use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use callguard::config::{ClassifierConfig, ScoringPolicy};
use callguard::core::{run_server, Classifier, FixedClassifier, OpenAiClassifier, Pipeline};
use callguard::types::Assessment;
use callguard::{
    Error, Result, ALERT_THRESHOLD, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, VERSION,
};

const DEMO_TRANSCRIPT: &str = include_str!("../demos/suspicious_call.txt");

#[derive(Parser, Debug)]
#[command(
    name = "callguard",
    version = VERSION,
    about = "CallGuard - Flag emotional manipulation in contact-center calls",
    long_about = "CallGuard sends a call transcript to a language model that classifies\n\
                  emotional manipulation signals, scores the result 0-100 and raises an\n\
                  agent alert when the score reaches the threshold.\n\n\
                  Score = overall intensity x 50 + 12 per distinct red flag, capped at 100.\n\
                  Intensity alone never alerts; flags are required.\n\n\
                  Requires OPENAI_API_KEY (environment or .env) unless --analysis is used."
)]
struct Args {
    /// Transcript text to assess
    #[arg(short, long)]
    text: Option<String>,

    /// Transcript files to assess (processed in parallel)
    #[arg(short, long, num_args = 1..)]
    file: Vec<PathBuf>,

    /// Assess the built-in suspicious call
    #[arg(long)]
    demo: bool,

    /// Replay a saved classifier response (JSON) instead of calling the model
    #[arg(long)]
    analysis: Option<PathBuf>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Inclusive alert threshold
    #[arg(long, default_value_t = ALERT_THRESHOLD)]
    threshold: u32,

    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Classifier request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show trajectory, indicators and evidence check
    #[arg(short, long)]
    verbose: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if args.no_color {
        colored::control::set_override(false);
    }

    let code = match run(&args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            match e {
                Error::Config(_) => 2,
                _ => 1,
            }
        }
    };
    std::process::exit(code);
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns the process exit code
async fn run(args: &Args) -> Result<i32> {
    let policy = ScoringPolicy::default().with_threshold(args.threshold);
    policy.validate()?;

    // Credential check happens before any input is read
    let classifier = build_classifier(args)?;
    let pipeline = Pipeline::with_policy(classifier, policy);

    if args.serve {
        if let Err(e) = run_server(&args.addr, pipeline).await {
            eprintln!("Server error: {}", e);
            return Ok(1);
        }
        return Ok(0);
    }

    if !args.file.is_empty() {
        return Ok(run_batch(&pipeline, &args.file, args).await);
    }

    let transcript = read_transcript(args)?;
    let assessment = pipeline.assess(&transcript).await?;
    print_assessment(&assessment, args, None);
    Ok(0)
}

fn build_classifier(args: &Args) -> Result<Arc<dyn Classifier>> {
    if let Some(path) = &args.analysis {
        let json = std::fs::read_to_string(path)?;
        return Ok(Arc::new(FixedClassifier::from_json(&json)?));
    }

    let config = ClassifierConfig::from_env()?
        .with_model(args.model.as_str())
        .with_base_url(args.base_url.as_str())
        .with_timeout(std::time::Duration::from_secs(args.timeout_secs));
    Ok(Arc::new(OpenAiClassifier::new(config)?))
}

fn read_transcript(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if args.demo {
        return Ok(DEMO_TRANSCRIPT.to_string());
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading transcript from stdin (Ctrl-D to finish)...");
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Assess every file concurrently; exit code 1 if any failed
async fn run_batch(pipeline: &Pipeline, files: &[PathBuf], args: &Args) -> i32 {
    let jobs = files.iter().map(|path| {
        let pipeline = pipeline.clone();
        async move {
            let text = tokio::fs::read_to_string(path).await.map_err(Error::from)?;
            pipeline.assess(&text).await
        }
    });
    let results = futures_util::future::join_all(jobs).await;

    let mut code = 0;
    for (path, result) in files.iter().zip(results) {
        let label = path.display().to_string();
        match result {
            Ok(assessment) => print_assessment(&assessment, args, Some(&label)),
            Err(e) => {
                eprintln!("{} {}: {}", "error:".red().bold(), label, e);
                code = 1;
            }
        }
    }
    code
}

fn print_assessment(assessment: &Assessment, args: &Args, label: Option<&str>) {
    if args.json {
        match serde_json::to_string_pretty(assessment) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
        return;
    }

    if let Some(label) = label {
        println!("{}", format!("== {}", label).bold());
    }

    if args.verbose {
        print_verbose(assessment);
    } else if args.no_color {
        println!("{}", assessment.to_parseable_string());
    } else {
        println!("{}", assessment.to_terminal_string());
    }
}

fn print_verbose(assessment: &Assessment) {
    let analysis = &assessment.analysis;
    let rule = "─".repeat(48);

    println!("┌{}", rule);
    println!(
        "│ transcript {} | {} turns",
        assessment.transcript_digest.dimmed(),
        assessment.turn_count
    );
    println!(
        "│ trajectory: {} {} | overall intensity: {:.0}%",
        analysis.emotional_trajectory,
        analysis.emotional_trajectory.arrow(),
        analysis.overall_emotional_intensity * 100.0
    );
    println!("├{}", rule);

    if analysis.emotions_detected.is_empty() {
        println!("│ emotions: none");
    }
    for signal in &analysis.emotions_detected {
        println!("│ {}", signal.summary());
        for span in &signal.indicators {
            println!("│   {}", format!("\"{}\"", span).dimmed());
        }
    }

    let flags = analysis.distinct_flags();
    if flags.is_empty() {
        println!("│ flags: none");
    } else {
        let names: Vec<&str> = flags.iter().map(|f| f.as_str()).collect();
        println!("│ flags: {}", names.join(", ").yellow());
    }

    let evidence = &assessment.evidence;
    println!(
        "│ evidence: {}/{} indicators found in caller speech",
        evidence.grounded, evidence.total
    );
    for span in &evidence.ungrounded {
        println!("│   {} \"{}\"", "not found:".yellow(), span);
    }

    println!("├{}", rule);
    for line in assessment.to_parseable_string().lines() {
        println!("│ {}", assessment.level.paint(line));
    }
    println!("└{}", rule);
}
