//! Psyche: personality questionnaire CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use psyche::config::{
    load_config, starter_config, Config, CONFIG_FILENAME, MAX_BAR_WIDTH, MIN_BAR_WIDTH,
};
use psyche::interrupt::{install_interrupt_handler, CANCEL_MESSAGE};
use psyche::questionnaire::QUESTIONS;
use psyche::reporter::console::DEFAULT_BAR_WIDTH;
use psyche::reporter::{ConsoleReporter, JsonReporter, OutputFormat, TextReporter};
use psyche::scoring::{validate_responses, Scorer};
use psyche::session::{parse_answer_list, Session, SessionOutcome};
use psyche::{BaseType, Likert};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Psyche: discover your personality type in 54 statements
#[derive(Parser, Debug)]
#[command(name = "psyche")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Score a comma- or space-separated list of 54 ratings instead of prompting
    #[arg(long, value_name = "RATINGS")]
    answers: Option<String>,

    /// Output format as JSON
    #[arg(long, short, conflicts_with_all = ["text", "format"])]
    json: bool,

    /// Output the plain-text export
    #[arg(long, conflicts_with = "format")]
    text: bool,

    /// Output format (default: console, or "format" from the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Quiet mode (print only the type code)
    #[arg(long, short)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Respondent name for the text export header
    #[arg(long)]
    name: Option<String>,

    /// Path to config file (default: search .psycherc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the questionnaire statements with their dimension and polarity
    Questions {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Describe the sixteen personality types, or one of them
    Types {
        /// Type code such as INTJ or ENFP-T
        code: Option<String>,

        /// Output as JSON
        #[arg(long, short)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Create .psycherc.json with sensible defaults
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Default output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Width of a full strength bar (10-100)
        #[arg(long)]
        bar_width: Option<u8>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Questions { json, no_color } => run_questions(json, no_color),
            Commands::Types {
                code,
                json,
                no_color,
            } => run_types(code.as_deref(), json, no_color),
            Commands::Init {
                dir,
                format,
                bar_width,
            } => run_init(dir.as_deref(), format, bar_width),
        };
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let (config, config_path) = load_config(&cwd, args.config.as_deref())?;
    if let Some(ref path) = config_path {
        if !args.quiet {
            eprintln!("{}: Using config {}", "Info".blue(), path.display());
        }
    }

    let cli_format = if args.json {
        Some(OutputFormat::Json)
    } else if args.text {
        Some(OutputFormat::Text)
    } else {
        args.format
    };
    let config = config.merge_with_cli(cli_format, args.no_color, args.name.clone());
    if !config.use_colors() {
        colored::control::set_override(false);
    }

    let responses = match args.answers {
        Some(ref list) => answers_from_list(list)?,
        None => match ask_interactively(&config, args.quiet)? {
            SessionOutcome::Completed(responses) => responses,
            SessionOutcome::Cancelled => {
                eprintln!("\n\n{}", CANCEL_MESSAGE.yellow());
                return Ok(ExitCode::SUCCESS);
            }
        },
    };

    let assessment = Scorer::default()
        .assess(&responses)
        .context("Failed to score responses")?;

    match config.output_format() {
        OutputFormat::Json => {
            println!("{}", JsonReporter::new().pretty().report(&assessment));
        }
        OutputFormat::Text => {
            let mut reporter = TextReporter::new();
            if let Some(ref name) = config.name {
                reporter = reporter.respondent(name.as_str());
            }
            print!("{}", reporter.report(&assessment));
        }
        OutputFormat::Console => {
            let mut reporter = ConsoleReporter::new().bar_width(config.bar_width());
            if !config.use_colors() {
                reporter = reporter.without_colors();
            }
            if args.quiet {
                reporter.report_quiet(&assessment);
            } else {
                reporter.report(&assessment);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Parse and validate `--answers`
fn answers_from_list(list: &str) -> Result<Vec<Likert>> {
    let raw = parse_answer_list(list).context("Invalid --answers")?;
    validate_responses(&raw, QUESTIONS.len()).context("Invalid --answers")
}

/// Run the prompt loop on stdin. Prompts go to stdout for the console
/// report and to stderr otherwise, keeping machine-readable stdout clean.
fn ask_interactively(config: &Config, quiet: bool) -> Result<SessionOutcome> {
    if let Err(e) = install_interrupt_handler() {
        eprintln!(
            "{}: Ctrl+C handler unavailable: {}",
            "Warning".yellow(),
            e
        );
    }

    let prompts: Box<dyn Write> = if config.output_format() == OutputFormat::Console && !quiet {
        Box::new(io::stdout())
    } else {
        Box::new(io::stderr())
    };

    let stdin = io::stdin();
    let mut session = Session::new(&QUESTIONS, stdin.lock(), prompts);
    session.welcome().context("Failed to write prompt")?;
    session.run().context("Failed to read answers")
}

/// Console reporter for the listing subcommands
fn listing_reporter(no_color: bool) -> ConsoleReporter {
    if no_color {
        colored::control::set_override(false);
        ConsoleReporter::new().without_colors()
    } else {
        ConsoleReporter::new()
    }
}

fn run_questions(json: bool, no_color: bool) -> Result<ExitCode> {
    if json {
        println!("{}", JsonReporter::new().pretty().questions(&QUESTIONS));
    } else {
        print!("{}", listing_reporter(no_color).render_questions(&QUESTIONS));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_types(code: Option<&str>, json: bool, no_color: bool) -> Result<ExitCode> {
    let types = match code {
        Some(code) => vec![code.parse::<BaseType>()?],
        None => BaseType::ALL.to_vec(),
    };
    if json {
        println!("{}", JsonReporter::new().pretty().types(&types));
    } else {
        print!("{}", listing_reporter(no_color).render_types(&types));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(
    dir: Option<&Path>,
    format: Option<OutputFormat>,
    bar_width: Option<u8>,
) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let bar_width = bar_width.unwrap_or(DEFAULT_BAR_WIDTH as u8);
    if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&bar_width) {
        anyhow::bail!(
            "--bar-width must be between {} and {}",
            MIN_BAR_WIDTH,
            MAX_BAR_WIDTH
        );
    }
    let format = format.unwrap_or_default();

    std::fs::write(&config_path, starter_config(format, bar_width))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with format={}, barWidth={}",
        "Done".green().bold(),
        config_path.display(),
        format,
        bar_width
    );
    Ok(ExitCode::SUCCESS)
}
