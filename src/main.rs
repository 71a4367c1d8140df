//! Persona Quiz CLI
//!
//! Usage:
//!   persona-quiz                              # Interactive quiz
//!   persona-quiz --answers ABBAB              # Score a fixed answer string
//!   persona-quiz --catalog                    # List all result types
//!   persona-quiz --validate                   # Report data-authoring gaps
//!   persona-quiz --serve                      # HTTP API server
//!   persona-quiz --answers ABBAB --json       # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use persona_quiz::core::{self as quiz, ProfileStore, QuizOutcome, run_server};
use persona_quiz::types::{Answers, AxisReading, Choice, LoadError, QuizDefinition, QuizSession, ResultProfile};
use persona_quiz::{DEFAULT_DEFINITION_PATH, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "persona-quiz",
    version = VERSION,
    about = "Binary-choice personality quiz",
    long_about = "Persona Quiz asks a fixed set of two-option questions, adds up a\n\
                  score per personality axis, and maps the sign of every axis\n\
                  to a result type.\n\n\
                  Modes:\n  \
                  (default)      Interactive quiz on the terminal\n  \
                  --answers      Score a fixed answer string (one A/B per question)\n  \
                  --catalog      List every result type\n  \
                  --validate     Report gaps in the quiz definition\n  \
                  --serve        HTTP API server mode"
)]
struct Args {
    /// Quiz definition file (JSON)
    #[arg(short, long, default_value = DEFAULT_DEFINITION_PATH)]
    definition: String,

    /// Answer letters, one per question in order (e.g. ABBA)
    #[arg(short, long)]
    answers: Option<String>,

    /// List all distinct result types and exit
    #[arg(short, long)]
    catalog: bool,

    /// Report definition warnings; exit non-zero if there are any
    #[arg(long)]
    validate: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.serve);

    if args.no_color {
        colored::control::set_override(false);
    }

    let store = match ProfileStore::load(&args.definition) {
        Ok(store) => store,
        Err(e) => {
            print_load_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if args.serve {
        run_serve(&args, &store).await
    } else if args.validate {
        run_validate(&args, &store)
    } else if args.catalog {
        run_catalog(&args, store.definition())
    } else if let Some(ref letters) = args.answers {
        run_answers(letters, &args, store.definition())
    } else {
        run_interactive(store.definition())
    }
}

/// Log to stderr; RUST_LOG overrides the default level
fn init_tracing(serve: bool) {
    let default = if serve { "persona_quiz=info" } else { "persona_quiz=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Blocking error: nothing else is shown when the definition is unusable
fn print_load_error(err: &LoadError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    eprintln!("The quiz cannot start without a valid definition file.");
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Report definition warnings
fn run_validate(args: &Args, store: &ProfileStore) -> ExitCode {
    let warnings = store.validate();

    if args.json {
        if let Err(e) = serde_json::to_string_pretty(&warnings).map(|json| println!("{}", json)) {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    } else if warnings.is_empty() {
        println!("{} {}", "OK".green().bold(), args.definition);
    } else {
        for w in &warnings {
            println!("{} {} ({})", "WARN".yellow().bold(), w.code.description(), w.detail.dimmed());
        }
        println!();
        println!("{} warning(s) in {}", warnings.len(), args.definition);
    }

    if warnings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// List distinct result types
fn run_catalog(args: &Args, definition: &QuizDefinition) -> ExitCode {
    let profiles = quiz::list_distinct_results(definition);
    if args.json {
        return print_json(&profiles);
    }
    print_header(&definition.theme);
    print_catalog(&profiles);
    ExitCode::SUCCESS
}

/// Score a fixed answer string
fn run_answers(letters: &str, args: &Args, definition: &QuizDefinition) -> ExitCode {
    let total = definition.question_count();
    let answers = match Answers::from_letters(letters.trim()) {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };
    if !quiz::is_complete(&answers, total) {
        eprintln!(
            "{} expected {} answers, got {}",
            "Error:".red().bold(),
            total,
            answers.len()
        );
        return ExitCode::FAILURE;
    }

    let outcome = match quiz::compute_result(definition, &answers) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        return print_json(&outcome);
    }
    print_header(&definition.theme);
    print_result(&outcome);
    ExitCode::SUCCESS
}

/// Interactive quiz: answer, reveal, browse, optionally retake
fn run_interactive(definition: &QuizDefinition) -> ExitCode {
    let total = definition.question_count();
    let mut session = QuizSession::new();

    print_header(&definition.theme);
    println!("Answer each question with A or B. Type 'back' to revisit the");
    println!("previous question, 'quit' to exit.");
    println!();

    let mut cursor = 0;
    loop {
        while cursor < total {
            print_progress(session.answered(), total);
            print_question(definition, cursor, session.answers().get(cursor));

            let Some(line) = read_line("> ") else {
                return ExitCode::SUCCESS;
            };
            if is_quit(&line) {
                println!("\nSession ended. Answered: {} / {}", session.answered(), total);
                return ExitCode::SUCCESS;
            }
            if line.eq_ignore_ascii_case("back") {
                cursor = cursor.saturating_sub(1);
                continue;
            }
            match Choice::from_input(&line) {
                Some(choice) => {
                    if let Err(e) = quiz::record_answer(definition, &mut session, cursor, choice) {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                    cursor += 1;
                }
                None => println!("{}", "Please answer A or B.".yellow()),
            }
            println!();
        }

        print_progress(session.answered(), total);
        let Some(line) = read_line("All questions answered. Press Enter to see your result ('back' to revise): ") else {
            return ExitCode::SUCCESS;
        };
        if is_quit(&line) {
            return ExitCode::SUCCESS;
        }
        if line.eq_ignore_ascii_case("back") {
            cursor = total - 1;
            continue;
        }

        if let Err(e) = session.request_reveal(total) {
            println!("{}", e.to_string().yellow());
            continue;
        }
        let outcome = match quiz::compute_result(definition, session.answers()) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                return ExitCode::FAILURE;
            }
        };

        print_result(&outcome);
        println!("{}", "Other types".bold());
        println!();
        print_catalog(&quiz::list_distinct_results(definition));

        let Some(line) = read_line("Type 'again' to retake the quiz, anything else to exit: ") else {
            return ExitCode::SUCCESS;
        };
        if !line.eq_ignore_ascii_case("again") {
            return ExitCode::SUCCESS;
        }
        quiz::reset(&mut session);
        cursor = 0;
        println!();
    }
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Prompt and read one trimmed line; `None` on EOF or read error
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Print header
fn print_header(theme: &str) {
    println!("{}", "========================================".bold());
    println!("  {}  {}", theme.bold(), format!("v{}", VERSION).dimmed());
    println!("{}", "========================================".bold());
    println!();
}

fn print_progress(answered: usize, total: usize) {
    const WIDTH: usize = 30;
    let filled = if total == 0 { WIDTH } else { (answered * WIDTH / total).min(WIDTH) };
    println!(
        "{}{} {}",
        "█".repeat(filled).cyan(),
        "░".repeat(WIDTH - filled).dimmed(),
        format!("Answered: {} / {}", answered, total).dimmed()
    );
}

fn print_question(definition: &QuizDefinition, index: usize, current: Option<Choice>) {
    let question = &definition.questions[index];
    let (first, second) = question.displayed_options();
    println!("{}", format!("Q{}. {}", index + 1, question.text).bold());
    for (choice, text) in [(Choice::A, first), (Choice::B, second)] {
        let marker = if current == Some(choice) { "*" } else { " " };
        println!(" {} {}: {}", marker, choice, text);
    }
}

/// Result card: name, subtitle, tags, gauges, description, manual, matches
fn print_result(outcome: &QuizOutcome) {
    let profile = &outcome.profile;
    println!();
    println!("{}", "DIAGNOSIS RESULT".dimmed());
    println!("{}", profile.name.bold());
    println!("{}", profile.subtitle);
    print_tags(profile);
    println!();
    for reading in &outcome.gauges {
        print_gauge(reading);
    }
    println!();
    println!("{}", profile.desc);
    println!();
    println!("{}", "Manual".bold());
    println!("{}", profile.manual);
    println!();
    println!("BEST: {}    WORST: {}", profile.good_match.bold(), profile.bad_match.bold());
    println!();
}

fn print_tags(profile: &ResultProfile) {
    let tags = profile.display_tags();
    if !tags.is_empty() {
        println!("{}", tags.join(" ").cyan());
    }
}

/// One axis meter; the leaning side's label is emphasised
fn print_gauge(reading: &AxisReading) {
    const WIDTH: usize = 21;
    let gauge = reading.gauge;
    let pos = (gauge.percent as usize * (WIDTH - 1)) / 100;
    let track: String = (0..WIDTH).map(|i| if i == pos { '●' } else { '─' }).collect();

    let left = if gauge.lean_left {
        reading.label_left.bold()
    } else {
        reading.label_left.dimmed()
    };
    let right = if gauge.lean_right {
        reading.label_right.bold()
    } else {
        reading.label_right.dimmed()
    };
    println!("{} {} {} {}", left, track, right, format!("{}%", gauge.percent).dimmed());
}

/// Distinct result types, one block each
fn print_catalog(profiles: &[&ResultProfile]) {
    for profile in profiles {
        println!("{} {}", format!("【{}】", profile.name).bold(), profile.subtitle.dimmed());
        print_tags(profile);
        println!("{}", profile.desc);
        println!("{} {}", "Manual:".dimmed(), profile.manual);
        println!();
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args, store: &ProfileStore) -> ExitCode {
    let warnings = store.validate();
    println!();
    println!("{}", "Persona Quiz API Server".bold());
    println!("Version: {}", VERSION);
    if !warnings.is_empty() {
        println!("{}", format!("{} definition warning(s), see log", warnings.len()).yellow());
    }
    println!();

    if let Err(e) = run_server(&args.addr, store.shared()).await {
        eprintln!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
