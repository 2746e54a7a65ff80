use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use bijganit::config::load_config;
use bijganit::{respond, search_knowledge_base, solve_with_config, square, SolverError};

#[derive(Parser)]
#[command(
  name = "bijganit",
  version,
  about = "Step-by-step Bengali algebra solver"
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Print results as JSON
  #[arg(long, global = true)]
  json: bool,

  /// Log solver decisions to stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to a TOML config file
  #[arg(long, global = true)]
  config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
  /// Solve an equation or algebra problem
  Solve {
    /// Problem text, e.g. "x + 7 = 15" or "HCF x^2-4, x+2"
    problem: String,
  },
  /// Square a number, variable or parenthesized expression
  Square {
    /// Expression to square, e.g. "(x+3)"
    expression: String,
  },
  /// Search the knowledge base
  Search {
    /// Search query
    query: String,
  },
  /// Send one message to the chat assistant
  Chat {
    /// Chat message
    message: String,
  },
}

fn init_tracing(verbose: bool) {
  let level = if verbose {
    LevelFilter::DEBUG
  } else {
    LevelFilter::WARN
  };
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy(),
    )
    .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let rendered =
    serde_json::to_string_pretty(value).context("serializing output")?;
  println!("{rendered}");
  Ok(())
}

fn report(err: &SolverError) -> ExitCode {
  eprintln!("ত্রুটি: {err}");
  eprintln!("{}", err.hint());
  ExitCode::FAILURE
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);
  let config = load_config(cli.config.as_deref())?;

  match cli.command {
    Commands::Solve { problem } => {
      let solution = match solve_with_config(&problem, &config.solver) {
        Ok(solution) => solution,
        Err(err) => return Ok(report(&err)),
      };
      if cli.json {
        print_json(&solution)?;
      } else {
        println!("{}", solution.problem_type.title());
        println!();
        for step in &solution.steps {
          println!("{step}");
        }
        println!();
        println!("উত্তর: {}", solution.solution);
      }
    }
    Commands::Square { expression } => {
      let squared = match square(&expression) {
        Ok(squared) => squared,
        Err(err) => return Ok(report(&err)),
      };
      if cli.json {
        print_json(&squared)?;
      } else {
        println!("সূত্র: {}", squared.formula);
        for step in &squared.steps {
          println!("{step}");
        }
        println!("ফলাফল: {}", squared.result);
      }
    }
    Commands::Search { query } => {
      let entries = search_knowledge_base(&query);
      if cli.json {
        print_json(&entries)?;
      } else if entries.is_empty() {
        println!("কোনো তথ্য পাওয়া যায়নি: {query}");
      } else {
        for entry in entries {
          println!("📚 {} (স্তর {})", entry.topic, entry.difficulty);
          println!("{}", entry.content);
          println!("উদাহরণ: {}", entry.examples.join(", "));
          println!();
        }
      }
    }
    Commands::Chat { message } => {
      let reply = respond(&message, &config);
      if cli.json {
        print_json(&reply)?;
      } else {
        println!("{}", reply.content);
      }
    }
  }

  Ok(ExitCode::SUCCESS)
}
