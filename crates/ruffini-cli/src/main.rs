mod catalog;
mod server;
mod tutor;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ruffini_core::{CalcError, calculate, format_number, parse};

#[derive(Parser)]
#[command(name = "ruffini", about = "Synthetic division (Ruffini's rule) calculator")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Divide a polynomial by (x - root)
    Div {
        /// Polynomial in standard form, e.g. "x^3 + 2x^2 - 5x + 6"
        polynomial: String,

        /// The r of the divisor (x - r)
        #[arg(allow_negative_numbers = true)]
        root: f64,

        /// Print the result as JSON instead of a tableau
        #[arg(long)]
        json: bool,

        /// Walk through every step in prose
        #[arg(long)]
        explain: bool,
    },

    /// Parse a polynomial and report its canonical form
    Check {
        /// Polynomial in standard form
        polynomial: String,
    },

    /// List the built-in worked examples
    Examples {
        /// Run every example instead of just listing them
        #[arg(long)]
        run: bool,
    },

    /// Interactive prompt: polynomial, then root, until quit
    Repl,

    /// Start the HTTP API server
    Serve {
        /// Address to bind, e.g. 127.0.0.1:5000
        #[arg(long)]
        bind: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Div {
            polynomial,
            root,
            json,
            explain,
        } => cmd_div(polynomial, *root, *json, *explain),
        Commands::Check { polynomial } => cmd_check(polynomial),
        Commands::Examples { run } => cmd_examples(*run),
        Commands::Repl => cmd_repl(),
        Commands::Serve { bind } => cmd_serve(bind.as_deref()).await,
    }
}

fn cmd_div(polynomial: &str, root: f64, json: bool, explain: bool) -> Result<()> {
    let calc = calculate(polynomial, root).map_err(|error| {
        eprintln!("{}", tutor::error_help(&error, polynomial));
        anyhow::anyhow!("cannot divide: {error}")
    })?;

    if json {
        let body = serde_json::to_string_pretty(&calc).context("failed to serialize result")?;
        println!("{body}");
        return Ok(());
    }

    println!("{}", tutor::tableau(&calc));
    println!();
    if explain {
        println!("{}", tutor::explain_calculation(&calc));
        return Ok(());
    }
    println!("quotient:  {}", calc.quotient);
    println!("remainder: {}", format_number(calc.remainder));
    if calc.remainder == 0.0 {
        println!("(x - {}) divides exactly", format_number(root));
    }
    Ok(())
}

fn cmd_check(polynomial: &str) -> Result<()> {
    let poly = parse(polynomial).map_err(|error| {
        let error = CalcError::from(error);
        eprintln!("{}", tutor::error_help(&error, polynomial));
        anyhow::anyhow!("invalid polynomial: {error}")
    })?;

    println!("canonical:    {poly}");
    println!("degree:       {}", poly.degree().unwrap_or(0));
    println!("coefficients: [{}]", tutor::join_numbers(poly.coefficients()));
    println!("{}", tutor::describe(&poly));
    Ok(())
}

fn cmd_examples(run: bool) -> Result<()> {
    for (index, example) in catalog::EXAMPLES.iter().enumerate() {
        println!("{}. {} [{}]", index + 1, example.title, example.difficulty);
        println!(
            "   {} ÷ (x - {})",
            example.polynomial,
            format_number(example.root)
        );
        println!("   {}", example.description);
        if run {
            let calc = calculate(example.polynomial, example.root)
                .with_context(|| format!("example '{}' failed", example.title))?;
            for line in tutor::tableau(&calc).lines() {
                println!("   {line}");
            }
            println!(
                "   quotient: {}, remainder: {}",
                calc.quotient,
                format_number(calc.remainder)
            );
        }
        println!();
    }
    Ok(())
}

fn cmd_repl() -> Result<()> {
    println!("Ruffini calculator. Enter a polynomial, then a root; 'quit' exits.");
    println!("Prefix a line with ? to ask the tutor a question.");
    loop {
        let Some(polynomial) = prompt("polynomial> ")? else {
            break;
        };
        if polynomial.is_empty() {
            continue;
        }
        if is_exit(&polynomial) {
            break;
        }
        if let Some(question) = polynomial.strip_prefix('?') {
            println!("{}", tutor::reply(question));
            continue;
        }
        let Some(root_text) = prompt("root> ")? else {
            break;
        };
        if is_exit(&root_text) {
            break;
        }
        let Ok(root) = root_text.parse::<f64>() else {
            eprintln!("'{root_text}' is not a number");
            continue;
        };
        match calculate(&polynomial, root) {
            Ok(calc) => {
                println!("{}", tutor::tableau(&calc));
                println!("quotient:  {}", calc.quotient);
                println!("remainder: {}", format_number(calc.remainder));
                println!();
            }
            Err(error) => eprintln!("{}", tutor::error_help(&error, &polynomial)),
        }
    }
    Ok(())
}

fn is_exit(line: &str) -> bool {
    matches!(line, "quit" | "exit" | "q")
}

/// Read one trimmed line; None on EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush().context("cannot flush stdout")?;
    let mut line = String::new();
    let read = std::io::stdin()
        .read_line(&mut line)
        .context("cannot read stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

async fn cmd_serve(bind: Option<&str>) -> Result<()> {
    let bind = bind
        .map(str::to_owned)
        .or_else(|| std::env::var("RUFFINI_ADDR").ok())
        .unwrap_or_else(|| "127.0.0.1:5000".to_string());
    server::serve(&bind).await
}
