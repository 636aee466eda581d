mod samples;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sable_interp::{Interpreter, Value};
use sable_ir::Function;

#[derive(Parser)]
#[command(name = "sable")]
#[command(about = "Sable IR toolkit - inspect, check, run and lower the built-in samples")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    List,
    Print {
        sample: String,

        #[arg(long)]
        json: bool,
    },
    Verify {
        sample: String,
    },
    Run {
        sample: String,
        args: Vec<String>,
    },
    EmitC {
        sample: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Print { sample, json } => cmd_print(&sample, json),
        Commands::Verify { sample } => cmd_verify(&sample),
        Commands::Run { sample, args } => cmd_run(&sample, &args),
        Commands::EmitC { sample } => cmd_emit_c(&sample),
    }
}

fn cmd_list() -> Result<()> {
    use colored::*;

    println!("{}", "Built-in samples".bright_blue().bold());
    println!("{}", "=".repeat(50).bright_blue());

    for name in samples::NAMES {
        let function = lookup(name)?;
        let params = function
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {}  function {}({})",
            name.bright_yellow(),
            function.name,
            params
        );
    }

    Ok(())
}

// Bare output on purpose: `print` and `emit-c` are the pipeable commands.
fn cmd_print(sample: &str, json: bool) -> Result<()> {
    let function = lookup(sample)?;
    if json {
        println!("{}", sable_ir::persist::to_json(&function)?);
    } else {
        println!("{}", function);
    }
    Ok(())
}

fn cmd_verify(sample: &str) -> Result<()> {
    use colored::*;

    let function = lookup(sample)?;
    let violations = sable_ir::verify(&function);

    if violations.is_empty() {
        println!(
            "{} {} is structurally sound",
            "OK:".bright_green().bold(),
            function.name
        );
        return Ok(());
    }

    println!(
        "{} {} violation(s) in {}",
        "INVALID:".bright_red().bold(),
        violations.len(),
        function.name
    );
    for violation in &violations {
        println!("  {}", violation);
    }
    Err(anyhow::anyhow!("verification failed"))
}

fn cmd_run(sample: &str, args: &[String]) -> Result<()> {
    use colored::*;

    let function = lookup(sample)?;

    // Register every sample so cross-function calls resolve.
    let mut interp = Interpreter::new();
    for other in samples::all() {
        interp.register(other);
    }

    let mut values = Vec::with_capacity(args.len());
    for raw in args {
        values.push(parse_value(raw));
    }

    let result = interp.call(function.name.as_str(), &values)?;
    println!("{} {}", "RESULT:".bright_green().bold(), result);
    Ok(())
}

fn cmd_emit_c(sample: &str) -> Result<()> {
    let function = lookup(sample)?;
    let source = sable_cgen::emit_c(&function)?;
    println!("{}", source);
    Ok(())
}

fn lookup(sample: &str) -> Result<Function> {
    samples::sample(sample)
        .ok_or_else(|| anyhow::anyhow!("unknown sample '{}' (try `sable list`)", sample))
}

/// Numbers, `true`/`false`, `null` and `undefined` parse to their runtime
/// kinds; anything else is passed through as a string.
fn parse_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<f64>() {
        return Value::Number(n);
    }
    match raw {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        "null" => Value::Null,
        "undefined" => Value::Undefined,
        _ => Value::String(raw.to_string()),
    }
}
