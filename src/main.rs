use std::{
    error::Error,
    io::{self, BufRead},
};

use calcpad::{
    evaluator::{compile::compile, format::format_number, postfix::to_postfix},
    expression::config::BuilderConfig,
    session::{core::Session, keys::parse_keys},
};
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// calcpad drives a keypad calculator from key scripts such as `12+sin(30)=`.
///
/// Keys: digits, `.` or `,`, `+ - * × / ÷ ^`, `( )`, `pi`, `e`, `x`, function
/// names, `<` (backspace), `C` (clear) and `=` (calculate).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The decimal separator the expression is written with.
    #[arg(short, long, env = "CALCPAD_DECIMAL_SEPARATOR", default_value_t = '.')]
    decimal_separator: char,

    /// Enables the placeholder variable `x`.
    #[arg(short, long)]
    variable: bool,

    /// Compiles the expression as a function of `x` and prints its value at
    /// this point. Implies `--variable`.
    #[arg(short, long, allow_negative_numbers = true)]
    at: Option<f64>,

    /// Prints the postfix form of the finalized expression.
    #[arg(short, long)]
    postfix: bool,

    /// Prints the display after every key.
    #[arg(short, long)]
    trace: bool,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(short, long, env = "CALCPAD_LOG", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Key scripts. Standard input is read line by line when none are given.
    keys: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if TermLogger::init(args.log_level,
                        Config::default(),
                        TerminalMode::Stderr,
                        ColorChoice::Auto).is_err()
    {
        eprintln!("Failed to initialize the logger; continuing without logs.");
    }

    let config = BuilderConfig::default().decimal_separator(args.decimal_separator)
                                         .variable_placeholder(args.variable
                                                               || args.at.is_some());
    let mut session = Session::with_config(config);

    if args.keys.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => report(execute(&mut session, &line, &args)),
                Err(e) => {
                    eprintln!("Failed to read standard input: {e}");
                    std::process::exit(1);
                },
            }
        }
    } else {
        report(execute(&mut session, &args.keys.join(" "), &args));
    }
}

fn report(outcome: Result<(), Box<dyn Error>>) {
    if let Err(e) = outcome {
        eprintln!("{e}");
    }
}

fn execute(session: &mut Session, keys: &str, args: &Args) -> Result<(), Box<dyn Error>> {
    for intent in parse_keys(keys)? {
        session.apply(intent)?;
        if args.trace {
            println!("{intent}\t{}", session.display());
        }
    }

    if args.postfix {
        println!("{}", to_postfix(&session.finalize())?);
    }

    if let Some(x) = args.at {
        let function = compile(&session.finalize())?;
        println!("{}", format_number(function.call(x)?));
        return Ok(());
    }

    match session.result() {
        Some(result) => println!("{} = {result}", session.display()),
        None => println!("{}", session.display()),
    }
    Ok(())
}
