//! A small command-line calculator over 2032-bit signed integers.
//! Operands are decimal text; the result is printed as decimal text.
//! Everything interesting lives in the `wideint` crate; this binary
//! just parses the command line and reports errors.

use std::cmp::Ordering;
use std::str::FromStr;

use clap::Parser;
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use wideint::WideInt;

#[derive(Debug, Parser)]
#[command(
    name = "wideint-calc",
    about = "Evaluate an arithmetic expression on 2032-bit signed integers"
)]
struct Args {
    /// Left operand, in decimal (a leading '-' is accepted).
    lhs: String,

    /// Operator: one of +, -, x (or *), /, %, cmp.
    op: String,

    /// Right operand, in decimal.
    rhs: String,
}

fn evaluate(lhs: WideInt, op: &str, rhs: WideInt) -> Result<String, Box<dyn std::error::Error>> {
    match op {
        "+" => Ok((lhs + rhs).to_string()),
        "-" => Ok((lhs - rhs).to_string()),
        // "x" is accepted because "*" is inconvenient to pass through
        // a shell unquoted.
        "x" | "*" => Ok((lhs * rhs).to_string()),
        "/" => {
            let (quotient, _) = lhs.div_rem(rhs)?;
            Ok(quotient.to_string())
        }
        "%" => {
            let (_, remainder) = lhs.div_rem(rhs)?;
            Ok(remainder.to_string())
        }
        "cmp" => Ok(match lhs.cmp(&rhs) {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        }
        .to_string()),
        other => Err(format!("unknown operator '{other}'").into()),
    }
}

fn run_calculator() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // See
    // https://docs.rs/tracing-subscriber/0.3/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let lhs = WideInt::from_str(&args.lhs)
        .map_err(|e| format!("left operand '{}': {e}", args.lhs))?;
    let rhs = WideInt::from_str(&args.rhs)
        .map_err(|e| format!("right operand '{}': {e}", args.rhs))?;
    event!(Level::DEBUG, "evaluating {} {} {}", lhs, args.op, rhs);

    let result = evaluate(lhs, &args.op, rhs)?;
    println!("{result}");
    Ok(())
}

fn main() {
    match run_calculator() {
        Err(e) => {
            eprintln!("wideint-calc: {e}");
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
