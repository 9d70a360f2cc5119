//! Prompt command handler

use crate::error::CliResult;
use crate::handlers::eval::evaluate;
use std::io::{self, BufRead, Write};

/// Banner printed before the first question
pub const BANNER: &str = "=== Simple Calculator ===";

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> CliResult<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Runs one question-and-answer round over the given streams
///
/// Returns the result line after writing it to `output`.
pub fn run_prompt<R: BufRead, W: Write>(mut input: R, mut output: W) -> CliResult<String> {
    writeln!(output, "{BANNER}")?;
    let a = ask(&mut input, &mut output, "Enter first number: ")?;
    let op = ask(&mut input, &mut output, "Enter operation (+, -, *, /): ")?;
    let b = ask(&mut input, &mut output, "Enter second number: ")?;

    let line = evaluate(&a, &op, &b)?.result_line();
    writeln!(output)?;
    writeln!(output, "{line}")?;
    Ok(line)
}

/// Execute the prompt command on stdin and stdout
pub fn execute_prompt() -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_prompt(stdin.lock(), stdout.lock())?;
    Ok(())
}
