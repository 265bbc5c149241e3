//! The interactive generate loop.
//!
//! Reads n, then l, prints the raw markup and asks whether to go on.
//! Entering `E` at the continue prompt or in place of n ends the loop, as
//! does end of input.
//!
//! Any integer is accepted. A negative n is the empty sum and prints `0`;
//! a negative l uses the generalized binomial coefficient.

use std::io::{self, BufRead, Write};

use laguerre_algebra::LaguerreEvaluator;
use laguerre_core::parse_integer;
use laguerre_model::{Parameter, StudioError};
use tracing::{info, warn};

pub const STARTUP: &str = "Startup...";
pub const PROMPT_N: &str = "Please Enter n, Integer Only: ";
pub const PROMPT_L: &str = "Please Enter l, Integer Only: ";
pub const PROMPT_CONTINUE: &str = "Enter E for exit. Enter any key for continue generating: ";
pub const FAREWELL: &str = "Exit Successfully.";

/// Exit sentinel.
const EXIT: &str = "E";

/// Run the loop until `E` or end of input.
///
/// Markup and prompts go to `out`, input errors to `err`.
pub fn run_repl<R, W, V>(
    input: R,
    out: &mut W,
    err: &mut V,
    evaluator: &LaguerreEvaluator,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    V: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{STARTUP}")?;

    'session: loop {
        let Some(n) = read_degree(&mut lines, out, err)? else {
            break 'session;
        };
        let l = loop {
            write!(out, "{PROMPT_L}")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break 'session;
            };
            match parse_integer(Parameter::L, &line) {
                Ok(l) => break l,
                Err(error) => report(err, &error)?,
            }
        };

        match evaluator.expand_integers(n, l) {
            Ok(markup) => {
                info!(n, l, "generated polynomial");
                writeln!(out, "{markup}")?;
            }
            Err(error) => report(err, &StudioError::from(error))?,
        }

        write!(out, "{PROMPT_CONTINUE}")?;
        out.flush()?;
        match lines.next().transpose()? {
            Some(answer) if answer.trim() != EXIT => {}
            _ => break 'session,
        }
    }

    writeln!(out, "{FAREWELL}")?;
    Ok(())
}

/// Prompt for n until it parses. `None` means exit.
fn read_degree<I, W, V>(lines: &mut I, out: &mut W, err: &mut V) -> io::Result<Option<i64>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
    V: Write,
{
    loop {
        write!(out, "{PROMPT_N}")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        if line.trim() == EXIT {
            return Ok(None);
        }
        match parse_integer(Parameter::N, &line) {
            Ok(value) => return Ok(Some(value)),
            Err(error) => report(err, &error)?,
        }
    }
}

fn report<V: Write>(err: &mut V, error: &StudioError) -> io::Result<()> {
    warn!(%error, "rejected input");
    writeln!(err, "{}: {error}", error.title())
}
