//   Copyright 2025 The modalk contributors
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.

use std::{
    io::IsTerminal,
    path::PathBuf,
    sync::mpsc,
    time::Duration,
};

use anstyle::Style;
use clap::{
    builder::styling::{AnsiColor, Color},
    Parser,
};
use libmodalk::{ParsedFormula, Reason, Verdict};
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Proof-checker for modal logic K.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the file holding the formula to check, in InToHyLo syntax.
    formula: PathBuf,

    /// Wall-clock budget, in seconds, for the check to complete within.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Disable coloured output even if stdout is a terminal.
    #[arg(long)]
    no_color: bool,

    /// Print the normalised formula to stderr before checking it.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("failed to read formula file: {0}")]
    ReadFormula(std::io::Error),

    #[error("failed to read witness from stdin: {0}")]
    ReadWitness(std::io::Error),

    #[error("{0}")]
    Formula(#[from] libmodalk::Error),
}

/// Outcome of running the checker to completion, short of a hard I/O or
/// usage failure; every variant here is printed to stdout with exit code
/// 0, matching spec `6.1`'s "exit 0 on any completed verdict".
enum Outcome {
    Verdict(Verdict, Option<Reason>, usize),
    UnsatWitness,
    MalformedWitness,
    Timeout(u64),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(2);
    }
}

fn run() -> Result<(), Error> {
    let args = Args::parse();

    let formula_text =
        std::fs::read_to_string(&args.formula).map_err(Error::ReadFormula)?;

    let (tx, rx) = mpsc::channel();
    let timeout = args.timeout;
    std::thread::spawn(move || {
        let outcome = check(&formula_text, args.verbose);
        // The receiver may already be gone if we timed out; that's fine,
        // the process is about to exit either way.
        let _ = tx.send(outcome);
    });

    let outcome = match rx.recv_timeout(Duration::from_secs(timeout)) {
        Ok(outcome) => outcome?,
        Err(mpsc::RecvTimeoutError::Timeout) => Outcome::Timeout(timeout),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            unreachable!("worker thread never panics without sending a result")
        }
    };

    render(outcome, !args.no_color && std::io::stdout().is_terminal());
    Ok(())
}

/// Runs the full parse-decode-check pipeline on the worker thread. Reading
/// the witness from stdin happens here too, so a slow or hung solver
/// feeding stdin is covered by the same wall-clock budget as evaluation.
fn check(formula_text: &str, verbose: bool) -> Result<Outcome, Error> {
    let formula = ParsedFormula::new(formula_text)?;
    if verbose {
        eprintln!("{}", formula.root());
    }

    let stdin = std::io::stdin();
    let kripke = match libmodalk::decode_kripke(stdin.lock()) {
        Ok(k) => k,
        Err(libmodalk::Error::KripkeUnsat) => return Ok(Outcome::UnsatWitness),
        Err(libmodalk::Error::KripkeFormat | libmodalk::Error::KripkeZeroVars) => {
            return Ok(Outcome::MalformedWitness)
        }
        Err(libmodalk::Error::KripkeIo(e)) => return Err(Error::ReadWitness(e)),
        Err(e) => return Err(Error::Formula(e)),
    };

    let num_worlds = kripke.num_worlds();
    let (verdict, reason) = formula.check(&kripke);
    Ok(Outcome::Verdict(verdict, reason, num_worlds))
}

fn render(outcome: Outcome, styled: bool) {
    let style_ok = if styled {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)))
    } else {
        Style::new()
    };
    let style_bad = if styled {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)))
    } else {
        Style::new()
    };
    let style_unknown = if styled {
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)))
    } else {
        Style::new()
    };

    let reset = anstyle::Reset;

    match outcome {
        Outcome::Verdict(Verdict::Ok, _, num_worlds) => {
            println!("{style_ok}OK {num_worlds}{reset}");
        }
        Outcome::Verdict(Verdict::Ko, reason, _) => {
            println!("{style_bad}ERROR: model is incorrect{reset}");
            if let Some(reason) = reason {
                println!("{reason}");
            }
        }
        Outcome::Verdict(Verdict::Unknown, reason, _) => {
            let reason = reason
                .map(|r| r.to_string())
                .unwrap_or_else(|| "no reason recorded".to_string());
            println!("{style_unknown}UNKNOWN: {reason}{reset}");
        }
        Outcome::UnsatWitness => {
            println!("{style_bad}ERROR: UNSATISFIABLE formulae are not checkable yet.{reset}");
        }
        Outcome::MalformedWitness => {
            println!("{style_bad}ERROR: solution not in Kripke-CNF.{reset}");
        }
        Outcome::Timeout(secs) => {
            println!(
                "{style_unknown}UNKNOWN: VERIFIER EXCEEDED TIME LIMIT ({secs} s){reset}"
            );
        }
    }
}
