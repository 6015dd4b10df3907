use std::io::{BufRead, Write};

use super::Kripke;
use crate::error::Error;

/// Decodes a Kripke-CNF witness stream into a [`Kripke`] structure.
///
/// The format is line-oriented: `c`-prefixed lines are comments, a status
/// line announces `s SATISFIABLE` or `s UNSATISFIABLE`, and `v`-prefixed
/// lines carry, in order, one header (variable and world counts), one
/// valuation line per world (signed 1-indexed literals, `0`-terminated),
/// then edge lines (`w <from> <to>` with world ids prefixed by a tag
/// character).
///
/// Only a satisfiable witness can be checked; an unsatisfiable one, or a
/// stream that never reaches a status line, is reported as an error
/// rather than decoded into a (meaningless) empty structure.
pub fn decode<R: BufRead>(input: R) -> Result<Kripke, Error> {
    let mut sat_found = false;
    let mut kripke: Option<Kripke> = None;
    let mut num_worlds = 0usize;
    let mut valuation_lines_read = 0usize;

    for line in input.lines() {
        let line = line?;

        if line.starts_with('c') {
            continue;
        }
        if line.contains("s UNSATISFIABLE") {
            return Err(Error::KripkeUnsat);
        }
        if !sat_found && line.contains("s SATISFIABLE") {
            sat_found = true;
            continue;
        }

        let Some(rest) = line.strip_prefix('v') else {
            continue;
        };
        let tokens: Vec<&str> = rest.split_whitespace().collect();

        match &mut kripke {
            None => {
                let num_vars = tokens
                    .first()
                    .and_then(|t| t.parse::<usize>().ok())
                    .unwrap_or(0);
                num_worlds = tokens
                    .get(1)
                    .and_then(|t| t.parse::<usize>().ok())
                    .unwrap_or(0);
                if num_vars == 0 {
                    return Err(Error::KripkeZeroVars);
                }
                kripke = Some(Kripke::new(num_worlds, num_vars));
            }
            Some(k) => {
                if valuation_lines_read < num_worlds {
                    let world = valuation_lines_read;
                    for tok in &tokens {
                        let Ok(v) = tok.parse::<i64>() else {
                            continue;
                        };
                        if v == 0 {
                            continue;
                        }
                        let atom = v.unsigned_abs() as usize;
                        k.assign(world, atom, if v > 0 { 1 } else { -1 });
                    }
                    valuation_lines_read += 1;
                } else if tokens.len() >= 3 {
                    if let (Some(from), Some(to)) =
                        (parse_tagged_world(tokens[1]), parse_tagged_world(tokens[2]))
                    {
                        k.add_edge(from, to);
                    }
                }
            }
        }
    }

    if !sat_found {
        return Err(Error::KripkeFormat);
    }
    kripke.ok_or(Error::KripkeFormat)
}

/// Strips a single leading tag character (e.g. `w12` -> `12`) and parses
/// the remainder as a world id.
fn parse_tagged_world(tok: &str) -> Option<usize> {
    tok.get(1..).and_then(|s| s.parse().ok())
}

/// Encodes `kripke` back into Kripke-CNF witness text: a `s SATISFIABLE`
/// status line, the header, one valuation line per world in order, then
/// one `v e w<from> w<to> 0` line per edge.
///
/// This is the inverse of [`decode`], so that decoding a witness, encoding
/// the result, and decoding that output again reproduces the same
/// structure.
pub fn encode<W: Write>(kripke: &Kripke, mut out: W) -> Result<(), Error> {
    writeln!(out, "s SATISFIABLE")?;
    writeln!(out, "v {} {} 0 0", kripke.num_vars(), kripke.num_worlds())?;

    for world in 0..kripke.num_worlds() {
        write!(out, "v")?;
        for atom in 1..=kripke.num_vars() {
            let v = kripke.value(world, atom);
            if v > 0 {
                write!(out, " {atom}")?;
            } else if v < 0 {
                write!(out, " -{atom}")?;
            }
        }
        writeln!(out, " 0")?;
    }

    for world in 0..kripke.num_worlds() {
        for &successor in kripke.successors(world) {
            writeln!(out, "v e w{world} w{successor} 0")?;
        }
    }

    Ok(())
}
