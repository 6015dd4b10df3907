#![doc = include_str!("../README.md")]

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

mod error;
mod eval;
mod kripke;
mod normalize;
mod parser;
mod term;

pub use error::Error;
pub use eval::{Reason, ReasonCode, Verdict};
pub use kripke::Kripke;
pub use term::{BoolOp, ModalOp, Term};

/// A parsed and normalised formula, ready to be checked against a model.
#[derive(Debug, Clone)]
pub struct ParsedFormula {
    root: Term,
}

impl ParsedFormula {
    /// Parses `input` as InToHyLo surface syntax and normalises the
    /// resulting term tree.
    pub fn new(input: &str) -> Result<Self, Error> {
        let mut root = parser::parse(input)?;
        normalize::normalize(&mut root);
        Ok(Self { root })
    }

    /// The normalised root term, e.g. for diagnostic display.
    pub fn root(&self) -> &Term {
        &self.root
    }

    /// Checks this formula against `kripke`, starting at world `0`.
    ///
    /// Returns the verdict and, for any non-[`Verdict::Ok`] result, the
    /// innermost [`Reason`] recorded for the demotion.
    pub fn check(&self, kripke: &Kripke) -> (Verdict, Option<Reason>) {
        eval::check(&self.root, kripke)
    }
}

/// Decodes a Kripke-CNF witness stream into a [`Kripke`] structure.
///
/// This is a thin re-export of [`kripke::decode`] at the crate root,
/// since decoding a witness and checking a formula against it are the two
/// halves of the same task for most callers.
pub fn decode_kripke<R: std::io::BufRead>(input: R) -> Result<Kripke, Error> {
    kripke::decode(input)
}

/// Encodes a [`Kripke`] structure back into Kripke-CNF witness text.
///
/// A thin re-export of [`kripke::encode`] at the crate root, the inverse of
/// [`decode_kripke`].
pub fn encode_kripke<W: std::io::Write>(kripke: &Kripke, out: W) -> Result<(), Error> {
    kripke::encode(kripke, out)
}
