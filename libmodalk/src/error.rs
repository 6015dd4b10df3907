use thiserror::Error;

/// Errors produced while parsing a formula or decoding a Kripke-CNF witness.
///
/// Verdicts (`OK`/`KO`/`UNKNOWN`) are never represented here: per the
/// checker's contract they are first-class outcomes of [`crate::ParsedFormula::check`],
/// not failures.
#[derive(Debug, Error)]
pub enum Error {
    /// The formula text did not parse as InToHyLo surface syntax.
    #[error("formula did not parse: {0}")]
    Parse(String),

    /// I/O failure while reading the Kripke-CNF witness stream.
    #[error("I/O error reading witness: {0}")]
    KripkeIo(#[from] std::io::Error),

    /// The witness stream never declared `s SATISFIABLE`.
    #[error("solution not in Kripke-CNF")]
    KripkeFormat,

    /// The witness declared `s UNSATISFIABLE`; only positive witnesses are
    /// checkable by this tool.
    #[error("UNSATISFIABLE formulae are not checkable yet")]
    KripkeUnsat,

    /// The witness header declared zero propositional variables.
    #[error("no model was provided")]
    KripkeZeroVars,
}
