use logos::Logos;

/// Tokens of the InToHyLo surface syntax: propositional atoms `p<n>`,
/// boolean constants, `~`/`&`/`|`, parentheses, and the single-agent
/// modal operators `[r<n>]` / `<r<n>>`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Tok {
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[regex(r"p[0-9]+", |lex| lex.slice()[1..].parse::<u32>().ok())]
    Prop(u32),
    #[token("~")]
    Not,
    #[token("&")]
    And,
    #[token("|")]
    Or,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r"\[r[0-9]+\]", |lex| parse_agent(lex.slice()))]
    Box(u32),
    #[regex(r"<r[0-9]+>", |lex| parse_agent(lex.slice()))]
    Diamond(u32),
}

/// Strips the bracket/angle delimiters and the `r` tag from a modal
/// token's slice (e.g. `[r1]` or `<r1>`) and parses the remaining digits.
fn parse_agent(slice: &str) -> Option<u32> {
    slice
        .trim_start_matches(['[', '<'])
        .trim_end_matches([']', '>'])
        .trim_start_matches('r')
        .parse()
        .ok()
}
