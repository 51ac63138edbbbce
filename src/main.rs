//! Reads a text and a list of cut-and-paste operations from stdin, applies them,
//! and prints the resulting text.
//!
//! The input is whitespace separated: the text (a single word), the number of operations,
//! and then that many triples `i j k`. See [`splay_rope::Rope::cut_and_paste`] for their meaning.

use splay_rope::{Rope, RopeError};
use std::io::{self, Read, Write};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
enum HarnessError {
    #[error("input ended before the {0}")]
    MissingToken(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error("operation {index}: {source}")]
    Operation { index: usize, source: RopeError },
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn next_token<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<&'a str, HarnessError> {
    words.next().ok_or(HarnessError::MissingToken(what))
}

fn next_number<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<usize, HarnessError> {
    Ok(next_token(words, what)?.parse()?)
}

fn run(input: &str) -> Result<Rope, HarnessError> {
    let mut words = input.split_whitespace();
    let text = next_token(&mut words, "text")?;
    let mut rope = Rope::build(text.as_bytes());

    let num_ops = next_number(&mut words, "number of operations")?;
    for index in 0..num_ops {
        let i = next_number(&mut words, "start of the span")?;
        let j = next_number(&mut words, "end of the span")?;
        let k = next_number(&mut words, "paste position")?;
        rope.cut_and_paste(i, j, k)
            .map_err(|source| HarnessError::Operation { index, source })?;
    }
    Ok(rope)
}

fn main() -> Result<(), HarnessError> {
    env_logger::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let rope = run(&input)?;

    let mut out = io::stdout().lock();
    out.write_all(&rope.to_vec())?;
    writeln!(out)?;
    Ok(())
}
