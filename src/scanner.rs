use anyhow::{Context, Result};
use pest::Parser as _;
use pest_derive::Parser;

use crate::token::{Token, TokenStream};

#[derive(Parser)]
#[grammar = "fbdl.pest"]
struct Scanner;

type Pair<'a> = pest::iterators::Pair<'a, Rule>;

pub fn scan(code: &str) -> Result<TokenStream> {
    let program = Scanner::parse(Rule::program, code)
        .context("Failed to scan input")?
        .next()
        .context("Scanner produced no program")?;

    Ok(program
        .into_inner()
        .take_while(|pair| pair.as_rule() != Rule::EOI)
        .map(Token::from)
        .collect())
}

impl From<Pair<'_>> for Token {
    fn from(pair: Pair<'_>) -> Self {
        match pair.as_rule() {
            Rule::keyword => Token::keyword(pair.as_str()),

            Rule::string_literal => {
                let interior = pair
                    .into_inner()
                    .next()
                    .map(|interior| interior.as_str())
                    .unwrap_or_default();
                Token::literal(interior)
            }

            Rule::number => Token::literal(pair.as_str()),

            Rule::other => Token::other(pair.as_str()),

            _ => unreachable!(),
        }
    }
}
