use tracing::{debug, warn};

use crate::ast::{Antecedent, Element, Resolution, Rule, Rulebase, Universe};
use crate::error::CompileError;
use crate::symbols::SymbolTable;
use crate::token::{Cursor, Token, TokenKind};

pub const UNIVERSE: &str = "universe";
pub const RULEBASE: &str = "rulebase";
pub const RULE: &str = "rule";
pub const WHEN: &str = "when";
pub const AND: &str = "and";
pub const IS: &str = "is";
pub const END: &str = "end";

/// Parses a `universe` block starting at its keyword and registers it.
///
/// Elements are `name x y` triples introduced by a literal token. The first
/// non-literal token closes the block whatever its value.
pub fn parse_universe<'s>(cursor: &mut Cursor<'_>, symbols: &'s mut SymbolTable) -> &'s Universe {
    let name = cursor.peek_nth(1).value.clone();
    cursor.advance(2);

    let mut elements = vec![];
    while cursor.peek().kind == TokenKind::Literal {
        let element_name = cursor.peek().value.clone();
        let x = parse_coordinate(&name, &element_name, cursor.peek_nth(1));
        let y = parse_coordinate(&name, &element_name, cursor.peek_nth(2));
        elements.push(Element {
            name: element_name,
            x,
            y,
        });
        cursor.advance(3);
    }
    cursor.expect(END);

    let universe = symbols.register_universe(name, elements);
    debug!(id = %universe.id, name = %universe.name, elements = universe.elements.len(), "universe");
    universe
}

fn parse_coordinate(universe: &str, element: &str, token: &Token) -> f64 {
    let value = &token.value;
    match float_prefix(value) {
        Some((x, len)) => {
            if len < value.len() {
                warn!(universe, element, %value, "ignoring text after coordinate");
            }
            x
        }
        None => {
            warn!(universe, element, %value, "coordinate is not a number");
            f64::NAN
        }
    }
}

/// Reads the longest decimal number at the start of `text`, returning it
/// with the number of bytes it spans. Accepts `[+-]digits[.digits][e[+-]digits]`
/// (either side of the point may be empty, not both) and `[+-]Infinity`.
fn float_prefix(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let digits = |from: usize| {
        bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        let x = if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((x, end + "Infinity".len()));
    }

    let integer = digits(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    text[..end].parse().ok().map(|x| (x, end))
}

/// Parses a `rulebase` block starting at its keyword.
///
/// The rulebase's consequent is the universe carrying the same name. When
/// there is none, the body is left unparsed and the rulebase has no rules.
/// The only error is a rulebase name that was already used.
pub fn parse_rulebase(
    cursor: &mut Cursor<'_>,
    symbols: &mut SymbolTable,
) -> Result<Rulebase, CompileError> {
    let name = cursor.peek_nth(1).value.clone();
    let id = symbols.claim_rulebase(&name)?;

    let consequent = symbols.universe_id(&name);
    if let Resolution::Unresolved = consequent {
        warn!(rulebase = %name, "rulebase does not match any universe, skipping");
        cursor.advance(3);
        return Ok(Rulebase {
            id,
            name,
            consequent,
            rules: vec![],
        });
    }
    cursor.advance(2);

    let mut rules = vec![];
    loop {
        let token = cursor.peek();
        if token.is(END) {
            break;
        }
        if cursor.is_at_end() {
            warn!(rulebase = %name, "input ended inside rulebase");
            break;
        }

        if token.is(RULE) {
            rules.push(parse_rule(cursor));
        } else {
            cursor.advance(1);
        }
    }
    cursor.advance(1);

    debug!(%id, %name, %consequent, rules = rules.len(), "rulebase");
    Ok(Rulebase {
        id,
        name,
        consequent,
        rules,
    })
}

/// Parses `rule <consequent> when <universe> is <condition> [and ...] end`.
///
/// Only `and` and `end` are checked; the other connectives are skipped by
/// position.
pub fn parse_rule(cursor: &mut Cursor<'_>) -> Rule {
    let consequent = cursor.peek_nth(1).value.clone();
    cursor.advance(2);
    cursor.expect(WHEN);

    let mut antecedents = vec![];
    loop {
        let token = cursor.peek();
        if token.is(END) {
            break;
        }
        if cursor.is_at_end() {
            warn!(rule = %consequent, "input ended inside rule");
            break;
        }

        if token.is(AND) {
            cursor.advance(1);
            continue;
        }

        cursor.advance(1);
        cursor.expect(IS);
        antecedents.push(Antecedent {
            universe: token.value.clone(),
            condition: cursor.peek().value.clone(),
        });
        cursor.advance(1);
    }
    cursor.advance(1);

    Rule {
        consequent,
        antecedents,
    }
}
