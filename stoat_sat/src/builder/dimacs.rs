/*!
Reading and writing the DIMACS `p cnf` format.

# The reader

[parse_dimacs] is callback-driven: one callback receives the atom and clause counts
when the header is read, the other receives the raw signed literals of each clause.
The context method [read_dimacs](GenericContext::read_dimacs) builds on it directly.

The line protocol:
- Comment lines begin with `c`; blank lines are permitted; both are skipped, though
  counted for error messages.
- The header is `p cnf N M`, with leading whitespace allowed, `N` fitting in 31 bits,
  and nothing following `M`.
- Every clause line is a sequence of space-separated signed decimal literals
  terminated by `0`, with `0` appearing nowhere else on the line.

Errors carry the 1-based line number and the offending text.
*/

use std::io::BufRead;

use crate::{
    context::GenericContext,
    procedures::decision::DecisionStrategy,
    structures::{atom::Atom, clause, literal::CLiteral},
    types::err::{ErrorKind, ParseError},
};

/// A summary of what a reader handed to the context.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParserInfo {
    /// The atom count declared by the header.
    pub expected_atoms: u32,

    /// The clause count declared by the header.
    pub expected_clauses: u32,

    /// The count of clauses actually read.
    pub added_clauses: usize,
}

fn lstrip(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
}

fn skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('c')
}

/// Parses the header fields of an `lstripped` header line.
fn parse_header(line_number: usize, text: &str) -> Result<(u32, u32), ParseError> {
    let mut tokens = text.split_whitespace();

    if !(tokens.next() == Some("p") && tokens.next() == Some("cnf")) {
        return Err(ParseError::HeaderPrefix {
            line: line_number,
            text: text.to_owned(),
        });
    }

    let counts = ParseError::HeaderCounts {
        line: line_number,
        text: text.to_owned(),
    };
    // N is limited to 31 bits so literals round-trip through signed integers.
    let atoms: u32 = match tokens.next().map(str::parse) {
        Some(Ok(count)) if count <= i32::MAX as u32 => count,
        _ => return Err(counts),
    };
    let clauses: u32 = match tokens.next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(counts),
    };

    if let Some(junk) = tokens.next() {
        return Err(ParseError::JunkAfterHeader {
            line: line_number,
            junk: junk.to_owned(),
        });
    }

    Ok((atoms, clauses))
}

/// Parses an `lstripped` clause line into its literals, without the terminating `0`.
fn parse_clause(line_number: usize, text: &str) -> Result<Vec<i32>, ParseError> {
    let tokens = text.split_whitespace().collect::<Vec<_>>();
    let mut literals = Vec::with_capacity(tokens.len().saturating_sub(1));

    for (index, token) in tokens.iter().enumerate() {
        let last = index + 1 == tokens.len();
        match *token {
            "0" if last => return Ok(literals),
            "0" => {
                return Err(ParseError::MidlineZero {
                    line: line_number,
                    text: text.to_owned(),
                })
            }
            _ => match token.parse::<i32>() {
                Ok(literal) if literal != 0 => literals.push(literal),
                _ => {
                    return Err(ParseError::Literal {
                        line: line_number,
                        text: (*token).to_owned(),
                    })
                }
            },
        }
    }

    Err(ParseError::MissingZero {
        line: line_number,
        text: text.to_owned(),
    })
}

/// Reads DIMACS input, handing the header counts and each clause to the callbacks.
pub fn parse_dimacs(
    reader: impl BufRead,
    mut on_header: impl FnMut(u32, u32),
    mut on_clause: impl FnMut(&[i32]),
) -> Result<(), ParseError> {
    let mut lines = reader.lines();
    let mut line_number = 0;

    // First phase: read until the header.
    loop {
        let Some(Ok(line)) = lines.next() else {
            return Err(ParseError::Empty);
        };
        line_number += 1;
        let text = lstrip(&line);
        if skippable(text) {
            continue;
        }

        let (atoms, clauses) = parse_header(line_number, text)?;
        on_header(atoms, clauses);
        break;
    }

    // Second phase: a terminated clause per remaining line.
    while let Some(Ok(line)) = lines.next() {
        line_number += 1;
        let text = lstrip(&line);
        if skippable(text) {
            continue;
        }

        let literals = parse_clause(line_number, text)?;
        on_clause(&literals);
    }

    Ok(())
}

impl<S: DecisionStrategy> GenericContext<S> {
    /// Reads a DIMACS formula into the context.
    ///
    /// The declared count of atoms is created up front, so the handles of a fresh
    /// context coincide with the 1-based DIMACS variables.
    pub fn read_dimacs(&mut self, reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut header = None;
        let mut clauses: Vec<Vec<i32>> = Vec::new();
        parse_dimacs(
            reader,
            |atoms, expected| header = Some((atoms, expected)),
            |literals| clauses.push(literals.to_vec()),
        )?;

        let (expected_atoms, expected_clauses) = header.unwrap_or_default();
        let base = (self.atom_db.count() - 1) as Atom;
        for _ in 0..expected_atoms {
            self.fresh_atom();
        }

        for literals in &clauses {
            let clause = literals
                .iter()
                .map(|int| {
                    let literal = CLiteral::from_int(*int);
                    CLiteral::new(base + literal.atom(), literal.polarity())
                })
                .collect::<Vec<_>>();
            self.add_clause(clause);
        }

        Ok(ParserInfo {
            expected_atoms,
            expected_clauses,
            added_clauses: clauses.len(),
        })
    }

    /// The formula of the context as DIMACS, one clause per line.
    pub fn as_dimacs(&self) -> String {
        let mut out = format!(
            "p cnf {} {}\n",
            self.atom_db.count() - 1,
            self.clause_db.count()
        );
        for stored in self.clause_db.iter() {
            out.push_str(&clause::as_dimacs(stored.literals()));
            out.push('\n');
        }
        out
    }
}
