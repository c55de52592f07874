use std::sync::Arc;

use tantivy::query::{AutomatonWeight, EnableScoring, Query, Weight};
use tantivy::schema::{Field, FieldType};
use tantivy::TantivyError;
use tantivy_fst::Automaton;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    /// `*`: any run of bytes.
    AnyRun,
    /// First byte of the character matched by `?`.
    Lead,
    /// Remaining bytes of the character matched by `?`.
    Continuation,
    Byte(u8),
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Byte-level matcher for a Lucene-style wildcard pattern.
///
/// `*` matches any run of characters, `?` exactly one character, and `\`
/// makes the next character literal (a trailing `\` is itself literal).
/// Matching is against the whole term.
///
/// The state is the set of live pattern positions. Positions before the
/// last live `*` can never reach anything that `*` cannot, so they are
/// dropped and `*a*b*c*`-shaped patterns keep only a couple of positions
/// alive no matter how long they are.
#[derive(Clone, Debug)]
pub struct WildcardAutomaton {
    tokens: Vec<Token>,
}

impl WildcardAutomaton {
    pub fn new(pattern: &str) -> Self {
        let mut tokens = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '*' => {
                    if tokens.last() != Some(&Token::AnyRun) {
                        tokens.push(Token::AnyRun);
                    }
                }
                '?' => {
                    tokens.push(Token::Lead);
                    tokens.push(Token::Continuation);
                }
                '\\' => push_literal(&mut tokens, chars.next().unwrap_or('\\')),
                other => push_literal(&mut tokens, other),
            }
        }
        Self { tokens }
    }

    /// Follows epsilon moves and drops positions shadowed by a live `*`.
    fn settle(&self, mut positions: Vec<usize>) -> Vec<usize> {
        let mut i = 0;
        while i < positions.len() {
            let pos = positions[i];
            if matches!(
                self.tokens.get(pos),
                Some(Token::AnyRun) | Some(Token::Continuation)
            ) && !positions.contains(&(pos + 1))
            {
                positions.push(pos + 1);
            }
            i += 1;
        }

        positions.sort_unstable();
        positions.dedup();

        let last_run = positions
            .iter()
            .rev()
            .copied()
            .find(|&pos| self.tokens.get(pos) == Some(&Token::AnyRun));
        if let Some(run) = last_run {
            positions.retain(|&pos| pos >= run);
        }
        positions
    }
}

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    let mut buf = [0u8; 4];
    tokens.extend(c.encode_utf8(&mut buf).bytes().map(Token::Byte));
}

impl Automaton for WildcardAutomaton {
    type State = Vec<usize>;

    fn start(&self) -> Vec<usize> {
        self.settle(vec![0])
    }

    fn is_match(&self, state: &Vec<usize>) -> bool {
        state.contains(&self.tokens.len())
    }

    fn can_match(&self, state: &Vec<usize>) -> bool {
        !state.is_empty()
    }

    fn accept(&self, state: &Vec<usize>, byte: u8) -> Vec<usize> {
        let mut next = Vec::with_capacity(state.len() + 1);
        for &pos in state {
            match self.tokens.get(pos) {
                Some(Token::AnyRun) => next.push(pos),
                Some(Token::Continuation) if is_continuation(byte) => next.push(pos),
                Some(Token::Lead) if !is_continuation(byte) => next.push(pos + 1),
                Some(Token::Byte(b)) if *b == byte => next.push(pos + 1),
                _ => {}
            }
        }
        self.settle(next)
    }
}

/// Matches whole terms of an untokenized text field against a wildcard
/// pattern.
#[derive(Clone, Debug)]
pub struct WildcardQuery {
    field: Field,
    automaton: Arc<WildcardAutomaton>,
}

impl WildcardQuery {
    pub fn new(field: Field, pattern: &str) -> Self {
        Self {
            field,
            automaton: Arc::new(WildcardAutomaton::new(pattern)),
        }
    }
}

impl Query for WildcardQuery {
    fn weight(&self, enable_scoring: EnableScoring<'_>) -> tantivy::Result<Box<dyn Weight>> {
        let entry = enable_scoring.schema().get_field_entry(self.field);
        if !matches!(entry.field_type(), FieldType::Str(_)) || !entry.is_indexed() {
            return Err(TantivyError::SchemaError(format!(
                "field '{}' is not an indexed text field",
                entry.name()
            )));
        }
        Ok(Box::new(AutomatonWeight::<WildcardAutomaton>::new(
            self.field,
            self.automaton.clone(),
        )))
    }
}
