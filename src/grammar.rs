//! L-System grammar definition and sentence rewriting.

use crate::{CurveError, TurtleOp};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// An L-System grammar: variables, axiom, rewrite rules and the geometric
/// meaning of each symbol.
///
/// Immutable once constructed. Only symbols declared in `variables` are
/// rewritten during expansion; every other symbol passes through unchanged
/// and is given meaning (or ignored) by the interpreter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grammar {
    variables: HashSet<char>,
    axiom: String,
    rules: HashMap<char, String>,
    actions: HashMap<char, TurtleOp>,
}

impl Grammar {
    /// Builds a validated grammar.
    ///
    /// Fails with [`CurveError::InvalidGrammar`] on an empty axiom, an empty
    /// replacement string, or two rules for the same symbol.
    pub fn new(
        variables: &[char],
        axiom: &str,
        rules: &[(char, &str)],
        actions: HashMap<char, TurtleOp>,
    ) -> Result<Self, CurveError> {
        if axiom.is_empty() {
            return Err(CurveError::InvalidGrammar("empty axiom".to_string()));
        }
        let mut rule_map = HashMap::with_capacity(rules.len());
        for (symbol, replacement) in rules {
            if replacement.is_empty() {
                return Err(CurveError::InvalidGrammar(format!(
                    "empty replacement for rule '{symbol}'"
                )));
            }
            if rule_map.insert(*symbol, (*replacement).to_string()).is_some() {
                return Err(CurveError::InvalidGrammar(format!(
                    "rule '{symbol}' overwrites a previous rule"
                )));
            }
        }
        Ok(Self {
            variables: variables.iter().copied().collect(),
            axiom: axiom.to_string(),
            rules: rule_map,
            actions,
        })
    }

    /// The 3D Hilbert curve grammar used by the tube generator.
    ///
    /// One variable `X`, expanded over the standard seven-symbol action set.
    pub fn hilbert_3d() -> Self {
        Self::new(
            &['X'],
            "X",
            &[('X', "^<XF^<XFX-F^>>XFX&F+>>XFX-F>X->")],
            Self::standard_actions(),
        )
        .expect("hilbert grammar is well formed")
    }

    /// The conventional symbol-to-operation table.
    ///
    /// `F` moves forward; `+`/`-` turn, `^`/`&` pitch and `<`/`>` roll, each
    /// by a quarter turn.
    pub fn standard_actions() -> HashMap<char, TurtleOp> {
        HashMap::from([
            ('F', TurtleOp::Forward),
            ('+', TurtleOp::TurnLeft),
            ('-', TurtleOp::TurnRight),
            ('^', TurtleOp::PitchUp),
            ('&', TurtleOp::PitchDown),
            ('<', TurtleOp::RollLeft),
            ('>', TurtleOp::RollRight),
        ])
    }

    /// The initial symbol string.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// Symbols subject to rewriting.
    pub fn variables(&self) -> &HashSet<char> {
        &self.variables
    }

    /// The symbol-to-operation table for interpretation.
    pub fn actions(&self) -> &HashMap<char, TurtleOp> {
        &self.actions
    }

    /// The operation bound to `symbol`, [`TurtleOp::Ignore`] if unbound.
    pub fn action(&self, symbol: char) -> TurtleOp {
        self.actions
            .get(&symbol)
            .copied()
            .unwrap_or(TurtleOp::Ignore)
    }
}

/// Expands the grammar's axiom by `iterations` parallel rewrite passes.
///
/// Each pass replaces every declared variable with its rule's replacement
/// characters and copies all other symbols through unchanged, so the output
/// is uniquely determined by `(grammar, iterations)`. Cost grows
/// exponentially with the branching factor; callers bound `iterations` to a
/// small range.
///
/// Fails with [`CurveError::UndefinedRule`] if a declared variable has no
/// rule — an internally inconsistent grammar is not recoverable.
pub fn expand(grammar: &Grammar, iterations: u32) -> Result<Vec<char>, CurveError> {
    let mut sentence: Vec<char> = grammar.axiom.chars().collect();
    for pass in 0..iterations {
        let mut next = Vec::with_capacity(sentence.len() * 2);
        for &symbol in &sentence {
            if grammar.variables.contains(&symbol) {
                let replacement = grammar
                    .rules
                    .get(&symbol)
                    .ok_or(CurveError::UndefinedRule(symbol))?;
                next.extend(replacement.chars());
            } else {
                next.push(symbol);
            }
        }
        sentence = next;
        trace!(pass, symbols = sentence.len(), "rewrote sentence");
    }
    debug!(iterations, symbols = sentence.len(), "expanded axiom");
    Ok(sentence)
}
