//! Interpreter that converts an L-System symbol sentence into a 3D point path.
//!
//! The entry point is [`PathInterpreter`]. Register symbol-to-operation
//! mappings via [`PathInterpreter::set_op`], or start from
//! [`PathInterpreter::with_standard_symbols`] / [`PathInterpreter::for_grammar`],
//! then call [`PathInterpreter::trace_path`] with an expanded sentence. For
//! the common case of the standard symbol set there is the [`interpret`]
//! shorthand.

use crate::grammar::Grammar;
use crate::turtle::{TurtleOp, TurtleState};
use glam::Vec3;
use std::collections::HashMap;
use tracing::debug;

/// Interprets L-System output to build a point path.
#[derive(Clone, Debug, Default)]
pub struct PathInterpreter {
    ops: HashMap<char, TurtleOp>,
}

impl PathInterpreter {
    /// Creates an interpreter with an empty symbol map.
    ///
    /// Every symbol is ignored until registered with [`set_op`](Self::set_op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the conventional symbol mappings
    /// (`F`, `+`, `-`, `^`, `&`, `<`, `>`).
    pub fn with_standard_symbols() -> Self {
        Self {
            ops: Grammar::standard_actions(),
        }
    }

    /// Creates an interpreter using the grammar's own action table.
    pub fn for_grammar(grammar: &Grammar) -> Self {
        Self {
            ops: grammar.actions().clone(),
        }
    }

    /// Assigns a single [`TurtleOp`] to a symbol, replacing any previous
    /// assignment.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        let _ = self.ops.insert(symbol, op);
    }

    /// Walks `sentence` in order and returns the traced point path.
    ///
    /// The turtle starts at `start` with the identity orientation. Rotation
    /// symbols compose their fixed quarter-turn matrix onto the heading,
    /// `Forward` appends one point at `step_size` along the heading (rounded
    /// onto the lattice), and unregistered symbols have no effect. The result
    /// always begins with `start`, so its length is one more than the number
    /// of forward moves in the sentence.
    pub fn trace_path(&self, step_size: f32, sentence: &[char], start: Vec3) -> Vec<Vec3> {
        let mut path = vec![start];
        let mut state = TurtleState::at(start);

        for &symbol in sentence {
            let op = self.ops.get(&symbol).copied().unwrap_or(TurtleOp::Ignore);
            state = match op {
                TurtleOp::Forward => {
                    let next = state.advanced(step_size);
                    path.push(next.position);
                    next
                }
                _ => match op.rotation() {
                    Some(rotation) => state.rotated(rotation),
                    None => state,
                },
            };
        }

        debug!(
            symbols = sentence.len(),
            points = path.len(),
            "traced sentence"
        );
        path
    }
}

/// Traces `sentence` with the standard symbol set.
///
/// Shorthand for [`PathInterpreter::with_standard_symbols`] followed by
/// [`PathInterpreter::trace_path`].
pub fn interpret(step_size: f32, sentence: &[char], start: Vec3) -> Vec<Vec3> {
    PathInterpreter::with_standard_symbols().trace_path(step_size, sentence, start)
}
