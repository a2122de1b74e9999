//! Core of a tree-walking interpreter for a small imperative,
//! expression-oriented scripting language.
//!
//! The crate owns three tightly coupled subsystems: a hand-written scanner
//! ([`lexer`]), a Pratt-style expression parser plus statement parser
//! ([`parser`]) producing an AST ([`ast`]), and a tree-walking evaluator
//! ([`evaluator`]) with a value model ([`value`]), a lexically-scoped
//! environment ([`environment`]), and a fixed registry of host built-in
//! functions ([`builtins`]).
//!
//! The command-line front-end, file I/O, and the concrete graphics/input
//! built-in library are out of scope here — this crate consumes a source
//! string and a handle to a built-in registry, and produces evaluation
//! side effects through that registry plus a success/failure outcome.

pub mod ast;
pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

use thiserror::Error;

pub use ast::{DataType, Node};
pub use builtins::{default_registry, BuiltinFn, BuiltinRegistry};
pub use environment::Environment;
pub use evaluator::EvalError;
pub use lexer::LexError;
pub use parser::ParseError;
pub use token::{Token, TokenKind};
pub use value::{FunctionObject, Value};

/// The single error type a caller — a CLI, a test, an embedder — sees
/// regardless of which phase failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpreterError {
    #[error("error while parsing: {0}")]
    Parse(#[from] ParseError),
    #[error("error while evaluating: {0}")]
    Eval(#[from] EvalError),
}

/// An interpreter instance: just the built-in registry, the one
/// configurable knob the core owns. Construct with [`Interpreter::new`]
/// for the generic built-ins, or [`Interpreter::with_registry`] to supply
/// a registry that also carries host-specific built-ins (graphics, input,
/// or anything else) registered alongside or instead of them.
pub struct Interpreter {
    registry: BuiltinRegistry,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            registry: default_registry(),
        }
    }

    pub fn with_registry(registry: BuiltinRegistry) -> Self {
        Interpreter { registry }
    }

    /// Scans, parses, and evaluates `source` against a fresh global
    /// environment, returning the value of the top-level `return`
    /// statement that fired, if any, or `Unit` otherwise.
    pub fn run(&self, source: &str) -> Result<Value, InterpreterError> {
        let tokens = lexer::tokenize(source).map_err(ParseError::from)?;
        let program = parser::parse_program(tokens)?;
        let mut env = Environment::new();
        let value = evaluator::evaluate(&program, &mut env, &self.registry)?;
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

/// Convenience entry point: runs `source` with the default built-in
/// registry and a fresh environment.
pub fn run(source: &str) -> Result<Value, InterpreterError> {
    Interpreter::new().run(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_arithmetic_and_returns_value() {
        assert_eq!(run("return 1 + 2 * 3;").unwrap(), Value::Int(7));
    }

    #[test]
    fn empty_program_yields_unit() {
        assert_eq!(run("").unwrap(), Value::Unit);
    }

    #[test]
    fn parse_error_propagates_with_prefix() {
        let err = run("let x = ;").unwrap_err();
        assert!(err.to_string().starts_with("error while parsing: "));
    }

    #[test]
    fn eval_error_propagates_with_prefix() {
        let err = run("return y;").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error while evaluating: undefined identifier: y"
        );
    }

    #[test]
    fn with_registry_allows_host_builtins() {
        fn host_double(
            args: &[Node],
            env: &mut Environment,
            registry: &BuiltinRegistry,
        ) -> Result<Value, EvalError> {
            if args.len() != 1 {
                return Err(EvalError::ArityMismatch {
                    name: "double".into(),
                    expected: 1,
                    found: args.len(),
                });
            }
            match evaluator::evaluate_expression(&args[0], env, registry)? {
                Value::Int(i) => Ok(Value::Int(i * 2)),
                other => Err(EvalError::InvalidArgument(format!(
                    "double expects an Int, found {}",
                    other.type_name()
                ))),
            }
        }

        let mut registry = default_registry();
        registry.register("double", host_double);
        let interpreter = Interpreter::with_registry(registry);
        assert_eq!(
            interpreter.run("return double(21);").unwrap(),
            Value::Int(42)
        );
    }
}
