//! Host built-in registry.
//!
//! Builtins receive the call's raw argument AST (not pre-evaluated values)
//! plus the caller's environment, exactly like the original interpreter's
//! `std::function<Object*(Node*, Environment*)>` builtin table — this lets
//! a builtin choose, per argument, whether and how to evaluate it. `print`/
//! `println` use that freedom to print array-literal arguments unevaluated.

use std::collections::HashMap;

use rand::Rng;

use crate::ast::Node;
use crate::environment::Environment;
use crate::evaluator::{evaluate_expression, EvalError};
use crate::value::Value;

pub type BuiltinFn = fn(&[Node], &mut Environment, &BuiltinRegistry) -> Result<Value, EvalError>;

/// Name → handler table. An embedder builds one with [`default_registry`]
/// and layers host built-ins (graphics, input, timing) on top via
/// [`BuiltinRegistry::register`]; the evaluator makes no structural
/// distinction between the two.
#[derive(Default)]
pub struct BuiltinRegistry {
    builtins: HashMap<String, BuiltinFn>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        BuiltinRegistry::default()
    }

    pub fn register(&mut self, name: impl Into<String>, f: BuiltinFn) {
        self.builtins.insert(name.into(), f);
    }

    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.builtins.get(name).copied()
    }
}

/// The generic built-ins named in the language's external ABI:
/// `print`, `println`, `len`, `rand_int`, `to_int`, `to_str`, `ceil`,
/// `floor`. Graphics/input built-ins are the host's concern and are not
/// registered here.
pub fn default_registry() -> BuiltinRegistry {
    let mut registry = BuiltinRegistry::new();
    registry.register("print", builtin_print);
    registry.register("println", builtin_println);
    registry.register("len", builtin_len);
    registry.register("rand_int", builtin_rand_int);
    registry.register("to_int", builtin_to_int);
    registry.register("to_str", builtin_to_str);
    registry.register("ceil", builtin_ceil);
    registry.register("floor", builtin_floor);
    registry
}

/// Renders one call argument: an `ArrayExpression` prints its elements
/// unevaluated (as source text), anything else is evaluated and inspected.
fn render_arg(
    node: &Node,
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<String, EvalError> {
    match node {
        Node::ArrayExpression { elements } => {
            let joined = elements
                .iter()
                .map(node_to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("[{joined}]"))
        }
        other => Ok(evaluate_expression(other, env, registry)?.inspect()),
    }
}

/// A lightweight, non-evaluating rendering of a node's source form, used
/// only for the array-literal print special case above.
fn node_to_string(node: &Node) -> String {
    match node {
        Node::Literal { value, .. } => value.clone(),
        Node::Identifier { name } => name.clone(),
        Node::ArrayExpression { elements } => {
            let joined = elements
                .iter()
                .map(node_to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{joined}]")
        }
        other => format!("{other:?}"),
    }
}

/// Renders every call argument, joined with a single space between each
/// pair (but not trailing the last), matching the original's
/// `(i == size - 1) ? "" : " "` spacing in its `print`/`println` lambdas.
fn render_args(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<String, EvalError> {
    let mut rendered = Vec::with_capacity(args.len());
    for arg in args {
        rendered.push(render_arg(arg, env, registry)?);
    }
    Ok(rendered.join(" "))
}

fn builtin_print(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    print!("{}", render_args(args, env, registry)?);
    Ok(Value::Unit)
}

fn builtin_println(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    println!("{}", render_args(args, env, registry)?);
    Ok(Value::Unit)
}

fn builtin_len(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    expect_arity("len", args, 1)?;
    match evaluate_expression(&args[0], env, registry)? {
        Value::String(s) => Ok(Value::Int(s.len() as i64)),
        other => Err(EvalError::InvalidArgument(format!(
            "len expects a String, found {}",
            other.type_name()
        ))),
    }
}

fn builtin_rand_int(
    args: &[Node],
    _env: &mut Environment,
    _registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    expect_arity("rand_int", args, 0)?;
    let n: u32 = rand::thread_rng().gen();
    Ok(Value::Int(n as i64))
}

fn builtin_to_int(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    expect_arity("to_int", args, 1)?;
    match evaluate_expression(&args[0], env, registry)? {
        Value::Float(f) => Ok(Value::Int(f.floor() as i64)),
        other => Err(EvalError::InvalidArgument(format!(
            "to_int expects a Float, found {}",
            other.type_name()
        ))),
    }
}

fn builtin_to_str(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    expect_arity("to_str", args, 1)?;
    let value = evaluate_expression(&args[0], env, registry)?;
    Ok(Value::String(value.inspect()))
}

fn builtin_ceil(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    expect_arity("ceil", args, 1)?;
    match evaluate_expression(&args[0], env, registry)? {
        Value::Float(f) => Ok(Value::Int(f.ceil() as i64)),
        Value::Int(i) => Ok(Value::Int(i)),
        other => Err(EvalError::InvalidArgument(format!(
            "ceil expects a Float or Int, found {}",
            other.type_name()
        ))),
    }
}

fn builtin_floor(
    args: &[Node],
    env: &mut Environment,
    registry: &BuiltinRegistry,
) -> Result<Value, EvalError> {
    expect_arity("floor", args, 1)?;
    match evaluate_expression(&args[0], env, registry)? {
        Value::Float(f) => Ok(Value::Int(f.floor() as i64)),
        Value::Int(i) => Ok(Value::Int(i)),
        other => Err(EvalError::InvalidArgument(format!(
            "floor expects a Float or Int, found {}",
            other.type_name()
        ))),
    }
}

fn expect_arity(name: &str, args: &[Node], expected: usize) -> Result<(), EvalError> {
    if args.len() != expected {
        Err(EvalError::ArityMismatch {
            name: name.to_string(),
            expected,
            found: args.len(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse_program;

    fn call(src: &str) -> Result<Value, EvalError> {
        let tokens = tokenize(src).unwrap();
        let program = parse_program(tokens).unwrap();
        let mut env = Environment::new();
        let registry = default_registry();
        crate::evaluator::evaluate(&program, &mut env, &registry)
    }

    #[test]
    fn len_of_string() {
        assert_eq!(call("return len(\"hello\");").unwrap(), Value::Int(5));
    }

    #[test]
    fn len_of_non_string_is_invalid_argument() {
        assert!(matches!(
            call("return len(1);").unwrap_err(),
            EvalError::InvalidArgument(_)
        ));
    }

    #[test]
    fn to_int_floors_a_float() {
        assert_eq!(call("return to_int(3.9);").unwrap(), Value::Int(3));
    }

    #[test]
    fn to_str_inspects_any_value() {
        assert_eq!(call("return to_str(7);").unwrap(), Value::String("7".into()));
    }

    #[test]
    fn ceil_and_floor_accept_int_or_float() {
        assert_eq!(call("return ceil(3.2);").unwrap(), Value::Int(4));
        assert_eq!(call("return floor(3.8);").unwrap(), Value::Int(3));
        assert_eq!(call("return ceil(5);").unwrap(), Value::Int(5));
    }

    #[test]
    fn rand_int_takes_no_arguments() {
        assert!(matches!(
            call("return rand_int(1);").unwrap_err(),
            EvalError::ArityMismatch { .. }
        ));
    }

    #[test]
    fn print_does_not_error_on_mixed_arguments() {
        assert!(call("println(\"x\", 1, [1, 2]);").is_ok());
    }

    #[test]
    fn render_args_joins_with_a_single_space() {
        let tokens = tokenize("print(1, 2, 3);").unwrap();
        let program = parse_program(tokens).unwrap();
        let Node::CallExpression { args, .. } = &program[0] else {
            panic!("expected CallExpression");
        };
        let mut env = Environment::new();
        let registry = default_registry();
        assert_eq!(render_args(args, &mut env, &registry).unwrap(), "1 2 3");
    }
}
