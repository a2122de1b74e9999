//! Variable and function bindings.
//!
//! A user-function call gets a brand new `Environment` holding only its
//! parameter bindings — it does not chain up to the caller's or the global
//! environment. No parent-scope lookup chain: this is a deliberate
//! simplification, matching the original interpreter's non-closure
//! semantics rather than adding one.

use std::collections::HashMap;

use crate::value::{FunctionObject, Value};

#[derive(Debug, Default)]
pub struct Environment {
    vars: HashMap<String, Value>,
    funcs: HashMap<String, FunctionObject>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    pub fn get_func(&self, name: &str) -> Option<&FunctionObject> {
        self.funcs.get(name)
    }

    pub fn has_func(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    pub fn set_func(&mut self, name: impl Into<String>, func: FunctionObject) {
        self.funcs.insert(name.into(), func);
    }
}
