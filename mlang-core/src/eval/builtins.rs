use std::rc::Rc;

use crate::environment::prelude::{HashKey, Value, NULL};

/// The native procedures reachable by name when an identifier is not
/// bound in any environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Erase,
    Puts,
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Builtin> {
        Some(match name {
            "len" => Self::Len,
            "first" => Self::First,
            "last" => Self::Last,
            "rest" => Self::Rest,
            "push" => Self::Push,
            "erase" => Self::Erase,
            "puts" => Self::Puts,

            _ => return None
        })
    }

    pub fn apply(&self, args: Vec<Value>) -> Value {
        match self {
            Self::Len => eval_len(args),
            Self::First => eval_getter("first", args, |values| values.first().cloned()),
            Self::Last => eval_getter("last", args, |values| values.last().cloned()),
            Self::Rest => eval_rest(args),
            Self::Push => eval_push(args),
            Self::Erase => eval_erase(args),
            Self::Puts => eval_puts(args),
        }
    }
}

fn wrong_arity(name: &str, expected: &str, got: usize) -> Value {
    Value::Error(format!(
        "invalid number of parameters for {name}, expected {expected} got {got}"
    ))
}

fn eval_len(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_arity("len", "1", args.len());
    }

    match &args[0] {
        Value::String(value) => Value::Integer(value.len() as i64),
        Value::Array(values) => Value::Integer(values.len() as i64),
        other => Value::Error(format!("len is not implemented for type {}", other._type()))
    }
}

fn eval_getter(
    name: &str,
    args: Vec<Value>,
    getter: impl Fn(&[Value]) -> Option<Value>
) -> Value {
    if args.len() != 1 {
        return wrong_arity(name, "1", args.len());
    }

    match &args[0] {
        Value::Array(values) => getter(values).unwrap_or(NULL),
        other => Value::Error(format!("{name} is not implemented for type {}", other._type()))
    }
}

fn eval_rest(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_arity("rest", "1", args.len());
    }

    match &args[0] {
        Value::Array(values) => {
            if values.is_empty() {
                return NULL;
            }

            Value::Array(Rc::new(values[1..].to_vec()))
        },
        Value::String(value) => {
            if value.is_empty() {
                return NULL;
            }

            Value::String(value.chars().skip(1).collect())
        },
        other => Value::Error(format!("rest is not implemented for type {}", other._type()))
    }
}

// push never mutates its argument; it hands back a fresh container
fn eval_push(args: Vec<Value>) -> Value {
    if args.is_empty() {
        return wrong_arity("push", "2", 0);
    }

    match &args[0] {
        Value::Array(values) => {
            if args.len() != 2 {
                return wrong_arity("push", "2", args.len());
            }

            let mut values = values.as_ref().clone();
            values.push(args[1].clone());

            Value::Array(Rc::new(values))
        },
        Value::Hash(pairs) => {
            if args.len() != 3 {
                return wrong_arity("push", "3", args.len());
            }

            let key = match HashKey::from_value(&args[1]) {
                Ok(key) => key,
                Err(err) => return err
            };

            let mut pairs = pairs.as_ref().clone();
            pairs.insert(key, args[2].clone());

            Value::Hash(Rc::new(pairs))
        },
        other => Value::Error(format!("push is not implemented for type {}", other._type()))
    }
}

fn eval_erase(args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return wrong_arity("erase", "2", args.len());
    }

    match &args[0] {
        Value::Hash(pairs) => {
            let key = match HashKey::from_value(&args[1]) {
                Ok(key) => key,
                Err(err) => return err
            };

            let mut pairs = pairs.as_ref().clone();
            pairs.remove(&key);

            Value::Hash(Rc::new(pairs))
        },
        other => Value::Error(format!("erase is not implemented for type {}", other._type()))
    }
}

fn eval_puts(args: Vec<Value>) -> Value {
    if args.is_empty() {
        return wrong_arity("puts", "at least 1", 0);
    }

    for arg in &args {
        println!("{arg}");
    }

    NULL
}
