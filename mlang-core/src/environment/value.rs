use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::rc::Rc;

use crate::eval::builtins::Builtin;
use crate::parser::prelude::{Block, Identifier};
use super::environment::Environment;

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

/// A runtime value. `ReturnValue` and `Error` are control-flow
/// sentinels owned by the evaluator; they never end up inside an
/// environment or a composite value.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Array(Rc<Vec<Value>>),
    Hash(Rc<HashMap<HashKey, Value>>),
    Function(Rc<Function>),
    Builtin(Builtin),
    ReturnValue(Box<Value>),
    Error(String),
}

impl Value {
    pub fn _type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Boolean(_) => ValueType::Boolean,
            Self::String(_) => ValueType::String,
            Self::Null => ValueType::Nil,
            Self::Array(_) => ValueType::Array,
            Self::Hash(_) => ValueType::Hash,
            Self::Function(_) => ValueType::Function,
            Self::Builtin(_) => ValueType::Builtin,
            Self::ReturnValue(_) => ValueType::Return,
            Self::Error(_) => ValueType::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Hash(left), Self::Hash(right)) => left == right,
            // captured environments may be cyclic; identity is the only
            // safe comparison for functions
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left == right,
            (Self::ReturnValue(left), Self::ReturnValue(right)) => left == right,
            (Self::Error(left), Self::Error(right)) => left == right,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
            Self::Null => write!(f, "null"),
            Self::Array(values) => {
                let elements = values.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<String>>();

                write!(f, "[{}]", elements.join(", "))
            },
            Self::Hash(pairs) => {
                let pairs = pairs.iter()
                    .map(|(key, value)| format!("{key}:{value}"))
                    .collect::<Vec<String>>();

                write!(f, "{{{}}}", pairs.join(", "))
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// A user function: parameter list and body shared with the literal
/// that produced it, plus the environment captured at that point.
#[derive(Clone)]
pub struct Function {
    pub parameters: Rc<Vec<Identifier>>,
    pub body: Rc<Block>,
    pub env: Rc<RefCell<Environment>>,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self.parameters.iter()
            .map(|parameter| parameter.value.clone())
            .collect::<Vec<String>>();

        write!(f, "fn({}){{{}}}", parameters.join(", "), self.body)
    }
}

impl std::fmt::Debug for Function {
    // the captured environment can point back at this function; keep
    // it out of the debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Hash keys are restricted to the three hashable value kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl HashKey {
    pub fn from_value(value: &Value) -> Result<Self, Value> {
        match value {
            Value::Integer(value) => Ok(Self::Integer(*value)),
            Value::Boolean(value) => Ok(Self::Boolean(*value)),
            Value::String(value) => Ok(Self::String(value.clone())),
            other => Err(Value::Error(
                format!("object of type {} is not hashable", other._type())
            )),
        }
    }
}

impl Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Boolean,
    String,
    Nil,
    Array,
    Hash,
    Function,
    Builtin,
    Return,
    Error,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Nil => "NIL",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Return => "RETURN",
            Self::Error => "ERROR",
        };

        write!(f, "{name}")
    }
}
