pub mod builtins;


use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::{Environment, Function, HashKey, Value, FALSE, NULL, TRUE},
    lexer::prelude::Token,
    parser::prelude::{
        parse_from_stream, parse_source, ArrayLiteral, Block, Call, Expression,
        HashLiteral, If, Index, Infix, Prefix, Program, Statement, WhileStatement
    },
    utils::prelude::Error
};
use self::builtins::Builtin;

/// Evaluates a whole program. A `ReturnValue` escaping the top level is
/// unwrapped here; an `Error` stops evaluation and becomes the result.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = NULL;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Value::ReturnValue(value) => return *value,
            err @ Value::Error(_) => return err,
            value => result = value
        }
    }

    result
}

/// Runs a source file to completion and yields its final value.
pub fn run(path: PathBuf) -> Result<Value, Error> {
    let src = match std::fs::read_to_string(&path) {
        Ok(src) => src,
        Err(err) => return Err(Error::StdIo { err: err.kind() })
    };

    let parsed = parse_source(&src);

    if !parsed.errors.is_empty() {
        return Err(Error::Parse { path, src, errors: parsed.errors });
    }

    let env = Rc::new(RefCell::new(Environment::new()));

    Ok(eval_program(&parsed.program, &env))
}

/// Like [`run`], but lexes characters straight off the reader instead
/// of loading the file up front. The source accumulates on the side so
/// diagnostics can still show it.
pub fn run_from_stream(path: PathBuf) -> Result<Value, Error> {
    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(err) => return Err(Error::StdIo { err: err.kind() })
    };

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut reader = std::io::BufReader::new(file);
    let stream = reader.chars()
        .map_while(|c| c.ok())
        .map(|c| {
            src.push(c);
            c
        });

    let parsed = parse_from_stream(stream);

    if !parsed.errors.is_empty() {
        return Err(Error::Parse { path, src, errors: parsed.errors });
    }

    let env = Rc::new(RefCell::new(Environment::new()));

    Ok(eval_program(&parsed.program, &env))
}

fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Value {
    match statement {
        Statement::Let(let_statement) => {
            let value = eval_expression(&let_statement.value, env);
            if value.is_error() {
                return value;
            }

            env.borrow_mut().set(let_statement.name.value.clone(), value);

            NULL
        },
        Statement::Return(return_statement) => {
            let value = eval_expression(&return_statement.value, env);
            if value.is_error() {
                return value;
            }

            Value::ReturnValue(Box::new(value))
        },
        Statement::Expression(statement) => eval_expression(&statement.expression, env),
        Statement::While(while_statement) => eval_while(while_statement, env)
    }
}

/// Evaluates a block in a fresh scope. Unlike [`eval_program`] this
/// propagates `ReturnValue` untouched so the enclosing call unwraps it.
fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> Value {
    let scope = Rc::new(RefCell::new(Environment::with_parent(env.clone())));
    let mut result = NULL;

    for statement in &block.statements {
        result = eval_statement(statement, &scope);

        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_while(while_statement: &WhileStatement, env: &Rc<RefCell<Environment>>) -> Value {
    loop {
        let condition = eval_expression(&while_statement.condition, env);
        if condition.is_error() {
            return condition;
        }

        if !is_truthy(&condition) {
            return NULL;
        }

        let body = eval_block(&while_statement.body, env);

        if matches!(body, Value::ReturnValue(_) | Value::Error(_)) {
            return body;
        }
    }
}

fn eval_expression(expression: &Expression, env: &Rc<RefCell<Environment>>) -> Value {
    match expression {
        Expression::Identifier(identifier) => eval_identifier(&identifier.value, env),
        Expression::Integer(literal) => Value::Integer(literal.value),
        Expression::Boolean(literal) => if literal.value { TRUE } else { FALSE },
        Expression::String(literal) => Value::String(literal.value.clone()),
        Expression::Prefix(prefix) => eval_prefix(prefix, env),
        Expression::Infix(infix) => eval_infix(infix, env),
        Expression::If(if_expression) => eval_if(if_expression, env),
        Expression::Function(literal) => Value::Function(Rc::new(Function {
            parameters: literal.parameters.clone(),
            body: literal.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(call) => eval_call(call, env),
        Expression::Array(literal) => eval_array_literal(literal, env),
        Expression::Hash(literal) => eval_hash_literal(literal, env),
        Expression::Index(index) => eval_index(index, env)
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }

    match Builtin::lookup(name) {
        Some(builtin) => Value::Builtin(builtin),
        None => Value::Error(format!("identifier not found: {name}"))
    }
}

fn eval_prefix(prefix: &Prefix, env: &Rc<RefCell<Environment>>) -> Value {
    let right = eval_expression(&prefix.right, env);
    if right.is_error() {
        return right;
    }

    match prefix.operator {
        Token::Bang => if is_truthy(&right) { FALSE } else { TRUE },
        Token::Minus => match right {
            Value::Integer(value) => Value::Integer(-value),
            other => Value::Error(format!("unknown operator: -{}", other._type()))
        },
        _ => Value::Error(format!(
            "unknown operator: {}{}",
            prefix.operator.as_literal(),
            right._type()
        ))
    }
}

fn eval_infix(infix: &Infix, env: &Rc<RefCell<Environment>>) -> Value {
    let left = eval_expression(&infix.left, env);
    if left.is_error() {
        return left;
    }

    let right = eval_expression(&infix.right, env);
    if right.is_error() {
        return right;
    }

    eval_infix_operator(&infix.operator, left, right)
}

fn eval_infix_operator(operator: &Token, left: Value, right: Value) -> Value {
    if left._type() != right._type() {
        return Value::Error(format!(
            "type mismatch: {} {} {}",
            left._type(),
            operator.as_literal(),
            right._type()
        ));
    }

    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => match operator {
            Token::Plus => Value::String(format!("{l}{r}")),
            _ => unknown_operator(&left, operator, &right)
        },
        (Value::Boolean(l), Value::Boolean(r)) => match operator {
            Token::Equal => if l == r { TRUE } else { FALSE },
            Token::NotEqual => if l != r { TRUE } else { FALSE },
            _ => unknown_operator(&left, operator, &right)
        },
        _ => unknown_operator(&left, operator, &right)
    }
}

fn eval_integer_infix(operator: &Token, left: i64, right: i64) -> Value {
    match operator {
        Token::Plus => Value::Integer(left + right),
        Token::Minus => Value::Integer(left - right),
        Token::Asterisk => Value::Integer(left * right),
        Token::Slash => match right {
            0 => Value::Error("division by zero".to_string()),
            _ => Value::Integer(left / right)
        },
        Token::LessThan => if left < right { TRUE } else { FALSE },
        Token::GreaterThan => if left > right { TRUE } else { FALSE },
        Token::Equal => if left == right { TRUE } else { FALSE },
        Token::NotEqual => if left != right { TRUE } else { FALSE },
        _ => Value::Error(format!(
            "unknown operator: INTEGER {} INTEGER",
            operator.as_literal()
        ))
    }
}

fn unknown_operator(left: &Value, operator: &Token, right: &Value) -> Value {
    Value::Error(format!(
        "unknown operator: {} {} {}",
        left._type(),
        operator.as_literal(),
        right._type()
    ))
}

fn eval_if(if_expression: &If, env: &Rc<RefCell<Environment>>) -> Value {
    let condition = eval_expression(&if_expression.condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(&if_expression.consequence, env)
    } else if let Some(alternative) = &if_expression.alternative {
        eval_block(alternative, env)
    } else {
        NULL
    }
}

fn eval_call(call: &Call, env: &Rc<RefCell<Environment>>) -> Value {
    let callee = eval_expression(&call.function, env);
    if callee.is_error() {
        return callee;
    }

    let args = match eval_expressions(&call.arguments, env) {
        Ok(args) => args,
        Err(err) => return err
    };

    apply_function(callee, args)
}

/// Evaluates expressions left to right, short-circuiting on the first
/// one that produces an error.
fn eval_expressions(
    expressions: &[Expression],
    env: &Rc<RefCell<Environment>>
) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }

        values.push(value);
    }

    Ok(values)
}

fn apply_function(callee: Value, args: Vec<Value>) -> Value {
    match callee {
        Value::Builtin(builtin) => builtin.apply(args),
        Value::Function(function) => {
            if function.parameters.len() != args.len() {
                return Value::Error(format!(
                    "invalid number of args expected {} got {}",
                    function.parameters.len(),
                    args.len()
                ));
            }

            let extended = Rc::new(RefCell::new(
                Environment::with_parent(function.env.clone())
            ));

            for (parameter, arg) in function.parameters.iter().zip(args) {
                extended.borrow_mut().set(parameter.value.clone(), arg);
            }

            match eval_block(&function.body, &extended) {
                Value::ReturnValue(value) => *value,
                value => value
            }
        },
        other => Value::Error(format!("not a function: {}", other._type()))
    }
}

fn eval_array_literal(literal: &ArrayLiteral, env: &Rc<RefCell<Environment>>) -> Value {
    match eval_expressions(&literal.elements, env) {
        Ok(values) => Value::Array(Rc::new(values)),
        Err(err) => err
    }
}

fn eval_hash_literal(literal: &HashLiteral, env: &Rc<RefCell<Environment>>) -> Value {
    let mut pairs = HashMap::new();

    // pairs evaluate in source order; a later duplicate key wins
    for (key_expression, value_expression) in &literal.pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }

        let key = match HashKey::from_value(&key) {
            Ok(key) => key,
            Err(err) => return err
        };

        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(key, value);
    }

    Value::Hash(Rc::new(pairs))
}

fn eval_index(index: &Index, env: &Rc<RefCell<Environment>>) -> Value {
    let receiver = eval_expression(&index.left, env);
    if receiver.is_error() {
        return receiver;
    }

    let key = eval_expression(&index.index, env);
    if key.is_error() {
        return key;
    }

    match receiver {
        Value::Array(values) => match key {
            Value::Integer(idx) => {
                if idx < 0 || idx >= values.len() as i64 {
                    NULL
                } else {
                    values[idx as usize].clone()
                }
            },
            other => Value::Error(format!(
                "Expected index type to be INTEGER, got {}",
                other._type()
            ))
        },
        Value::Hash(pairs) => match HashKey::from_value(&key) {
            Ok(key) => pairs.get(&key).cloned().unwrap_or(NULL),
            Err(err) => err
        },
        other => Value::Error(format!(
            "Index operator not supported for type {}",
            other._type()
        ))
    }
}

/// Everything except the `FALSE` and `NULL` singletons counts as true.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Boolean(false) | Value::Null)
}
