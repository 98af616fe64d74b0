use super::prelude::{parse_source, Expression, Statement};

fn parse_single_statement(input: &str) -> Statement {
    let parsed = parse_source(input);

    assert!(
        parsed.errors.is_empty(),
        "unexpected parse errors for {input:?}: {:?}",
        parsed.errors
    );
    assert_eq!(parsed.program.statements.len(), 1, "input: {input:?}");

    parsed.program.statements.into_iter().next().unwrap()
}

fn parse_single_expression(input: &str) -> Expression {
    match parse_single_statement(input) {
        Statement::Expression(statement) => statement.expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn test_let_statements() {
    let cases = [
        ("let x = 5;", "x", "5"),
        ("let y = true;", "y", "true"),
        ("let foobar = y;", "foobar", "y"),
    ];

    for (input, name, value) in cases {
        match parse_single_statement(input) {
            Statement::Let(statement) => {
                assert_eq!(statement.name.value, name);
                assert_eq!(statement.value.to_string(), value);
            },
            other => panic!("expected a let statement, got {other:?}")
        }
    }
}

#[test]
fn test_return_statements() {
    let input = r#"
    return 5;
    return 10;
    return 585;"#;

    let parsed = parse_source(input);

    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    assert_eq!(parsed.program.statements.len(), 3);

    for statement in &parsed.program.statements {
        assert!(
            matches!(statement, Statement::Return(_)),
            "expected a return statement, got {statement:?}"
        );
    }
}

#[test]
fn test_identifier_expression() {
    let input = "parse_me_daddy;";

    match parse_single_expression(input) {
        Expression::Identifier(identifier) => {
            assert_eq!(identifier.value, "parse_me_daddy");
        },
        other => panic!("expected an identifier, got {other:?}")
    }
}

#[test]
fn test_integer_literal() {
    match parse_single_expression("5;") {
        Expression::Integer(literal) => assert_eq!(literal.value, 5),
        other => panic!("expected an integer literal, got {other:?}")
    }
}

#[test]
fn test_boolean_literals() {
    for (input, expected) in [("true;", true), ("false;", false)] {
        match parse_single_expression(input) {
            Expression::Boolean(literal) => assert_eq!(literal.value, expected),
            other => panic!("expected a boolean literal, got {other:?}")
        }
    }
}

#[test]
fn test_string_literal() {
    match parse_single_expression(r#""hello world";"#) {
        Expression::String(literal) => assert_eq!(literal.value, "hello world"),
        other => panic!("expected a string literal, got {other:?}")
    }
}

#[test]
fn test_prefix_expressions() {
    let cases = [
        ("!3;", "!", 3),
        ("-3;", "-", 3),
    ];

    for (input, operator, value) in cases {
        match parse_single_expression(input) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator.as_literal(), operator);
                match *prefix.right {
                    Expression::Integer(ref literal) => assert_eq!(literal.value, value),
                    ref other => panic!("expected an integer operand, got {other:?}")
                }
            },
            other => panic!("expected a prefix expression, got {other:?}")
        }
    }
}

#[test]
fn test_infix_expressions() {
    let cases = [
        ("5 + 5;", "+"),
        ("5 - 5;", "-"),
        ("5 * 5;", "*"),
        ("5 / 5;", "/"),
        ("5 > 5;", ">"),
        ("5 < 5;", "<"),
        ("5 == 5;", "=="),
        ("5 != 5;", "!="),
    ];

    for (input, operator) in cases {
        match parse_single_expression(input) {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator.as_literal(), operator);
                assert!(matches!(*infix.left, Expression::Integer(_)));
                assert!(matches!(*infix.right, Expression::Integer(_)));
            },
            other => panic!("expected an infix expression, got {other:?}")
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"
        ),
    ];

    for (input, expected) in cases {
        let parsed = parse_source(input);

        assert!(parsed.errors.is_empty(), "{input:?}: {:?}", parsed.errors);
        assert_eq!(parsed.program.to_string(), expected, "input: {input:?}");
    }
}

#[test]
fn test_if_expression() {
    let input = "if (x < y) {x}";

    match parse_single_expression(input) {
        Expression::If(if_expression) => {
            assert_eq!(if_expression.condition.to_string(), "(x < y)");
            assert_eq!(if_expression.consequence.statements.len(), 1);
            assert!(if_expression.alternative.is_none());
        },
        other => panic!("expected an if expression, got {other:?}")
    }
}

#[test]
fn test_if_else_round_trip() {
    let input = "if (x < y) {x} else {y}";
    let parsed = parse_source(input);

    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    assert_eq!(parsed.program.to_string(), input);
}

#[test]
fn test_function_literal() {
    let input = "fn(x, y) { x + y; }";

    match parse_single_expression(input) {
        Expression::Function(literal) => {
            assert_eq!(literal.parameters.len(), 2);
            assert_eq!(literal.parameters[0].value, "x");
            assert_eq!(literal.parameters[1].value, "y");
            assert_eq!(literal.to_string(), "fn(x, y){(x + y)}");
        },
        other => panic!("expected a function literal, got {other:?}")
    }
}

#[test]
fn test_function_parameters() {
    let cases = [
        ("fn() {};", vec![]),
        ("fn(x) {};", vec!["x"]),
        ("fn(x, y, z) {};", vec!["x", "y", "z"]),
    ];

    for (input, expected) in cases {
        match parse_single_expression(input) {
            Expression::Function(literal) => {
                let parameters = literal.parameters.iter()
                    .map(|parameter| parameter.value.as_str())
                    .collect::<Vec<&str>>();

                assert_eq!(parameters, expected);
            },
            other => panic!("expected a function literal, got {other:?}")
        }
    }
}

#[test]
fn test_call_expression() {
    let input = "add(1, 2 * 3, 4 + 5);";

    match parse_single_expression(input) {
        Expression::Call(call) => {
            assert_eq!(call.function.to_string(), "add");
            assert_eq!(call.arguments.len(), 3);
            assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
        },
        other => panic!("expected a call expression, got {other:?}")
    }
}

#[test]
fn test_array_literals() {
    match parse_single_expression("[1, 2 * 2, 3 + 3]") {
        Expression::Array(literal) => {
            assert_eq!(literal.elements.len(), 3);
            assert_eq!(literal.elements[1].to_string(), "(2 * 2)");
        },
        other => panic!("expected an array literal, got {other:?}")
    }

    match parse_single_expression("[]") {
        Expression::Array(literal) => assert!(literal.elements.is_empty()),
        other => panic!("expected an array literal, got {other:?}")
    }
}

#[test]
fn test_hash_literals_keep_source_order() {
    let input = r#"{"one": 1, "two": 2, "three": 3}"#;

    match parse_single_expression(input) {
        Expression::Hash(literal) => {
            let keys = literal.pairs.iter()
                .map(|(key, _)| key.to_string())
                .collect::<Vec<String>>();

            assert_eq!(keys, vec!["\"one\"", "\"two\"", "\"three\""]);
        },
        other => panic!("expected a hash literal, got {other:?}")
    }

    match parse_single_expression("{}") {
        Expression::Hash(literal) => assert!(literal.pairs.is_empty()),
        other => panic!("expected a hash literal, got {other:?}")
    }
}

#[test]
fn test_index_expression() {
    let input = "myArray[1 + 1]";

    match parse_single_expression(input) {
        Expression::Index(index) => {
            assert_eq!(index.left.to_string(), "myArray");
            assert_eq!(index.index.to_string(), "(1 + 1)");
        },
        other => panic!("expected an index expression, got {other:?}")
    }
}

#[test]
fn test_while_statement() {
    let input = "while (x < 3) { x; }";

    match parse_single_statement(input) {
        Statement::While(statement) => {
            assert_eq!(statement.condition.to_string(), "(x < 3)");
            assert_eq!(statement.body.statements.len(), 1);
        },
        other => panic!("expected a while statement, got {other:?}")
    }

    let parsed = parse_source(input);
    assert_eq!(parsed.program.to_string(), "while((x < 3)){x}");
}

#[test]
fn test_printed_programs_reparse() {
    // the canonical printer's output is itself parseable, and printing
    // is a fixed point from there on
    let inputs = [
        "a + b * c + d / e - f",
        "!(true == true)",
        "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
        "a * [1, 2, 3, 4][b * c] * d",
        "if (x < y) {x} else {y}",
        "let x = 5; fn(a) { a * x; }(2);",
        "while (x < 3) { let x = x + 1; }",
        "{\"one\": 1, \"two\": 2}[\"one\"]",
    ];

    for input in inputs {
        let first = parse_source(input);
        assert!(first.errors.is_empty(), "{input:?}: {:?}", first.errors);

        let printed = first.program.to_string();
        let second = parse_source(&printed);

        assert!(second.errors.is_empty(), "{printed:?}: {:?}", second.errors);
        assert_eq!(second.program.to_string(), printed, "input: {input:?}");
    }
}

#[test]
fn test_equal_inputs_parse_equal() {
    let input = "let x = 5; fn(a) { a * x; }(2);";

    let first = parse_source(input);
    let second = parse_source(input);

    assert!(first.errors.is_empty(), "{:?}", first.errors);
    assert_eq!(first.program, second.program);
}

#[test]
fn test_parse_errors() {
    let cases = [
        (
            "let x 5;",
            "expected next token to be ASSIGN, got Token{INT, '5'} instead"
        ),
        (
            "let = 5;",
            "expected next token to be IDENT, got Token{ASSIGN, '='} instead"
        ),
        (
            "@;",
            "No prefix parse function found for Token{ILLEGAL, '@'}"
        ),
        (
            "let x = 5",
            "expected SEMICOLON, got EOFILE"
        ),
        (
            "[",
            "expected expression, got EOFILE"
        ),
        (
            r#"{"one": 1,"#,
            "expected expression or RBRACE, got EOFILE"
        ),
        (
            "9223372036854775808",
            "failed to parse integer 9223372036854775808"
        ),
        (
            r#""never closed"#,
            "unterminated string literal"
        ),
    ];

    for (input, expected) in cases {
        let parsed = parse_source(input);

        assert!(!parsed.errors.is_empty(), "expected errors for {input:?}");
        assert_eq!(parsed.errors[0].message(), expected, "input: {input:?}");
    }
}

#[test]
fn test_parsing_continues_after_a_bad_statement() {
    let parsed = parse_source("let x 5; let y = 7;");

    assert!(!parsed.errors.is_empty());
    // the second statement still makes it into the program
    assert!(parsed.program.statements.iter().any(|statement| {
        matches!(statement, Statement::Let(let_statement) if let_statement.name.value == "y")
    }));
}
