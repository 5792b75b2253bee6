// Render and re-parse tests over the demo programs

use pseudo::parser::ast::*;
use pseudo::parser::tree::dump;
use pseudo::{lint, parse, render};
use std::fs;
use std::path::Path;

fn read_demo(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    fs::read_to_string(path).expect("Failed to read demo file")
}

fn assert_round_trip(source: &str) {
    let program = parse(source).expect("Parsing failed");
    let rendered = render(&program);
    let reparsed = parse(&rendered)
        .unwrap_or_else(|e| panic!("Rendered source failed to parse: {}\n{}", e, rendered));
    assert_eq!(program, reparsed, "Round trip changed the tree:\n{}", rendered);

    // Canonical output is a fixed point
    assert_eq!(render(&reparsed), rendered);
}

#[test]
fn test_round_trip_demos() {
    for name in ["suma.txt", "cmmdc.txt", "cifre.txt"] {
        assert_round_trip(&read_demo(name));
    }
}

#[test]
fn test_round_trip_typeset_demo() {
    let source = lint(&read_demo("subiect.txt"));
    let program = parse(&source).expect("Parsing failed");
    assert_eq!(program.statements.len(), 4);
    assert!(matches!(
        &program.statements[2],
        Statement::While { body, .. } if body.len() == 2
    ));
    assert_round_trip(&source);
}

#[test]
fn test_round_trip_expressions() {
    let sources = [
        "x <- a sau b si not c",
        "x <- not (a sau b)",
        "x <- (a + b) * c - d / e % f",
        "x <- a - (b - c)",
        "x <- -a + √b * [c / 2]",
        "x <- a < b = (c >= d)",
        "scrie \"a\", 'b\"c', 3.25, -7",
    ];
    for source in sources {
        assert_round_trip(source);
    }
}

#[test]
fn test_round_trip_nested_loops() {
    assert_round_trip(
        "executa\n\
         executa a <- a + 1 cat timp a < 3\n\
         cat timp b executa b <- b - 1 sf\n\
         cat timp c",
    );
    assert_round_trip("executa x <- x + 1 cat timp x < 5 executa y <- y + 1 cat timp y < 5");
    assert_round_trip("executa executa scrie a cat timp p executa scrie b cat timp q cat timp r");
    assert_round_trip("repeta repeta scrie 1 pana cand a pana cand b");
    assert_round_trip("daca a atunci altfel sf");
    assert_round_trip("pentru i <- 10, 1, -2 executa daca i % 3 = 0 atunci scrie i sf sf");
}

#[test]
fn test_hand_built_tree_renders() {
    let program = Program {
        statements: vec![Statement::Sequence {
            statements: vec![
                Statement::Read {
                    names: vec!["a".to_string()],
                },
                Statement::Swap {
                    left: "a".to_string(),
                    right: "b".to_string(),
                },
            ],
        }],
    };
    assert_eq!(render(&program), "citeste a; a <-> b\n");
    assert_eq!(parse(&render(&program)).expect("Parsing failed"), program);
}

#[test]
fn test_dump_demo() {
    let program = parse(&read_demo("suma.txt")).expect("Parsing failed");
    let tree = dump(&program);

    assert!(tree.starts_with("(program\n  (read\n    (identifier \"n\")\n  )\n"));
    assert!(tree.contains("(for\n"));
    assert!(tree.contains("(string \"suma = \")"));
    assert!(tree.ends_with(")\n"));
}
