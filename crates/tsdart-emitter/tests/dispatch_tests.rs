//! Step chain ordering, default traversal and fatal defects.

mod support;

use support::*;
use tsdart_emitter::steps::{StatementStep, default_steps};
use tsdart_emitter::{TranslateError, TranslateResult, TranslationStep, Transpiler, UnitTranslator};
use tsdart_syntax::{Name, Node, NodeArena, NodeData, NodeIndex};

/// Claims identifiers and emits them upper-cased.
struct ShoutingIdentifiers;

impl TranslationStep for ShoutingIdentifiers {
    fn name(&self) -> &'static str {
        "shouting"
    }

    fn attempt(
        &self,
        t: &mut UnitTranslator<'_>,
        _idx: NodeIndex,
        node: &Node,
    ) -> TranslateResult<bool> {
        match &node.data {
            NodeData::Name(Name::Identifier { text }) => {
                t.emit(&text.to_uppercase());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[test]
fn test_default_step_order() {
    assert_eq!(
        transpiler().step_names(),
        vec!["literals", "expressions", "statements", "types", "declarations"]
    );
}

#[test]
fn test_empty_source_file() {
    let mut arena = NodeArena::new();
    let out = translate(&mut arena, vec![]);
    assert_eq!(out.text, "");
    assert_eq!(out.file_name, "test.ts");
    assert!(out.is_success());
}

#[test]
fn test_unclaimed_leaf_is_fatal() {
    let mut arena = NodeArena::new();
    let x = arena.identifier("x");
    let stmt = arena.expression_statement(x);
    let root = arena.source_file("test.ts", vec![stmt]);

    let err = Transpiler::with_steps(options(), vec![])
        .translate_unit(&arena, root, None)
        .unwrap_err();
    assert!(matches!(
        err,
        TranslateError::UnhandledNode {
            kind: "Identifier",
            ..
        }
    ));
}

#[test]
fn test_unclaimed_parents_are_traversed() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let b = arena.identifier("b");
    let first = arena.expression_statement(a);
    let second = arena.expression_statement(b);
    let root = arena.source_file("test.ts", vec![first, second]);

    let out = Transpiler::with_steps(options(), vec![Box::new(ShoutingIdentifiers)])
        .translate_unit(&arena, root, None)
        .unwrap();
    assert_eq!(out.text, " A B");
}

#[test]
fn test_earlier_step_wins() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let stmt = arena.expression_statement(a);
    let root = arena.source_file("test.ts", vec![stmt]);

    let mut steps: Vec<Box<dyn TranslationStep>> = vec![Box::new(ShoutingIdentifiers)];
    steps.extend(default_steps());
    let transpiler = Transpiler::with_steps(options(), steps);
    assert_eq!(transpiler.step_names()[0], "shouting");

    let out = transpiler.translate_unit(&arena, root, None).unwrap();
    assert_eq!(out.text, " A ;");
}

#[test]
fn test_partial_chain_uses_claimed_output_only() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let stmt = arena.expression_statement(a);
    let root = arena.source_file("test.ts", vec![stmt]);

    let steps: Vec<Box<dyn TranslationStep>> =
        vec![Box::new(StatementStep), Box::new(ShoutingIdentifiers)];
    let out = Transpiler::with_steps(options(), steps)
        .translate_unit(&arena, root, None)
        .unwrap();
    assert_eq!(out.text, " A ;");
}

#[test]
fn test_units_translate_concurrently() {
    let mut first = NodeArena::new();
    let a = first.identifier("a");
    let stmt = first.expression_statement(a);
    let first_root = first.source_file("a.ts", vec![stmt]);

    let mut second = NodeArena::new();
    let one = second.numeric_literal("1");
    let stmt = second.expression_statement(one);
    let second_root = second.source_file("b.ts", vec![stmt]);

    let transpiler = transpiler();
    let (left, right) = std::thread::scope(|scope| {
        let left = scope.spawn(|| transpiler.translate_unit(&first, first_root, None));
        let right = scope.spawn(|| transpiler.translate_unit(&second, second_root, None));
        (left.join().unwrap(), right.join().unwrap())
    });
    let left = left.unwrap();
    let right = right.unwrap();
    assert_eq!((left.file_name.as_str(), left.text.as_str()), ("a.ts", " a ;"));
    assert_eq!((right.file_name.as_str(), right.text.as_str()), ("b.ts", " 1 ;"));
}
