use criterion::{criterion_group, criterion_main, Criterion};
use std::io;
use twig_parser::ast::Node;
use twig_parser::parser::Parser;
use twig_source::Source;
use twig_walker::Walker;

fn parse(source: &str) -> Node {
    let source = Source::new(source);
    let ast = Parser::new(&source).parse_program();
    assert!(source.has_no_errors());
    ast
}

fn long_expr(c: &mut Criterion) {
    let mut source = "let a = 1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 3 * 2");
    }
    source.push(';');
    let ast = parse(&source);

    c.bench_function("walk-long-expr", |b| {
        b.iter(|| Walker::new(io::sink()).run(&ast).unwrap())
    });
}

fn many_declarations(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..1000 {
        source.push_str(&format!("let v{} = {} / 3 - 1;\nprint(v{}, v{} + \"!\");\n", i, i, i, i));
    }
    let ast = parse(&source);

    c.bench_function("walk-many-declarations", |b| {
        b.iter(|| Walker::new(io::sink()).run(&ast).unwrap())
    });
}

criterion_group!(benches, long_expr, many_declarations);
criterion_main!(benches);
