use criterion::*;
use php_parser::Lexer;
use php_parser::NodeKind;
use php_parser::Parser;

const SOURCE: &str = r#"<?php
namespace App;

use App\Support\Collection;

class Invoice
{
    private $lines = [];

    public function add($label, $amount)
    {
        $this->lines[] = ['label' => (string) $label, 'amount' => $amount];
        return $this;
    }

    public function total()
    {
        $total = 0;
        foreach ($this->lines as $line) {
            $total += $line['amount'];
        }
        return $total;
    }

    public function render()
    {
        $out = '';
        foreach ($this->lines as $i => $line) {
            $out = $out . $i . ': ' . $line['label'] . "\n";
        }
        return "invoice\n{$out}total: {$this->total()}\n";
    }
}
"#;

fn parse_document(source: &str) {
    let tree = Parser::new(source).parse().expect("benchmark input parses");

    // Simulate a basic statement traversal operation.
    for statement in tree.root().children().flat_map(|list| list.children()) {
        if statement.kind() == NodeKind::Statement {
            for child in statement.children() {
                black_box(child.token_range());
            }
        }
    }
}

fn bench_parser(c: &mut Criterion) {
    c.bench_function("parser", move |b| b.iter(|| parse_document(SOURCE)));
}

fn bench_lexer(c: &mut Criterion) {
    c.bench_function("lexer", move |b| {
        b.iter(|| {
            let (tokens, error) = Lexer::new(SOURCE).lex();
            assert!(error.is_none());
            black_box(tokens);
        })
    });
}

criterion_group!(benches, bench_lexer, bench_parser);
criterion_main!(benches);
