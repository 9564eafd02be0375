mod arena;
mod generated;
mod interpolation;
mod node_kind;
mod reductions;
mod syntax_tree;

pub use arena::NodeArena;
pub use arena::NodeId;
pub use node_kind::NodeKind;
pub use syntax_tree::NodeRef;
pub use syntax_tree::ParseTree;

use crate::error::SyntaxError;
use crate::lexer::Lexed;
use crate::lexer::Lexer;
use crate::lexer::Token;
use crate::lexer::TokenKind;
use generated::tables;

/// Parse PHP source text into a [`ParseTree`].
///
/// ## Example
/// ```rust
/// use php_parser::{NodeKind, Parser};
///
/// let tree = Parser::new("<?php echo 1 . 2;").parse().unwrap();
/// assert_eq!(tree.root().kind(), NodeKind::Program);
/// ```
///
/// The parser drives the grammar tables with one token of lookahead; the
/// first lexical or syntactic error aborts the parse and is returned in
/// place of the tree.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    source: &'a str,
    /// Every token scanned so far, trivia and string pieces included.
    tokens: Vec<Token<'a>>,
    /// One terminal of lookahead; the inner `None` is end of input.
    lookahead: Option<Option<Terminal>>,
    arena: NodeArena,
    root: Option<NodeId>,
}

/// One parser-facing terminal: a token kind plus the range of stream tokens
/// it covers. Interpolated literals cover all their pieces; everything else
/// covers exactly one token.
#[derive(Debug, Clone, Copy)]
struct Terminal {
    kind: TokenKind,
    first: u32,
    last: u32,
    line: u32,
}

/// Shift/reduce decision for one `(state, lookahead)` pair.
#[derive(Debug, Clone, Copy)]
enum Action {
    Shift(u16),
    Reduce(u16),
    Accept,
    Error,
}

/// Right-recursive constructs (notably `if`/`elseif` chains) reach stack
/// depths proportional to their length, so both stacks start well above the
/// common case and grow by doubling from there.
const INITIAL_STACK_DEPTH: usize = 500;

impl<'a> Parser<'a> {
    /// Create a new instance of a parser given an input string.
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            source,
            tokens: Vec::new(),
            lookahead: None,
            arena: NodeArena::new(),
            root: None,
        }
    }

    /// Configure the limit on the number of tokens to parse. If an input
    /// document is too big, parsing will be aborted.
    ///
    /// By default, there is no limit.
    pub fn token_limit(mut self, token_limit: usize) -> Self {
        self.lexer = self.lexer.with_limit(token_limit);
        self
    }

    /// Run the parse to completion.
    pub fn parse(mut self) -> Result<ParseTree<'a>, SyntaxError> {
        let mut states: Vec<u16> = Vec::with_capacity(INITIAL_STACK_DEPTH);
        let mut values: Vec<NodeId> = Vec::with_capacity(INITIAL_STACK_DEPTH);
        let mut state: u16 = 0;
        states.push(state);

        loop {
            match self.action(state)? {
                Action::Accept => {
                    let root = self.root.take().expect("accepted parse built a root");
                    return Ok(ParseTree::new(self.source, self.tokens, self.arena, root));
                }
                Action::Shift(next) => {
                    let terminal = self
                        .lookahead
                        .take()
                        .flatten()
                        .expect("shift actions only exist for real tokens");
                    let leaf = self.arena.token_node(terminal.first, terminal.last);
                    values.push(leaf);
                    states.push(next);
                    state = next;
                }
                Action::Reduce(rule) => {
                    let len = tables::R2[rule as usize] as usize;
                    let split = values.len() - len;
                    let value = {
                        let mut ctx = ReduceCtx {
                            arena: &mut self.arena,
                            tokens: &self.tokens,
                            root: &mut self.root,
                        };
                        reductions::reduce(&mut ctx, rule, &values[split..])
                    };
                    values.truncate(split);
                    states.truncate(states.len() - len);

                    let lhs = tables::R1[rule as usize] as i32 - tables::N_TOKENS as i32;
                    let top = *states.last().expect("state stack keeps its start state") as i32;
                    let idx = tables::PGOTO[lhs as usize] as i32 + top;
                    state = if (0..=tables::LAST as i32).contains(&idx)
                        && tables::CHECK[idx as usize] as i32 == top
                    {
                        tables::TABLE[idx as usize] as u16
                    } else {
                        tables::DEFGOTO[lhs as usize] as u16
                    };
                    states.push(state);
                    values.push(value);
                }
                Action::Error => return Err(self.syntax_error(state)),
            }
        }
    }

    /// Pick the action for `state`, reading the lookahead only when the
    /// state does not reduce by default.
    fn action(&mut self, state: u16) -> Result<Action, SyntaxError> {
        let base = tables::PACT[state as usize];
        if base == tables::PACT_NINF {
            return Ok(self.default_action(state));
        }

        let symbol = self.lookahead_symbol()?;
        let idx = base as i32 + symbol as i32;
        if !(0..=tables::LAST as i32).contains(&idx)
            || tables::CHECK[idx as usize] as i32 != symbol as i32
        {
            return Ok(self.default_action(state));
        }

        Ok(match tables::TABLE[idx as usize] {
            0 | tables::TABLE_NINF => Action::Error,
            target if target > 0 => {
                if target as u16 == tables::FINAL_STATE {
                    Action::Accept
                } else {
                    Action::Shift(target as u16)
                }
            }
            rule => Action::Reduce((-rule) as u16),
        })
    }

    fn default_action(&self, state: u16) -> Action {
        match tables::DEFACT[state as usize] {
            0 => Action::Error,
            rule => Action::Reduce(rule),
        }
    }

    /// The grammar symbol index of the lookahead; `0` is `$end`.
    fn lookahead_symbol(&mut self) -> Result<i16, SyntaxError> {
        if self.lookahead.is_none() {
            self.lookahead = Some(self.next_terminal()?);
        }
        Ok(match self.lookahead.as_ref().expect("just filled") {
            None => 0,
            Some(terminal) => tables::TRANSLATE[terminal.kind.code() as usize] as i16,
        })
    }

    /// Pull the next parser-facing terminal from the lexer, retaining
    /// trivia and string pieces in the token stream.
    fn next_terminal(&mut self) -> Result<Option<Terminal>, SyntaxError> {
        loop {
            match self.lexer.next_lexed() {
                Err(err) => {
                    self.lexer.terminate();
                    return Err(err);
                }
                Ok(None) => return Ok(None),
                Ok(Some(Lexed::Single(token))) => {
                    let kind = token.kind();
                    let line = token.line();
                    let index = self.tokens.len() as u32;
                    self.tokens.push(token);
                    if kind.is_trivia() {
                        continue;
                    }
                    return Ok(Some(Terminal {
                        kind,
                        first: index,
                        last: index,
                        line,
                    }));
                }
                Ok(Some(Lexed::Interpolated { kind, pieces })) => {
                    let first = self.tokens.len() as u32;
                    let line = pieces.first().map(|t| t.line()).unwrap_or(1);
                    self.tokens.extend(pieces);
                    let last = (self.tokens.len() - 1) as u32;
                    return Ok(Some(Terminal {
                        kind,
                        first,
                        last,
                        line,
                    }));
                }
            }
        }
    }

    /// Build the verbose diagnostic for an error cell: the unexpected
    /// token plus the acceptable terminals of the current state, dropped
    /// entirely when there are more than four of them.
    fn syntax_error(&mut self, state: u16) -> SyntaxError {
        self.lexer.terminate();

        let lookahead = self.lookahead.clone().flatten();
        let (unexpected, line) = match &lookahead {
            Some(terminal) => {
                let symbol = tables::TRANSLATE[terminal.kind.code() as usize] as usize;
                (tables::TERMINAL_NAMES[symbol], terminal.line)
            }
            None => ("end of file", self.lexer.current_line()),
        };
        let mut message = format!("syntax error, unexpected {unexpected}");

        let base = tables::PACT[state as usize];
        if base > tables::PACT_NINF && base <= tables::LAST {
            let first = if base < 0 { -base as i32 } else { 0 };
            let last = (tables::LAST as i32 - base as i32 + 1).min(tables::N_TOKENS as i32);
            let mut expected = Vec::new();
            let mut too_many = false;
            for symbol in first..last {
                let idx = (base as i32 + symbol) as usize;
                // Symbol 1 is the generator's error terminal.
                if tables::CHECK[idx] as i32 == symbol && symbol != 1 {
                    if expected.len() == 4 {
                        too_many = true;
                        break;
                    }
                    expected.push(tables::TERMINAL_NAMES[symbol as usize]);
                }
            }
            if !too_many && !expected.is_empty() {
                message.push_str(", expecting ");
                message.push_str(&expected.join(" or "));
            }
        }

        SyntaxError::new(message, line)
    }
}

/// Everything a reduction action may touch: the node arena, the token
/// stream scanned so far, and the slot receiving the root on the final
/// reduction. No module-level state; one context per parse.
pub(crate) struct ReduceCtx<'p, 't, 'a> {
    pub(crate) arena: &'p mut NodeArena,
    pub(crate) tokens: &'t [Token<'a>],
    pub(crate) root: &'p mut Option<NodeId>,
}

impl ReduceCtx<'_, '_, '_> {
    pub(crate) fn new_node(&mut self, kind: NodeKind) -> NodeId {
        self.arena.new_node(kind)
    }

    pub(crate) fn token_node(&mut self, first: u32, last: u32) -> NodeId {
        self.arena.token_node(first, last)
    }

    pub(crate) fn retype(&mut self, id: NodeId, kind: NodeKind) -> NodeId {
        self.arena.retype(id, kind)
    }

    pub(crate) fn expand(&mut self, id: NodeId, other: NodeId) -> NodeId {
        self.arena.expand(id, other)
    }

    pub(crate) fn expand_to(&mut self, id: NodeId, token: u32) -> NodeId {
        self.arena.expand_to(id, token)
    }

    pub(crate) fn set_span(&mut self, id: NodeId, kind: NodeKind, to: NodeId) -> NodeId {
        self.arena.set_span(id, kind, to)
    }

    pub(crate) fn enclose(&mut self, left: NodeId, id: NodeId, right: NodeId) -> NodeId {
        self.arena.enclose(left, id, right)
    }

    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        self.arena.append_child(parent, child)
    }

    pub(crate) fn append_children(&mut self, parent: NodeId, other: NodeId) -> NodeId {
        self.arena.append_children(parent, other)
    }

    pub(crate) fn kind(&self, id: NodeId) -> NodeKind {
        self.arena.kind(id)
    }

    pub(crate) fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.arena.first_child(id)
    }

    pub(crate) fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena.children(id)
    }

    pub(crate) fn token_range(&self, id: NodeId) -> Option<(u32, u32)> {
        self.arena.token_range(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::NodeKind;
    use crate::NodeRef;
    use crate::ParseTree;
    use crate::Parser;
    use pretty_assertions::assert_eq;
    use unindent::unindent;

    fn parse(source: &str) -> ParseTree<'_> {
        Parser::new(source).parse().unwrap()
    }

    /// The children of the root's statement list.
    fn statements<'t, 'a>(tree: &'t ParseTree<'a>) -> Vec<NodeRef<'t, 'a>> {
        let list = tree.root().children().next().unwrap();
        assert_eq!(list.kind(), NodeKind::StatementList);
        list.children().collect()
    }

    #[test]
    fn minimal_numeric_statement() {
        let tree = parse("<?php 1;");
        let root = tree.root();
        assert_eq!(root.kind(), NodeKind::Program);
        assert_eq!(root.token_range(), Some((0, 2)));
        assert_eq!(root.text(), "<?php 1;");

        let statements = statements(&tree);
        assert_eq!(statements[0].kind(), NodeKind::OpenTag);
        assert_eq!(statements[1].kind(), NodeKind::Statement);
        assert_eq!(statements[1].text(), "1;");
        let scalar = statements[1].children().next().unwrap();
        assert_eq!(scalar.kind(), NodeKind::NumericScalar);
        assert_eq!(scalar.text(), "1");
    }

    #[test]
    fn empty_input_yields_empty_program() {
        let tree = parse("");
        let root = tree.root();
        assert_eq!(root.kind(), NodeKind::Program);
        assert_eq!(root.token_range(), None);
        let list = root.children().next().unwrap();
        assert_eq!(list.kind(), NodeKind::StatementList);
        assert_eq!(list.children().count(), 0);
    }

    #[test]
    fn if_elseif_else_is_one_condition_list() {
        let tree = parse("<?php if(a)x; elseif(b)y; else z;");
        let condition_list = statements(&tree)[1].children().next().unwrap();
        assert_eq!(condition_list.kind(), NodeKind::ConditionList);
        let kinds: Vec<_> = condition_list.children().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![NodeKind::If, NodeKind::Elseif, NodeKind::Else]);
    }

    #[test]
    fn else_if_spelling_is_spliced_into_the_chain() {
        let tree = parse("<?php if(a)x; else if(b)y; else z;");
        let condition_list = statements(&tree)[1].children().next().unwrap();
        let kinds: Vec<_> = condition_list.children().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![NodeKind::If, NodeKind::Elseif, NodeKind::Else]);
        // The spliced branch starts at its `else` keyword.
        let elseif = condition_list.children().nth(1).unwrap();
        assert!(elseif.text().starts_with("else if"));
    }

    #[test]
    fn deep_elseif_chain_stays_flat() {
        let mut source = String::from("<?php if($c0)f();");
        for i in 1..1000 {
            source.push_str(&format!(" elseif($c{i})f();"));
        }
        source.push_str(" else g();");

        let tree = Parser::new(&source).parse().unwrap();
        let condition_list = statements(&tree)[1].children().next().unwrap();
        assert_eq!(condition_list.kind(), NodeKind::ConditionList);
        assert_eq!(condition_list.children().count(), 1001);
    }

    #[test]
    fn concatenation_collects_into_one_list() {
        let tree = parse("<?php 'a'.'b'.'c'.'d';");
        let list = statements(&tree)[1].children().next().unwrap();
        assert_eq!(list.kind(), NodeKind::ConcatenationList);
        let kinds: Vec<_> = list.children().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::StringScalar,
                NodeKind::Operator,
                NodeKind::StringScalar,
                NodeKind::Operator,
                NodeKind::StringScalar,
                NodeKind::Operator,
                NodeKind::StringScalar,
            ]
        );
    }

    #[test]
    fn huge_concatenation_has_depth_one() {
        let terms: Vec<String> = (0..10_000).map(|i| format!("'x{i}'")).collect();
        let source = format!("<?php {};", terms.join("."));

        let tree = Parser::new(&source).parse().unwrap();
        let list = statements(&tree)[1].children().next().unwrap();
        assert_eq!(list.kind(), NodeKind::ConcatenationList);
        assert_eq!(list.children().count(), 2 * 10_000 - 1);
        assert!(list.children().all(|c| c.children().count() == 0));
    }

    #[test]
    fn heredoc_interpolation_becomes_a_child_node() {
        let tree = parse("<?php $x = <<<EOT\nhello $name\nEOT;\n");
        let assignment = statements(&tree)[1].children().next().unwrap();
        assert_eq!(assignment.kind(), NodeKind::BinaryExpression);
        let kinds: Vec<_> = assignment.children().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Variable, NodeKind::Operator, NodeKind::Heredoc]
        );

        let heredoc = assignment.children().nth(2).unwrap();
        let variable = heredoc.children().next().unwrap();
        assert_eq!(variable.kind(), NodeKind::Variable);
        assert_eq!(variable.text(), "$name");
    }

    #[test]
    fn nowdoc_has_no_interpolation_children() {
        let tree = parse("<?php $x = <<<'EOT'\nno $var here\nEOT;\n");
        let assignment = statements(&tree)[1].children().next().unwrap();
        let heredoc = assignment.children().nth(2).unwrap();
        assert_eq!(heredoc.kind(), NodeKind::Heredoc);
        assert_eq!(heredoc.children().count(), 0);
    }

    #[test]
    fn list_destructuring_shape() {
        let tree = parse("<?php list($a,$b) = $c;");
        let assignment = statements(&tree)[1].children().next().unwrap();
        assert_eq!(assignment.kind(), NodeKind::BinaryExpression);

        let list = assignment.children().next().unwrap();
        assert_eq!(list.kind(), NodeKind::List);
        let assignment_list = list.children().next().unwrap();
        assert_eq!(assignment_list.kind(), NodeKind::AssignmentList);
        let kinds: Vec<_> = assignment_list.children().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![NodeKind::Variable, NodeKind::Variable]);

        let rest: Vec<_> = assignment.children().skip(1).map(|c| c.kind()).collect();
        assert_eq!(rest, vec![NodeKind::Operator, NodeKind::Variable]);
    }

    #[test]
    fn close_tag_acts_as_statement_terminator() {
        let tree = parse("<?php echo 1 ?>");
        let kinds: Vec<_> = statements(&tree).iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::OpenTag, NodeKind::Statement, NodeKind::CloseTag]
        );
    }

    #[test]
    fn anonymous_class_keeps_placeholder_children() {
        let tree = parse("<?php $o = new class { };");
        let assignment = statements(&tree)[1].children().next().unwrap();
        let new = assignment.children().nth(2).unwrap();
        assert_eq!(new.kind(), NodeKind::New);
        let declaration = new.children().next().unwrap();
        assert_eq!(declaration.kind(), NodeKind::ClassDeclaration);
        // Attributes and name slots are empty placeholders.
        let kinds: Vec<_> = declaration.children().map(|c| c.kind()).collect();
        assert_eq!(kinds[0], NodeKind::Empty);
        assert_eq!(kinds[1], NodeKind::Empty);
    }

    #[test]
    fn syntax_error_at_end_of_input() {
        let err = Parser::new("<?php if(").parse().unwrap_err();
        assert_eq!(err.line(), 1);
        assert!(err.message().starts_with("syntax error, unexpected end of file"));
    }

    #[test]
    fn syntax_error_reports_the_offending_line() {
        let err = Parser::new("<?php\n\n$a = ;\n").parse().unwrap_err();
        assert_eq!(err.line(), 3);
        assert_eq!(err.message(), "syntax error, unexpected ';'");
    }

    #[test]
    fn expected_alternatives_are_enumerated() {
        let err = Parser::new("<?php\nfunction f( {\n}").parse().unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(
            err.message(),
            "syntax error, unexpected '{', expecting '&' or T_VARIABLE or T_ELLIPSIS"
        );
    }

    #[test]
    fn lexical_error_is_reported_like_a_syntax_error() {
        let err = Parser::new("<?php 'open").parse().unwrap_err();
        assert_eq!(err.line(), 1);
        assert!(err.message().contains("unterminated"));
    }

    #[test]
    fn token_limit_aborts_parsing() {
        let err = Parser::new("<?php $a = 1;")
            .token_limit(3)
            .parse()
            .unwrap_err();
        assert!(err.message().contains("token limit reached"));
    }

    #[test]
    fn parsing_is_deterministic() {
        let source = "<?php function f($a) { return $a ? 'y' . $a : 'n'; }";
        let first = format!("{:?}", parse(source));
        let second = format!("{:?}", parse(source));
        assert_eq!(first, second);
    }

    #[test]
    fn spans_nest_and_children_stay_ordered() {
        fn check(node: NodeRef<'_, '_>) {
            let range = node.token_range();
            if let Some((first, last)) = range {
                assert!(first <= last);
            }
            let mut previous = None;
            for child in node.children() {
                if let Some((child_first, child_last)) = child.token_range() {
                    if let Some((first, last)) = range {
                        assert!(
                            child_first >= first && child_last <= last,
                            "{:?} escapes its parent {:?}",
                            child.kind(),
                            node.kind()
                        );
                    }
                    if let Some(previous) = previous {
                        assert!(
                            child_first >= previous,
                            "children of {:?} out of source order",
                            node.kind()
                        );
                    }
                    previous = Some(child_first);
                }
                check(child);
            }
        }

        let source = unindent(
            r#"
            <?php
            namespace App;

            class Basket
            {
                private $items = [];

                public function add($item, $qty = 1)
                {
                    foreach (range(1, $qty) as $_) {
                        $this->items[] = $item;
                    }
                    return count($this->items) > 3 ? 'full' : "has {$qty} more";
                }
            }
            "#,
        );
        check(parse(&source).root());
    }

    #[test]
    fn tables_are_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let source = format!("<?php $v{i} = {i} + 1;");
                    let tree = Parser::new(&source).parse().unwrap();
                    tree.root().kind()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), NodeKind::Program);
        }
    }
}
