use crate::lexer::TokenKind;
use crate::parser::arena::NodeId;
use crate::parser::NodeKind;
use crate::parser::ReduceCtx;

/// Attach one child node per interpolation found among a string scalar's
/// piece tokens.
///
/// A plain literal is a single token and gets no children. An interpolated
/// one covers its pieces, and each `$name`, `${name}`, `$name[idx]`,
/// `$name->prop` and `{$…}` occurrence becomes a child with real token
/// positions; the plain runs stay covered by the scalar's own span.
pub(crate) fn attach(p: &mut ReduceCtx<'_, '_, '_>, node: NodeId) {
    let Some((first, last)) = p.token_range(node) else {
        return;
    };
    if first == last {
        return;
    }

    let last = last as usize;
    let mut i = first as usize;
    while i <= last {
        match p.tokens[i].kind() {
            TokenKind::Variable => {
                let next = (i + 1 <= last).then(|| p.tokens[i + 1].kind());
                match next {
                    Some(TokenKind::LBracket) => {
                        i = attach_offset(p, node, i, last);
                    }
                    Some(TokenKind::ObjectOperator) => {
                        i = attach_property(p, node, i, last);
                    }
                    _ => {
                        let variable = p.token_node(i as u32, i as u32);
                        p.retype(variable, NodeKind::Variable);
                        p.append_child(node, variable);
                        i += 1;
                    }
                }
            }
            TokenKind::DollarOpenCurlyBraces => {
                let close = matching_brace(p, i, last);
                // `${name}` keeps the simple variable shape; anything more
                // involved is kept as an opaque expression span.
                let simple = close == i + 2
                    && p.tokens[i + 1].kind() == TokenKind::StringVarname;
                let child = p.token_node(i as u32, close as u32);
                if simple {
                    p.retype(child, NodeKind::Variable);
                } else {
                    p.retype(child, NodeKind::VariableExpression);
                }
                p.append_child(node, child);
                i = close + 1;
            }
            TokenKind::CurlyOpen => {
                let close = matching_brace(p, i, last);
                let child = p.token_node(i as u32, close as u32);
                p.retype(child, NodeKind::VariableExpression);
                p.append_child(node, child);
                i = close + 1;
            }
            _ => i += 1,
        }
    }
}

/// `$name[idx]`: an index access whose span includes both brackets.
fn attach_offset(p: &mut ReduceCtx<'_, '_, '_>, node: NodeId, start: usize, last: usize) -> usize {
    let variable = p.token_node(start as u32, start as u32);
    p.retype(variable, NodeKind::Variable);
    let access = p.new_node(NodeKind::IndexAccess);
    p.append_child(access, variable);

    let mut close = start + 2;
    while close <= last && p.tokens[close].kind() != TokenKind::RBracket {
        close += 1;
    }
    if let Some(offset) = offset_node(p, start + 2, close) {
        p.append_child(access, offset);
    }
    p.expand_to(access, close.min(last) as u32);
    p.append_child(node, access);
    close + 1
}

/// The scalar between the offset brackets.
fn offset_node(p: &mut ReduceCtx<'_, '_, '_>, from: usize, to: usize) -> Option<NodeId> {
    if from >= to {
        return None;
    }
    let kind = match p.tokens[to - 1].kind() {
        TokenKind::NumString => NodeKind::NumericScalar,
        TokenKind::Variable => NodeKind::Variable,
        _ => NodeKind::StringScalar,
    };
    let offset = p.token_node(from as u32, (to - 1) as u32);
    Some(p.retype(offset, kind))
}

/// `$name->prop`: a property access over the variable and the name.
fn attach_property(
    p: &mut ReduceCtx<'_, '_, '_>,
    node: NodeId,
    start: usize,
    last: usize,
) -> usize {
    let variable = p.token_node(start as u32, start as u32);
    p.retype(variable, NodeKind::Variable);
    let access = p.new_node(NodeKind::ObjectPropertyAccess);
    p.append_child(access, variable);
    if start + 2 <= last {
        let property = p.token_node((start + 2) as u32, (start + 2) as u32);
        p.retype(property, NodeKind::String);
        p.append_child(access, property);
    }
    p.append_child(node, access);
    start + 3
}

/// Index of the brace closing the block opened at `open`. Fragment pieces
/// are single tokens, so counting bracket tokens is exact.
fn matching_brace(p: &ReduceCtx<'_, '_, '_>, open: usize, last: usize) -> usize {
    let mut depth = 1;
    let mut i = open + 1;
    while i <= last {
        match p.tokens[i].kind() {
            TokenKind::LBrace | TokenKind::CurlyOpen | TokenKind::DollarOpenCurlyBraces => {
                depth += 1;
            }
            TokenKind::RBrace => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
        i += 1;
    }
    last
}
