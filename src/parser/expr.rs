use crate::{
    ast::{
        ast::{NodeId, NodeKind},
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, FloatExpr, IdentifierExpr, IntegerExpr,
            MemberExpr, PrefixExpr, StringExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    tokenizer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, BindingPower},
    parser::Parser,
};

/// Parses a full expression by precedence climbing.
pub fn parse_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let mut left = parser.nested(parse_expr_primary)?;

    while let Some(bp) = binding_power(parser.current_token_kind()) {
        left = parse_expr_binary(parser, left, bp)?;
    }

    Ok(left)
}

/// Parses an expression where one is required, leaving an `Invalid` node in
/// its place on failure.
pub fn parse_expr_or_invalid(parser: &mut Parser) -> NodeId {
    let expr = parse_expr(parser);
    parser.recover(expr)
}

/// Consumes the operator at the current token and its right-hand side. Any
/// operator binding tighter than `bp` (or equally tight and right
/// associative) is folded into the right operand first.
pub fn parse_expr_binary(
    parser: &mut Parser,
    left: NodeId,
    bp: BindingPower,
) -> Result<NodeId, Error> {
    let operator_token = parser.advance();
    let mut right = parser.nested(parse_expr_primary)?;

    while let Some(next_bp) = binding_power(parser.current_token_kind()) {
        if next_bp > bp || (next_bp == bp && next_bp.is_right_associative()) {
            right = parser.nested(|parser| parse_expr_binary(parser, right, next_bp))?;
        } else {
            break;
        }
    }

    let operator = operator_token.kind;
    Ok(parser.alloc(
        NodeKind::Binary(BinaryExpr {
            left,
            operator,
            right,
        }),
        operator_token,
    ))
}

pub fn parse_expr_primary(parser: &mut Parser) -> Result<NodeId, Error> {
    match parser.current_token_kind() {
        TokenKind::Bang | TokenKind::Dash | TokenKind::Tilde => parse_prefix_expr(parser),
        TokenKind::True | TokenKind::False => {
            let token = parser.advance();
            let value = token.kind == TokenKind::True;
            Ok(parser.alloc(NodeKind::Boolean(BooleanExpr { value }), token))
        }
        TokenKind::Integer => {
            let position = parser.get_position();
            let token = parser.advance();
            let value = token.text.parse::<u64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        literal: token.text.clone(),
                    },
                    position.clone(),
                )
            })?;
            Ok(parser.alloc(NodeKind::Integer(IntegerExpr { value }), token))
        }
        TokenKind::Float => {
            let position = parser.get_position();
            let token = parser.advance();
            let value = token.text.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        literal: token.text.clone(),
                    },
                    position.clone(),
                )
            })?;
            Ok(parser.alloc(NodeKind::Float(FloatExpr { value }), token))
        }
        TokenKind::String => {
            let token = parser.advance();
            let value = token.text.clone();
            Ok(parser.alloc(NodeKind::String(StringExpr { value }), token))
        }
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        found => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found,
                text: parser.current_token().text.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// `!x`, `-x`, `~x`. The operand is a single primary, so `-a + b` is
/// `(-a) + b`.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let operator_token = parser.advance();
    let right_expr = parser.nested(parse_expr_primary)?;

    let operator = operator_token.kind;
    Ok(parser.alloc(
        NodeKind::Prefix(PrefixExpr {
            operator,
            right_expr,
        }),
        operator_token,
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen);

    Ok(expr)
}

/// An identifier with whatever follows it: a call, an index or a member
/// access. Member accesses nest to the right, `a.b.c` is `a.(b.c)`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    match parser.peek_token_kind() {
        TokenKind::OpenParen => parse_call_expr(parser),
        TokenKind::OpenBracket => {
            let name_token = parser.advance();
            parser.advance();
            let index = parse_expr_or_invalid(parser);
            parser.eat(TokenKind::CloseBracket);

            let name = name_token.text.clone();
            Ok(parser.alloc(
                NodeKind::Identifier(IdentifierExpr {
                    name,
                    index: Some(index),
                }),
                name_token,
            ))
        }
        TokenKind::Dot => {
            let name_token = parser.advance();
            let name = name_token.text.clone();
            let object = parser.alloc(
                NodeKind::Identifier(IdentifierExpr { name, index: None }),
                name_token,
            );

            let dot_token = parser.advance();
            if parser.current_token_kind() != TokenKind::Identifier {
                return Err(parser.unexpected(TokenKind::Identifier));
            }
            let member = parser.nested(parse_identifier_expr)?;

            Ok(parser.alloc(NodeKind::Member(MemberExpr { object, member }), dot_token))
        }
        _ => {
            let name_token = parser.advance();
            let name = name_token.text.clone();
            Ok(parser.alloc(
                NodeKind::Identifier(IdentifierExpr { name, index: None }),
                name_token,
            ))
        }
    }
}

/// `callee(arg, ...)`. A missing comma between arguments ends the list.
pub fn parse_call_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let callee_token = parser.advance();
    parser.advance();

    let mut arguments = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseParen | TokenKind::EOF
    ) {
        arguments.push(parse_expr_or_invalid(parser));

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            TokenKind::CloseParen | TokenKind::EOF => {}
            found => {
                let error = Error::new(ErrorImpl::MissingComma { found }, parser.get_position());
                parser.record(error);
                break;
            }
        }
    }
    parser.eat(TokenKind::CloseParen);

    let callee = callee_token.text.clone();
    Ok(parser.alloc(
        NodeKind::Call(CallExpr { callee, arguments }),
        callee_token,
    ))
}
