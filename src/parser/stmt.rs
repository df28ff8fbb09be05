use crate::{
    ast::{
        ast::{NodeId, NodeKind},
        statements::{
            BlockStmt, Branch, ConditionalStmt, DoWhileStmt, ExpressionStmt, ForStmt,
            ProcDeclStmt, ProcParameter, ReturnStmt, StructDeclStmt, StructField, VarDeclStmt,
            WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    tokenizer::tokens::TokenKind,
    MK_TOKEN,
};

use super::{
    expr::parse_expr_or_invalid,
    lookups::STMT_LOOKUP,
    parser::Parser,
    types::{parse_data_type_or_invalid, parse_data_type_token},
};

/// Parses one statement. Keywords are dispatched through the statement
/// lookup; anything else is an expression terminated by `;`.
pub fn parse_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    if let Some(handler) = STMT_LOOKUP.get(&parser.current_token_kind()) {
        return handler(parser);
    }

    let stmt = parse_expression_stmt(parser)?;
    parser.eat(TokenKind::Semicolon);

    Ok(stmt)
}

/// An expression used as a statement, without the trailing `;`.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr_or_invalid(parser);

    Ok(parser.alloc(NodeKind::Expression(ExpressionStmt { expression }), token))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    let identifier = parser.eat(TokenKind::Identifier).text;
    parser.eat(TokenKind::Colon);
    let data_type = parse_data_type_or_invalid(parser);
    parser.eat(TokenKind::Assignment);
    let assigned_value = parse_expr_or_invalid(parser);
    parser.eat(TokenKind::Semicolon);

    Ok(parser.alloc(
        NodeKind::VarDecl(VarDeclStmt {
            identifier,
            data_type,
            assigned_value,
        }),
        start_token,
    ))
}

/// `return;` or `return expr;`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    let value = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr_or_invalid(parser))
    };
    parser.eat(TokenKind::Semicolon);

    Ok(parser.alloc(NodeKind::Return(ReturnStmt { value }), start_token))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    parse_conditional(parser, Branch::If)
}

/// One link of an `if`/`elif`/`else` chain, starting at its keyword. The
/// chain continues through `else_clause` until a link without a following
/// `elif` or `else`; an `else` link always ends it.
fn parse_conditional(parser: &mut Parser, branch: Branch) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    let condition = match branch {
        Branch::Else => None,
        Branch::If | Branch::Elif => Some(parse_expr_or_invalid(parser)),
    };
    let body = parse_block_or_invalid(parser);

    let else_clause = match (branch, parser.current_token_kind()) {
        (Branch::Else, _) => None,
        (_, TokenKind::Elif) => {
            Some(parser.nested(|parser| parse_conditional(parser, Branch::Elif))?)
        }
        (_, TokenKind::Else) => {
            Some(parser.nested(|parser| parse_conditional(parser, Branch::Else))?)
        }
        _ => None,
    };

    Ok(parser.alloc(
        NodeKind::Conditional(ConditionalStmt {
            branch,
            condition,
            body,
            else_clause,
        }),
        start_token,
    ))
}

/// An `elif` or `else` with no `if` before it. The clause is parsed so that
/// its tokens are consumed, then discarded.
pub fn parse_dangling_clause(parser: &mut Parser) -> Result<NodeId, Error> {
    let clause = parser.current_token_kind();
    let error = Error::new(ErrorImpl::DanglingElseClause { clause }, parser.get_position());

    let branch = if clause == TokenKind::Elif {
        Branch::Elif
    } else {
        Branch::Else
    };
    parse_conditional(parser, branch)?;

    Err(error)
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    let condition = parse_expr_or_invalid(parser);
    let body = parse_block_or_invalid(parser);

    Ok(parser.alloc(NodeKind::While(WhileStmt { condition, body }), start_token))
}

/// `do { ... } while condition;`
pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    let body = parse_block_or_invalid(parser);
    parser.eat(TokenKind::While);
    let condition = parse_expr_or_invalid(parser);
    parser.eat(TokenKind::Semicolon);

    Ok(parser.alloc(NodeKind::DoWhile(DoWhileStmt { body, condition }), start_token))
}

/// `for (init; condition; action) { ... }`. The initializer is a full
/// statement and so brings its own `;`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    parser.eat(TokenKind::OpenParen);
    let init = parse_stmt(parser);
    let init = parser.recover(init);
    let condition = parse_expr_or_invalid(parser);
    parser.eat(TokenKind::Semicolon);
    let action = parse_expression_stmt(parser);
    let action = parser.recover(action);
    parser.eat(TokenKind::CloseParen);
    let body = parse_block_or_invalid(parser);

    Ok(parser.alloc(
        NodeKind::For(ForStmt {
            init,
            condition,
            action,
            body,
        }),
        start_token,
    ))
}

/// `{ stmt* }`. Fails without consuming anything when the current token is
/// not `{`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    if parser.current_token_kind() != TokenKind::OpenCurly {
        return Err(parser.unexpected(TokenKind::OpenCurly));
    }
    let start_token = parser.advance();

    let mut body = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        let stmt = parser.nested(parse_stmt);
        body.push(parser.recover(stmt));
    }
    parser.eat(TokenKind::CloseCurly);

    Ok(parser.alloc(NodeKind::Block(BlockStmt { body }), start_token))
}

fn parse_block_or_invalid(parser: &mut Parser) -> NodeId {
    let block = parse_block_stmt(parser);
    parser.recover(block)
}

/// `struct Name { field :: type; proc method(...): type { ... } }`
pub fn parse_struct_decl_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    let name = parser.eat(TokenKind::Identifier).text;
    parser.eat(TokenKind::OpenCurly);

    let mut fields = vec![];
    let mut methods = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        match parser.current_token_kind() {
            TokenKind::Identifier => fields.push(parse_struct_field(parser)),
            TokenKind::Proc | TokenKind::Define => {
                let method = parse_proc_decl_stmt(parser);
                methods.push(parser.recover(method));
            }
            found => {
                let error = Error::new(
                    ErrorImpl::ExpectedStructMember {
                        found,
                        text: parser.current_token().text.clone(),
                    },
                    parser.get_position(),
                );
                parser.record(error);
                parser.advance();
            }
        }
    }
    parser.eat(TokenKind::CloseCurly);

    Ok(parser.alloc(
        NodeKind::StructDecl(StructDeclStmt {
            name,
            fields,
            methods,
        }),
        start_token,
    ))
}

fn parse_struct_field(parser: &mut Parser) -> NodeId {
    let name_token = parser.advance();

    parser.eat(TokenKind::DoubleColon);
    let data_type = parse_data_type_or_invalid(parser);
    parser.eat(TokenKind::Semicolon);

    let name = name_token.text.clone();
    parser.alloc(
        NodeKind::StructField(StructField { name, data_type }),
        name_token,
    )
}

/// `proc name(param: type, ...): return_type { ... }`, or the same with
/// `define`.
pub fn parse_proc_decl_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance();

    let identifier = parser.eat(TokenKind::Identifier).text;
    parser.eat(TokenKind::OpenParen);

    let mut parameters = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseParen | TokenKind::EOF
    ) {
        parameters.push(parse_proc_parameter(parser));

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

    parser.eat(TokenKind::Colon);
    let return_type = parse_data_type_or_invalid(parser);
    let body = parse_block_or_invalid(parser);

    Ok(parser.alloc(
        NodeKind::ProcDecl(ProcDeclStmt {
            identifier,
            parameters,
            return_type,
            body,
        }),
        start_token,
    ))
}

fn parse_proc_parameter(parser: &mut Parser) -> NodeId {
    let name_token = parser.eat(TokenKind::Identifier);
    parser.eat(TokenKind::Colon);

    let data_type = match parse_data_type_token(parser) {
        Ok(token) => token,
        Err(error) => {
            let line = parser.current_token().line;
            parser.record(error);
            MK_TOKEN!(TokenKind::Identifier, "", line)
        }
    };

    let name = name_token.text.clone();
    parser.alloc(
        NodeKind::ProcParameter(ProcParameter { name, data_type }),
        name_token,
    )
}
