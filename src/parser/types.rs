use crate::{
    ast::{
        ast::{NodeId, NodeKind},
        statements::DataType,
    },
    errors::errors::{Error, ErrorImpl},
    tokenizer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Consumes a type name: any identifier, or `void`. Nothing is consumed on
/// failure.
pub fn parse_data_type_token(parser: &mut Parser) -> Result<Token, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::Void => Ok(parser.advance()),
        found => Err(Error::new(
            ErrorImpl::ExpectedDataType {
                found,
                text: parser.current_token().text.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_data_type(parser: &mut Parser) -> Result<NodeId, Error> {
    let token = parse_data_type_token(parser)?;
    let name = token.text.clone();

    Ok(parser.alloc(NodeKind::DataType(DataType { name }), token))
}

pub fn parse_data_type_or_invalid(parser: &mut Parser) -> NodeId {
    let data_type = parse_data_type(parser);
    parser.recover(data_type)
}
