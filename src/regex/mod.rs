pub use self::{
    parser::{ParseError, ParseErrorKind, ParseErrors, ParseResult},
    rewriter::{Expansion, RewriteAmbiguity, Side},
};

pub(crate) use self::tokenizer::is_reserved;

pub(crate) mod ast;
pub(crate) mod parser;
pub(crate) mod precedence;
pub(crate) mod rewriter;
mod tokenizer;
