/// Whether the parsing of the regex succeeded.
pub type ParseResult<T> = core::result::Result<T, ParseErrors>;

/// A rejected expression: the errors found along with the expression text
/// their positions refer to.
///
/// When interval expansion ran, the source is the expanded text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseErrors {
    source: Option<String>,
    errors: Vec<ParseError>,
}

/// Information about the error occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("[ERROR] ({}, {}): {kind}", .pos.0, .pos.1)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// An opening parenthesis was never closed.
    #[error("expected RIGHT_PAREN")]
    RightParen,
    /// A closing parenthesis without a matching opening one.
    #[error("unbalanced RIGHT_PAREN")]
    UnbalancedRightParen,
    /// A union operator with nothing on one of its sides.
    #[error("expected at least one sub expression")]
    SubExpression,
    /// A position where a symbol, epsilon or group must follow (e.g., after
    /// `.` or before `*`).
    #[error("expected SYMBOL, EPSILON or LEFT_PAREN")]
    Operand,
    #[error("unrecognized character `{0}`")]
    UnrecognizedCharacter(char),
    /// `$` reached the parser, which happens when interval expansion is
    /// disabled.
    #[error("unexpanded interval operator `$`")]
    UnexpandedInterval,
}

impl ParseErrors {
    pub(crate) fn set_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The expression the error positions refer to.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Kind of the first error, which is the one that stopped the parser.
    pub fn kind(&self) -> Option<ParseErrorKind> {
        self.errors.first().map(|err| err.kind)
    }
}

impl From<ParseError> for ParseErrors {
    fn from(error: ParseError) -> Self {
        Self {
            source: None,
            errors: Vec::from([error]),
        }
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for err in self.errors.iter() {
            writeln!(f, "{}", err)?;
        }

        if let Some(source) = &self.source {
            writeln!(f, "in expression `{}`", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

#[cfg(test)]
mod tests {
    use super::{ParseError, ParseErrorKind, ParseErrors};

    #[test]
    fn display() {
        let errors = ParseErrors::from(ParseError {
            kind: ParseErrorKind::RightParen,
            pos: (3, 4),
        })
        .set_source("(a+b");

        assert_eq!(
            errors.to_string(),
            "[ERROR] (3, 4): expected RIGHT_PAREN\nin expression `(a+b`\n"
        );
        assert_eq!(errors.source(), Some("(a+b"));
        assert_eq!(errors.kind(), Some(ParseErrorKind::RightParen));
    }

    #[test]
    fn unrecognized_character_message() {
        let error = ParseError {
            kind: ParseErrorKind::UnrecognizedCharacter('#'),
            pos: (0, 1),
        };

        assert_eq!(error.to_string(), "[ERROR] (0, 1): unrecognized character `#`");
    }
}
