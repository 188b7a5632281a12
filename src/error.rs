use std::fmt;

/// 1-based location inside the `.ui` document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Computes the line/column of byte offset `offset` in `src`.
    pub fn from_offset(src: &str, offset: usize) -> Position {
        let offset = offset.min(src.len());
        let before = &src.as_bytes()[..offset];
        let line = before.iter().filter(|b| **b == b'\n').count() + 1;
        let line_start = before.iter().rposition(|b| *b == b'\n').map_or(0, |i| i + 1);
        let column = String::from_utf8_lossy(&before[line_start..]).chars().count() + 1;
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{pos}: unexpected attribute `{name}` on <{node}>")]
    UnexpectedAttribute { pos: Position, node: &'static str, name: String },

    #[error("{pos}: unexpected element <{tag}> inside <{node}>")]
    UnexpectedElement { pos: Position, node: &'static str, tag: String },

    #[error("{pos}: expected character data inside <{tag}>")]
    ExpectedCharacterData { pos: Position, tag: String },

    #[error("{pos}: premature end of document")]
    UnexpectedEof { pos: Position },

    #[error("{pos}: {source}")]
    Xml {
        pos: Position,
        #[source]
        source: quick_xml::Error,
    },

    #[error("{pos}: unexpected element <{tag}>")]
    UnexpectedRoot { pos: Position, tag: String },

    #[error("file generated with too old version of Qt Designer ({0})")]
    TooOldVersion(String),

    #[error("file is not a 'c++' ui file, language={0}")]
    UnsupportedLanguage(String),

    #[error("no root widget in form")]
    NoRootWidget,

    #[error("xml write: {0}")]
    Write(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_from_offset() {
        let src = "<ui>\n  <widget>\n";
        assert_eq!(Position::from_offset(src, 0), Position { line: 1, column: 1 });
        assert_eq!(Position::from_offset(src, 7), Position { line: 2, column: 3 });
        assert_eq!(Position::from_offset(src, 1000), Position { line: 3, column: 1 });
    }

    #[test]
    fn error_display_carries_position() {
        let err = Error::UnexpectedElement {
            pos: Position { line: 3, column: 5 },
            node: "widget",
            tag: "bogus".into(),
        };
        assert_eq!(err.to_string(), "line 3, column 5: unexpected element <bogus> inside <widget>");
    }
}
