use std::fmt;

/// Error produced while reading an OBJ model.
#[derive(Debug)]
pub enum ObjError {
    /// Underlying reader failed.
    Io(std::io::Error),
    /// Malformed statement.
    Syntax {
        /// 1-based source line number.
        line: usize,
        message: String,
    },
}

impl ObjError {
    pub(crate) fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Self::Syntax { line, message: msg.into() }
    }
}

impl fmt::Display for ObjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjError::Io(e) => write!(f, "obj read error: {e}"),
            ObjError::Syntax { line, message } => write!(f, "obj parse error at line {line}: {message}"),
        }
    }
}

impl std::error::Error for ObjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObjError::Io(e) => Some(e),
            ObjError::Syntax { .. } => None,
        }
    }
}

impl From<std::io::Error> for ObjError {
    fn from(e: std::io::Error) -> Self {
        ObjError::Io(e)
    }
}
