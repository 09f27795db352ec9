use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub struct TimetableError {
    pub message: String,
    source: Option<Box<dyn StdError + 'static>>,
}

impl TimetableError {
    pub fn new(message: &str) -> Self {
        TimetableError {
            message: message.to_string(),
            source: None,
        }
    }

    /// 获取内部错误（如果有）
    pub fn source_error(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimetableError: {}", self.message)
    }
}

impl<E: StdError + 'static> From<E> for TimetableError {
    fn from(err: E) -> Self {
        TimetableError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
