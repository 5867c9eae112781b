use super::LineNumber;
use crate::mach::Status;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message,
        }
    }

    /// The value a failing command leaves in the result variable.
    pub fn return_code(&self) -> i32 {
        self.code.return_code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    OutOfSpace = 1,
    MathError = 2,
    VarsError = 3,
    GosubError = 4,
    CommandNotFound = 5,
    AlreadyRunning = 6,
    InvalidArgument = 7,
    LineBufferOverflow = 8,
    Interrupted = 9,
}

impl ErrorCode {
    pub fn return_code(self) -> i32 {
        -(self as i32)
    }

    /// Status bit mirrored into the status variable, if the kind has one.
    pub fn status(self) -> Option<Status> {
        use ErrorCode::*;
        match self {
            OutOfSpace => Some(Status::OUT_OF_SPACE),
            MathError => Some(Status::MATH_ERROR),
            VarsError => Some(Status::VARS_ERROR),
            GosubError => Some(Status::GOSUB_ERROR),
            CommandNotFound | AlreadyRunning | InvalidArgument | LineBufferOverflow
            | Interrupted => None,
        }
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            OutOfSpace => "OUT OF SPACE",
            MathError => "MATH ERROR",
            VarsError => "UNKNOWN VARIABLE",
            GosubError => "GOSUB TOO DEEP",
            CommandNotFound => "COMMAND NOT FOUND",
            AlreadyRunning => "ALREADY RUNNING",
            InvalidArgument => "INVALID ARGUMENT",
            LineBufferOverflow => "LINE BUFFER OVERFLOW",
            Interrupted => "BREAK",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.as_str())?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
