use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // unknown title, requester or copy
    NotFound {
        message: String,
    },
    // the requester already holds a copy of the title
    AlreadyHeld {
        message: String,
    },
    // the requester is already parked in the waiting line of the title
    DuplicateRequest {
        message: String,
    },
    // return attempted without an active loan
    NotHeld {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_held(message: &str) -> LibraryError {
        LibraryError::AlreadyHeld { message: message.to_string() }
    }

    pub fn duplicate_request(message: &str) -> LibraryError {
        LibraryError::DuplicateRequest { message: message.to_string() }
    }

    pub fn not_held(message: &str) -> LibraryError {
        LibraryError::NotHeld { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // reason is the short tag reported to callers next to the message
    pub fn reason(&self) -> &'static str {
        match self {
            LibraryError::NotFound { .. } => "NotFound",
            LibraryError::AlreadyHeld { .. } => "AlreadyHeld",
            LibraryError::DuplicateRequest { .. } => "DuplicateRequest",
            LibraryError::NotHeld { .. } => "NotHeld",
            LibraryError::DuplicateKey { .. } => "DuplicateKey",
            LibraryError::Validation { .. } => "Validation",
            LibraryError::Serialization { .. } => "Serialization",
            LibraryError::Runtime { .. } => "Runtime",
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyHeld { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateRequest { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotHeld { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the lending services.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResult<T> {
    // The page token (offset of the first record)
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Seniority {
    Junior,
    Senior,
}

// RequesterClass covers staff and learners; rank is derived from it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum RequesterClass {
    Staff,
    Learner(Seniority),
}

impl RequesterClass {
    /// Priority rank of the class, lower is served first.
    pub fn priority_rank(&self) -> u8 {
        match self {
            RequesterClass::Staff => 1,
            RequesterClass::Learner(Seniority::Senior) => 2,
            RequesterClass::Learner(Seniority::Junior) => 3,
        }
    }

    pub fn priority_description(&self) -> &'static str {
        match self {
            RequesterClass::Staff => "Highest (Staff)",
            RequesterClass::Learner(Seniority::Senior) => "Medium (Senior Learner)",
            RequesterClass::Learner(Seniority::Junior) => "Lower (Junior Learner)",
        }
    }
}

impl TryFrom<String> for RequesterClass {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "Staff" => Ok(RequesterClass::Staff),
            "SeniorLearner" => Ok(RequesterClass::Learner(Seniority::Senior)),
            "JuniorLearner" => Ok(RequesterClass::Learner(Seniority::Junior)),
            _ => Err(LibraryError::validation(
                format!("unknown requester class {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for RequesterClass {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RequesterClass::Staff => write!(f, "Staff"),
            RequesterClass::Learner(Seniority::Senior) => write!(f, "SeniorLearner"),
            RequesterClass::Learner(Seniority::Junior) => write!(f, "JuniorLearner"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CopyStatus {
    Available,
    Borrowed,
}

impl From<bool> for CopyStatus {
    fn from(available: bool) -> Self {
        if available { CopyStatus::Available } else { CopyStatus::Borrowed }
    }
}

impl Display for CopyStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CopyStatus::Available => write!(f, "Available"),
            CopyStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}
