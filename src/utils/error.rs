use std::fmt;
use thiserror::Error;

/// 指向目錄檔中的某一筆資料：有合法 id 時用 id，否則用行號
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Id(u32),
    Line(u64),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Id(id) => write!(f, "record with ID {}", id),
            RecordRef::Line(line) => write!(f, "record on line {}", line),
        }
    }
}

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Catalog file not found: {path}")]
    CatalogNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid {field} format for {record}: {value}")]
    FormatError {
        record: RecordRef,
        field: String,
        value: String,
    },

    #[error("Invalid {field} for {record}: {reason}")]
    ValidationError {
        record: RecordRef,
        field: String,
        reason: String,
    },

    #[error("Duplicate ID {id} on line {line} (first defined on line {first_line})")]
    DuplicateIdError { id: u32, first_line: u64, line: u64 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resource,
    Format,
    Validation,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShopError::CatalogNotFound { .. } => ErrorCategory::Resource,
            ShopError::IoError(_) => ErrorCategory::Io,
            ShopError::CsvError(_) | ShopError::FormatError { .. } => ErrorCategory::Format,
            ShopError::ValidationError { .. } | ShopError::DuplicateIdError { .. } => {
                ErrorCategory::Validation
            }
            ShopError::ConfigValidationError { .. } | ShopError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Format | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Resource | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給顧客看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::CatalogNotFound { path } => {
                format!("The shop could not open its catalog at '{}'.", path)
            }
            ShopError::IoError(e) => format!("The shop could not read its data: {}", e),
            ShopError::CsvError(e) => format!("The catalog file is not valid CSV: {}", e),
            ShopError::FormatError { .. }
            | ShopError::ValidationError { .. }
            | ShopError::DuplicateIdError { .. } => {
                format!("The catalog contains a bad entry. {}", self)
            }
            ShopError::ConfigValidationError { .. } | ShopError::InvalidConfigValueError { .. } => {
                format!("The shop configuration is invalid. {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShopError::CatalogNotFound { .. } => {
                "Check the --data path or the [catalog] path in the config file"
            }
            ShopError::IoError(_) => "Check file permissions and that the file is readable",
            ShopError::CsvError(_) | ShopError::FormatError { .. } => {
                "Each line after the header must be: id,title,description,price"
            }
            ShopError::ValidationError { .. } => {
                "Titles need at least 2 characters, descriptions at least 10, prices must not be negative"
            }
            ShopError::DuplicateIdError { .. } => "Give every catalog entry its own ID",
            ShopError::ConfigValidationError { .. } | ShopError::InvalidConfigValueError { .. } => {
                "Fix the listed field in the TOML config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;

/// 互動輸入錯誤，Display 即為顯示給顧客的訊息
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a valid cookie ID.")]
    InvalidItemId(String),

    #[error("Invalid cookie ID. Please try again.")]
    UnknownItem(i64),

    #[error("Invalid input. Please enter a valid number.")]
    InvalidQuantity(String),

    #[error("Please enter a positive number.")]
    NegativeQuantity(i64),
}
