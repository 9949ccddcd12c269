//! Error types for the profile cache and result export.

use thiserror::Error;

/// Profile cache and export errors.
///
/// # Variants
///
/// - `Io`: Reading or writing a file failed
/// - `Csv`: Malformed CSV or a missing required column
/// - `Parse`: A cell could not be interpreted
///
/// # Examples
///
/// ```
/// use infra_store::StoreError;
///
/// let err = StoreError::Parse { line: 4, message: "bad recovery 'x'".to_string() };
/// assert_eq!(format!("{}", err), "Parse error on line 4: bad recovery 'x'");
/// ```
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV format error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Cell value could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source file
        line: u64,
        /// What was wrong
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = StoreError::Parse {
            line: 1,
            message: "x".to_string(),
        };
        let _: &dyn std::error::Error = &err;
    }
}
