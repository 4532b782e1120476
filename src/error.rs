use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or editing a simulation.
///
/// The per-frame step never returns these; misuse there (negative `dt`)
/// is a programming error and panics.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Body index does not exist in the population.
    #[error("body index {index} out of range (population {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Settings could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("radius must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("radius"));
    }

    #[test]
    fn index_error_names_both_values() {
        let msg = Error::IndexOutOfRange { index: 7, len: 3 }.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }
}
