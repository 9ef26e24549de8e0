use thiserror::Error;

/// Errors raised at the boundary of the pipeline.
///
/// Rendering itself never fails: parameters are clamped, not rejected.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Invalid dimensions {width}x{height}: expected {expected} RGBA bytes, got {actual}"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Unknown filter identifier: '{0}'")]
    UnknownFilter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_message_names_sizes() {
        let err = Error::InvalidDimensions {
            width: 2,
            height: 3,
            expected: 24,
            actual: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("2x3"));
        assert!(msg.contains("24"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn unknown_filter_message() {
        let err = Error::UnknownFilter("xyz".to_string());
        assert_eq!(err.to_string(), "Unknown filter identifier: 'xyz'");
    }
}
