//! Error types for hwp2hwpx library.

use std::io;
use thiserror::Error;

use crate::diagnostics::Location;

/// Result type alias for hwp2hwpx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during HWP to HWPX conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not something this crate can convert.
    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    /// The source document tree could not be deserialized.
    #[error("Source model error: {0}")]
    SourceModel(#[from] serde_json::Error),

    /// A definition index was referenced but never registered.
    #[error("Dangling {kind} reference: source index {index}")]
    DanglingReference {
        /// Definition kind (e.g. "charPr")
        kind: &'static str,
        /// Source-scoped index that failed to resolve
        index: u32,
    },

    /// A source entity has no target equivalent.
    #[error("Unsupported entity: {0}")]
    UnsupportedEntity(String),

    /// An embedded payload could not be read or re-encoded.
    #[error("Resource pipeline error for bin data {id}: {reason}")]
    ResourcePipeline {
        /// Source bin-data id
        id: u16,
        /// Failure description
        reason: String,
    },

    /// The source tree violates a required structural invariant.
    #[error("Structural integrity violation at {location}: {detail}")]
    StructuralIntegrity {
        /// Where in the source tree the violation was found
        location: Location,
        /// Description of the violation
        detail: String,
    },

    /// Strict mode turned a recoverable diagnostic into a failure.
    #[error("Conversion aborted in strict mode: {0}")]
    Strict(String),

    /// Error producing XML output.
    #[error("XML write error: {0}")]
    Xml(String),

    /// Error producing the zip container.
    #[error("Package error: {0}")]
    Package(#[from] zip::result::ZipError),

    /// Error during JSON rendering of the target model.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl Error {
    /// Whether the error must abort the whole conversion.
    ///
    /// Only structural violations at document or section granularity are
    /// fatal; everything else is recovered inside the walker.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::StructuralIntegrity { location, .. } => location.is_section_level(),
            Error::DanglingReference { .. }
            | Error::UnsupportedEntity(_)
            | Error::ResourcePipeline { .. } => false,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DanglingReference {
            kind: "charPr",
            index: 7,
        };
        assert_eq!(err.to_string(), "Dangling charPr reference: source index 7");

        let err = Error::ResourcePipeline {
            id: 3,
            reason: "missing stream".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Resource pipeline error for bin data 3: missing stream"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_fatality() {
        let section = Error::StructuralIntegrity {
            location: Location::section(2),
            detail: "no paragraphs".into(),
        };
        assert!(section.is_fatal());

        let nested = Error::StructuralIntegrity {
            location: Location::section(0).paragraph(1).control(0),
            detail: "negative span".into(),
        };
        assert!(!nested.is_fatal());

        assert!(!Error::UnsupportedEntity("ctrl".into()).is_fatal());
    }
}
