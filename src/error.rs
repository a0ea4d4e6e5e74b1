use thiserror::Error;

#[doc = r#"
A set of errors that can occur while selecting a conversion target
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The header's format word named none of the three defined layouts.
    #[error("Unsupported MIDI file format: {0}")]
    UnsupportedFormat(u16),
}
