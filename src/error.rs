use thiserror::Error;

/// Errors surfaced by the conversion and filter engines.
///
/// Expected data states that merely guard a division (pure black in the
/// CMYK derivation, an exhausted foreground in the Otsu scan) are handled
/// in-line and never reach this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field commit carried text that is not an integer, or an integer
    /// outside the channel's range. The edit is rejected; no model changes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A zero-width or zero-height grid was passed to an image operation.
    #[error("empty input: grid has zero width or height")]
    EmptyInput,
}
