/// Represents all possible errors that can occur while decoding a maker note.
///
/// Every variant is recoverable at the `load` call: a failed load leaves the
/// maker note exactly as it was before the call.
#[derive(Debug)]
pub enum MnoteError {
    /// An entry record or its value extends past the end of the buffer, or an
    /// offset computation overflowed.
    TruncatedBuffer(String),
    /// An entry has a zero-sized element type or a zero component count.
    InvalidFormat(String),
    /// Memory for the entry table or a value buffer could not be reserved.
    AllocationFailure(String),
}

/// Provides a user-friendly string representation for each error variant in `MnoteError`.
impl std::fmt::Display for MnoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MnoteError::TruncatedBuffer(err) => write!(f, "Truncated buffer: {err}"),
            MnoteError::InvalidFormat(err) => write!(f, "Invalid format: {err}"),
            MnoteError::AllocationFailure(err) => write!(f, "Allocation failure: {err}"),
        }
    }
}

impl std::error::Error for MnoteError {}

/// Allows `?` on `try_reserve_exact` results.
impl From<std::collections::TryReserveError> for MnoteError {
    fn from(error: std::collections::TryReserveError) -> Self {
        MnoteError::AllocationFailure(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::MnoteError;

    #[test]
    fn display_carries_context() {
        let err = MnoteError::TruncatedBuffer("tag 0x0001 at 0x0008".into());
        assert_eq!(err.to_string(), "Truncated buffer: tag 0x0001 at 0x0008");

        let err = MnoteError::InvalidFormat("unknown format 0x0000".into());
        assert_eq!(err.to_string(), "Invalid format: unknown format 0x0000");
    }

    #[test]
    fn try_reserve_maps_to_allocation_failure() {
        let mut v: Vec<u8> = Vec::new();
        let err: MnoteError = v.try_reserve_exact(usize::MAX).unwrap_err().into();
        assert!(matches!(err, MnoteError::AllocationFailure(_)));
    }
}
