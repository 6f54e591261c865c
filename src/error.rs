/// Errors returned by the [`List`](crate::List) implementations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("the list is empty")]
    Empty,

    #[error("index `{index}` is out of range for a list of length `{len}`")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("the list is full: capacity is `{capacity}`")]
    CapacityExceeded { capacity: usize },

    #[error("chunk capacity must be at least 1")]
    ZeroCapacity,
}

impl ListError {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use crate::ListError;

    #[test]
    fn test_display_mentions_the_offending_values() {
        assert_eq!(ListError::Empty.to_string(), "the list is empty");
        assert_eq!(
            ListError::out_of_range(7, 3).to_string(),
            "index `7` is out of range for a list of length `3`"
        );
        assert_eq!(
            ListError::CapacityExceeded { capacity: 4 }.to_string(),
            "the list is full: capacity is `4`"
        );
    }
}
