//! Error types for board construction and square parsing.

/// Errors from placing pieces on a [`Board`](crate::board::Board) by raw
/// mailbox index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The index names a border or out-of-table cell. Border cells never
    /// hold a piece.
    #[error("mailbox index {index} is outside the playable region")]
    OffBoard {
        /// The rejected mailbox index.
        index: i16,
    },
}

/// Error from parsing an algebraic square name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{0}\"")]
pub struct ParseSquareError(pub(crate) String);

#[cfg(test)]
mod tests {
    use super::{BoardError, ParseSquareError};

    #[test]
    fn board_error_display() {
        let err = BoardError::OffBoard { index: 17 };
        assert_eq!(
            format!("{err}"),
            "mailbox index 17 is outside the playable region"
        );
    }

    #[test]
    fn parse_square_error_display() {
        let err = ParseSquareError("x0".to_owned());
        assert_eq!(format!("{err}"), "invalid square: \"x0\"");
    }
}
