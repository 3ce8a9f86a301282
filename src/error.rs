/// Xsp error uniform error definition.
#[derive(Debug, thiserror::Error)]
pub enum XspErr {
    /// Unintended errors occur when processing data or configuration.
    #[error("{0}")]
    DataErr(String),
    /// A line of the player block could not be split into score, ping and nick.
    #[error("Malformed player line {line_no} ({reason}): {line:?}")]
    MalformedPlayer {
        /// 1-based position of the line inside the player block.
        line_no: usize,
        /// The offending line, after color filtering if it was enabled.
        line: String,
        /// What the line was missing.
        reason: &'static str,
    },
    /// Handling errors that occur during sockets.
    #[error("{0}")]
    IoErr(#[from] std::io::Error),
}
