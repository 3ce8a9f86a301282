pub mod color;
mod conf;
mod error;
pub mod lexer;
pub mod player;
mod query;
mod share;
pub mod status;

pub use conf::*;
pub use error::XspErr;
pub use lexer::{Field, Token};
pub use player::PlayerRecord;
pub use query::query_status;
pub use status::StatusRecord;

/// Out-of-band marker and response type leading every status response.
const STATUS_RESPONSE_PREAMBLE: &[u8] = b"\xFF\xFF\xFF\xFFstatusResponse\n";

/// Decode one `getstatus` response datagram.
///
/// The `statusResponse` preamble is removed when present. Bytes that are not
/// valid UTF-8 are replaced rather than rejected. Color codes are removed
/// from player nicks when `strip_colors` is set.
///
/// # Example
///
/// ```
/// # use xsp::{decode_status, Field, XspErr};
/// #
/// # fn main() -> Result<(), XspErr> {
/// let datagram = b"\xFF\xFF\xFF\xFFstatusResponse\n\\mapname\\stormkeep\\d0_blind_id\\X\n0 5 \"^1Red\"\n";
/// let status = decode_status(datagram, true)?;
///
/// assert_eq!(status.get(Field::MapName), Some("stormkeep"));
/// assert_eq!(status.players().unwrap()[0].nick, "Red");
/// #   Ok(())
/// # }
/// ```
pub fn decode_status(bufs: &[u8], strip_colors: bool) -> Result<StatusRecord, XspErr> {
    let body = bufs.strip_prefix(STATUS_RESPONSE_PREAMBLE).unwrap_or(bufs);
    let text = String::from_utf8_lossy(body);
    let tokens = lexer::tokenize(&text);

    log::debug!(
        "Decoded {} bytes into {} status tokens",
        bufs.len(),
        tokens.len()
    );

    status::build_status(tokens, strip_colors)
}
