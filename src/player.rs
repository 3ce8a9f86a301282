use crate::{color::strip_colors, XspErr};
use serde::Serialize;

/// Quotes wrap the nick at the end of every player line.
const NICK_QUOTE: char = '"';

/// One connected client, as listed after the server identity line.
///
/// Line format: `<score> <ping> [<team>] "<nick>"`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    /// Frags, kept as sent. Spectators report `-666`.
    pub score: String,
    /// Latency in milliseconds, kept as sent.
    pub ping: String,
    /// Team number, only present on team based game modes.
    pub team: Option<String>,
    /// Player nick, color codes removed when filtering is enabled.
    pub nick: String,
}

impl std::fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?
        )
    }
}

/// Decode the player block of a status response, one player per line.
///
/// Color codes are removed from the whole block before it is split when
/// `strip_colors_enabled` is set. Every line, blank ones included, must hold
/// a player.
///
/// # Example
///
/// ```
/// # use xsp::player::decode_players;
/// # use xsp::XspErr;
/// #
/// # fn main() -> Result<(), XspErr> {
/// let players = decode_players("10 50 \"^1Nick\"\n0 5 2 \"Other\"\n", true)?;
///
/// assert_eq!(players[0].nick, "Nick");
/// assert_eq!(players[0].team, None);
/// assert_eq!(players[1].team.as_deref(), Some("2"));
/// #   Ok(())
/// # }
/// ```
pub fn decode_players(
    block: &str,
    strip_colors_enabled: bool,
) -> Result<Vec<PlayerRecord>, XspErr> {
    let block = if strip_colors_enabled {
        strip_colors(block)
    } else {
        block.to_owned()
    };
    let block = block.strip_suffix('\n').unwrap_or(&block);

    block
        .split('\n')
        .enumerate()
        .map(|(idx, line)| decode_player_line(idx + 1, line))
        .collect()
}

fn decode_player_line(line_no: usize, line: &str) -> Result<PlayerRecord, XspErr> {
    let malformed = |reason| XspErr::MalformedPlayer {
        line_no,
        line: line.into(),
        reason,
    };

    let (info, nick) = line
        .split_once(NICK_QUOTE)
        .ok_or_else(|| malformed("missing nick quote"))?;
    let nick = nick.strip_suffix(NICK_QUOTE).unwrap_or(nick);
    let info = info.split_whitespace().collect::<Vec<_>>();

    match info.as_slice() {
        [score, ping, team] => Ok(PlayerRecord {
            score: (*score).into(),
            ping: (*ping).into(),
            team: Some((*team).into()),
            nick: nick.into(),
        }),
        [score, ping, ..] => Ok(PlayerRecord {
            score: (*score).into(),
            ping: (*ping).into(),
            team: None,
            nick: nick.into(),
        }),
        _ => Err(malformed("expected score and ping before the nick")),
    }
}
