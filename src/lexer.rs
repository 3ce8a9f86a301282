use serde::Serialize;

/// Separator between field names and their values.
const FIELD_DELIMITER: u8 = b'\\';
/// `d0_blind_id` is the last field and ends the line instead.
const LINE_DELIMITER: u8 = b'\n';
/// Separator inside the `qcstatus` value, the game mode comes first.
const QCSTATUS_SEPARATOR: char = ':';

/// Status fields known to the decoder, serialized using their wire names.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    #[serde(rename = "gamename")]
    GameName,
    #[serde(rename = "modname")]
    ModName,
    #[serde(rename = "gameversion")]
    GameVersion,
    #[serde(rename = "sv_maxclients")]
    MaxClients,
    #[serde(rename = "clients")]
    Clients,
    #[serde(rename = "bots")]
    Bots,
    #[serde(rename = "mapname")]
    MapName,
    #[serde(rename = "hostname")]
    HostName,
    #[serde(rename = "protocol")]
    Protocol,
    /// Derived from the part of `qcstatus` before the first colon.
    #[serde(rename = "gamemode")]
    GameMode,
    /// Full `qcstatus` value, e.g. `dm:0.8.6:P0:S16:F5:MXonotic::score!!:1`.
    #[serde(rename = "qcstatus")]
    QcStatus,
    /// Server identity, always the last `\field\value` pair of a response.
    #[serde(rename = "d0_blind_id")]
    BlindId,
    /// Free-text player block following the server identity line.
    #[serde(rename = "players")]
    Players,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::GameName,
        Field::ModName,
        Field::GameVersion,
        Field::MaxClients,
        Field::Clients,
        Field::Bots,
        Field::MapName,
        Field::HostName,
        Field::Protocol,
        Field::GameMode,
        Field::QcStatus,
        Field::BlindId,
        Field::Players,
    ];

    /// Name of the field as it appears in a status response.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::GameName => "gamename",
            Field::ModName => "modname",
            Field::GameVersion => "gameversion",
            Field::MaxClients => "sv_maxclients",
            Field::Clients => "clients",
            Field::Bots => "bots",
            Field::MapName => "mapname",
            Field::HostName => "hostname",
            Field::Protocol => "protocol",
            Field::GameMode => "gamemode",
            Field::QcStatus => "qcstatus",
            Field::BlindId => "d0_blind_id",
            Field::Players => "players",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// One decoded field of a status response.
///
/// `value` is only `None` for [Field::Players] when no player line follows
/// the server identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub field: Field,
    pub value: Option<String>,
}

impl Token {
    fn create(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: Some(value.into()),
        }
    }
}

/// How a field name read from the wire is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    /// `\name\value`, one token.
    Simple(Field),
    /// `qcstatus`, split into a game mode and the full value.
    Compound,
    /// `d0_blind_id`, newline terminated and followed by the player block.
    Terminator,
    Unknown,
}

impl Keyword {
    fn from_word(word: &str) -> Self {
        match word {
            "gamename" => Keyword::Simple(Field::GameName),
            "modname" => Keyword::Simple(Field::ModName),
            "gameversion" => Keyword::Simple(Field::GameVersion),
            "sv_maxclients" => Keyword::Simple(Field::MaxClients),
            "clients" => Keyword::Simple(Field::Clients),
            "bots" => Keyword::Simple(Field::Bots),
            "mapname" => Keyword::Simple(Field::MapName),
            "hostname" => Keyword::Simple(Field::HostName),
            "protocol" => Keyword::Simple(Field::Protocol),
            "qcstatus" => Keyword::Compound,
            "d0_blind_id" => Keyword::Terminator,
            _ => Keyword::Unknown,
        }
    }
}

/// Cursor over the response text.
///
/// Delimiters are ASCII, so every slice boundary the cursor produces lies on
/// a char boundary even when the text holds multi-byte characters.
struct Lexer<'a> {
    text: &'a str,
    current_idx: usize,
}

impl<'a> Lexer<'a> {
    fn create(text: &'a str) -> Self {
        Self {
            text,
            current_idx: 0,
        }
    }

    fn set_current_idx_forward(&mut self, idx: usize) {
        self.current_idx += idx;
    }

    /// Read up to, but not including, the next `delimiter` or the end of text.
    fn read_word(&mut self, delimiter: u8) -> &'a str {
        let text = self.text;
        let start = self.current_idx.min(text.len());
        let end = text.as_bytes()[start..]
            .iter()
            .position(|&b| b == delimiter)
            .map_or(text.len(), |pos| start + pos);

        self.current_idx = end;

        &text[start..end]
    }

    /// Everything after the cursor, `None` when the cursor sits exactly on
    /// the end of text. A cursor past the end yields an empty rest.
    fn rest(&self) -> Option<&'a str> {
        match self.text.get(self.current_idx..) {
            Some("") => None,
            Some(rest) => Some(rest),
            None => Some(""),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(&current) = self.text.as_bytes().get(self.current_idx) {
            if current != FIELD_DELIMITER {
                self.set_current_idx_forward(1);
                continue;
            }

            self.set_current_idx_forward(1);
            let word = self.read_word(FIELD_DELIMITER);
            // Drop the delimiter following the field name.
            self.set_current_idx_forward(1);

            match Keyword::from_word(word) {
                Keyword::Simple(field) => {
                    tokens.push(Token::create(field, self.read_word(FIELD_DELIMITER)));
                }
                Keyword::Compound => {
                    let value = self.read_word(FIELD_DELIMITER);
                    let game_mode = value
                        .split_once(QCSTATUS_SEPARATOR)
                        .map_or(value, |(mode, _)| mode);

                    tokens.push(Token::create(Field::GameMode, game_mode));
                    tokens.push(Token::create(Field::QcStatus, value));
                }
                Keyword::Terminator => {
                    tokens.push(Token::create(Field::BlindId, self.read_word(LINE_DELIMITER)));
                    // Drop the newline, the player block starts right after.
                    self.set_current_idx_forward(1);
                    // The block is left unconsumed, scanning carries on through it.
                    tokens.push(Token {
                        field: Field::Players,
                        value: self.rest().map(String::from),
                    });
                }
                Keyword::Unknown => {
                    log::trace!("Skip unknown status field: {:?}", word);
                }
            }
        }

        tokens
    }
}

/// Split a status response body (without the `statusResponse` preamble) into tokens.
///
/// Fields appear in the order they were sent, duplicates included.
/// Unknown fields are skipped without error.
///
/// # Example
///
/// ```
/// # use xsp::lexer::{tokenize, Field};
/// #
/// let tokens = tokenize("\\mapname\\stormkeep\\qcstatus\\dm:10");
/// let fields = tokens.iter().map(|t| t.field).collect::<Vec<_>>();
///
/// assert_eq!(fields, [Field::MapName, Field::GameMode, Field::QcStatus]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::create(text).tokenize()
}
