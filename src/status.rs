use crate::{
    lexer::{Field, Token},
    player::{decode_players, PlayerRecord},
    XspErr,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Decoded server status.
///
/// Holds one value per field that appeared in the response. When a field
/// was sent more than once, the last value is kept.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRecord {
    #[serde(flatten)]
    fields: BTreeMap<Field, String>,
    /// `None` if the response had no player block at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    players: Option<Vec<PlayerRecord>>,
}

impl std::fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?
        )
    }
}

impl StatusRecord {
    /// Value of a text field. [Field::Players] is never stored here, see [StatusRecord::players].
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Connected players, empty when the player block was present but blank.
    pub fn players(&self) -> Option<&[PlayerRecord]> {
        self.players.as_deref()
    }

    /// Text fields in field order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(&field, value)| (field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.players.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, token: Token, strip_colors: bool) -> Result<(), XspErr> {
        match (token.field, token.value) {
            (Field::Players, Some(block)) => {
                self.players = Some(decode_players(&block, strip_colors)?);
            }
            (Field::Players, None) => {
                self.players = Some(vec![]);
            }
            (field, Some(value)) => {
                self.fields.insert(field, value);
            }
            (field, None) => {
                self.fields.remove(&field);
            }
        }

        Ok(())
    }
}

/// Assemble tokens into a [StatusRecord], walking them once in order.
///
/// The player block is decoded on the way; a malformed player line fails
/// the whole build.
pub fn build_status(tokens: Vec<Token>, strip_colors: bool) -> Result<StatusRecord, XspErr> {
    let mut status = StatusRecord::default();

    for token in tokens {
        status.insert(token, strip_colors)?;
    }

    Ok(status)
}
