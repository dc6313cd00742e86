use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::error::InputError;

/// How submitted text is split into keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// Separates the keys of a bulk submission.
    pub separator: char,
    /// Strip surrounding whitespace from every field before parsing it.
    pub trim: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            trim: true,
        }
    }
}

/// A parsed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<K> {
    /// Replace the current tree with one built from these keys, in order.
    Reset(Vec<K>),
    /// Add one key to the current tree.
    Insert(K),
}

impl<K> Command<K>
where
    K: FromStr,
    K::Err: Display,
{
    /// Text holding the separator is a bulk reset, anything else a single insert.
    ///
    /// Every field is parsed before anything is returned, so a single bad field rejects the
    /// whole submission.
    pub fn parse(text: &str, config: &InputConfig) -> Result<Self, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }

        // Edge whitespace must not count as a separator when whitespace is the separator.
        let text = if config.trim { text.trim() } else { text };

        if !text.contains(config.separator) {
            return parse_key(0, text, config).map(Self::Insert);
        }

        let values = text
            .split(config.separator)
            .enumerate()
            .map(|(position, field)| parse_key(position, field, config))
            .try_collect()?;

        Ok(Self::Reset(values))
    }
}

impl<K> FromStr for Command<K>
where
    K: FromStr,
    K::Err: Display,
{
    type Err = InputError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text, &InputConfig::default())
    }
}

fn parse_key<K>(position: usize, field: &str, config: &InputConfig) -> Result<K, InputError>
where
    K: FromStr,
    K::Err: Display,
{
    let field = if config.trim { field.trim() } else { field };

    field.parse().map_err(|error: K::Err| InputError::MalformedKey {
        position,
        field: field.to_string(),
        reason: error.to_string(),
    })
}
