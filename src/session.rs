use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use tracing::{debug, warn};

use crate::{
    error::Result,
    input::{Command, InputConfig},
    tree::Tree,
};

/// Owner of the "current tree" that submissions are applied to.
///
/// Resetting and inserting are separate operations; [`Session::submit`] only picks one of them
/// based on the shape of the text. A rejected submission leaves the tree as it was.
#[derive(Debug)]
pub struct Session<K> {
    tree: Tree<K>,
    config: InputConfig,
}

impl<K> Default for Session<K> {
    fn default() -> Self {
        Self::with_config(InputConfig::default())
    }
}

impl<K> Session<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            tree: Tree::new(),
            config,
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn tree(&self) -> &Tree<K> {
        &self.tree
    }

    pub fn into_tree(self) -> Tree<K> {
        self.tree
    }
}

impl<K: Ord + Debug> Session<K> {
    /// Discards the current tree, seeding a new one with the first value and inserting the rest.
    pub fn reset_with(&mut self, values: impl IntoIterator<Item = K>) -> &Tree<K> {
        let mut values = values.into_iter();
        let seed = values.next().map_or_else(Tree::new, Tree::singleton);

        self.tree = values.fold(seed, Tree::insert);

        debug!(root = ?self.tree.peek(), rank = self.tree.rank(), "reset tree");
        &self.tree
    }

    pub fn insert_one(&mut self, value: K) -> &Tree<K> {
        debug!(?value, "inserting");
        self.tree.push(value);

        debug!(root = ?self.tree.peek(), rank = self.tree.rank(), "inserted");
        &self.tree
    }

    pub fn apply(&mut self, command: Command<K>) -> &Tree<K> {
        match command {
            Command::Reset(values) => self.reset_with(values),
            Command::Insert(value) => self.insert_one(value),
        }
    }
}

impl<K> Session<K>
where
    K: Ord + Debug + FromStr,
    K::Err: Display,
{
    /// Parses and applies user text, either a single key or a separated list of keys.
    pub fn submit(&mut self, text: &str) -> Result<&Tree<K>> {
        let command = match Command::parse(text, &self.config) {
            Ok(command) => command,
            Err(error) => {
                warn!(%error, text, "rejected submission");
                return Err(error.into());
            }
        };

        Ok(self.apply(command))
    }
}
