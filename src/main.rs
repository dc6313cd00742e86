//! Line-oriented shell over a [`Session`]: every stdin line is submitted and the resulting tree
//! is drawn on stdout. Rejected lines are logged on stderr and leave the tree unchanged.
//!
//! Keys are `i64`. Decimal input such as `2.5` is rejected on purpose, since the heap needs a
//! totally-ordered key.

use std::{
    env,
    io::{self, BufRead, Write},
};

use anyhow::{Context, Result};
use leftist::prelude::*;
use tracing_subscriber::EnvFilter;

const SEPARATOR_VAR: &str = "LEFTIST_SEPARATOR";

fn config_from_env() -> InputConfig {
    let mut config = InputConfig::default();

    if let Some(separator) = env::var(SEPARATOR_VAR)
        .ok()
        .and_then(|value| value.chars().next())
    {
        config.separator = separator;
    }

    config
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = Session::<i64>::with_config(config_from_env());
    let mut stdout = io::stdout().lock();

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;

        if line.trim().is_empty() {
            continue;
        }

        // Rejections are already reported by the session's `warn!`.
        if let Ok(tree) = session.submit(&line) {
            write!(stdout, "{}", tree.diagram())?;
        }

        stdout.flush()?;
    }

    Ok(())
}
