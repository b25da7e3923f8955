use std::env;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const MAX_CHAIN_DEPTH_ENV: &str = "EVENTLINE_MAX_CHAIN_DEPTH";

/// Normalizer configuration.
///
/// The default places no bound on how many times an action may hand back
/// a further action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub max_chain_depth: Option<usize>,
}

impl NormalizeConfig {
    /// Load configuration from environment variables.
    /// `EVENTLINE_MAX_CHAIN_DEPTH` is optional; when set it must be a positive integer.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            max_chain_depth: parse_max_chain_depth(env::var(MAX_CHAIN_DEPTH_ENV).ok())?,
        })
    }

    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = Some(depth);
        self
    }
}

fn parse_max_chain_depth(raw: Option<String>) -> Result<Option<usize>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let depth: usize = raw
        .parse()
        .with_context(|| format!("{MAX_CHAIN_DEPTH_ENV} must be a number, got {raw:?}"))?;
    if depth == 0 {
        bail!("{MAX_CHAIN_DEPTH_ENV} must be greater than zero");
    }
    Ok(Some(depth))
}
