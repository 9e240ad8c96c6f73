use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;
use crate::parser::{Mode, Options, DEFAULT_LABEL_PREFIX};

pub const DEFAULT_INPUT: &str = "../results/2c.txt";
const ENV_PREFIX: &str = "PLANOPT";

/// Run settings: defaults, then `PLANOPT_*` environment, then CLI flags.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub label_prefix: String,
    pub lenient: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("label_prefix", DEFAULT_LABEL_PREFIX)?
            .set_default("lenient", false)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn options(&self) -> Options {
        Options {
            label_prefix: self.label_prefix.clone(),
            mode: if self.lenient { Mode::Lenient } else { Mode::Strict },
        }
    }
}
