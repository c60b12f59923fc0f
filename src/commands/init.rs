//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard and persists the result. Re-running
//! pre-fills the prompts with the current values.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
