use super::Session;
use crate::libs::messages::Message;
use crate::libs::sort::SortMode;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Changes the session's sort mode by single-letter code, optionally
/// persisting the choice as the configured default.
pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::SortOptionsHeader, true);
    for mode in SortMode::ALL {
        let current = if mode == session.sort { " (current)" } else { "" };
        println!("  {}: {}{}", mode.code(), mode.description(), current);
    }

    let code: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSortOption.to_string())
        .allow_empty(true)
        .interact_text()?;

    let Some(mode) = SortMode::from_code(&code) else {
        msg_error!(Message::InvalidSortOption(code.trim().to_uppercase()));
        return Ok(());
    };

    session.sort = mode;
    msg_success!(Message::SortUpdated(mode.description().to_string()));

    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmSaveSortDefault.to_string())
        .default(false)
        .interact()?;

    if save {
        session.config.set_default_sort(mode)?;
        msg_success!(Message::ConfigSaved);
    }

    Ok(())
}
