use super::Session;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Toggles the completion flag of the task addressed by an id or unique
/// prefix.
pub fn cmd(session: &mut Session) -> Result<()> {
    let id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .allow_empty(true)
        .interact_text()?;

    if id.trim().is_empty() {
        msg_error!(Message::TaskIdRequired);
        return Ok(());
    }

    let outcome = session.service.toggle_task(id.trim());
    if outcome.success {
        msg_success!(outcome.message);
    } else {
        msg_error!(outcome.message);
    }

    Ok(())
}
