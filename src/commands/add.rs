use super::Session;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Adds a task through interactive prompts.
///
/// A duplicate title warns and asks for confirmation before force-adding,
/// so the duplicate gate is driven here and the service call itself always
/// forces.
pub fn cmd(session: &mut Session) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;

    if title.trim().is_empty() {
        msg_error!(Message::TitleRequired);
        return Ok(());
    }

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    if session.service.check_duplicate_title(&title) {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDuplicateAdd(title.trim().to_string()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::TaskCreationCancelled);
            return Ok(());
        }
    }

    let outcome = session.service.add_task(&title, &description, true);
    if outcome.success {
        msg_success!(outcome.message);
    } else {
        msg_error!(outcome.message);
    }

    Ok(())
}
