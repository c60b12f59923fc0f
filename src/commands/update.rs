use super::Session;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Updates a task's title and/or description.
///
/// Shows the current values first; an empty answer keeps the existing
/// value, so submitting nothing for both fields is a no-op rather than a
/// validation error.
pub fn cmd(session: &mut Session) -> Result<()> {
    let id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .allow_empty(true)
        .interact_text()?;

    if id.trim().is_empty() {
        msg_error!(Message::TaskIdRequired);
        return Ok(());
    }

    let current = session.service.get_task(id.trim());
    if !current.success {
        msg_error!(current.message);
        return Ok(());
    }
    let Some(task) = current.task else {
        return Ok(());
    };

    msg_print!(Message::CurrentTitle(task.title.clone()), true);
    msg_print!(Message::CurrentDescription(task.description.clone()));
    msg_info!(Message::UpdateKeepHint);

    let new_title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewTitle.to_string())
        .allow_empty(true)
        .interact_text()?;

    let new_description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    if new_title.trim().is_empty() && new_description.trim().is_empty() {
        msg_info!(Message::NoChangesMade);
        return Ok(());
    }

    let title = (!new_title.trim().is_empty()).then_some(new_title.as_str());
    let description = (!new_description.trim().is_empty()).then_some(new_description.as_str());

    let outcome = session.service.update_task(id.trim(), title, description);
    if outcome.success {
        msg_success!(outcome.message);
    } else {
        msg_error!(outcome.message);
    }

    Ok(())
}
