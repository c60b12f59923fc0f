use super::Session;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Displays all tasks under the session's current sort mode.
pub fn cmd(session: &Session) -> Result<()> {
    let tasks = session.service.list_tasks(session.sort);

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(&tasks, session.config.description_width())
}
