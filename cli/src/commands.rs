use std::io::Write;

use anyhow::{bail, Result};
use todo_core::{TodoId, TodoItem, TodoListController};

pub fn list(controller: &TodoListController, out: &mut impl Write) -> Result<()> {
    let state = controller.snapshot();
    if state.items.is_empty() {
        writeln!(out, "No todos.")?;
    }
    for item in &state.items {
        writeln!(out, "{}", render(item))?;
    }
    Ok(())
}

pub async fn add(
    controller: &TodoListController,
    out: &mut impl Write,
    title: String,
    description: String,
) -> Result<()> {
    controller.set_draft_title(title);
    controller.set_draft_description(description);
    let Some(item) = controller.submit_draft().await? else {
        bail!("title and description must not be blank");
    };
    if let Some(status) = controller.snapshot().status_message {
        writeln!(out, "{status}")?;
    }
    writeln!(out, "{}", render(&item))?;
    Ok(())
}

pub async fn edit(
    controller: &TodoListController,
    out: &mut impl Write,
    id: String,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let id = TodoId::new(id);
    if !controller.begin_edit(&id) {
        bail!("no todo with id {id}");
    }
    if let Some(title) = title {
        controller.set_edit_title(title);
    }
    if let Some(description) = description {
        controller.set_edit_description(description);
    }
    controller.update_item(&id).await?;
    if let Some(item) = controller.snapshot().item(&id) {
        writeln!(out, "{}", render(item))?;
    }
    Ok(())
}

pub async fn delete(controller: &TodoListController, out: &mut impl Write, id: String) -> Result<()> {
    let id = TodoId::new(id);
    if controller.delete_item(&id).await? {
        writeln!(out, "Deleted {id}")?;
    } else {
        writeln!(out, "Cancelled")?;
    }
    Ok(())
}

pub fn render(item: &TodoItem) -> String {
    format!("{}  {}: {}", item.id, item.title, item.description)
}
