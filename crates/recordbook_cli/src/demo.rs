//! `demo` subcommand: the to-do client walk-through against a local store.

use crate::CliError;
use recordbook_core::{TodoItem, TodoService};
use serde::Serialize;
use serde_json::json;

fn example_item() -> Result<TodoItem, CliError> {
    serde_json::from_value(json!({
        "id": "1",
        "title": "Task 1",
        "description": "Description for Task 1",
        "due_date": "2024-07-24",
        "status": "pending",
        "priority": "medium",
        "creation_date": "2024-07-23"
    }))
    .map_err(|err| CliError::Input(format!("invalid example item: {err}")))
}

fn render<T: Serialize>(step: &str, value: &T) -> Result<String, CliError> {
    let body = serde_json::to_string(value)
        .map_err(|err| CliError::Input(format!("failed to render {step}: {err}")))?;
    Ok(format!("{step}: {body}"))
}

/// Runs create, list, get, update, delete and a final lookup.
///
/// Returns one rendered line per step; the final lookup reports the
/// expected not-found error instead of failing the run.
pub fn run() -> Result<Vec<String>, CliError> {
    let mut service = TodoService::in_memory();
    let item = example_item()?;
    let mut lines = Vec::new();

    lines.push(render("create", &service.create_batch(vec![item.clone()])?)?);
    lines.push(render("list", &service.list_all())?);
    lines.push(render("get", &service.get(&item.id)?)?);

    let mut updated = item.clone();
    updated.title = "Updated Task 1".to_string();
    lines.push(render("update", &service.replace(&item.id, updated)?)?);

    lines.push(render("delete", &service.delete(&item.id)?)?);

    match service.get(&item.id) {
        Ok(record) => lines.push(render("get after delete", &record)?),
        Err(err) => lines.push(format!("get after delete: {err}")),
    }

    Ok(lines)
}
