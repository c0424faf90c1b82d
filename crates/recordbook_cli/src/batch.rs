//! `batch` subcommand: file-driven batch creation.

use crate::{CliError, RecordKind};
use recordbook_core::{Record, RecordService, StudentService, TodoService, VehicleService};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Reads `file` and creates its records, returning the created set as JSON.
pub fn run(kind: RecordKind, file: &Path) -> Result<String, CliError> {
    let raw = std::fs::read_to_string(file)
        .map_err(|err| CliError::Input(format!("failed to read `{}`: {err}", file.display())))?;
    create_from_json(kind, &raw)
}

pub fn create_from_json(kind: RecordKind, raw: &str) -> Result<String, CliError> {
    match kind {
        RecordKind::Students => create_records(&mut StudentService::in_memory(), raw),
        RecordKind::Todos => create_records(&mut TodoService::in_memory(), raw),
        RecordKind::Vehicles => {
            let drafts = parse(raw)?;
            let created = VehicleService::in_memory().register_vehicles(drafts)?;
            render(&created)
        }
    }
}

fn create_records<R>(service: &mut RecordService<R>, raw: &str) -> Result<String, CliError>
where
    R: Record + Serialize + DeserializeOwned,
{
    let records: Vec<R> = parse(raw)?;
    let created = service.create_batch(records)?;
    render(&created)
}

fn parse<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, CliError> {
    serde_json::from_str(raw)
        .map_err(|err| CliError::Input(format!("invalid JSON batch: {err}")))
}

fn render<T: Serialize>(records: &[T]) -> Result<String, CliError> {
    serde_json::to_string_pretty(records)
        .map_err(|err| CliError::Input(format!("failed to render records: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{create_from_json, run};
    use crate::{CliError, RecordKind};
    use std::io::Write;

    const TODOS: &str = r#"[
        {"id": "1", "title": "Task 1", "due_date": "2024-07-24", "status": "pending", "creation_date": "2024-07-23"},
        {"id": "2", "title": "Task 2", "due_date": "2024-07-25", "status": "completed", "creation_date": "2024-07-23"}
    ]"#;

    #[test]
    fn creates_todo_batch_in_input_order() {
        let rendered = create_from_json(RecordKind::Todos, TODOS).expect("batch should succeed");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON output");
        assert_eq!(value[0]["id"], "1");
        assert_eq!(value[1]["status"], "completed");
    }

    #[test]
    fn duplicate_ids_exit_with_conflict_code() {
        let raw = r#"[
            {"id": "1", "title": "a", "due_date": "2024-07-24", "status": "pending", "creation_date": "2024-07-23"},
            {"id": "1", "title": "b", "due_date": "2024-07-24", "status": "pending", "creation_date": "2024-07-23"}
        ]"#;
        let err = create_from_json(RecordKind::Todos, raw).expect_err("duplicate must fail");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn invalid_student_email_exits_with_validation_code() {
        let raw = r#"[{
            "id": "s-1", "firstName": "A", "middleName": "B", "lastName": "C",
            "dateOfBirth": "2001-01-01", "phoneNumber": "1", "email": "bad",
            "module": "M", "enrollmentDate": "2020-01-01"
        }]"#;
        let err = create_from_json(RecordKind::Students, raw).expect_err("bad email must fail");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn vehicle_drafts_receive_generated_ids() {
        let raw = r#"[{"make": "Kia", "model": "Rio", "year": 2016, "licence_plate": "KI16 RIO",
                       "colour": "White", "mileage": 88000}]"#;
        let rendered = create_from_json(RecordKind::Vehicles, raw).expect("drafts should register");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON output");
        assert!(!value[0]["id"].as_str().expect("id is a string").is_empty());
        assert_eq!(value[0]["quantity"], 1);
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let err = create_from_json(RecordKind::Todos, "{not json").expect_err("must fail");
        assert!(matches!(err, CliError::Input(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn run_reads_batch_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(TODOS.as_bytes()).expect("write batch");

        let rendered = run(RecordKind::Todos, file.path()).expect("file batch should succeed");
        assert!(rendered.contains("Task 2"));
    }
}
