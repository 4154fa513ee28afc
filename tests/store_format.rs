//! Persisted store format: round-trip fidelity and minimal records.

use anyhow::Result;
use chrono::NaiveDate;
use tempfile::tempdir;

use taskdeck::task::{Registry, Storage, TaskAttrs, TaskId};

#[test]
fn round_trip_reproduces_every_field() -> Result<()> {
    let temp = tempdir()?;
    let storage = Storage::new(temp.path().join("tasks.json"));

    let mut registry = Registry::new();
    registry.create(TaskAttrs {
        name: "pay rent".to_string(),
        due: NaiveDate::from_ymd_opt(2017, 6, 1),
        schedule: Some("1 month".to_string()),
        tags: vec!["home".to_string(), "money".to_string()],
    });
    registry.create(TaskAttrs {
        name: "call dentist".to_string(),
        ..Default::default()
    });
    registry.get_mut(TaskId(1)).unwrap().complete()?;

    storage.save(registry.tasks())?;
    let reloaded = Registry::from_tasks(storage.load()?);

    assert_eq!(reloaded.tasks(), registry.tasks());

    Ok(())
}

#[test]
fn absent_fields_stay_absent_through_a_round_trip() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("tasks.json");
    let storage = Storage::new(path.clone());

    let mut registry = Registry::new();
    registry.create(TaskAttrs {
        name: "bare".to_string(),
        ..Default::default()
    });

    storage.save(registry.tasks())?;
    let reloaded = Registry::from_tasks(storage.load()?);
    storage.save(reloaded.tasks())?;

    let content = std::fs::read_to_string(&path)?;
    assert!(!content.contains("\"due\""));
    assert!(!content.contains("\"schedule\""));
    assert!(!content.contains("\"tags\""));
    assert!(!content.contains("null"));

    let task = &reloaded.tasks()[0];
    assert!(task.due.is_none());
    assert!(task.schedule.is_none());
    assert!(task.tags.is_empty());

    Ok(())
}

#[test]
fn due_date_is_stored_as_calendar_text() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("tasks.json");
    let storage = Storage::new(path.clone());

    let mut registry = Registry::new();
    registry.create(TaskAttrs {
        name: "pay rent".to_string(),
        due: NaiveDate::from_ymd_opt(2017, 6, 1),
        ..Default::default()
    });
    storage.save(registry.tasks())?;

    // The record carries a plain YYYY-MM-DD string, re-derived on load
    let content = std::fs::read_to_string(&path)?;
    assert!(content.contains("\"2017-06-01\""));

    let reloaded = Registry::from_tasks(storage.load()?);
    assert_eq!(
        reloaded.tasks()[0].due,
        NaiveDate::from_ymd_opt(2017, 6, 1)
    );

    Ok(())
}

#[test]
fn records_written_by_hand_load_with_defaults() -> Result<()> {
    let temp = tempdir()?;
    let path = temp.path().join("tasks.json");
    std::fs::write(
        &path,
        r#"[{"id": 0, "name": "minimal"},
            {"id": 1, "name": "tagged", "tags": ["a"], "due": "2017-06-15"}]"#,
    )?;

    let storage = Storage::new(path);
    let registry = Registry::from_tasks(storage.load()?);

    let minimal = registry.get(TaskId(0)).unwrap();
    assert!(!minimal.recurs);
    assert!(!minimal.completed);
    assert!(minimal.due.is_none());

    let tagged = registry.get(TaskId(1)).unwrap();
    assert_eq!(tagged.tags, vec!["a"]);
    assert_eq!(tagged.due, NaiveDate::from_ymd_opt(2017, 6, 15));

    Ok(())
}
