#![cfg(feature = "menu")]

use std::io::Cursor;
use ticklist::menu::Menu;
use ticklist::storage::LocalStorage;
use ticklist::store::TaskStore;
use ticklist::{Priority, Task};

/// Runs a scripted session and returns everything printed.
fn run_script(store: &mut TaskStore, script: &str) -> String {
    let mut output = Vec::new();
    Menu::new(store, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn store_with(tasks: &[Task]) -> (tempfile::TempDir, TaskStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    LocalStorage::save(&path, tasks).unwrap();
    (dir, TaskStore::open(path))
}

#[test]
fn test_add_then_view() {
    let (_dir, mut store) = store_with(&[]);

    let out = run_script(&mut store, "2\nBuy milk\nhigh\n1\n7\n");

    assert!(out.contains("--- To-Do List Menu ---"));
    assert!(out.contains("Enter priority (High/Medium/Low): "));
    assert!(out.contains("Task 'Buy milk' with priority 'High' added."));
    assert!(out.contains("1. [✗] Buy milk (Priority: High)"));
    assert!(out.contains("Exiting the program. Goodbye!"));
    assert_eq!(
        LocalStorage::load(store.path()),
        vec![Task::new("Buy milk", Priority::High)]
    );
}

#[test]
fn test_add_rejects_empty_and_defaults_priority() {
    let (_dir, mut store) = store_with(&[]);

    let out = run_script(&mut store, "2\n\n2\nRead\nsoon\n7\n");

    assert!(out.contains("Task cannot be empty."));
    assert!(out.contains("Invalid priority. Setting to 'Low'."));
    assert!(out.contains("Task 'Read' with priority 'Low' added."));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_empty_list_messages() {
    let (_dir, mut store) = store_with(&[]);

    let out = run_script(&mut store, "1\n3\n4\n5\n6\n7\n");

    assert!(out.contains("No tasks available."));
    assert!(out.contains("No tasks to edit."));
    assert!(out.contains("No tasks to delete."));
    assert!(out.contains("No tasks to sort."));
    assert!(out.contains("No tasks to mark as completed."));
}

#[test]
fn test_edit_flow() {
    let (_dir, mut store) = store_with(&[Task::new("Old", Priority::Medium)]);

    let out = run_script(&mut store, "3\n1\nNew\nnope\n7\n");

    assert!(out.contains("Invalid priority. Keeping previous priority."));
    assert!(out.contains("Task 'Old' updated to 'New' with priority 'Medium'."));
    assert_eq!(store.tasks()[0].name, "New");
}

#[test]
fn test_bad_task_numbers() {
    let (_dir, mut store) = store_with(&[Task::new("A", Priority::Low)]);

    let out = run_script(
        &mut store,
        "4\nabc\n4\n0\n3\n2\n6\n-1\n4\n99999999999999999999\n6\n-99999999999999999999\n7\n",
    );

    assert_eq!(out.matches("Please enter a valid number.").count(), 1);
    assert_eq!(out.matches("Invalid task number.").count(), 5);
    assert!(
        !out.contains("Enter the new task name"),
        "an invalid number must not lead to further prompts"
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_sort_and_mark() {
    let (_dir, mut store) = store_with(&[
        Task::new("B", Priority::Low),
        Task::new("A", Priority::High),
        Task::new("C", Priority::Medium),
    ]);

    let out = run_script(&mut store, "5\n2\n6\n1\n6\n1\n4\n3\n5\n9\n7\n");

    assert!(out.contains("Tasks sorted by priority."));
    assert!(out.contains("Task 'A' marked as completed."));
    assert!(out.contains("Task 'A' is already completed."));
    assert!(out.contains("Task 'B' deleted."));
    assert!(out.contains("Invalid choice."));

    let names: Vec<_> = store.tasks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
    assert!(store.tasks()[0].completed);
    assert_eq!(LocalStorage::load(store.path()), store.tasks());
}

#[test]
fn test_invalid_choice_and_end_of_input() {
    let (_dir, mut store) = store_with(&[]);

    let out = run_script(&mut store, "42\n");

    assert!(out.contains("Invalid choice. Please try again."));
    assert_eq!(out.matches("--- To-Do List Menu ---").count(), 2);
    assert!(out.ends_with("Exiting the program. Goodbye!\n"));
}
