use crate::menu::action::MenuChoice;
use crate::model::{Priority, Task};
use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
}

/// Applies terminal colours when `color` is set, otherwise returns `text` unchanged.
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Heading => text.bold().cyan().to_string(),
        Tone::Success => text.green().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Error => text.red().to_string(),
    }
}

pub fn menu_lines() -> Vec<String> {
    MenuChoice::ALL
        .iter()
        .map(|c| format!("{}. {}", c.number(), c.label()))
        .collect()
}

/// One line of the task listing; `position` is 1-based.
pub fn task_line(position: usize, task: &Task, color: bool) -> String {
    let line = format!(
        "{}. [{}] {} (Priority: {})",
        position,
        task.status_marker(),
        task.name,
        task.priority
    );
    if !color {
        return line;
    }
    match task.priority {
        _ if task.completed => line.as_str().dark_grey().to_string(),
        Priority::High => line.as_str().red().to_string(),
        Priority::Medium => line.as_str().yellow().to_string(),
        _ => line,
    }
}
