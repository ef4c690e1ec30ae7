use crate::error::StoreError;
use crate::menu::action::MenuChoice;
use crate::menu::view::{self, Tone};
use crate::model::{Priority, SortKey};
use crate::store::{Completion, TaskStore};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

/// One interactive session of the numbered menu over a [`TaskStore`].
///
/// Generic over its input and output so sessions can be scripted.
pub struct Menu<'a, R, W> {
    store: &'a mut TaskStore,
    input: R,
    output: W,
    color: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-7): ")? else {
                self.say("", Tone::Plain)?;
                self.say("Exiting the program. Goodbye!", Tone::Plain)?;
                break;
            };
            match MenuChoice::from_input(&choice) {
                Some(MenuChoice::View) => self.view_tasks()?,
                Some(MenuChoice::Add) => self.add_task()?,
                Some(MenuChoice::Edit) => self.edit_task()?,
                Some(MenuChoice::Delete) => self.delete_task()?,
                Some(MenuChoice::Sort) => self.sort_tasks()?,
                Some(MenuChoice::MarkCompleted) => self.mark_task_completed()?,
                Some(MenuChoice::Exit) => {
                    self.say("Exiting the program. Goodbye!", Tone::Plain)?;
                    break;
                }
                None => self.say("Invalid choice. Please try again.", Tone::Warning)?,
            }
        }
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        self.say("\n--- To-Do List Menu ---", Tone::Heading)?;
        for line in view::menu_lines() {
            self.say(&line, Tone::Plain)?;
        }
        Ok(())
    }

    fn view_tasks(&mut self) -> Result<()> {
        self.say("\n--- Your Tasks ---", Tone::Heading)?;
        if self.store.is_empty() {
            return self.say("No tasks available.", Tone::Plain);
        }
        let lines: Vec<String> = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .map(|(i, task)| view::task_line(i + 1, task, self.color))
            .collect();
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn add_task(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter the task name: ")? else {
            return Ok(());
        };
        if TaskStore::check_name(&name).is_err() {
            return self.say("Task cannot be empty.", Tone::Warning);
        }
        let prompt = format!("Enter priority ({}): ", Priority::choices());
        let Some(priority) = self.prompt(&prompt)? else {
            return Ok(());
        };
        match self.store.add(&name, &priority) {
            Ok(added) => {
                if added.priority_defaulted {
                    self.say("Invalid priority. Setting to 'Low'.", Tone::Warning)?;
                }
                self.say(
                    &format!(
                        "Task '{}' with priority '{}' added.",
                        added.name, added.priority
                    ),
                    Tone::Success,
                )
            }
            Err(e) => self.report(&e),
        }
    }

    fn edit_task(&mut self) -> Result<()> {
        let Some(index) = self.select_task("edit")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter the new task name: ")? else {
            return Ok(());
        };
        if let Err(e) = TaskStore::check_name(&name) {
            return self.report(&e);
        }
        let prompt = format!("Enter new priority ({}): ", Priority::choices());
        let Some(priority) = self.prompt(&prompt)? else {
            return Ok(());
        };
        match self.store.edit(index, &name, &priority) {
            Ok(edited) => {
                if edited.priority_kept {
                    self.say("Invalid priority. Keeping previous priority.", Tone::Warning)?;
                }
                self.say(
                    &format!(
                        "Task '{}' updated to '{}' with priority '{}'.",
                        edited.old_name, edited.name, edited.priority
                    ),
                    Tone::Success,
                )
            }
            Err(e) => self.report(&e),
        }
    }

    fn delete_task(&mut self) -> Result<()> {
        let Some(index) = self.select_task("delete")? else {
            return Ok(());
        };
        match self.store.delete(index) {
            Ok(removed) => self.say(&format!("Task '{}' deleted.", removed.name), Tone::Success),
            Err(e) => self.report(&e),
        }
    }

    fn sort_tasks(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.say("No tasks to sort.", Tone::Plain);
        }
        self.say("\nSort by:", Tone::Heading)?;
        self.say("1. Name (A–Z)", Tone::Plain)?;
        self.say("2. Priority (High → Low)", Tone::Plain)?;
        let Some(choice) = self.prompt("Enter choice (1/2): ")? else {
            return Ok(());
        };
        let key = match choice.parse::<SortKey>() {
            Ok(key) => key,
            Err(e) => return self.report(&e),
        };
        match self.store.sort(key) {
            Ok(()) => self.say(&format!("Tasks sorted by {}.", key), Tone::Success),
            Err(e) => self.report(&e),
        }
    }

    fn mark_task_completed(&mut self) -> Result<()> {
        let Some(index) = self.select_task("mark as completed")? else {
            return Ok(());
        };
        match self.store.mark_completed(index) {
            Ok(Completion::Marked(name)) => {
                self.say(&format!("Task '{}' marked as completed.", name), Tone::Success)
            }
            Ok(Completion::AlreadyCompleted(name)) => {
                self.say(&format!("Task '{}' is already completed.", name), Tone::Plain)
            }
            Err(e) => self.report(&e),
        }
    }

    /// Shows the list and asks for a 1-based task number. `None` when the list
    /// is empty or the answer does not name a task; the reason has been printed.
    fn select_task(&mut self, verb: &str) -> Result<Option<usize>> {
        if self.store.is_empty() {
            self.say(&format!("No tasks to {}.", verb), Tone::Plain)?;
            return Ok(None);
        }
        self.view_tasks()?;
        let Some(raw) = self.prompt(&format!("Enter the task number to {}: ", verb))? else {
            return Ok(None);
        };
        // Numbers too large for i64 are still numbers, just not task numbers.
        let index = match raw.trim().parse::<i64>() {
            Ok(number) => number
                .checked_sub(1)
                .and_then(|i| usize::try_from(i).ok())
                .unwrap_or(usize::MAX),
            Err(e)
                if matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                usize::MAX
            }
            Err(_) => {
                self.say("Please enter a valid number.", Tone::Warning)?;
                return Ok(None);
            }
        };
        if let Err(e) = self.store.get(index) {
            self.report(&e)?;
            return Ok(None);
        }
        Ok(Some(index))
    }

    fn report(&mut self, error: &StoreError) -> Result<()> {
        if error.is_validation() {
            self.say(&error.to_string(), Tone::Warning)
        } else {
            self.say(&format!("Error: {}", error), Tone::Error)
        }
    }

    fn say(&mut self, text: &str, tone: Tone) -> Result<()> {
        writeln!(self.output, "{}", view::paint(text, tone, self.color))?;
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
