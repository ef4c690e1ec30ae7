// File: src/gui/state.rs
use crate::error::StoreError;
use crate::gui::message::Message;
use crate::model::SortKey;
use crate::store::{Completion, TaskStore};
use iced::{Task, Theme};

/// Name and priority fields of the Add/Edit prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub priority: String,
    /// Validation message shown inside the prompt.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Add(TaskForm),
    Edit { index: usize, form: TaskForm },
    Sort,
    Warning(String),
}

pub struct GuiApp {
    pub store: TaskStore,
    pub selected: Option<usize>,
    pub dialog: Option<Dialog>,
    pub status: String,
}

impl GuiApp {
    pub fn new(store: TaskStore) -> (Self, Task<Message>) {
        let status = format!("Tasks: {}", store.len());
        (
            Self {
                store,
                selected: None,
                dialog: None,
                status,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectRow(index) => {
                if index < self.store.len() {
                    self.selected = Some(index);
                }
            }

            Message::OpenAdd => {
                self.dialog = Some(Dialog::Add(TaskForm::default()));
            }
            Message::OpenEdit => {
                if let Some(index) = self.require_selection("edit") {
                    let task = &self.store.tasks()[index];
                    let form = TaskForm {
                        name: task.name.clone(),
                        priority: task.priority.to_string(),
                        error: None,
                    };
                    self.dialog = Some(Dialog::Edit { index, form });
                }
            }
            Message::DeleteSelected => {
                if let Some(index) = self.require_selection("delete") {
                    match self.store.delete(index) {
                        Ok(removed) => {
                            self.selected = None;
                            self.status = format!("Task '{}' deleted.", removed.name);
                        }
                        Err(e) => self.warn(&e),
                    }
                }
            }
            Message::MarkSelected => {
                if let Some(index) = self.require_selection("mark as completed") {
                    match self.store.mark_completed(index) {
                        Ok(Completion::Marked(name)) => {
                            self.status = format!("Task '{}' marked as completed.", name);
                        }
                        Ok(Completion::AlreadyCompleted(name)) => {
                            self.status = format!("Task '{}' is already completed.", name);
                        }
                        Err(e) => self.warn(&e),
                    }
                }
            }
            Message::OpenSort => {
                self.dialog = Some(Dialog::Sort);
            }

            Message::NameChanged(value) => {
                if let Some(form) = self.form_mut() {
                    form.name = value;
                    form.error = None;
                }
            }
            Message::PriorityChanged(value) => {
                if let Some(form) = self.form_mut() {
                    form.priority = value;
                }
            }
            Message::SubmitForm => self.submit_form(),
            Message::SortBy(key) => self.sort(key),
            Message::CloseDialog => {
                self.dialog = None;
            }
        }
        Task::none()
    }

    fn submit_form(&mut self) {
        let result = match &self.dialog {
            Some(Dialog::Add(form)) => self.store.add(&form.name, &form.priority).map(|added| {
                let note = if added.priority_defaulted {
                    "Invalid priority. Setting to 'Low'. "
                } else {
                    ""
                };
                format!(
                    "{}Task '{}' with priority '{}' added.",
                    note, added.name, added.priority
                )
            }),
            Some(Dialog::Edit { index, form }) => self
                .store
                .edit(*index, &form.name, &form.priority)
                .map(|edited| {
                    let note = if edited.priority_kept {
                        "Invalid priority. Keeping previous priority. "
                    } else {
                        ""
                    };
                    format!(
                        "{}Task '{}' updated to '{}' with priority '{}'.",
                        note, edited.old_name, edited.name, edited.priority
                    )
                }),
            _ => return,
        };

        match result {
            Ok(status) => {
                self.dialog = None;
                self.status = status;
            }
            Err(e @ StoreError::EmptyName) => {
                if let Some(form) = self.form_mut() {
                    form.error = Some(e.to_string());
                }
            }
            Err(e) => self.warn(&e),
        }
    }

    fn sort(&mut self, key: SortKey) {
        match self.store.sort(key) {
            Ok(()) => {
                self.dialog = None;
                self.selected = None;
                self.status = format!("Tasks sorted by {}.", key);
            }
            Err(e) => self.warn(&e),
        }
    }

    /// The selected position, or a warning dialog when there is none.
    fn require_selection(&mut self, verb: &str) -> Option<usize> {
        match self.selected {
            Some(index) if index < self.store.len() => Some(index),
            _ => {
                self.selected = None;
                self.dialog = Some(Dialog::Warning(format!(
                    "Please select a task to {}.",
                    verb
                )));
                None
            }
        }
    }

    fn form_mut(&mut self) -> Option<&mut TaskForm> {
        match &mut self.dialog {
            Some(Dialog::Add(form)) | Some(Dialog::Edit { form, .. }) => Some(form),
            _ => None,
        }
    }

    fn warn(&mut self, error: &StoreError) {
        let text = if error.is_validation() {
            error.to_string()
        } else {
            format!("Error: {}", error)
        };
        self.dialog = Some(Dialog::Warning(text));
    }
}
