use crate::gui::message::Message;
use crate::gui::state::{Dialog, TaskForm};
use crate::model::{Priority, SortKey};

use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Color, Element};

pub fn view_dialog(dialog: &Dialog) -> Element<'_, Message> {
    let content: Element<'_, Message> = match dialog {
        Dialog::Add(form) => view_form("Add Task", form),
        Dialog::Edit { form, .. } => view_form("Edit Task", form),
        Dialog::Sort => column![
            text("Sort tasks").size(22),
            row![
                button(text("By Name")).on_press(Message::SortBy(SortKey::Name)),
                button(text("By Priority")).on_press(Message::SortBy(SortKey::Priority)),
                horizontal_space(),
                button(text("Cancel"))
                    .style(button::secondary)
                    .on_press(Message::CloseDialog),
            ]
            .spacing(10),
        ]
        .spacing(16)
        .into(),
        Dialog::Warning(message) => column![
            text("Warning").size(22),
            text(message),
            row![horizontal_space(), button(text("OK")).on_press(Message::CloseDialog)],
        ]
        .spacing(16)
        .into(),
    };

    container(content)
        .width(380)
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn view_form<'a>(title: &'a str, form: &'a TaskForm) -> Element<'a, Message> {
    let mut content = column![
        text(title).size(22),
        text_input("Task name", &form.name)
            .on_input(Message::NameChanged)
            .on_submit(Message::SubmitForm)
            .padding(8),
        text_input(&format!("Priority ({})", Priority::choices()), &form.priority)
            .on_input(Message::PriorityChanged)
            .on_submit(Message::SubmitForm)
            .padding(8),
    ]
    .spacing(12);

    if let Some(error) = &form.error {
        content = content.push(text(error).size(14).color(Color::from_rgb(0.9, 0.3, 0.3)));
    }

    content
        .push(
            row![
                horizontal_space(),
                button(text("Cancel"))
                    .style(button::secondary)
                    .on_press(Message::CloseDialog),
                button(text("Save")).on_press(Message::SubmitForm),
            ]
            .spacing(10),
        )
        .into()
}
