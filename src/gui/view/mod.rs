pub mod dialog;
pub mod task_row;

use crate::gui::message::Message;
use crate::gui::state::GuiApp;

use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, stack, text,
};
use iced::{Color, Element, Length};

pub fn root_view(app: &GuiApp) -> Element<'_, Message> {
    let toolbar = row![
        button(text("Add Task")).on_press(Message::OpenAdd),
        button(text("Edit Task")).on_press(Message::OpenEdit),
        button(text("Delete Task"))
            .style(button::danger)
            .on_press(Message::DeleteSelected),
        button(text("Mark Completed")).on_press(Message::MarkSelected),
        button(text("Sort Tasks")).on_press(Message::OpenSort),
    ]
    .spacing(8);

    let body: Element<'_, Message> = if app.store.is_empty() {
        container(text("No tasks available.").size(16))
            .padding(8)
            .into()
    } else {
        scrollable(
            column(
                app.store
                    .tasks()
                    .iter()
                    .enumerate()
                    .map(|(i, task)| task_row::view_task_row(app, i, task)),
            )
            .spacing(2),
        )
        .height(Length::Fill)
        .into()
    };

    let content = column![
        text("Ticklist").size(32),
        toolbar,
        task_row::view_header(),
        body,
        text(&app.status).size(14),
    ]
    .spacing(12)
    .max_width(800);

    let page = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(20);

    match &app.dialog {
        Some(d) => modal(page, dialog::view_dialog(d), Message::CloseDialog),
        None => page.into(),
    }
}

/// Lays `content` over a dimmed `base`; clicking outside `content` emits `on_blur`.
fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
