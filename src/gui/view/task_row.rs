// File: src/gui/view/task_row.rs
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use crate::model::{Priority, Task as TodoTask};

use iced::widget::{button, row, text};
use iced::{Border, Color, Element, Length, Theme};

/// Text colour for a priority; `None` keeps the theme's text colour.
pub fn priority_color(priority: &Priority) -> Option<Color> {
    match priority {
        Priority::High => Some(Color::from_rgb(0.8, 0.2, 0.2)),
        Priority::Medium => Some(Color::from_rgb(0.8, 0.8, 0.2)),
        Priority::Low => None,
        Priority::Other(_) => Some(Color::from_rgb(0.5, 0.5, 0.5)),
    }
}

pub fn view_header<'a>() -> Element<'a, Message> {
    row![
        text("Task").size(14).width(Length::FillPortion(5)),
        text("Priority").size(14).width(Length::FillPortion(2)),
        text("Done").size(14).width(Length::FillPortion(1)),
    ]
    .spacing(10)
    .padding([4, 8])
    .into()
}

pub fn view_task_row<'a>(
    app: &'a GuiApp,
    index: usize,
    task: &'a TodoTask,
) -> Element<'a, Message> {
    let is_selected = app.selected == Some(index);

    let mut name = text(&task.name).size(16).width(Length::FillPortion(5));
    let mut priority = text(task.priority.as_str())
        .size(16)
        .width(Length::FillPortion(2));
    if let Some(color) = priority_color(&task.priority) {
        name = name.color(color);
        priority = priority.color(color);
    }
    let done = text(task.status_marker())
        .size(16)
        .width(Length::FillPortion(1));

    let row_style = move |theme: &Theme, status: button::Status| -> button::Style {
        let palette = theme.extended_palette();
        let base = button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        };

        if is_selected {
            return button::Style {
                background: Some(palette.primary.weak.color.into()),
                text_color: palette.primary.weak.text,
                ..base
            };
        }
        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(palette.background.weak.color.into()),
                ..base
            },
            _ => base,
        }
    };

    button(row![name, priority, done].spacing(10))
        .width(Length::Fill)
        .padding([6, 8])
        .style(row_style)
        .on_press(Message::SelectRow(index))
        .into()
}
