use crate::model::SortKey;

#[derive(Debug, Clone)]
pub enum Message {
    SelectRow(usize),

    // Toolbar
    OpenAdd,
    OpenEdit,
    DeleteSelected,
    MarkSelected,
    OpenSort,

    // Dialogs
    NameChanged(String),
    PriorityChanged(String),
    SubmitForm,
    SortBy(SortKey),
    CloseDialog,
}
