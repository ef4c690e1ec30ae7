/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Edit,
    Delete,
    Sort,
    MarkCompleted,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::View,
        MenuChoice::Add,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Sort,
        MenuChoice::MarkCompleted,
        MenuChoice::Exit,
    ];

    pub fn from_input(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0) + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::View => "View Tasks",
            MenuChoice::Add => "Add Task",
            MenuChoice::Edit => "Edit Task",
            MenuChoice::Delete => "Delete Task",
            MenuChoice::Sort => "Sort Tasks",
            MenuChoice::MarkCompleted => "Mark Task as Completed",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_entries() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::View));
        assert_eq!(MenuChoice::from_input(" 6 "), Some(MenuChoice::MarkCompleted));
        assert_eq!(MenuChoice::from_input("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("0"), None);
        assert_eq!(MenuChoice::from_input("8"), None);
        assert_eq!(MenuChoice::from_input("add"), None);
    }

    #[test]
    fn number_is_inverse_of_from_input() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_input(&choice.number().to_string()), Some(choice));
        }
    }
}
