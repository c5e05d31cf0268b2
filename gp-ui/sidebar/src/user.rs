/// Signed-in user shown at the bottom of the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarUser {
    pub name: String,
    pub email: Option<String>,
    /// Emit [`crate::SidebarIntent::UserPressed`] when clicked.
    pub pressable: bool,
}

impl SidebarUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            pressable: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn pressable(mut self, pressable: bool) -> Self {
        self.pressable = pressable;
        self
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Up to two uppercase initials, `"?"` for a blank name.
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect();

    if initials.is_empty() {
        String::from("?")
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letters_of_first_two_words() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("  grace   brewster murray hopper "), "GB");
        assert_eq!(initials("cher"), "C");
    }

    #[test]
    fn blank_names_fall_back_to_question_mark() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn initials_handle_non_ascii_names() {
        assert_eq!(initials("élodie ørsted"), "ÉØ");
    }
}
