use crate::model::ROOT;

/// The only mutable state in the browser: which folder is on screen.
///
/// Lives for the whole session, owned by the app. Navigation never validates
/// the target id; an unknown id simply lists nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    current: String,
}

impl Default for Navigation {
    fn default() -> Self {
        Navigation {
            current: ROOT.to_string(),
        }
    }
}

impl Navigation {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn navigate_to(&mut self, id: impl Into<String>) {
        self.current = id.into();
    }

    pub fn navigate_to_root(&mut self) {
        self.current = ROOT.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        assert_eq!(Navigation::default().current(), ROOT);
    }

    #[test]
    fn navigate_to_is_unconditional_and_idempotent() {
        let mut nav = Navigation::default();
        nav.navigate_to("ghost");
        assert_eq!(nav.current(), "ghost");
        nav.navigate_to("ghost");
        assert_eq!(nav.current(), "ghost");
    }

    #[test]
    fn navigate_to_root_resets() {
        let mut nav = Navigation::default();
        nav.navigate_to("taxes");
        nav.navigate_to_root();
        assert_eq!(nav.current(), ROOT);
    }
}
