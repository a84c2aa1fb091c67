use crate::host::Host;

pub const BODY_ID: &str = "body";
pub const TOGGLE_ID: &str = "themeToggle";
pub const DARK_CLASS: &str = "dark-mode";

const LIGHT_LABEL: &str = "☀️ Light Mode";
const DARK_LABEL: &str = "🌙 Dark Mode";

/// Light/dark switch. The button names the mode it switches to.
#[derive(Debug)]
pub struct ThemeToggle<H> {
    host: H,
    dark: bool,
}

impl<H: Host> ThemeToggle<H> {
    pub fn new(host: H) -> Self {
        let toggle = Self { host, dark: false };
        toggle.apply();
        toggle
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        log::debug!("theme: {}", if self.dark { "dark" } else { "light" });
        self.apply();
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    fn apply(&self) {
        self.host.set_class(BODY_ID, DARK_CLASS, self.dark);
        self.host
            .set_text(TOGGLE_ID, if self.dark { LIGHT_LABEL } else { DARK_LABEL });
    }
}
