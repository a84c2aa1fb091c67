use crate::host::Host;

pub const COUNTER_ID: &str = "counterValue";

const NEGATIVE_COLOR: &str = "#e74c3c";
const POSITIVE_COLOR: &str = "#2ecc71";

/// Integer counter colored by sign.
#[derive(Debug)]
pub struct Counter<H> {
    host: H,
    count: i64,
}

impl<H: Host> Counter<H> {
    pub fn new(host: H) -> Self {
        let counter = Self { host, count: 0 };
        counter.render();
        counter
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        self.render();
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
        self.render();
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.render();
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    fn render(&self) {
        self.host.set_text(COUNTER_ID, &self.count.to_string());
        let color = match self.count {
            n if n < 0 => Some(NEGATIVE_COLOR),
            n if n > 0 => Some(POSITIVE_COLOR),
            _ => None,
        };
        self.host.set_color(COUNTER_ID, color);
    }
}
