use crate::config::FaqIds;
use crate::error::PageError;
use crate::host::Host;

pub const ACTIVE_CLASS: &str = "active";

/// FAQ entries that open and close independently.
#[derive(Debug)]
pub struct FaqAccordion<H> {
    host: H,
    items: Vec<FaqIds>,
    open: Vec<bool>,
}

impl<H: Host> FaqAccordion<H> {
    /// Creates the accordion with every entry closed.
    pub fn new(host: H, items: Vec<FaqIds>) -> Self {
        let open = vec![false; items.len()];
        let faq = Self { host, items, open };
        for index in 0..faq.items.len() {
            faq.render(index);
        }
        faq
    }

    /// Opens or closes entry `index` (zero-based).
    pub fn toggle(&mut self, index: usize) -> Result<(), PageError> {
        let len = self.items.len();
        let open = self
            .open
            .get_mut(index)
            .ok_or(PageError::FaqOutOfRange { index, len })?;
        *open = !*open;
        log::debug!("faq {} {}", index, if *open { "opened" } else { "closed" });
        self.render(index);
        Ok(())
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn render(&self, index: usize) {
        let ids = &self.items[index];
        let open = self.open[index];
        self.host.set_class(&ids.answer, ACTIVE_CLASS, open);
        self.host.set_text(&ids.icon, if open { "-" } else { "+" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::host::MemoryHost;

    #[test]
    fn test_entries_toggle_independently() {
        let host = MemoryHost::new();
        let mut faq = FaqAccordion::new(host.clone(), PageConfig::default().faq);
        assert_eq!(host.text("faq1-icon"), "+");

        faq.toggle(0).unwrap();
        faq.toggle(2).unwrap();
        assert!(host.has_class("faq1-answer", ACTIVE_CLASS));
        assert!(!host.has_class("faq2-answer", ACTIVE_CLASS));
        assert!(host.has_class("faq3-answer", ACTIVE_CLASS));
        assert_eq!(host.text("faq1-icon"), "-");

        faq.toggle(0).unwrap();
        assert!(!faq.is_open(0));
        assert_eq!(host.text("faq1-icon"), "+");
    }

    #[test]
    fn test_out_of_range() {
        let mut faq = FaqAccordion::new(MemoryHost::new(), PageConfig::default().faq);
        assert_eq!(
            faq.toggle(3),
            Err(PageError::FaqOutOfRange { index: 3, len: 3 })
        );
    }
}
