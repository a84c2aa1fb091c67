//! The demo page: every widget wired to one host.

mod counter;
mod event;
mod faq;
mod feedback;
mod tabs;
mod theme;

use std::time::Duration;

pub use counter::{COUNTER_ID, Counter};
pub use event::PageEvent;
pub use faq::FaqAccordion;
pub use feedback::{
    CLICK_FEEDBACK_ID, ClickFeedback, KEY_FEEDBACK_ID, KeyFeedback, MOUSE_FEEDBACK_ID,
    MouseFeedback,
};
pub use tabs::Tabs;
pub use theme::{BODY_ID, DARK_CLASS, TOGGLE_ID, ThemeToggle};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::host::Host;
use crate::validation::{FormValidator, SubmitOutcome};

/// What a dispatched event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Submitted(SubmitOutcome),
    /// Time passed; `fired` deferred tasks ran.
    Elapsed { fired: usize },
}

/// All widgets of the demo page sharing one host.
///
/// This is the adapter between host events and widget methods: it turns a
/// [`PageEvent`] into the matching call and, for form input, mirrors the
/// typed value into the host before validating it.
#[derive(Debug)]
pub struct DemoPage<H> {
    host: H,
    theme: ThemeToggle<H>,
    keys: KeyFeedback<H>,
    click: ClickFeedback<H>,
    mouse: MouseFeedback<H>,
    counter: Counter<H>,
    faq: FaqAccordion<H>,
    tabs: Tabs<H>,
    form: FormValidator<H>,
}

impl<H: Host + Clone> DemoPage<H> {
    /// Builds every widget and writes its initial state to the host.
    pub fn new(host: H, config: PageConfig) -> Self {
        Self {
            theme: ThemeToggle::new(host.clone()),
            keys: KeyFeedback::new(host.clone()),
            click: ClickFeedback::new(host.clone(), config.click_revert_delay),
            mouse: MouseFeedback::new(host.clone()),
            counter: Counter::new(host.clone()),
            faq: FaqAccordion::new(host.clone(), config.faq),
            tabs: Tabs::new(host.clone(), config.tabs),
            form: FormValidator::new(host.clone(), config.form),
            host,
        }
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Result<Dispatch, PageError> {
        match event {
            PageEvent::ToggleTheme => self.theme.toggle(),
            PageEvent::KeyDown(key) => self.keys.key_down(&key),
            PageEvent::KeyUp(key) => self.keys.key_up(&key),
            PageEvent::Click => self.click.click(),
            PageEvent::MouseOver => self.mouse.over(),
            PageEvent::MouseOut => self.mouse.out(),
            PageEvent::DoubleClick => self.mouse.double_click(),
            PageEvent::Increment => self.counter.increment(),
            PageEvent::Decrement => self.counter.decrement(),
            PageEvent::ResetCounter => self.counter.reset(),
            PageEvent::ToggleFaq(index) => self.faq.toggle(index)?,
            PageEvent::SelectTab(name) => self.tabs.select(&name)?,
            PageEvent::Input { field, value } => {
                self.host
                    .set_value(self.form.config().ids.input(field), &value);
                self.form.on_field_changed(field, value);
            }
            PageEvent::Submit => return Ok(Dispatch::Submitted(self.form.on_submit())),
            PageEvent::Wait(elapsed) => {
                return Ok(Dispatch::Elapsed {
                    fired: self.advance(elapsed),
                });
            }
        }
        Ok(Dispatch::Handled)
    }

    /// Advances every widget's clock by the same amount.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.click.advance(elapsed) + self.form.advance(elapsed)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn form(&self) -> &FormValidator<H> {
        &self.form
    }

    pub fn counter(&self) -> &Counter<H> {
        &self.counter
    }

    pub fn theme(&self) -> &ThemeToggle<H> {
        &self.theme
    }

    pub fn faq(&self) -> &FaqAccordion<H> {
        &self.faq
    }

    pub fn tabs(&self) -> &Tabs<H> {
        &self.tabs
    }
}
