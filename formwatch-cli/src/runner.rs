//! Event script replay.

use std::io::{BufRead, Write};

use formwatch_lib::host::Host;
use formwatch_lib::page::{DemoPage, Dispatch, PageEvent};
use formwatch_lib::validation::SubmitOutcome;
use formwatch_lib::{MemoryHost, PageConfig};

use crate::error::{CliError, LineError, LineErrorKind};

/// Counts from one script run.
#[derive(Debug, Default)]
pub struct Summary {
    pub events: usize,
    pub errors: Vec<LineError>,
}

/// Replays script lines against a page and reports each result.
pub struct Runner<H> {
    page: DemoPage<H>,
    strict: bool,
}

impl Runner<MemoryHost> {
    /// Creates a runner over a fresh in-memory host.
    pub fn in_memory(config: PageConfig, strict: bool) -> Self {
        Self::new(DemoPage::new(MemoryHost::new(), config), strict)
    }
}

impl<H: Host + Clone> Runner<H> {
    /// With `strict`, the first bad line aborts the run.
    pub fn new(page: DemoPage<H>, strict: bool) -> Self {
        Self { page, strict }
    }

    pub fn page(&self) -> &DemoPage<H> {
        &self.page
    }

    /// Runs every line of `script`, writing one report line per event.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn run(&mut self, script: impl BufRead, out: &mut impl Write) -> Result<Summary, CliError> {
        let mut summary = Summary::default();

        for (index, line) in script.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let number = index + 1;
            match self.apply(line) {
                Ok(dispatch) => {
                    summary.events += 1;
                    writeln!(out, "{number}: {} -> {}", line.trim(), describe(&dispatch))?;
                }
                Err(kind) => {
                    let error = LineError { line: number, kind };
                    log::warn!("{}", error);
                    if self.strict {
                        return Err(error.into());
                    }
                    writeln!(out, "{number}: error: {}", error.kind)?;
                    summary.errors.push(error);
                }
            }
        }

        Ok(summary)
    }

    fn apply(&mut self, line: &str) -> Result<Dispatch, LineErrorKind> {
        let event: PageEvent = line.parse()?;
        Ok(self.page.dispatch(event)?)
    }
}

fn describe(dispatch: &Dispatch) -> String {
    match dispatch {
        Dispatch::Handled => "ok".to_string(),
        Dispatch::Submitted(SubmitOutcome::Accepted) => "accepted".to_string(),
        Dispatch::Submitted(SubmitOutcome::Rejected(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            format!("rejected ({})", fields.join(", "))
        }
        Dispatch::Elapsed { fired } => format!("{fired} deferred task(s) fired"),
    }
}

/// Writes every element the page touched, one per line.
pub fn dump(host: &MemoryHost, out: &mut impl Write) -> std::io::Result<()> {
    for (id, element) in host.snapshot() {
        let classes: Vec<_> = element.classes.iter().map(String::as_str).collect();
        writeln!(
            out,
            "{id}: visible={} value={:?} text={:?} classes=[{}] color={}",
            element.visible,
            element.value,
            element.text,
            classes.join(" "),
            element.color.as_deref().unwrap_or("inherit"),
        )?;
    }
    Ok(())
}
