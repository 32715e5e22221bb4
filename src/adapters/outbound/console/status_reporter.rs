use crate::ports::outbound::StatusReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// StderrStatusReporter adapter for reporting status to stderr
///
/// This adapter implements the StatusReporter port, writing to stderr so
/// it doesn't interfere with `--format json` output on stdout.
/// Multi-step operations are shown on an indicatif step bar.
pub struct StderrStatusReporter {
    step_bar: RefCell<Option<ProgressBar>>,
}

impl StderrStatusReporter {
    pub fn new() -> Self {
        Self {
            step_bar: RefCell::new(None),
        }
    }

    fn get_or_create_step_bar(&self, total: usize) -> ProgressBar {
        let mut bar_option = self.step_bar.borrow_mut();
        if let Some(bar) = bar_option.as_ref() {
            bar.clone()
        } else {
            let bar = ProgressBar::new(total as u64);
            let style = ProgressStyle::default_bar()
                .template("   {spinner:.green} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style);
            *bar_option = Some(bar.clone());
            bar
        }
    }

    fn finish_step_bar(&self) {
        if let Some(bar) = self.step_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrStatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for StderrStatusReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_step(&self, current: usize, total: usize, message: &str) {
        let bar = self.get_or_create_step_bar(total);
        bar.set_position(current as u64);
        bar.set_message(message.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.finish_step_bar();
        eprintln!("{}", message.yellow());
    }

    fn report_success(&self, message: &str) {
        self.finish_step_bar();
        eprintln!("{}", message.green());
    }
}
