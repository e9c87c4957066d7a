//! Progress display for repeated solve runs

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks a batch of independent solve runs
///
/// Single runs finish too quickly to be worth a bar, so nothing is drawn
/// below [`PROGRESS_THRESHOLD`] runs.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    solved: usize,
    finished: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            solved: 0,
            finished: 0,
        }
    }

    /// Prepare a bar for `runs` solves labelled `label`
    pub fn initialize(&mut self, runs: usize, label: &str) {
        self.solved = 0;
        self.finished = 0;
        self.bar = (runs >= PROGRESS_THRESHOLD).then(|| {
            let bar = ProgressBar::with_draw_target(Some(runs as u64), ProgressDrawTarget::stderr());
            bar.set_style(RUN_STYLE.clone());
            bar.set_prefix(label.to_string());
            bar
        });
    }

    /// Record one finished run
    pub fn complete_run(&mut self, solved: bool) {
        self.finished += 1;
        if solved {
            self.solved += 1;
        }
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!("{} solved", self.solved));
        }
    }

    /// Runs that found a solution so far
    pub const fn solved(&self) -> usize {
        self.solved
    }

    /// Runs recorded so far
    pub const fn finished(&self) -> usize {
        self.finished
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
