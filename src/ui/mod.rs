//! UI/Progress presentation layer
//!
//! Progress reporting for the build goes through the [`ProgressReporter`]
//! trait: an indicatif bar when stdout is a terminal, nothing otherwise.

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for the per-article build loop
pub trait ProgressReporter {
    /// Show the article currently being rendered
    fn update_article(&mut self, article_id: &str);

    /// Count one article as done
    fn inc_article(&mut self);

    fn finish(&mut self);

    /// Leave the bar in place after an error
    fn abandon(&mut self);
}

/// Visual progress bar over all articles
pub struct InteractiveProgressReporter {
    article_pb: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new(total_articles: u64) -> Self {
        let article_pb = ProgressBar::new(total_articles);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            article_pb.set_style(style.progress_chars("#>-"));
        }
        Self { article_pb }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn update_article(&mut self, article_id: &str) {
        // Truncate long ids for display
        let display_id = if article_id.chars().count() > 50 {
            let tail: String = article_id
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            article_id.to_string()
        };
        self.article_pb.set_message(display_id);
    }

    fn inc_article(&mut self) {
        self.article_pb.inc(1);
    }

    fn finish(&mut self) {
        self.article_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.article_pb.abandon();
    }
}

/// No-op reporter used when output is not a terminal
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn update_article(&mut self, _article_id: &str) {}

    fn inc_article(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter for `total_articles` based on whether stdout is a terminal
pub fn progress_reporter(total_articles: usize) -> Box<dyn ProgressReporter> {
    if Term::stdout().is_term() {
        Box::new(InteractiveProgressReporter::new(total_articles as u64))
    } else {
        Box::new(SilentProgressReporter)
    }
}

/// Style for the success line printed at the end of a command
pub fn success_style() -> Style {
    Style::new().bold().green()
}
