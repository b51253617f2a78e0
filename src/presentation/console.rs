use crate::domain::error::FetchError;
use crate::domain::model::{BatchReport, InputItem};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Progress output for a batch run.
///
/// Lines go to stdout; the progress bar lives on stderr and is suspended
/// while a line is printed so the two never interleave.
pub struct Console {
    pb: ProgressBar,
    enable_emoji: bool,
    quiet: bool,
}

impl Console {
    pub fn new(total: usize, enable_emoji: bool) -> Self {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);

        Self {
            pb,
            enable_emoji,
            quiet: false,
        }
    }

    /// Console that prints nothing, for tests and embedding.
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
            enable_emoji: false,
            quiet: true,
        }
    }

    fn line(&self, text: String) {
        if self.quiet {
            return;
        }
        self.pb.suspend(|| println!("{}", text));
    }

    fn marker(&self, emoji: &'static str, plain: &'static str) -> &'static str {
        if self.enable_emoji {
            emoji
        } else {
            plain
        }
    }

    pub fn fetching(&self, index: usize, total: usize, item: &InputItem) {
        self.pb.set_message(item.kanji.clone());
        self.line(format!(
            "[{}/{}] Fetching {} (id={})",
            index, total, item.kanji, item.id
        ));
    }

    pub fn item_done(&self) {
        self.pb.inc(1);
    }

    pub fn soft_miss(&self, item: &InputItem) {
        let text = format!(
            "{} No data for {} (id={})",
            self.marker("⚠️", "[warn]"),
            item.kanji,
            item.id
        );
        self.line(text.yellow().to_string());
    }

    pub fn item_failed(&self, item: &InputItem, err: &FetchError) {
        let text = format!(
            "{} Error for {} (id={}): {}",
            self.marker("❌", "[err]"),
            item.kanji,
            item.id,
            err
        );
        self.line(text.red().to_string());
    }

    pub fn image_saved(&self, slot: u8, path: &Path) {
        let text = format!(
            "   {} Saved image {} to: {}",
            self.marker("✅", "[ok]"),
            slot,
            path.display()
        );
        self.line(text.green().to_string());
    }

    pub fn image_failed(&self, slot: u8, err: &FetchError) {
        let text = format!(
            "   {} Failed to download image {}: {}",
            self.marker("❌", "[err]"),
            slot,
            err
        );
        self.line(text.red().to_string());
    }

    pub fn finish(&self, report: &BatchReport, output: &Path, missing: &Path, img_dir: &Path) {
        self.pb.finish_and_clear();
        self.line(format!(
            "{} Done! {} results in {}, {} missing in {}, {} images in {} ({} failed)",
            self.marker("✅", "[ok]"),
            report.results.len(),
            output.display(),
            report.missing.len(),
            missing.display(),
            report.images_saved,
            img_dir.display(),
            report.images_failed
        ));
    }
}
