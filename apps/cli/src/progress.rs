//! Upload progress display.

use gigapdf_transfer::phase_message;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for one upload, driven by the orchestrator's percentages.
pub struct UploadProgress {
    bar: ProgressBar,
}

impl UploadProgress {
    #[must_use]
    pub fn new(filename: &str, total_bytes: u64) -> Self {
        let bar = ProgressBar::new(100);

        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{prefix}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos:>3}% {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        bar.set_prefix(format!("Uploading {filename} ({})", format_bytes(total_bytes)));
        bar.set_message(phase_message(0));
        bar.enable_steady_tick(std::time::Duration::from_millis(120));

        Self { bar }
    }

    /// Moves the bar to `percent` and refreshes the phase label.
    pub fn update(&self, percent: u8) {
        self.bar.set_position(u64::from(percent));
        self.bar.set_message(phase_message(percent));
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Summary ready");
    }

    /// Leaves the bar where it stopped, with the failure reason.
    pub fn abandon(&self, reason: &str) {
        self.bar.abandon_with_message(reason.to_string());
    }
}

/// Format bytes in human-readable format.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{size:.2} {}", UNITS[unit_idx])
}
