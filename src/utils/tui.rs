use std::future::Future;

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Show a spinner while `fut` runs.
pub async fn with_spinner<F: Future>(message: impl Into<String>, fut: F) -> F::Output {
    let spinner = create_spinner(message.into());
    let output = fut.await;
    spinner.finish_and_clear();
    output
}
