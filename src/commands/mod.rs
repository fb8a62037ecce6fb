mod common;
mod host;
mod progress_reporter;
mod run;
mod settings;

pub use host::Host;
pub use progress_reporter::ProgressReporter;
pub use run::{run, run_with_lookup};
pub use settings::Settings;
