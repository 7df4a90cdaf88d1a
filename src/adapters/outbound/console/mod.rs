/// Console adapters for operational logging
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
