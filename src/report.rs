//! Progress reporting for the conversion run.
//!
//! The converter announces every declaration it accepts. Routing the
//! notices through a trait keeps the converter free of any output concern
//! and lets tests collect them instead.

/// Receiver for per-declaration progress notices.
pub trait Reporter {
    /// Called once for every visible, accepted declaration.
    ///
    /// `category` is one of `interface`, `enumeration`, `attribute`,
    /// `operation`, `constant`.
    fn notice(&mut self, category: &str, name: &str);
}

/// Reporter that forwards notices to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn notice(&mut self, category: &str, name: &str) {
        tracing::info!("collecting documentation for {category} {name}");
    }
}

/// Reporter that drops all notices.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct NullReporter;

#[cfg(test)]
impl Reporter for NullReporter {
    fn notice(&mut self, _category: &str, _name: &str) {}
}
