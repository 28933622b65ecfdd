use super::errors::Error;

/// Receives diagnostics from the pipeline and presents them.
///
/// The phases decide when and what to report; implementers decide how.
pub trait Reporter {
    fn report_line(&mut self, line: u32, message: &str);

    fn report_where(&mut self, line: u32, location: &str, message: &str);

    /// Non-fatal findings such as unreachable code.
    fn report_warning(&mut self, line: u32, message: &str);

    fn report(&mut self, error: &Error) {
        match error.get_location() {
            _ if error.is_warning() => self.report_warning(error.get_line(), &error.message()),
            Some(location) => self.report_where(error.get_line(), location, &error.message()),
            None => self.report_line(error.get_line(), &error.message()),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report_line(&mut self, line: u32, message: &str) {
        (**self).report_line(line, message)
    }

    fn report_where(&mut self, line: u32, location: &str, message: &str) {
        (**self).report_where(line, location, message)
    }

    fn report_warning(&mut self, line: u32, message: &str) {
        (**self).report_warning(line, message)
    }
}

/// Writes diagnostics through `tracing`.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report_line(&mut self, line: u32, message: &str) {
        tracing::error!("[line {}] Error: {}", line, message);
    }

    fn report_where(&mut self, line: u32, location: &str, message: &str) {
        tracing::error!("[line {}] Error{}: {}", line, location, message);
    }

    fn report_warning(&mut self, line: u32, message: &str) {
        tracing::warn!("[line {}] Warning: {}", line, message);
    }
}

/// Keeps formatted diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub lines: Vec<String>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        CollectingReporter { lines: vec![] }
    }
}

impl Reporter for CollectingReporter {
    fn report_line(&mut self, line: u32, message: &str) {
        self.lines.push(format!("[line {}] Error: {}", line, message));
    }

    fn report_where(&mut self, line: u32, location: &str, message: &str) {
        self.lines.push(format!("[line {}] Error{}: {}", line, location, message));
    }

    fn report_warning(&mut self, line: u32, message: &str) {
        self.lines.push(format!("[line {}] Warning: {}", line, message));
    }
}
