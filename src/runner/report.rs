//! Human-readable report output

use parking_lot::Mutex;
use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;

/// Width of section rules
pub const RULE_WIDTH: usize = 60;
/// Width of the comparison table rules
pub const TABLE_WIDTH: usize = 80;
/// Prompts are cut to this many characters in previews
pub const PREVIEW_CHARS: usize = 100;

/// Sink for the report the runner prints
///
/// Write failures are ignored: losing a line of console output must not abort
/// a test run.
pub struct Reporter {
    out: Box<dyn Write + Send>,
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Reporter {
    pub fn stdout() -> Self {
        Self {
            out: Box::new(std::io::stdout()),
        }
    }

    /// Reporter writing into memory, plus a handle to read it back
    pub fn buffered() -> (Self, CapturedOutput) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let reporter = Self {
            out: Box::new(SharedWriter(Arc::clone(&buffer))),
        };
        (reporter, CapturedOutput(buffer))
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", text.as_ref());
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Blank line followed by a heading
    pub fn section(&mut self, title: impl AsRef<str>) {
        self.blank();
        self.line(title);
    }

    pub fn rule(&mut self, width: usize) {
        self.line("=".repeat(width));
    }

    pub fn thin_rule(&mut self, width: usize) {
        self.line("-".repeat(width));
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }
}

/// Read side of [`Reporter::buffered`]
#[derive(Debug, Clone)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// First `limit` characters of `text`, with `...` when something was cut
pub fn preview(text: &str, limit: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Render an optional value, `N/A` when absent
pub fn or_na<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| crate::client::NOT_AVAILABLE.to_string())
}

/// Character count difference and its percentage of the original length
pub fn char_reduction(original: &str, optimized: &str) -> (i64, f64) {
    let original_len = original.chars().count() as i64;
    let optimized_len = optimized.chars().count() as i64;
    let reduction = original_len - optimized_len;
    let percentage = if original_len > 0 {
        reduction as f64 / original_len as f64 * 100.0
    } else {
        0.0
    };
    (reduction, percentage)
}
