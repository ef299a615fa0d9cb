mod format;
mod timers;

pub use format::format_elapsed;
pub use timers::TimerRegistry;

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::args;
use crate::caller::{CallerInfo, CallerLocator, StackCapture};

const DEFAULT_MEASURE_LABEL: &str = "measure";

/// One logged value, labeled with the argument name it was called with
/// when that name could be recovered.
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub name: Option<String>,
    pub value: String,
}

impl LogEntry {
    fn render(&self) -> String {
        match &self.name {
            Some(name) => format!("{}: {}", name, self.value),
            None => self.value.clone(),
        }
    }
}

#[derive(Serialize)]
struct LogRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a CallerInfo>,
    entries: &'a [LogEntry],
}

/// Development logger that labels values with the argument names they
/// were called with, read back from the caller's source line.
///
/// Every rendered line goes to stdout and into an internal buffer
/// readable through `output`.
pub struct SmartLog {
    locator: CallerLocator,
    timers: TimerRegistry,
    output: Vec<String>,
    timestamps: bool,
    clock_emoji: bool,
    show_location: bool,
    json: bool,
}

impl SmartLog {
    pub fn new() -> Self {
        Self::new_with_locator(CallerLocator::new())
    }

    pub fn new_with_capture(capture: Box<dyn StackCapture>) -> Self {
        Self::new_with_locator(CallerLocator::new_with_capture(capture))
    }

    fn new_with_locator(locator: CallerLocator) -> Self {
        Self {
            locator,
            timers: TimerRegistry::new(),
            output: Vec::new(),
            timestamps: true,
            clock_emoji: true,
            show_location: false,
            json: false,
        }
    }

    /// Enables or disables the wall-clock prefix on each line.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Enables or disables the clock emoji in front of the timestamp.
    pub fn with_clock_emoji(mut self, clock_emoji: bool) -> Self {
        self.clock_emoji = clock_emoji;
        self
    }

    /// Appends `(file:line)` to each line when the call site is known.
    pub fn with_location(mut self, show_location: bool) -> Self {
        self.show_location = show_location;
        self
    }

    /// Renders each record as one JSON object instead of plain text.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Overrides the locator's frame offset for embedders whose call
    /// depth differs from the default chain.
    pub fn with_frame_offset(mut self, frame_offset: usize) -> Self {
        self.locator = self.locator.with_frame_offset(frame_offset);
        self
    }

    /// Logs values. Name inference only succeeds through the `smart_log!`
    /// form, where the argument expressions are visible at the call site;
    /// calling this method directly prints the values unlabeled.
    pub fn log(&mut self, values: &[&dyn fmt::Debug]) {
        let caller = self.locator.locate_checked().ok();
        self.finish_log(caller, "log", 0, values);
    }

    /// Logs values looking up `invoked_name` on the caller's line. The
    /// first `skip_names` arguments at the call site are not value slots
    /// (the macro form passes the logger itself there).
    pub fn log_invoked_as(
        &mut self,
        invoked_name: &str,
        skip_names: usize,
        values: &[&dyn fmt::Debug],
    ) {
        let caller = self.locator.locate_checked().ok();
        self.finish_log(caller, invoked_name, skip_names, values);
    }

    // Everything after the capture point. Both entries above call the
    // locator themselves so the caller sits at the same frame offset.
    fn finish_log(
        &mut self,
        caller: Option<CallerInfo>,
        invoked_name: &str,
        skip_names: usize,
        values: &[&dyn fmt::Debug],
    ) {
        let names = caller
            .as_ref()
            .map(|info| args::resolve_names(&info.file_name, info.line_number, invoked_name))
            .and_then(|resolved| resolved.get(skip_names..).map(<[String]>::to_vec));
        let entries = zip_entries(names, values);
        self.emit_record(caller, entries);
    }

    /// Starts the named timer. Restarting a running label is silent.
    pub fn time(&mut self, label: &str) {
        self.timers.start(label);
    }

    /// Stops the named timer and logs its elapsed time. A label that was
    /// never started logs a warning line instead.
    pub fn time_end(&mut self, label: &str) {
        match self.timers.stop(label) {
            Some(elapsed) => self.note_elapsed(label, elapsed),
            None => {
                let entry = LogEntry {
                    name: None,
                    value: format!("⏱ no timer named '{label}'"),
                };
                self.emit_record(None, vec![entry]);
            }
        }
    }

    /// Logs an elapsed duration under the given label.
    pub fn note_elapsed(&mut self, label: &str, elapsed: Duration) {
        let entry = LogEntry {
            name: None,
            value: format!("⏱ {label}: {}", format_elapsed(elapsed)),
        };
        self.emit_record(None, vec![entry]);
    }

    /// Runs `work`, logs how long it took, and returns its value.
    pub fn measure<T, F: FnOnce() -> T>(&mut self, work: F) -> T {
        self.measure_with_label(DEFAULT_MEASURE_LABEL, work)
    }

    pub fn measure_with_label<T, F: FnOnce() -> T>(&mut self, label: &str, work: F) -> T {
        let started = Instant::now();
        let value = work();
        self.note_elapsed(label, started.elapsed());
        value
    }

    /// Awaits `future`, logs how long it took, and returns its output.
    pub async fn measure_async<F: Future>(&mut self, future: F) -> F::Output {
        self.measure_async_with_label(DEFAULT_MEASURE_LABEL, future)
            .await
    }

    pub async fn measure_async_with_label<F: Future>(
        &mut self,
        label: &str,
        future: F,
    ) -> F::Output {
        let started = Instant::now();
        let value = future.await;
        self.note_elapsed(label, started.elapsed());
        value
    }

    /// Drives `future` on a fresh current-thread runtime, logging how
    /// long it took. Must not be called from inside an async runtime.
    pub fn measure_blocking<F: Future>(&mut self, future: F) -> std::io::Result<F::Output> {
        self.measure_blocking_with_label(DEFAULT_MEASURE_LABEL, future)
    }

    pub fn measure_blocking_with_label<F: Future>(
        &mut self,
        label: &str,
        future: F,
    ) -> std::io::Result<F::Output> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        Ok(self.measure_with_label(label, || runtime.block_on(future)))
    }

    /// Lines emitted so far, oldest first.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    fn emit_record(&mut self, caller: Option<CallerInfo>, entries: Vec<LogEntry>) {
        let line = if self.json {
            self.json_line(caller.as_ref(), &entries)
        } else {
            self.plain_line(caller.as_ref(), &entries)
        };
        self.emit_line(line);
    }

    fn json_line(&self, caller: Option<&CallerInfo>, entries: &[LogEntry]) -> String {
        let record = LogRecord {
            timestamp: self.timestamps.then(format::local_timestamp),
            location: caller,
            entries,
        };
        serde_json::to_string(&record).unwrap_or_else(|_| self.plain_line(caller, entries))
    }

    fn plain_line(&self, caller: Option<&CallerInfo>, entries: &[LogEntry]) -> String {
        let body = entries
            .iter()
            .map(LogEntry::render)
            .collect::<Vec<_>>()
            .join(" ");
        let mut line = String::new();
        if self.timestamps {
            if self.clock_emoji {
                line.push_str("🕐 ");
            }
            line.push_str(&format::local_timestamp());
            line.push(' ');
        }
        line.push_str(&body);
        if self.show_location
            && let Some(info) = caller
        {
            line.push_str(&format!(
                " ({}:{})",
                basename(&info.file_name),
                info.line_number
            ));
        }
        line
    }

    fn emit_line(&mut self, line: String) {
        println!("{line}");
        self.output.push(line);
    }
}

impl Default for SmartLog {
    fn default() -> Self {
        Self::new()
    }
}

// Names only label values when the resolved count matches exactly; a
// partial or shifted labeling would attach names to the wrong values.
fn zip_entries(names: Option<Vec<String>>, values: &[&dyn fmt::Debug]) -> Vec<LogEntry> {
    let names = match names {
        Some(names) if names.len() == values.len() => names,
        _ => return plain_entries(values),
    };
    names
        .into_iter()
        .zip(values)
        .map(|(name, value)| LogEntry {
            name: if name.is_empty() { None } else { Some(name) },
            value: format!("{value:?}"),
        })
        .collect()
}

fn plain_entries(values: &[&dyn fmt::Debug]) -> Vec<LogEntry> {
    values
        .iter()
        .map(|value| LogEntry {
            name: None,
            value: format!("{value:?}"),
        })
        .collect()
}

fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
