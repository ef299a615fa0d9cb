/// Source of rendered stack frames for the locator.
///
/// Frame 0 is the frame that performed the capture itself; callers index
/// relative to that. Returns `None` where no capture mechanism exists.
pub trait StackCapture {
    fn frames(&self) -> Option<Vec<String>>;
}

/// Captures the live call stack through the `backtrace` crate.
#[derive(Debug, Default)]
pub struct BacktraceCapture;

impl BacktraceCapture {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StackCapture for BacktraceCapture {
    fn frames(&self) -> Option<Vec<String>> {
        let trace = backtrace::Backtrace::new();
        let rendered: Vec<String> = trace
            .frames()
            .iter()
            // Unwinder and capture internals sit below this method; frame 0
            // must be the call to `frames` itself.
            .skip_while(|frame| !is_capture_entry(frame))
            .map(render_frame)
            .collect();
        Some(rendered)
    }
}

#[cfg(target_arch = "wasm32")]
impl StackCapture for BacktraceCapture {
    fn frames(&self) -> Option<Vec<String>> {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_capture_entry(frame: &backtrace::BacktraceFrame) -> bool {
    frame
        .symbols()
        .first()
        .and_then(|symbol| symbol.name())
        .is_some_and(|name| name.to_string().contains("BacktraceCapture"))
}

#[cfg(not(target_arch = "wasm32"))]
fn render_frame(frame: &backtrace::BacktraceFrame) -> String {
    let Some(symbol) = frame.symbols().first() else {
        return "    at <unresolved>".to_string();
    };
    let name = symbol
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|| "<unresolved>".to_string());
    match (symbol.filename(), symbol.lineno()) {
        (Some(file), Some(line)) => format!(
            "    at {} ({}:{}:{})",
            name,
            file.display(),
            line,
            symbol.colno().unwrap_or(0)
        ),
        _ => format!("    at {name}"),
    }
}

/// Replays a fixed list of frames. Used by tests and by embedders that
/// already hold a rendered trace.
#[derive(Debug, Clone, Default)]
pub struct FixedFrames(pub Vec<String>);

impl FixedFrames {
    pub fn from_lines(lines: &[&str]) -> Self {
        Self(lines.iter().map(|line| line.to_string()).collect())
    }
}

impl StackCapture for FixedFrames {
    fn frames(&self) -> Option<Vec<String>> {
        Some(self.0.clone())
    }
}

/// A capture source for environments with no stack access at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCapture;

impl StackCapture for UnavailableCapture {
    fn frames(&self) -> Option<Vec<String>> {
        None
    }
}
