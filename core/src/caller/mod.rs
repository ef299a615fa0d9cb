mod capture;
mod dialect;

pub use capture::{BacktraceCapture, FixedFrames, StackCapture, UnavailableCapture};

use serde::Serialize;

use crate::errors::LocateError;

/// Frame index of the interesting call site, counting from the capture
/// point: capture (0), locator (1), logging function (2), its caller (3).
pub const CALLER_FRAME_OFFSET: usize = 3;

/// A call site recovered from rendered stack text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallerInfo {
    pub file_name: String,
    pub line_number: usize,
}

/// Finds the frame a logging call was made from.
pub struct CallerLocator {
    capture: Box<dyn StackCapture>,
    frame_offset: usize,
}

impl CallerLocator {
    pub fn new() -> Self {
        Self::new_with_capture(Box::new(BacktraceCapture::new()))
    }

    pub fn new_with_capture(capture: Box<dyn StackCapture>) -> Self {
        Self {
            capture,
            frame_offset: CALLER_FRAME_OFFSET,
        }
    }

    /// Overrides the frame offset for embedders whose call depth differs
    /// from the default chain.
    pub fn with_frame_offset(mut self, frame_offset: usize) -> Self {
        self.frame_offset = frame_offset;
        self
    }

    /// Locates the caller, or `None` when the stack cannot be captured,
    /// is too shallow, or the frame matches no dialect.
    pub fn locate(&self) -> Option<CallerInfo> {
        // Kept one call deep to match locate_checked's frame alignment.
        let frames = self.capture.frames()?;
        let frame = frames.get(self.frame_offset)?;
        dialect::parse_frame(frame)
    }

    /// Like `locate`, but reports why the lookup failed.
    pub fn locate_checked(&self) -> Result<CallerInfo, LocateError> {
        let frames = self
            .capture
            .frames()
            .ok_or(LocateError::CaptureUnavailable)?;
        let frame = frames
            .get(self.frame_offset)
            .ok_or(LocateError::MissingFrame {
                offset: self.frame_offset,
                available: frames.len(),
            })?;
        dialect::parse_frame(frame).ok_or_else(|| LocateError::DialectMismatch {
            frame: frame.clone(),
        })
    }
}

impl Default for CallerLocator {
    fn default() -> Self {
        Self::new()
    }
}
