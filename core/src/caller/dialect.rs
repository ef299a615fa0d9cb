use once_cell::sync::Lazy;
use regex::Regex;

use super::CallerInfo;

// Frame dialects, tried in order. Each captures (path, line, column);
// the column is matched but unused.
static FILE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"file:///(.*):(\d+):(\d+)").expect("dialect pattern should compile"));

static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((.*):(\d+):(\d+)\)").expect("dialect pattern should compile"));

static BARE_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at (.*):(\d+):(\d+)").expect("dialect pattern should compile"));

/// Parses one rendered frame into a caller site, or `None` when the frame
/// matches no dialect.
pub(crate) fn parse_frame(frame: &str) -> Option<CallerInfo> {
    if let Some(caps) = FILE_URL.captures(frame) {
        // The scheme prefix swallows the root separator; put it back.
        let path = caps.get(1)?.as_str();
        return build(&format!("/{path}"), caps.get(2)?.as_str());
    }
    if let Some(caps) = PARENTHESIZED.captures(frame) {
        return build(caps.get(1)?.as_str(), caps.get(2)?.as_str());
    }
    if let Some(caps) = BARE_AT.captures(frame) {
        return build(caps.get(1)?.as_str(), caps.get(2)?.as_str());
    }
    None
}

fn build(path: &str, line: &str) -> Option<CallerInfo> {
    Some(CallerInfo {
        file_name: path.to_string(),
        line_number: line.parse().ok()?,
    })
}
