use std::fs;
use std::path::Path;

use regex::Regex;

use crate::errors::ResolveError;

/// Reads back the argument names written at a call site.
///
/// Returns one entry per comma-separated argument on the line; arguments
/// that are not simple identifiers become empty placeholders. Returns an
/// empty list when the site cannot be read or matched.
pub fn resolve_names<P: AsRef<Path>>(
    path: P,
    line_number: usize,
    invoked_name: &str,
) -> Vec<String> {
    resolve_names_checked(path, line_number, invoked_name).unwrap_or_default()
}

/// Like `resolve_names`, but reports why the lookup failed.
pub fn resolve_names_checked<P: AsRef<Path>>(
    path: P,
    line_number: usize,
    invoked_name: &str,
) -> Result<Vec<String>, ResolveError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ResolveError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    let lines: Vec<&str> = source.split('\n').collect();
    let line = line_number
        .checked_sub(1)
        .and_then(|index| lines.get(index).copied())
        .ok_or(ResolveError::LineOutOfRange {
            line: line_number,
            total: lines.len(),
        })?;
    let arguments =
        call_arguments(line, invoked_name).ok_or_else(|| ResolveError::PatternMismatch {
            function: invoked_name.to_string(),
        })?;
    Ok(split_names(arguments))
}

/// Extracts the text between the call's parentheses, stopping at the
/// first close paren. Nested calls therefore truncate the list.
fn call_arguments<'a>(line: &'a str, invoked_name: &str) -> Option<&'a str> {
    let pattern = format!(r"{}\s*\(([^)]*)\)", regex::escape(invoked_name));
    let call = Regex::new(&pattern).ok()?;
    let caps = call.captures(line)?;
    Some(caps.get(1)?.as_str())
}

fn split_names(arguments: &str) -> Vec<String> {
    arguments
        .split(',')
        .map(str::trim)
        .map(|candidate| {
            if is_simple_identifier(candidate) {
                candidate.to_string()
            } else {
                String::new()
            }
        })
        .collect()
}

fn is_simple_identifier(candidate: &str) -> bool {
    let mut bytes = candidate.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    is_ident_start(first) && bytes.all(is_ident_continue)
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

fn is_ident_continue(c: u8) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}
