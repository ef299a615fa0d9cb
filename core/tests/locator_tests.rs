use smartlog::caller::{FixedFrames, UnavailableCapture};
use smartlog::errors::LocateError;
use smartlog::{CALLER_FRAME_OFFSET, CallerInfo, CallerLocator};

fn locator_with(frames: &[&str]) -> CallerLocator {
    CallerLocator::new_with_capture(Box::new(FixedFrames::from_lines(frames)))
}

fn locator_for(caller_frame: &str) -> CallerLocator {
    locator_with(&[
        "    at frames (/opt/smartlog/capture.rs:20:5)",
        "    at locate_checked (/opt/smartlog/caller.rs:61:9)",
        "    at log (/opt/smartlog/logger.rs:118:13)",
        caller_frame,
    ])
}

#[test]
fn bare_at_frame_resolves_to_path_and_line() {
    let info = locator_for("    at /home/user/app.js:42:13")
        .locate()
        .expect("frame should resolve");
    assert_eq!(
        info,
        CallerInfo {
            file_name: "/home/user/app.js".to_string(),
            line_number: 42,
        }
    );
}

#[test]
fn file_url_frame_gets_its_root_separator_back() {
    let info = locator_for("    at run (file:///srv/web/handlers.js:97:21)")
        .locate()
        .expect("frame should resolve");
    assert_eq!(info.file_name, "/srv/web/handlers.js");
    assert_eq!(info.line_number, 97);
}

#[test]
fn file_url_wins_over_the_parentheses_around_it() {
    let info = locator_for("    at main (file:///tmp/a.js:3:9)")
        .locate()
        .expect("frame should resolve");
    assert_eq!(info.file_name, "/tmp/a.js");
}

#[test]
fn parenthesized_frame_resolves() {
    let info = locator_for("    at handler (/srv/web/routes.js:88:13)")
        .locate()
        .expect("frame should resolve");
    assert_eq!(info.file_name, "/srv/web/routes.js");
    assert_eq!(info.line_number, 88);
}

#[test]
fn windows_drive_colon_stays_in_the_path() {
    let info = locator_for("    at C:/projects/tool.js:9:1")
        .locate()
        .expect("frame should resolve");
    assert_eq!(info.file_name, "C:/projects/tool.js");
    assert_eq!(info.line_number, 9);
}

#[test]
fn shallow_stack_yields_none() {
    let locator = locator_with(&["Error", "    at /a.js:1:2"]);
    assert_eq!(locator.locate(), None);

    let err = locator
        .locate_checked()
        .expect_err("shallow stack should be reported");
    assert!(matches!(
        err,
        LocateError::MissingFrame {
            offset: CALLER_FRAME_OFFSET,
            available: 2,
        }
    ));
}

#[test]
fn unavailable_capture_yields_none() {
    let locator = CallerLocator::new_with_capture(Box::new(UnavailableCapture));
    assert_eq!(locator.locate(), None);

    let err = locator
        .locate_checked()
        .expect_err("missing capture should be reported");
    assert!(err.to_string().contains("unavailable"));
}

#[test]
fn unrecognized_frame_yields_none() {
    let locator = locator_for("    at <anonymous>");
    assert_eq!(locator.locate(), None);

    let err = locator
        .locate_checked()
        .expect_err("mismatch should be reported");
    assert!(err.to_string().contains("<anonymous>"));
}

#[test]
fn frame_offset_is_adjustable() {
    let locator = locator_with(&["Error", "    at /direct.js:5:1"]).with_frame_offset(1);
    let info = locator.locate().expect("frame should resolve");
    assert_eq!(info.file_name, "/direct.js");
    assert_eq!(info.line_number, 5);
}

#[test]
fn locating_twice_gives_the_same_answer() {
    let locator = locator_for("    at /home/user/app.js:42:13");
    assert_eq!(locator.locate(), locator.locate());
}
