//! Dry-run integration tests: previews must never mutate the remote
mod common;

use common::{MockApi, RecordingReporter, midweek, project, task};
use resched::run;

#[test]
fn test_dry_run_issues_no_updates() {
    let api = MockApi::new(
        vec![
            task("1", "a", Some("2024-05-01"), "p1"),
            task("2", "b", Some("2024-05-02"), "p1"),
        ],
        vec![project("p1", "Work")],
    );
    let mut reporter = RecordingReporter::default();

    let summary = run(&api, &mut reporter, midweek(), true).unwrap();

    assert!(api.updates.borrow().is_empty());
    assert_eq!(summary.modified, 2);
    assert_eq!(reporter.previews, 1);
    assert!(reporter.rescheduled.is_empty());
    assert_eq!(reporter.summaries, 0);
}

#[test]
fn test_dry_run_with_zero_tasks_issues_no_updates() {
    let api = MockApi::new(vec![], vec![]);
    let mut reporter = RecordingReporter::default();

    let summary = run(&api, &mut reporter, midweek(), true).unwrap();

    assert!(api.updates.borrow().is_empty());
    assert_eq!(summary.modified, 0);
    assert_eq!(summary.unmodified, 0);
    assert_eq!(reporter.previews, 1);
}

#[test]
fn test_dry_run_counts_match_live_counts() {
    let tasks = vec![
        task("1", "a", Some("2024-05-01"), "p1"),
        task("2", "b", None, "p1"),
        task("3", "c", Some("2024-05-02"), "p2"),
    ];

    let dry_api = MockApi::new(tasks.clone(), vec![]);
    let mut dry_reporter = RecordingReporter::default();
    let dry = run(&dry_api, &mut dry_reporter, midweek(), true).unwrap();

    let live_api = MockApi::new(tasks, vec![]);
    let mut live_reporter = RecordingReporter::default();
    let live = run(&live_api, &mut live_reporter, midweek(), false).unwrap();

    assert_eq!(dry, live);
    assert_eq!(live_api.updates.borrow().len(), dry.modified);
}
