use rcampus::core::calculator::summary::{Rating, summarize};
use rcampus::models::attendance::AttendanceRecord;

fn records(statuses: &[&str]) -> Vec<AttendanceRecord> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, s)| AttendanceRecord::new(&format!("2025-03-{:02}", i + 1), s))
        .collect()
}

#[test]
fn test_empty_history_is_zero_percent() {
    let s = summarize(&[]);
    assert_eq!(s.total, 0);
    assert_eq!(s.percentage, 0);
    assert_eq!(s.rating(75), Rating::Low);
}

#[test]
fn test_counts_and_percentage() {
    let s = summarize(&records(&["Present", "Absent", "Late"]));
    assert_eq!(s.total, 3);
    assert_eq!(s.present, 1);
    assert_eq!(s.absent, 1);
    assert_eq!(s.late, 1);
    assert_eq!(s.leave, 0);
    assert_eq!(s.percentage, 33);
}

#[test]
fn test_late_and_leave_do_not_count_as_present() {
    let s = summarize(&records(&["Present", "Late", "Leave", "Leave"]));
    assert_eq!(s.percentage, 25);
}

#[test]
fn test_percentage_rounds_half_up() {
    // 1/8 = 12.5%
    let s = summarize(&records(&[
        "Present", "Absent", "Absent", "Absent", "Absent", "Absent", "Absent", "Absent",
    ]));
    assert_eq!(s.percentage, 13);

    // 2/3 = 66.67%
    let s = summarize(&records(&["Present", "Present", "Absent"]));
    assert_eq!(s.percentage, 67);

    let s = summarize(&records(&["Present", "Present"]));
    assert_eq!(s.percentage, 100);
}

#[test]
fn test_unknown_status_counts_toward_total_only() {
    let s = summarize(&records(&["Present", "Excused", "Absent", "Holiday"]));
    assert_eq!(s.total, 4);
    assert_eq!(s.bucketed(), 2);
    assert_eq!(s.percentage, 25);
}

#[test]
fn test_buckets_add_up_without_unknowns() {
    let s = summarize(&records(&["Present", "Absent", "Late", "Leave", "Present"]));
    assert_eq!(s.bucketed(), s.total);
    assert!(s.percentage <= 100);
}

#[test]
fn test_rating_threshold_is_inclusive() {
    let s = summarize(&records(&["Present", "Present", "Present", "Absent"]));
    assert_eq!(s.percentage, 75);
    assert_eq!(s.rating(75), Rating::Good);
    assert_eq!(s.rating(76), Rating::Low);
    assert_eq!(Rating::Good.as_str(), "Good");
}

#[test]
fn test_summary_ignores_record_order() {
    let statuses = [
        "Present", "Excused", "Absent", "Late", "Present", "Leave", "Holiday", "Present", "Absent",
    ];
    let expected = summarize(&records(&statuses));

    let mut reversed = statuses;
    reversed.reverse();
    assert_eq!(summarize(&records(&reversed)), expected);

    for k in 1..statuses.len() {
        let mut rotated = statuses;
        rotated.rotate_left(k);
        assert_eq!(summarize(&records(&rotated)), expected, "rotated by {k}");
    }

    assert_eq!(expected.total, 9);
    assert_eq!(expected.bucketed(), 7);
    assert_eq!(expected.percentage, 33);
}

