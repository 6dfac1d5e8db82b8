mod common;
use common::rec;
use shiftsheet::core::index::build_shift_index;

#[test]
fn test_calendar_date_dominates_last_time() {
    let records = vec![
        rec("2025-01-01", "Γ", "LINE 4", "23:00", "item", "1"),
        rec("2025-01-02", "A", "LINE 4", "05:00", "item", "2"),
    ];

    let entries = build_shift_index(&records, true);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, "2025-01-02");
    assert_eq!(entries[1].date, "2025-01-01");
}

#[test]
fn test_same_date_later_last_time_ranks_first() {
    let records = vec![
        rec("2025-01-02", "A", "LINE 4", "06:10", "item", "1"),
        rec("2025-01-02", "A", "LINE 4", "09:45", "item", "2"),
        rec("2025-01-02", "B", "LINE 4", "14:30", "item", "3"),
    ];

    let entries = build_shift_index(&records, true);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].shift, "B");
    assert_eq!(entries[0].last_time_str(), "14:30");
    assert_eq!(entries[1].shift, "A");
    assert_eq!(entries[1].last_time_str(), "09:45");
}

#[test]
fn test_records_missing_key_fields_are_ignored() {
    let records = vec![
        rec("", "A", "LINE 4", "06:10", "item", "1"),
        rec("2025-01-02", "", "LINE 4", "06:10", "item", "1"),
        rec("2025-01-02", "A", "", "06:10", "item", "1"),
        rec("2025-01-02", "A", "LINE 4", "", "item", "1"),
    ];

    assert!(build_shift_index(&records, true).is_empty());
}

#[test]
fn test_station_ignored_when_not_station_aware() {
    let records = vec![
        rec("2025-01-02", "A", "LINE 4", "06:10", "item", "1"),
        rec("2025-01-02", "A", "LINE 5", "07:20", "item", "1"),
        // station may even be missing in the two-part configuration
        rec("2025-01-02", "A", "", "08:30", "item", "1"),
    ];

    let entries = build_shift_index(&records, false);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].station, None);
    assert_eq!(entries[0].last_time_str(), "08:30");
    assert_eq!(entries[0].key().to_string(), "2025-01-02|A");
}

#[test]
fn test_unparsable_date_sorts_as_earliest() {
    let records = vec![
        rec("not-a-date", "A", "LINE 4", "09:00", "item", "1"),
        rec("2025-01-01", "A", "LINE 4", "06:00", "item", "1"),
    ];

    let entries = build_shift_index(&records, true);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, "2025-01-01");
    assert_eq!(entries[1].date, "not-a-date");
}

#[test]
fn test_unparsable_times_leave_last_time_empty() {
    let records = vec![
        rec("2025-01-02", "A", "LINE 4", "late", "item", "1"),
        rec("2025-01-02", "A", "LINE 4", "later", "item", "2"),
    ];

    let entries = build_shift_index(&records, true);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].last_time, None);
    assert_eq!(entries[0].last_time_str(), "--:--");
}

#[test]
fn test_group_with_no_parsed_time_ranks_below_same_date() {
    let records = vec![
        rec("2025-01-02", "A", "LINE 4", "bogus", "item", "1"),
        rec("2025-01-02", "B", "LINE 4", "00:01", "item", "1"),
    ];

    let entries = build_shift_index(&records, true);

    assert_eq!(entries[0].shift, "B");
    assert_eq!(entries[1].shift, "A");
}

#[test]
fn test_empty_input_is_a_valid_outcome() {
    assert!(build_shift_index(&[], true).is_empty());
}
