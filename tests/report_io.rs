#![forbid(unsafe_code)]
use chrono::Weekday;
use semainier::{
    io, JsonStorage, ScheduleRenderer, Scheduler, ShiftType, Storage, TextReport,
};
use std::fs;
use tempfile::tempdir;

fn shared_monday_scheduler() -> Scheduler {
    let mut s = Scheduler::new();
    s.add_employee("Alice");
    s.add_employee("Bob");
    s.add_preference("Alice", Weekday::Mon, ShiftType::Morning, 3)
        .unwrap();
    s.add_preference("Bob", Weekday::Mon, ShiftType::Morning, 2)
        .unwrap();
    s
}

#[test]
fn text_report_renders_full_week() {
    let mut s = shared_monday_scheduler();
    let shortages = s.generate_schedule();

    let rendered = TextReport.render(s.roster(), s.grid(), &shortages);

    let staffed_day = "\
Morning   : Alice Bob (2 employees)
Afternoon : No employees assigned
Evening   : No employees assigned
";
    let empty_day = "\
Morning   : No employees assigned
Afternoon : No employees assigned
Evening   : No employees assigned
";
    let expected = format!(
        "=== WEEKLY SCHEDULE ===\n\
         \n=== Monday ===\n{staffed_day}\
         \n=== Tuesday ===\n{staffed_day}\
         \n=== Wednesday ===\n{staffed_day}\
         \n=== Thursday ===\n{staffed_day}\
         \n=== Friday ===\n{staffed_day}\
         \n=== Saturday ===\n{empty_day}\
         \n=== Sunday ===\n{empty_day}\
         \n=== EMPLOYEE WORKLOAD SUMMARY ===\n\
         Alice: 5 days assigned\n\
         Bob: 5 days assigned\n\
         \n=== STAFFING SHORTAGES ===\n\
         Monday Afternoon: 0/2\n\
         Monday Evening: 0/2\n\
         Tuesday Afternoon: 0/2\n\
         Tuesday Evening: 0/2\n\
         Wednesday Afternoon: 0/2\n\
         Wednesday Evening: 0/2\n\
         Thursday Afternoon: 0/2\n\
         Thursday Evening: 0/2\n\
         Friday Afternoon: 0/2\n\
         Friday Evening: 0/2\n\
         Saturday Morning: 0/2\n\
         Saturday Afternoon: 0/2\n\
         Saturday Evening: 0/2\n\
         Sunday Morning: 0/2\n\
         Sunday Afternoon: 0/2\n\
         Sunday Evening: 0/2\n"
    );
    assert_eq!(rendered, expected);
}

#[test]
fn import_preferences_keeps_first_seen_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.csv");
    fs::write(
        &path,
        "name,day,shift,priority\n\
         John,Monday,Morning,3\n\
         Mary,monday,evening,2\n\
         John,Tue,afternoon,1\n",
    )
    .unwrap();

    let employees = io::import_preferences_csv(&path).unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].name, "John");
    assert_eq!(employees[1].name, "Mary");

    assert_eq!(
        employees[0].preferences_for_day(Weekday::Mon),
        &[(ShiftType::Morning, 3)]
    );
    assert_eq!(
        employees[0].preferences_for_day(Weekday::Tue),
        &[(ShiftType::Afternoon, 1)]
    );
    assert_eq!(
        employees[1].preferences_for_day(Weekday::Mon),
        &[(ShiftType::Evening, 2)]
    );
}

#[test]
fn import_rejects_bad_day() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.csv");
    fs::write(&path, "name,day,shift,priority\nJohn,Blursday,Morning,3\n").unwrap();

    let err = io::import_preferences_csv(&path).unwrap_err();
    assert!(err.to_string().contains("invalid day"));
}

#[test]
fn export_schedule_csv_lists_assignments() {
    let mut s = shared_monday_scheduler();
    s.generate_schedule();

    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    io::export_schedule_csv(&path, s.roster(), s.grid()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("day,shift,employees"));
    assert_eq!(lines.next(), Some("Monday,Morning,Alice;Bob"));
    // 21 slots + header
    assert_eq!(content.lines().count(), 22);
}

#[test]
fn storage_roundtrip_preserves_registry() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("roster.json")).unwrap();

    let s = shared_monday_scheduler();
    storage.save(s.roster()).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(&loaded, s.roster());
}
