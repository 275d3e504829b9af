use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    init_db_with_data, init_db_with_directory, rca, setup_test_db, temp_out, write_payload,
};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rca()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database"))
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_import_reports_counts() {
    let db_path = setup_test_db("import_counts");
    let attendance = write_payload("import_counts_att", common::ATTENDANCE_JSON);
    let routines = write_payload("import_counts_rt", common::ROUTINES_JSON);

    rca()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rca()
        .args([
            "--db",
            &db_path,
            "import",
            "--attendance",
            &attendance,
            "--routines",
            &routines,
        ])
        .assert()
        .success()
        .stdout(contains("Imported 3 attendance records."))
        .stdout(contains("Imported 2 class routine(s)."));
}

#[test]
fn test_import_rejects_failed_envelope() {
    let db_path = setup_test_db("import_failed");
    let payload = write_payload(
        "import_failed",
        r#"{"success": false, "message": "Unauthenticated.", "data": null}"#,
    );

    rca()
        .args(["--db", &db_path, "import", "--attendance", &payload])
        .assert()
        .failure()
        .stderr(contains("Unauthenticated."));
}

#[test]
fn test_attendance_single_dates() {
    let db_path = init_db_with_data("att_dates");

    let check = |date: &str, expected: &str| {
        rca()
            .args([
                "--db",
                &db_path,
                "--today",
                "2025-03-03",
                "attendance",
                "--date",
                date,
            ])
            .assert()
            .success()
            .stdout(contains(date))
            .stdout(contains(expected));
    };

    check("2025-03-03", "late");
    check("2025-03-02", "absent");
    // Saturday is an off day even though a record exists
    check("2025-03-01", "off");
    check("2025-03-04", "future");
    check("2025-01-05", "inapplicable");
}

#[test]
fn test_attendance_summary() {
    let db_path = init_db_with_data("att_summary");

    rca()
        .args(["--db", &db_path, "attendance", "--summary"])
        .assert()
        .success()
        .stdout(contains("Overall attendance: 33% (1/3 days)"))
        .stdout(contains("Low"))
        .stdout(contains("Present: 1  Absent: 1  Late: 1  Leave: 0"));
}

#[test]
fn test_attendance_month_calendar() {
    let db_path = init_db_with_data("att_month");

    rca()
        .args([
            "--db",
            &db_path,
            "--today",
            "2025-03-03",
            "attendance",
            "--month",
            "2025-03",
        ])
        .assert()
        .success()
        .stdout(contains("March 2025"))
        .stdout(contains("L late=1"))
        .stdout(contains("future=28"));
}

#[test]
fn test_attendance_previous_month() {
    let db_path = init_db_with_data("att_prev");

    rca()
        .args([
            "--db",
            &db_path,
            "--today",
            "2025-03-03",
            "attendance",
            "--month",
            "2025-01",
            "--prev",
        ])
        .assert()
        .success()
        .stdout(contains("December 2024"))
        .stdout(contains("inapplicable=31"));
}

#[test]
fn test_attendance_rejects_bad_date() {
    let db_path = init_db_with_data("att_bad_date");

    rca()
        .args(["--db", &db_path, "attendance", "--date", "03/03/2025"])
        .assert()
        .failure();
}

#[test]
fn test_routine_period_time() {
    let db_path = init_db_with_data("routine_period");

    rca()
        .args(["--db", &db_path, "routine", "--period", "1"])
        .assert()
        .success()
        .stdout(contains("Period 1: 09:00-09:45"));

    rca()
        .args(["--db", &db_path, "routine", "--period", "5"])
        .assert()
        .success()
        .stdout(contains("Period 5: -"));

    rca()
        .args(["--db", &db_path, "routine", "--period", "0"])
        .assert()
        .failure();
}

#[test]
fn test_routine_day_and_period() {
    let db_path = init_db_with_data("routine_day_period");

    rca()
        .args(["--db", &db_path, "routine", "--day", "sunday", "--period", "2"])
        .assert()
        .success()
        .stdout(contains("Sunday period 2: English | Rahim | 09:50-10:35"));

    rca()
        .args(["--db", &db_path, "routine", "--day", "Tuesday", "--period", "1"])
        .assert()
        .success()
        .stdout(contains("Tuesday period 1: No class"));
}

#[test]
fn test_routine_grid_uses_student_class() {
    let db_path = init_db_with_data("routine_grid");

    rca()
        .args(["--db", &db_path, "routine"])
        .assert()
        .success()
        .stdout(contains("Class Six - A"))
        .stdout(contains("Off days: Friday,Saturday"))
        .stdout(contains("Math (Karim Uddin)"))
        .stdout(contains("History").not());
}

#[test]
fn test_today_lists_classes_by_period() {
    let db_path = init_db_with_data("today_order");

    let out = rca()
        .args(["--db", &db_path, "today", "--day", "Sunday"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let math = stdout.find("Math").expect("Math listed");
    let english = stdout.find("English").expect("English listed");
    assert!(math < english);
    assert!(stdout.contains("Period 1"));
    assert!(stdout.contains("Karim Uddin"));
}

#[test]
fn test_today_uses_today_override() {
    let db_path = init_db_with_data("today_override");

    // 2025-03-03 is a Monday
    rca()
        .args(["--db", &db_path, "--today", "2025-03-03", "today"])
        .assert()
        .success()
        .stdout(contains("Classes on Monday"))
        .stdout(contains("Science"));
}

#[test]
fn test_today_off_day_and_empty_day() {
    let db_path = init_db_with_data("today_off_empty");

    rca()
        .args(["--db", &db_path, "today", "--day", "Friday"])
        .assert()
        .success()
        .stdout(contains("No classes today (Off Day)"));

    rca()
        .args(["--db", &db_path, "today", "--day", "Tuesday"])
        .assert()
        .success()
        .stdout(contains("No classes scheduled for today"));
}

#[test]
fn test_today_without_routine() {
    let db_path = setup_test_db("today_no_routine");

    rca()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rca()
        .args(["--db", &db_path, "today", "--day", "Sunday"])
        .assert()
        .success()
        .stdout(contains("No routine available"));
}

#[test]
fn test_export_attendance_csv() {
    let db_path = init_db_with_data("export_att_csv");
    let out = temp_out("export_att_csv", "csv");

    rca()
        .args([
            "--db",
            &db_path,
            "--today",
            "2025-03-03",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--month",
            "2025-03",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,weekday,status,in_time,out_time");
    assert_eq!(lines.len(), 32);
    assert!(content.contains("2025-03-01,Saturday,off,08:55,13:30"));
    assert!(content.contains("2025-03-03,Monday,late,09:20,13:30"));
    assert!(content.contains("2025-03-10,Monday,future,,"));
}

#[test]
fn test_export_routine_json() {
    let db_path = init_db_with_data("export_rt_json");
    let out = temp_out("export_rt_json", "json");

    rca()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--routine",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["day"], "Sunday");
    assert_eq!(rows[0]["period"], 1);
    assert_eq!(rows[0]["subject"], "Math");
    assert_eq!(rows[1]["subject"], "English");
    assert_eq!(rows[2]["day"], "Monday");
}

#[test]
fn test_session_token_is_masked_and_cleared() {
    let db_path = init_db_with_data("session_token");

    rca()
        .args(["--db", &db_path, "session", "--token", "abcd1234"])
        .assert()
        .success()
        .stdout(contains("Auth token stored."));

    rca()
        .args(["--db", &db_path, "session", "--show"])
        .assert()
        .success()
        .stdout(contains("abcd****"))
        .stdout(contains("abcd1234").not());

    rca()
        .args(["--db", &db_path, "session", "--clear"])
        .assert()
        .success()
        .stdout(contains("Session cleared."));

    rca()
        .args(["--db", &db_path, "session", "--show"])
        .assert()
        .success()
        .stdout(contains("No auth token stored."));
}

#[test]
fn test_log_records_imports() {
    let db_path = init_db_with_data("log_imports");

    rca()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("(attendance)"))
        .stdout(contains("(profile)"))
        .stdout(contains("Schema: 5 migration(s) applied, latest 20250520_0005_directory"));
}

#[test]
fn test_import_missing_file_leaves_snapshot_untouched() {
    let db_path = init_db_with_data("import_missing");
    let routines = write_payload("import_missing_rt", r#"{"success": true, "data": []}"#);

    rca()
        .args([
            "--db",
            &db_path,
            "import",
            "--routines",
            &routines,
            "--attendance",
            "/definitely/not/here.json",
        ])
        .assert()
        .failure()
        .stderr(contains("Input file not found"));

    // the routines payload was not applied either
    rca()
        .args(["--db", &db_path, "routine"])
        .assert()
        .success()
        .stdout(contains("Class Six - A"));
}

#[test]
fn test_import_directory_counts() {
    let db_path = init_db_with_data("import_directory");
    let subjects = write_payload("import_directory_sub", common::SUBJECTS_JSON);
    let assigns = write_payload("import_directory_asg", common::SUBJECT_ASSIGNS_JSON);
    let staff = write_payload("import_directory_staff", common::STAFF_JSON);
    let fees = write_payload("import_directory_fees", common::FEES_JSON);

    rca()
        .args([
            "--db",
            &db_path,
            "import",
            "--subjects",
            &subjects,
            "--subject-assigns",
            &assigns,
            "--teachers",
            &staff,
            "--fees",
            &fees,
        ])
        .assert()
        .success()
        .stdout(contains("Imported 4 subject(s)."))
        .stdout(contains("Imported 5 subject assignment(s)."))
        .stdout(contains("Imported 3 staff member(s), 2 teacher(s)."))
        .stdout(contains("Imported fee summary."));
}

#[test]
fn test_subjects_of_student_class_in_order() {
    let db_path = init_db_with_directory("subjects_order");

    let out = rca()
        .args(["--db", &db_path, "subjects"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let english = stdout.find("English").expect("English listed");
    let math = stdout.find("Mathematics").expect("Mathematics listed");
    let science = stdout.find("Science").expect("Science listed");
    assert!(english < math && math < science);
    assert!(stdout.contains("MTH-101"));
    assert!(!stdout.contains("Drawing"));
    assert_eq!(stdout.matches("English").count(), 1);
}

#[test]
fn test_subjects_without_class() {
    let db_path = setup_test_db("subjects_no_class");

    rca()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rca()
        .args(["--db", &db_path, "subjects"])
        .assert()
        .success()
        .stdout(contains("No class assigned to this student"));
}

#[test]
fn test_teachers_directory_and_search() {
    let db_path = init_db_with_directory("teachers_search");

    rca()
        .args(["--db", &db_path, "teachers"])
        .assert()
        .success()
        .stdout(contains("Karim Uddin"))
        .stdout(contains("Head Teacher"))
        .stdout(contains("Salma Akter"))
        .stdout(contains("Jamal").not());

    rca()
        .args(["--db", &db_path, "teachers", "--search", "SALMA"])
        .assert()
        .success()
        .stdout(contains("Salma Akter"))
        .stdout(contains("Teacher"))
        .stdout(contains("Karim").not());

    rca()
        .args(["--db", &db_path, "teachers", "--search", "accountant"])
        .assert()
        .success()
        .stdout(contains("No teachers found"));
}

#[test]
fn test_fees_show_totals_and_reminder() {
    let db_path = init_db_with_directory("fees_due");

    rca()
        .args(["--db", &db_path, "fees"])
        .assert()
        .success()
        .stdout(contains("Total fees: ৳15,000"))
        .stdout(contains("৳12,500"))
        .stdout(contains("৳2,500"))
        .stdout(contains("Please clear your dues"));

    let cleared = write_payload(
        "fees_cleared",
        r#"{"success": true, "data": {"total_amount": 15000, "total_paid": 15000, "total_due": 0}}"#,
    );
    rca()
        .args(["--db", &db_path, "import", "--fees", &cleared])
        .assert()
        .success();

    rca()
        .args(["--db", &db_path, "fees"])
        .assert()
        .success()
        .stdout(contains("Due:        ৳0"))
        .stdout(contains("Please clear your dues").not());
}

#[test]
fn test_export_format_follows_extension() {
    let db_path = init_db_with_data("export_ext");
    let out = temp_out("export_ext", "json");

    rca()
        .args(["--db", &db_path, "export", "--file", &out, "--routine"])
        .assert()
        .success()
        .stdout(contains("JSON export completed: 3 row(s) written to"));

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(rows.as_array().map(|r| r.len()), Some(3));
}

#[test]
fn test_export_creates_parent_directories() {
    let db_path = init_db_with_data("export_nested");
    let dir = std::env::temp_dir().join("rcampus_export_nested_dir");
    fs::remove_dir_all(&dir).ok();
    let out = dir.join("sub").join("march.csv");
    let out = out.to_string_lossy().to_string();

    rca()
        .args([
            "--db",
            &db_path,
            "--today",
            "2025-03-03",
            "export",
            "--file",
            &out,
            "--month",
            "2025-03",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 31 row(s)"));

    assert!(fs::read_to_string(&out).unwrap().starts_with("date,weekday,status"));
}

#[test]
fn test_export_refuses_directory_and_unconfirmed_overwrite() {
    let db_path = init_db_with_data("export_refuse");
    let tmp_dir = std::env::temp_dir().to_string_lossy().to_string();

    rca()
        .args(["--db", &db_path, "export", "--file", &tmp_dir, "--routine"])
        .assert()
        .failure()
        .stderr(contains("is a directory"));

    let out = temp_out("export_refuse", "csv");
    fs::write(&out, "keep me").unwrap();

    rca()
        .args(["--db", &db_path, "export", "--file", &out, "--routine"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rca()
        .args(["--db", &db_path, "export", "--file", &out, "--routine"])
        .write_stdin("YES\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("day,period"));
}

