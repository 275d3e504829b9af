#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rca() -> Command {
    cargo_bin_cmd!("rcampus")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcampus.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a payload file into tempdir and return its path
pub fn write_payload(name: &str, body: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcampus_payload.json", name));
    fs::write(&path, body).expect("write payload");
    path.to_string_lossy().to_string()
}

/// Paginated attendance response for one student.
pub const ATTENDANCE_JSON: &str = r#"{
  "success": true,
  "message": "ok",
  "data": {
    "current_page": 1,
    "data": [
      { "id": 1, "date": "2025-03-01", "status": "Present", "in_time": "08:55", "out_time": "13:30" },
      { "id": 2, "date": "2025-03-02", "status": "Absent", "in_time": null, "out_time": null },
      { "id": 3, "date": "2025-03-03", "status": "Late", "in_time": "09:20:00", "out_time": "13:30:00" }
    ]
  }
}"#;

/// Two routines; the student's one is class 3 / section 5, off on Friday and Saturday.
pub const ROUTINES_JSON: &str = r#"{
  "success": true,
  "data": {
    "data": [
      {
        "id": 8, "class_id": 4, "section_id": 6, "number_of_periods": 4, "off_day": "Friday",
        "class": { "id": 4, "class_name": "Class Seven" },
        "section": { "id": 6, "section_name": "B" },
        "details": [
          { "day_name": "Sunday", "period_number": 1, "time": "08:00-08:45",
            "subject": { "subject_name": "History" } }
        ]
      },
      {
        "id": 7, "class_id": 3, "section_id": 5, "number_of_periods": 6, "off_day": "Friday, Saturday",
        "class": { "id": 3, "class_name": "Class Six" },
        "section": { "id": 5, "section_name": "A" },
        "details": [
          { "day_name": "Sunday", "period_number": "2", "time": "09:50-10:35",
            "subject": { "subject_name": "English" },
            "teacher": { "first_name": "Rahim", "last_name": null } },
          { "day_name": "Sunday", "period_number": 1, "time": "09:00-09:45",
            "subject": { "subject_name": "Math" },
            "teacher": { "first_name": "Karim", "last_name": "Uddin" } },
          { "day_name": "Monday", "period_number": "1", "time": "09:00-09:45",
            "subject": { "subject_name": "Science" } }
        ]
      }
    ]
  }
}"#;

pub const PROFILE_JSON: &str = r#"{
  "success": true,
  "data": {
    "id": 42,
    "first_name": "Nadia",
    "last_name": "Islam",
    "created_at": "2025-01-10T08:30:00.000000Z",
    "class_wise_data": [
      { "id": 99, "class": { "id": 3, "class_name": "Class Six" }, "section": { "id": 5, "section_name": "A" } }
    ]
  }
}"#;

/// Subject catalog; "Drawing" is never assigned to class 3 / section 5.
pub const SUBJECTS_JSON: &str = r#"{
  "success": true,
  "data": [
    { "id": 1, "subject_name": "Mathematics", "subject_code": "MTH-101", "order_number": 2, "status": "active" },
    { "id": 2, "subject_name": "English", "subject_code": "ENG-101", "order_number": 1, "status": "active" },
    { "id": 3, "subject_name": "Science", "subject_code": null, "order_number": "3" },
    { "id": 4, "subject_name": "Drawing", "subject_code": "DRW", "order_number": 4 }
  ]
}"#;

pub const SUBJECT_ASSIGNS_JSON: &str = r#"{
  "success": true,
  "data": {
    "current_page": 1,
    "data": [
      { "id": 20, "class_id": 3, "section_id": 5,
        "details": [ { "subject_id": 1, "subject": { "id": 1 } }, { "subject_id": 2 }, { "subject": { "id": 3 } } ] },
      { "id": 21, "class_id": 3, "section_id": 5,
        "details": [ { "subject_id": 2 } ] },
      { "id": 22, "class_id": 4, "section_id": 6,
        "details": [ { "subject_id": 4 } ] }
    ]
  }
}"#;

pub const STAFF_JSON: &str = r#"{
  "success": true,
  "data": [
    { "id": 1, "first_name": "Karim", "last_name": "Uddin", "designation": 2, "is_teachers": 1,
      "phone": "01711000000", "email": "karim@school.edu" },
    { "id": 2, "first_name": "Salma", "last_name": "Akter", "designation": 7, "is_teachers": 1,
      "phone": "01812000000", "email": null },
    { "id": 3, "first_name": "Jamal", "last_name": "Hossain", "designation": 3, "is_teachers": 0,
      "phone": "01913000000" }
  ]
}"#;

pub const DESIGNATIONS_JSON: &str = r#"{
  "success": true,
  "data": [
    { "id": 2, "name": "Head Teacher" },
    { "id": 3, "name": "Accountant" }
  ]
}"#;

pub const FEES_JSON: &str = r#"{
  "success": true,
  "data": { "total_amount": "15000.00", "total_paid": 12500, "total_due": "2500.00" }
}"#;

/// Initialize DB and import profile, routines and attendance
pub fn init_db_with_data(name: &str) -> String {
    let db_path = setup_test_db(name);

    rca()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let profile = write_payload(&format!("{name}_profile"), PROFILE_JSON);
    let routines = write_payload(&format!("{name}_routines"), ROUTINES_JSON);
    let attendance = write_payload(&format!("{name}_attendance"), ATTENDANCE_JSON);

    rca()
        .args([
            "--db",
            &db_path,
            "import",
            "--profile",
            &profile,
            "--routines",
            &routines,
            "--attendance",
            &attendance,
        ])
        .assert()
        .success();

    db_path
}

/// Same as `init_db_with_data`, plus subjects, staff, designations and fees
pub fn init_db_with_directory(name: &str) -> String {
    let db_path = init_db_with_data(name);

    let subjects = write_payload(&format!("{name}_subjects"), SUBJECTS_JSON);
    let assigns = write_payload(&format!("{name}_assigns"), SUBJECT_ASSIGNS_JSON);
    let staff = write_payload(&format!("{name}_staff"), STAFF_JSON);
    let designations = write_payload(&format!("{name}_designations"), DESIGNATIONS_JSON);
    let fees = write_payload(&format!("{name}_fees"), FEES_JSON);

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
            "--designations",
            &designations,
            "--fees",
            &fees,
        ])
        .assert()
        .success();

    db_path
}

