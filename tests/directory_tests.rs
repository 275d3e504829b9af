use rcampus::core::calculator::fees::{DUE_REMINDER, fee_status, format_amount};
use rcampus::core::calculator::subjects::assigned_subjects;
use rcampus::core::calculator::teachers::{
    DEFAULT_DESIGNATION, TeacherEntry, search_teachers, teacher_directory,
};
use rcampus::models::envelope::{parse_items, parse_single};
use rcampus::models::fee::{ApiFeeSummary, FeeSummary};
use rcampus::models::staff::{ApiDesignation, ApiStaff, Designation, StaffMember};
use rcampus::models::subject::{ApiCatalogSubject, ApiSubjectAssign, Subject, SubjectAssignment};

fn subject(id: i64, name: &str, order: i64) -> Subject {
    Subject {
        id,
        name: name.to_string(),
        code: None,
        order_number: order,
        active: true,
    }
}

fn assign(assign_id: i64, class_id: i64, section_id: i64, subject_id: i64) -> SubjectAssignment {
    SubjectAssignment {
        assign_id,
        class_id: Some(class_id),
        section_id: Some(section_id),
        subject_id,
    }
}

fn teacher(id: i64, first: &str, designation_id: Option<i64>) -> StaffMember {
    StaffMember {
        id,
        first_name: first.to_string(),
        designation_id,
        is_teacher: true,
        ..Default::default()
    }
}

// ---------------------------
// Subjects
// ---------------------------

#[test]
fn test_subjects_filtered_by_class_and_section() {
    let catalog = vec![
        subject(1, "Math", 2),
        subject(2, "English", 1),
        subject(3, "History", 3),
    ];
    let assignments = vec![
        assign(10, 3, 5, 1),
        assign(10, 3, 5, 2),
        assign(11, 3, 6, 3),
        assign(12, 4, 5, 3),
    ];

    let subjects = assigned_subjects(&catalog, &assignments, Some(3), Some(5));
    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["English", "Math"]);
    assert!(subjects.iter().all(|s| s.assign_id == 10));
}

#[test]
fn test_subjects_dedupe_and_skip_unknown_ids() {
    let catalog = vec![subject(1, "Math", 1), subject(2, "English", 2)];
    let assignments = vec![
        assign(10, 3, 5, 1),
        assign(10, 3, 5, 99),
        assign(11, 3, 5, 1),
        assign(11, 3, 5, 2),
    ];

    let subjects = assigned_subjects(&catalog, &assignments, Some(3), Some(5));
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].id, 1);
    // later assignment of the same subject wins
    assert_eq!(subjects[0].assign_id, 11);
    assert_eq!(subjects[1].name, "English");
}

#[test]
fn test_subjects_without_order_number_sort_last() {
    let raw = r#"{"success": true, "data": [
        {"id": 1, "subject_name": "Art", "subject_code": null, "order_number": null, "status": "inactive"},
        {"id": 2, "subject_name": "Bangla", "subject_code": 101, "order_number": "2"},
        {"id": 3, "subject_name": "Math", "subject_code": "MTH", "order_number": 1}
    ]}"#;
    let catalog: Vec<Subject> = parse_items::<ApiCatalogSubject>(raw)
        .unwrap()
        .into_iter()
        .map(Subject::from)
        .collect();
    assert_eq!(catalog[1].code.as_deref(), Some("101"));
    assert!(!catalog[0].active);

    let assignments: Vec<SubjectAssignment> = (1..=3).map(|id| assign(5, 3, 5, id)).collect();
    let subjects = assigned_subjects(&catalog, &assignments, Some(3), Some(5));
    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Math", "Bangla", "Art"]);
}

#[test]
fn test_assignment_details_prefer_nested_subject_id() {
    let raw = r#"{"success": true, "data": {"data": [{
        "id": 7, "class_id": 3, "section_id": 5,
        "details": [
            {"subject_id": 1, "subject": {"id": 4}},
            {"subject_id": 2, "subject": {"id": 0}},
            {"subject_id": 3},
            {"subject": null},
            {"subject_id": null, "subject": {"id": 6}}
        ]
    }, {
        "id": 8, "class_id": 3, "section_id": 5, "details": null
    }]}}"#;
    let assignments: Vec<SubjectAssignment> = parse_items::<ApiSubjectAssign>(raw)
        .unwrap()
        .into_iter()
        .flat_map(ApiSubjectAssign::into_assignments)
        .collect();

    let ids: Vec<i64> = assignments.iter().map(|a| a.subject_id).collect();
    assert_eq!(ids, vec![4, 2, 3, 6]);
    assert!(assignments.iter().all(|a| a.assign_id == 7));
}

// ---------------------------
// Teachers
// ---------------------------

#[test]
fn test_directory_keeps_teachers_only() {
    let raw = r#"[
        {"id": 1, "first_name": "Karim", "last_name": "Uddin", "designation": 2, "is_teachers": 1,
         "phone": "01711000000", "email": "karim@school.edu"},
        {"id": 2, "first_name": "Salma", "last_name": null, "designation": "9", "is_teachers": 1,
         "phone": 1812000000},
        {"id": 3, "first_name": "Jamal", "designation": 2, "is_teachers": 0},
        {"id": 4, "first_name": "Rina", "designation": 2, "is_teachers": "1"}
    ]"#;
    let staff: Vec<StaffMember> = parse_items::<ApiStaff>(raw)
        .unwrap()
        .into_iter()
        .map(StaffMember::from)
        .collect();
    let designations: Vec<Designation> =
        parse_items::<ApiDesignation>(r#"[{"id": 2, "name": "Senior Teacher"}]"#)
            .unwrap()
            .into_iter()
            .map(Designation::from)
            .collect();

    let dir = teacher_directory(&staff, &designations);
    assert_eq!(dir.len(), 2);
    assert_eq!(dir[0].name, "Karim Uddin");
    assert_eq!(dir[0].designation, "Senior Teacher");
    assert_eq!(dir[1].name, "Salma");
    assert_eq!(dir[1].designation, DEFAULT_DESIGNATION);
    assert_eq!(dir[1].phone.as_deref(), Some("1812000000"));
}

#[test]
fn test_designation_falls_back_to_teacher() {
    let staff = vec![teacher(1, "A", None), teacher(2, "B", Some(5))];
    let designations = vec![Designation {
        id: 5,
        name: String::new(),
    }];

    let dir = teacher_directory(&staff, &designations);
    assert!(dir.iter().all(|t| t.designation == "Teacher"));
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let entry = |name: &str, designation: &str, email: Option<&str>, phone: Option<&str>| {
        TeacherEntry {
            id: 0,
            name: name.to_string(),
            designation: designation.to_string(),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
            qualification: None,
            joining_date: None,
        }
    };
    let dir = vec![
        entry("Karim Uddin", "Head Teacher", Some("karim@school.edu"), None),
        entry("Salma Akter", "Teacher", None, Some("01812000000")),
        entry("Rahim Mia", "Assistant", Some("RAHIM@mail.com"), Some("01911")),
    ];

    let names = |q: &str| -> Vec<String> {
        search_teachers(&dir, q)
            .into_iter()
            .map(|t| t.name.clone())
            .collect()
    };

    assert_eq!(names("KARIM"), vec!["Karim Uddin"]);
    assert_eq!(names("teacher"), vec!["Karim Uddin", "Salma Akter"]);
    assert_eq!(names("rahim@"), vec!["Rahim Mia"]);
    assert_eq!(names("0181"), vec!["Salma Akter"]);
    assert_eq!(names("").len(), 3);
    assert!(names("nobody").is_empty());
}

// ---------------------------
// Fees
// ---------------------------

#[test]
fn test_fee_summary_amounts_parse_numbers_and_strings() {
    let raw = r#"{"success": true, "data": {"total_amount": "15000.00", "total_paid": 12500, "total_due": "2500.50"}}"#;
    let fees = FeeSummary::from(parse_single::<ApiFeeSummary>(raw).unwrap());
    assert_eq!(fees.total_amount, 15000.0);
    assert_eq!(fees.total_paid, 12500.0);
    assert_eq!(fees.total_due, 2500.5);

    let odd = FeeSummary::from(
        parse_single::<ApiFeeSummary>(r#"{"total_amount": null, "total_due": "n/a"}"#).unwrap(),
    );
    assert_eq!(odd, FeeSummary::default());
}

#[test]
fn test_reminder_only_when_something_is_due() {
    let due = FeeSummary {
        total_amount: 15000.0,
        total_paid: 12500.0,
        total_due: 2500.0,
    };
    let status = fee_status(Some(&due));
    assert!(status.has_due());
    assert_eq!(status.reminder(), Some(DUE_REMINDER));
    assert_eq!(DUE_REMINDER, "Please clear your dues");

    let cleared = FeeSummary {
        total_due: 0.0,
        ..due
    };
    assert_eq!(fee_status(Some(&cleared)).reminder(), None);

    let none = fee_status(None);
    assert_eq!(none.total_amount, 0.0);
    assert_eq!(none.reminder(), None);
}

#[test]
fn test_amount_formatting() {
    assert_eq!(format_amount(0.0), "৳0");
    assert_eq!(format_amount(950.0), "৳950");
    assert_eq!(format_amount(12500.0), "৳12,500");
    assert_eq!(format_amount(1234.5), "৳1,234.50");
    assert_eq!(format_amount(1_000_000.0), "৳1,000,000");
    assert_eq!(format_amount(-300.0), "-৳300");
}
