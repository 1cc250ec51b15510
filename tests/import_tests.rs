use std::collections::HashSet;

use contacts::error::ContactsError;
use contacts::export;
use contacts::import::{self, RejectedLine, HEADER};
use contacts::model::*;
use contacts::ops::contact_ops;
use contacts::store::ContactList;

const TIM: &str = "Tim,Py,123-456-7890,t@e.co,Corp,Dev,FRIEND";

// ==========================================================================
// PIPELINE TESTS
// ==========================================================================

#[test]
fn duplicate_short_lines_yield_one_contact_with_minted_id() {
    let report = import::import_lines([TIM, TIM], &mut RandomIds::seeded(11), 10_000).unwrap();
    assert_eq!(report.contacts.len(), 1);
    assert_eq!(report.duplicates_dropped, 1);

    let c = &report.contacts[0];
    let n: u32 = c.id.as_str().parse().unwrap();
    assert!((1..=1000).contains(&n));
    assert_eq!(c.first_name, "Tim");
    assert_eq!(c.relationship, "FRIEND");
}

#[test]
fn wrong_field_count_is_dropped_and_rest_imported() {
    let lines = [
        "Ann,Lee,,,,FAMILY",
        TIM,
        "1,2,3,4,5,6,7,8,9",
        "",
        "5,Sal,Java,987-654-3210,s@e.co,Corp,Lead,colleague",
    ];
    let report = import::import_lines(lines, &mut SequentialIds::default(), 100).unwrap();
    assert_eq!(report.lines_read, 5);
    assert_eq!(
        report.rejected,
        vec![
            RejectedLine { line_number: 1, field_count: 6 },
            RejectedLine { line_number: 3, field_count: 9 },
            RejectedLine { line_number: 4, field_count: 0 },
        ]
    );
    let names: Vec<&str> = report.contacts.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Tim", "Sal"]);
}

#[test]
fn full_id_space_drops_only_the_row_without_an_id() {
    let mut lines: Vec<String> = (1..=1000).map(|n| format!("{n},P{n},X,,,,,FRIEND")).collect();
    lines.push(TIM.to_string());

    let report = import::import_lines(&lines, &mut RandomIds::seeded(9), 10_000).unwrap();
    assert_eq!(report.contacts.len(), 1000);
    assert_eq!(report.unassigned, vec![1001]);
    assert!(report.rejected.is_empty());
    assert!(report.contacts.iter().all(|c| c.first_name != "Tim"));
}

#[test]
fn padded_explicit_ids_are_reserved() {
    let lines = ["07,Ann,Lee,,,,,FAMILY", " 1,Bo,Ray,,,,,friend", TIM];
    let mut source = SequentialIds::default();
    let report = import::import_lines(lines, &mut source, 100).unwrap();
    let ids: Vec<&str> = report.contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "1", "2"]);
}

#[test]
fn header_line_is_skipped() {
    let report = import::import_lines([HEADER, TIM], &mut SequentialIds::default(), 100).unwrap();
    assert_eq!(report.contacts.len(), 1);
    assert!(report.rejected.is_empty());
}

#[test]
fn explicit_ids_are_kept_and_never_reused() {
    let lines = [TIM, "1,Ann,Lee,,,,,FAMILY", "2,Bo,Ray,,,,,friend", "Cy,Dee,,,,,SUPERVISOR"];
    let report = import::import_lines(lines, &mut SequentialIds::default(), 100).unwrap();
    let ids: HashSet<&str> = report.contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), 4);
    assert!(ids.contains("1") && ids.contains("2"));

    let ann = report.contacts.iter().find(|c| c.first_name == "Ann").unwrap();
    assert_eq!(ann.id, ContactId::from(1));
    let tim = report.contacts.iter().find(|c| c.first_name == "Tim").unwrap();
    assert_eq!(tim.id, ContactId::from(3));
    let cy = report.contacts.iter().find(|c| c.first_name == "Cy").unwrap();
    assert_eq!(cy.id, ContactId::from(4));
}

#[test]
fn line_dedup_compares_ids_but_semantic_check_does_not() {
    let lines = ["7,Ann,Lee,,,,,FAMILY", "8,Ann,Lee,,,,,FAMILY", "7,Ann,Lee,,,,,FAMILY"];
    let report = import::import_lines(lines, &mut SequentialIds::default(), 100).unwrap();
    assert_eq!(report.contacts.len(), 2);
    assert_eq!(report.duplicates_dropped, 1);
    assert!(report.contacts[0].is_semantic_duplicate(&report.contacts[1]));
}

#[test]
fn pipeline_does_not_validate_fields() {
    let report = import::import_lines(
        [",,not-a-phone,nomail,,,STRANGER"],
        &mut SequentialIds::default(),
        100,
    )
    .unwrap();
    assert_eq!(report.contacts.len(), 1);
    assert!(!report.contacts[0].validate().is_valid());
}

#[test]
fn whitespace_values_become_empty() {
    let report = import::import_lines([" ,Ann, ,,,,,FAMILY"], &mut SequentialIds::default(), 100)
        .unwrap();
    let c = &report.contacts[0];
    assert_eq!(c.id.as_str(), "0");
    assert_eq!(c.last_name, "");
}

// ==========================================================================
// FILE TESTS
// ==========================================================================

#[test]
fn import_file_rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(&path, TIM).unwrap();
    let err = import::import_file(&path, &mut SequentialIds::default(), 100).unwrap_err();
    assert!(matches!(err, ContactsError::UnsupportedFile { .. }));
}

#[test]
fn import_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = import::import_file(&dir.path().join("nope.csv"), &mut SequentialIds::default(), 100)
        .unwrap_err();
    assert!(matches!(err, ContactsError::Io(_)));
}

#[test]
fn export_then_import_restores_the_book() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = ContactList::new();
    let mut ids = RandomIds::seeded(5);
    contact_ops::add_contact(&mut list, &["Tim", "Py", "123-456-7890", "t@e.co", "Corp", "Dev", "FRIEND"], &mut ids, 100).unwrap();
    contact_ops::add_contact(&mut list, &["Ann", "Lee", "", "", "Acme, Inc", "", "family"], &mut ids, 100).unwrap();

    let path = export::export_to_dir(dir.path(), "book_", list.as_slice()).unwrap();
    let report = import::import_file(&path, &mut ids, 100).unwrap();
    assert!(report.rejected.is_empty());
    assert_eq!(report.lines_read, 3);

    let mut restored = ContactList::new();
    let admission = contact_ops::admit_import(&mut restored, report.contacts, true);
    assert_eq!(admission.admitted, 2);
    for original in &list {
        assert_eq!(restored.find_by_id(&original.id), Some(original));
    }
}

#[test]
fn import_file_with_crlf_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.TXT");
    std::fs::write(&path, format!("{HEADER}\r\n{TIM}\r\n3,Ann,Lee,,,,,FAMILY\r\n")).unwrap();
    let report = import::import_file(&path, &mut SequentialIds::default(), 100).unwrap();
    assert_eq!(report.contacts.len(), 2);
    assert!(report.contacts.iter().all(|c| !c.relationship.ends_with('\r')));
}
