// tests/integration/scenarios.rs
use filedesc::{DomainError, FileDescriptor, NameInput, TypeClassifier};

use crate::common::{assert_consistent, fixed_time, maestro, table};

#[test]
fn scenario_a_windows_directory_is_normalized() {
    let desc = maestro();
    assert_eq!(desc.directory().as_str(), "C:/Users/Maestro");
    assert_eq!(desc.path(), "C:/Users/Maestro/Maestro.txt");
    assert_eq!(desc.file_type(), &table().classify("txt"));
    assert_eq!(desc.created_at(), fixed_time());
    assert_consistent(&desc);
}

#[test]
fn scenario_b_name_without_dot_gets_txt() {
    let desc = FileDescriptor::new("/tmp", "README", &table()).expect("valid name");
    assert_eq!(desc.full_name().as_str(), "README.txt");
    assert_eq!(desc.extension().as_str(), "txt");
    assert_eq!(desc.base_name(), "README");
    assert_consistent(&desc);
}

#[test]
fn scenario_c_parts_keep_multi_dot_extension() {
    let desc = FileDescriptor::new("/tmp", NameInput::parts("archive", "tar.gz"), &table())
        .expect("valid name");
    assert_eq!(desc.full_name().as_str(), "archive.tar.gz");
    assert_eq!(desc.extension().as_str(), "tar.gz");
    assert_eq!(desc.path(), "/tmp/archive.tar.gz");
    assert_consistent(&desc);
}

#[test]
fn scenario_d_rename_changes_name_only() {
    let mut desc = maestro();
    desc.rename("Notes.md", &table()).expect("valid name");
    assert_eq!(desc.extension().as_str(), "md");
    assert_eq!(desc.path(), "C:/Users/Maestro/Notes.md");
    assert_eq!(desc.directory().as_str(), "C:/Users/Maestro");
    assert_eq!(desc.file_type().as_str(), "Markdown Document");
    assert_eq!(desc.created_at(), fixed_time());
    assert_consistent(&desc);
}

#[test]
fn scenario_e_move_changes_directory_only() {
    let mut desc = maestro();
    desc.move_to("D:\\Archive\\");
    assert_eq!(desc.directory().as_str(), "D:/Archive");
    assert_eq!(desc.full_name().as_str(), "Maestro.txt");
    assert_eq!(desc.path(), "D:/Archive/Maestro.txt");
    assert_eq!(desc.created_at(), fixed_time());
    assert_consistent(&desc);
}

#[test]
fn hidden_file_name_is_all_extension() {
    let desc = FileDescriptor::new("/home/me", ".gitignore", &table()).expect("valid name");
    assert_eq!(desc.base_name(), "");
    assert_eq!(desc.extension().as_str(), "gitignore");
    assert_eq!(desc.path(), "/home/me/.gitignore");
    assert_consistent(&desc);
}

#[test]
fn trailing_dot_keeps_empty_extension() {
    let desc = FileDescriptor::new("/home/me", "draft.", &table()).expect("valid name");
    assert_eq!(desc.base_name(), "draft");
    assert!(desc.extension().is_empty());
    assert_eq!(desc.file_type().as_str(), "File");
    assert_consistent(&desc);
}

#[test]
fn empty_name_is_rejected_on_create_and_rename() {
    let err = FileDescriptor::new("/tmp", "", &table()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidName { .. }));

    let mut desc = maestro();
    assert!(desc.rename(String::new(), &table()).is_err());
    assert_eq!(desc, maestro());
}

#[test]
fn serialized_descriptor_uses_snake_case_fields() {
    let json = serde_json::to_value(maestro()).expect("serializes");
    assert_eq!(json["directory"], "C:/Users/Maestro");
    assert_eq!(json["full_name"], "Maestro.txt");
    assert_eq!(json["file_type"], "Text Document");
    assert_eq!(json["path"], "C:/Users/Maestro/Maestro.txt");
}
