// tests/integration/custom_classifier.rs
use filedesc::{ClassifierConfig, ExtensionTable, FileDescriptor, FileType};

#[test]
fn closure_classifier_is_consulted_on_every_extension_change() {
    let shout = |ext: &str| FileType::new(format!("{} file", ext.to_uppercase()));
    let mut desc = FileDescriptor::new("/work", "main.rs", &shout).expect("valid name");
    assert_eq!(desc.file_type().as_str(), "RS file");

    desc.rename(("main", "go"), &shout).expect("valid name");
    assert_eq!(desc.file_type().as_str(), "GO file");

    desc.move_to("/other");
    assert_eq!(desc.file_type().as_str(), "GO file");
}

#[test]
fn configured_table_overrides_labels() {
    let config = ClassifierConfig::from_json_str(r#"{ "fallback": "Other", "mappings": { "txt": "Plain Text" } }"#)
        .expect("valid config");
    let table = ExtensionTable::from_config(&config).expect("valid table");

    let desc = FileDescriptor::new("/tmp", "README", &table).expect("valid name");
    assert_eq!(desc.file_type().as_str(), "Plain Text");

    let other = FileDescriptor::new("/tmp", "blob.xyz", &table).expect("valid name");
    assert_eq!(other.file_type().as_str(), "Other");
}
