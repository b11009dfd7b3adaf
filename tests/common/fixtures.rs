// tests/common/fixtures.rs
use chrono::{Local, TimeZone};
use filedesc::{CreatedAt, ExtensionTable, FileDescriptor};

/// Classifier used across scenarios.
#[allow(dead_code)]
pub fn table() -> ExtensionTable {
    ExtensionTable::builtin()
}

/// A fixed creation time so descriptors compare deterministically.
#[allow(dead_code)]
pub fn fixed_time() -> CreatedAt {
    let stamp = Local
        .with_ymd_and_hms(2024, 5, 17, 9, 30, 0)
        .earliest()
        .expect("valid local timestamp");
    CreatedAt::new(stamp)
}

/// Scenario A: `C:\Users\Maestro\` + `Maestro.txt`.
#[allow(dead_code)]
pub fn maestro() -> FileDescriptor {
    FileDescriptor::new_at("C:\\Users\\Maestro\\", "Maestro.txt", &table(), fixed_time())
        .expect("valid name")
}

/// Checks the relations every descriptor must satisfy.
#[allow(dead_code)]
pub fn assert_consistent(desc: &FileDescriptor) {
    use filedesc::TypeClassifier;

    assert!(!desc.directory().contains('\\'), "backslash in {:?}", desc.directory());
    assert!(!desc.directory().ends_with('/'), "trailing slash in {:?}", desc.directory());
    assert_eq!(desc.full_name().as_str(), format!("{}.{}", desc.base_name(), desc.extension()));
    assert_eq!(desc.path(), format!("{}/{}", desc.directory(), desc.full_name()));
    assert_eq!(desc.file_type(), &table().classify(desc.extension().as_str()));
}
