use letterdraw::api::load_catalog;
use letterdraw::error::PickerError;
use letterdraw::session::Session;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_loader_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,wiki_url,Mineral").unwrap();
    writeln!(file, "Quartz,https://wiki/Quartz,yes").unwrap();
    writeln!(file, "\"Fried Egg, Large\",https://wiki/Fried_Egg,no").unwrap();
    writeln!(file, "Garbage").unwrap();
    writeln!(file).unwrap();

    let cat = load_catalog(file.path()).unwrap();
    assert_eq!(cat.len(), 2);
    assert_eq!(cat.dropped(), 1);
    assert_eq!(cat.records()[1].get("name"), Some("Fried Egg, Large"));
}

#[test]
fn test_loader_handles_bom_prefixed_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\xef\xbb\xbfname,Mineral\r\nApple,no\r\n").unwrap();

    let cat = load_catalog(file.path()).unwrap();
    assert_eq!(cat.headers()[0], "name");
    assert_eq!(cat.records()[0].get("name"), Some("Apple"));
}

#[test]
fn test_loader_missing_file() {
    let err = load_catalog("/no/such/items.csv").unwrap_err();
    assert!(matches!(err, PickerError::Load { .. }));
    assert!(err.to_string().contains("/no/such/items.csv"));
}

#[test]
fn test_loader_rejects_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"name\n\xff\xfe\n").unwrap();
    assert!(load_catalog(file.path()).is_err());
}

#[test]
fn test_session_from_loader() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name").unwrap();
    writeln!(file, "Leek").unwrap();

    let mut session = Session::new();
    session.finish_load(load_catalog(file.path()));
    assert_eq!(session.records().len(), 1);
    assert!(session.load_error().is_none());
}
