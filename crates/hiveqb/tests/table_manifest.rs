//! Loading table manifests from disk and applying them.

use hiveqb::{ClientError, HiveClient, HiveError, Row, TableDefinition, TableManifest};
use std::cell::RefCell;
use std::path::PathBuf;

#[derive(Default)]
struct LogClient {
    log: RefCell<Vec<String>>,
}

impl HiveClient for LogClient {
    fn execute(&self, sql: &str) -> Result<(), ClientError> {
        self.log.borrow_mut().push(sql.to_string());
        Ok(())
    }

    fn fetch(&self) -> Result<Vec<Row>, ClientError> {
        Ok(Vec::new())
    }
}

/// Writes `contents` to a unique file under the temp dir.
struct TempManifest(PathBuf);

impl TempManifest {
    fn new(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("hiveqb-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for TempManifest {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn test_load_and_create_all() {
    let file = TempManifest::new(
        r#"
task_id = "nightly"

[[table]]
kind = "external"
name = "raw_logs"
location = "/data/raw_logs"
field_separator = "\u0001"
columns = [{ name = "line", type = "string" }]

[[table]]
kind = "kv_store"
name = "users"
kv_table = "users"
key_columns = [{ name = "id", type = "string" }]
columns = [
    { name = "name", type = "string", mapping = "d:name" },
    { name = "email", type = "string", mapping = "d:email" },
]
"#,
    );

    let manifest = TableManifest::load(&file.0).unwrap();
    let client = LogClient::default();
    let created = manifest.create_all(&client).unwrap();
    assert_eq!(created, vec!["raw_logs_nightly", "users_nightly"]);

    let log = client.log.borrow();
    assert!(log[0].contains("FIELDS TERMINATED BY '\u{1}'"));
    assert!(log[1].contains("key struct<id:string>, name string,email string"));
    assert!(log[1].contains("':key, d:name,d:email'"));
}

#[test]
fn test_manifest_round_trips_through_toml() {
    let manifest = TableManifest {
        task_id: None,
        tables: vec![TableDefinition::External(
            hiveqb::ExternalTable::new("t", "/p").column("a", "int"),
        )],
    };
    let raw = toml::to_string(&manifest).unwrap();
    assert!(raw.contains("kind = \"external\""));
    assert_eq!(TableManifest::from_toml_str(&raw).unwrap(), manifest);
}

#[test]
fn test_missing_required_field() {
    let file = TempManifest::new("[[table]]\nkind = \"external\"\nname = \"t\"\n");
    let err = TableManifest::load(&file.0).unwrap_err();
    assert!(matches!(err, HiveError::Config(_)));
    assert!(err.to_string().contains("location"));
}
