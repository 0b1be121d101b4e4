use kbext_core::{init_logging, logging_status, ExtensionHost, LifecycleEvent};
use std::path::Path;
use std::sync::Arc;

mod fixtures {
    use kbext_core::KnowledgeBaseExtension;

    pub struct Echo;

    impl KnowledgeBaseExtension for Echo {
        fn bean_name(&self) -> &str {
            "echo"
        }
    }

    pub struct WikidataLinker;

    impl KnowledgeBaseExtension for WikidataLinker {
        fn bean_name(&self) -> &str {
            "wikidata-linker"
        }

        fn order(&self) -> i32 {
            1
        }
    }
}

fn read_log_files(dir: &Path) -> String {
    let mut contents = String::new();
    for entry in std::fs::read_dir(dir).expect("read log dir").filter_map(Result::ok) {
        if entry.file_name().to_string_lossy().starts_with("kbext") {
            contents.push_str(&std::fs::read_to_string(entry.path()).expect("read log file"));
        }
    }
    contents
}

#[test]
fn init_logging_is_idempotent_and_records_each_registered_extension() {
    let log_dir = tempfile::tempdir().expect("temp log dir");
    let other_dir = tempfile::tempdir().expect("second temp dir");
    let log_dir_str = log_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();
    let other_dir_str = other_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();

    assert!(logging_status().is_none());
    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));
    let dir_error =
        init_logging("info", &other_dir_str).expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    let mut host = ExtensionHost::default();
    host.register(Arc::new(fixtures::Echo))
        .expect("echo registration");
    host.register(Arc::new(fixtures::WikidataLinker))
        .expect("linker registration");
    host.publish(LifecycleEvent::ContextRefreshed)
        .expect("refresh");
    log::logger().flush();

    let logs = read_log_files(log_dir.path());
    let found: Vec<&str> = logs
        .lines()
        .filter(|line| line.contains("event=kb_extension_found"))
        .collect();
    assert_eq!(found.len(), 2, "one record per extension, got: {found:?}");

    // Sorted order: the linker (order 1) precedes the unordered echo extension.
    assert!(found[0].contains("id=wikidata-linker "));
    assert!(found[0].contains("type=l::f::WikidataLinker "));
    assert!(found[1].contains("id=echo "));
    assert!(found[1].contains("type=l::fixtures::Echo "));
}
