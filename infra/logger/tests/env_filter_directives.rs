use mdc_logger::{LevelFilter, Logger};
use std::fs;
use tempfile::tempdir;

#[test]
fn directives_select_targets() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;

    let logger = Logger::builder()
        .name("mdc-filter")
        .console(false)
        .level(LevelFilter::TRACE)
        .env_filter("warn,mdc_lookup=debug")
        .path(tmp_dir.path())
        .init()?;

    tracing::debug!(target: "mdc_lookup", "resolving reference list");
    tracing::debug!(target: "reqwest", "connection pooled");
    tracing::warn!(target: "reqwest", "content API slow");

    drop(logger);

    let mut contents = String::new();
    for entry in fs::read_dir(tmp_dir.path())?.flatten() {
        contents.push_str(&fs::read_to_string(entry.path())?);
    }

    assert!(contents.contains("resolving reference list"));
    assert!(contents.contains("content API slow"));
    assert!(!contents.contains("connection pooled"));

    Ok(())
}
