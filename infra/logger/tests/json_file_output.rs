use mdc_logger::{LevelFilter, Logger, LoggerError, Rotation};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn log_lines(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let file = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .ok_or("no log file written")?;
    Ok(fs::read_to_string(file)?.lines().map(str::to_owned).collect())
}

#[test]
fn lookup_events_are_written_as_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("mdc-json")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .max_files(2)
        .json()
        .init()?;
    assert!(logger.guard().is_some());

    tracing::info!(lookup_type = "dimension", name = "2.184", entities = 3, "Lookup completed");

    let err = Logger::builder().name("mdc-json-second").init().unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    drop(logger);

    let lines = log_lines(&log_dir)?;
    let event = lines
        .iter()
        .map(|line| serde_json::from_str::<serde_json::Value>(line))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .find(|event| event["fields"]["message"] == "Lookup completed")
        .ok_or("lookup event missing")?;

    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["lookup_type"], "dimension");
    assert_eq!(event["fields"]["name"], "2.184");
    assert_eq!(event["fields"]["entities"], 3);

    Ok(())
}
