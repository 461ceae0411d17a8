use regkit::app::convert::ConvertApp;
use regkit::utils::validation::Validate;
use regkit::{AppEngine, FormatRegistry, JobConfig, Registry};

#[test]
fn job_config_drives_a_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("service.xml");
    let output = dir.path().join("service.ini");

    let mut registry = Registry::new();
    registry.set("name", "service");
    registry.set("db.host", "localhost");
    registry.set("db.port", 5432i64);
    registry
        .save_file(&input, &FormatRegistry::with_defaults())
        .unwrap();

    let job_toml = format!(
        r#"
[job]
name = "xml-to-ini"

[source]
path = "{}"

[target]
path = "{}"
"#,
        input.display(),
        output.display()
    );
    let job = JobConfig::from_toml_str(&job_toml).unwrap();
    job.validate().unwrap();

    let mut engine = AppEngine::new(ConvertApp::new(job));
    engine.run().unwrap();

    let reloaded = Registry::load_file(&output, &FormatRegistry::with_defaults()).unwrap();
    assert_eq!(reloaded.get_str("name"), Some("service"));
    assert_eq!(reloaded.get_str("db.host"), Some("localhost"));
    assert_eq!(reloaded.get_i64("db.port"), Some(5432));
}

#[test]
fn job_paths_can_come_from_the_environment() {
    std::env::set_var("REGKIT_JOB_SOURCE", "/tmp/in.xml");

    let job = JobConfig::from_toml_str(
        r#"
[job]
name = "env-test"

[source]
path = "${REGKIT_JOB_SOURCE}"

[target]
path = "/tmp/out.json"
"#,
    )
    .unwrap();

    assert_eq!(job.source.path, "/tmp/in.xml");

    std::env::remove_var("REGKIT_JOB_SOURCE");
}
