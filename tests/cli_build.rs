use std::fs;

use clap::Parser;
use rfml::cli::{run, Cli};
use rfml::{Suite, TestRegistry, TestSettings};

fn broken(registry: &mut TestRegistry) {
    registry.register("broken", TestSettings::new().title("broken"), |t| {
        t.step("Do something.\nNo question here");
        Ok(())
    });
}

#[test]
fn build_writes_one_file_per_test() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let out = tmp.path().join("output");
    let config = tmp.path().join("missing.json");
    let cli = Cli::try_parse_from([
        "rfml",
        "build",
        "basic-test",
        "--out",
        out.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])?;

    assert!(run(&cli, &rfml::demo::suite())?);
    let files: Vec<String> = fs::read_dir(&out)?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    assert_eq!(files, vec!["basic-test.rfml"]);
    Ok(())
}

#[test]
fn build_uses_site_config_file() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let out = tmp.path().join("output");
    let config = tmp.path().join("rfconfig.json");
    fs::write(&config, r#"{ "sites": { "login": { "site_id": "314" } } }"#)?;
    let cli = Cli::try_parse_from([
        "rfml",
        "--config",
        config.to_str().unwrap(),
        "build",
        "--out",
        out.to_str().unwrap(),
    ])?;

    assert!(run(&cli, &rfml::demo::suite())?);
    let body = fs::read_to_string(out.join("stubs-example-1.rfml"))?;
    assert!(body.contains("# site_id: 314\n"));
    assert_eq!(fs::read_dir(&out)?.count(), 5);
    Ok(())
}

#[test]
fn failed_build_writes_nothing() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let out = tmp.path().join("output");
    let suite = Suite::new().group("broken", broken);
    let cli = Cli::try_parse_from([
        "rfml",
        "build",
        "--out",
        out.to_str().unwrap(),
        "--config",
        tmp.path().join("none.json").to_str().unwrap(),
    ])?;

    assert!(!run(&cli, &suite)?);
    assert!(!out.exists());
    Ok(())
}

#[test]
fn unknown_group_is_an_error() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let cli = Cli::try_parse_from([
        "rfml",
        "build",
        "no-such-group",
        "--config",
        tmp.path().join("none.json").to_str().unwrap(),
    ])?;
    let err = run(&cli, &rfml::demo::suite()).unwrap_err();
    assert!(err.to_string().contains("no-such-group"));
    Ok(())
}

#[test]
fn malformed_config_is_reported() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let config = tmp.path().join("rfconfig.json");
    fs::write(&config, "{ not json")?;
    let cli = Cli::try_parse_from(["rfml", "new", "--config", config.to_str().unwrap()])?;
    let err = run(&cli, &rfml::demo::suite()).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to load"));
    Ok(())
}
