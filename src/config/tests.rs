use std::time::Duration;

use clap::Parser;
use tempfile::tempdir;

use super::{load_config_file, parse_duration_value, resolve};
use crate::args::HarnessArgs;
use crate::error::ConfigError;

fn parse_args(args: &[&str]) -> Result<HarnessArgs, String> {
    let mut argv = vec!["tankrig"];
    argv.extend_from_slice(args);
    HarnessArgs::try_parse_from(argv).map_err(|err| format!("parse failed: {}", err))
}

#[test]
fn parse_toml_config_with_load_section() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("tankrig.toml");
    let content = r#"
cluster_ip = "10.0.0.7"
cluster_port = 30030
workdir = "/tmp/tank-run"
rounds = 500
quantiles = [0.5, 0.9, 0.99]

[load]
start_rate = 2
end_rate = 40
duration = "5m"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;
    if config.cluster_ip.as_deref() != Some("10.0.0.7") {
        return Err("unexpected cluster ip".to_owned());
    }
    if config.rounds != Some(500) {
        return Err("unexpected rounds".to_owned());
    }
    let load = config.load.ok_or("expected load section")?;
    if load.start_rate != Some(2) || load.end_rate != Some(40) {
        return Err("unexpected load rates".to_owned());
    }
    let duration = load
        .duration
        .ok_or("expected duration")?
        .to_duration()
        .map_err(|err| format!("duration failed: {}", err))?;
    if duration != Duration::from_secs(300) {
        return Err(format!("unexpected duration: {:?}", duration));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("tankrig.json");
    let content = r#"{
  "cluster_ip": "10.0.0.7",
  "skip_probe": true,
  "load": { "start_rate": 1, "end_rate": 10, "duration": 600 }
}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;
    if config.skip_probe != Some(true) {
        return Err("unexpected skip_probe".to_owned());
    }
    let load = config.load.ok_or("expected load section")?;
    let duration = load
        .duration
        .ok_or("expected duration")?
        .to_duration()
        .map_err(|err| format!("duration failed: {}", err))?;
    if duration != Duration::from_secs(600) {
        return Err(format!("unexpected duration: {:?}", duration));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("tankrig.yaml");
    std::fs::write(&path, "cluster_ip: nope").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(ConfigError::UnsupportedExtension { ext }) if ext == "yaml" => Ok(()),
        Err(err) => Err(format!("unexpected error: {}", err)),
        Ok(_) => Err("yaml config was accepted".to_owned()),
    }
}

#[test]
fn duration_units_parse() -> Result<(), String> {
    let cases = [
        ("500ms", Duration::from_millis(500)),
        ("45", Duration::from_secs(45)),
        ("45s", Duration::from_secs(45)),
        ("10m", Duration::from_secs(600)),
        ("2h", Duration::from_secs(7200)),
    ];
    for (text, expected) in cases {
        let parsed =
            parse_duration_value(text).map_err(|err| format!("'{}' failed: {}", text, err))?;
        if parsed != expected {
            return Err(format!("'{}' parsed to {:?}", text, parsed));
        }
    }
    if parse_duration_value("0s").is_ok() {
        return Err("zero duration was accepted".to_owned());
    }
    if parse_duration_value("10x").is_ok() {
        return Err("unknown unit was accepted".to_owned());
    }
    Ok(())
}

#[test]
fn cli_takes_precedence_over_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("tankrig.toml");
    let content = r#"
cluster_ip = "10.0.0.7"
cluster_port = 9999
rounds = 5
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;

    let args = parse_args(&["--cluster-port", "30030"])?;
    let settings =
        resolve(&args, Some(&config)).map_err(|err| format!("resolve failed: {}", err))?;
    if settings.cluster_ip != "10.0.0.7" {
        return Err("config cluster ip was ignored".to_owned());
    }
    if settings.cluster_port != 30030 {
        return Err("CLI port did not win".to_owned());
    }
    if settings.rounds != 5 {
        return Err("config rounds were ignored".to_owned());
    }
    Ok(())
}

#[test]
fn defaults_fill_unset_fields() -> Result<(), String> {
    let args = parse_args(&["--cluster-ip", "10.0.0.7"])?;
    let settings = resolve(&args, None).map_err(|err| format!("resolve failed: {}", err))?;
    if settings.cluster_port != 30030 {
        return Err(format!("unexpected default port: {}", settings.cluster_port));
    }
    if settings.rounds != 10_000 {
        return Err(format!("unexpected default rounds: {}", settings.rounds));
    }
    if settings.quantiles != [0.5, 0.9] {
        return Err(format!("unexpected default quantiles: {:?}", settings.quantiles));
    }
    if settings.ramp.start_rps != 1 || settings.ramp.end_rps != 10 {
        return Err("unexpected default ramp rates".to_owned());
    }
    if settings.ramp.duration != Duration::from_secs(600) {
        return Err("unexpected default ramp duration".to_owned());
    }
    if settings.tank_bin != "yandex-tank" {
        return Err(format!("unexpected tank binary: {}", settings.tank_bin));
    }
    Ok(())
}

#[test]
fn missing_cluster_ip_is_fatal() -> Result<(), String> {
    let args = parse_args(&[])?;
    match resolve(&args, None) {
        Err(err) => {
            let message = format!("{}", err);
            if !message.contains("cluster-ip") {
                return Err(format!("unexpected error: {}", message));
            }
            Ok(())
        }
        Ok(_) => Err("missing cluster ip was accepted".to_owned()),
    }
}

#[test]
fn settings_render_target_and_plan() -> Result<(), String> {
    let args = parse_args(&["--cluster-ip", "10.0.0.7", "--telegraf"])?;
    let settings = resolve(&args, None).map_err(|err| format!("resolve failed: {}", err))?;
    let base = settings
        .base_url()
        .map_err(|err| format!("base url failed: {}", err))?;
    if base.as_str() != "http://10.0.0.7:30030/" {
        return Err(format!("unexpected base url: {}", base));
    }
    let plan = settings.load_plan();
    if !plan.telegraf || plan.console {
        return Err("plan flags do not match settings".to_owned());
    }
    if !plan.render().contains("address: 10.0.0.7:30030") {
        return Err("plan does not carry the target address".to_owned());
    }
    Ok(())
}
