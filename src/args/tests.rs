use clap::Parser;

use super::HarnessArgs;

fn parse(args: &[&str]) -> Result<HarnessArgs, String> {
    let mut argv = vec!["tankrig"];
    argv.extend_from_slice(args);
    HarnessArgs::try_parse_from(argv).map_err(|err| format!("parse failed: {}", err))
}

#[test]
fn defaults_leave_optionals_unset() -> Result<(), String> {
    let args = parse(&[])?;
    if args.cluster_ip.is_some() || args.cluster_port.is_some() || args.rounds.is_some() {
        return Err("optional arguments were populated".to_owned());
    }
    if !args.quantiles.is_empty() {
        return Err("quantiles defaulted non-empty".to_owned());
    }
    if args.skip_probe || args.verbose || args.console || args.telegraf {
        return Err("boolean flags defaulted on".to_owned());
    }
    Ok(())
}

#[test]
fn target_and_workdir_parse() -> Result<(), String> {
    let args = parse(&[
        "--cluster-ip",
        "10.0.0.7",
        "--cluster-port",
        "30030",
        "-w",
        "/tmp/run",
    ])?;
    if args.cluster_ip.as_deref() != Some("10.0.0.7") {
        return Err(format!("unexpected cluster ip: {:?}", args.cluster_ip));
    }
    if args.cluster_port != Some(30030) {
        return Err(format!("unexpected port: {:?}", args.cluster_port));
    }
    if args.workdir.as_deref() != Some("/tmp/run") {
        return Err(format!("unexpected workdir: {:?}", args.workdir));
    }
    Ok(())
}

#[test]
fn quantiles_repeat() -> Result<(), String> {
    let args = parse(&["--quantile", "0.5", "--quantile", "0.99"])?;
    if args.quantiles != [0.5, 0.99] {
        return Err(format!("unexpected quantiles: {:?}", args.quantiles));
    }
    Ok(())
}

#[test]
fn ramp_flags_parse() -> Result<(), String> {
    let args = parse(&["--ramp-start", "2", "--ramp-end", "40", "--ramp-duration", "5m"])?;
    if args.ramp_start != Some(2) || args.ramp_end != Some(40) {
        return Err("unexpected ramp rates".to_owned());
    }
    if args.ramp_duration.as_deref() != Some("5m") {
        return Err(format!("unexpected ramp duration: {:?}", args.ramp_duration));
    }
    Ok(())
}

#[test]
fn non_numeric_port_is_rejected() -> Result<(), String> {
    if parse(&["--cluster-port", "not-a-port"]).is_ok() {
        return Err("invalid port was accepted".to_owned());
    }
    Ok(())
}
