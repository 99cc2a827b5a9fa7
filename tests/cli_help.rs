use std::process::Command;

fn fueleu(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fueleu"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn help_lists_command_groups() {
    let output = fueleu(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for group in ["routes", "compliance", "bank", "pools", "config"] {
        assert!(stdout.contains(group), "missing {group} in:\n{stdout}");
    }
}

#[test]
fn version_flag_prints_package_version() {
    let output = fueleu(&["--version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let output = fueleu(&[]);
    assert!(!output.status.success());
}
