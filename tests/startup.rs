#![cfg(unix)]

mod common;

use common::ShellFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn too_many_arguments() {
    let fx = ShellFixture::new();
    fx.command()
        .args(["--norc", "a.wsh", "b.wsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many arguments"));
}

#[test]
fn missing_script() {
    let fx = ShellFixture::new();
    fx.command()
        .args(["--norc", "does-not-exist.wsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.wsh"));
}

#[test]
fn unknown_flag() {
    let fx = ShellFixture::new();
    fx.command()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown flag --bogus"));
}

#[test]
fn help_and_version() {
    let fx = ShellFixture::new();
    fx.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wsh"));
    fx.command()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wsh "));
}

#[test]
fn rc_file_runs_before_script() {
    let fx = ShellFixture::new();
    fs::write(fx.home().join(".wshrc"), "# rc\nlocal FROM_RC=yes\n").unwrap();
    let script = fx.write("script.wsh", "vars\n");

    fx.command()
        .arg(&script)
        .assert()
        .success()
        .stdout("FROM_RC=yes\n");

    fx.command()
        .arg("--norc")
        .arg(&script)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn config_flag_replaces_rc_file() {
    let fx = ShellFixture::new();
    fs::write(fx.home().join(".wshrc"), "local FROM_HOME=1\n").unwrap();
    let rc = fx.write("custom.rc", "local FROM_CUSTOM=1\n");
    let script = fx.write("script.wsh", "vars\n");

    fx.command()
        .arg("-c")
        .arg(&rc)
        .arg(&script)
        .assert()
        .success()
        .stdout("FROM_CUSTOM=1\n");
}

#[test]
fn exit_in_rc_skips_input() {
    let fx = ShellFixture::new();
    fs::write(fx.home().join(".wshrc"), "exit\n").unwrap();
    let script = fx.write("script.wsh", "echo unreachable\n");

    fx.command().arg(&script).assert().success().stdout("");
}

#[test]
fn missing_script_fails_before_rc_runs() {
    let fx = ShellFixture::new();
    fs::write(fx.home().join(".wshrc"), "echo ran > rc-marker\n").unwrap();

    fx.command()
        .arg("does-not-exist.wsh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.wsh"));
    assert!(!fx.path("rc-marker").exists());
}
