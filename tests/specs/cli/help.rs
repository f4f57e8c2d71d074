use crate::prelude::*;

#[test]
fn no_args_shows_usage() {
    cli().passes().stdout_has("Usage: dxw").stdout_has("dashboard");
}

#[test]
fn version_flag() {
    cli().args(&["--version"]).passes().stdout_has("dxw 0.2");
}

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["frobnicate"]).fails().code_is(2).stderr_has("frobnicate");
}
