use assert_cmd::Command;
use std::path::Path;

/// `daylog` run from `dir`, isolated from the caller's environment
pub fn daylog_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daylog").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("DAYLOG_CONFIG");
    cmd.env_remove("DAYLOG_LOG");
    cmd
}
