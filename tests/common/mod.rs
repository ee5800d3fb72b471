use assert_cmd::Command;
use tempfile::TempDir;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOG");
    cmd.env_remove("COLORFGBG");
    cmd
}

/// Fresh initialized journal in a temp directory
#[allow(dead_code)]
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Run `moodlog log` inside `dir`
#[allow(dead_code)]
pub fn log_mood(dir: &TempDir, args: &[&str]) {
    moodlog_cmd()
        .current_dir(dir.path())
        .arg("log")
        .args(args)
        .assert()
        .success();
}
