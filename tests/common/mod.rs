use assert_cmd::Command;

pub fn newshead_cmd() -> Command {
    let mut cmd = Command::cargo_bin("newshead").unwrap();
    cmd.env_remove("NEWSHEAD_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
