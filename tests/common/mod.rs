use assert_cmd::Command;

pub fn sigtag_cmd() -> Command {
    Command::cargo_bin("sigtag").unwrap()
}
