use crate::common::redirect_temp_dir;
use crate::common::repo::TestRepo;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn repo(repository_dir: TempDir) -> TestRepo {
    TestRepo::init(repository_dir)
}

pub fn run_topo_command(dir: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("topo-order-commits").expect("Failed to find topo-order-commits binary");
    cmd.env_remove("TOPO_ORDER_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(dir);
    cmd
}
