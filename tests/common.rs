#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdc() -> Command {
    cargo_bin_cmd!("rdutycheck")
}

/// Unique config path inside the system temp dir, removed if it already exists
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdutycheck.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Config path pre-filled with `content`
pub fn write_test_config(name: &str, content: &str) -> String {
    let cfg_path = setup_test_config(name);
    fs::write(&cfg_path, content).expect("write test config");
    cfg_path
}
