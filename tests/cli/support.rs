use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A-B(1), B-C(1), A-C(5) plus an unreachable Y-Z(1)
pub const TRIANGLE: &str = "origin,neighbor,weight\nA,B,1\nB,C,1\nA,C,5\nY,Z,1\n";

/// Get a Command for rota with logging environment cleared
pub fn rota() -> Command {
    let mut cmd = cargo_bin_cmd!("rota");
    cmd.env_remove("RUST_LOG")
        .env_remove("ROTA_LOG")
        .env_remove("ROTA_CONFIG");
    cmd
}

/// Temporary directory holding an edge table
pub struct Fixture {
    pub dir: TempDir,
    pub edges: PathBuf,
}

impl Fixture {
    pub fn new(edges_csv: &str) -> Self {
        let dir = tempdir().unwrap();
        let edges = dir.path().join("edges.csv");
        fs::write(&edges, edges_csv).unwrap();
        Self { dir, edges }
    }

    pub fn triangle() -> Self {
        Self::new(TRIANGLE)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// rota command running in the fixture directory with `--edges` set
    pub fn rota(&self) -> Command {
        let mut cmd = rota();
        cmd.current_dir(self.path()).arg("--edges").arg(&self.edges);
        cmd
    }
}
