//! Common test utilities shared across integration tests.
//!
//! Provides an isolated project directory, a `talks.yml` writer, local git
//! fixture repositories, and a logging fake conda binary, so tests never
//! touch the network or a real conda install.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Isolated project root for driving the `ogn` binary.
pub struct TestProject {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn write_talks(&self, yaml: &str) -> PathBuf {
        self.write_file("talks.yml", yaml)
    }

    /// Run `ogn` with the project root preset and extra env pairs.
    pub fn run_ogn(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = assert_cmd::Command::cargo_bin("ogn").expect("ogn binary");
        cmd.arg("--root").arg(&self.root).args(args);
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.output().expect("run ogn")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// Create a single-commit git repository usable as a clone source.
pub fn init_fixture_repo(path: &Path, files: &[(&str, &str)]) {
    let repo = git2::Repository::init(path).expect("init fixture repo");
    let mut index = repo.index().expect("repo index");
    for (relative, content) in files {
        let full = path.join(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&full, content).expect("write repo file");
        index
            .add_path(Path::new(relative))
            .expect("stage repo file");
    }
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    let signature = git2::Signature::now("fixture", "fixture@example.com").expect("signature");
    repo.commit(Some("HEAD"), &signature, &signature, "fixture", &tree, &[])
        .expect("commit");
}

/// Install an executable fake `conda` that appends each invocation to
/// `conda.log` in the project root. Unix only.
#[cfg(unix)]
pub fn install_fake_conda(project: &TestProject) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log = project.path("conda.log");
    let script = format!(
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo conda 0.0; exit 0; fi\necho \"$@\" >> {}\nexit 0\n",
        log.display()
    );
    let bin = project.write_file("bin/conda", &script);
    std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755))
        .expect("make fake conda executable");
    bin
}

#[cfg(unix)]
pub fn read_conda_log(project: &TestProject) -> String {
    std::fs::read_to_string(project.path("conda.log")).unwrap_or_default()
}
