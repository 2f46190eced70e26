//! Test fixtures for creating working copies
//!
//! Repositories are created with libgit2 so the tests never depend on a
//! `git` executable being installed.

use git2::Repository;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that may or may not be a git repository
pub struct RepoFixture {
    dir: TempDir,
}

impl RepoFixture {
    /// An empty directory without any git metadata
    pub fn plain() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// A freshly initialized repository without remotes
    pub fn empty_repo() -> Self {
        let fixture = Self::plain();
        Repository::init(fixture.path()).expect("Failed to init repository");
        fixture
    }

    /// A directory whose `.git` is a file without a valid `gitdir:` link
    pub fn corrupt() -> Self {
        let fixture = Self::plain();
        std::fs::write(fixture.path().join(".git"), "not a gitdir link\n")
            .expect("Failed to write .git file");
        fixture
    }

    /// A repository with the given `(name, url)` remotes
    pub fn with_remotes(remotes: &[(&str, &str)]) -> Self {
        let fixture = Self::empty_repo();
        let repo = Repository::open(fixture.path()).expect("Failed to open repository");
        for (name, url) in remotes {
            repo.remote(name, url).expect("Failed to add remote");
        }
        fixture
    }

    /// A repository whose `origin` points at `url`
    pub fn with_origin(url: &str) -> Self {
        Self::with_remotes(&[("origin", url)])
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create (and return) a nested directory inside the fixture
    pub fn subdir(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create subdirectory");
        path
    }
}

/// A directory tree holding several working copies, for scan tests
pub struct WorkspaceFixture {
    root: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Initialize a repository at `relative` with an optional origin URL
    pub fn add_repo(&self, relative: &str, origin: Option<&str>) -> PathBuf {
        let path = self.root.path().join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create repo dir");
        let repo = Repository::init(&path).expect("Failed to init repository");
        if let Some(url) = origin {
            repo.remote("origin", url).expect("Failed to add remote");
        }
        path
    }

    /// Create a plain directory (with a file) at `relative`
    pub fn add_plain_dir(&self, relative: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create dir");
        std::fs::write(path.join("README.md"), "# not a repository\n")
            .expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

/// Write a resolver configuration file into `dir` and return its path
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("gitprovider.yml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path
}
