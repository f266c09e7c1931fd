//! Git repository wrapper.
//!
//! Repository inspection goes through `git2`; mutations are delegated to the
//! `git` executable so that the credentials and remotes configured for the
//! host apply to `push`.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::status::{StatusEntry, parse_porcelain};
use crate::{GitError, GitResult};

/// Default git executable, resolved through `PATH`.
const GIT_PROGRAM: &str = "git";

/// Summary of a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// The commit hash (SHA).
    pub hash: String,

    /// The first line of the commit message.
    pub summary: String,
}

impl CommitInfo {
    /// Returns the abbreviated (7 character) hash.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

/// A Git working tree, seen from a directory inside it.
///
/// Every command runs with that directory as its current directory; the
/// process-wide working directory is never changed.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
    dir: PathBuf,
    prefix: PathBuf,
    program: PathBuf,
}

impl Repository {
    /// Opens the working tree containing the given directory, searching
    /// parent directories like `git` does.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not inside a Git repository with a
    /// working tree.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        let workdir = inner
            .workdir()
            .ok_or_else(|| GitError::NotARepo(path.to_path_buf()))?
            .to_path_buf();

        // Both sides are canonicalized so symlinked temp dirs still compare
        let prefix = path
            .canonicalize()?
            .strip_prefix(workdir.canonicalize()?)
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self {
            inner,
            workdir,
            dir: path.to_path_buf(),
            prefix,
            program: PathBuf::from(GIT_PROGRAM),
        })
    }

    /// Uses the given git executable instead of `git` from `PATH`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Returns the working tree root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.workdir
    }

    /// Returns the directory commands run in, relative to the working tree
    /// root. Empty when opened at the root.
    #[must_use]
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Sets the commit identity in the repository's local configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either `git config` invocation fails.
    pub fn set_identity(&self, name: &str, email: &str) -> GitResult<()> {
        self.run(["config", "user.name", name])?;
        self.run(["config", "user.email", email])?;
        Ok(())
    }

    /// Stages a single path, relative to the opened directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `git add` fails.
    pub fn add(&self, path: &Path) -> GitResult<()> {
        self.run([OsStr::new("add"), OsStr::new("--"), path.as_os_str()])?;
        Ok(())
    }

    /// Returns the pending changes reported by `git status --porcelain -z`.
    ///
    /// Entry paths are relative to the working tree root.
    ///
    /// # Errors
    ///
    /// Returns an error if `git status` fails.
    pub fn status(&self) -> GitResult<Vec<StatusEntry>> {
        let output = self.run(["status", "--porcelain", "-z"])?;
        Ok(parse_porcelain(&output))
    }

    /// Returns true if `git status` lists the given path, relative to the
    /// opened directory, among pending changes.
    ///
    /// Untracked and newly added files count as changes.
    ///
    /// # Errors
    ///
    /// Returns an error if `git status` fails.
    pub fn has_changes(&self, path: &Path) -> GitResult<bool> {
        let path = self.prefix.join(path);
        Ok(self.status()?.iter().any(|entry| entry.refers_to(&path)))
    }

    /// Commits the staged changes.
    ///
    /// # Errors
    ///
    /// Returns an error if `git commit` fails.
    pub fn commit(&self, message: &str) -> GitResult<()> {
        self.run(["commit", "-m", message])?;
        Ok(())
    }

    /// Pushes the current branch.
    ///
    /// Without a remote this is a plain `git push` to the configured upstream.
    /// With a remote, `HEAD` (or `branch` when given) is pushed there.
    ///
    /// # Errors
    ///
    /// Returns an error if `git push` fails.
    pub fn push(&self, remote: Option<&str>, branch: Option<&str>) -> GitResult<()> {
        let mut args = vec!["push"];
        if let Some(remote) = remote {
            args.push(remote);
            args.push(branch.unwrap_or("HEAD"));
        }
        self.run(args)?;
        Ok(())
    }

    /// Returns the commit `HEAD` points to.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits.
    pub fn head_commit(&self) -> GitResult<CommitInfo> {
        let head = self.inner.head().map_err(|_| GitError::NoCommits)?;
        let commit = head.peel_to_commit()?;

        Ok(CommitInfo {
            hash: commit.id().to_string(),
            summary: commit.summary().unwrap_or("").to_string(),
        })
    }

    /// Runs a git command in the opened directory and returns its stdout.
    fn run<I, S>(&self, args: I) -> GitResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<_> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect();
        let command = describe(&self.program, &args);
        debug!(%command, dir = %self.dir.display(), "running git");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.dir)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GitError::GitNotFound(self.program.clone()),
                _ => GitError::Io(e),
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn describe(program: &Path, args: &[std::ffi::OsString]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}
