use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

pub mod native;

/// An environment in which conversions are executed.
///
/// Every observable side effect of the tool — stream access, terminal
/// detection, file reads and writes, working-directory lookup — goes
/// through this trait, so other environments can be swapped in (tests use
/// an in-memory one).
#[async_trait(?Send)]
pub trait Environment: Clone + Send + Sync + 'static {
    type Stdin: AsyncRead + Unpin;
    type Stdout: AsyncWrite + Unpin;
    type Stderr: AsyncWrite + Unpin;

    /// Whether standard input is attached to a terminal.
    fn atty_stdin(&self) -> bool;

    fn atty_stderr(&self) -> bool;

    fn stdin(&self) -> Self::Stdin;
    fn stdout(&self) -> Self::Stdout;
    fn stderr(&self) -> Self::Stderr;

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, anyhow::Error>;

    async fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), anyhow::Error>;

    fn cwd(&self) -> Option<PathBuf>;
}
