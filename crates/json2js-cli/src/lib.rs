use std::path::Path;

use anyhow::anyhow;
use json2js_util::environment::Environment;
use tokio::io::AsyncReadExt;

pub mod args;
pub mod convert;
pub mod printing;

pub use convert::{ConversionRequest, Destination, Source};

pub struct App<E: Environment> {
    env: E,
}

impl<E: Environment> App<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Run one invocation: decide the mode from the raw process arguments
    /// and the kind of standard input, and produce exactly one outcome.
    ///
    /// The two entry paths are deliberately asymmetric: help and version
    /// are only recognized on a terminal, and a piped invocation honors
    /// nothing but `-d`.
    pub async fn execute(&self, raw_args: Vec<String>) -> Result<(), anyhow::Error> {
        if self.env.atty_stdin() {
            self.execute_terminal(raw_args).await
        } else {
            self.execute_piped(raw_args).await
        }
    }

    /// Command-line mode: flags drive the outcome.
    #[tracing::instrument(skip_all)]
    async fn execute_terminal(&self, raw_args: Vec<String>) -> Result<(), anyhow::Error> {
        let tokens = args::normalize(raw_args);

        // Help and version short-circuit, but only from first position.
        match tokens.options.first().map(String::as_str) {
            Some("-h" | "--help") => return self.print_help().await,
            Some("-v" | "--version") => return self.print_version().await,
            _ => {}
        }

        match args::resolve(&tokens) {
            Ok(resolved) => {
                let request = self.resolve_request(resolved)?;
                tracing::debug!(?request, "running conversion");
                self.convert(request).await
            }
            Err(error) => self.print_usage_error(&error).await,
        }
    }

    /// Piped mode: the drained stream is the document.
    #[tracing::instrument(skip_all)]
    async fn execute_piped(&self, raw_args: Vec<String>) -> Result<(), anyhow::Error> {
        let mut source = String::new();
        self.env.stdin().read_to_string(&mut source).await?;

        let tokens = args::normalize(raw_args);
        self.convert(ConversionRequest {
            source: Source::StreamText(source),
            destination: Destination::Stdout,
            quote_style: args::quote_style(&tokens.options),
        })
        .await
    }

    pub(crate) async fn load_file(&self, path: &Path) -> Result<String, anyhow::Error> {
        let data = self.env.read_file(path).await?;
        String::from_utf8(data)
            .map_err(|_| anyhow!("invalid utf8 content in {}", path.display()))
    }
}
