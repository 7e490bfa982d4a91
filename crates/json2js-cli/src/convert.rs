use std::path::PathBuf;

use anyhow::anyhow;
use json2js::{emitter, QuoteStyle};
use json2js_util::{environment::Environment, util::path::to_absolute};
use tokio::io::AsyncWriteExt;

use crate::args::{ResolvedArgs, SourceArg};
use crate::App;

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read the document from a file.
    File(PathBuf),
    /// The document was passed inline on the command line.
    RawText(String),
    /// The document was drained from standard input.
    StreamText(String),
}

/// Where the rendered literal goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

/// Fully resolved parameters for one conversion.
///
/// Built fresh per invocation and consumed exactly once; file paths are
/// already absolute, so nothing downstream depends on the working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source: Source,
    pub destination: Destination,
    pub quote_style: QuoteStyle,
}

impl<E: Environment> App<E> {
    /// Turn validated option values into a request with absolute paths.
    pub(crate) fn resolve_request(
        &self,
        args: ResolvedArgs,
    ) -> Result<ConversionRequest, anyhow::Error> {
        let cwd = self.env.cwd();
        let resolve = |path: &str| {
            to_absolute(path, cwd.as_deref())
                .ok_or_else(|| anyhow!("could not figure the current working directory"))
        };

        let source = match args.source {
            SourceArg::Input(path) => Source::File(resolve(&path)?),
            SourceArg::Raw(text) => Source::RawText(text),
        };
        let destination = match args.output {
            Some(path) => Destination::File(resolve(&path)?),
            None => Destination::Stdout,
        };

        Ok(ConversionRequest {
            source,
            destination,
            quote_style: args.quote_style,
        })
    }

    /// Run one conversion: obtain the source text, render it, write it out.
    #[tracing::instrument(skip_all)]
    pub async fn convert(&self, request: ConversionRequest) -> Result<(), anyhow::Error> {
        let source = match &request.source {
            Source::File(path) => self.load_file(path).await?,
            Source::RawText(text) | Source::StreamText(text) => text.clone(),
        };

        let options = emitter::Options {
            quote_style: request.quote_style,
            ..Default::default()
        };
        let rendered = json2js::convert(&source, &options)?;

        match &request.destination {
            Destination::File(path) => {
                tracing::debug!(path = %path.display(), "writing rendered literal");
                self.env.write_file(path, rendered.as_bytes()).await?;
            }
            Destination::Stdout => {
                let mut stdout = self.env.stdout();
                stdout.write_all(rendered.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        Ok(())
    }
}
