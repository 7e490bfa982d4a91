use json2js_util::environment::Environment;
use tokio::io::AsyncWriteExt;

use crate::args::UsageError;
use crate::App;

const HELP: &str = "\
json2js

Overview:
    json2js is a dual-use, Unix-like utility that converts JSON with comments
    to a JavaScript object literal. It supports both command line and piped
    input.

Command Line Usage:
    json2js --input=[path/to/input/file] | --raw=[content] [--output=[path/to/output/file]] [-d]

    where [option] is one of:
    --input=[path] (convert the contents of a file)
    --raw=[content] (convert the argument itself)
    --output=[path] (write the result to a file instead of stdout)
    -d (render strings with double quotes instead of single quotes)
    -v | --version (version)
    -h | --help (this help)

Piping Usage:
    echo '{\"firstName\": \"John\", \"lastName\": \"Doe\"}' | json2js
    cat [path/to/file.json] | json2js > [path/to/file.js]

Note:
    If the --input file is in the cwd then you must provide a relative path, i.e. './[file name]'.
    If --output is omitted then output is directed to stdout.
";

impl<E: Environment> App<E> {
    pub(crate) async fn print_help(&self) -> Result<(), anyhow::Error> {
        self.print(HELP).await
    }

    pub(crate) async fn print_version(&self) -> Result<(), anyhow::Error> {
        self.print(concat!(env!("CARGO_PKG_VERSION"), "\n\n")).await
    }

    /// Soft failure: one diagnostic line, then the general help.
    pub(crate) async fn print_usage_error(&self, error: &UsageError) -> Result<(), anyhow::Error> {
        self.print(&format!("{error}\n")).await?;
        self.print_help().await
    }

    async fn print(&self, text: &str) -> Result<(), anyhow::Error> {
        let mut stdout = self.env.stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}
