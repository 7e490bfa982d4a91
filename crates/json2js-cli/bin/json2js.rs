use std::process::exit;

use json2js_cli::App;
use json2js_util::{environment::native::NativeEnvironment, log::setup_stderr_logging};
use tracing::Instrument;

#[tokio::main]
async fn main() {
    let env = NativeEnvironment::new();
    setup_stderr_logging(&env, None);

    let args: Vec<String> = std::env::args().skip(1).collect();

    match App::new(env)
        .execute(args)
        .instrument(tracing::info_span!("json2js"))
        .await
    {
        Ok(_) => {
            exit(0);
        }
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "operation failed");
            exit(1);
        }
    }
}
