use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match rest_request::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
