use reqwest::{Client, Url};
use std::env;
use std::process::ExitCode;

// Must agree with the site-addr in the Leptos configuration of the server.
static DEFAULT_PORT: &str = "3000";

fn health_url(port: &str, path: &str) -> Option<Url> {
    let path = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{}", path)
    };
    Url::parse(&format!("http://localhost:{}{}", port, path)).ok()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.into());
    let path = env::var("HEALTHCHECK_PATH").unwrap_or_else(|_| "/".into());
    let Some(url) = health_url(&port, &path) else {
        return ExitCode::FAILURE;
    };
    let client = Client::new();
    match client.get(url).send().await {
        Ok(res) => {
            let status_code = res.status();
            if status_code.is_client_error() || status_code.is_server_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(_) => ExitCode::FAILURE,
    }
}
