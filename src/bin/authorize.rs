//! Walk through the SurveyMonkey OAuth authorization-code flow.
//!
//! Without arguments, prints the URL the account owner should open. After
//! approving, SurveyMonkey redirects to `SM_REDIRECT_URI?code=...`; pass that
//! code back in to receive a long-lived access token.
//!
//! ```sh
//! export SM_CLIENT_ID=... SM_CLIENT_SECRET=... SM_REDIRECT_URI=...
//! cargo run --bin sm-authorize
//! cargo run --bin sm-authorize -- --code <code>
//! ```

use surveymonkey_auth::Authenticator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = parse_code(std::env::args().skip(1)).unwrap_or_else(|message| {
        eprintln!("Error: {message}");
        eprintln!();
        eprintln!("Usage: sm-authorize [--code <code>]");
        std::process::exit(2);
    });

    let auth = Authenticator::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Set SM_CLIENT_ID, SM_CLIENT_SECRET and SM_REDIRECT_URI");
        eprintln!("  to the values of your app at https://developer.surveymonkey.com/apps/");
        std::process::exit(1);
    });

    let Some(code) = code else {
        match auth.authorize_url() {
            Ok(url) => {
                println!("Open this URL and approve access:\n");
                println!("  {url}\n");
                println!("Then re-run with --code <code> using the code from the redirect.");
            }
            Err(e) => {
                eprintln!("Error: Failed to build authorize URL: {e}");
                std::process::exit(1);
            }
        }
        return;
    };

    match auth.get_token(&code).await {
        Ok(token) => {
            println!("access_token: {}", token.access_token);
            if let Some(token_type) = &token.token_type {
                println!("token_type:   {token_type}");
            }
            if let Some(access_url) = &token.access_url {
                println!("access_url:   {access_url}");
            }
            println!();
            println!("export SM_ACCESS_TOKEN='{}'", token.access_token);
        }
        Err(e) => {
            eprintln!("Error: Token exchange failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns the authorization code if `--code` was given.
fn parse_code(mut args: impl Iterator<Item = String>) -> Result<Option<String>, String> {
    let mut code = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--code" | "-c" => match args.next() {
                Some(value) if !value.is_empty() => code = Some(value),
                _ => return Err("--code requires a value".to_string()),
            },
            other => match other.strip_prefix("--code=") {
                Some(value) if !value.is_empty() => code = Some(value.to_string()),
                _ => return Err(format!("unexpected argument {other:?}")),
            },
        }
    }
    Ok(code)
}
