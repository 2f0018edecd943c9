//! Print a project's inventory as JSON.
//!
//! ```sh
//! export SPARK_API_KEY='...'
//! cargo run --bin dump-inventory             # units with floor plans, statuses, custom fields
//! cargo run --bin dump-inventory -- --raw    # units as the API returns them
//! cargo run --bin dump-inventory -- --countries
//! ```

use spark_re_api::auth::SparkCredentials;
use spark_re_api::SparkRestClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Details,
    Raw,
    Countries,
}

fn parse_mode(args: impl Iterator<Item = String>) -> Result<Mode, String> {
    let mut mode = Mode::Details;
    for arg in args {
        mode = match arg.as_str() {
            "--raw" => Mode::Raw,
            "--countries" => Mode::Countries,
            "-h" | "--help" => return Err(String::new()),
            other => return Err(format!("unknown argument: {other}")),
        };
    }
    Ok(mode)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mode = parse_mode(std::env::args().skip(1)).unwrap_or_else(|message| {
        if !message.is_empty() {
            eprintln!("Error: {message}");
        }
        eprintln!("Usage: dump-inventory [--raw | --countries]");
        std::process::exit(2);
    });

    let creds = SparkCredentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Export your key:  export SPARK_API_KEY='...'");
        eprintln!("  Optional:         export SPARK_API_URL='https://api.spark.re/v2/'");
        std::process::exit(1);
    });

    let client = SparkRestClient::from_credentials(&creds).unwrap_or_else(|e| {
        eprintln!("Error: Failed to create client: {e}");
        std::process::exit(1);
    });

    let output = match mode {
        Mode::Details => client
            .get_units_with_details()
            .await
            .and_then(|units| Ok(serde_json::to_string_pretty(&units)?)),
        Mode::Raw => client
            .get_units()
            .await
            .and_then(|units| Ok(serde_json::to_string_pretty(&units)?)),
        Mode::Countries => client
            .get_countries()
            .await
            .and_then(|countries| Ok(serde_json::to_string_pretty(&countries)?)),
    };

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
