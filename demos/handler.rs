use clap::Parser;
use lambda_proxy_response::{HttpStatus, ProxyResponse};

/// Build a proxy response payload from the command line and print it
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Proxy response payload builder", long_about = None)]
struct CmdOpt {
    /// HTTP status code, either numeric or a registry name such as NOT_FOUND
    #[clap(short, long, value_name = "status", default_value = "200")]
    status: String,

    /// Response header, may be repeated
    #[clap(short = 'H', long = "header", value_name = "NAME=VALUE", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Response body, stored verbatim
    #[clap(short, long, value_name = "text", conflicts_with = "json")]
    body: Option<String>,

    /// Response body as JSON text, stored in compact form
    #[clap(short, long, value_name = "json")]
    json: Option<String>,
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let opt = CmdOpt::parse();

    let default = format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), "info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();

    let status: HttpStatus = match opt.status.parse::<u16>() {
        Ok(code) => HttpStatus::try_from(code)?,
        Err(_) => opt.status.parse()?,
    };
    log::info!("building {} response", status);

    let mut response = ProxyResponse::new();
    response.set_status(status).add_headers(opt.headers)?;

    match (opt.body, opt.json) {
        (_, Some(json)) => {
            let value: serde_json::Value = serde_json::from_str(&json)?;
            response.set_body(value);
        }
        (body, None) => {
            response.set_body(body.unwrap_or_default());
        }
    }

    println!("{}", response.into_payload().to_json()?);
    Ok(())
}
