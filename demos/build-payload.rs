use lambda_proxy_response::{HttpStatus, ProxyResponse};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut response = ProxyResponse::new();
    response
        .set_status(HttpStatus::BadGateway)
        .add_headers([("x-magnetikonline", "developer")])?
        .add_header("Content-Type", "application/json")?
        .set_body(json!({"one": "value", "two": "another"}));

    println!("Payload:");
    println!("{}", serde_json::to_string_pretty(&response.payload())?);

    if let Err(e) = response.add_headers([("x-first", "value"), ("x-invalid^%$#@-header", "value")]) {
        eprintln!("Rejected batch: {}", e);
    }
    println!("Headers after rejected batch: {:?}", response.headers());
    Ok(())
}
