use lambda_proxy_response::{HttpStatus, ProxyResponse};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let response = ProxyResponse::text(HttpStatus::NotFound, "Resource not found")?;
    let http_response = http::Response::<String>::try_from(response.into_payload())?;

    println!("Status: {}", http_response.status());
    for (name, value) in http_response.headers() {
        println!("  {}: {:?}", name, value);
    }
    println!("{}", http_response.body());
    Ok(())
}
