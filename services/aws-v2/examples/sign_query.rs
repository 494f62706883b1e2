use anyhow::Result;
use aws2::{Config, DefaultCredentialProvider, Request, RequestSigner};
use aws2_core::{Context, OsEnv, Signer};
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Credentials are read from AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY.
    let ctx = Context::new().with_env(OsEnv);
    let config = Arc::new(Config::new().from_env(&ctx));

    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::with_config(config.clone()),
        RequestSigner::from_config(&config),
    );

    // Example 1: query string request
    let mut req = Request::from_url(
        "https://sqs.us-east-1.amazonaws.com/?Action=ListQueues&Version=2012-11-05",
    )?;
    signer.sign(&mut req)?;
    let req = req.into_http()?;
    println!("GET {}", req.uri());

    // Example 2: form body request, host inferred from service and region
    let mut req = Request::new()
        .with_service("sdb")
        .with_region("eu-west-1")
        .with_body("Action=ListDomains&Version=2009-04-15");
    signer.sign(&mut req)?;
    let req = req.into_http()?;
    println!("{} {}", req.method(), req.uri());
    for (name, value) in req.headers() {
        println!("{name}: {value:?}");
    }
    println!();
    println!("{}", req.body());

    Ok(())
}
