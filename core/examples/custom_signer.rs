use aws2_core::hash::base64_hmac_sha256;
use aws2_core::{
    Context, Error, OsEnv, ProvideCredential, ProvideCredentialChain, Result, SignRequest, Signer,
    SigningCredential,
};
use http::request::Parts;
use http::HeaderValue;

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Load credentials from environment variables
#[derive(Debug)]
struct EnvLoader;

impl ProvideCredential for EnvLoader {
    type Credential = MyCredential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(api_key), Some(api_secret)) =
            (ctx.env_var("MY_API_KEY"), ctx.env_var("MY_API_SECRET"))
        else {
            return Ok(None);
        };

        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// Fall back to demo credentials
#[derive(Debug)]
struct DemoLoader;

impl ProvideCredential for DemoLoader {
    type Credential = MyCredential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        println!("No credentials found in environment, using demo credentials");
        Ok(Some(MyCredential {
            api_key: "demo-api-key".to_string(),
            api_secret: "demo-api-secret".to_string(),
        }))
    }
}

// Sign the path of a request with HMAC-SHA256
#[derive(Debug)]
struct MyRequestSigner;

impl SignRequest for MyRequestSigner {
    type Request = Parts;
    type Credential = MyCredential;

    fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential
            .filter(|c| c.is_valid())
            .ok_or_else(|| Error::credential_missing("no credential provided"))?;

        let string_to_sign = format!("{}\n{}", req.method, req.uri.path());
        let signature = base64_hmac_sha256(cred.api_secret.as_bytes(), string_to_sign.as_bytes());

        req.headers
            .insert("x-api-key", HeaderValue::from_str(&cred.api_key)?);
        req.headers
            .insert("x-api-signature", HeaderValue::from_str(&signature)?);

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let ctx = Context::new().with_env(OsEnv);

    let loader = ProvideCredentialChain::new()
        .push(EnvLoader)
        .push(DemoLoader);
    let signer = Signer::new(ctx, loader, MyRequestSigner);

    let (mut parts, _) = http::Request::builder()
        .method("GET")
        .uri("https://api.example.com/v1/users")
        .body(())?
        .into_parts();

    match signer.sign(&mut parts) {
        Ok(()) => {
            println!("Request signed successfully!");
            println!("Headers: {:?}", parts.headers);
        }
        Err(e) => {
            eprintln!("Failed to sign request: {e}");
        }
    }

    Ok(())
}
