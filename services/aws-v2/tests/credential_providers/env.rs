use anyhow::Result;
use aws2::{Credential, EnvCredentialProvider};
use aws2_core::{Context, OsEnv, ProvideCredential, StaticEnv};
use test_case::test_case;

#[test_case(&[("AWS_ACCESS_KEY_ID", "ak"), ("AWS_SECRET_ACCESS_KEY", "sk")], Some(Credential::new("ak", "sk")) ; "primary names")]
#[test_case(&[("AWS_ACCESS_KEY", "ak"), ("AWS_SECRET_KEY", "sk")], Some(Credential::new("ak", "sk")) ; "fallback names")]
#[test_case(&[("AWS_ACCESS_KEY_ID", ""), ("AWS_ACCESS_KEY", "ak"), ("AWS_SECRET_KEY", "sk")], Some(Credential::new("ak", "sk")) ; "empty primary falls back")]
#[test_case(&[("AWS_ACCESS_KEY_ID", "ak"), ("AWS_SECRET_ACCESS_KEY", "sk"), ("AWS_SESSION_TOKEN", "t")], Some(Credential::new("ak", "sk").with_session_token("t")) ; "session token")]
#[test_case(&[("AWS_ACCESS_KEY_ID", "ak"), ("AWS_SECRET_ACCESS_KEY", "sk"), ("AWS_SECURITY_TOKEN", "t")], Some(Credential::new("ak", "sk").with_session_token("t")) ; "security token")]
#[test_case(&[("AWS_SECRET_ACCESS_KEY", "sk")], Some(Credential::new("", "sk")) ; "secret only")]
#[test_case(&[("AWS_SESSION_TOKEN", "t")], None ; "token only")]
#[test_case(&[], None ; "empty env")]
fn test_env_provider(envs: &[(&str, &str)], expected: Option<Credential>) {
    let ctx = Context::new().with_env(StaticEnv::from_pairs(envs.iter().copied()));

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .expect("env provider never fails");
    assert_eq!(cred, expected);
}

#[test]
fn test_env_provider_reads_process_env() -> Result<()> {
    temp_env::with_vars(
        [
            ("AWS_ACCESS_KEY_ID", None),
            ("AWS_ACCESS_KEY", Some("process_ak")),
            ("AWS_SECRET_ACCESS_KEY", Some("process_sk")),
            ("AWS_SECRET_KEY", None),
            ("AWS_SESSION_TOKEN", None),
            ("AWS_SECURITY_TOKEN", None),
        ],
        || -> Result<()> {
            let ctx = Context::new().with_env(OsEnv);
            let cred = EnvCredentialProvider::new().provide_credential(&ctx)?;
            assert_eq!(cred, Some(Credential::new("process_ak", "process_sk")));
            Ok(())
        },
    )
}
