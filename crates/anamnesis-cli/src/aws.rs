use crate::config::CredentialSource;

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let CredentialSource::Profile { profile_name } = creds {
        builder = builder.profile_name(profile_name);
    }

    builder.load().await
}
