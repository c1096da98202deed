/// Build an `SdkConfig` for the configured region. Credentials resolve
/// through the default provider chain.
pub async fn build_aws_config(region: &str) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await
}
