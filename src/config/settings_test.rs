use super::Settings;

#[test]
fn test_defaults_load_without_files() {
    let settings = Settings::defaults().expect("defaults should deserialize");

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.storage.storage_type, "local");
    assert_eq!(settings.storage.public_base_url, "/api/media");
    assert_eq!(settings.auth.admin_token_ttl_minutes, 720);
    assert!(settings.bootstrap.superadmin_email.is_none());
    assert!(settings.cors.allowed_origins.is_empty());
    assert!(!settings.metrics.enabled);
}

#[test]
fn test_upload_limit_default_is_twenty_megabytes() {
    let settings = Settings::defaults().unwrap();
    assert_eq!(settings.uploads.max_bytes, 20 * 1024 * 1024);
}
