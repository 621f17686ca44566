use anamnesis_cli::config::{
    AnamnesisConfig, CURRENT_VERSION, CredentialSource, apply_overrides, config_info,
    load_config_from, migrate, save_config_in,
};
use anamnesis_cli::record::{load_record, save_record};
use anamnesis_core::models::complaint::ChiefComplaint;
use anamnesis_core::models::patient::PatientHistory;
use anamnesis_scoring::duration::Duration;

#[test]
fn v0_config_gains_default_model_id() {
    let v0 = serde_json::json!({
        "region": "ap-south-1",
        "credentials": { "type": "default_chain" },
        "created_at": "2025-01-01T00:00:00Z"
    });

    let migrated = migrate(v0, 0).unwrap();
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(
        migrated["model_id"],
        anamnesis_assist::model::DEFAULT_MODEL_ID
    );

    let config: AnamnesisConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.region, "ap-south-1");
}

#[test]
fn migration_keeps_an_existing_model_id() {
    let v0 = serde_json::json!({ "model_id": "custom-model" });
    let migrated = migrate(v0, 0).unwrap();
    assert_eq!(migrated["model_id"], "custom-model");
}

#[test]
fn newer_config_version_is_rejected() {
    let err = migrate(serde_json::json!({}), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn out_of_range_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"config_version": 4294967297, "region": "us-east-1", "model_id": "m",
            "credentials": {"type": "default_chain"}, "created_at": "2025-01-01T00:00:00Z"}"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(serde_json::json!([1, 2]), 0).is_err());
}

#[test]
fn overrides_replace_only_non_empty_values() {
    let base = AnamnesisConfig::default();

    let overridden = apply_overrides(
        base.clone(),
        Some("other-model".to_string()),
        Some("eu-west-1".to_string()),
    );
    assert_eq!(overridden.model_id, "other-model");
    assert_eq!(overridden.region, "eu-west-1");

    let untouched = apply_overrides(base.clone(), Some("  ".to_string()), None);
    assert_eq!(untouched, base);
}

#[test]
fn save_then_load_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnamnesisConfig {
        config_version: 0,
        credentials: CredentialSource::Profile {
            profile_name: "clinic".to_string(),
        },
        ..AnamnesisConfig::default()
    };

    let path = save_config_in(dir.path(), &config).unwrap();
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.credentials, config.credentials);
    assert_eq!(loaded.created_at, config.created_at);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    let info = config_info(&loaded, &path);
    assert_eq!(info.credential_type, "profile");
    assert_eq!(info.profile_name.as_deref(), Some("clinic"));
}

#[test]
fn records_are_not_overwritten_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patient.json");
    let history = PatientHistory::default();

    save_record(&path, &history, false).unwrap();
    assert!(save_record(&path, &history, false).is_err());
    save_record(&path, &history, true).unwrap();

    let loaded = load_record(&path).unwrap();
    assert_eq!(loaded, history);
}

#[test]
fn loaded_records_list_longest_complaint_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edited.json");
    let complaint = |text: &str, duration: Duration| ChiefComplaint {
        complaint: text.to_string(),
        duration,
        ..ChiefComplaint::blank()
    };
    let history = PatientHistory {
        chief_complaints: vec![
            complaint("Fever", Duration::new(0, 0, 3)),
            complaint("Cough", Duration::new(0, 2, 0)),
            complaint("Joint pain", Duration::new(1, 0, 0)),
        ],
        ..PatientHistory::default()
    };
    save_record(&path, &history, false).unwrap();

    let loaded = load_record(&path).unwrap();
    let order: Vec<&str> = loaded
        .chief_complaints
        .iter()
        .map(|c| c.complaint.as_str())
        .collect();
    assert_eq!(order, ["Joint pain", "Cough", "Fever"]);
}

#[test]
fn invalid_record_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    let err = load_record(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}
