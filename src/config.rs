use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "VitalCheck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "vitalcheck=info".to_string()
}

/// Get the application data directory
/// ~/VitalCheck/ on all platforms (user-visible, flat JSON files)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("VitalCheck")
}

/// Credential mapping file (identifier -> display name + password hash).
pub fn users_file() -> PathBuf {
    app_data_dir().join("users.json")
}

/// Patient-record history file (user key -> profile + record sequence).
pub fn patient_data_file() -> PathBuf {
    app_data_dir().join("patient_data.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("VitalCheck"));
    }

    #[test]
    fn data_files_under_app_data() {
        assert!(users_file().starts_with(app_data_dir()));
        assert!(patient_data_file().ends_with("patient_data.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
