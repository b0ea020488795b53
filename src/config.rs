/// Application-level constants
pub const APP_NAME: &str = "PrivaScreen";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "privascreen=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_privascreen() {
        assert_eq!(APP_NAME, "PrivaScreen");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_scopes_to_crate() {
        assert!(default_log_filter().starts_with("privascreen"));
    }
}
