//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "nl-NL".into()
    }
}

// ============================================================================
// [api] Section Defaults
// ============================================================================

pub mod api {
    pub fn content_type() -> String {
        "blog".into()
    }

    pub fn token_env() -> String {
        "TRAVELOG_API_TOKEN".into()
    }

    pub fn timeout_secs() -> u64 {
        30
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn data() -> PathBuf {
        "data".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub fn viewport() -> u32 {
        1440
    }
}

// ============================================================================
// Page Section Defaults
// ============================================================================

pub mod destination {
    pub fn path() -> String {
        "/".into()
    }

    pub fn list_title() -> String {
        "Blogs over".into()
    }
}

pub mod accommodations {
    pub fn path() -> String {
        "/accommodaties".into()
    }

    pub fn title() -> String {
        "Accommodaties".into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        4280
    }
}
