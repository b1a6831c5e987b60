//! Build identification captured by `build.rs`

/// `git describe` of the checkout, "unknown" outside git
pub const GIT_COMMIT: &str = env!("CIVIC_GIT_COMMIT");

/// UTC build time, RFC 3339
pub const BUILT_AT: &str = env!("CIVIC_BUILT_AT");

/// Cargo profile (debug/release)
pub const BUILD_PROFILE: &str = env!("CIVIC_BUILD_PROFILE");

/// Startup line logged by every binary
pub fn startup_banner(binary: &str, version: &str) -> String {
    format!(
        "Starting {} v{} [{}] built {} ({})",
        binary, version, GIT_COMMIT, BUILT_AT, BUILD_PROFILE
    )
}
