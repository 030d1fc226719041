/// Deployment base path, baked in at build time.
pub const BASE_URL: Option<&str> = option_env!("BASE_URL");

pub fn base_path() -> &'static str {
    BASE_URL.unwrap_or("")
}
