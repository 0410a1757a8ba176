/// URL prefix the site is deployed under.
pub const BASE_PATH: &str = "/react-portfolio";

/// Join a site-root relative path onto [`BASE_PATH`].
pub fn site_path(path: &str) -> String {
    format!("{BASE_PATH}/{}", path.trim_start_matches('/'))
}
