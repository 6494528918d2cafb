//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/jigsaw` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
///
/// Absolute `http(s)`, `blob:` and `data:` URLs pass through untouched.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/jigsaw` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn is_absolute_url(path: &str) -> bool {
    ["http://", "https://", "blob:", "data:"]
        .iter()
        .any(|scheme| path.starts_with(scheme))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    if is_absolute_url(relative) {
        return relative.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/img/l1.jpg"), "/static/img/l1.jpg");
        assert_eq!(asset_path("/static/img/l1.jpg"), "/static/img/l1.jpg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("static/img/l1.jpg", "/jigsaw"),
            "/jigsaw/static/img/l1.jpg"
        );
        assert_eq!(
            super::asset_path_with_base("/static/img/l1.jpg", "/jigsaw/"),
            "/jigsaw/static/img/l1.jpg"
        );
    }

    #[test]
    fn absolute_urls_are_untouched() {
        let remote = "https://images.unsplash.com/photo-1?w=800&h=600&fit=crop";
        assert_eq!(super::asset_path_with_base(remote, "/jigsaw"), remote);
        assert_eq!(super::asset_path_with_base("blob:abc", "/jigsaw"), "blob:abc");
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/jigsaw/"),
            Some(String::from("/jigsaw"))
        );
    }
}
