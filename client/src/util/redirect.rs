//! External login redirect targets.
//!
//! The return path is only ever taken from same-origin relative paths; an
//! absolute URL supplied as `next` is dropped rather than forwarded.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Build `{base}{auth_path}[?next=...]` for the marketing login screen.
///
/// `base` loses trailing slashes and `auth_path` is forced to a single
/// leading slash. `next` is appended only when it starts with `/`.
pub fn marketing_auth_url(base: &str, auth_path: &str, next: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let auth_path = auth_path.trim_start_matches('/');
    let target = format!("{base}/{auth_path}");

    let Some(next) = next.filter(|path| is_safe_return_path(path)) else {
        return target;
    };

    let joiner = if target.contains('?') { '&' } else { '?' };
    format!("{target}{joiner}next={}", urlencoding::encode(next))
}

/// Relative, same-origin paths only.
///
/// Protocol-relative `//host` paths would leave the site, so they are
/// rejected along with absolute URLs.
pub(crate) fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}
