//! Navigable pages and path normalisation.
//!
//! The UI router owns the actual view table; this module names the pages so
//! that session outcomes can request a redirect without depending on the UI.

/// A page reachable from the primary navigation or a redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Classes,
    Trainers,
    Memberships,
    Checkout,
    Dashboard,
    SignIn,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Classes,
        Page::Trainers,
        Page::Memberships,
        Page::Checkout,
        Page::Dashboard,
        Page::SignIn,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Classes => "/classes",
            Page::Trainers => "/trainers",
            Page::Memberships => "/memberships",
            Page::Checkout => "/checkout",
            Page::Dashboard => "/dashboard",
            Page::SignIn => "/signin",
        }
    }

    /// Look up a page by path. The path is normalised first, so `"#/classes?x=1"`
    /// resolves to [`Page::Classes`].
    pub fn from_path(raw: &str) -> Option<Page> {
        let path = normalize_path(raw);
        Page::ALL.into_iter().find(|p| p.path() == path)
    }
}

/// Strip a leading `#`, drop any query string and trailing `/`, and map an
/// empty path to `/`.
pub fn normalize_path(raw: &str) -> &str {
    let path = raw.strip_prefix('#').unwrap_or(raw);
    let path = path.split('?').next().unwrap_or_default();
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("#"), "/");
        assert_eq!(normalize_path("#/"), "/");
        assert_eq!(normalize_path("#/classes"), "/classes");
        assert_eq!(normalize_path("/dashboard?tab=bookings"), "/dashboard");
        assert_eq!(normalize_path("#?x=1"), "/");
        assert_eq!(normalize_path("/classes/"), "/classes");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_every_page_resolves_from_its_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("#/signin"), Some(Page::SignIn));
        assert_eq!(Page::from_path("/trainers/"), Some(Page::Trainers));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Page::from_path("/pricing"), None);
        assert_eq!(Page::from_path("/classes/c1"), None);
    }
}
