use serde::Serialize;

/// Top-level pages of the agency site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SitePage {
    Jobs,
    About,
    WhyChooseUs,
    Services,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl SitePage {
    pub const ALL: [SitePage; 5] = [
        SitePage::Jobs,
        SitePage::About,
        SitePage::WhyChooseUs,
        SitePage::Services,
        SitePage::Contact,
    ];

    /// Trailing slashes are ignored; anything else unrecognised has no page.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }

    pub const fn path(self) -> &'static str {
        match self {
            SitePage::Jobs => "/",
            SitePage::About => "/about",
            SitePage::WhyChooseUs => "/why-choose-us",
            SitePage::Services => "/services",
            SitePage::Contact => "/contact",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            SitePage::Jobs => "Jobs",
            SitePage::About => "About Us",
            SitePage::WhyChooseUs => "Why Choose Us",
            SitePage::Services => "Services",
            SitePage::Contact => "Contact",
        }
    }

    /// Navbar links in display order. The logo links home, so jobs has no entry.
    pub fn navigation() -> Vec<NavLink> {
        [
            SitePage::About,
            SitePage::WhyChooseUs,
            SitePage::Services,
            SitePage::Contact,
        ]
        .into_iter()
        .map(|page| NavLink {
            label: page.title(),
            path: page.path(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in SitePage::ALL {
            assert_eq!(SitePage::from_path(page.path()), Some(page));
        }
        assert_eq!(SitePage::from_path("/services/"), Some(SitePage::Services));
        assert_eq!(SitePage::from_path(""), Some(SitePage::Jobs));
        assert_eq!(SitePage::from_path("/careers"), None);
    }

    #[test]
    fn navigation_follows_navbar_order() {
        let labels: Vec<_> = SitePage::navigation()
            .into_iter()
            .map(|link| link.label)
            .collect();
        assert_eq!(labels, ["About Us", "Why Choose Us", "Services", "Contact"]);
    }
}
