//! Static next-step reference links for a chosen name.
//!
//! Thin passthrough with no decision logic; consumes the evaluated (or
//! preferred) normalized name only.

use serde::Serialize;
use url::Url;

const DOMAIN_SEARCH_BASE: &str = "https://www.namecheap.com/domains/registration/results/";

pub const LANDING_PAGE_URL: &str = "https://carrd.co/";
pub const LOGO_TOOL_URL: &str = "https://www.canva.com/";
pub const TRADEMARK_SEARCH_URL: &str = "https://www.uspto.gov/trademarks/search";

/// The four next-step links rendered under a report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextStepLinks {
    pub domain: String,
    pub landing_page: String,
    pub logo: String,
    pub trademark: String,
}

impl NextStepLinks {
    pub fn for_name(name: &str) -> Self {
        Self {
            domain: build_domain_link(name),
            landing_page: LANDING_PAGE_URL.to_string(),
            logo: LOGO_TOOL_URL.to_string(),
            trademark: TRADEMARK_SEARCH_URL.to_string(),
        }
    }
}

/// Domain-search URL for a name, spaces removed and the rest percent-encoded.
pub fn build_domain_link(name: &str) -> String {
    let compact: String = crate::engine::text::normalize(name)
        .split(' ')
        .collect::<Vec<_>>()
        .concat();
    Url::parse_with_params(DOMAIN_SEARCH_BASE, &[("domain", compact.as_str())])
        .expect("domain search base url is valid")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_link_strips_spaces() {
        let link = build_domain_link("  Lantern   Ridge ");
        assert!(link.ends_with("?domain=LanternRidge"));
    }

    #[test]
    fn domain_link_percent_encodes() {
        let link = build_domain_link("café & co");
        assert!(!link.contains(' '));
        assert!(link.contains("domain="));
        assert!(link.contains("%26"));
    }

    #[test]
    fn links_for_name_fill_all_four() {
        let links = NextStepLinks::for_name("Zest");
        assert!(links.domain.contains("namecheap.com"));
        assert_eq!(links.landing_page, LANDING_PAGE_URL);
        assert_eq!(links.logo, LOGO_TOOL_URL);
        assert_eq!(links.trademark, TRADEMARK_SEARCH_URL);
    }
}
