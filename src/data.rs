//! Mock inventories backing the list screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console has no content backend yet; every list screen filters one of
//! these hard-coded inventories client-side. The filter helpers are pure so
//! the screens stay thin.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// Reachability of a managed website.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebsiteStatus {
    Online,
    Offline,
    Maintenance,
}

impl WebsiteStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Online => "badge badge--online",
            Self::Offline => "badge badge--offline",
            Self::Maintenance => "badge badge--maintenance",
        }
    }
}

/// A managed website entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Website {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub status: WebsiteStatus,
    pub visitors: u32,
}

pub fn mock_websites() -> Vec<Website> {
    vec![
        Website {
            id: "1",
            name: "E-Commerce Store",
            url: "store.example.com",
            status: WebsiteStatus::Online,
            visitors: 1234,
        },
        Website {
            id: "2",
            name: "Company Blog",
            url: "blog.example.com",
            status: WebsiteStatus::Online,
            visitors: 567,
        },
        Website {
            id: "3",
            name: "Support Portal",
            url: "support.example.com",
            status: WebsiteStatus::Maintenance,
            visitors: 89,
        },
    ]
}

/// Case-insensitive name/URL search over the website inventory.
pub fn filter_websites(websites: &[Website], query: &str) -> Vec<Website> {
    let query = query.trim().to_lowercase();
    websites
        .iter()
        .filter(|site| {
            query.is_empty()
                || site.name.to_lowercase().contains(&query)
                || site.url.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

pub fn find_website(id: &str) -> Option<Website> {
    mock_websites().into_iter().find(|site| site.id == id)
}

/// Publication status of a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentStatus {
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }
}

/// What kind of content an item is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Article,
    Page,
    Product,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Page => "Page",
            Self::Product => "Product",
        }
    }
}

/// A knowledge-base entry the assistant can draw on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ContentKind,
    pub status: ContentStatus,
    pub preview: &'static str,
    pub last_modified: &'static str,
}

pub fn mock_content() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: "c1",
            title: "Getting Started Guide",
            kind: ContentKind::Article,
            status: ContentStatus::Published,
            preview: "Everything new customers need to set up their first widget.",
            last_modified: "2025-01-14",
        },
        ContentItem {
            id: "c2",
            title: "Shipping & Returns",
            kind: ContentKind::Page,
            status: ContentStatus::Published,
            preview: "Policy overview for shipping windows and return handling.",
            last_modified: "2025-01-08",
        },
        ContentItem {
            id: "c3",
            title: "Premium Plan",
            kind: ContentKind::Product,
            status: ContentStatus::Draft,
            preview: "Draft copy for the premium subscription landing section.",
            last_modified: "2024-12-29",
        },
        ContentItem {
            id: "c4",
            title: "Legacy FAQ",
            kind: ContentKind::Article,
            status: ContentStatus::Archived,
            preview: "Superseded answers kept for reference.",
            last_modified: "2024-10-02",
        },
    ]
}

/// Title/preview search plus optional status filter over the content list.
pub fn filter_content(
    items: &[ContentItem],
    query: &str,
    status: Option<ContentStatus>,
) -> Vec<ContentItem> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| status.is_none_or(|wanted| item.status == wanted))
        .filter(|item| {
            query.is_empty()
                || item.title.to_lowercase().contains(&query)
                || item.preview.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Indexing state of a scanned page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    Indexed,
    NotIndexed,
    Error,
}

impl ScanStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Indexed => "Indexed",
            Self::NotIndexed => "Not indexed",
            Self::Error => "Error",
        }
    }
}

/// A page discovered by the site scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitePage {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub status: ScanStatus,
    pub last_scanned: &'static str,
    pub quality_score: u8,
}

pub fn mock_pages() -> Vec<SitePage> {
    vec![
        SitePage {
            id: "p1",
            title: "Home",
            url: "/",
            status: ScanStatus::Indexed,
            last_scanned: "2025-01-15",
            quality_score: 92,
        },
        SitePage {
            id: "p2",
            title: "Pricing",
            url: "/pricing",
            status: ScanStatus::Indexed,
            last_scanned: "2025-01-15",
            quality_score: 88,
        },
        SitePage {
            id: "p3",
            title: "Careers",
            url: "/careers",
            status: ScanStatus::NotIndexed,
            last_scanned: "2025-01-11",
            quality_score: 61,
        },
        SitePage {
            id: "p4",
            title: "Old Landing",
            url: "/landing-2019",
            status: ScanStatus::Error,
            last_scanned: "2025-01-02",
            quality_score: 17,
        },
    ]
}

/// A one-time credit bundle offered on the settings screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreditPackage {
    pub name: &'static str,
    pub credits: u32,
    /// One-time price in whole dollars.
    pub price: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub fn credit_packages() -> Vec<CreditPackage> {
    vec![
        CreditPackage {
            name: "Starter",
            credits: 1_000,
            price: 9,
            features: &["Basic chat support", "Standard response time", "Email notifications"],
            popular: false,
        },
        CreditPackage {
            name: "Professional",
            credits: 5_000,
            price: 39,
            features: &[
                "Advanced chat support",
                "Priority response time",
                "Email notifications",
                "Analytics dashboard",
            ],
            popular: true,
        },
        CreditPackage {
            name: "Enterprise",
            credits: 15_000,
            price: 99,
            features: &[
                "Premium chat support",
                "Instant response time",
                "All notifications",
                "Advanced analytics",
                "Custom integrations",
            ],
            popular: false,
        },
    ]
}

/// Title/URL search over the scanned pages.
pub fn filter_pages(pages: &[SitePage], query: &str) -> Vec<SitePage> {
    let query = query.trim().to_lowercase();
    pages
        .iter()
        .filter(|page| {
            query.is_empty()
                || page.title.to_lowercase().contains(&query)
                || page.url.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
