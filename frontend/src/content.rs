//! Copy, figures and image references for every section of the page.

use crate::components::icons::IconKind;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "WHAT WE DO", href: "#about", primary: false },
    NavLink { label: "NEWS", href: "#news", primary: false },
    NavLink { label: "OUR BRANDS", href: "#brands", primary: false },
    NavLink { label: "WORK PROCESS", href: "#process", primary: false },
    NavLink { label: "CONTACT US", href: "#contact", primary: true },
];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1600&auto=format&fit=crop";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1500917293891-ef795e70e1f6?q=80&w=1200&auto=format&fit=crop";
pub const PORTFOLIO_IMAGE: &str =
    "https://images.unsplash.com/photo-1550614000-4b9519e00766?q=80&w=1200&auto=format&fit=crop";
pub const METRICS_IMAGE: &str =
    "https://images.unsplash.com/photo-1512496015851-a90fb38ba796?q=80&w=800&auto=format&fit=crop";

pub struct HeadlineStat {
    pub value: &'static str,
    /// Replaces the default "+" after the value.
    pub suffix: Option<&'static str>,
    pub label: &'static str,
}

pub const HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat { value: "4", suffix: None, label: "Global Luxury Brands Direct Equity" },
    HeadlineStat { value: "200", suffix: None, label: "Direct Retail Store Exposure" },
    HeadlineStat { value: "700", suffix: Some("Million +"), label: "GMV Annual Run Rate (RMB)" },
];

pub struct NewsItem {
    pub tag: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        tag: "Latest",
        title: "Expanding Our Brand Portfolio",
        body: "We continue to strengthen our position as a leading luxury beauty equity partner across APAC.",
    },
    NewsItem {
        tag: "Partnership",
        title: "Strategic Retail Expansion",
        body: "Opening new retail locations in key markets to serve our growing customer base.",
    },
    NewsItem {
        tag: "Innovation",
        title: "Sustainability Initiatives",
        body: "Leading the industry in ethical sourcing and sustainable beauty practices.",
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Discovery",
        body: "We identify and evaluate emerging luxury beauty brands with exceptional potential.",
    },
    ProcessStep {
        number: "02",
        title: "Investment",
        body: "Strategic equity partnerships and capital infusion to accelerate growth.",
    },
    ProcessStep {
        number: "03",
        title: "Development",
        body: "Leveraging our expertise to build brand equity and market presence.",
    },
    ProcessStep {
        number: "04",
        title: "Scale",
        body: "Expanding reach through retail networks and digital platforms across APAC.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandLayout {
    Tall,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandCategory {
    Equity,
    Licensed,
}

impl BrandCategory {
    pub fn label(self) -> &'static str {
        match self {
            BrandCategory::Equity => "Direct Equity",
            BrandCategory::Licensed => "Licensed",
        }
    }
}

pub enum ImageSource {
    Local(&'static str),
    Remote(&'static str),
}

pub struct Brand {
    pub name: &'static str,
    pub image: ImageSource,
    /// Font classes for the brand name, serif when unset.
    pub logo_font: Option<&'static str>,
    pub layout: BrandLayout,
    pub category: Option<BrandCategory>,
}

pub const EQUITY_BRANDS: &[Brand] = &[
    Brand {
        name: "Chantecaille",
        image: ImageSource::Local("chantecaille.png"),
        logo_font: None,
        layout: BrandLayout::Tall,
        category: Some(BrandCategory::Equity),
    },
    Brand {
        name: "RMK",
        image: ImageSource::Local("rmk.png"),
        logo_font: None,
        layout: BrandLayout::Tall,
        category: Some(BrandCategory::Equity),
    },
    Brand {
        name: "BULK Homme",
        image: ImageSource::Local("bulk-homme.png"),
        logo_font: Some("font-sans font-black"),
        layout: BrandLayout::Tall,
        category: Some(BrandCategory::Equity),
    },
];

pub const PARTNER_BRANDS: &[Brand] = &[
    Brand {
        name: "Molton Brown",
        image: ImageSource::Local("molton-brown.png"),
        logo_font: None,
        layout: BrandLayout::Wide,
        category: Some(BrandCategory::Licensed),
    },
    Brand {
        name: "Phyto",
        image: ImageSource::Local("phyto.png"),
        logo_font: Some("font-sans font-bold"),
        layout: BrandLayout::Wide,
        category: Some(BrandCategory::Licensed),
    },
    Brand {
        name: "SUQQU",
        image: ImageSource::Local("suqqu.png"),
        logo_font: None,
        layout: BrandLayout::Wide,
        category: Some(BrandCategory::Licensed),
    },
];

pub const FEATURED_BRANDS: &[Brand] = &[
    Brand {
        name: "ARgENTUM",
        image: ImageSource::Remote(
            "https://images.unsplash.com/photo-1629198688000-71f23e745b6e?q=80&w=1200&auto=format&fit=crop",
        ),
        logo_font: Some("font-sans"),
        layout: BrandLayout::Wide,
        category: Some(BrandCategory::Licensed),
    },
    Brand {
        name: "Juliette has a gun",
        image: ImageSource::Remote(
            "https://images.unsplash.com/photo-1541643600914-78b084683601?q=80&w=1200&auto=format&fit=crop",
        ),
        logo_font: Some("font-serif italic"),
        layout: BrandLayout::Wide,
        category: Some(BrandCategory::Licensed),
    },
];

pub struct RetailLocation {
    pub name: &'static str,
    pub sub: Option<&'static str>,
    pub image: &'static str,
}

pub const RETAIL_LOCATIONS: &[RetailLocation] = &[
    RetailLocation { name: "Hainan Hailu Duty-Free", sub: None, image: "retail-hainan.png" },
    RetailLocation { name: "Nanjing De Ji", sub: None, image: "retail-nanjing.png" },
    RetailLocation {
        name: "Haikou International Duty-Free",
        sub: Some("Shopping Complex | 2023"),
        image: "retail-haikou.png",
    },
    RetailLocation { name: "Shenzhen", sub: Some("2024"), image: "retail-shenzhen.png" },
];

pub const FLAGSHIP_STORES: &[&str] = &["Shanghai Taikoo", "Shanghai Jingan Kerry", "Shanghai Kee Club"];

pub struct DetailedStat {
    pub heading: &'static str,
    pub caption: &'static str,
    pub value: &'static str,
    pub plus: bool,
    pub highlight: &'static str,
    pub highlight_body: &'static str,
}

pub const DETAILED_STATS: &[DetailedStat] = &[
    DetailedStat {
        heading: "Brands",
        caption: "4 invested and 10 licensed brands",
        value: "14",
        plus: true,
        highlight: "Bonnie & Clyde",
        highlight_body: "Bonnie & Clyde developed in 2020 has over 10M user base, commanding the highest ATV in multi-brand beauty.",
    },
    DetailedStat {
        heading: "Employees",
        caption: "HQ in Shanghai, with a global infrastructure network",
        value: "250",
        plus: true,
        highlight: "Retail Store",
        highlight_body: "Over 200 direct retail store exposure across premium locations.",
    },
    DetailedStat {
        heading: "Offices",
        caption: "8 offices across Asia, Europe, and the Americas",
        value: "8",
        plus: false,
        highlight: "Luxury Spas",
        highlight_body: "Our luxury spas perform over 7 million treatments annually.",
    },
];

pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: IconKind::Mail, label: "Email", href: "#" },
    SocialLink { icon: IconKind::Instagram, label: "Instagram", href: "#" },
    SocialLink { icon: IconKind::Globe, label: "Website", href: "#" },
    SocialLink { icon: IconKind::Facebook, label: "Facebook", href: "#" },
    SocialLink { icon: IconKind::Linkedin, label: "LinkedIn", href: "#" },
];

pub const COPYRIGHT: &str = "© 2024 Ushopal.com is a registered trademark. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_follow_page_order() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(anchors, vec!["#about", "#news", "#brands", "#process", "#contact"]);
    }

    #[test]
    fn only_contact_link_is_primary() {
        let primary: Vec<&str> = NAV_LINKS.iter().filter(|l| l.primary).map(|l| l.label).collect();
        assert_eq!(primary, vec!["CONTACT US"]);
    }

    #[test]
    fn brand_rows_match_portfolio_claims() {
        assert_eq!(EQUITY_BRANDS.len(), 3);
        assert!(EQUITY_BRANDS
            .iter()
            .all(|b| b.category == Some(BrandCategory::Equity) && b.layout == BrandLayout::Tall));
        assert!(PARTNER_BRANDS
            .iter()
            .chain(FEATURED_BRANDS)
            .all(|b| b.category == Some(BrandCategory::Licensed) && b.layout == BrandLayout::Wide));
    }

    #[test]
    fn headline_values_leave_the_plus_to_the_renderer() {
        for stat in HEADLINE_STATS.iter().filter(|s| s.suffix.is_none()) {
            assert!(!stat.value.ends_with('+'), "{} would render a double plus", stat.value);
        }
        let values: Vec<&str> = HEADLINE_STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["4", "200", "700"]);
    }

    #[test]
    fn category_badges() {
        assert_eq!(BrandCategory::Equity.label(), "Direct Equity");
        assert_eq!(BrandCategory::Licensed.label(), "Licensed");
    }
}
