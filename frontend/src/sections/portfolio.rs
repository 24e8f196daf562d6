use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{
    Brand, BrandCategory, BrandLayout, ImageSource, EQUITY_BRANDS, FEATURED_BRANDS, PARTNER_BRANDS,
    PORTFOLIO_IMAGE,
};
use crate::reveal::stagger_delay;

#[function_component(PortfolioIntro)]
pub fn portfolio_intro() -> Html {
    html! {
        <section class="portfolio-intro">
            <div class="container">
                <div class="portfolio-intro-grid">
                    <FadeIn>
                        <h2 class="section-title portfolio-title">{"Our Brand"}<br/>{"Portfolio"}</h2>
                        <p class="portfolio-subtitle">
                            {"Direct Equity Ownership in 4 Global Luxury Beauty Brands"}
                        </p>
                        <div class="portfolio-link-row">
                            <a href="#brands" class="portfolio-link">
                                {"View All 14 Brands Across APAC"}
                                <Icon kind={IconKind::ChevronRight} size={16} class={classes!("portfolio-link-arrow")} />
                            </a>
                        </div>
                    </FadeIn>

                    <FadeIn delay={200}>
                        <div class="portfolio-feature">
                            <img src={PORTFOLIO_IMAGE} alt="Brand Portfolio" loading="lazy" />
                            <div class="portfolio-caption">
                                <p class="portfolio-caption-title">{"Curated Excellence"}</p>
                                <p class="portfolio-caption-body">
                                    {"Defining the future standard of luxury beauty through strategic selection."}
                                </p>
                            </div>
                        </div>
                    </FadeIn>
                </div>
            </div>
            <style>
                {r#"
                    .portfolio-intro {
                        background: var(--lush-cream);
                        padding: 6rem 0;
                    }
                    .portfolio-intro-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .portfolio-title {
                        margin-bottom: 1.5rem;
                    }
                    .portfolio-subtitle {
                        display: inline-block;
                        max-width: 36rem;
                        font-size: 1.25rem;
                        font-family: var(--font-serif);
                        font-style: italic;
                        color: rgba(40, 30, 21, 0.7);
                        border-bottom: 1px solid var(--lush-dark);
                        padding-bottom: 2rem;
                        margin: 0;
                    }
                    .portfolio-link-row {
                        margin-top: 3rem;
                    }
                    .portfolio-link {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .portfolio-link:hover {
                        color: var(--lush-accent);
                    }
                    .portfolio-link-arrow {
                        transition: transform 0.3s;
                    }
                    .portfolio-link:hover .portfolio-link-arrow {
                        transform: translateX(0.25rem);
                    }
                    .portfolio-feature {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        overflow: hidden;
                    }
                    .portfolio-feature img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transform: scale(1.05);
                        transition: transform 1.5s;
                    }
                    .portfolio-feature:hover img {
                        transform: scale(1);
                    }
                    .portfolio-caption {
                        position: absolute;
                        bottom: 2rem;
                        left: 2rem;
                        max-width: 20rem;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        opacity: 0.9;
                        transform: translateY(1rem);
                        transition: all 0.5s;
                    }
                    .portfolio-feature:hover .portfolio-caption {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .portfolio-caption-title {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        margin: 0 0 0.25rem;
                    }
                    .portfolio-caption-body {
                        font-size: 0.875rem;
                        font-family: var(--font-serif);
                        font-style: italic;
                        color: rgba(40, 30, 21, 0.6);
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .portfolio-intro {
                            padding: 8rem 0;
                        }
                        .portfolio-subtitle {
                            font-size: 1.5rem;
                        }
                        .portfolio-feature {
                            aspect-ratio: 5 / 4;
                        }
                        .portfolio-caption {
                            padding: 1.5rem;
                        }
                    }
                    @media (min-width: 1024px) {
                        .portfolio-intro-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}

fn image_url(source: &ImageSource) -> String {
    match source {
        ImageSource::Local(file) => config::asset(file),
        ImageSource::Remote(url) => url.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct BrandCardProps {
    pub name: AttrValue,
    pub image: AttrValue,
    #[prop_or_default]
    pub logo_font: Option<AttrValue>,
    #[prop_or(BrandLayout::Tall)]
    pub layout: BrandLayout,
    #[prop_or_default]
    pub category: Option<BrandCategory>,
}

#[function_component(BrandCard)]
pub fn brand_card(props: &BrandCardProps) -> Html {
    let font: Vec<String> = props
        .logo_font
        .as_deref()
        .unwrap_or("font-serif")
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    let media_class = match props.layout {
        BrandLayout::Tall => "brand-media-tall",
        BrandLayout::Wide => "brand-media-wide",
    };

    html! {
        <div class="brand-card">
            <div class="brand-card-header">
                <div class="brand-dot"></div>
                <div class="brand-name-block">
                    <h3 class={classes!("brand-name", font)}>{&props.name}</h3>
                    {
                        match props.category {
                            Some(category) => html! {
                                <span class={classes!(
                                    "brand-category",
                                    (category == BrandCategory::Equity).then(|| "brand-category-equity"),
                                )}>
                                    {category.label()}
                                </span>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
            <div class={classes!("brand-media", media_class)}>
                <div class="brand-media-tint"></div>
                <img src={props.image.clone()} alt={props.name.clone()} />
                <div class="brand-media-cta">
                    <div class="brand-media-cta-circle">
                        <Icon kind={IconKind::ArrowRight} size={20} />
                    </div>
                </div>
            </div>
        </div>
    }
}

fn brand_cards(brands: &'static [Brand], class: &'static str) -> Html {
    brands
        .iter()
        .enumerate()
        .map(|(idx, brand)| {
            html! {
                <FadeIn key={brand.name} delay={stagger_delay(idx + 1, 100)} class={classes!(class)}>
                    <BrandCard
                        name={brand.name}
                        image={image_url(&brand.image)}
                        logo_font={brand.logo_font.map(AttrValue::from)}
                        layout={brand.layout}
                        category={brand.category}
                    />
                </FadeIn>
            }
        })
        .collect()
}

#[function_component(BrandsGrid)]
pub fn brands_grid() -> Html {
    html! {
        <section id="brands" class="brands">
            <div class="container brands-rows">
                <div class="brands-equity-row">
                    <div class="brands-row-label">
                        <div class="brands-row-label-vertical">{"Equity Partners"}</div>
                        <div>{"01 — 03"}</div>
                    </div>
                    { brand_cards(EQUITY_BRANDS, "brand-cell") }
                </div>

                <div>
                    <FadeIn>
                        <div class="brands-partner-header">
                            <h3>{"Strategic Partnerships"}</h3>
                            <span>{"Global Reach"}</span>
                        </div>
                    </FadeIn>
                    <div class="brands-wide-row brands-wide-row-3">
                        { brand_cards(PARTNER_BRANDS, "brand-cell") }
                    </div>
                </div>

                <div class="brands-wide-row brands-wide-row-2">
                    { brand_cards(FEATURED_BRANDS, "brand-cell") }
                </div>
            </div>
            <style>
                {r#"
                    .brands {
                        background: var(--lush-cream);
                        padding-bottom: 8rem;
                    }
                    .brands-rows {
                        display: flex;
                        flex-direction: column;
                        gap: 6rem;
                    }
                    .brands-equity-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .brands-row-label {
                        display: none;
                        flex-direction: column;
                        justify-content: space-between;
                        padding: 1rem;
                        border-right: 1px solid rgba(40, 30, 21, 0.1);
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: rgba(40, 30, 21, 0.4);
                    }
                    .brands-row-label-vertical {
                        writing-mode: vertical-lr;
                        height: 8rem;
                    }
                    .brand-cell {
                        height: 100%;
                    }
                    .brands-partner-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        margin-bottom: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--lush-dark);
                    }
                    .brands-partner-header h3 {
                        font-size: 1.875rem;
                        font-family: var(--font-serif);
                        font-style: italic;
                        margin: 0;
                    }
                    .brands-partner-header span {
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: rgba(40, 30, 21, 0.4);
                    }
                    .brands-wide-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .brand-card {
                        position: relative;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        background: #fff;
                        overflow: hidden;
                        cursor: pointer;
                        transition: all 0.5s;
                    }
                    .brand-card:hover {
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .brand-card-header {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 2rem 2rem 1rem;
                        background: #fff;
                    }
                    .brand-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: var(--lush-dark);
                        transition: background 0.3s;
                    }
                    .brand-card:hover .brand-dot {
                        background: var(--lush-accent);
                    }
                    .brand-card:hover .brand-name {
                        color: var(--lush-accent);
                    }
                    .brand-name-block {
                        flex: 1;
                    }
                    .brand-name {
                        font-size: 1.25rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0;
                        transition: color 0.3s;
                    }
                    .brand-category {
                        display: inline-block;
                        margin-top: 0.25rem;
                        font-size: 9px;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: rgba(40, 30, 21, 0.5);
                    }
                    .brand-category-equity {
                        color: var(--lush-accent);
                    }
                    .brand-media {
                        position: relative;
                        flex-grow: 1;
                        width: 100%;
                        overflow: hidden;
                    }
                    .brand-media-tall {
                        aspect-ratio: 4 / 5;
                    }
                    .brand-media-wide {
                        aspect-ratio: 16 / 9;
                    }
                    .brand-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 1s ease-out;
                    }
                    .brand-card:hover .brand-media img {
                        transform: scale(1.05);
                    }
                    .brand-media-tint {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        background: rgba(40, 30, 21, 0);
                        transition: background 0.5s;
                    }
                    .brand-card:hover .brand-media-tint {
                        background: rgba(40, 30, 21, 0.1);
                    }
                    .brand-media-cta {
                        position: absolute;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 20;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.5s;
                    }
                    .brand-card:hover .brand-media-cta {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .brand-media-cta-circle {
                        display: flex;
                        padding: 0.75rem;
                        border-radius: 50%;
                        background: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    @media (min-width: 768px) {
                        .brand-name {
                            font-size: 1.5rem;
                        }
                        .brands-wide-row-3 {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .brands-wide-row-2 {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .brands-equity-row {
                            grid-template-columns: repeat(4, 1fr);
                        }
                        .brands-row-label {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
