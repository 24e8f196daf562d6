use yew::prelude::*;

use crate::sections::{
    about::About,
    footer::Footer,
    hero::Hero,
    metrics::Metrics,
    news::News,
    portfolio::{BrandsGrid, PortfolioIntro},
    process::WorkProcess,
    retail::RetailLocations,
    stats::{DetailedStats, StatsBar},
    sustainability::Sustainability,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <Hero />
            <StatsBar />
            <About />
            <News />
            <PortfolioIntro />
            <BrandsGrid />
            <Metrics />
            <WorkProcess />
            <Sustainability />
            <RetailLocations />
            <DetailedStats />
            <Footer />
        </main>
    }
}
