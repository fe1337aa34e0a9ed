use yew::prelude::*;

use crate::components::reveal::{Entrance, Motion, Reveal};
use crate::content::{Feature, Section};
use crate::pages::landing::section_heading;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub section: Section<Feature>,
}

#[function_component(FeaturesSection)]
pub fn features_section(props: &FeaturesProps) -> Html {
    let section = &props.section;

    html! {
        <section id="features" class="landing-section muted">
            <div class="container">
                <Reveal class="section-header">
                    { section_heading(&section.title, &section.subtitle) }
                </Reveal>
                <div class="card-grid three">
                    { for section.items.iter().enumerate().map(|(index, feature)| html! {
                        // Each card watches itself so rows lower down reveal as they scroll in.
                        <Reveal
                            class="card feature-card"
                            motion={Motion::staggered(Entrance::FromBelow(20), index, 0.1)}
                        >
                            <div class="feature-icon">{&feature.icon}</div>
                            <h3>{&feature.title}</h3>
                            <p>{&feature.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
