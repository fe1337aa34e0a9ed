use yew::prelude::*;

use crate::components::navbar::scroll_callback;
use crate::components::reveal::{Entrance, Motion, Reveal};
use crate::content::{Plan, Section};
use crate::pages::landing::section_heading;

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: Plan,
    index: usize,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let button_class = if plan.popular { "button-primary" } else { "button-outline" };

    html! {
        <Reveal
            class={classes!("card", "plan-card", plan.popular.then(|| "popular"))}
            motion={Motion::staggered(Entrance::FromBelow(20), props.index, 0.1)}
        >
            if plan.popular {
                <div class="badge">{"Most Popular"}</div>
            }
            <h3>{&plan.title}</h3>
            <div class="plan-price">
                <span class="price">{&plan.price}</span>
                <span class="period">{format!(" / {}", plan.period)}</span>
            </div>
            <p class="plan-description">{&plan.description}</p>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span>{feature}</li>
                }) }
            </ul>
            <button class={classes!(button_class, "full")} onclick={scroll_callback("contact")}>
                {"Get Started"}
            </button>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub section: Section<Plan>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingProps) -> Html {
    let section = &props.section;
    let columns = if section.items.len() >= 3 { "three" } else { "two" };

    html! {
        <section id="pricing" class="landing-section muted">
            <div class="container">
                <Reveal class="section-header">
                    { section_heading(&section.title, &section.subtitle) }
                </Reveal>
                <div class={classes!("card-grid", columns)}>
                    { for section.items.iter().enumerate().map(|(index, plan)| html! {
                        <PlanCard plan={plan.clone()} index={index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
