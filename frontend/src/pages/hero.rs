use yew::prelude::*;

use crate::components::navbar::scroll_callback;
use crate::components::reveal::{Entrance, Motion, Reveal};
use crate::content::Hero;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: Hero,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.hero;

    html! {
        <section id="hero" class="hero-section">
            <div class="container hero-content">
                <Reveal class="hero-text">
                    <h1>
                        {&hero.headline}
                        <br />
                        <span class="accent">{&hero.accent}</span>
                    </h1>
                    <p class="hero-subtitle">{&hero.subtitle}</p>
                    <div class="hero-actions">
                        <button class="button-primary" onclick={scroll_callback("contact")}>
                            {&hero.primary_cta}
                        </button>
                        <button class="button-outline" onclick={scroll_callback("features")}>
                            {&hero.secondary_cta}
                        </button>
                    </div>
                    <div class="hero-proof">
                        <div class="proof-item">
                            <div class="avatar-stack">
                                { for (0..4).map(|_| html! { <span class="avatar-dot"></span> }) }
                            </div>
                            <p><strong>{&hero.customers}</strong>{" happy customers"}</p>
                        </div>
                        <div class="proof-item">
                            <span class="stars">{"★★★★★"}</span>
                            <p><strong>{&hero.rating}</strong>{" rating"}</p>
                        </div>
                    </div>
                </Reveal>
                <Reveal class="hero-visual" motion={Motion::new(Entrance::Zoom(0.8)).delayed(0.2)}>
                    <div class="hero-glow"></div>
                    <img src={hero.image.clone()} alt={hero.image_alt.clone()} />
                </Reveal>
            </div>
        </section>
    }
}
