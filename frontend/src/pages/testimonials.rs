use yew::prelude::*;

use crate::components::reveal::{Entrance, Motion, Reveal};
use crate::content::{Section, Testimonial};
use crate::pages::landing::section_heading;
use crate::reveal::{use_in_view, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub section: Section<Testimonial>,
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsProps) -> Html {
    let section = &props.section;
    let (header_ref, in_view) = use_in_view(RevealOptions::section());

    html! {
        <section id="testimonials" class="landing-section">
            <div class="container">
                <Reveal class="section-header" node_ref={header_ref} shown={in_view}>
                    { section_heading(&section.title, &section.subtitle) }
                </Reveal>
                <div class="card-grid three">
                    { for section.items.iter().enumerate().map(|(index, testimonial)| html! {
                        <Reveal
                            class="card testimonial-card"
                            shown={in_view}
                            motion={Motion::staggered(Entrance::FromBelow(20), index, 0.1)}
                        >
                            <div class="stars">{"★★★★★"}</div>
                            <p class="quote">{format!("\"{}\"", testimonial.quote)}</p>
                            <div class="author">
                                <img class="avatar" src={testimonial.avatar.clone()} alt={testimonial.author.clone()} />
                                <div>
                                    <h4>{&testimonial.author}</h4>
                                    <p class="author-title">{&testimonial.title}</p>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
