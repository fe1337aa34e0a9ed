use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::{Entrance, Motion, Reveal};
use crate::content::{Faq, Section};
use crate::pages::landing::section_heading;
use crate::reveal::{use_in_view, RevealOptions};

/// Single-open accordion: opening an item closes the others, clicking the
/// open item closes it.
fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub section: Section<Faq>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqProps) -> Html {
    let section = &props.section;
    let open = use_state(|| None::<usize>);
    let (header_ref, in_view) = use_in_view(RevealOptions::section());

    html! {
        <section id="faq" class="landing-section">
            <div class="container narrow">
                <Reveal class="section-header" node_ref={header_ref} shown={in_view}>
                    { section_heading(&section.title, &section.subtitle) }
                </Reveal>
                { for section.items.iter().enumerate().map(|(index, faq)| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(toggled(*open, index)))
                    };
                    html! {
                        <Reveal
                            shown={in_view}
                            motion={Motion::staggered(Entrance::FromBelow(10), index, 0.1).duration(0.3)}
                        >
                            <FaqItem
                                question={faq.question.clone()}
                                answer={faq.answer.clone()}
                                is_open={*open == Some(index)}
                                on_toggle={on_toggle}
                            />
                        </Reveal>
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-out;
                    color: rgba(255, 255, 255, 0.7);
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding-bottom: 1.25rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        assert_eq!(toggled(None, 2), Some(2));
        assert_eq!(toggled(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggled(Some(3), 3), None);
    }
}
