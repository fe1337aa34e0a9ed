use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::{Entrance, Motion, Reveal};
use crate::components::toast::{Notice, NoticeKind, Toast};
use crate::config;
use crate::contact::form::{Acknowledgement, ContactForm, FieldError, Input};
use crate::contact::intake::IntakeStrategy;
use crate::content::ContactCopy;
use crate::reveal::{use_in_view, RevealOptions};

fn field_error(error: &Option<FieldError>) -> Html {
    match error {
        Some(e) => html! { <p class="field-error">{e.to_string()}</p> },
        None => html! {},
    }
}

fn notice_for(ack: &Acknowledgement, copy: &ContactCopy, serial: u32) -> Notice {
    match ack {
        Acknowledgement::Received => Notice {
            kind: NoticeKind::Success,
            text: copy.success_message.clone(),
            serial,
        },
        Acknowledgement::Failed(_) => Notice {
            kind: NoticeKind::Failure,
            text: copy.failure_message.clone(),
            serial,
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub copy: ContactCopy,
    pub intake: IntakeStrategy,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<Notice>);
    let serial: Rc<RefCell<u32>> = use_mut_ref(|| 0);
    let (info_ref, in_view) = use_in_view(RevealOptions::section());

    let on_text = |input: Input| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            next.set(input, value);
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            next.set(Input::Message, value);
            form.set(next);
        })
    };

    let on_location = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.set(Input::Location, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let serial = serial.clone();
        let copy = props.copy.clone();
        let intake = props.intake.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let submission = next.begin_submit(&copy.rules());
            form.set(next.clone());
            let Some(submission) = submission else {
                return;
            };

            let form = form.clone();
            let notice = notice.clone();
            let serial = serial.clone();
            let copy = copy.clone();
            let intake = intake.clone();
            spawn_local(async move {
                let outcome = intake.submit(&submission).await;
                if let Err(ref e) = outcome {
                    error!("Contact submission failed: {}", e);
                }
                let ack = next.finish(outcome);
                form.set(next);

                let id = {
                    let mut serial = serial.borrow_mut();
                    *serial += 1;
                    *serial
                };
                notice.set(Some(notice_for(&ack, &copy, id)));
            });
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let copy = &props.copy;
    let fields = &form.fields;
    let busy = form.is_submitting();

    html! {
        <section id="contact" class="landing-section">
            <div class="container contact-grid">
                <Reveal
                    class="contact-info"
                    node_ref={info_ref}
                    shown={in_view}
                    motion={Motion::new(Entrance::FromLeft(20))}
                >
                    <h2>{&copy.title}</h2>
                    <p class="section-subtitle">{&copy.blurb}</p>
                    <div class="contact-detail">
                        <span class="contact-icon">{"✉"}</span>
                        <div><h3>{"Email Us"}</h3><p>{&copy.email}</p></div>
                    </div>
                    <div class="contact-detail">
                        <span class="contact-icon">{"☎"}</span>
                        <div><h3>{"Call Us"}</h3><p>{&copy.phone}</p></div>
                    </div>
                    <div class="contact-detail">
                        <span class="contact-icon">{"⌖"}</span>
                        <div><h3>{"Visit Us"}</h3><p>{&copy.address}</p></div>
                    </div>
                </Reveal>

                <Reveal
                    class="card contact-card"
                    shown={in_view}
                    motion={Motion::new(Entrance::FromRight(20)).delayed(0.2)}
                >
                    <h3>{&copy.form_title}</h3>
                    <form
                        name={config::FORM_NAME}
                        method="POST"
                        data-netlify="true"
                        netlify-honeypot="bot-field"
                        onsubmit={onsubmit}
                        novalidate={true}
                    >
                        <input type="hidden" name="form-name" value={config::FORM_NAME} />
                        <p class="hidden-field">
                            <label>
                                {"Don't fill this out if you're human: "}
                                <input
                                    name="bot-field"
                                    tabindex="-1"
                                    autocomplete="off"
                                    value={fields.bot_field.clone()}
                                    oninput={on_text(Input::BotField)}
                                />
                            </label>
                        </p>

                        <div class="form-field">
                            <label for="contact-name">{"Name"}</label>
                            <input
                                id="contact-name"
                                name="name"
                                placeholder="Your name"
                                value={fields.name.clone()}
                                oninput={on_text(Input::Name)}
                                disabled={busy}
                            />
                            { field_error(&form.errors.name) }
                        </div>

                        if copy.collect_email {
                            <div class="form-field">
                                <label for="contact-email">{"Email"}</label>
                                <input
                                    id="contact-email"
                                    name="email"
                                    type="email"
                                    placeholder="your.email@example.com"
                                    value={fields.email.clone()}
                                    oninput={on_text(Input::Email)}
                                    disabled={busy}
                                />
                                { field_error(&form.errors.email) }
                            </div>
                        }

                        <div class="form-field">
                            <label for="contact-phone">{"Phone Number"}</label>
                            <input
                                id="contact-phone"
                                name="phone"
                                type="tel"
                                placeholder="Your phone number"
                                value={fields.phone.clone()}
                                oninput={on_text(Input::Phone)}
                                disabled={busy}
                            />
                            { field_error(&form.errors.phone) }
                        </div>

                        <div class="form-field">
                            <label for="contact-location">{"Location"}</label>
                            <select
                                id="contact-location"
                                name="location"
                                onchange={on_location}
                                disabled={busy}
                            >
                                <option value="" selected={fields.location.is_empty()}>
                                    {"Select your region"}
                                </option>
                                { for copy.regions.iter().map(|region| html! {
                                    <option value={region.clone()} selected={&fields.location == region}>
                                        {region}
                                    </option>
                                }) }
                            </select>
                            { field_error(&form.errors.location) }
                        </div>

                        <div class="form-field">
                            <label for="contact-message">{"Message (Optional)"}</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                placeholder={copy.message_placeholder.clone()}
                                value={fields.message.clone()}
                                oninput={on_message}
                                disabled={busy}
                            />
                        </div>

                        <button type="submit" class="button-primary full" disabled={busy}>
                            { if busy { "Sending..." } else { copy.submit_label.as_str() } }
                        </button>
                    </form>
                </Reveal>
            </div>
            <Toast notice={(*notice).clone()} on_dismiss={on_dismiss} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::intake::SubmissionError;
    use crate::content::Brand;

    #[test]
    fn acknowledgements_use_brand_copy() {
        let brand = Brand::load("airtel").unwrap();
        let ok = notice_for(&Acknowledgement::Received, &brand.contact, 1);
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.text, brand.contact.success_message);

        let failed = notice_for(
            &Acknowledgement::Failed(SubmissionError::TimedOut),
            &brand.contact,
            2,
        );
        assert_eq!(failed.kind, NoticeKind::Failure);
        assert_eq!(failed.text, brand.contact.failure_message);
        assert_ne!(ok, failed);
    }
}
