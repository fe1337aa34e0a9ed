use log::error;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Nav;
use crate::content::Brand;
use crate::pages::{
    contact::ContactSection,
    faq::FaqSection,
    features::FeaturesSection,
    hero::HeroSection,
    pricing::PricingSection,
    testimonials::TestimonialsSection,
};

pub fn section_heading(title: &str, subtitle: &str) -> Html {
    html! {
        <>
            <h2>{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub brand: String,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let brand = use_memo(|id| Brand::load(id), props.brand.clone());

    // Scroll to top when the brand changes
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.brand.clone(),
    );

    let brand = match &*brand {
        Ok(brand) => brand,
        Err(e) => {
            error!("Failed to load brand content: {}", e);
            return html! {
                <div class="content-error">
                    <h1>{"This page is unavailable"}</h1>
                    <p>{e.to_string()}</p>
                </div>
            };
        }
    };

    html! {
        <main class="landing-page">
            <Nav brand_name={brand.name.clone()} />
            <HeroSection hero={brand.hero.clone()} />
            <FeaturesSection section={brand.features.clone()} />
            <TestimonialsSection section={brand.testimonials.clone()} />
            <PricingSection section={brand.pricing.clone()} />
            <ContactSection copy={brand.contact.clone()} intake={brand.intake.clone()} />
            <FaqSection section={brand.faq.clone()} />
            <Footer brand_name={brand.name.clone()} copy={brand.footer.clone()} />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .container.narrow { max-width: 768px; }
                .landing-section { padding: 5rem 0; }
                .landing-section.muted { background: rgba(255, 255, 255, 0.03); }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .landing-section h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .section-subtitle {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .card-grid {
                    display: grid;
                    gap: 2rem;
                }
                .card-grid.two { grid-template-columns: repeat(2, 1fr); }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                }
                .button-primary, .button-outline {
                    padding: 0.8rem 1.6rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .button-primary {
                    background: #1E90FF;
                    color: #fff;
                    border: none;
                }
                .button-primary:disabled { opacity: 0.6; cursor: default; }
                .button-outline {
                    background: transparent;
                    color: #fff;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .full { width: 100%; }

                .hero-section { padding: 10rem 0 6rem; position: relative; }
                .hero-content {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .hero-text, .hero-visual { flex: 1; }
                .hero-section h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .accent { color: #7EB2FF; }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.7);
                    max-width: 28rem;
                    margin-bottom: 2rem;
                }
                .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
                .hero-proof { display: flex; gap: 1.5rem; margin-top: 2rem; }
                .proof-item { display: flex; align-items: center; gap: 0.75rem; }
                .avatar-stack { display: flex; }
                .avatar-dot {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 2px solid #1a1a1a;
                    background: rgba(30, 144, 255, 0.3);
                    margin-left: -0.5rem;
                }
                .stars { color: #facc15; }
                .hero-visual { position: relative; }
                .hero-glow {
                    position: absolute;
                    inset: -4px;
                    background: linear-gradient(45deg, rgba(30, 144, 255, 0.2), rgba(126, 178, 255, 0.2));
                    border-radius: 50%;
                    filter: blur(48px);
                    opacity: 0.3;
                }
                .hero-visual img {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    border-radius: 16px;
                    box-shadow: 0 16px 32px rgba(0,0,0,0.3);
                }

                .feature-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 12px;
                    background: rgba(30, 144, 255, 0.1);
                    margin-bottom: 1rem;
                    font-size: 1.5rem;
                }
                .quote { font-style: italic; margin: 1rem 0 1.5rem; }
                .author { display: flex; align-items: center; gap: 1rem; }
                .avatar { width: 2.5rem; height: 2.5rem; border-radius: 50%; object-fit: cover; }
                .author-title { color: rgba(255, 255, 255, 0.6); font-size: 0.875rem; }

                .plan-card.popular {
                    border-color: rgba(30, 144, 255, 0.5);
                    box-shadow: 0 8px 32px rgba(30, 144, 255, 0.1);
                }
                .badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: #1E90FF;
                    font-size: 0.75rem;
                    margin-bottom: 1rem;
                }
                .price { font-size: 1.875rem; font-weight: bold; }
                .period, .plan-description { color: rgba(255, 255, 255, 0.6); }
                .plan-features { list-style: none; padding: 0; margin: 1.5rem 0 2rem; }
                .plan-features li { margin-bottom: 0.75rem; }
                .check { color: #22c55e; margin-right: 0.5rem; }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    align-items: center;
                }
                .contact-detail { display: flex; gap: 1rem; margin-top: 1.5rem; }
                .contact-icon {
                    width: 2.75rem;
                    height: 2.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(30, 144, 255, 0.1);
                    color: #7EB2FF;
                }
                .form-field { margin-bottom: 1.25rem; display: flex; flex-direction: column; gap: 0.5rem; }
                .form-field input, .form-field select, .form-field textarea {
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.2);
                    color: #fff;
                    font-size: 1rem;
                }
                .form-field textarea { resize: none; min-height: 6rem; }
                .field-error { color: #ef4444; font-size: 0.875rem; }
                .hidden-field { display: none; }

                .content-error {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    background: #1a1a1a;
                }

                @media (max-width: 768px) {
                    .hero-content { flex-direction: column; }
                    .hero-section h1 { font-size: 2.25rem; }
                    .card-grid.two, .card-grid.three, .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </main>
    }
}
