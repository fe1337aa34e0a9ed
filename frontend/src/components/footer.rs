use chrono::Datelike;
use yew::prelude::*;

use crate::content::{FooterCopy, Link};

fn copyright(year: i32, holder: &str) -> String {
    format!("© {} {}. All rights reserved.", year, holder)
}

fn external(link: &Link) -> bool {
    link.href.starts_with("http")
}

fn link_item(link: &Link) -> Html {
    if external(link) {
        html! {
            <a href={link.href.clone()} target="_blank" rel="noopener noreferrer">{&link.label}</a>
        }
    } else {
        html! { <a href={link.href.clone()}>{&link.label}</a> }
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand_name: String,
    pub copy: FooterCopy,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    let copy = &props.copy;

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#" class="footer-logo">{&props.brand_name}</a>
                    <p>{&copy.blurb}</p>
                    <div class="footer-socials">
                        { for copy.socials.iter().map(link_item) }
                    </div>
                </div>
                { for copy.columns.iter().map(|column| html! {
                    <div class="footer-column">
                        <h3>{&column.title}</h3>
                        <ul>
                            { for column.links.iter().map(|link| html! { <li>{link_item(link)}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{copyright(year, &copy.legal)}</p>
                <div class="footer-legal">
                    { for copy.legal_links.iter().map(link_item) }
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: rgba(255, 255, 255, 0.03);
                        padding: 4rem 1rem 2rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto 3rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .footer-logo {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #fff;
                        text-decoration: none;
                    }
                    .footer-socials, .footer-legal {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .site-footer a { color: rgba(255, 255, 255, 0.7); text-decoration: none; }
                    .site-footer a:hover { color: #fff; }
                    .footer-column ul { list-style: none; padding: 0; }
                    .footer-column li { margin-bottom: 0.75rem; }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_names_year_and_holder() {
        assert_eq!(
            copyright(2026, "Airtel Internet, Mbeya"),
            "© 2026 Airtel Internet, Mbeya. All rights reserved."
        );
    }

    #[test]
    fn only_absolute_urls_open_a_new_tab() {
        let link = |href: &str| Link { label: "x".to_string(), href: href.to_string() };
        assert!(external(&link("https://wa.me/+255742453214")));
        assert!(!external(&link("#faq")));
        assert!(!external(&link("mailto:support@sonicwave.com")));
    }
}
