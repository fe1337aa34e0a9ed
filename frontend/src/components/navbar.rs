use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

pub const SECTIONS: &[(&str, &str)] = &[
    ("features", "Features"),
    ("testimonials", "Testimonials"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
    ("faq", "FAQ"),
];

/// Smooth-scrolls to the section with the given element id, if it exists.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand_name: String,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_OFFSET;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let to_top = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={to_top}>{&props.brand_name}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|(id, label)| html! {
                        <button class="nav-link" onclick={go_to(*id)}>{*label}</button>
                    }) }
                    <button class="nav-cta" onclick={go_to("contact")}>{"Get Started"}</button>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.3s ease;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(26, 26, 26, 0.8);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 8px rgba(0,0,0,0.2);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.8);
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .nav-link:hover { color: #fff; }
                    .nav-cta {
                        background: #1E90FF;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.6rem 1.2rem;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: stretch;
                            gap: 0.5rem;
                            padding: 1rem;
                            background: rgba(26, 26, 26, 0.95);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                        .nav-link { text-align: left; padding: 0.5rem 1rem; }
                    }
                "#}
            </style>
        </nav>
    }
}
