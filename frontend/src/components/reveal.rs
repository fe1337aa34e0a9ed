use yew::prelude::*;

use crate::reveal::{use_in_view, RevealOptions};

/// Where a revealed block comes from while hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    FromBelow(i32),
    FromLeft(i32),
    FromRight(i32),
    Zoom(f64),
}

impl Entrance {
    fn hidden_transform(&self) -> String {
        match self {
            Entrance::FromBelow(px) => format!("translateY({}px)", px),
            Entrance::FromLeft(px) => format!("translateX(-{}px)", px),
            Entrance::FromRight(px) => format!("translateX({}px)", px),
            Entrance::Zoom(scale) => format!("scale({})", scale),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    pub duration: f64,
    pub delay: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            entrance: Entrance::FromBelow(20),
            duration: 0.5,
            delay: 0.0,
        }
    }
}

impl Motion {
    pub fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            ..Self::default()
        }
    }

    /// List items wait `step` seconds per position.
    pub fn staggered(entrance: Entrance, index: usize, step: f64) -> Self {
        Self::new(entrance).delayed(index as f64 * step)
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delayed(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn style(&self, visible: bool) -> String {
        let transition = format!(
            "transition: opacity {d:.2}s ease-out {w:.2}s, transform {d:.2}s ease-out {w:.2}s;",
            d = self.duration,
            w = self.delay,
        );
        if visible {
            format!("opacity: 1; transform: none; {}", transition)
        } else {
            format!(
                "opacity: 0; transform: {}; {}",
                self.entrance.hidden_transform(),
                transition
            )
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub motion: Motion,
    #[prop_or(RevealOptions::section())]
    pub options: RevealOptions,
    /// Drive the block from a parent's signal instead of observing it here.
    #[prop_or_default]
    pub shown: Option<bool>,
    /// Attached when `shown` is set, so the parent can observe this block.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (own_ref, own_in_view) = use_in_view(props.options);

    // With an external signal the own ref stays detached and nothing is observed.
    let (node, visible) = match props.shown {
        Some(shown) => (props.node_ref.clone(), shown),
        None => (own_ref, own_in_view),
    };

    html! {
        <div ref={node} class={props.class.clone()} style={props.motion.style(visible)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_is_offset_and_transparent() {
        let style = Motion::default().style(false);
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
        assert!(style.contains("opacity 0.50s ease-out 0.00s"));
    }

    #[test]
    fn visible_state_is_natural_and_opaque() {
        let style = Motion::new(Entrance::FromLeft(20)).style(true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn entrances_map_to_transforms() {
        assert!(Motion::new(Entrance::FromLeft(20)).style(false).contains("translateX(-20px)"));
        assert!(Motion::new(Entrance::FromRight(20)).style(false).contains("translateX(20px)"));
        assert!(Motion::new(Entrance::Zoom(0.8)).style(false).contains("scale(0.8)"));
    }

    #[test]
    fn stagger_scales_with_index() {
        let third = Motion::staggered(Entrance::FromBelow(10), 3, 0.1).duration(0.3);
        assert!(third.style(true).contains("opacity 0.30s ease-out 0.30s"));
        assert_eq!(Motion::staggered(Entrance::FromBelow(10), 0, 0.1).delay, 0.0);
    }
}
