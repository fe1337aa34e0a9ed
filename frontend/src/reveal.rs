//! Scroll-triggered visibility for reveal animations.
//!
//! `use_in_view` hands out a `NodeRef` and a flag that turns true once the
//! referenced element is visible enough. The decision logic lives in
//! `RevealLatch` so it can be exercised without a browser.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            trigger_once: false,
        }
    }
}

impl RevealOptions {
    /// What every landing section uses: 10% visible, animate once.
    pub fn section() -> Self {
        Self::default().with_threshold(0.1).once()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn once(mut self) -> Self {
        self.trigger_once = true;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// One intersection report from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[cfg(test)]
impl IntersectionSample {
    pub fn visible(ratio: f64) -> Self {
        Self {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    Unchanged,
    Shown,
    Hidden,
    /// Shown for good; the caller should stop observing.
    Latched,
}

#[derive(Clone, Debug)]
pub struct RevealLatch {
    options: RevealOptions,
    in_view: bool,
    latched: bool,
}

impl RevealLatch {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            in_view: false,
            latched: false,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> RevealStep {
        if self.latched {
            return RevealStep::Unchanged;
        }

        let reached = sample.is_intersecting && sample.ratio >= self.options.threshold();

        if reached {
            if self.options.trigger_once() {
                self.in_view = true;
                self.latched = true;
                return RevealStep::Latched;
            }
            if !self.in_view {
                self.in_view = true;
                return RevealStep::Shown;
            }
        } else if self.in_view && !self.options.trigger_once() {
            self.in_view = false;
            return RevealStep::Hidden;
        }

        RevealStep::Unchanged
    }
}

/// A live observation of one element. Dropping it unobserves the element
/// and disconnects the observer.
pub struct Subscription {
    observer: IntersectionObserver,
    target: Element,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Subscription {
    pub fn observe(
        target: Element,
        options: RevealOptions,
        on_change: Callback<bool>,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::new(options);
        let watched = target.clone();

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    };
                    match latch.observe(sample) {
                        RevealStep::Unchanged => {}
                        RevealStep::Latched => {
                            on_change.emit(latch.in_view());
                            observer.unobserve(&watched);
                        }
                        RevealStep::Shown | RevealStep::Hidden => on_change.emit(latch.in_view()),
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(&target);

        Ok(Self {
            observer,
            target,
            _callback: callback,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

#[hook]
pub fn use_in_view(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |options| {
                // Nothing attached means nothing to watch; the flag stays false.
                let subscription = node.cast::<Element>().and_then(|element| {
                    if !observer_supported() {
                        warn!("IntersectionObserver unavailable, showing content immediately");
                        in_view.set(true);
                        return None;
                    }
                    let setter = in_view.setter();
                    match Subscription::observe(element, *options, Callback::from(move |visible| setter.set(visible))) {
                        Ok(subscription) => Some(subscription),
                        Err(e) => {
                            warn!("Failed to observe element: {:?}", e);
                            in_view.set(true);
                            None
                        }
                    }
                });
                move || drop(subscription)
            },
            options,
        );
    }

    (node, *in_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRACTIONS: [f64; 6] = [0.0, 0.05, 0.1, 0.25, 0.5, 1.0];
    const THRESHOLDS: [f64; 5] = [0.01, 0.1, 0.3, 0.5, 1.0];

    #[test]
    fn signal_tracks_threshold_before_latching() {
        for &t in &THRESHOLDS {
            for &f in &FRACTIONS {
                let mut latch = RevealLatch::new(RevealOptions::default().with_threshold(t));
                latch.observe(IntersectionSample::visible(f));
                assert_eq!(latch.in_view(), f >= t, "threshold {} fraction {}", t, f);
            }
        }
    }

    #[test]
    fn zero_threshold_needs_an_actual_intersection() {
        let mut latch = RevealLatch::new(RevealOptions::default());
        assert_eq!(latch.observe(IntersectionSample::visible(0.0)), RevealStep::Unchanged);
        assert!(!latch.in_view());

        let edge = IntersectionSample { ratio: 0.0, is_intersecting: true };
        assert_eq!(latch.observe(edge), RevealStep::Shown);
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::new(RevealOptions::section());
        assert_eq!(latch.observe(IntersectionSample::visible(0.4)), RevealStep::Latched);
        for f in [0.05, 0.0, 0.9, 0.0] {
            assert_eq!(latch.observe(IntersectionSample::visible(f)), RevealStep::Unchanged);
            assert!(latch.in_view());
        }
    }

    #[test]
    fn latch_waits_for_threshold() {
        let mut latch = RevealLatch::new(RevealOptions::section());
        assert_eq!(latch.observe(IntersectionSample::visible(0.05)), RevealStep::Unchanged);
        assert!(!latch.in_view());
        assert_eq!(latch.observe(IntersectionSample::visible(0.2)), RevealStep::Latched);
    }

    #[test]
    fn without_latch_signal_follows_both_directions() {
        let mut latch = RevealLatch::new(RevealOptions::default().with_threshold(0.5));
        let steps: Vec<_> = [0.6, 0.7, 0.2, 0.1, 0.8]
            .iter()
            .map(|&f| latch.observe(IntersectionSample::visible(f)))
            .collect();
        assert_eq!(
            steps,
            vec![
                RevealStep::Shown,
                RevealStep::Unchanged,
                RevealStep::Hidden,
                RevealStep::Unchanged,
                RevealStep::Shown,
            ]
        );
    }

    #[test]
    fn fraction_equal_to_threshold_counts() {
        let mut latch = RevealLatch::new(RevealOptions::default().with_threshold(0.1));
        assert_eq!(latch.observe(IntersectionSample::visible(0.1)), RevealStep::Shown);

        let mut full = RevealLatch::new(RevealOptions::default().with_threshold(1.0));
        assert_eq!(full.observe(IntersectionSample::visible(1.0)), RevealStep::Shown);
    }

    #[test]
    fn fraction_just_below_threshold_stays_hidden() {
        let mut latch = RevealLatch::new(RevealOptions::default().with_threshold(0.1));
        assert_eq!(latch.observe(IntersectionSample::visible(0.0995)), RevealStep::Unchanged);
        assert!(!latch.in_view());

        let mut full = RevealLatch::new(RevealOptions::section().with_threshold(1.0));
        assert_eq!(full.observe(IntersectionSample::visible(0.9991)), RevealStep::Unchanged);
        assert!(!full.in_view());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealOptions::default().with_threshold(1.7).threshold(), 1.0);
        assert_eq!(RevealOptions::default().with_threshold(-0.3).threshold(), 0.0);
        assert_eq!(RevealOptions::default().with_threshold(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn unobserved_latch_reports_hidden() {
        let latch = RevealLatch::new(RevealOptions::section());
        assert!(!latch.in_view());
    }
}
