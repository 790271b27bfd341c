//! Shared loading overlay, reference-counted across concurrent requests.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Once shown, the overlay stays up at least this long so short requests
/// don't flash it.
pub const MIN_DISPLAY_TIME_MS: f64 = 800.0;

/// What the caller must do to the overlay after releasing a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideAction {
    /// Other requests are still in flight.
    None,
    /// The minimum display time has passed.
    HideNow,
    /// Hide after this many milliseconds, unless a new request starts
    /// in the meantime.
    HideAfter(u32),
}

/// Counter and timing logic behind the overlay. Timestamps come in as
/// arguments so the scheduling side stays separate.
#[derive(Debug)]
pub struct LoadingCore {
    active: u32,
    visible: bool,
    shown_at: f64,
    min_display_ms: f64,
}

impl Default for LoadingCore {
    fn default() -> Self {
        Self::new(MIN_DISPLAY_TIME_MS)
    }
}

impl LoadingCore {
    pub fn new(min_display_ms: f64) -> Self {
        Self {
            active: 0,
            visible: false,
            shown_at: 0.0,
            min_display_ms,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Register a request. Returns true when the overlay transitions from
    /// hidden to shown. The display clock restarts whenever the counter
    /// leaves zero, including while a deferred hide is pending.
    pub fn begin(&mut self, now_ms: f64) -> bool {
        self.active += 1;
        if self.active == 1 {
            self.shown_at = now_ms;
            if !self.visible {
                self.visible = true;
                return true;
            }
        }
        false
    }

    /// Release a registration. An unbalanced release is ignored.
    pub fn end(&mut self, now_ms: f64) -> HideAction {
        if self.active == 0 {
            return HideAction::None;
        }
        self.active -= 1;
        if self.active > 0 {
            return HideAction::None;
        }
        let elapsed = now_ms - self.shown_at;
        if elapsed >= self.min_display_ms {
            self.visible = false;
            HideAction::HideNow
        } else {
            HideAction::HideAfter((self.min_display_ms - elapsed) as u32)
        }
    }

    /// Called when a [`HideAction::HideAfter`] timer fires. Returns true if
    /// the overlay should actually hide; a request started in the interim
    /// keeps it up.
    pub fn deferred_hide(&mut self) -> bool {
        if self.active == 0 && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

/// Handle components use to register work with the overlay.
#[derive(Clone)]
pub struct LoadingHandle {
    core: Rc<RefCell<LoadingCore>>,
    visible: UseStateHandle<bool>,
}

impl PartialEq for LoadingHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && self.visible == other.visible
    }
}

impl LoadingHandle {
    pub fn is_visible(&self) -> bool {
        *self.visible
    }

    pub fn show(&self) {
        if self.core.borrow_mut().begin(js_sys::Date::now()) {
            self.visible.set(true);
        }
    }

    pub fn hide(&self) {
        let action = self.core.borrow_mut().end(js_sys::Date::now());
        match action {
            HideAction::None => {}
            HideAction::HideNow => self.visible.set(false),
            HideAction::HideAfter(delay_ms) => {
                let core = self.core.clone();
                let visible = self.visible.clone();
                Timeout::new(delay_ms, move || {
                    if core.borrow_mut().deferred_hide() {
                        visible.set(false);
                    }
                })
                .forget();
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProviderProps {
    pub children: Children,
}

#[function_component]
pub fn LoadingProvider(props: &LoadingProviderProps) -> Html {
    let visible = use_state(|| false);
    let core = use_mut_ref(LoadingCore::default);
    let handle = LoadingHandle { core, visible };

    html! {
        <ContextProvider<LoadingHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<LoadingHandle>>
    }
}

#[hook]
pub fn use_loading() -> LoadingHandle {
    use_context::<LoadingHandle>()
        .expect("use_loading must be used within a LoadingProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_requests_show_the_overlay_once() {
        let mut core = LoadingCore::new(800.0);

        assert!(core.begin(0.0));
        assert!(!core.begin(100.0));
        assert!(!core.begin(200.0));

        assert_eq!(core.end(900.0), HideAction::None);
        assert_eq!(core.end(950.0), HideAction::None);
        assert_eq!(core.end(1000.0), HideAction::HideNow);
        assert!(!core.is_visible());
    }

    #[test]
    fn early_completion_defers_the_hide() {
        let mut core = LoadingCore::new(800.0);

        core.begin(0.0);
        assert_eq!(core.end(300.0), HideAction::HideAfter(500));
        assert!(core.is_visible());

        assert!(core.deferred_hide());
        assert!(!core.is_visible());
    }

    #[test]
    fn late_completion_hides_immediately() {
        let mut core = LoadingCore::new(800.0);

        core.begin(0.0);
        assert_eq!(core.end(800.0), HideAction::HideNow);
    }

    #[test]
    fn interim_request_cancels_a_deferred_hide() {
        let mut core = LoadingCore::new(800.0);

        core.begin(0.0);
        assert_eq!(core.end(100.0), HideAction::HideAfter(700));

        // New request arrives before the timer fires. The overlay never
        // transitioned, and the timer must leave it up.
        assert!(!core.begin(200.0));
        assert!(!core.deferred_hide());
        assert!(core.is_visible());

        // Display clock restarted at 200, so hiding at 900 is early by 100.
        assert_eq!(core.end(900.0), HideAction::HideAfter(100));
        assert!(core.deferred_hide());
    }

    #[test]
    fn unbalanced_release_is_ignored() {
        let mut core = LoadingCore::new(800.0);
        assert_eq!(core.end(0.0), HideAction::None);

        core.begin(0.0);
        assert_eq!(core.end(900.0), HideAction::HideNow);
        assert_eq!(core.end(1000.0), HideAction::None);
    }
}
