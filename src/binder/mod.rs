// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Binding of navigation targets to controls

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    link::{LinkKind, is_web_url},
    surface::{ARIA_DISABLED, Control, ControlId, Surface, with_control},
};

/// Target of disabled anchors, so that they do not jump anywhere.
pub const NOOP_HREF: &str = "javascript:void(0)";

/// Opacity of disabled controls.
pub const DISABLED_OPACITY: &str = "0.45";

/// Navigation capabilities of the host
pub trait Navigator {
    /// Navigate the current browsing context.
    fn navigate(&mut self, href: &str);

    /// Open a new browsing context without an opener reference.
    ///
    /// Returns `false` if the host blocked it, e.g. by a popup blocker.
    fn open_new_context(&mut self, href: &str) -> bool;

    /// Trigger the download of a resource.
    fn download(&mut self, href: &str, file_name: &str);
}

/// Disable a control visually and semantically.
///
/// Anchors also lose their navigation target.
pub fn disable(control: &mut dyn Control) {
    control.set_attribute(ARIA_DISABLED, "true");
    control.set_style("opacity", DISABLED_OPACITY);
    control.set_style("pointer-events", "none");
    if control.is_anchor() {
        control.set_attribute("href", NOOP_HREF);
    }
}

/// Enable a control without touching its navigation target.
pub fn enable(control: &mut dyn Control) {
    control.set_attribute(ARIA_DISABLED, "false");
    control.set_style("opacity", "");
    control.set_style("pointer-events", "");
}

/// Make a control open its target in a new browsing context that
/// has no reference back to the opener.
pub fn open_in_new_context(control: &mut dyn Control) {
    control.set_attribute("target", "_blank");
    control.set_attribute("rel", "noopener");
}

/// Bind a navigation target to a control.
///
/// An empty `href` disables the control. Web targets open in a new
/// browsing context. Applying the same `href` again has no further effect.
pub fn apply_href(control: &mut dyn Control, href: &str) {
    if href.is_empty() {
        disable(control);
        return;
    }
    enable(control);
    control.set_attribute("href", href);
    if is_web_url(href) {
        open_in_new_context(control);
    } else {
        control.remove_attribute("target");
        control.remove_attribute("rel");
    }
}

/// How activated links are followed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Rely on the default behavior of links.
    #[default]
    Native,

    /// Intercept activation and navigate manually.
    ///
    /// Some in-app browsers silently swallow taps on links.
    Forced,
}

/// Binds targets to the controls of a surface
///
/// In [`NavigationMode::Forced`] the binder remembers which controls
/// have an interception handler, so that each one is attached only once.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    mode: NavigationMode,
    intercepted: BTreeSet<ControlId>,
}

impl Binder {
    /// Create a binder.
    #[must_use]
    pub const fn new(mode: NavigationMode) -> Self {
        Self {
            mode,
            intercepted: BTreeSet::new(),
        }
    }

    /// Check if activation of a control is intercepted.
    #[must_use]
    pub fn is_intercepted(&self, id: ControlId) -> bool {
        self.intercepted.contains(&id)
    }

    /// Number of attached interception handlers.
    #[must_use]
    pub fn intercepted_count(&self) -> usize {
        self.intercepted.len()
    }

    /// [`apply_href()`] on a control of the surface.
    ///
    /// Does nothing if the surface does not have the control.
    pub fn bind<S>(&mut self, surface: &mut S, id: ControlId, href: &str)
    where
        S: Surface + ?Sized,
    {
        if with_control(surface, id, |control| apply_href(control, href)).is_none() {
            return;
        }
        tracing::trace!(%id, href, "bound");
        self.attach(id);
    }

    /// Attach the interception handler in forced mode, at most once.
    pub(crate) fn attach(&mut self, id: ControlId) {
        if self.mode == NavigationMode::Forced && self.intercepted.insert(id) {
            tracing::trace!(%id, "attached navigation handler");
        }
    }

    /// Handle the activation of an intercepted control.
    ///
    /// Returns `true` if the activation was handled and the default action
    /// must be suppressed. Controls without handler are left alone.
    pub fn intercept<S, N>(&self, surface: &mut S, id: ControlId, navigator: &mut N) -> bool
    where
        S: Surface + ?Sized,
        N: Navigator + ?Sized,
    {
        if !self.is_intercepted(id) {
            return false;
        }
        let href = with_control(surface, id, |control| {
            if control.attribute(ARIA_DISABLED).as_deref() == Some("true") {
                return None;
            }
            control.attribute("href")
        })
        .flatten()
        .filter(|href| !href.is_empty() && href != NOOP_HREF);
        // The default action is always suppressed, also for disabled controls.
        if let Some(href) = href {
            follow(navigator, &href);
        }
        true
    }
}

/// Follow a navigation target manually.
///
/// `tel:`, `sms:` and `mailto:` targets are handed over in place. Web
/// targets open in a new browsing context, or in place if that is blocked.
pub fn follow<N>(navigator: &mut N, href: &str)
where
    N: Navigator + ?Sized,
{
    let kind = LinkKind::of(href);
    if kind.navigates_in_place() {
        tracing::debug!(href, ?kind, "navigating in place");
        navigator.navigate(href);
        return;
    }
    if navigator.open_new_context(href) {
        tracing::debug!(href, "opened new context");
        return;
    }
    tracing::debug!(href, "new context blocked, navigating in place");
    navigator.navigate(href);
}
