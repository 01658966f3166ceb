//! Client-only contact form and toast notifications.
//!
//! The form is never sent anywhere: a submit is logged and acknowledged with
//! a notification, and the form is reset.
//!
//! Notifications are single-instance. Each one gets a fresh id and its timers
//! carry that id, so a timer outliving its notification (closed by hand, or
//! replaced by a newer one) finds a different active id and does nothing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Timing;
use crate::consts::CONTACT_SUCCESS_MESSAGE;
use crate::effect::{Deferred, Effect, NotificationKind, Target};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// All submitted form entries, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ContactMessage {
    fields: BTreeMap<String, String>,
}

impl ContactMessage {
    /// Build from `FormData` entries. A repeated name keeps its last value.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { fields: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.get("email")
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.get("subject")
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.get("message")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Notification lifecycle: show, fade after a while, remove after the fade.
#[derive(Debug, Clone)]
pub struct Notifier {
    next_id: u64,
    active: Option<u64>,
    lifetime_ms: u32,
    fade_ms: u32,
}

impl Notifier {
    #[must_use]
    pub fn new(timing: &Timing) -> Self {
        Self { next_id: 1, active: None, lifetime_ms: timing.notification_ms, fade_ms: timing.notification_fade_ms }
    }

    #[must_use]
    pub fn active(&self) -> Option<u64> {
        self.active
    }

    /// Replace any current notification with a new one.
    pub fn show(&mut self, kind: NotificationKind, message: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(old) = self.active.take() {
            effects.push(Effect::RemoveNotification { id: old });
        }
        let id = self.next_id;
        self.next_id += 1;
        self.active = Some(id);
        effects.push(Effect::ShowNotification { id, kind, message: message.to_owned() });
        effects.push(Effect::Schedule { delay_ms: self.lifetime_ms, task: Deferred::FadeNotification { id } });
        effects
    }

    /// Lifetime elapsed: start the fade-out and schedule removal.
    #[must_use]
    pub fn fade(&self, id: u64) -> Vec<Effect> {
        if self.active != Some(id) {
            return Vec::new();
        }
        let target = Target::Notification(id);
        vec![
            Effect::style(target.clone(), "opacity", "0"),
            Effect::style(target, "transition", "opacity 0.3s ease"),
            Effect::Schedule { delay_ms: self.fade_ms, task: Deferred::RemoveNotification { id } },
        ]
    }

    /// Remove notification `id` if it is still the active one.
    ///
    /// Used by both the fade timer and the close button.
    pub fn remove(&mut self, id: u64) -> Vec<Effect> {
        if self.active != Some(id) {
            return Vec::new();
        }
        self.active = None;
        vec![Effect::RemoveNotification { id }]
    }

    /// Forget a notification whose node vanished without our help.
    pub fn abandon(&mut self, id: u64) {
        if self.active == Some(id) {
            self.active = None;
        }
    }
}

/// Handle a contact form submit.
///
/// Returns the effects to apply; the parsed message is logged.
pub fn submit(notifier: &mut Notifier, message: &ContactMessage) -> Vec<Effect> {
    match serde_json::to_string(message) {
        Ok(json) => log::info!("contact form submitted: {json}"),
        Err(err) => log::warn!("contact form submitted (unserializable: {err})"),
    }
    let mut effects = vec![Effect::PreventDefault];
    effects.extend(notifier.show(NotificationKind::Success, CONTACT_SUCCESS_MESSAGE));
    effects.push(Effect::ResetForm);
    effects
}
