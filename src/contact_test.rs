use super::*;

fn notifier() -> Notifier {
    Notifier::new(&Timing::default())
}

fn sample() -> ContactMessage {
    ContactMessage::from_entries([("name", "A"), ("email", "a@b.com"), ("subject", "S"), ("message", "M")])
}

// =============================================================
// ContactMessage
// =============================================================

#[test]
fn message_exposes_known_fields() {
    let m = sample();
    assert_eq!(m.name(), Some("A"));
    assert_eq!(m.email(), Some("a@b.com"));
    assert_eq!(m.subject(), Some("S"));
    assert_eq!(m.message(), Some("M"));
    assert_eq!(m.len(), 4);
}

#[test]
fn message_keeps_extra_fields_and_last_duplicate() {
    let m = ContactMessage::from_entries([("name", "A"), ("budget", "10k"), ("name", "B")]);
    assert_eq!(m.name(), Some("B"));
    assert_eq!(m.get("budget"), Some("10k"));
    assert_eq!(m.len(), 2);
}

#[test]
fn message_serializes_as_flat_object() {
    let json = serde_json::to_value(sample()).unwrap_or_default();
    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["message"], "M");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_prevents_default_notifies_and_resets() {
    let mut n = notifier();
    let effects = submit(&mut n, &sample());
    assert_eq!(
        effects,
        vec![
            Effect::PreventDefault,
            Effect::ShowNotification {
                id: 1,
                kind: NotificationKind::Success,
                message: "Message sent successfully!".into()
            },
            Effect::Schedule { delay_ms: 5000, task: Deferred::FadeNotification { id: 1 } },
            Effect::ResetForm,
        ]
    );
}

#[test]
fn empty_form_still_acknowledged() {
    let mut n = notifier();
    let effects = submit(&mut n, &ContactMessage::default());
    assert!(effects.contains(&Effect::ResetForm));
    assert_eq!(n.active(), Some(1));
}

// =============================================================
// Notifier
// =============================================================

#[test]
fn second_notification_replaces_first() {
    let mut n = notifier();
    n.show(NotificationKind::Success, "one");
    let effects = n.show(NotificationKind::Error, "two");
    assert_eq!(effects[0], Effect::RemoveNotification { id: 1 });
    assert!(matches!(effects[1], Effect::ShowNotification { id: 2, kind: NotificationKind::Error, .. }));
    assert_eq!(n.active(), Some(2));
}

#[test]
fn fade_then_remove() {
    let mut n = notifier();
    n.show(NotificationKind::Success, "hi");
    let fade = n.fade(1);
    assert_eq!(
        fade,
        vec![
            Effect::style(Target::Notification(1), "opacity", "0"),
            Effect::style(Target::Notification(1), "transition", "opacity 0.3s ease"),
            Effect::Schedule { delay_ms: 300, task: Deferred::RemoveNotification { id: 1 } },
        ]
    );
    assert_eq!(n.remove(1), vec![Effect::RemoveNotification { id: 1 }]);
    assert_eq!(n.active(), None);
}

#[test]
fn stale_timers_do_nothing_after_replacement() {
    let mut n = notifier();
    n.show(NotificationKind::Success, "one");
    n.show(NotificationKind::Success, "two");
    assert!(n.fade(1).is_empty());
    assert!(n.remove(1).is_empty());
    assert_eq!(n.active(), Some(2));
}

#[test]
fn stale_timers_do_nothing_after_close() {
    let mut n = notifier();
    n.show(NotificationKind::Success, "one");
    assert_eq!(n.remove(1).len(), 1);
    assert!(n.fade(1).is_empty());
    assert!(n.remove(1).is_empty());
}

#[test]
fn abandon_clears_only_matching_id() {
    let mut n = notifier();
    n.show(NotificationKind::Success, "one");
    n.abandon(9);
    assert_eq!(n.active(), Some(1));
    n.abandon(1);
    assert_eq!(n.active(), None);
}

#[test]
fn kind_styles() {
    assert_eq!(NotificationKind::Success.as_str(), "success");
    assert_eq!(NotificationKind::Error.as_str(), "error");
    assert_eq!(NotificationKind::Success.background(), "#0097B2");
    assert_eq!(NotificationKind::Error.background(), "#545454");
}
