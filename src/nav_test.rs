use super::*;

fn links() -> Vec<Option<String>> {
    vec![Some("hero".into()), Some("about".into()), None, Some("about".into())]
}

fn nav() -> Nav {
    Nav::new(links(), true, true, 50.0)
}

fn state() -> PageState {
    PageState::new(vec!["hero".into(), "about".into()], 1024.0)
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_opens_menu() {
    let mut s = state();
    let effects = nav().toggle(&mut s);
    assert!(s.menu_open);
    assert_eq!(
        effects,
        vec![
            Effect::add_class(Target::NavToggle, "active"),
            Effect::add_class(Target::NavMenu, "active"),
            Effect::style(Target::Body, "overflow", "hidden"),
        ]
    );
}

#[test]
fn toggle_twice_closes_menu() {
    let mut s = state();
    let n = nav();
    n.toggle(&mut s);
    let effects = n.toggle(&mut s);
    assert!(!s.menu_open);
    assert_eq!(
        effects,
        vec![
            Effect::remove_class(Target::NavToggle, "active"),
            Effect::remove_class(Target::NavMenu, "active"),
            Effect::style(Target::Body, "overflow", ""),
        ]
    );
}

#[test]
fn toggle_without_menu_markup_is_noop() {
    let mut s = state();
    let n = Nav::new(links(), false, true, 50.0);
    assert!(n.toggle(&mut s).is_empty());
    assert!(!s.menu_open);
}

#[test]
fn escape_only_closes_open_menu() {
    let mut s = state();
    let n = nav();
    assert!(n.escape(&mut s).is_empty());
    n.toggle(&mut s);
    assert_eq!(n.escape(&mut s).len(), 3);
    assert!(!s.menu_open);
}

// =============================================================
// Highlight
// =============================================================

#[test]
fn highlight_clears_all_then_marks_matches() {
    let effects = nav().highlight(Some("about"));
    let removed = effects.iter().filter(|e| matches!(e, Effect::RemoveClass { .. })).count();
    assert_eq!(removed, 4);
    let added: Vec<&Effect> = effects.iter().filter(|e| matches!(e, Effect::AddClass { .. })).collect();
    assert_eq!(
        added,
        vec![&Effect::add_class(Target::NavLink(1), "active"), &Effect::add_class(Target::NavLink(3), "active")]
    );
}

#[test]
fn highlight_unknown_section_only_clears() {
    let effects = nav().highlight(Some("blog"));
    assert!(effects.iter().all(|e| matches!(e, Effect::RemoveClass { .. })));
}

#[test]
fn link_section_reads_data_attribute() {
    let n = nav();
    assert_eq!(n.link_section(1), Some("about"));
    assert_eq!(n.link_section(2), None);
    assert_eq!(n.link_section(9), None);
}

// =============================================================
// Navbar scroll
// =============================================================

#[test]
fn navbar_scrolled_past_offset() {
    let mut s = state();
    let effects = nav().on_scroll(&mut s, 51.0);
    assert!(s.navbar_scrolled);
    assert_eq!(effects, vec![Effect::add_class(Target::Navbar, "scrolled")]);
}

#[test]
fn navbar_at_offset_is_not_scrolled() {
    let mut s = state();
    let effects = nav().on_scroll(&mut s, 50.0);
    assert!(!s.navbar_scrolled);
    assert_eq!(effects, vec![Effect::remove_class(Target::Navbar, "scrolled")]);
}

#[test]
fn navbar_missing_is_noop() {
    let mut s = state();
    let n = Nav::new(links(), true, false, 50.0);
    assert!(n.on_scroll(&mut s, 500.0).is_empty());
}

// =============================================================
// Keys
// =============================================================

#[test]
fn section_keys_map_browser_names() {
    assert_eq!(SectionKey::from_key("ArrowDown"), Some(SectionKey::Next));
    assert_eq!(SectionKey::from_key("PageDown"), Some(SectionKey::Next));
    assert_eq!(SectionKey::from_key("ArrowUp"), Some(SectionKey::Prev));
    assert_eq!(SectionKey::from_key("PageUp"), Some(SectionKey::Prev));
    assert_eq!(SectionKey::from_key("Home"), Some(SectionKey::First));
    assert_eq!(SectionKey::from_key("End"), Some(SectionKey::Last));
    assert_eq!(SectionKey::from_key("a"), None);
    assert_eq!(SectionKey::from_key("Escape"), None);
}
