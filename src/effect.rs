//! Effects returned from core handlers for the browser host to apply.
//!
//! The core never touches the DOM. Every handler returns a list of effects in
//! the order they must be applied; timers are effects too, so the host owns
//! the clock and the core stays testable without a browser.

/// An element (or element group member) in the page's DOM contract.
///
/// Indices refer to the element's position in its `querySelectorAll` result
/// at startup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Body,
    Navbar,
    NavToggle,
    NavMenu,
    NavLink(usize),
    /// A section addressed by element id.
    Section(String),
    Photo,
    Animated(usize),
    SkillBar(usize),
    Counter(usize),
    FilterButton(usize),
    ProjectCard(usize),
    ContactForm,
    Notification(u64),
}

/// Notification flavor; selects the class suffix and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#0097B2",
            Self::Error => "#545454",
        }
    }
}

/// Work the host must hand back to the core after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Set a skill bar to its target width.
    FillSkillBar { index: usize },
    /// Advance a running counter by one tick.
    CounterTick { index: usize },
    /// Drop the `moving` class if no newer move happened.
    EndPhotoMove { generation: u64 },
    /// Apply the last pointer position the parallax throttle held back.
    FlushParallax,
    /// Debounced resize handling.
    Reposition { ticket: u64 },
    /// Start fading a notification out.
    FadeNotification { id: u64 },
    /// Remove a faded notification.
    RemoveNotification { id: u64 },
}

impl Deferred {
    /// The element the task will mutate, if it is bound to one.
    ///
    /// The host checks this element is still attached before running the task.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::FillSkillBar { index } => Some(Target::SkillBar(*index)),
            Self::CounterTick { index } => Some(Target::Counter(*index)),
            Self::EndPhotoMove { .. } | Self::FlushParallax | Self::Reposition { .. } => Some(Target::Photo),
            Self::FadeNotification { id } | Self::RemoveNotification { id } => Some(Target::Notification(*id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Cancel the browser default for the event being handled.
    PreventDefault,
    AddClass { target: Target, class: String },
    RemoveClass { target: Target, class: String },
    /// Set an inline style property (kebab-case name). Empty value clears it.
    SetStyle { target: Target, property: &'static str, value: String },
    SetText { target: Target, text: String },
    /// Smooth-scroll the target into view, aligned to the top.
    ScrollIntoView { target: Target },
    /// Stop observing a one-shot visibility target.
    Unobserve { target: Target },
    /// Run `task` after `delay_ms`.
    Schedule { delay_ms: u32, task: Deferred },
    ShowNotification { id: u64, kind: NotificationKind, message: String },
    RemoveNotification { id: u64 },
    ResetForm,
}

impl Effect {
    pub(crate) fn add_class(target: Target, class: &str) -> Self {
        Self::AddClass { target, class: class.to_owned() }
    }

    pub(crate) fn remove_class(target: Target, class: &str) -> Self {
        Self::RemoveClass { target, class: class.to_owned() }
    }

    pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }
}
