//! Scroll-driven background variant selection.
//!
//! The page reports "section became visible" events into a [`SectionSender`];
//! the single owning [`VariantController`] drains them once per frame and
//! hands the resulting [`BackgroundVariant`] down to every layer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundVariant {
    #[default]
    Default,
    Journey,
    Cave,
}

impl BackgroundVariant {
    pub const ALL: [BackgroundVariant; 3] = [
        BackgroundVariant::Default,
        BackgroundVariant::Journey,
        BackgroundVariant::Cave,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BackgroundVariant::Default => "default",
            BackgroundVariant::Journey => "journey",
            BackgroundVariant::Cave => "cave",
        }
    }

    /// The hero backdrop is blurred and dimmed only under the default variant.
    pub fn backdrop_dimmed(self) -> bool {
        self == BackgroundVariant::Default
    }
}

impl fmt::Display for BackgroundVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Page sections whose visibility selects a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Journey,
    Projects,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Hero, SectionId::Journey, SectionId::Projects];

    pub fn element_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Journey => "journey",
            SectionId::Projects => "projects",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            "hero" => Some(SectionId::Hero),
            "journey" => Some(SectionId::Journey),
            "projects" => Some(SectionId::Projects),
            _ => None,
        }
    }

    pub fn variant(self) -> BackgroundVariant {
        match self {
            SectionId::Hero => BackgroundVariant::Default,
            SectionId::Journey => BackgroundVariant::Journey,
            SectionId::Projects => BackgroundVariant::Cave,
        }
    }
}

type Queue = Rc<RefCell<VecDeque<SectionId>>>;

/// Producer half of the section-visibility channel.
#[derive(Clone)]
pub struct SectionSender {
    queue: Queue,
}

impl SectionSender {
    pub fn send(&self, section: SectionId) {
        self.queue.borrow_mut().push_back(section);
    }
}

/// Consumer half of the section-visibility channel.
pub struct SectionReceiver {
    queue: Queue,
}

impl SectionReceiver {
    pub fn try_recv(&self) -> Option<SectionId> {
        self.queue.borrow_mut().pop_front()
    }
}

/// Single-threaded FIFO carrying visibility events in the order they fired.
pub fn section_channel() -> (SectionSender, SectionReceiver) {
    let queue: Queue = Rc::new(RefCell::new(VecDeque::new()));
    (
        SectionSender {
            queue: queue.clone(),
        },
        SectionReceiver { queue },
    )
}

/// Owns the current variant. Last visible section wins; no debouncing.
pub struct VariantController {
    current: BackgroundVariant,
    events: SectionReceiver,
}

impl VariantController {
    pub fn new(events: SectionReceiver) -> Self {
        Self {
            current: BackgroundVariant::Default,
            events,
        }
    }

    pub fn current(&self) -> BackgroundVariant {
        self.current
    }

    pub fn on_section_visible(&mut self, section: SectionId) {
        let next = section.variant();
        if next != self.current {
            log::info!("[variant] {} -> {} ({:?} visible)", self.current, next, section);
        }
        self.current = next;
    }

    /// Drain every pending visibility event and return the resulting variant.
    pub fn pump(&mut self) -> BackgroundVariant {
        while let Some(section) = self.events.try_recv() {
            self.on_section_visible(section);
        }
        self.current
    }
}
