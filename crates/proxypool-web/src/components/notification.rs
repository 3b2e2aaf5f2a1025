use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice info",
            NoticeLevel::Error => "notice error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Queue of transient messages shown at the top of the page
#[derive(Clone, Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            level,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Handle passed through context so any component can raise a message.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Notices>,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            notices: RwSignal::new(Notices::default()),
            duration,
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NoticeLevel::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeLevel::Error, text.into());
    }

    fn show(&self, level: NoticeLevel, text: String) {
        let mut id = 0;
        self.notices.update(|n| id = n.push(level, text));
        let notices = self.notices;
        set_timeout(move || notices.update(|n| n.dismiss(id)), self.duration);
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn NotificationArea() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notices">
            {move || notifier.notices.get().items().iter().map(|n| {
                view! { <div class=n.level.class()>{n.text.clone()}</div> }
            }).collect::<Vec<_>>()}
        </div>
    }
}
