use futures::{
    channel::oneshot,
    future::{FutureExt, LocalBoxFuture},
};
use leptos::*;
use std::{cell::RefCell, collections::VecDeque, rc::Rc};
use uuid::Uuid;

use super::confirm_dialog::ConfirmDialog;

pub const REQUEST_SUCCESS_NOTICE_MS: u32 = 1200;
pub const ASSIGN_SUCCESS_NOTICE_MS: u32 = 1500;
pub const REQUEST_SENT_NOTICE_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub destructive: bool,
}

impl ConfirmPrompt {
    pub fn new(title: impl Into<String>, confirm_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: String::new(),
            confirm_label: confirm_label.into(),
            destructive: false,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPrompt {
    pub title: String,
    pub placeholder: String,
    pub confirm_label: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    /// Closes by itself after this many milliseconds; no button is shown.
    pub auto_close_ms: Option<u32>,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            auto_close_ms: None,
        }
    }

    pub fn success(title: impl Into<String>, auto_close_ms: u32) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            auto_close_ms: Some(auto_close_ms),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            auto_close_ms: None,
        }
    }
}

/// Blocking modal prompts. Futures resolve once the user answers; a prompt
/// that is closed or replaced resolves as declined. Notices never replace an
/// open confirm or select; they wait until it is answered.
pub trait Prompter {
    fn confirm(&self, prompt: ConfirmPrompt) -> LocalBoxFuture<'static, bool>;
    fn select(&self, prompt: SelectPrompt) -> LocalBoxFuture<'static, Option<String>>;
    fn notify(&self, notice: Notice);
}

#[derive(Clone)]
pub struct Prompts(pub Rc<dyn Prompter>);

impl Prompts {
    pub fn new(prompter: impl Prompter + 'static) -> Self {
        Self(Rc::new(prompter))
    }
}

pub fn use_prompter() -> Rc<dyn Prompter> {
    match use_context::<Prompts>() {
        Some(Prompts(prompter)) => prompter,
        None => {
            log::warn!("no prompt host mounted; prompts are declined");
            Rc::new(Declining)
        }
    }
}

struct Declining;

impl Prompter for Declining {
    fn confirm(&self, _prompt: ConfirmPrompt) -> LocalBoxFuture<'static, bool> {
        async { false }.boxed_local()
    }

    fn select(&self, _prompt: SelectPrompt) -> LocalBoxFuture<'static, Option<String>> {
        async { None }.boxed_local()
    }

    fn notify(&self, notice: Notice) {
        log::info!("{}", notice.title);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Confirm(ConfirmPrompt),
    Select(SelectPrompt),
    Notice(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePrompt {
    pub id: Uuid,
    pub kind: PromptKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Confirmed,
    Selected(String),
    Dismissed,
}

type Waiter = (Uuid, oneshot::Sender<PromptReply>);

/// One-at-a-time modal state rendered by [`PromptOutlet`].
#[derive(Clone)]
pub struct PromptHost {
    active: RwSignal<Option<ActivePrompt>>,
    waiter: Rc<RefCell<Option<Waiter>>>,
    queued: Rc<RefCell<VecDeque<Notice>>>,
}

impl PromptHost {
    pub fn new() -> Self {
        Self {
            active: create_rw_signal(None),
            waiter: Rc::new(RefCell::new(None)),
            queued: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn active(&self) -> Signal<Option<ActivePrompt>> {
        self.active.into()
    }

    fn open(&self, kind: PromptKind) -> (Uuid, oneshot::Receiver<PromptReply>) {
        let id = Uuid::new_v4();
        let (tx, rx) = oneshot::channel();
        // Replacing the waiter drops the previous sender, which reads as dismissed.
        self.waiter.replace(Some((id, tx)));
        self.active.set(Some(ActivePrompt { id, kind }));
        (id, rx)
    }

    fn show_notice(&self, notice: Notice) {
        let id = Uuid::new_v4();
        let auto_close = notice.auto_close_ms;
        if self
            .active
            .try_set(Some(ActivePrompt {
                id,
                kind: PromptKind::Notice(notice),
            }))
            .is_some()
        {
            return;
        }
        if let Some(ms) = auto_close {
            let host = self.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(ms).await;
                host.respond(id, PromptReply::Dismissed);
            });
        }
    }

    /// Answers prompt `id`; stale ids are ignored.
    pub fn respond(&self, id: Uuid, reply: PromptReply) {
        let waiter = {
            let mut slot = self.waiter.borrow_mut();
            match slot.as_ref() {
                Some((current, _)) if *current == id => slot.take(),
                _ => None,
            }
        };
        if let Some((_, tx)) = waiter {
            let _ = tx.send(reply);
        }
        if self
            .active
            .with_untracked(|active| active.as_ref().map(|prompt| prompt.id) == Some(id))
        {
            let _ = self.active.try_set(None);
        }
        if self.waiter.borrow().is_none() && self.active.with_untracked(Option::is_none) {
            let next = self.queued.borrow_mut().pop_front();
            if let Some(notice) = next {
                self.show_notice(notice);
            }
        }
    }
}

impl Default for PromptHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for PromptHost {
    fn confirm(&self, prompt: ConfirmPrompt) -> LocalBoxFuture<'static, bool> {
        let (_, rx) = self.open(PromptKind::Confirm(prompt));
        async move { matches!(rx.await, Ok(PromptReply::Confirmed)) }.boxed_local()
    }

    fn select(&self, prompt: SelectPrompt) -> LocalBoxFuture<'static, Option<String>> {
        let (_, rx) = self.open(PromptKind::Select(prompt));
        async move {
            match rx.await {
                Ok(PromptReply::Selected(value)) if !value.is_empty() => Some(value),
                _ => None,
            }
        }
        .boxed_local()
    }

    fn notify(&self, notice: Notice) {
        if self.waiter.borrow().is_some() {
            self.queued.borrow_mut().push_back(notice);
        } else {
            self.show_notice(notice);
        }
    }
}

fn notice_heading(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "Notice",
        NoticeKind::Success => "Success",
        NoticeKind::Error => "Error",
    }
}

/// Renders the host's active prompt through [`ConfirmDialog`].
#[component]
pub fn PromptOutlet(host: PromptHost) -> impl IntoView {
    let active = host.active();
    move || {
        let host = host.clone();
        active.get().map(|prompt| {
            let id = prompt.id;
            let dismiss_host = host.clone();
            let on_cancel = Callback::new(move |_: ()| dismiss_host.respond(id, PromptReply::Dismissed));
            let is_open = Signal::derive(|| true);
            match prompt.kind {
                PromptKind::Confirm(confirm) => {
                    let on_confirm =
                        Callback::new(move |_: ()| host.respond(id, PromptReply::Confirmed));
                    view! {
                        <ConfirmDialog
                            is_open=is_open
                            title=confirm.title
                            message=confirm.message
                            confirm_label=confirm.confirm_label
                            destructive=confirm.destructive
                            on_confirm=on_confirm
                            on_cancel=on_cancel
                        />
                    }
                    .into_view()
                }
                PromptKind::Select(select) => {
                    let choice = create_rw_signal(String::new());
                    let on_confirm = Callback::new(move |_: ()| {
                        host.respond(id, PromptReply::Selected(choice.get_untracked()))
                    });
                    let placeholder = select.placeholder.clone();
                    let options = select.options.clone();
                    view! {
                        <ConfirmDialog
                            is_open=is_open
                            title=select.title
                            confirm_label=select.confirm_label
                            confirm_disabled=Signal::derive(move || choice.get().is_empty())
                            on_confirm=on_confirm
                            on_cancel=on_cancel
                        >
                            <select
                                class="w-full border border-gray-300 rounded px-2 py-1"
                                on:change=move |ev| choice.set(event_target_value(&ev))
                            >
                                <option value="">{placeholder.clone()}</option>
                                {options
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.value.clone()>{option.label.clone()}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </ConfirmDialog>
                    }
                    .into_view()
                }
                PromptKind::Notice(notice) => {
                    let on_confirm = on_cancel;
                    let title = notice.title.clone();
                    view! {
                        <ConfirmDialog
                            is_open=is_open
                            title=notice_heading(notice.kind).to_string()
                            message=title
                            on_confirm=on_confirm
                            on_cancel=on_cancel
                            acknowledge_only=true
                        />
                    }
                    .into_view()
                }
            }
        })
    }
}
