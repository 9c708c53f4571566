use super::repository::RequestsRepository;
use crate::api::{AssetRequest, RequestAction, RequestStatus};
use crate::components::prompt::{ConfirmPrompt, Notice, Prompter, REQUEST_SUCCESS_NOTICE_MS};
use crate::pages::outcome::Outcome;
use crate::state::{lifetime::Lifetime, refetch::Refetch, row_sync::StatusMirror};
use leptos::*;
use std::rc::Rc;

pub fn confirm_prompt_for(action: RequestAction) -> ConfirmPrompt {
    let title = format!("Are you sure you want to {} this request?", action);
    match action {
        RequestAction::Approve => ConfirmPrompt::new(title, "Yes, approve it!"),
        RequestAction::Reject => ConfirmPrompt::new(title, "Yes, reject it!").destructive(),
    }
}

fn success_title(action: RequestAction, message: &str) -> String {
    if message.trim().is_empty() {
        format!("Request {}", action.outcome().label().to_lowercase())
    } else {
        message.to_string()
    }
}

/// State and actions behind one approval row.
#[derive(Clone)]
pub struct RequestRowModel {
    id: String,
    mirror: RwSignal<StatusMirror>,
    repository: RequestsRepository,
    prompter: Rc<dyn Prompter>,
    refetch: Refetch,
    lifetime: Lifetime,
}

impl RequestRowModel {
    pub fn new(
        request: &AssetRequest,
        repository: RequestsRepository,
        prompter: Rc<dyn Prompter>,
        refetch: Refetch,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            id: request.id.clone(),
            mirror: create_rw_signal(StatusMirror::new(request.status)),
            repository,
            prompter,
            refetch,
            lifetime,
        }
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub fn status(&self) -> Signal<RequestStatus> {
        let mirror = self.mirror;
        Signal::derive(move || mirror.with(StatusMirror::mirror))
    }

    pub fn in_flight(&self) -> Signal<bool> {
        let mirror = self.mirror;
        Signal::derive(move || mirror.with(StatusMirror::is_in_flight))
    }

    pub fn can_act(&self, action: RequestAction) -> Signal<bool> {
        let mirror = self.mirror;
        Signal::derive(move || mirror.with(|mirror| mirror.can_begin(&action)))
    }

    /// Feeds a refetch delivery into the mirror.
    pub fn reconcile(&self, status: RequestStatus, revision: u32) {
        self.update_mirror(|mirror| mirror.reconcile(status, revision));
    }

    fn update_mirror(&self, f: impl FnOnce(&mut StatusMirror)) {
        if self.lifetime.is_alive() {
            self.mirror.try_update(f);
        }
    }

    fn mirror_allows(&self, action: RequestAction) -> bool {
        self.mirror
            .try_with_untracked(|mirror| mirror.can_begin(&action))
            .unwrap_or(false)
    }

    pub async fn perform_action(&self, action: RequestAction) -> Outcome {
        if !self.mirror_allows(action) {
            log::debug!("{} skipped for request {}: not actionable", action, self.id);
            return Outcome::Skipped;
        }

        let confirmed = self.prompter.confirm(confirm_prompt_for(action)).await;
        if !self.lifetime.is_alive() {
            return Outcome::Abandoned;
        }
        if !confirmed {
            log::debug!("{} declined for request {}", action, self.id);
            return Outcome::Declined;
        }

        // Re-checked: the status may have moved while the prompt was open.
        let began = self
            .mirror
            .try_update(|mirror| mirror.begin(action))
            .unwrap_or(Err(crate::state::row_sync::MirrorRejection::NotActionable));
        if began.is_err() {
            return Outcome::Skipped;
        }

        let result = self
            .lifetime
            .guard(self.repository.act(&self.id, action))
            .await;

        let outcome = match result {
            None => Outcome::Abandoned,
            Some(Ok(reply)) => {
                let ticket = self.refetch.upcoming();
                self.update_mirror(|mirror| mirror.confirm(ticket));
                let message = success_title(action, &reply.message);
                log::info!("request {} {}", self.id, action.outcome().label().to_lowercase());
                self.prompter
                    .notify(Notice::success(message.clone(), REQUEST_SUCCESS_NOTICE_MS));
                self.refetch.trigger();
                Outcome::Applied { message }
            }
            Some(Err(err)) => {
                log::warn!("{} failed for request {}: {}", action, self.id, err);
                self.update_mirror(StatusMirror::fail);
                self.prompter.notify(Notice::error(err.message.clone()));
                Outcome::Failed(err)
            }
        };

        // In-flight never outlives the flow, whatever branch ran.
        self.update_mirror(StatusMirror::fail);
        outcome
    }
}
