use super::repository::AssetsRepository;
use crate::api::Asset;
use crate::components::prompt::{ConfirmPrompt, Notice, Prompter, REQUEST_SENT_NOTICE_MS};
use crate::pages::outcome::Outcome;
use crate::state::lifetime::{InFlight, Lifetime};
use leptos::*;
use std::rc::Rc;

pub const REQUEST_SENT_MESSAGE: &str = "Request sent successfully!";

pub fn request_review_prompt(asset: &Asset) -> ConfirmPrompt {
    let category = asset
        .asset_type
        .as_ref()
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    ConfirmPrompt {
        message: format!(
            "Asset: {} · Category: {} · Available Quantity: {}",
            asset.name, category, asset.quantity
        ),
        ..ConfirmPrompt::new("Review Info Before Request", "Request")
    }
}

/// Request flow behind one asset card.
#[derive(Clone)]
pub struct AssetRequestModel {
    asset: Asset,
    in_flight: RwSignal<bool>,
    repository: AssetsRepository,
    prompter: Rc<dyn Prompter>,
    lifetime: Lifetime,
}

impl AssetRequestModel {
    pub fn new(
        asset: Asset,
        repository: AssetsRepository,
        prompter: Rc<dyn Prompter>,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            asset,
            in_flight: create_rw_signal(false),
            repository,
            prompter,
            lifetime,
        }
    }

    pub fn in_flight(&self) -> Signal<bool> {
        self.in_flight.into()
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub async fn request(&self) -> Outcome {
        if !self.asset.is_assignable() || self.in_flight.try_get_untracked().unwrap_or(true) {
            return Outcome::Skipped;
        }
        let _busy = InFlight::begin(self.in_flight);

        let confirmed = self
            .prompter
            .confirm(request_review_prompt(&self.asset))
            .await;
        if !self.lifetime.is_alive() {
            return Outcome::Abandoned;
        }
        if !confirmed {
            log::debug!("request for {} declined", self.asset.id);
            return Outcome::Declined;
        }

        match self.lifetime.guard(self.repository.request(&self.asset)).await {
            None => Outcome::Abandoned,
            Some(Ok(_)) => {
                log::info!("requested asset {}", self.asset.id);
                self.prompter.notify(Notice::success(
                    REQUEST_SENT_MESSAGE,
                    REQUEST_SENT_NOTICE_MS,
                ));
                Outcome::Applied {
                    message: REQUEST_SENT_MESSAGE.to_string(),
                }
            }
            Some(Err(err)) => {
                log::warn!("request for {} failed: {}", self.asset.id, err);
                self.prompter.notify(Notice::error(err.message.clone()));
                Outcome::Failed(err)
            }
        }
    }
}
