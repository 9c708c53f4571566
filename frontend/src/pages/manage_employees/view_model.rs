use super::repository::EmployeesRepository;
use crate::api::Asset;
use crate::components::prompt::{
    ConfirmPrompt, Notice, Prompter, SelectOption, SelectPrompt, ASSIGN_SUCCESS_NOTICE_MS,
};
use crate::pages::outcome::Outcome;
use crate::state::{
    lifetime::{InFlight, Lifetime},
    refetch::Refetch,
};
use leptos::*;
use std::rc::Rc;

pub const NO_ASSETS_MESSAGE: &str = "No available assets to assign";

/// Assets that can still be handed out (`quantity > 0`).
pub fn assignable_assets(assets: Vec<Asset>) -> Vec<Asset> {
    assets.into_iter().filter(Asset::is_assignable).collect()
}

pub fn asset_option_label(asset: &Asset) -> String {
    let base = format!("{} ({} left)", asset.name, asset.quantity);
    match asset.owner_email() {
        Some(hr) => format!("{} · {}", base, hr),
        None => base,
    }
}

pub fn assignment_select_prompt(employee_email: &str, assets: &[Asset]) -> SelectPrompt {
    SelectPrompt {
        title: format!("Select asset to assign to {}", employee_email),
        placeholder: "Select an asset".into(),
        confirm_label: "Assign".into(),
        options: assets
            .iter()
            .map(|asset| SelectOption {
                value: asset.id.clone(),
                label: asset_option_label(asset),
            })
            .collect(),
    }
}

pub fn assignment_confirm_prompt(asset_name: &str, employee_email: &str) -> ConfirmPrompt {
    ConfirmPrompt::new(
        format!("Assign {} to {}?", asset_name, employee_email),
        "Yes, assign",
    )
}

#[derive(Clone)]
pub struct AssignmentModel {
    employee_email: String,
    in_flight: RwSignal<bool>,
    repository: EmployeesRepository,
    prompter: Rc<dyn Prompter>,
    refetch: Refetch,
    lifetime: Lifetime,
}

impl AssignmentModel {
    pub fn new(
        employee_email: impl Into<String>,
        repository: EmployeesRepository,
        prompter: Rc<dyn Prompter>,
        refetch: Refetch,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            employee_email: employee_email.into(),
            in_flight: create_rw_signal(false),
            repository,
            prompter,
            refetch,
            lifetime,
        }
    }

    pub fn in_flight(&self) -> Signal<bool> {
        self.in_flight.into()
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    fn report_failure(&self, err: &crate::api::ApiError) {
        log::warn!("assignment for {} failed: {}", self.employee_email, err);
        self.prompter.notify(Notice::error(err.message.clone()));
    }

    /// Pick an asset, confirm, then assign it to this row's employee.
    pub async fn assign(&self) -> Outcome {
        if self.in_flight.try_get_untracked().unwrap_or(true) {
            return Outcome::Skipped;
        }
        let _busy = InFlight::begin(self.in_flight);

        let assets = match self.lifetime.guard(self.repository.list_assets()).await {
            None => return Outcome::Abandoned,
            Some(Ok(response)) => response.result,
            Some(Err(err)) => {
                self.report_failure(&err);
                return Outcome::Failed(err);
            }
        };

        let available = assignable_assets(assets);
        if available.is_empty() {
            self.prompter.notify(Notice::info(NO_ASSETS_MESSAGE));
            return Outcome::Skipped;
        }

        let selected = self
            .prompter
            .select(assignment_select_prompt(&self.employee_email, &available))
            .await;
        if !self.lifetime.is_alive() {
            return Outcome::Abandoned;
        }
        let Some(asset) = selected.and_then(|id| available.into_iter().find(|asset| asset.id == id))
        else {
            log::debug!("asset selection cancelled for {}", self.employee_email);
            return Outcome::Declined;
        };

        let confirmed = self
            .prompter
            .confirm(assignment_confirm_prompt(&asset.name, &self.employee_email))
            .await;
        if !self.lifetime.is_alive() {
            return Outcome::Abandoned;
        }
        if !confirmed {
            return Outcome::Declined;
        }

        match self
            .lifetime
            .guard(self.repository.assign(&self.employee_email, &asset.id))
            .await
        {
            None => Outcome::Abandoned,
            Some(Ok(reply)) => {
                let message = if reply.message.trim().is_empty() {
                    format!("{} assigned to {}", asset.name, self.employee_email)
                } else {
                    reply.message
                };
                log::info!("assigned {} to {}", asset.id, self.employee_email);
                self.prompter
                    .notify(Notice::success(message.clone(), ASSIGN_SUCCESS_NOTICE_MS));
                self.refetch.trigger();
                Outcome::Applied { message }
            }
            Some(Err(err)) => {
                self.report_failure(&err);
                Outcome::Failed(err)
            }
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use crate::components::prompt::NoticeKind;
    use crate::state::session::Session;
    use crate::test_support::helpers::{asset_json, hr_user, ScriptedPrompter};
    use serde_json::{json, Value};

    struct Fixture {
        server: MockServer,
        prompter: ScriptedPrompter,
        refetch: Refetch,
        model: AssignmentModel,
    }

    fn fixture(assets: Value, prompter: ScriptedPrompter) -> Fixture {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/assets");
            then.status(200).json_body(json!({ "result": assets }));
        });
        let api = ApiClient::new_with_base_url(
            server.url("/api"),
            Session::authenticated("t", hr_user()),
        );
        let refetch = Refetch::new();
        let model = AssignmentModel::new(
            "bob@example.com",
            EmployeesRepository::new(api),
            Rc::new(prompter.clone()),
            refetch,
            Lifetime::new(),
        );
        Fixture {
            server,
            prompter,
            refetch,
            model,
        }
    }

    fn stocked() -> Value {
        json!([
            asset_json("a0", "Chair", 0),
            asset_json("a1", "Laptop", 3),
            asset_json("a2", "Monitor", 1)
        ])
    }

    #[tokio::test]
    async fn offers_only_assets_in_stock() {
        let runtime = create_runtime();
        let f = fixture(stocked(), ScriptedPrompter::new().select_with(None));

        f.model.assign().await;

        let selects = f.prompter.selects();
        assert_eq!(selects.len(), 1);
        let values: Vec<_> = selects[0].options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["a1", "a2"]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn empty_stock_shows_info_instead_of_select() {
        let runtime = create_runtime();
        let f = fixture(
            json!([asset_json("a0", "Chair", 0), asset_json("a9", "Desk", 0)]),
            ScriptedPrompter::new().select_with(Some("a0")),
        );

        let outcome = f.model.assign().await;

        assert_eq!(outcome, Outcome::Skipped);
        assert!(f.prompter.selects().is_empty());
        let infos = f.prompter.notices_of(NoticeKind::Info);
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].title, NO_ASSETS_MESSAGE);
        assert_eq!(f.server.hits(POST, "/api/assign-asset"), 0);
        assert!(!f.model.in_flight().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn cancelled_selection_skips_confirmation_and_assignment() {
        let runtime = create_runtime();
        let f = fixture(
            stocked(),
            ScriptedPrompter::new().select_with(None).confirm_with(true),
        );

        let outcome = f.model.assign().await;

        assert_eq!(outcome, Outcome::Declined);
        assert!(f.prompter.confirms().is_empty());
        assert_eq!(f.server.hits(POST, "/api/assign-asset"), 0);
        assert!(!f.model.in_flight().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn declined_confirmation_skips_assignment() {
        let runtime = create_runtime();
        let f = fixture(
            stocked(),
            ScriptedPrompter::new().select_with(Some("a2")).confirm_with(false),
        );

        let outcome = f.model.assign().await;

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(f.prompter.confirms()[0].title, "Assign Monitor to bob@example.com?");
        assert_eq!(f.server.hits(POST, "/api/assign-asset"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn confirmed_assignment_posts_and_refetches() {
        let runtime = create_runtime();
        let f = fixture(
            stocked(),
            ScriptedPrompter::new().select_with(Some("a1")).confirm_with(true),
        );
        f.server.mock(|when, then| {
            when.method(POST).path("/api/assign-asset");
            then.status(200).json_body(json!({ "message": "Asset assigned" }));
        });

        let outcome = f.model.assign().await;

        assert_eq!(
            outcome,
            Outcome::Applied {
                message: "Asset assigned".into()
            }
        );
        let posted = f
            .server
            .received()
            .into_iter()
            .find(|request| request.method == POST)
            .and_then(|request| request.body);
        assert_eq!(
            posted,
            Some(json!({ "employeeEmail": "bob@example.com", "assetId": "a1" }))
        );
        assert_eq!(f.refetch.revision(), 1);
        let success = f.prompter.notices_of(NoticeKind::Success);
        assert_eq!(success[0].auto_close_ms, Some(ASSIGN_SUCCESS_NOTICE_MS));
        assert!(!f.model.in_flight().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_assignment_reports_and_keeps_list() {
        let runtime = create_runtime();
        let f = fixture(
            stocked(),
            ScriptedPrompter::new().select_with(Some("a1")).confirm_with(true),
        );
        f.server.mock(|when, then| {
            when.method(POST).path("/api/assign-asset");
            then.status(400).json_body(json!({ "message": "Employee limit reached" }));
        });

        let outcome = f.model.assign().await;

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(f.refetch.revision(), 0);
        let errors = f.prompter.notices_of(NoticeKind::Error);
        assert_eq!(errors[0].title, "Employee limit reached");
        runtime.dispose();
    }

    #[tokio::test]
    async fn asset_load_failure_is_reported() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/assets");
            then.network_error();
        });
        let prompter = ScriptedPrompter::new();
        let model = AssignmentModel::new(
            "bob@example.com",
            EmployeesRepository::new(ApiClient::new_with_base_url(
                server.url("/api"),
                Session::authenticated("t", hr_user()),
            )),
            Rc::new(prompter.clone()),
            Refetch::new(),
            Lifetime::new(),
        );

        let outcome = model.assign().await;

        assert!(matches!(outcome, Outcome::Failed(ref err) if err.code == "REQUEST_FAILED"));
        assert!(prompter.selects().is_empty());
        assert_eq!(prompter.notices_of(NoticeKind::Error).len(), 1);
        runtime.dispose();
    }
}
