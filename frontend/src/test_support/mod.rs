#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Asset, AssetRequest, RequestStatus};
    use crate::components::prompt::{ConfirmPrompt, Notice, NoticeKind, Prompter, SelectPrompt};
    use crate::state::session::{Role, SessionUser};
    use futures::future::{FutureExt, LocalBoxFuture};
    use serde_json::{json, Value};
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    pub fn hr_user() -> SessionUser {
        SessionUser {
            email: "hr@example.com".into(),
            name: Some("Hana HR".into()),
            role: Role::Hr,
        }
    }

    pub fn employee_user() -> SessionUser {
        SessionUser {
            email: "bob@example.com".into(),
            name: Some("Bob".into()),
            role: Role::Employee,
        }
    }

    pub fn request_json(id: &str, status: &str) -> Value {
        json!({
            "_id": id,
            "requesterName": "Alice",
            "assetName": "Laptop",
            "requestDate": "2025-01-02T09:30:00.000Z",
            "requestStatus": status
        })
    }

    pub fn asset_request(id: &str, status: RequestStatus) -> AssetRequest {
        AssetRequest {
            id: id.into(),
            requester_name: "Alice".into(),
            asset_name: "Laptop".into(),
            request_date: "2025-01-02T09:30:00.000Z".into(),
            status,
        }
    }

    pub fn asset_json(id: &str, name: &str, quantity: u32) -> Value {
        json!({
            "_id": id,
            "name": name,
            "quantity": quantity,
            "type": "Returnable",
            "hrEmail": "hr@example.com"
        })
    }

    pub fn asset(id: &str, name: &str, quantity: u32) -> Asset {
        serde_json::from_value(asset_json(id, name, quantity)).expect("asset fixture")
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Shown {
        Confirm(ConfirmPrompt),
        Select(SelectPrompt),
        Notice(Notice),
    }

    #[derive(Default)]
    struct Script {
        confirms: VecDeque<bool>,
        selections: VecDeque<Option<String>>,
        shown: Vec<Shown>,
    }

    /// Answers prompts from a queue and records everything shown.
    /// Unscripted prompts are declined.
    #[derive(Clone, Default)]
    pub struct ScriptedPrompter {
        script: Rc<RefCell<Script>>,
    }

    impl ScriptedPrompter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn confirm_with(self, answer: bool) -> Self {
            self.script.borrow_mut().confirms.push_back(answer);
            self
        }

        pub fn select_with(self, answer: Option<&str>) -> Self {
            self.script
                .borrow_mut()
                .selections
                .push_back(answer.map(str::to_string));
            self
        }

        pub fn shown(&self) -> Vec<Shown> {
            self.script.borrow().shown.clone()
        }

        pub fn confirms(&self) -> Vec<ConfirmPrompt> {
            self.shown()
                .into_iter()
                .filter_map(|shown| match shown {
                    Shown::Confirm(prompt) => Some(prompt),
                    _ => None,
                })
                .collect()
        }

        pub fn selects(&self) -> Vec<SelectPrompt> {
            self.shown()
                .into_iter()
                .filter_map(|shown| match shown {
                    Shown::Select(prompt) => Some(prompt),
                    _ => None,
                })
                .collect()
        }

        pub fn notices(&self) -> Vec<Notice> {
            self.shown()
                .into_iter()
                .filter_map(|shown| match shown {
                    Shown::Notice(notice) => Some(notice),
                    _ => None,
                })
                .collect()
        }

        pub fn notices_of(&self, kind: NoticeKind) -> Vec<Notice> {
            self.notices()
                .into_iter()
                .filter(|notice| notice.kind == kind)
                .collect()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, prompt: ConfirmPrompt) -> LocalBoxFuture<'static, bool> {
            let mut script = self.script.borrow_mut();
            script.shown.push(Shown::Confirm(prompt));
            let answer = script.confirms.pop_front().unwrap_or(false);
            async move { answer }.boxed_local()
        }

        fn select(&self, prompt: SelectPrompt) -> LocalBoxFuture<'static, Option<String>> {
            let mut script = self.script.borrow_mut();
            script.shown.push(Shown::Select(prompt));
            let answer = script.selections.pop_front().flatten();
            async move { answer }.boxed_local()
        }

        fn notify(&self, notice: Notice) {
            self.script.borrow_mut().shown.push(Shown::Notice(notice));
        }
    }
}
