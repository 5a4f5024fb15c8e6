use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::ReturnOutcome;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    requester_id: String,
    title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(requester_id: String, title: String) -> Self {
        Self {
            requester_id,
            title,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    status: String,
    returned: ReturnOutcome,
}

impl ReturnBookCommandResponse {
    pub fn new(returned: ReturnOutcome) -> Self {
        Self {
            status: "Returned".to_string(),
            returned,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.title.as_str(), req.requester_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::LibraryStore;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
    use crate::patrons::factory::create_patron_service;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let store = LibraryStore::new();
        let config = Configuration::new("test");
        let patron_cmd = AddPatronCommand::new(create_patron_service(&config, store.clone()));
        let book_cmd = AddBookCommand::new(create_catalog_service(&config, store.clone()).await);
        let checkout_cmd = CheckoutBookCommand::new(create_checkout_service(&config, store.clone()).await);
        let return_cmd = ReturnBookCommand::new(create_checkout_service(&config, store.clone()).await);

        let _ = book_cmd.execute(AddBookCommandRequest::new("978-1", 1, "X", "author")).await.expect("should add book");
        for (id, class) in [("A", "JuniorLearner"), ("B", "Staff"), ("C", "SeniorLearner")] {
            let _ = patron_cmd.execute(AddPatronCommandRequest::new(id, id, class)).await.expect("should add patron");
        }
        for id in ["A", "B", "C"] {
            let _ = checkout_cmd.execute(CheckoutBookCommandRequest::new(id.to_string(), "X".to_string()))
                .await.expect("should checkout or waitlist");
        }

        let res = return_cmd.execute(ReturnBookCommandRequest::new("A".to_string(), "X".to_string()))
            .await.expect("should return book");
        assert_eq!("Returned", res.status.as_str());
        assert_eq!("B", res.returned.reassigned[0].requester_id.as_str());

        let again = return_cmd.execute(ReturnBookCommandRequest::new("A".to_string(), "X".to_string())).await;
        assert!(matches!(again, Err(CommandError::Conflict { .. })));
    }
}
