use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::BorrowDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutBookCommandRequest {
    requester_id: String,
    title: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(requester_id: String, title: String) -> Self {
        Self {
            requester_id,
            title,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    checkout: BorrowDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(checkout: BorrowDto) -> Self {
        Self {
            checkout,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.borrow(req.title.as_str(), req.requester_id.as_str())
            .await.map_err(CommandError::from)
            .map(|outcome| CheckoutBookCommandResponse::new(
                BorrowDto::new(req.title.as_str(), req.requester_id.as_str(), outcome)))
    }
}
