use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::TitleSummaryDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::hold::dto::WaitingSummaryDto;

pub(crate) struct InventoryCommand {
    catalog_service: Box<dyn CatalogService>,
    checkout_service: Box<dyn CheckoutService>,
}

impl InventoryCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>, checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            catalog_service,
            checkout_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct InventoryCommandResponse {
    titles: Vec<TitleSummaryDto>,
    total_copies: usize,
    available_copies: usize,
    waiting_titles: Vec<String>,
    total_waiting: usize,
}

impl InventoryCommandResponse {
    pub fn new(titles: Vec<TitleSummaryDto>, waiting: WaitingSummaryDto) -> Self {
        Self {
            total_copies: titles.iter().map(|t| t.total).sum(),
            available_copies: titles.iter().map(|t| t.available).sum(),
            titles,
            waiting_titles: waiting.titles,
            total_waiting: waiting.total_waiting,
        }
    }
}

#[async_trait]
impl Command<(), InventoryCommandResponse> for InventoryCommand {
    async fn execute(&self, _req: ()) -> Result<InventoryCommandResponse, CommandError> {
        let titles = self.catalog_service.inventory().await?;
        let waiting = self.checkout_service.waiting_summary().await?;
        Ok(InventoryCommandResponse::new(titles, waiting))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookCopyDto;
    use crate::catalog::command::inventory_cmd::InventoryCommand;
    use crate::catalog::factory;
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::{RequesterClass, Seniority};
    use crate::core::repository::LibraryStore;
    use crate::patrons::dto::RequesterDto;
    use crate::patrons::factory::create_patron_service;

    #[tokio::test]
    async fn test_should_run_inventory() {
        let store = LibraryStore::new();
        let config = Configuration::new("test");
        let svc = factory::create_catalog_service(&config, store.clone()).await;
        for (id, n, title) in [("1", 1, "A"), ("1", 2, "A"), ("2", 1, "B")] {
            let _ = svc.add_copy(&BookCopyDto::new(id, n, title, "author")).await.expect("should add copy");
        }
        let res = InventoryCommand::new(svc, create_checkout_service(&config, store.clone()).await)
            .execute(()).await.expect("should list inventory");
        assert_eq!(2, res.titles.len());
        assert_eq!(3, res.total_copies);
        assert_eq!(3, res.available_copies);
        assert_eq!(0, res.total_waiting);
        assert!(res.waiting_titles.is_empty());
    }

    #[tokio::test]
    async fn test_should_report_waiting_in_inventory() {
        let store = LibraryStore::new();
        let config = Configuration::new("test");
        let svc = factory::create_catalog_service(&config, store.clone()).await;
        let _ = svc.add_copy(&BookCopyDto::new("1", 1, "B", "author")).await.expect("should add copy");
        let patron_svc = create_patron_service(&config, store.clone());
        for id in ["j1", "j2", "j3"] {
            let _ = patron_svc.register(&RequesterDto::new(id, id, RequesterClass::Learner(Seniority::Junior)))
                .await.expect("should register");
        }
        let checkout_svc = create_checkout_service(&config, store.clone()).await;
        for id in ["j1", "j2", "j3"] {
            let _ = checkout_svc.borrow("B", id).await.expect("should borrow or waitlist");
        }

        let res = InventoryCommand::new(svc, checkout_svc).execute(()).await.expect("should list inventory");
        assert_eq!(2, res.total_waiting);
        assert_eq!(vec!["B".to_string()], res.waiting_titles);
        assert_eq!(2, res.titles[0].waiting);
        assert_eq!(0, res.available_copies);
    }
}
