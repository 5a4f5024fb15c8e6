use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::TitleSummaryDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) query: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    titles: Vec<TitleSummaryDto>,
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_titles(req.query.as_str())
            .await.map_err(CommandError::from).map(|titles| SearchBooksCommandResponse { titles })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookCopyDto;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::LibraryStore;

    #[tokio::test]
    async fn test_should_run_search_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), LibraryStore::new()).await;
        let _ = svc.add_copy(&BookCopyDto::new("1", 1, "Design Patterns", "Gang of Four")).await.expect("should add copy");
        let cmd = SearchBooksCommand::new(svc);

        let res = cmd.execute(SearchBooksCommandRequest { query: "pattern".to_string() }).await.expect("should search");
        assert_eq!(1, res.titles.len());
        let blank = cmd.execute(SearchBooksCommandRequest { query: "".to_string() }).await;
        assert!(matches!(blank, Err(CommandError::Validation { .. })));
    }
}
