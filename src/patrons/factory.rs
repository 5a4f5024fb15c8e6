use crate::core::domain::Configuration;
use crate::core::repository::LibraryStore;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;

pub fn create_patron_service(config: &Configuration, store: LibraryStore) -> Box<dyn PatronService> {
    Box::new(PatronServiceImpl::new(config, store))
}
