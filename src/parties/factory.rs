use crate::parties::repository::memory_party_repository::MemoryPartyRepository;
use crate::parties::repository::PartyRepository;

pub(crate) fn create_party_repository() -> Box<dyn PartyRepository> {
    Box::new(MemoryPartyRepository::new())
}
