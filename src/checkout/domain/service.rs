use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::dto::BookCopyDto;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::{Assignment, BorrowOutcome, ReturnOutcome};
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{LibraryLedger, LibraryStore};
use crate::gateway::events::{EventPublisher, publish_all};
use crate::hold::domain::model::WaitRequest;
use crate::hold::dto::{WaitingSummaryDto, WaitRequestDto};

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    store: LibraryStore,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, store: LibraryStore,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            store,
            events_publisher,
        }
    }

    fn metadata(&self, requester_id: &str) -> HashMap<String, String> {
        HashMap::from([
            ("branch_id".to_string(), self.branch_id.to_string()),
            ("requester_id".to_string(), requester_id.to_string()),
        ])
    }

    fn assignment_events(&self, assignments: &[Assignment]) -> LibraryResult<Vec<DomainEvent>> {
        let mut events = vec![];
        for assignment in assignments {
            events.push(DomainEvent::new(DomainEventType::Reassigned, "checkout", assignment.title.as_str(),
                                         &self.metadata(assignment.requester_id.as_str()), assignment)?);
        }
        Ok(events)
    }
}

pub(crate) fn validate_request(title: &str, requester_id: &str) -> LibraryResult<()> {
    if title.trim().is_empty() {
        return Err(LibraryError::validation("invalid book title", Some("400".to_string())));
    }
    if requester_id.trim().is_empty() {
        return Err(LibraryError::validation("invalid requester id", Some("400".to_string())));
    }
    Ok(())
}

async fn holds_title(ledger: &LibraryLedger, title: &str, requester_id: &str) -> bool {
    ledger.books.copies_of(title).await.iter().any(|c| c.is_held_by(requester_id))
}

/// Drains available copies of the title into the head of its waiting line.
/// Requests whose requester is gone or already holds the title are dropped.
pub(crate) async fn reconcile(ledger: &mut LibraryLedger, title: &str) -> LibraryResult<Vec<Assignment>> {
    let mut assignments = vec![];
    loop {
        let mut copy = match ledger.books.available_copies_of(title).await.into_iter().next() {
            Some(copy) => copy,
            None => break,
        };
        let next = match ledger.waiting_lines.dequeue_next(title) {
            Some(next) => next,
            None => break,
        };
        let requester_id = next.requester_id.as_str();
        if !ledger.parties.exists(requester_id).await || holds_title(ledger, title, requester_id).await {
            debug!("skipping stale request {} of {} for {}", next.request_id, requester_id, title);
            continue;
        }
        copy.lend(requester_id);
        ledger.books.update(&copy).await?;
        info!("assigned copy {} of {} to waiting {}", copy.copy_number, title, requester_id);
        assignments.push(Assignment::new(&copy, requester_id));
    }
    Ok(assignments)
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn borrow(&self, title: &str, requester_id: &str) -> LibraryResult<BorrowOutcome> {
        validate_request(title, requester_id)?;
        let (outcome, event) = {
            let mut ledger = self.store.lock().await;
            let copies = ledger.books.copies_of(title).await;
            if copies.is_empty() {
                warn!("rejected borrow of unknown title {} by {}", title, requester_id);
                return Err(LibraryError::not_found(format!("title {} not found", title).as_str()));
            }
            let requester = ledger.parties.get(requester_id).await?;
            if copies.iter().any(|c| c.is_held_by(requester_id)) {
                warn!("rejected borrow of {} by {}: already held", title, requester_id);
                return Err(LibraryError::already_held(
                    format!("requester {} already holds a copy of {}", requester_id, title).as_str()));
            }
            match copies.into_iter().find(|c| c.available) {
                Some(mut copy) => {
                    copy.lend(requester_id);
                    ledger.books.update(&copy).await?;
                    info!("lent copy {} of {} to {}", copy.copy_number, title, requester_id);
                    let outcome = BorrowOutcome::Fulfilled { copy_number: copy.copy_number };
                    (outcome, DomainEvent::new(DomainEventType::Borrowed, "checkout", title,
                                               &self.metadata(requester_id), &BookCopyDto::from(&copy))?)
                }
                None => {
                    let request = WaitRequest::new(title, requester_id, requester.class);
                    let position = ledger.waiting_lines.enqueue(request.clone())?;
                    info!("waitlisted {} for {} at position {}", requester_id, title, position);
                    let outcome = BorrowOutcome::Waitlisted { position };
                    (outcome, DomainEvent::new(DomainEventType::Waitlisted, "checkout", title,
                                               &self.metadata(requester_id), &WaitRequestDto::from_request(&request, position))?)
                }
            }
        };
        publish_all(self.events_publisher.as_ref(), &[event]).await;
        Ok(outcome)
    }

    async fn returned(&self, title: &str, requester_id: &str) -> LibraryResult<ReturnOutcome> {
        validate_request(title, requester_id)?;
        let (outcome, events) = {
            let mut ledger = self.store.lock().await;
            let held = ledger.books.copies_of(title).await.into_iter().find(|c| c.is_held_by(requester_id));
            let mut copy = match held {
                Some(copy) => copy,
                None => {
                    warn!("rejected return of {} by {}: not held", title, requester_id);
                    return Err(LibraryError::not_held(
                        format!("requester {} holds no copy of {}", requester_id, title).as_str()));
                }
            };
            copy.release();
            ledger.books.update(&copy).await?;
            info!("returned copy {} of {} from {}", copy.copy_number, title, requester_id);
            let reassigned = reconcile(&mut ledger, title).await?;

            let mut events = vec![DomainEvent::new(DomainEventType::Returned, "checkout", title,
                                                   &self.metadata(requester_id), &BookCopyDto::from(&copy))?];
            events.extend(self.assignment_events(&reassigned)?);
            let outcome = ReturnOutcome {
                title: title.to_string(),
                requester_id: requester_id.to_string(),
                copy_number: copy.copy_number,
                reassigned,
            };
            (outcome, events)
        };
        publish_all(self.events_publisher.as_ref(), &events).await;
        Ok(outcome)
    }

    async fn queue_position(&self, title: &str, requester_id: &str) -> LibraryResult<i64> {
        validate_request(title, requester_id)?;
        let ledger = self.store.lock().await;
        Ok(ledger.waiting_lines.position_of(title, requester_id)
            .map(|p| p as i64)
            .unwrap_or(-1))
    }

    async fn cancel_request(&self, title: &str, requester_id: &str) -> LibraryResult<bool> {
        validate_request(title, requester_id)?;
        let cancelled = {
            let mut ledger = self.store.lock().await;
            ledger.waiting_lines.cancel(title, requester_id)
        };
        if cancelled {
            info!("cancelled waiting request of {} for {}", requester_id, title);
            let event = DomainEvent::new(DomainEventType::Cancelled, "hold", title,
                                         &self.metadata(requester_id), &requester_id)?;
            publish_all(self.events_publisher.as_ref(), &[event]).await;
        }
        Ok(cancelled)
    }

    async fn waiting_line(&self, title: &str) -> LibraryResult<Vec<WaitRequestDto>> {
        let ledger = self.store.lock().await;
        Ok(WaitRequestDto::ordered(&ledger.waiting_lines.peek_ordered(title)))
    }

    async fn waiting_summary(&self) -> LibraryResult<WaitingSummaryDto> {
        let ledger = self.store.lock().await;
        Ok(WaitingSummaryDto {
            titles: ledger.waiting_lines.titles(),
            total_waiting: ledger.waiting_lines.total_waiting(),
        })
    }

    async fn loans_of(&self, requester_id: &str) -> LibraryResult<Vec<BookCopyDto>> {
        let ledger = self.store.lock().await;
        Ok(ledger.books.loans_of(requester_id).await.iter().map(BookCopyDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookCopyEntity;
    use crate::books::repository::BookRepository;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::domain::model::BorrowOutcome;
    use crate::checkout::domain::service::CheckoutServiceImpl;
    use crate::checkout::factory;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::{LibraryError, RequesterClass, Seniority};
    use crate::core::repository::{LibraryStore, Repository};
    use crate::gateway::factory::register;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::parties::domain::model::RequesterEntity;

    const JUNIOR: RequesterClass = RequesterClass::Learner(Seniority::Junior);
    const SENIOR: RequesterClass = RequesterClass::Learner(Seniority::Senior);
    const STAFF: RequesterClass = RequesterClass::Staff;

    async fn setup(copies: u32, requesters: &[(&str, RequesterClass)]) -> LibraryStore {
        let store = LibraryStore::new();
        {
            let mut ledger = store.lock().await;
            for n in 1..=copies {
                let _ = ledger.books.create(&BookCopyEntity::new("X-1", n, "X", "author"))
                    .await.expect("should add copy");
            }
            for (id, class) in requesters {
                let _ = ledger.parties.create(&RequesterEntity::new(id, id, *class))
                    .await.expect("should add requester");
            }
        }
        store
    }

    async fn build_service(store: &LibraryStore) -> Box<dyn CheckoutService> {
        factory::create_checkout_service(&Configuration::new("test"), store.clone()).await
    }

    #[tokio::test]
    async fn test_should_fulfill_lowest_copy_first() {
        let store = setup(2, &[("a", JUNIOR), ("b", JUNIOR)]).await;
        let checkout_svc = build_service(&store).await;
        assert_eq!(BorrowOutcome::Fulfilled { copy_number: 1 }, checkout_svc.borrow("X", "a").await.expect("should borrow"));
        assert_eq!(BorrowOutcome::Fulfilled { copy_number: 2 }, checkout_svc.borrow("X", "b").await.expect("should borrow"));

        let loans = checkout_svc.loans_of("a").await.expect("should list loans");
        assert_eq!(1, loans.len());
        assert_eq!(Some("a".to_string()), loans[0].holder_id);
        assert!(loans[0].borrowed_at.is_some());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_title_and_requester() {
        let store = setup(1, &[("a", JUNIOR)]).await;
        let checkout_svc = build_service(&store).await;
        assert!(matches!(checkout_svc.borrow("Y", "a").await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(checkout_svc.borrow("X", "nobody").await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(checkout_svc.borrow(" ", "a").await, Err(LibraryError::Validation { .. })));
        assert!(matches!(checkout_svc.borrow("X", "").await, Err(LibraryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_second_loan_of_same_title() {
        let store = setup(2, &[("a", JUNIOR)]).await;
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "a").await.expect("should borrow");
        assert!(matches!(checkout_svc.borrow("X", "a").await, Err(LibraryError::AlreadyHeld { .. })));
        assert_eq!(1, checkout_svc.loans_of("a").await.expect("should list loans").len());
    }

    #[tokio::test]
    async fn test_should_waitlist_and_reject_duplicate_request() {
        let store = setup(1, &[("a", JUNIOR), ("b", SENIOR)]).await;
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "a").await.expect("should borrow");
        assert_eq!(BorrowOutcome::Waitlisted { position: 1 }, checkout_svc.borrow("X", "b").await.expect("should waitlist"));
        assert!(matches!(checkout_svc.borrow("X", "b").await, Err(LibraryError::DuplicateRequest { .. })));
        assert_eq!(1, checkout_svc.waiting_line("X").await.expect("should list line").len());
    }

    #[tokio::test]
    async fn test_should_reassign_by_priority_on_return() {
        let store = setup(1, &[("A", JUNIOR), ("B", STAFF), ("C", SENIOR)]).await;
        let checkout_svc = build_service(&store).await;

        assert_eq!(BorrowOutcome::Fulfilled { copy_number: 1 }, checkout_svc.borrow("X", "A").await.expect("should borrow"));
        assert_eq!(BorrowOutcome::Waitlisted { position: 1 }, checkout_svc.borrow("X", "B").await.expect("should waitlist"));
        assert_eq!(BorrowOutcome::Waitlisted { position: 2 }, checkout_svc.borrow("X", "C").await.expect("should waitlist"));

        let returned = checkout_svc.returned("X", "A").await.expect("should return");
        assert_eq!(1, returned.copy_number);
        assert_eq!(1, returned.reassigned.len());
        assert_eq!("B", returned.reassigned[0].requester_id.as_str());

        let loans = checkout_svc.loans_of("B").await.expect("should list loans");
        assert_eq!(1, loans[0].copy_number);
        assert_eq!(1, checkout_svc.queue_position("X", "C").await.expect("should report position"));
        assert_eq!(-1, checkout_svc.queue_position("X", "B").await.expect("should report position"));
        assert!(checkout_svc.loans_of("A").await.expect("should list loans").is_empty());
    }

    #[tokio::test]
    async fn test_should_serve_later_staff_before_earlier_learner() {
        let store = setup(1, &[("holder", STAFF), ("j", JUNIOR), ("s", SENIOR), ("t", STAFF)]).await;
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "holder").await.expect("should borrow");
        assert_eq!(BorrowOutcome::Waitlisted { position: 1 }, checkout_svc.borrow("X", "j").await.expect("should waitlist"));
        assert_eq!(BorrowOutcome::Waitlisted { position: 1 }, checkout_svc.borrow("X", "s").await.expect("should waitlist"));
        assert_eq!(BorrowOutcome::Waitlisted { position: 1 }, checkout_svc.borrow("X", "t").await.expect("should waitlist"));

        let order: Vec<String> = checkout_svc.waiting_line("X").await.expect("should list line")
            .iter().map(|r| r.requester_id.to_string()).collect();
        assert_eq!(vec!["t", "s", "j"], order);

        let returned = checkout_svc.returned("X", "holder").await.expect("should return");
        assert_eq!("t", returned.reassigned[0].requester_id.as_str());
    }

    #[tokio::test]
    async fn test_should_serve_equal_priority_first_come_first_served() {
        let store = setup(1, &[("holder", STAFF), ("s1", SENIOR), ("s2", SENIOR)]).await;
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "holder").await.expect("should borrow");
        let _ = checkout_svc.borrow("X", "s1").await.expect("should waitlist");
        let _ = checkout_svc.borrow("X", "s2").await.expect("should waitlist");

        let returned = checkout_svc.returned("X", "holder").await.expect("should return");
        assert_eq!("s1", returned.reassigned[0].requester_id.as_str());
        let returned = checkout_svc.returned("X", "s1").await.expect("should return");
        assert_eq!("s2", returned.reassigned[0].requester_id.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_return_without_loan() {
        let store = setup(1, &[("a", JUNIOR), ("b", JUNIOR)]).await;
        let checkout_svc = build_service(&store).await;
        assert!(matches!(checkout_svc.returned("X", "a").await, Err(LibraryError::NotHeld { .. })));
        let _ = checkout_svc.borrow("X", "a").await.expect("should borrow");
        assert!(matches!(checkout_svc.returned("X", "b").await, Err(LibraryError::NotHeld { .. })));
        assert!(matches!(checkout_svc.returned("Y", "a").await, Err(LibraryError::NotHeld { .. })));
    }

    #[tokio::test]
    async fn test_should_free_copy_when_line_is_empty() {
        let store = setup(1, &[("a", JUNIOR), ("b", JUNIOR)]).await;
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "a").await.expect("should borrow");
        let returned = checkout_svc.returned("X", "a").await.expect("should return");
        assert!(returned.reassigned.is_empty());

        let ledger = store.lock().await;
        assert_eq!(1, ledger.books.available_copies_of("X").await.len());
        assert_eq!(0, ledger.waiting_lines.len("X"));
    }

    #[tokio::test]
    async fn test_should_leave_other_titles_untouched_on_return() {
        let store = setup(1, &[("a", JUNIOR), ("b", STAFF), ("c", SENIOR)]).await;
        {
            let mut ledger = store.lock().await;
            let _ = ledger.books.create(&BookCopyEntity::new("Y-1", 1, "Y", "author"))
                .await.expect("should add copy");
        }
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "a").await.expect("should borrow");
        let _ = checkout_svc.borrow("Y", "b").await.expect("should borrow");
        let _ = checkout_svc.borrow("Y", "c").await.expect("should waitlist");

        let returned = checkout_svc.returned("X", "a").await.expect("should return");
        assert!(returned.reassigned.is_empty());

        assert_eq!(1, checkout_svc.queue_position("Y", "c").await.expect("should report position"));
        let loans = checkout_svc.loans_of("b").await.expect("should list loans");
        assert_eq!(1, loans.len());
        assert_eq!("Y", loans[0].title.as_str());
        let ledger = store.lock().await;
        assert!(ledger.books.available_copies_of("Y").await.is_empty());
        assert_eq!(vec!["Y".to_string()], ledger.waiting_lines.titles());
    }

    #[tokio::test]
    async fn test_should_cancel_waiting_request() {
        let store = setup(1, &[("a", JUNIOR), ("b", SENIOR), ("c", JUNIOR)]).await;
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "a").await.expect("should borrow");
        let _ = checkout_svc.borrow("X", "b").await.expect("should waitlist");
        let _ = checkout_svc.borrow("X", "c").await.expect("should waitlist");

        assert!(checkout_svc.cancel_request("X", "b").await.expect("should cancel"));
        assert!(!checkout_svc.cancel_request("X", "b").await.expect("should cancel"));
        assert_eq!(1, checkout_svc.queue_position("X", "c").await.expect("should report position"));

        let returned = checkout_svc.returned("X", "a").await.expect("should return");
        assert_eq!("c", returned.reassigned[0].requester_id.as_str());
        assert!(checkout_svc.waiting_line("X").await.expect("should list line").is_empty());
    }

    #[tokio::test]
    async fn test_should_skip_stale_request_during_reconcile() {
        let store = LibraryStore::new();
        {
            let mut ledger = store.lock().await;
            for (catalog_id, title) in [("X-1", "X"), ("X-2", "X")] {
                let _ = ledger.books.create(&BookCopyEntity::new(catalog_id, 1, title, "author"))
                    .await.expect("should add copy");
            }
            for (id, class) in [("holder", STAFF), ("s", SENIOR), ("j", JUNIOR)] {
                let _ = ledger.parties.create(&RequesterEntity::new(id, id, class)).await.expect("should add requester");
            }
        }
        let checkout_svc = build_service(&store).await;
        let _ = checkout_svc.borrow("X", "holder").await.expect("should borrow");
        let _ = checkout_svc.borrow("X", "s").await.expect("should borrow second copy");
        let _ = checkout_svc.borrow("X", "j").await.expect("should waitlist");
        {
            // j gets a copy out of band while still parked in the line
            let mut ledger = store.lock().await;
            let mut copy = ledger.books.find_copy("X-2", 1).await.expect("should find copy");
            copy.release();
            copy.lend("j");
            let _ = ledger.books.update(&copy).await.expect("should update copy");
        }
        let returned = checkout_svc.returned("X", "holder").await.expect("should return");
        assert!(returned.reassigned.is_empty());
        assert_eq!(-1, checkout_svc.queue_position("X", "j").await.expect("should report position"));
    }

    #[tokio::test]
    async fn test_should_report_minus_one_for_unknown_position() {
        let store = setup(1, &[("a", JUNIOR)]).await;
        let checkout_svc = build_service(&store).await;
        assert_eq!(-1, checkout_svc.queue_position("X", "a").await.expect("should report position"));
        assert_eq!(-1, checkout_svc.queue_position("unknown", "a").await.expect("should report position"));
    }

    #[tokio::test]
    async fn test_should_publish_events_after_allocation() {
        let store = setup(1, &[("A", JUNIOR), ("B", STAFF)]).await;
        let reader = MemoryPublisher::new();
        let publisher = register(reader.clone()).await;
        let checkout_svc = CheckoutServiceImpl::new(&Configuration::new("test"), store.clone(), publisher);

        let _ = checkout_svc.borrow("X", "A").await.expect("should borrow");
        let _ = checkout_svc.borrow("X", "B").await.expect("should waitlist");
        let _ = checkout_svc.returned("X", "A").await.expect("should return");

        let kinds: Vec<DomainEventType> = reader.events().await.iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::Borrowed, DomainEventType::Waitlisted,
                        DomainEventType::Returned, DomainEventType::Reassigned], kinds);
        let events = reader.events().await;
        assert_eq!(Some(&"B".to_string()), events[3].metadata.get("requester_id"));
    }

    #[tokio::test]
    async fn test_should_lend_single_copy_once_under_concurrency() {
        let requesters: Vec<(String, RequesterClass)> = (0..20)
            .map(|i| (format!("r{}", i), if i % 2 == 0 { SENIOR } else { JUNIOR }))
            .collect();
        let refs: Vec<(&str, RequesterClass)> = requesters.iter().map(|(id, c)| (id.as_str(), *c)).collect();
        let store = setup(1, &refs).await;

        let mut handles = vec![];
        for (id, _) in requesters.iter() {
            let store = store.clone();
            let id = id.to_string();
            handles.push(tokio::spawn(async move {
                let checkout_svc = factory::create_checkout_service(&Configuration::new("test"), store).await;
                checkout_svc.borrow("X", id.as_str()).await
            }));
        }
        let mut fulfilled = 0;
        let mut positions = vec![];
        for handle in handles {
            match handle.await.expect("should join") {
                Ok(BorrowOutcome::Fulfilled { .. }) => fulfilled += 1,
                Ok(BorrowOutcome::Waitlisted { position }) => positions.push(position),
                Err(err) => panic!("unexpected rejection {}", err),
            }
        }
        assert_eq!(1, fulfilled);
        assert_eq!(19, positions.len());

        let ledger = store.lock().await;
        let held: Vec<BookCopyEntity> = ledger.books.copies_of("X").await.into_iter().filter(|c| !c.available).collect();
        assert_eq!(1, held.len());
        assert_eq!(19, ledger.waiting_lines.len("X"));
    }

    #[tokio::test]
    async fn test_should_keep_invariants_under_concurrent_returns() {
        let ids: Vec<String> = (0..12).map(|i| format!("r{}", i)).collect();
        let refs: Vec<(&str, RequesterClass)> = ids.iter().enumerate()
            .map(|(i, id)| (id.as_str(), if i % 3 == 0 { STAFF } else { JUNIOR }))
            .collect();
        let store = setup(3, &refs).await;
        let shared = Arc::new(ids);

        let mut handles = vec![];
        for i in 0..shared.len() {
            let store = store.clone();
            let ids = shared.clone();
            handles.push(tokio::spawn(async move {
                let checkout_svc = factory::create_checkout_service(&Configuration::new("test"), store).await;
                let id = ids[i].as_str();
                let _ = checkout_svc.borrow("X", id).await;
                let _ = checkout_svc.returned("X", id).await;
            }));
        }
        for handle in handles {
            handle.await.expect("should join");
        }

        let ledger = store.lock().await;
        let copies = ledger.books.copies_of("X").await;
        let holders: Vec<String> = copies.iter().filter_map(|c| c.holder_id.clone()).collect();
        let mut unique = holders.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(holders.len(), unique.len());
        // no copy stays idle while somebody waits
        let available = copies.iter().filter(|c| c.available).count();
        assert!(available == 0 || ledger.waiting_lines.len("X") == 0);
    }

    #[tokio::test]
    async fn test_should_fulfill_every_borrower_when_copies_suffice() {
        let ids: Vec<String> = (0..8).map(|i| format!("r{}", i)).collect();
        let refs: Vec<(&str, RequesterClass)> = ids.iter().enumerate()
            .map(|(i, id)| (id.as_str(), if i % 2 == 0 { STAFF } else { JUNIOR }))
            .collect();
        let store = setup(8, &refs).await;

        let mut handles = vec![];
        for id in ids.iter() {
            let store = store.clone();
            let id = id.to_string();
            handles.push(tokio::spawn(async move {
                let checkout_svc = factory::create_checkout_service(&Configuration::new("test"), store).await;
                checkout_svc.borrow("X", id.as_str()).await
            }));
        }
        let mut copy_numbers = vec![];
        for handle in handles {
            match handle.await.expect("should join") {
                Ok(BorrowOutcome::Fulfilled { copy_number }) => copy_numbers.push(copy_number),
                Ok(BorrowOutcome::Waitlisted { position }) => panic!("unexpected wait at {}", position),
                Err(err) => panic!("unexpected rejection {}", err),
            }
        }
        copy_numbers.sort();
        assert_eq!((1..=8).collect::<Vec<u32>>(), copy_numbers);

        let ledger = store.lock().await;
        assert!(ledger.books.available_copies_of("X").await.is_empty());
        assert_eq!(0, ledger.waiting_lines.total_waiting());
    }
}
