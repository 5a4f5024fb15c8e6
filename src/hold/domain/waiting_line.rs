use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use crate::core::library::{LibraryError, LibraryResult};
use crate::hold::domain::model::{QueueKey, WaitRequest};

// WaitingLine keeps the requests of one title in service order.
#[derive(Debug, Default)]
struct WaitingLine {
    requests: BTreeMap<QueueKey, WaitRequest>,
    by_requester: HashMap<String, QueueKey>,
}

impl WaitingLine {
    fn insert(&mut self, request: WaitRequest) -> usize {
        let key = request.key();
        self.by_requester.insert(request.requester_id.to_string(), key);
        self.requests.insert(key, request);
        self.requests.range(..=key).count()
    }

    fn pop_first(&mut self) -> Option<WaitRequest> {
        let key = *self.requests.keys().next()?;
        let request = self.requests.remove(&key)?;
        self.by_requester.remove(request.requester_id.as_str());
        Some(request)
    }

    fn remove(&mut self, requester_id: &str) -> Option<WaitRequest> {
        let key = self.by_requester.remove(requester_id)?;
        self.requests.remove(&key)
    }

    fn position_of(&self, requester_id: &str) -> Option<usize> {
        let key = self.by_requester.get(requester_id)?;
        Some(self.requests.range(..=*key).count())
    }

    fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// WaitingLines holds one waiting line per title. A line exists only while
/// it has at least one request; arrival order comes from a counter so equal
/// ranks are always served first-come first-served.
#[derive(Debug, Default)]
pub(crate) struct WaitingLines {
    lines: HashMap<String, WaitingLine>,
    sequence: u64,
}

impl WaitingLines {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Parks the request in the line of its title and returns its 1-based position.
    pub(crate) fn enqueue(&mut self, mut request: WaitRequest) -> LibraryResult<usize> {
        let title = request.title.to_string();
        if let Some(line) = self.lines.get(title.as_str()) {
            if line.by_requester.contains_key(request.requester_id.as_str()) {
                return Err(LibraryError::duplicate_request(
                    format!("requester {} is already waiting for {}", request.requester_id, title).as_str()));
            }
        }
        self.sequence += 1;
        request.sequence = self.sequence;
        let line = self.lines.entry(title.to_string()).or_insert_with(|| {
            debug!("creating waiting line for {}", title);
            WaitingLine::default()
        });
        Ok(line.insert(request))
    }

    pub(crate) fn peek_ordered(&self, title: &str) -> Vec<WaitRequest> {
        self.lines.get(title)
            .map(|line| line.requests.values().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn dequeue_next(&mut self, title: &str) -> Option<WaitRequest> {
        let line = self.lines.get_mut(title)?;
        let next = line.pop_first();
        self.drop_if_empty(title);
        next
    }

    pub(crate) fn cancel(&mut self, title: &str, requester_id: &str) -> bool {
        let removed = match self.lines.get_mut(title) {
            Some(line) => line.remove(requester_id).is_some(),
            None => false,
        };
        self.drop_if_empty(title);
        removed
    }

    pub(crate) fn position_of(&self, title: &str, requester_id: &str) -> Option<usize> {
        self.lines.get(title)?.position_of(requester_id)
    }

    pub(crate) fn len(&self, title: &str) -> usize {
        self.lines.get(title).map(|line| line.requests.len()).unwrap_or(0)
    }

    // titles that currently have someone waiting, sorted
    pub(crate) fn titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.lines.keys().cloned().collect();
        titles.sort();
        titles
    }

    pub(crate) fn total_waiting(&self) -> usize {
        self.lines.values().map(|line| line.requests.len()).sum()
    }

    fn drop_if_empty(&mut self, title: &str) {
        if self.lines.get(title).map(WaitingLine::is_empty).unwrap_or(false) {
            self.lines.remove(title);
            debug!("removed empty waiting line for {}", title);
        }
    }
}
