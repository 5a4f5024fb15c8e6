use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;
use crate::books::domain::model::BookCopyEntity;
use crate::core::library::{LibraryResult, RequesterClass, Seniority};
use crate::core::repository::LibraryStore;
use crate::parties::domain::model::RequesterEntity;

const TITLES: [&str; 25] = [
    "Java: The Complete Reference", "Clean Code", "Design Patterns", "Spring Boot in Action",
    "Effective Java", "Head First Design Patterns", "Java Concurrency in Practice",
    "Spring Framework Essentials", "Data Structures and Algorithms", "Introduction to Programming",
    "Web Development with HTML & CSS", "JavaScript: The Good Parts", "Python Programming",
    "Database Management Systems", "Computer Networks", "Operating System Concepts",
    "Software Engineering", "Machine Learning Basics", "Artificial Intelligence",
    "Cybersecurity Fundamentals", "Mobile App Development", "Cloud Computing",
    "Mathematics for Computer Science", "Statistics and Probability", "Linear Algebra",
];

const AUTHORS: [&str; 12] = [
    "Herbert Schildt", "Robert Martin", "Gang of Four", "Craig Walls", "Joshua Bloch",
    "Eric Freeman", "Brian Goetz", "Rod Johnson", "Thomas Cormen", "Sarah Wilson",
    "Emily Davis", "Kevin Lee",
];

const FIRST_NAMES: [&str; 16] = [
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry",
    "Ivy", "Jack", "Kate", "Liam", "Maya", "Noah", "Olivia", "Peter",
];

const LAST_NAMES: [&str; 16] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Lee", "Clark", "Young",
];

const DEPARTMENTS: [&str; 10] = [
    "Mathematics", "Computer Science", "Physics", "Chemistry", "Biology",
    "English", "History", "Economics", "Art", "Music",
];

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SeedSummary {
    pub titles: usize,
    pub copies: usize,
    pub requesters: usize,
}

// the title index closes the id so two seeded titles never share a catalog id
fn isbn<R: Rng>(rng: &mut R, index: usize) -> String {
    format!("978-{}-{}-{:02}", rng.gen_range(100..1000), rng.gen_range(100..1000), index)
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn random_copies<R: Rng>(rng: &mut R, titles: usize) -> Vec<BookCopyEntity> {
    let mut copies = vec![];
    let chosen: Vec<&str> = TITLES.choose_multiple(rng, titles.min(TITLES.len())).copied().collect();
    for (index, title) in chosen.into_iter().enumerate() {
        let catalog_id = isbn(rng, index + 1);
        let author = pick(rng, &AUTHORS);
        for copy_number in 1..=rng.gen_range(1..=3u32) {
            copies.push(BookCopyEntity::new(catalog_id.as_str(), copy_number, title, author));
        }
    }
    copies
}

fn random_requesters<R: Rng>(rng: &mut R, count: usize) -> Vec<RequesterEntity> {
    let (mut staff, mut learners) = (0, 0);
    let mut requesters = vec![];
    for _ in 0..count {
        let name = format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES));
        let requester = match rng.gen_range(0..3) {
            0 => {
                staff += 1;
                let mut requester = RequesterEntity::new(format!("T{:03}", staff).as_str(), name.as_str(), RequesterClass::Staff);
                requester.department = Some(pick(rng, &DEPARTMENTS).to_string());
                requester
            }
            1 => {
                learners += 1;
                RequesterEntity::new(format!("SS{:03}", learners).as_str(), name.as_str(),
                                     RequesterClass::Learner(Seniority::Senior))
            }
            _ => {
                learners += 1;
                RequesterEntity::new(format!("JS{:03}", learners).as_str(), name.as_str(),
                                     RequesterClass::Learner(Seniority::Junior))
            }
        };
        requesters.push(requester);
    }
    requesters
}

/// Fills the store with random titles (1 to 3 copies each) and a mix of
/// staff, senior and junior requesters for local runs.
pub async fn seed_library(store: &LibraryStore, titles: usize, requesters: usize) -> LibraryResult<SeedSummary> {
    let (copies, requesters) = {
        let mut rng = rand::thread_rng();
        (random_copies(&mut rng, titles), random_requesters(&mut rng, requesters))
    };
    let mut ledger = store.lock().await;
    for copy in &copies {
        ledger.books.create(copy).await?;
    }
    for requester in &requesters {
        ledger.parties.create(requester).await?;
    }
    let summary = SeedSummary {
        titles: ledger.books.titles().await.len(),
        copies: copies.len(),
        requesters: requesters.len(),
    };
    info!("seeded {} titles with {} copies and {} requesters", summary.titles, summary.copies, summary.requesters);
    Ok(summary)
}
