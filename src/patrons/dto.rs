use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::RequesterClass;
use crate::parties::domain::model::RequesterEntity;
use crate::patrons::Patron;
use crate::utils::date::serializer;


// RequesterDto abstracts a registered borrower with its derived priority.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RequesterDto {
    pub requester_id: String,
    pub name: String,
    pub class: RequesterClass,
    pub priority_rank: u8,
    pub priority: String,
    pub department: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl RequesterDto {
    pub fn new(requester_id: &str, name: &str, class: RequesterClass) -> Self {
        Self {
            requester_id: requester_id.to_string(),
            name: name.to_string(),
            class,
            priority_rank: class.priority_rank(),
            priority: class.priority_description().to_string(),
            department: None,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for RequesterDto {
    fn id(&self) -> String {
        self.requester_id.to_string()
    }

    fn version(&self) -> i64 {
        0
    }
}

impl Patron for RequesterDto {
    fn class(&self) -> RequesterClass {
        self.class
    }
}

impl From<&RequesterEntity> for RequesterDto {
    fn from(other: &RequesterEntity) -> Self {
        let mut requester = RequesterDto::new(other.requester_id.as_str(), other.name.as_str(), other.class);
        requester.department = other.department.clone();
        requester.created_at = other.created_at;
        requester
    }
}

impl From<&RequesterDto> for RequesterEntity {
    fn from(other: &RequesterDto) -> Self {
        let mut requester = RequesterEntity::new(other.requester_id.as_str(), other.name.as_str(), other.class);
        requester.department = other.department.clone();
        requester.created_at = other.created_at;
        requester
    }
}

// DirectoryStatsDto counts registered requesters per class
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryStatsDto {
    pub total: usize,
    pub staff: usize,
    pub senior_learners: usize,
    pub junior_learners: usize,
}

impl DirectoryStatsDto {
    pub(crate) fn count<P: Patron>(patrons: &[P]) -> Self {
        let mut stats = DirectoryStatsDto { total: patrons.len(), ..Default::default() };
        for patron in patrons {
            if patron.is_staff() {
                stats.staff += 1;
            } else if patron.priority_rank() == 2 {
                stats.senior_learners += 1;
            } else {
                stats.junior_learners += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{RequesterClass, Seniority};
    use crate::patrons::Patron;
    use crate::patrons::dto::{DirectoryStatsDto, RequesterDto};

    #[tokio::test]
    async fn test_should_build_requester() {
        let requester = RequesterDto::new("t1", "Grace", RequesterClass::Staff);
        assert!(requester.is_staff());
        assert_eq!(1, requester.priority_rank);
        assert_eq!("Highest (Staff)", requester.priority.as_str());

        let junior = RequesterDto::new("j1", "Sam", RequesterClass::Learner(Seniority::Junior));
        assert!(!junior.is_staff());
        assert_eq!(3, junior.priority_rank());
    }

    #[tokio::test]
    async fn test_should_count_classes() {
        let requesters = vec![
            RequesterDto::new("t1", "a", RequesterClass::Staff),
            RequesterDto::new("s1", "b", RequesterClass::Learner(Seniority::Senior)),
            RequesterDto::new("s2", "c", RequesterClass::Learner(Seniority::Senior)),
            RequesterDto::new("j1", "d", RequesterClass::Learner(Seniority::Junior)),
        ];
        let stats = DirectoryStatsDto::count(&requesters);
        assert_eq!(DirectoryStatsDto { total: 4, staff: 1, senior_learners: 2, junior_learners: 1 }, stats);
    }

    #[tokio::test]
    async fn test_should_serialize_class_as_tagged_enum() {
        let requester = RequesterDto::new("s1", "b", RequesterClass::Learner(Seniority::Senior));
        let json = serde_json::to_value(&requester).expect("should serialize");
        assert_eq!(serde_json::json!({"Learner": "Senior"}), json["class"]);
    }
}
