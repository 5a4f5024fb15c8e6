use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryResult, RequesterClass};
use crate::patrons::dto::RequesterDto;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;

pub(crate) struct AddPatronCommand {
    patron_service: Box<dyn PatronService>,
}

impl AddPatronCommand {
    pub(crate) fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddPatronCommandRequest {
    pub requester_id: String,
    pub name: String,
    // Staff, SeniorLearner or JuniorLearner
    pub class: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl AddPatronCommandRequest {
    pub fn new(requester_id: &str, name: &str, class: &str) -> Self {
        Self {
            requester_id: requester_id.to_string(),
            name: name.to_string(),
            class: class.to_string(),
            department: None,
        }
    }

    pub fn build_patron(&self) -> LibraryResult<RequesterDto> {
        let class = RequesterClass::try_from(self.class.to_string())?;
        let mut requester = RequesterDto::new(self.requester_id.as_str(), self.name.as_str(), class);
        requester.department = self.department.clone();
        Ok(requester)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddPatronCommandResponse {
    pub patron: RequesterDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: RequesterDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand {
    async fn execute(&self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        let patron = req.build_patron()?;
        self.patron_service.register(&patron).await.map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}
