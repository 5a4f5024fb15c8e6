use crate::core::domain::Identifiable;
use crate::core::library::CopyStatus;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn copy_number(&self) -> u32;
    fn status(&self) -> CopyStatus;
    fn holder_id(&self) -> Option<&str>;
}
