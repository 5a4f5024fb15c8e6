use crate::core::domain::Identifiable;
use crate::core::library::RequesterClass;

pub mod command;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod controller;

pub(crate) trait Patron: Identifiable {
    fn class(&self) -> RequesterClass;
    fn priority_rank(&self) -> u8 {
        self.class().priority_rank()
    }
    fn is_staff(&self) -> bool {
        self.class() == RequesterClass::Staff
    }
}
