pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod hold;
pub mod parties;
pub mod patrons;
pub mod utils;
