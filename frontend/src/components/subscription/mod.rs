//! Pages of the subscription site: package choice, account forms and confirmation.

pub mod account_form;
pub mod confirmation;
pub mod packages;
