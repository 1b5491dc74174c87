//! Concrete [`FormSchema`](crate::submission::FormSchema)s of both sites.

pub mod account;
pub mod report;
