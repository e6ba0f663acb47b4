//! Records and list logic shared by the petclinic client views.

pub mod domain;
pub mod shared;
