pub mod a001_owner;
pub mod a002_vet;
