pub mod actor;
pub mod cast_member;
pub mod production;
pub mod user;
