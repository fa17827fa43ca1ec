//! Users module - accounts that own every other record.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{NewUser, User, UserCredentials};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
