pub mod user;

pub use user::{
    LoginRequest, LoginResponse, PublicUser, SeedUser, SeedUsersRequest, SessionRequest,
    UserRecord,
};
