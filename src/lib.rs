pub mod check;
pub mod pe;
pub mod read;
pub mod steam;
pub mod version;
