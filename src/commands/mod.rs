pub mod compare;
pub mod complete;
pub mod locate;
pub mod read_version;
mod utils;
pub mod vdf_to_json;
