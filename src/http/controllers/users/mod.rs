mod create;
mod delete;
mod fetch;
mod update;

pub use create::create;
pub use delete::delete;
pub use fetch::{get, list};
pub use update::update;
