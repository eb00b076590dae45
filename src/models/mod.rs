pub mod loaders;
pub mod rating;
pub mod response;
pub mod teacher;

pub use loaders::load_roster_from_toml;
pub use rating::RatingWidget;
pub use response::{ResponseRecord, StudentInfo};
pub use teacher::{Roster, Teacher};
