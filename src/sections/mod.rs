//! The sections of the page, in document order.
mod format;
mod home;
mod overview;
mod prizes;
mod rules;
mod timeline;

pub use format::Format;
pub use home::Home;
pub use overview::Overview;
pub use prizes::Prizes;
pub use rules::Rules;
pub use timeline::Timeline;
