//! HTML page handlers.

mod book;
mod crawlers;
mod home;
mod schedule;

pub use book::book_handler;
pub use crawlers::{robots_handler, sitemap_handler};
pub use home::home_handler;
pub use schedule::{SCHEDULE_TARGET, schedule_handler};
