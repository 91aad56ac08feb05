//! Fetch-on-mount list pages (courses, jobs). One generic fetcher, one source per page.

pub mod catalog;
pub mod fetcher;

pub use catalog::{CoursePage, JobPage};
pub use fetcher::ListView;
