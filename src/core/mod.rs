pub mod archive;
pub mod index;
pub mod record;
pub mod site;
pub mod slug;

// Flat public surface for domain types and functions.
pub use archive::SourceReport;
pub use index::ReportIndex;
pub use record::{NewReport, ReportRecord, DATE_FORMAT};
pub use site::Site;
#[allow(unused_imports)]
pub use archive::ArchiveError;
#[allow(unused_imports)]
pub use slug::{slugify, FALLBACK_SLUG, MAX_SLUG_LEN};
