pub mod listing;
pub mod writer;

pub use listing::DependencyListing;
pub use writer::LineWriter;
