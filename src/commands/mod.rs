//! Console front end: one function per subcommand.

mod format;
mod readme;
mod search;
mod show;

pub use format::{listing_details, listing_summary};
pub use readme::readme;
pub use search::search;
pub use show::show;
