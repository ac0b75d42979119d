//! Jobs board: filtering, pagination and the location dropdown.

mod filter;
mod locations;
mod pagination;
pub mod router;
mod session;

pub use filter::{filter_listings, FilterState};
pub use locations::{location_options, LocationOption, LocationSelector, ALL_LOCATIONS};
pub use pagination::{PageView, Paginator, PAGE_SIZE};
pub use router::{board_page, board_router, BoardState, JobBoardQuery, JobBoardResponse};
pub use session::{JobBoardSession, ScrollRequest};
