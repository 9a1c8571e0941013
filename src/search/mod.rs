//! Listing search: filter, sort and paginate over the record store, with the
//! active criteria mirrored into a shareable query string.

pub mod controller;
pub mod criteria;
pub mod filter;
pub mod pager;
pub mod query_string;
pub mod sort;

pub use controller::{QueryController, ResultPage};
pub use criteria::FilterCriteria;
pub use filter::filter;
pub use pager::{clamp_page, page_links, paginate, Page, PageLink};
pub use query_string::{from_query_string, to_query_string};
pub use sort::{sort, SortKey};
