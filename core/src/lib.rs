//! Client-side post filtering for a bilingual blog.
//!
//! A rendered page is read into a [`page::Page`], either with
//! [`extract::parse_page`] or by constructing it directly. Activating a
//! [`script::PageScript`] against it indexes the post cards once and then
//! answers UI events (typing, tag clicks, nav and scroll controls) by
//! toggling classes on the page.

pub mod config;
pub mod controller;
pub mod extract;
pub mod filter;
pub mod index;
pub mod locale;
pub mod nav;
pub mod page;
pub mod persist;
pub mod scroll;
pub mod script;
pub mod tokenizer;

pub use controller::FilterController;
pub use filter::{apply_filters, FilterOutcome, FilterState, TagSelection};
pub use index::{CardId, CardIndex, IndexedCard};
pub use locale::Locale;
pub use page::Page;
pub use script::{Dispatch, PageEvent, PageScript};
