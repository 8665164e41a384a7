//! Domain types shared by every dashboard view.
//!
//! These are pure data types with no infrastructure dependencies. Relational
//! integrity between records is the backend's concern, not ours.

mod item;
mod query;

pub use item::{CollectionItem, Identified, Searchable, id_from_any, null_as_default};
pub use query::{EqFilter, Mutation, OrderBy, Record, SelectQuery, SortDirection};
