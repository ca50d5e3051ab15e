//! Client-side record-set controller: one in-memory member list with search,
//! pagination, selection and inline-edit buffers kept consistent with it.

mod controller;
pub mod edit_buffer;
pub mod filter;
pub mod pagination;
pub mod selection;
pub mod store;

pub use controller::{RecordSetController, DEFAULT_PAGE_SIZE};
pub use edit_buffer::EditBuffer;
pub use selection::SelectionSet;
pub use store::RecordStore;
