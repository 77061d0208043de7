//! Reusable business rules for validator constraint chains.

pub mod format;
pub mod value;

pub use format::as_email;
pub use value::{
    equal, greater_than, in_set, less_than, max, min, pass, range_close, range_close_open,
    range_open, range_open_close,
};
