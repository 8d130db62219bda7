// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod calendar;
mod error;
mod id_number;
mod paging;

// This is the public API of the library
pub use calendar::{Calendar, SystemCalendar};
pub use error::{IdNumberError, PagingError};
pub use id_number::{
    equivalent_id_numbers, extract_age, has_valid_length, is_legal_adult, is_male_by_sequence,
    is_valid_id_number, normalize_to_15, normalize_to_18,
};
pub use paging::{page_count, page_slice};
