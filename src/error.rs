use thiserror::Error;

/// Errors from the identity-number operations.
///
/// These are the fatal tier of the failure policy: a substring that already
/// passed the format guard failed to parse as a number, which indicates a bug
/// or an unguarded call rather than routine bad input. Inputs that merely have
/// the wrong shape never produce these; they get `None`/`false`/`0` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdNumberError {
    #[error("non-numeric {field} field in identity number {input:?}")]
    NonNumericField { field: &'static str, input: String },
}

/// Errors from the in-memory pagination helper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("page size must be at least 1, got {page_size}")]
    InvalidPageSize { page_size: usize },

    #[error("requested page {page_num} but there are only {pages} pages")]
    PageOutOfRange { page_num: usize, pages: usize },
}
