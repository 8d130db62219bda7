use crate::error::PagingError;

/// Number of pages needed to show `total` records `page_size` at a time.
///
/// ```
/// # use cn_idnum::page_count;
/// assert_eq!(page_count(14, 5), Ok(3));
/// assert_eq!(page_count(15, 5), Ok(3));
/// assert_eq!(page_count(16, 5), Ok(4));
/// ```
pub fn page_count(total: usize, page_size: usize) -> Result<usize, PagingError> {
    if page_size == 0 {
        return Err(PagingError::InvalidPageSize { page_size });
    }
    Ok(total.div_ceil(page_size))
}

/// Slices one page out of an in-memory result list, 1-based `page_num`.
///
/// Degenerate arguments (an empty list, page number 0, page size 0) return the
/// whole slice unchanged instead of failing; asking for a page beyond the last
/// one is an error. The last page may be shorter than `page_size`.
pub fn page_slice<T>(items: &[T], page_num: usize, page_size: usize) -> Result<&[T], PagingError> {
    if items.is_empty() || page_num == 0 || page_size == 0 {
        return Ok(items);
    }
    let pages = page_count(items.len(), page_size)?;
    if page_num > pages {
        return Err(PagingError::PageOutOfRange { page_num, pages });
    }
    let start = (page_num - 1) * page_size;
    let end = (page_num * page_size).min(items.len());
    Ok(&items[start..end])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let cases = vec![(14, 5, 3), (15, 5, 3), (16, 5, 4), (0, 5, 0), (1, 1, 1)];
        for (total, page_size, pages) in cases {
            println!("testing for total={total} page_size={page_size}");
            assert_eq!(page_count(total, page_size), Ok(pages));
        }
        assert_eq!(
            page_count(10, 0),
            Err(PagingError::InvalidPageSize { page_size: 0 })
        );
    }

    #[test]
    fn slices_full_and_partial_pages() {
        let items: Vec<i32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 1, 3), Ok(&items[0..3]));
        assert_eq!(page_slice(&items, 2, 3), Ok(&items[3..6]));
        // last page is short
        assert_eq!(page_slice(&items, 3, 3), Ok(&items[6..7]));
    }

    #[test]
    fn degenerate_arguments_return_everything() {
        let items: Vec<i32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 0, 3), Ok(items.as_slice()));
        assert_eq!(page_slice(&items, 2, 0), Ok(items.as_slice()));
        let empty: Vec<i32> = vec![];
        assert_eq!(page_slice(&empty, 5, 3), Ok(empty.as_slice()));
    }

    #[test]
    fn page_beyond_the_last_is_an_error() {
        let items: Vec<i32> = (1..=7).collect();
        assert_eq!(
            page_slice(&items, 4, 3),
            Err(PagingError::PageOutOfRange {
                page_num: 4,
                pages: 3
            })
        );
    }
}
