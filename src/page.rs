//! Fixed-size heap page holding whole serialized rows.

pub const PAGE_SIZE: usize = 4096;

/// A zero-initialized 4KB block.
///
/// The bytes live behind a `Box`, so moving a `Page` (for example when it is
/// installed into the table's page array) never moves the row data itself.
pub struct Page {
    data: Box<[u8; PAGE_SIZE]>,
}

impl Page {
    /// Allocates a new zeroed page.
    ///
    /// Allocation failure aborts the process through the global allocator.
    pub fn new() -> Self {
        Self {
            data: Box::new([0u8; PAGE_SIZE]),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_is_zeroed() {
        let page = Page::new();
        assert_eq!(page.as_slice().len(), PAGE_SIZE);
        assert!(page.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_page_write_read() {
        let mut page = Page::new();
        page.as_mut_slice()[0] = 0xAB;
        page.as_mut_slice()[PAGE_SIZE - 1] = 0xCD;
        assert_eq!(page.as_slice()[0], 0xAB);
        assert_eq!(page.as_slice()[PAGE_SIZE - 1], 0xCD);
    }

    #[test]
    fn test_data_does_not_move_with_page() {
        let page = Page::new();
        let before = page.as_slice().as_ptr();
        let moved = vec![page];
        assert_eq!(moved[0].as_slice().as_ptr(), before);
    }
}
