//! Index cursors for the character carousel and the lore reader.

/// Carousel cursor: `previous`/`next` wrap around the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            len: self.len,
        }
    }

    /// Jump to `index`; out-of-range requests are ignored.
    #[must_use]
    pub const fn select(self, index: usize) -> Self {
        if index < self.len {
            Self {
                index,
                len: self.len,
            }
        } else {
            self
        }
    }
}

/// Page cursor: `previous`/`next` stop at the first and last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    page: usize,
    len: usize,
}

impl Pager {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { page: 0, len }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.len == 0 || self.page + 1 == self.len
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.is_last() {
            return self;
        }
        Self {
            page: self.page + 1,
            len: self.len,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            len: self.len,
        }
    }

    /// Jump to `page`; out-of-range requests are ignored.
    #[must_use]
    pub const fn select(self, page: usize) -> Self {
        if page < self.len {
            Self {
                page,
                len: self.len,
            }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_in_both_directions() {
        let c = Carousel::new(3);
        assert_eq!(c.previous().index(), 2);
        let last = c.select(2);
        assert_eq!(last.next().index(), 0);
        assert_eq!(c.next().next().index(), 2);
    }

    #[test]
    fn carousel_select_ignores_out_of_range() {
        let c = Carousel::new(3).select(1);
        assert_eq!(c.select(3).index(), 1);
        assert_eq!(c.select(0).index(), 0);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.previous().index(), 0);
        assert_eq!(c.select(0).index(), 0);
    }

    #[test]
    fn single_item_carousel_stays_put() {
        let c = Carousel::new(1);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.previous().index(), 0);
    }

    #[test]
    fn pager_clamps_at_ends() {
        let p = Pager::new(5);
        assert!(p.is_first());
        assert_eq!(p.previous(), p);
        let last = p.select(4);
        assert!(last.is_last());
        assert_eq!(last.next(), last);
        assert_eq!(last.previous().page(), 3);
        assert_eq!(p.next().next().page(), 2);
    }

    #[test]
    fn pager_select_ignores_out_of_range_and_empty_is_inert() {
        let p = Pager::new(2);
        assert_eq!(p.select(7).page(), 0);
        let empty = Pager::new(0);
        assert!(empty.is_first() && empty.is_last());
        assert_eq!(empty.next().page(), 0);
        assert_eq!(empty.previous().page(), 0);
    }
}
