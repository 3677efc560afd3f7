//! 列表光标

/// Highlighted row of a list whose length may change between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
}

impl ListCursor {
    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull the cursor back inside a list that shrank.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_bounds() {
        let mut c = ListCursor::default();
        c.previous();
        assert_eq!(c.selected, 0);
        c.next(3);
        c.next(3);
        c.next(3);
        assert_eq!(c.selected, 2);
        c.first();
        assert_eq!(c.selected, 0);
        c.last(5);
        assert_eq!(c.selected, 4);
    }

    #[test]
    fn clamp_follows_shrinking_list() {
        let mut c = ListCursor { selected: 7 };
        c.clamp(3);
        assert_eq!(c.selected, 2);
        c.clamp(0);
        assert_eq!(c.selected, 0);
    }
}
