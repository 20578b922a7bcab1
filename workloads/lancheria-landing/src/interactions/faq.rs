//! FAQ accordion.

/// Accordion where at most one question is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Question clicked: an open item closes, a closed one opens alone.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}
