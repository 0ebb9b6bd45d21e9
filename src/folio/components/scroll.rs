use crate::dom::ClassList;

pub const HEADER_CLASS: &str = "header-content";
pub const CONTAINER_CLASS: &str = "header-container";
pub const HEADER_MINI_CLASS: &str = "header-content--mini";
pub const CONTAINER_MINI_CLASS: &str = "header-container--mini";
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 50;

/// Shrinks the header once the page is scrolled past `threshold` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpy {
    threshold: u32,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollSpy {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Compact strictly past the threshold. Depends on nothing but `offset`.
    pub fn is_compact(&self, offset: f64) -> bool {
        offset > f64::from(self.threshold)
    }

    pub fn on_scroll(&self, offset: f64, header: &mut ClassList, container: &mut ClassList) {
        if self.is_compact(offset) {
            header.add(HEADER_MINI_CLASS);
            container.add(CONTAINER_MINI_CLASS);
        } else {
            header.remove(HEADER_MINI_CLASS);
            container.remove(CONTAINER_MINI_CLASS);
        }
    }

    /// The header as it looks after a fresh page load scrolled to `offset`.
    pub fn header_at(&self, offset: f64) -> HeaderState {
        let mut header = ClassList::from_classes([HEADER_CLASS]);
        let mut container = ClassList::from_classes([CONTAINER_CLASS]);
        self.on_scroll(offset, &mut header, &mut container);
        HeaderState {
            threshold: self.threshold,
            compact: self.is_compact(offset),
            header,
            container,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    pub threshold: u32,
    pub compact: bool,
    pub header: ClassList,
    pub container: ClassList,
}
