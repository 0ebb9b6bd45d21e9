use crate::dom::ClassList;

pub const EXPERIMENTAL_CLASS: &str = "experimental-on";
pub const CLICKS_TO_TOGGLE: u32 = 4;

/// Hidden switch on the theme button: every fourth click toggles experimental
/// mode on the body. The count restarts after each toggle.
#[derive(Debug, Default)]
pub struct ExperimentalSwitch {
    count: u32,
}

impl ExperimentalSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(enabled)` when this click toggled the mode.
    pub fn on_click(&mut self, body: &mut ClassList) -> Option<bool> {
        self.count += 1;
        if self.count == CLICKS_TO_TOGGLE {
            self.count = 0;
            return Some(body.toggle(EXPERIMENTAL_CLASS));
        }
        None
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_click_toggles_and_resets() {
        let mut switch = ExperimentalSwitch::new();
        let mut body = ClassList::new();

        for _ in 0..3 {
            assert_eq!(switch.on_click(&mut body), None);
        }
        assert!(!body.contains(EXPERIMENTAL_CLASS));

        assert_eq!(switch.on_click(&mut body), Some(true));
        assert!(body.contains(EXPERIMENTAL_CLASS));
        assert_eq!(switch.count(), 0);
    }

    #[test]
    fn eight_clicks_turn_it_back_off() {
        let mut switch = ExperimentalSwitch::new();
        let mut body = ClassList::new();
        let toggles: Vec<bool> = (0..8).filter_map(|_| switch.on_click(&mut body)).collect();
        assert_eq!(toggles, vec![true, false]);
        assert!(!body.contains(EXPERIMENTAL_CLASS));
    }
}
