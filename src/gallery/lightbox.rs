/// Bounded cursor over the gallery for the one-at-a-time view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxNavigator {
    index: usize,
    len: usize,
}

impl LightboxNavigator {
    /// `None` for an empty gallery. `start` is clamped to the last image.
    pub fn new(len: usize, start: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: start.min(len - 1),
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Moves forward one image. No-op at the last image.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves back one image. No-op at the first image.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_has_no_navigator() {
        assert_eq!(LightboxNavigator::new(0, 0), None);
    }

    #[test]
    fn start_index_is_clamped() {
        let navigator = LightboxNavigator::new(3, 10).expect("navigator");
        assert_eq!(navigator.index(), 2);
    }

    #[test]
    fn previous_at_first_image_stays_put() {
        let mut navigator = LightboxNavigator::new(4, 0).expect("navigator");
        assert!(!navigator.previous());
        assert_eq!(navigator.index(), 0);
    }

    #[test]
    fn next_at_last_image_stays_put() {
        let mut navigator = LightboxNavigator::new(4, 3).expect("navigator");
        assert!(!navigator.next());
        assert_eq!(navigator.index(), 3);
    }

    #[test]
    fn next_then_previous_returns_to_start_away_from_edges() {
        let len = 5;
        for start in 0..len {
            let mut navigator = LightboxNavigator::new(len, start).expect("navigator");
            if navigator.next() {
                navigator.previous();
            }
            assert_eq!(navigator.index(), start);

            let mut navigator = LightboxNavigator::new(len, start).expect("navigator");
            if navigator.previous() {
                navigator.next();
            }
            assert_eq!(navigator.index(), start);
        }
    }

    #[test]
    fn single_image_gallery_never_moves() {
        let mut navigator = LightboxNavigator::new(1, 0).expect("navigator");
        assert!(!navigator.next());
        assert!(!navigator.previous());
        assert_eq!(navigator.index(), 0);
    }
}
