//! Screen-width classification and the shared viewport observable.
//!
//! Layout variants across the component library are keyed off a small set of
//! width bands. The thresholds are the ones the stylesheet is written
//! against, so components compare against [`ScreenClass`] values instead of
//! raw pixel widths:
//!
//! | Width        | Class     |
//! |--------------|-----------|
//! | `< 750`      | `Phone`   |
//! | `750..900`   | `Tablet`  |
//! | `900..1000`  | `Laptop`  |
//! | `1000..1250` | `Desktop` |
//! | `>= 1250`    | `Wide`    |
//!
//! `ScreenClass` is `Ord`, so a stylesheet check like "narrower than 1000px"
//! is written `screen < ScreenClass::Desktop`.

use parking_lot::RwLock;

/// Upper bound (exclusive) of the `Phone` band.
pub const PHONE_MAX: u32 = 750;
/// Upper bound (exclusive) of the `Tablet` band.
pub const TABLET_MAX: u32 = 900;
/// Upper bound (exclusive) of the `Laptop` band.
pub const LAPTOP_MAX: u32 = 1000;
/// Upper bound (exclusive) of the `Desktop` band.
pub const DESKTOP_MAX: u32 = 1250;

/// Discrete layout band for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScreenClass {
    Phone,
    Tablet,
    Laptop,
    Desktop,
    Wide,
}

impl ScreenClass {
    /// Classify a viewport width in CSS pixels.
    pub const fn of(width: u32) -> Self {
        if width < PHONE_MAX {
            Self::Phone
        } else if width < TABLET_MAX {
            Self::Tablet
        } else if width < LAPTOP_MAX {
            Self::Laptop
        } else if width < DESKTOP_MAX {
            Self::Desktop
        } else {
            Self::Wide
        }
    }

    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Laptop => "laptop",
            Self::Desktop => "desktop",
            Self::Wide => "wide",
        }
    }
}

type Subscriber = Box<dyn Fn(ScreenClass) + Send + Sync>;

/// Shared observable viewport width.
///
/// One `Viewport` exists per build or serve session and is handed to the
/// render layer explicitly; there is no process-wide global. `set_width` is
/// the single write entry point. Subscribers are notified when an update
/// moves the width into a different [`ScreenClass`] band; updates within a
/// band change the stored width silently, so a burst of updates always
/// settles on the correct final classification.
pub struct Viewport {
    width: RwLock<u32>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl Viewport {
    /// Create a viewport at an initial width.
    pub fn new(width: u32) -> Self {
        Self {
            width: RwLock::new(width),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Current width in CSS pixels.
    pub fn width(&self) -> u32 {
        *self.width.read()
    }

    /// Current classification of the width.
    pub fn screen_class(&self) -> ScreenClass {
        ScreenClass::of(self.width())
    }

    /// Update the width, notifying subscribers if the band changed.
    pub fn set_width(&self, width: u32) {
        let previous = {
            let mut guard = self.width.write();
            let previous = ScreenClass::of(*guard);
            *guard = width;
            previous
        };

        let current = ScreenClass::of(width);
        if current != previous {
            for subscriber in self.subscribers.read().iter() {
                subscriber(current);
            }
        }
    }

    /// Register a callback for band changes.
    pub fn subscribe(&self, subscriber: impl Fn(ScreenClass) + Send + Sync + 'static) {
        self.subscribers.write().push(Box::new(subscriber));
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width())
            .field("subscribers", &self.subscribers.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_classify_lower_bands() {
        assert_eq!(ScreenClass::of(0), ScreenClass::Phone);
        assert_eq!(ScreenClass::of(320), ScreenClass::Phone);
        assert_eq!(ScreenClass::of(749), ScreenClass::Phone);
        assert_eq!(ScreenClass::of(750), ScreenClass::Tablet);
    }

    #[test]
    fn test_classify_all_boundaries() {
        // Each documented threshold flips the class exactly at the boundary
        assert_eq!(ScreenClass::of(749), ScreenClass::Phone);
        assert_eq!(ScreenClass::of(750), ScreenClass::Tablet);
        assert_eq!(ScreenClass::of(899), ScreenClass::Tablet);
        assert_eq!(ScreenClass::of(900), ScreenClass::Laptop);
        assert_eq!(ScreenClass::of(999), ScreenClass::Laptop);
        assert_eq!(ScreenClass::of(1000), ScreenClass::Desktop);
        assert_eq!(ScreenClass::of(1249), ScreenClass::Desktop);
        assert_eq!(ScreenClass::of(1250), ScreenClass::Wide);
    }

    #[test]
    fn test_class_ordering_matches_width_checks() {
        // "narrower than 1000" covers phone, tablet and laptop
        for width in [320, 800, 950] {
            assert!(ScreenClass::of(width) < ScreenClass::Desktop);
        }
        assert!(ScreenClass::of(1000) >= ScreenClass::Desktop);

        // "narrower than 1250" covers everything but wide
        assert!(ScreenClass::of(1100) < ScreenClass::Wide);
        assert!(ScreenClass::of(1440) >= ScreenClass::Wide);
    }

    #[test]
    fn test_viewport_initial_state() {
        let viewport = Viewport::new(1440);
        assert_eq!(viewport.width(), 1440);
        assert_eq!(viewport.screen_class(), ScreenClass::Wide);
    }

    #[test]
    fn test_set_width_updates_classification() {
        let viewport = Viewport::new(1440);
        viewport.set_width(640);
        assert_eq!(viewport.width(), 640);
        assert_eq!(viewport.screen_class(), ScreenClass::Phone);
    }

    #[test]
    fn test_subscriber_notified_on_band_change() {
        let viewport = Viewport::new(1440);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        viewport.subscribe(move |class| {
            assert_eq!(class, ScreenClass::Phone);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        viewport.set_width(700);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscriber_skipped_within_band() {
        let viewport = Viewport::new(1300);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        viewport.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // 1300 -> 1400 stays in the wide band
        viewport.set_width(1400);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(viewport.width(), 1400);
    }

    #[test]
    fn test_final_classification_wins() {
        let viewport = Viewport::new(1440);
        for width in [1100, 980, 870, 640] {
            viewport.set_width(width);
        }
        assert_eq!(viewport.screen_class(), ScreenClass::Phone);
    }
}
