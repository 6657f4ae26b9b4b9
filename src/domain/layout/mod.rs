//! Responsive layout - breakpoint flags derived from viewport width

use serde::Serialize;

use crate::domain::actions::BookmarkControl;
use crate::shared::utils::truncate_text;

pub const BREAKPOINT_COMPACT: u32 = 500;
pub const BREAKPOINT_MOBILE: u32 = 600;
pub const BREAKPOINT_TABLET: u32 = 800;
pub const BREAKPOINT_DESKTOP: u32 = 1080;

/// Symbol length kept on narrow and wide viewports
pub const SYMBOL_LIMIT_NARROW: usize = 10;
pub const SYMBOL_LIMIT_WIDE: usize = 16;

/// Viewport classes from widest to narrowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ViewportClass {
    Wide,
    Below1080,
    Below800,
    Below600,
    Below500,
}

/// "Width at or below threshold" flags; a set flag implies every wider one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutFlags {
    pub below_500: bool,
    pub below_600: bool,
    pub below_800: bool,
    pub below_1080: bool,
}

impl LayoutFlags {
    pub fn from_width(width: u32) -> Self {
        Self {
            below_500: width <= BREAKPOINT_COMPACT,
            below_600: width <= BREAKPOINT_MOBILE,
            below_800: width <= BREAKPOINT_TABLET,
            below_1080: width <= BREAKPOINT_DESKTOP,
        }
    }

    pub fn viewport_class(&self) -> ViewportClass {
        if self.below_500 {
            ViewportClass::Below500
        } else if self.below_600 {
            ViewportClass::Below600
        } else if self.below_800 {
            ViewportClass::Below800
        } else if self.below_1080 {
            ViewportClass::Below1080
        } else {
            ViewportClass::Wide
        }
    }

    pub fn symbol_limit(&self) -> usize {
        if self.below_1080 {
            SYMBOL_LIMIT_NARROW
        } else {
            SYMBOL_LIMIT_WIDE
        }
    }

    pub fn display_symbol(&self, symbol: &str) -> String {
        truncate_text(symbol, self.symbol_limit())
    }

    /// Summary panels stack into one column and price moves into its own panel
    pub fn single_column(&self) -> bool {
        self.below_1080
    }

    pub fn price_in_header(&self) -> bool {
        !self.below_1080
    }

    pub fn show_search(&self) -> bool {
        !self.below_600
    }

    pub fn bookmark_control(&self, already_saved: bool) -> BookmarkControl {
        if !already_saved && !self.below_800 {
            BookmarkControl::Interactive
        } else if !self.below_1080 {
            BookmarkControl::Indicator
        } else {
            BookmarkControl::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_monotonic() {
        for width in (0..1400).step_by(7) {
            let flags = LayoutFlags::from_width(width);
            if flags.below_500 {
                assert!(flags.below_600);
            }
            if flags.below_600 {
                assert!(flags.below_800);
            }
            if flags.below_800 {
                assert!(flags.below_1080);
            }
        }
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(LayoutFlags::from_width(500).viewport_class(), ViewportClass::Below500);
        assert_eq!(LayoutFlags::from_width(501).viewport_class(), ViewportClass::Below600);
        assert_eq!(LayoutFlags::from_width(800).viewport_class(), ViewportClass::Below800);
        assert_eq!(LayoutFlags::from_width(1080).viewport_class(), ViewportClass::Below1080);
        assert_eq!(LayoutFlags::from_width(1081).viewport_class(), ViewportClass::Wide);
        assert!(ViewportClass::Below500 > ViewportClass::Wide);
    }

    #[test]
    fn test_symbol_truncation() {
        let symbol = "ABCDEFGHIJKLMNOPQRST";
        assert_eq!(LayoutFlags::from_width(700).display_symbol(symbol), "ABCDEFGHIJ...");
        assert_eq!(LayoutFlags::from_width(1440).display_symbol(symbol), "ABCDEFGHIJKLMNOP...");
        assert_eq!(LayoutFlags::from_width(700).display_symbol("UNI"), "UNI");
    }

    #[test]
    fn test_search_and_columns() {
        let phone = LayoutFlags::from_width(420);
        assert!(!phone.show_search());
        assert!(phone.single_column());
        assert!(!phone.price_in_header());

        let desktop = LayoutFlags::from_width(1440);
        assert!(desktop.show_search());
        assert!(!desktop.single_column());
        assert!(desktop.price_in_header());
    }

    #[test]
    fn test_bookmark_control() {
        let desktop = LayoutFlags::from_width(1440);
        assert_eq!(desktop.bookmark_control(false), BookmarkControl::Interactive);
        assert_eq!(desktop.bookmark_control(true), BookmarkControl::Indicator);

        let laptop = LayoutFlags::from_width(900);
        assert_eq!(laptop.bookmark_control(false), BookmarkControl::Interactive);
        assert_eq!(laptop.bookmark_control(true), BookmarkControl::Hidden);

        let tablet = LayoutFlags::from_width(760);
        assert_eq!(tablet.bookmark_control(false), BookmarkControl::Hidden);
    }
}
