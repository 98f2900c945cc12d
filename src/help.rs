//! Help overlay state and the hex notation guide.

use crate::color::HexColor;

/// Worked examples shown in the guide.
pub const EXAMPLES: [(HexColor, &str); 3] = [
    (HexColor::from_rgb(0xff, 0, 0), "pure Red"),
    (HexColor::from_rgb(0, 0xff, 0), "pure Green"),
    (HexColor::from_rgb(0, 0, 0xff), "pure Blue"),
];

pub const WHAT_IS_HEX: &str = "A hex triplet is a six-digit number that represents a color. \
Every pair is one of the RGB channels, from 00 to FF in hex or 0 to 255 in decimal.";

pub const DIGIT_ORDER: &str = "0, 1, 2, 3, 4, 5, 6, 7, 8, 9, A, B, C, D, E, F";

pub const HIGHER_IS_MORE: &str =
    "The higher the value, the more of that channel is in the color.";

/// A screen rectangle in cells.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpOverlay {
    open: bool,
}

impl HelpOverlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close the overlay when a pointer goes down outside `bounds`.
    /// Returns true if this closed it.
    pub fn pointer_down(&mut self, column: u16, row: u16, bounds: Bounds) -> bool {
        if self.open && !bounds.contains(column, row) {
            self.open = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        x: 10,
        y: 5,
        width: 20,
        height: 8,
    };

    #[test]
    fn test_bounds_contains_edges() {
        assert!(BOUNDS.contains(10, 5));
        assert!(BOUNDS.contains(29, 12));
        assert!(!BOUNDS.contains(30, 12));
        assert!(!BOUNDS.contains(29, 13));
        assert!(!BOUNDS.contains(9, 5));
        assert!(!Bounds::default().contains(0, 0));
    }

    #[test]
    fn test_pointer_down_inside_keeps_open() {
        let mut help = HelpOverlay::default();
        help.toggle();

        assert!(!help.pointer_down(15, 6, BOUNDS));
        assert!(help.is_open());
    }

    #[test]
    fn test_pointer_down_outside_closes() {
        let mut help = HelpOverlay::default();
        help.toggle();

        assert!(help.pointer_down(0, 0, BOUNDS));
        assert!(!help.is_open());

        // Nothing to close the second time.
        assert!(!help.pointer_down(0, 0, BOUNDS));
    }

    #[test]
    fn test_examples() {
        let rendered: Vec<String> = EXAMPLES.iter().map(|(c, _)| c.to_upper()).collect();
        assert_eq!(rendered, ["#FF0000", "#00FF00", "#0000FF"]);
    }
}
