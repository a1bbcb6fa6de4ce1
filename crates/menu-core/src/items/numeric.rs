//! Numeric items: an editable value stepped by next/prev while focused, and
//! a read-only value updated by the application.

use std::fmt;

/// Turns a value into the text shown next to the item name.
pub type FormatFn = Box<dyn Fn(f32) -> String>;

/// Formatting used when no formatter is set: two decimal places.
pub fn default_format(value: f32) -> String {
    format!("{value:.2}")
}

pub struct NumericItem {
    value: f32,
    min: f32,
    max: f32,
    increment: f32,
    formatter: Option<FormatFn>,
}

impl NumericItem {
    /// Bounds given in the wrong order are swapped.
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self {
            value,
            min,
            max,
            increment: 1.0,
            formatter: None,
        }
    }

    /// Step size for next/prev. The sign is ignored; a non-finite step
    /// becomes 0.
    pub fn with_increment(mut self, increment: f32) -> Self {
        self.increment = if increment.is_finite() {
            increment.abs()
        } else {
            0.0
        };
        self
    }

    pub fn with_formatter(mut self, f: impl Fn(f32) -> String + 'static) -> Self {
        self.formatter = Some(Box::new(f));
        self
    }

    pub fn set_formatter(&mut self, f: impl Fn(f32) -> String + 'static) {
        self.formatter = Some(Box::new(f));
    }

    pub fn clear_formatter(&mut self) {
        self.formatter = None;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min_value(&self) -> f32 {
        self.min
    }

    pub fn max_value(&self) -> f32 {
        self.max
    }

    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Not clamped; the next step brings the value back into range.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    pub fn set_min_value(&mut self, min: f32) {
        self.min = min;
        if self.min > self.max {
            self.max = min;
        }
    }

    pub fn set_max_value(&mut self, max: f32) {
        self.max = max;
        if self.max < self.min {
            self.min = max;
        }
    }

    pub fn formatted_value(&self) -> String {
        match &self.formatter {
            Some(f) => f(self.value),
            None => default_format(self.value),
        }
    }

    pub(crate) fn step_up(&mut self, looped: bool) -> bool {
        self.value += self.increment;
        if self.value.is_nan() || self.value > self.max {
            self.value = if looped { self.min } else { self.max };
        }
        true
    }

    pub(crate) fn step_down(&mut self, looped: bool) -> bool {
        self.value -= self.increment;
        if self.value.is_nan() || self.value < self.min {
            self.value = if looped { self.max } else { self.min };
        }
        true
    }
}

impl fmt::Debug for NumericItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericItem")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("increment", &self.increment)
            .finish_non_exhaustive()
    }
}

/// A value shown in the menu but never edited through navigation.
pub struct NumericDisplayItem {
    value: f32,
    formatter: Option<FormatFn>,
}

impl NumericDisplayItem {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            formatter: None,
        }
    }

    pub fn with_formatter(mut self, f: impl Fn(f32) -> String + 'static) -> Self {
        self.formatter = Some(Box::new(f));
        self
    }

    pub fn set_formatter(&mut self, f: impl Fn(f32) -> String + 'static) {
        self.formatter = Some(Box::new(f));
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    pub fn formatted_value(&self) -> String {
        match &self.formatter {
            Some(f) => f(self.value),
            None => default_format(self.value),
        }
    }
}

impl fmt::Debug for NumericDisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericDisplayItem")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps_without_loop() {
        let mut n = NumericItem::new(9.0, 0.0, 10.0).with_increment(2.0);
        n.step_up(false);
        assert_eq!(n.value(), 10.0);
        n.step_up(false);
        assert_eq!(n.value(), 10.0);
    }

    #[test]
    fn test_step_wraps_with_loop() {
        let mut n = NumericItem::new(9.0, 0.0, 10.0).with_increment(2.0);
        n.step_up(true);
        assert_eq!(n.value(), 0.0);
        n.step_down(true);
        assert_eq!(n.value(), 10.0);
    }

    #[test]
    fn test_step_down_clamps_at_min() {
        let mut n = NumericItem::new(1.0, 0.0, 10.0).with_increment(3.0);
        assert!(n.step_down(false));
        assert_eq!(n.value(), 0.0);
    }

    #[test]
    fn test_constructor_normalizes() {
        let n = NumericItem::new(5.0, 10.0, 0.0).with_increment(-0.5);
        assert_eq!(n.min_value(), 0.0);
        assert_eq!(n.max_value(), 10.0);
        assert_eq!(n.increment(), 0.5);
    }

    #[test]
    fn test_bounds_change_does_not_clamp_value() {
        let mut n = NumericItem::new(8.0, 0.0, 10.0);
        n.set_max_value(5.0);
        assert_eq!(n.value(), 8.0);
        n.step_up(false);
        assert_eq!(n.value(), 5.0);

        n.set_min_value(7.0);
        assert!(n.min_value() <= n.max_value());
    }

    #[test]
    fn test_non_finite_input_cannot_stick() {
        let mut n = NumericItem::new(2.0, 0.0, 10.0).with_increment(f32::NAN);
        assert_eq!(n.increment(), 0.0);
        n.step_up(false);
        assert_eq!(n.value(), 2.0);

        n.set_value(f32::NAN);
        n.step_up(false);
        assert_eq!(n.value(), 10.0);
        n.set_value(f32::NAN);
        n.step_down(true);
        assert_eq!(n.value(), 10.0);
    }

    #[test]
    fn test_formatting() {
        let n = NumericItem::new(3.0, 0.0, 10.0);
        assert_eq!(n.formatted_value(), "3.00");
        let n = n.with_formatter(|v| format!("{v:.0}%"));
        assert_eq!(n.formatted_value(), "3%");

        let mut d = NumericDisplayItem::new(21.456);
        assert_eq!(d.formatted_value(), "21.46");
        d.set_formatter(|v| format!("{v:.1} C"));
        d.set_value(19.0);
        assert_eq!(d.formatted_value(), "19.0 C");
    }
}
