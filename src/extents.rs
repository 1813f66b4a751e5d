//! Extent tracking for touched spans

/// Inclusive [min,max] bounds of the region touched by a render call
#[derive(Debug, Copy, Clone)]
pub struct SpanExtents {
    pub min: i32,
    pub max: i32,
}

impl Default for SpanExtents {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanExtents {
    pub fn new() -> Self {
        Self {
            min: i32::max_value(),
            max: i32::min_value(),
        }
    }
    /// Forget all marks
    pub fn reset(&mut self) {
        self.min = i32::max_value();
        self.max = i32::min_value();
    }
    /// Grow to include [a,b], a <= b
    pub fn mark(&mut self, a: i32, b: i32) {
        if a < self.min {
            self.min = a;
        }
        if b > self.max {
            self.max = b;
        }
    }
    /// Grow to include [a,b] in either order
    pub fn mark_with_sort(&mut self, a: i32, b: i32) {
        if a <= b {
            self.mark(a, b);
        } else {
            self.mark(b, a);
        }
    }
    /// True if nothing has been marked since the last reset
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_until_marked() {
        let mut e = SpanExtents::new();
        assert!(e.is_empty());
        e.mark(4, 9);
        assert!(!e.is_empty());
        assert_eq!((e.min, e.max), (4, 9));
        e.mark_with_sort(12, 2);
        assert_eq!((e.min, e.max), (2, 12));
        e.reset();
        assert!(e.is_empty());
    }
}
