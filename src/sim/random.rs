/// Source of uniform randomness for particle spawning.
///
/// The browser build feeds this from `js_sys::Math::random`; host tests plug
/// in a seeded generator so burst contents are reproducible.
pub trait RandomSource {
    /// Next sample, uniform in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform sample in `[start, end)`.
    fn in_range(&mut self, start: f64, end: f64) -> f64 {
        (end - start) * self.unit() + start
    }

    /// Uniform index into a collection of `len` elements.
    fn pick_index(&mut self, len: usize) -> usize {
        (len as f64 * self.unit()) as usize
    }
}
