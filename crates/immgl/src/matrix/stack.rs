use glam::Mat4;

/// LIFO of transforms that is never empty.
///
/// The current top is held apart from the saved entries, so there is always a
/// top to read or mutate and the base entry cannot be popped.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    top: Mat4,
    saved: Vec<Mat4>,
}

impl MatrixStack {
    /// Creates a stack holding a single identity entry.
    #[inline]
    pub fn new() -> Self {
        Self::with_base(Mat4::IDENTITY)
    }

    /// Creates a stack holding a single pre-composed entry.
    #[inline]
    pub fn with_base(base: Mat4) -> Self {
        Self { top: base, saved: Vec::new() }
    }

    #[inline]
    pub fn top(&self) -> Mat4 {
        self.top
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut Mat4 {
        &mut self.top
    }

    /// Number of entries, including the top. Always at least 1.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len() + 1
    }

    /// Saves a copy of the top. Later mutations of the top do not reach the copy.
    #[inline]
    pub fn push(&mut self) {
        self.saved.push(self.top);
    }

    /// Restores the previously saved entry.
    ///
    /// Returns `false` (and leaves the stack untouched) when only the base entry
    /// remains.
    #[inline]
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(prev) => {
                self.top = prev;
                true
            }
            None => false,
        }
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
