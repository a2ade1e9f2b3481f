/// The placeholder counter shared by every clause in one render.
///
/// A leaf takes one number per value it renders; composites pass the same
/// counter to each child in turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    next: usize,
}

impl Placeholders {
    /// A counter whose first placeholder is `$1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A counter whose first placeholder is `$first`, for appending a
    /// condition after placeholders already used elsewhere in a statement.
    pub fn starting_at(first: usize) -> Self {
        Self { next: first }
    }

    /// Take the current number and advance.
    pub fn next(&mut self) -> usize {
        let n = self.next;
        self.next += 1;
        n
    }

    /// Take the next placeholder, formatted as `$N`.
    pub fn take(&mut self) -> String {
        format!("${}", self.next())
    }

    /// The number the next call to [`Placeholders::next`] will return.
    pub fn peek(&self) -> usize {
        self.next
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::new()
    }
}
