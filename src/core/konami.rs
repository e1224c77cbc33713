use smallvec::SmallVec;

pub const KONAMI_PATTERN: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Keeps the last `KONAMI_PATTERN.len()` keys and reports a full match.
#[derive(Clone, Debug, Default)]
pub struct KonamiDetector {
    recent: SmallVec<[String; 10]>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `KeyboardEvent.key` value. Returns `true` when the last keys
    /// spell the whole pattern.
    pub fn push(&mut self, key: &str) -> bool {
        if self.recent.len() == KONAMI_PATTERN.len() {
            self.recent.remove(0);
        }
        self.recent.push(key.to_owned());
        self.recent.len() == KONAMI_PATTERN.len()
            && self.recent.iter().zip(KONAMI_PATTERN).all(|(k, p)| k == p)
    }

    pub fn buffered(&self) -> usize {
        self.recent.len()
    }
}
