use flashlearn_lib::flashcards::FlashcardSet;

/// Transient study session state, discarded when the session ends.
/// Never mutates the set it studies.
pub struct StudyState {
    pub set: FlashcardSet,
    pub current: usize,
    pub flipped: bool,
    pub quit: bool,
}

impl StudyState {
    pub fn new(set: FlashcardSet) -> Self {
        Self {
            set,
            current: 0,
            flipped: false,
            quit: false,
        }
    }

    pub fn card_count(&self) -> usize {
        self.set.cards.len()
    }

    /// Flip the current card between question and answer
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move to the next card, showing its question side
    pub fn next_card(&mut self) {
        if self.current + 1 < self.card_count() {
            self.current += 1;
            self.flipped = false;
        }
    }

    /// Move to the previous card, showing its question side
    pub fn prev_card(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.flipped = false;
        }
    }
}
