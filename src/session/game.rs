//! Game session: the rules of play over one loaded puzzle.
//!
//! ## Lifecycle
//!
//! ```text
//! Playing --guess--> Playing --limit reached--> AttemptsExhausted --guess--> ...
//!    \                                                                 /
//!     `-------------- last category solved --------> Won <------------'
//! ```
//!
//! ## Evaluation lock
//!
//! `submit_guess` locks the session and hands out a `SettleTicket`. The host
//! waits `ticket.delay()` (so the outcome can animate) and then calls
//! `settle`. While locked, selecting, submitting and shuffling are ignored.
//! `reset` bumps the session generation, so a ticket issued before the reset
//! settles to nothing.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::event::{SessionEvent, SettleTicket, Submission};
use super::guess::{evaluate, Guess, Verdict};
use super::status::{Flash, Phase, WordStatus};
use super::tile::{deal, shuffle_visible, WordTile};
use crate::core::{DifficultyTier, GameConfig, GameRng, CATEGORY_COUNT, WORDS_PER_CATEGORY};
use crate::puzzle::{Category, Puzzle, WordIndex};

/// A verdict waiting for the settle delay.
#[derive(Clone, Debug)]
struct PendingGuess {
    sequence: u64,
    guess: Guess,
    verdict: Verdict,
}

/// Runtime state of one player's game.
///
/// Uses `im` persistent vectors for history, so cloning a session for a
/// render snapshot is cheap.
///
/// ## Example
///
/// ```
/// use red_herring::core::GameConfig;
/// use red_herring::puzzle::Puzzle;
/// use red_herring::session::{GameSession, SessionEvent};
///
/// let mut session = GameSession::new(Puzzle::default(), GameConfig::default(), 42);
/// for word in ["Soccer", "Tennis", "Basketball", "Golf"] {
///     session.select_word(word);
/// }
///
/// let ticket = session.submit_guess().ticket().unwrap();
/// assert!(session.is_evaluating());
///
/// // ...after ticket.delay()...
/// let events = session.settle(ticket);
/// assert_eq!(
///     events,
///     vec![SessionEvent::CategorySolved { category_index: 3, name: "Sports".into() }]
/// );
/// assert!(session.selected().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    // === Configuration ===
    puzzle: Puzzle,
    config: GameConfig,
    index: WordIndex,
    rng: GameRng,

    // === Board ===
    /// All tiles in display order, hidden ones included.
    tiles: Vec<WordTile>,

    /// Selected words in selection order.
    selected: SmallVec<[String; WORDS_PER_CATEGORY]>,

    // === Progress ===
    /// Solved category indices in solve order.
    solved: Vector<usize>,

    /// Incorrect guesses counted so far.
    attempts: u32,

    /// Distinct incorrect guesses, oldest first.
    failed_guesses: Vector<Guess>,

    won: bool,

    /// The exhausted-attempts notice was already emitted this game.
    exhausted_notified: bool,

    /// The exhausted-attempts notice is showing and not yet dismissed.
    exhausted_notice_open: bool,

    // === Evaluation lock ===
    pending: Option<PendingGuess>,
    generation: u64,
    next_sequence: u64,
}

impl GameSession {
    /// Start a session with a seeded shuffle.
    #[must_use]
    pub fn new(puzzle: Puzzle, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(puzzle, config, GameRng::new(seed))
    }

    /// Start a session with an entropy-seeded shuffle.
    #[must_use]
    pub fn with_entropy(puzzle: Puzzle, config: GameConfig) -> Self {
        Self::with_rng(puzzle, config, GameRng::from_entropy())
    }

    fn with_rng(puzzle: Puzzle, config: GameConfig, mut rng: GameRng) -> Self {
        let index = WordIndex::new(&puzzle);
        let tiles = deal(&puzzle, &mut rng);
        debug!(seed = rng.seed(), words = tiles.len(), "session started");

        Self {
            puzzle,
            config,
            index,
            rng,
            tiles,
            selected: SmallVec::new(),
            solved: Vector::new(),
            attempts: 0,
            failed_guesses: Vector::new(),
            won: false,
            exhausted_notified: false,
            exhausted_notice_open: false,
            pending: None,
            generation: 0,
            next_sequence: 0,
        }
    }

    // === Player Actions ===

    /// Toggle a word in the selection.
    ///
    /// Returns false (and changes nothing) while evaluating, after winning,
    /// for words outside the puzzle or in a solved category, and when the
    /// selection already holds four words.
    pub fn select_word(&mut self, word: &str) -> bool {
        if self.is_evaluating() || self.won {
            trace!(word, "selection ignored: session locked or won");
            return false;
        }

        let Some(category_index) = self.index.category_of(word) else {
            trace!(word, "selection ignored: unknown word");
            return false;
        };
        if self.is_solved(category_index) {
            trace!(word, "selection ignored: category solved");
            return false;
        }

        if let Some(position) = self.selected.iter().position(|w| w == word) {
            self.selected.remove(position);
            return true;
        }

        if self.selected.len() >= WORDS_PER_CATEGORY {
            trace!(word, "selection ignored: already four words");
            return false;
        }

        self.selected.push(word.to_string());
        true
    }

    /// Clear the selection. Ignored only while evaluating.
    pub fn deselect_all(&mut self) -> bool {
        if self.is_evaluating() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Submit the four selected words.
    ///
    /// A repeated incorrect guess is answered immediately with
    /// `Submission::Duplicate`. Everything else locks the session until the
    /// returned ticket is settled.
    pub fn submit_guess(&mut self) -> Submission {
        if self.is_evaluating() || self.won || self.selected.len() != WORDS_PER_CATEGORY {
            trace!(selected = self.selected.len(), "submission rejected");
            return Submission::Rejected;
        }

        let guess = Guess::new(self.selected.iter().cloned());
        let verdict = evaluate(&self.puzzle, &self.index, &guess, |c| self.is_solved(c));

        if !verdict.is_correct() && self.failed_guesses.contains(&guess) {
            debug!(words = ?guess.words(), "duplicate guess");
            return Submission::Duplicate;
        }

        debug!(words = ?guess.words(), ?verdict, "guess submitted");
        self.next_sequence += 1;
        let ticket = SettleTicket {
            generation: self.generation,
            sequence: self.next_sequence,
            correct: verdict.is_correct(),
            delay: self.config.settle_delay,
        };
        self.pending = Some(PendingGuess {
            sequence: self.next_sequence,
            guess,
            verdict,
        });

        Submission::Pending(ticket)
    }

    /// Commit a pending verdict and release the lock.
    ///
    /// Returns the events to show. A stale ticket (from before a reset, or
    /// already settled) changes nothing and returns no events.
    pub fn settle(&mut self, ticket: SettleTicket) -> Vec<SessionEvent> {
        let current = ticket.generation == self.generation
            && self
                .pending
                .as_ref()
                .is_some_and(|p| p.sequence == ticket.sequence);
        if !current {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "stale settle ticket ignored"
            );
            return Vec::new();
        }
        let Some(pending) = self.pending.take() else {
            return Vec::new();
        };

        match pending.verdict {
            Verdict::Correct { category_index } => self.commit_correct(category_index),
            Verdict::Incorrect { one_off } => {
                self.failed_guesses.push_back(pending.guess);
                self.attempts += 1;

                let mut events = vec![match one_off {
                    Some(hint) => SessionEvent::OneOff {
                        category_index: hint.category_index,
                        category_name: hint.category_name,
                    },
                    None => SessionEvent::Incorrect,
                }];

                if self.attempts >= self.config.max_attempts && !self.exhausted_notified {
                    debug!(attempts = self.attempts, "attempts exhausted");
                    self.exhausted_notified = true;
                    self.exhausted_notice_open = true;
                    events.push(SessionEvent::AttemptsExhausted {
                        attempts: self.attempts,
                        max_attempts: self.config.max_attempts,
                    });
                }
                events
            }
        }
    }

    fn commit_correct(&mut self, category_index: usize) -> Vec<SessionEvent> {
        self.solved.push_back(category_index);
        for tile in self
            .tiles
            .iter_mut()
            .filter(|t| t.category_index == category_index)
        {
            tile.visible = false;
        }
        self.selected.clear();

        let name = self.puzzle.categories[category_index].name.clone();
        debug!(category_index, %name, solved = self.solved.len(), "category solved");
        let mut events = vec![SessionEvent::CategorySolved {
            category_index,
            name,
        }];

        if self.solved.len() == CATEGORY_COUNT {
            self.won = true;
            self.exhausted_notice_open = false;
            debug!(attempts = self.attempts, "puzzle won");
            events.push(SessionEvent::Won {
                hidden_message: self.puzzle.hidden_message.clone(),
            });
        }
        events
    }

    /// Shuffle the visible tiles and clear the selection.
    ///
    /// Ignored while evaluating.
    pub fn shuffle_visible(&mut self) -> bool {
        if self.is_evaluating() {
            return false;
        }
        self.selected.clear();
        shuffle_visible(&mut self.tiles, &mut self.rng);
        true
    }

    /// Start the same puzzle over with a fresh deal.
    ///
    /// Any pending verdict is dropped and its ticket becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.selected.clear();
        self.solved = Vector::new();
        self.attempts = 0;
        self.failed_guesses = Vector::new();
        self.won = false;
        self.exhausted_notified = false;
        self.exhausted_notice_open = false;
        self.tiles = deal(&self.puzzle, &mut self.rng);
        debug!(generation = self.generation, "session reset");
    }

    /// Close the exhausted-attempts notice. Play was never blocked by it.
    pub fn dismiss_exhausted_notice(&mut self) {
        self.exhausted_notice_open = false;
    }

    // === Derived State ===

    /// Current phase.
    ///
    /// Exhaustion is reported once the notice has fired, never before the
    /// first counted attempt.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.exhausted_notified {
            Phase::AttemptsExhausted
        } else {
            Phase::Playing
        }
    }

    /// How a word should be drawn. Words outside the puzzle are `Normal`.
    #[must_use]
    pub fn word_status(&self, word: &str) -> WordStatus {
        if let Some(category_index) = self.index.category_of(word) {
            if self.is_solved(category_index) {
                return WordStatus::Solved { category_index };
            }
        }

        let previously_incorrect = self.failed_guesses.iter().any(|g| g.contains(word));

        if self.is_selected(word) {
            let flash = match &self.pending {
                None => Flash::Neutral,
                Some(p) if p.verdict.is_correct() => Flash::Correct,
                Some(_) => Flash::Incorrect,
            };
            return WordStatus::Selected {
                flash,
                previously_incorrect,
            };
        }

        if previously_incorrect {
            WordStatus::PreviouslyIncorrect
        } else {
            WordStatus::Normal
        }
    }

    /// The hidden message, only once the puzzle is won.
    #[must_use]
    pub fn hidden_message(&self) -> Option<&str> {
        if self.won {
            self.puzzle.hidden_message.as_deref()
        } else {
            None
        }
    }

    // === Accessors ===

    /// The puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The puzzle title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.puzzle.title.as_deref()
    }

    /// Difficulty tier of a category position.
    #[must_use]
    pub fn difficulty(&self, category_index: usize) -> &DifficultyTier {
        self.config.difficulty(category_index)
    }

    /// All tiles in display order, hidden ones included.
    #[must_use]
    pub fn tiles(&self) -> &[WordTile] {
        &self.tiles
    }

    /// Tiles still on the board, in display order.
    pub fn visible_tiles(&self) -> impl Iterator<Item = &WordTile> {
        self.tiles.iter().filter(|t| t.visible)
    }

    /// Selected words in selection order.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Check if a word is selected.
    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selected.iter().any(|w| w == word)
    }

    /// Solved categories in the order they were found.
    pub fn solved_categories(&self) -> impl Iterator<Item = (usize, &Category)> {
        self.solved
            .iter()
            .map(move |&index| (index, &self.puzzle.categories[index]))
    }

    /// Check if a category is solved.
    #[must_use]
    pub fn is_solved(&self, category_index: usize) -> bool {
        self.solved.contains(&category_index)
    }

    /// Check if a word's category is solved (used to strike words through
    /// in the list of failed guesses).
    #[must_use]
    pub fn is_word_solved(&self, word: &str) -> bool {
        self.index
            .category_of(word)
            .is_some_and(|c| self.is_solved(c))
    }

    /// Distinct incorrect guesses, oldest first.
    pub fn failed_guesses(&self) -> impl Iterator<Item = &Guess> {
        self.failed_guesses.iter()
    }

    /// Incorrect guesses counted so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The configured attempt limit.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// Attempts left before the exhausted notice (never negative).
    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts)
    }

    /// Check if an evaluation is in progress.
    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.pending.is_some()
    }

    /// Check if the puzzle is won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Check if the exhausted-attempts notice is showing.
    #[must_use]
    pub fn is_exhausted_notice_open(&self) -> bool {
        self.exhausted_notice_open
    }

    /// The pause the host waits between `submit_guess` and `settle`.
    #[must_use]
    pub fn settle_delay(&self) -> std::time::Duration {
        self.config.settle_delay
    }

    /// Number of resets so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
