//! Random flavor text.

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;
use strum::IntoEnumIterator;

/// How the ants feel about all this.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum AntMood {
    /// Hungry
    #[default]
    Hungry,
    /// Bitter
    Bitter,
    /// Grumbling
    Grumbling,
    /// Malcontent
    Malcontent,
    /// Raucous
    Raucous,
}

/// Source of cosmetic variation in the narrative.
pub trait FlavorSource {
    /// Picks a mood for the ant colony.
    fn ant_mood(&mut self) -> AntMood;
}

/// Picks flavor uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomFlavor<R = ThreadRng> {
    rng: R,
}

impl RandomFlavor<ThreadRng> {
    /// Creates a flavor source backed by the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomFlavor<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomFlavor<R> {
    /// Creates a flavor source backed by the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FlavorSource for RandomFlavor<R> {
    fn ant_mood(&mut self) -> AntMood {
        AntMood::iter().choose(&mut self.rng).unwrap_or_default()
    }
}

/// Always returns the same flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_new::new)]
pub struct FixedFlavor {
    mood: AntMood,
}

impl FlavorSource for FixedFlavor {
    fn ant_mood(&mut self) -> AntMood {
        self.mood
    }
}
