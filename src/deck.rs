use crate::logger;
use crate::models::DrawSession;
use crate::utils::truncate_string;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform random permutation of `questions`. The input is never mutated.
pub fn shuffled<R: Rng>(questions: &[String], rng: &mut R) -> Vec<String> {
    let mut pool = questions.to_vec();
    pool.shuffle(rng);
    pool
}

impl DrawSession {
    /// Begin a new pass: fresh permutation, no card face-up yet.
    pub fn start<R: Rng>(questions: Vec<String>, rng: &mut R) -> Self {
        let pool = shuffled(&questions, rng);
        logger::log(&format!("started draw session with {} questions", questions.len()));
        Self {
            questions,
            pool,
            current: None,
        }
    }

    /// Draw the next card. When the pool is exhausted it is replaced with a
    /// fresh permutation of the full list before drawing. Returns `None` only
    /// when the question list itself is empty.
    pub fn draw_next<R: Rng>(&mut self, rng: &mut R) -> Option<&str> {
        if self.questions.is_empty() {
            return None;
        }
        if self.pool.is_empty() {
            self.pool = shuffled(&self.questions, rng);
            logger::log("pool exhausted, reshuffled");
        }
        let next = self.pool.remove(0);
        logger::log(&format!("drew card: {}", truncate_string(&next, 60)));
        self.current = Some(next);
        self.current.as_deref()
    }

    /// Cards still in the pass, counting the one currently face-up.
    pub fn remaining_in_pass(&self) -> usize {
        self.pool.len() + usize::from(self.current.is_some())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}
