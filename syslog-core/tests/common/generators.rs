//! Stochastic content generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use syslog_core::{Priority, SdElement, SyslogMessage};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

const NAME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@.-_";

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("SYSLOG_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Stray delimiters before a message (usually none)
    pub fn blank_lines(&mut self) -> Vec<u8> {
        let count = self.geometric(0.2);
        vec![b'\n'; count]
    }

    /// Sorted split offsets in `0..=len`, zero-length chunks included.
    pub fn split_points(&mut self, len: usize) -> Vec<usize> {
        let count = self.geometric(0.85);
        let mut points: Vec<usize> = (0..count).map(|_| self.rng.gen_range(0..=len)).collect();
        points.sort_unstable();
        points
    }

    fn chars_from(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    /// SD-NAME or head token: printable, no SP, never the bare NILVALUE.
    pub fn name(&mut self) -> String {
        let len = 1 + self.geometric(0.8).min(31);
        let mut name = self.chars_from(NAME_CHARS, len);
        if name == "-" {
            name.push('x');
        }
        name
    }

    /// Head field value, NILVALUE one time in four.
    pub fn head_field(&mut self) -> Option<String> {
        if self.chance(0.25) {
            None
        } else {
            Some(self.name())
        }
    }

    /// PARAM-VALUE text, including characters that need escaping.
    pub fn value(&mut self) -> String {
        let alphabet = "abc XYZ 019 =\"]\\[é-";
        let chars: Vec<char> = alphabet.chars().collect();
        let len = self.geometric(0.85);
        (0..len).map(|_| chars[self.rng.gen_range(0..chars.len())]).collect()
    }

    /// Body text without the frame delimiter.
    pub fn body(&mut self) -> Vec<u8> {
        let len = self.geometric(0.95);
        let alphabet = b"lorem ipsum [dolor] sit=\"amet\" \\ - \t";
        self.chars_from(alphabet, len).into_bytes()
    }

    /// A random well-formed message.
    pub fn message(&mut self) -> SyslogMessage {
        let priority = Priority::new(self.rng.gen_range(0..=191)).unwrap();
        let mut structured_data = Vec::new();
        for _ in 0..self.geometric(0.5) {
            let mut element = SdElement::new(self.name());
            for _ in 0..self.geometric(0.6) {
                element.params.push((self.name(), self.value()));
            }
            structured_data.push(element);
        }

        SyslogMessage {
            priority,
            version: self.rng.gen_range(1..=3),
            timestamp: self.head_field(),
            hostname: self.head_field(),
            appname: self.head_field(),
            procid: self.head_field(),
            msgid: self.head_field(),
            structured_data,
            body: self.body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.name(), g2.name());
            assert_eq!(g1.split_points(100), g2.split_points(100));
        }
    }
}
