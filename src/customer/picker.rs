use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which product a customer asks for next.
pub trait ProductPicker: Send {
    fn pick(&mut self, catalog_len: usize) -> i64;
}

/// Uniform draw over the whole catalog.
pub struct UniformPicker {
    rng: StdRng,
}

impl UniformPicker {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl ProductPicker for UniformPicker {
    fn pick(&mut self, catalog_len: usize) -> i64 {
        self.rng.gen_range(0..catalog_len) as i64
    }
}

/// Replays a fixed list of indices, then repeats the last one.
#[cfg(test)]
pub struct ScriptedPicker {
    script: std::collections::VecDeque<i64>,
    last: i64,
}

#[cfg(test)]
impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = i64>) -> Self {
        Self { script: script.into_iter().collect(), last: 0 }
    }
}

#[cfg(test)]
impl ProductPicker for ScriptedPicker {
    fn pick(&mut self, _catalog_len: usize) -> i64 {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}
