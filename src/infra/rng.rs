use crate::engine::DiceSource;

//
// ✅ NATIVE ВАРИАНТ (НЕ wasm32): кости на rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemDice;

#[cfg(not(target_arch = "wasm32"))]
impl DiceSource for SystemDice {
    fn roll_die(&mut self) -> u8 {
        use rand::Rng;

        rand::thread_rng().gen_range(1..=6)
    }
}

/// Детерминированные кости для тестов и реплея.
/// Один и тот же seed даёт ту же последовательность бросков.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicDice {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicDice {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DiceSource for DeterministicDice {
    fn roll_die(&mut self) -> u8 {
        use rand::Rng;
        self.inner.gen_range(1..=6)
    }
}

/// Заранее заданная последовательность значений костей.
///
/// Работает везде (и на wasm). Когда последовательность кончается,
/// начинается сначала; пустая последовательность всегда даёт 1.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Из пар бросков: `[(3, 4), (2, 2)]` -> 3, 4, 2, 2.
    pub fn from_rolls(rolls: &[(u8, u8)]) -> Self {
        Self::new(rolls.iter().flat_map(|&(a, b)| [a, b]).collect())
    }

    /// Дописать броски в конец сценария.
    pub fn push_roll(&mut self, die1: u8, die2: u8) {
        self.values.push(die1);
        self.values.push(die2);
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
