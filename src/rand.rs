///  linear congruential generator
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next(&mut self) -> u32 {
        let old = self.state;
        //values by Donald Knuth
        self.state = old.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (old >> 16) as u32 //bits in middle have highest quality
    }

    /// uniform enough for picking colors, [`None`] if there is nothing to pick from
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next() as usize % items.len();
        items.get(i)
    }
}
