//! Symbol catalog and weighted sampling
//!
//! The catalog mixes a few emoji at low weight with a larger set of dashes and
//! geometric glyphs at high weight, so emoji show up sparsely.

/// Emoji tier, sampled sparsely
pub const EMOJI: [&str; 3] = ["🦄", "✨", "🎉"];
pub const EMOJI_WEIGHT: f64 = 50.0;

/// Glyph tier. Dashes repeat on purpose, which doubles their odds.
pub const GLYPHS: [&str; 9] = ["▬", "‑", "‒", "—", "‑", "‒", "—", "▲", "●"];
pub const GLYPH_WEIGHT: f64 = 200.0;

/// A table of `(value, weight)` pairs sampled by cumulative weight
#[derive(Debug, Clone)]
pub struct WeightedSet<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T> WeightedSet<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
        }
    }

    /// Add an entry. Non-positive and non-finite weights are ignored.
    pub fn push(&mut self, value: T, weight: f64) {
        if weight > 0.0 && weight.is_finite() {
            self.entries.push((value, weight));
            self.total += weight;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn entries(&self) -> &[(T, f64)] {
        &self.entries
    }

    /// Probability of drawing the entry at `index`
    pub fn probability(&self, index: usize) -> f64 {
        match self.entries.get(index) {
            Some((_, weight)) if self.total > 0.0 => weight / self.total,
            _ => 0.0,
        }
    }

    /// Select an entry from a uniform sample `unit` in [0, 1)
    ///
    /// Scales `unit` to `r` in [0, total) and walks the table, returning the
    /// first entry whose running weight exceeds `r`. Returns `None` only when
    /// the set is empty.
    pub fn select(&self, unit: f64) -> Option<&T> {
        let r = unit.clamp(0.0, 1.0) * self.total;
        let mut cumulative = 0.0;
        for (value, weight) in &self.entries {
            cumulative += weight;
            if r < cumulative {
                return Some(value);
            }
        }
        // unit == 1.0 or float round-off on the last boundary
        self.entries.last().map(|(value, _)| value)
    }
}

impl<T> Default for WeightedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the symbol catalog: emoji first, then glyphs
pub fn catalog() -> WeightedSet<&'static str> {
    let mut symbols = WeightedSet::new();
    for symbol in EMOJI {
        symbols.push(symbol, EMOJI_WEIGHT);
    }
    for symbol in GLYPHS {
        symbols.push(symbol, GLYPH_WEIGHT);
    }
    symbols
}

pub fn is_emoji(symbol: &str) -> bool {
    EMOJI.contains(&symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_layout() {
        let symbols = catalog();
        assert_eq!(symbols.len(), 12);
        assert_eq!(symbols.total_weight(), 3.0 * 50.0 + 9.0 * 200.0);
        assert_eq!(symbols.entries()[0], ("🦄", 50.0));
        assert_eq!(symbols.entries()[3], ("▬", 200.0));
    }

    #[test]
    fn test_emoji_entry_is_quarter_of_glyph_entry() {
        let symbols = catalog();
        let emoji = symbols.probability(0);
        let glyph = symbols.probability(3);
        assert!((glyph / emoji - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_class_probabilities() {
        let symbols = catalog();
        let emoji: f64 = (0..symbols.len())
            .filter(|&i| is_emoji(symbols.entries()[i].0))
            .map(|i| symbols.probability(i))
            .sum();
        assert!((emoji - 150.0 / 1950.0).abs() < 1e-12);
    }

    #[test]
    fn test_select_boundaries() {
        let mut set = WeightedSet::new();
        set.push('a', 1.0);
        set.push('b', 3.0);

        assert_eq!(set.select(0.0), Some(&'a'));
        assert_eq!(set.select(0.2499), Some(&'a'));
        assert_eq!(set.select(0.25), Some(&'b'));
        assert_eq!(set.select(0.9999), Some(&'b'));
        assert_eq!(set.select(1.0), Some(&'b'));
    }

    #[test]
    fn test_select_empty() {
        let set: WeightedSet<char> = WeightedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.select(0.5), None);
        assert_eq!(set.probability(0), 0.0);
    }

    #[test]
    fn test_ignores_bad_weights() {
        let mut set = WeightedSet::new();
        set.push('a', 0.0);
        set.push('b', -2.0);
        set.push('c', f64::NAN);
        set.push('d', 2.0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.select(0.0), Some(&'d'));
    }

    #[test]
    fn test_select_matches_weights_on_even_grid() {
        // Stepping evenly through [0, 1) hits each entry in proportion to its weight
        let symbols = catalog();
        let steps = 19_500;
        let emoji = (0..steps)
            .filter_map(|i| symbols.select(i as f64 / steps as f64))
            .filter(|s| is_emoji(s))
            .count();
        assert!((1_499..=1_501).contains(&emoji), "got {emoji}");
    }
}
