use crate::cards::{Card, Rank, Suit};
use rand::Rng;

/// A standard 52-card deck. A round takes its own copy and consumes it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use gta_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Draw `count` cards, each picked uniformly among the cards still in the deck.
    /// Returns fewer than `count` cards once the deck runs out.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count.min(self.cards.len()));
        for _ in 0..count {
            if self.cards.is_empty() {
                break;
            }
            let idx = rng.random_range(0..self.cards.len());
            drawn.push(self.cards.swap_remove(idx));
        }
        drawn
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Draw `count` cards from a fresh 52-card deck.
pub fn draw_fresh<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Card> {
    Deck::standard().draw_random(count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let mut r1 = ChaCha8Rng::seed_from_u64(42);
        let mut r2 = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(draw_fresh(6, &mut r1), draw_fresh(6, &mut r2));
    }

    #[test]
    fn draw_removes_cards_from_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut d = Deck::standard();
        let hand = d.draw_random(3, &mut rng);
        assert_eq!(hand.len(), 3);
        assert_eq!(d.len(), 49);
        assert!(hand.iter().all(|c| !d.contains(*c)));
    }

    #[test]
    fn short_deck_returns_fewer_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut d = Deck::standard();
        let _ = d.draw_random(50, &mut rng);
        let rest = d.draw_random(3, &mut rng);
        assert_eq!(rest.len(), 2);
        assert!(d.is_empty());
        assert!(d.draw_random(3, &mut rng).is_empty());
    }
}
