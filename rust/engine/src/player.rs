use crate::cards::{all_ranks, Card, Rank, RANK_COUNT};
use crate::rules::SET_SIZE;

/// A seat at the table: a name, the cards in hand, and a per-rank count
/// kept in step with the hand on every mutation.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    /// Cards held per rank, indexed by [`Rank::index`]
    rank_counts: [u8; RANK_COUNT],
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            rank_counts: [0; RANK_COUNT],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.rank_counts[card.rank.index()] += 1;
    }

    pub fn has_card(&self, rank: Rank) -> bool {
        self.rank_counts[rank.index()] > 0
    }

    pub fn count_of(&self, rank: Rank) -> usize {
        self.rank_counts[rank.index()] as usize
    }

    /// Hands over every card of `rank`, in hand order. Go Fish never gives a
    /// partial answer, so this is all-or-nothing by construction.
    pub fn give_cards(&mut self, rank: Rank) -> Vec<Card> {
        if !self.has_card(rank) {
            return Vec::new();
        }
        let (given, kept): (Vec<Card>, Vec<Card>) =
            self.hand.drain(..).partition(|c| c.rank == rank);
        self.hand = kept;
        self.rank_counts[rank.index()] = 0;
        given
    }

    /// Discards every card of `rank` and returns how many were removed.
    pub fn remove_cards(&mut self, rank: Rank) -> usize {
        let before = self.hand.len();
        self.hand.retain(|c| c.rank != rank);
        self.rank_counts[rank.index()] = 0;
        before - self.hand.len()
    }

    /// Snapshot of the hand; changes to it do not reach the player.
    pub fn hand(&self) -> Vec<Card> {
        self.hand.clone()
    }

    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn first_card(&self) -> Option<Card> {
        self.hand.first().copied()
    }

    /// Distinct ranks held, ascending.
    pub fn ranks(&self) -> Vec<Rank> {
        all_ranks()
            .into_iter()
            .filter(|r| self.has_card(*r))
            .collect()
    }

    /// Ranks held exactly [`SET_SIZE`] times, ascending.
    pub fn complete_sets(&self) -> Vec<Rank> {
        all_ranks()
            .into_iter()
            .filter(|r| self.count_of(*r) == SET_SIZE)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn add_card_updates_rank_index() {
        let mut p = Player::new("Ann");
        assert!(!p.has_card(Rank::Five));
        p.add_card(card(Rank::Five, Suit::Hearts));
        p.add_card(card(Rank::Five, Suit::Clubs));
        assert!(p.has_card(Rank::Five));
        assert_eq!(p.count_of(Rank::Five), 2);
        assert_eq!(p.hand_len(), 2);
    }

    #[test]
    fn give_cards_returns_every_match_and_keeps_order() {
        let mut p = Player::new("Ann");
        p.add_card(card(Rank::Queen, Suit::Hearts));
        p.add_card(card(Rank::Two, Suit::Hearts));
        p.add_card(card(Rank::Queen, Suit::Spades));
        p.add_card(card(Rank::Three, Suit::Clubs));

        let given = p.give_cards(Rank::Queen);
        assert_eq!(
            given,
            vec![card(Rank::Queen, Suit::Hearts), card(Rank::Queen, Suit::Spades)]
        );
        assert_eq!(
            p.hand(),
            vec![card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Clubs)]
        );
        assert_eq!(p.count_of(Rank::Queen), 0);
    }

    #[test]
    fn give_cards_without_match_is_empty() {
        let mut p = Player::new("Ann");
        p.add_card(card(Rank::Two, Suit::Hearts));
        assert!(p.give_cards(Rank::King).is_empty());
        assert_eq!(p.hand_len(), 1);
    }

    #[test]
    fn remove_cards_clears_rank_without_going_negative() {
        let mut p = Player::new("Ann");
        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            p.add_card(card(Rank::Nine, suit));
        }
        p.add_card(card(Rank::Ace, Suit::Hearts));
        assert_eq!(p.complete_sets(), vec![Rank::Nine]);
        assert_eq!(p.remove_cards(Rank::Nine), 4);
        assert_eq!(p.remove_cards(Rank::Nine), 0);
        assert_eq!(p.count_of(Rank::Nine), 0);
        assert_eq!(p.hand(), vec![card(Rank::Ace, Suit::Hearts)]);
    }

    #[test]
    fn hand_snapshot_is_detached() {
        let mut p = Player::new("Ann");
        p.add_card(card(Rank::Four, Suit::Hearts));
        let mut snapshot = p.hand();
        snapshot.clear();
        assert_eq!(p.hand_len(), 1);
    }

    #[test]
    fn ranks_lists_distinct_ranks_ascending() {
        let mut p = Player::new("Ann");
        p.add_card(card(Rank::King, Suit::Hearts));
        p.add_card(card(Rank::Three, Suit::Hearts));
        p.add_card(card(Rank::King, Suit::Clubs));
        assert_eq!(p.ranks(), vec![Rank::Three, Rank::King]);
        assert_eq!(p.first_card(), Some(card(Rank::King, Suit::Hearts)));
    }
}
