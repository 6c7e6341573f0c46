/// A number card, identified entirely by its value. Two cards with the same
/// value are interchangeable.
pub type CardValue = u8;

/// Highest card value in the game.
pub const MAX_CARD_VALUE: CardValue = 12;

/// Total cards in a fresh deck: one 0 plus v copies of each value 1..=12.
pub const DECK_SIZE: usize = 79;

/// Copies of `value` in the deck. Value 0 is the only card with a single copy;
/// every other value v appears v times.
pub fn card_count(value: CardValue) -> usize {
    match value {
        0 => 1,
        v => v as usize,
    }
}

/// Build an unshuffled deck from the fixed count table.
pub fn build_deck() -> Vec<CardValue> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for value in 0..=MAX_CARD_VALUE {
        for _ in 0..card_count(value) {
            deck.push(value);
        }
    }
    deck
}
