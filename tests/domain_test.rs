//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use holdem_sim::domain::*;
use holdem_sim::engine::EngineError;

/// Утилита: разобрать список карт вида "Ah Kd".
fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

#[test]
fn card_parse_and_display() {
    let c: Card = "Ah".parse().unwrap();
    assert_eq!(c, Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(c.to_string(), "Ah");

    // Регистр ранга и масти не важен.
    let t: Card = "td".parse().unwrap();
    assert_eq!(t, Card::new(Rank::Ten, Suit::Diamonds));

    assert_eq!(format_cards(&cards("As Kd 7c")), "As Kd 7c");
}

#[test]
fn card_parse_errors() {
    assert_eq!(
        "10h".parse::<Card>(),
        Err(CardParseError::BadLength("10h".to_string()))
    );
    assert_eq!("Xh".parse::<Card>(), Err(CardParseError::BadRank('X')));
    assert_eq!("Ax".parse::<Card>(), Err(CardParseError::BadSuit('x')));
}

#[test]
fn rank_values_roundtrip() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::from_value(11), Some(Rank::Jack));
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let mut deck = deck;
    let all = deck.draw(52).unwrap();
    let unique: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(unique.len(), 52);
    assert!(deck.is_empty());
}

/// Верх колоды – конец стандартного порядка: сначала пики сверху вниз.
#[test]
fn deck_draws_from_top() {
    let mut deck = Deck::standard_52();
    assert_eq!(deck.draw(2).unwrap(), cards("As Ks"));
    assert_eq!(deck.draw(1).unwrap(), cards("Qs"));
    assert_eq!(deck.len(), 49);
}

#[test]
fn deck_draw_too_many_leaves_deck_untouched() {
    let mut deck = Deck::from_cards(cards("2c 3c 4c"));
    let err = deck.draw(4).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            requested: 4,
            remaining: 3
        }
    );
    assert_eq!(deck.len(), 3);

    // Ровно столько, сколько есть, – можно.
    assert_eq!(deck.draw(3).unwrap(), cards("4c 3c 2c"));
}

#[test]
fn chips_split_floor_division() {
    assert_eq!(Chips(101).split(2), (Chips(50), Chips(1)));
    assert_eq!(Chips(30).split(3), (Chips(10), Chips::ZERO));
    assert_eq!(Chips(7).split(0), (Chips::ZERO, Chips(7)));
}

#[test]
fn chips_arithmetic_saturates() {
    assert_eq!(Chips(5) - Chips(10), Chips::ZERO);
    assert_eq!(Chips(5) + Chips(10), Chips(15));

    let total: Chips = [Chips(1), Chips(2), Chips(3)].iter().sum();
    assert_eq!(total, Chips(6));
}

/// Коммит больше стека: игрок вносит остаток и остаётся в раздаче.
#[test]
fn actor_commit_truncates_to_stack() {
    let mut a = Actor::bot("Bot", Chips(30));
    assert_eq!(a.commit(Chips(10)), Chips(10));
    assert_eq!(a.chips(), Chips(20));
    assert_eq!(a.current_bet, Chips(10));

    assert_eq!(a.commit(Chips(100)), Chips(20));
    assert_eq!(a.chips(), Chips::ZERO);
    assert_eq!(a.current_bet, Chips(30));
    assert!(a.active);
    assert!(a.is_all_in());
    assert!(!a.can_act());
}

#[test]
fn actor_reset_for_hand_eliminates_empty_stack() {
    let mut broke = Actor::human("Hero", Chips::ZERO);
    broke.hand = cards("Ah Kh");
    broke.reset_for_hand();
    assert!(!broke.active);
    assert!(broke.hand.is_empty());

    let mut funded = Actor::bot("Bot", Chips(10));
    funded.fold();
    funded.reset_for_hand();
    assert!(funded.active);
    assert_eq!(funded.current_bet, Chips::ZERO);
}

#[test]
fn street_progression() {
    assert_eq!(Street::PreFlop.next(), Street::Flop);
    assert_eq!(Street::River.next(), Street::Showdown);
    assert_eq!(Street::Showdown.next(), Street::Showdown);

    // От префлопа до шоудауна открывается ровно 5 общих карт.
    let mut street = Street::PreFlop;
    let mut revealed = 0;
    while street != Street::Showdown {
        street = street.next();
        revealed += street.cards_revealed();
    }
    assert_eq!(revealed, 5);
    assert_eq!(Street::PreFlop.to_string(), "Pre-Flop");
}

#[test]
fn position_labels() {
    assert_eq!(Position::Dealer.to_string(), "Dealer");
    assert_eq!(Position::UnderTheGun.to_string(), "Under the Gun");
    assert_eq!(Position::MiddlePosition(2).to_string(), "Middle Position 2");
}
