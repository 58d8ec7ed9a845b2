//! Round state machine, move, and settlement tests.

use bjsim::{
    ActionError, BetError, Card, CardSource, DECK_SIZE, DealError, Game, GameOptions, GameState,
    HandOutcome, MAX_BET, Move, Rank, RoundingMode, SettleError, ShuffledShoe, StackedShoe, Suit,
    standard_shoe,
};

const fn card(rank: Rank) -> Card {
    Card::new(Suit::Hearts, rank)
}

/// Builds a game whose next shoe deals `ranks` in order.
fn stacked(options: GameOptions, ranks: &[Rank]) -> Game<StackedShoe> {
    let stack: Vec<Card> = ranks.iter().copied().map(card).collect();
    Game::with_source(options, StackedShoe::new([stack]))
}

/// Deals a round with a wager of 100. Deal order is player, dealer, player,
/// dealer, then every later draw.
fn dealt(ranks: &[Rank]) -> Game<StackedShoe> {
    let mut game = stacked(GameOptions::default(), ranks);
    assert!(game.check_and_reshuffle());
    game.place_bet(100).unwrap();
    game.deal().unwrap();
    game
}

fn ranks_of(cards: &[Card]) -> Vec<Rank> {
    cards.iter().map(|card| card.rank).collect()
}

#[test]
fn deal_alternates_between_player_and_dealer() {
    let game = dealt(&[Rank::Ten, Rank::Nine, Rank::Seven, Rank::Eight]);

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.hand_index(), 0);
    assert_eq!(game.player_hands().len(), 1);

    let hand = &game.player_hands()[0];
    assert_eq!(ranks_of(hand.cards()), vec![Rank::Ten, Rank::Seven]);
    assert_eq!(hand.bet(), 100);
    assert_eq!(
        ranks_of(game.dealer_hand().cards()),
        vec![Rank::Nine, Rank::Eight]
    );
    assert_eq!(game.dealer_hand().up_card(), Some(card(Rank::Nine)));
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn dealer_natural_skips_straight_to_settlement() {
    let mut game = dealt(&[Rank::Ten, Rank::Ace, Rank::Nine, Rank::King]);
    assert_eq!(game.state(), GameState::HandOver);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);

    let result = game.settle().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -100);
    assert_eq!(game.balance(), -100);
}

#[test]
fn blackjack_against_blackjack_pushes() {
    let mut game = dealt(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
    assert_eq!(game.state(), GameState::HandOver);

    let result = game.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.net, 0);
}

#[test]
fn player_blackjack_pays_the_configured_ratio() {
    let mut game = dealt(&[Rank::Ace, Rank::Nine, Rank::King, Rank::Eight]);
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].net, 150);
    assert_eq!(game.balance(), 150);
}

#[test]
fn blackjack_payout_rounding_is_configurable() {
    let ranks = [Rank::Ace, Rank::Nine, Rank::King, Rank::Eight];

    for (mode, expected) in [
        (RoundingMode::Down, 151),
        (RoundingMode::Up, 152),
        (RoundingMode::Nearest, 152),
    ] {
        let mut game = stacked(GameOptions::default().with_rounding_blackjack(mode), &ranks);
        game.check_and_reshuffle();
        game.place_bet(101).unwrap();
        game.deal().unwrap();
        game.stand().unwrap();
        game.dealer_play().unwrap();
        assert_eq!(game.settle().unwrap().net, expected);
    }
}

#[test]
fn lower_score_loses_the_wager() {
    let mut game = dealt(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Ten]);
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.hands[0].player_score, 19);
    assert_eq!(result.dealer_score, 20);
    assert_eq!(result.net, -100);
}

#[test]
fn dealer_bust_pays_the_wager() {
    let mut game = dealt(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Six, Rank::King]);
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_score, 26);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.net, 100);
}

#[test]
fn dealer_hits_soft_seventeen_and_stands_on_hard_seventeen() {
    let mut soft = dealt(&[Rank::Ten, Rank::Ace, Rank::Nine, Rank::Six, Rank::Four]);
    soft.stand().unwrap();
    assert_eq!(soft.state(), GameState::DealerTurn);
    soft.dealer_play().unwrap();
    assert_eq!(soft.state(), GameState::HandOver);
    assert_eq!(soft.dealer_hand().len(), 3);
    assert_eq!(soft.dealer_hand().score(), 21);
    assert_eq!(soft.settle().unwrap().net, -100);

    let mut hard = dealt(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Seven]);
    hard.stand().unwrap();
    hard.dealer_play().unwrap();
    assert_eq!(hard.dealer_hand().len(), 2);
    assert_eq!(hard.settle().unwrap().net, 100);
}

#[test]
fn hit_keeps_the_card_on_bust() {
    let mut game = dealt(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Eight, Rank::King]);

    assert_eq!(game.hit().unwrap_err(), ActionError::Bust);
    let hand = &game.player_hands()[0];
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.score(), 26);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn hit_on_an_empty_shoe_reports_no_cards() {
    let mut game = dealt(&[Rank::Five, Rank::Nine, Rank::Six, Rank::Seven]);
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.player_hands()[0].len(), 2);
}

#[test]
fn split_pair_creates_two_single_card_hands() {
    let mut game = dealt(&[Rank::Eight, Rank::Ten, Rank::Eight, Rank::Seven]);
    game.split().unwrap();

    let hands = game.player_hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].cards(), &[card(Rank::Eight)]);
    assert_eq!(hands[1].cards(), &[card(Rank::Eight)]);
    assert_eq!(hands[0].bet(), 100);
    assert_eq!(hands[1].bet(), 100);
    assert_eq!(game.hand_index(), 0);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn split_rejects_mismatched_ranks_and_extra_cards() {
    let mut mismatched = dealt(&[Rank::Eight, Rank::Ten, Rank::Nine, Rank::Seven]);
    assert_eq!(
        mismatched.split().unwrap_err(),
        ActionError::SplitRankMismatch
    );
    assert_eq!(mismatched.player_hands().len(), 1);

    let mut three_cards = dealt(&[
        Rank::Eight,
        Rank::Ten,
        Rank::Eight,
        Rank::Seven,
        Rank::Two,
    ]);
    three_cards.hit().unwrap();
    assert_eq!(
        three_cards.split().unwrap_err(),
        ActionError::SplitCardCount
    );
    assert_eq!(three_cards.player_hands()[0].len(), 3);
}

#[test]
fn split_hands_settle_independently() {
    let mut game = dealt(&[
        Rank::Eight,
        Rank::Ten,
        Rank::Eight,
        Rank::Eight,
        Rank::Three,
        Rank::King,
        Rank::Ten,
    ]);

    game.apply(Move::Split).unwrap();
    game.apply(Move::Hit).unwrap();
    game.apply(Move::Hit).unwrap();
    game.apply(Move::Stand).unwrap();
    assert_eq!(game.hand_index(), 1);
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.apply(Move::Hit).unwrap();
    game.apply(Move::Stand).unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    game.dealer_play().unwrap();
    let result = game.settle().unwrap();

    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].player_score, 21);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[1].player_score, 18);
    assert_eq!(result.hands[1].outcome, HandOutcome::Push);
    assert_eq!(result.net, 100);
    assert_eq!(game.balance(), 100);
}

#[test]
fn double_draws_one_card_then_stands() {
    let mut game = dealt(&[Rank::Five, Rank::Ten, Rank::Six, Rank::Seven, Rank::Ten]);

    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, Rank::Ten);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.player_hands()[0].bet(), 200);
    assert_eq!(game.player_hands()[0].len(), 3);

    game.dealer_play().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.hands[0].bet, 200);
    assert_eq!(result.net, 200);
}

#[test]
fn double_ends_the_turn_even_on_bust() {
    let mut game = dealt(&[Rank::Ten, Rank::Ten, Rank::Six, Rank::Seven, Rank::King]);

    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, Rank::King);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(game.player_hands()[0].is_bust());

    game.dealer_play().unwrap();
    assert_eq!(game.settle().unwrap().net, -200);
}

#[test]
fn double_on_three_cards_leaves_the_turn_open() {
    let mut game = dealt(&[
        Rank::Two,
        Rank::Ten,
        Rank::Three,
        Rank::Seven,
        Rank::Four,
        Rank::Nine,
    ]);
    game.hit().unwrap();

    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.player_hands()[0].bet(), 100);
    assert_eq!(game.player_hands()[0].len(), 3);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn dealer_turn_never_returns_to_player_turn() {
    let mut game = dealt(&[Rank::Ten, Rank::Two, Rank::Nine, Rank::Three, Rank::Four]);
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    assert_eq!(
        game.apply(Move::Split).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        game.apply(Move::Double).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(game.active_hand(), None);

    // Hits during the dealer's turn land in the dealer's hand.
    game.apply(Move::Hit).unwrap();
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.player_hands()[0].len(), 2);
    assert_eq!(game.state(), GameState::DealerTurn);

    game.apply(Move::Stand).unwrap();
    assert_eq!(game.state(), GameState::HandOver);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn moves_outside_a_turn_are_rejected() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.split().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.double_down().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.settle().unwrap_err(), SettleError::InvalidState);
}

#[test]
fn bet_and_deal_errors() {
    let mut game = stacked(GameOptions::default(), &[Rank::Two, Rank::Three, Rank::Four]);
    game.check_and_reshuffle();

    assert_eq!(game.deal().unwrap_err(), DealError::NoBet);
    assert_eq!(
        game.place_bet(50).unwrap_err(),
        BetError::BelowMinimum {
            bet: 50,
            minimum: 100
        }
    );
    game.place_bet(100).unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);

    let mut in_play = dealt(&[Rank::Ten, Rank::Nine, Rank::Seven, Rank::Eight]);
    assert_eq!(in_play.place_bet(100).unwrap_err(), BetError::InvalidState);
    assert_eq!(in_play.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn wagers_that_cannot_be_doubled_are_rejected() {
    let mut game = stacked(
        GameOptions::default(),
        &[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Ten],
    );
    game.check_and_reshuffle();

    for bet in [usize::MAX, MAX_BET + 1] {
        assert_eq!(
            game.place_bet(bet).unwrap_err(),
            BetError::TooLarge {
                bet,
                maximum: MAX_BET
            }
        );
    }
    assert_eq!(game.deal().unwrap_err(), DealError::NoBet);

    // The largest wager still loses its full amount.
    game.place_bet(MAX_BET).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -isize::try_from(MAX_BET).unwrap());
    assert!(game.balance() < 0);
}

#[test]
fn largest_wager_doubles_without_overflow() {
    let mut game = stacked(
        GameOptions::default(),
        &[Rank::Five, Rank::Ten, Rank::Six, Rank::Seven, Rank::Ten],
    );
    game.check_and_reshuffle();
    game.place_bet(MAX_BET).unwrap();
    game.deal().unwrap();
    game.double_down().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.hands[0].bet, MAX_BET * 2);
    assert_eq!(result.net, isize::try_from(MAX_BET * 2).unwrap());
}

#[test]
fn settlement_clears_the_round() {
    let mut game = dealt(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Seven]);
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.player_hands.len(), 1);
    assert_eq!(result.dealer_hand.len(), 2);
    assert_eq!(result.balance, 100);
    assert_eq!(game.state(), GameState::Betting);
    assert!(game.player_hands().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.settle().unwrap_err(), SettleError::InvalidState);
}

#[test]
fn reshuffle_follows_the_threshold() {
    let options = GameOptions::default()
        .with_decks(1)
        .with_reshuffle_threshold(0.5);
    let mut game = Game::with_source(
        options,
        StackedShoe::new([standard_shoe(1), standard_shoe(1)]),
    );

    assert!(game.needs_reshuffle());
    assert!(game.check_and_reshuffle());
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(!game.needs_reshuffle());
    assert!(!game.check_and_reshuffle());

    game.place_bet(100).unwrap();
    game.deal().unwrap();
    assert!(!game.reshuffle());
}

#[test]
fn reshuffle_threshold_counts_whole_cards() {
    // One deck at a third: 52 / 3 truncates to 17.
    let mut game = Game::with_source(
        GameOptions::default().with_decks(1),
        StackedShoe::new([standard_shoe(1)[..21].to_vec()]),
    );
    assert!(game.check_and_reshuffle());

    game.place_bet(100).unwrap();
    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), 17);
    assert!(!game.needs_reshuffle());

    game.hit().unwrap();
    assert_eq!(game.cards_remaining(), 16);
    assert!(game.needs_reshuffle());
}

#[test]
fn seeded_shoes_are_complete_and_repeatable() {
    let first = ShuffledShoe::new(9).shuffled(3);
    let second = ShuffledShoe::new(9).shuffled(3);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3 * DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let copies = first
                .iter()
                .filter(|card| **card == Card::new(suit, rank))
                .count();
            assert_eq!(copies, 3);
        }
    }
}
