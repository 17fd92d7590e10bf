//! Game integration tests.

use std::collections::HashSet;

use briscola::{
    Card, DECK_SIZE, Deck, Game, GameOptions, GamePhase, HAND_SIZE, PlayError, RedealError,
    ScoreError, SetupError, Standing, Suit, trick_winner, winning_card,
};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

/// Unshuffled game: the briscola is the ace of cups and seat `i` holds the
/// cups/coins cards dealt round-robin from the two of cups onwards.
fn unshuffled(players: usize, first_player: usize) -> Game {
    let options = GameOptions::default()
        .with_players(players)
        .with_first_player(first_player);
    Game::with_deck(options, Deck::new()).unwrap()
}

fn assert_closure(game: &Game) {
    let mut all: Vec<Card> = game.deck().cards().to_vec();
    for player in game.players() {
        all.extend_from_slice(player.hand());
        all.extend_from_slice(player.pile());
    }
    all.extend_from_slice(game.trick());
    if !game.briscola_dealt() {
        all.push(game.briscola());
    }
    assert_eq!(all.len(), DECK_SIZE);
    let unique: HashSet<Card> = all.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

/// Plays a game to the end, always choosing the first card in hand.
/// Returns the number of redeals.
fn play_out(game: &mut Game) -> usize {
    let mut redeals = 0;
    while !game.game_over() {
        assert_eq!(game.phase(), GamePhase::AwaitingPlay);
        game.play_index(0).unwrap();
        assert_closure(game);
        if game.should_score_trick() {
            game.score_trick().unwrap();
            assert_closure(game);
        }
        if game.needs_redeal() {
            game.redeal().unwrap();
            redeals += 1;
            assert!(game.players().iter().all(|p| p.hand().len() == HAND_SIZE));
            assert_closure(game);
        }
    }
    redeals
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_players(2)
        .with_first_player(1)
        .with_seed(99);

    assert_eq!(options.players, 2);
    assert_eq!(options.first_player, 1);
    assert_eq!(options.seed, Some(99));
    assert_eq!(GameOptions::default().players, 4);
    assert_eq!(GameOptions::default().seed, None);
}

#[test]
fn setup_errors() {
    let options = GameOptions::default().with_seed(1);
    assert_eq!(
        Game::new(options.with_players(3)).unwrap_err(),
        SetupError::InvalidPlayerCount(3)
    );
    assert_eq!(
        Game::new(options.with_players(5)).unwrap_err(),
        SetupError::InvalidPlayerCount(5)
    );
    assert_eq!(
        Game::new(options.with_players(2).with_first_player(2)).unwrap_err(),
        SetupError::InvalidStartIndex {
            index: 2,
            players: 2
        }
    );

    let mut short = Deck::new();
    short.take(1);
    assert_eq!(
        Game::with_deck(options, short).unwrap_err(),
        SetupError::IncompleteDeck
    );

    let mut doubled = Deck::new().cards().to_vec();
    doubled[1] = doubled[0];
    assert_eq!(
        Game::with_deck(options, Deck::from_cards(doubled)).unwrap_err(),
        SetupError::IncompleteDeck
    );
}

#[test]
fn new_game_deals_three_cards_each() {
    let game = Game::new(GameOptions::default().with_first_player(3).with_seed(7)).unwrap();

    assert_eq!(game.player_count(), 4);
    assert!(game.players().iter().all(|p| p.hand().len() == HAND_SIZE));
    assert_eq!(game.deck().len(), DECK_SIZE - 1 - 12);
    assert_eq!(game.stock_len(), DECK_SIZE - 12);
    assert_eq!(game.action_on(), 3);
    assert!(game.trick().is_empty());
    assert!(!game.deck().contains(game.briscola()));
    assert_eq!(game.trump_suit(), game.briscola().suit());
    assert_eq!(game.phase(), GamePhase::AwaitingPlay);
    assert_closure(&game);
}

#[test]
fn same_seed_same_game() {
    let options = GameOptions::default().with_players(2).with_seed(42);
    let a = Game::new(options).unwrap();
    let b = Game::new(options).unwrap();
    assert_eq!(a.briscola(), b.briscola());
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.players(), b.players());
}

#[test]
fn deal_is_round_robin_from_seat_zero() {
    let game = unshuffled(4, 2);

    assert_eq!(game.briscola(), card(Suit::Cups, 1));
    assert_eq!(
        game.players()[0].hand(),
        &[card(Suit::Cups, 2), card(Suit::Cups, 6), card(Suit::Cups, 10)]
    );
    assert_eq!(
        game.players()[1].hand(),
        &[card(Suit::Cups, 3), card(Suit::Cups, 7), card(Suit::Coins, 1)]
    );
    assert_eq!(
        game.players()[3].hand(),
        &[card(Suit::Cups, 5), card(Suit::Cups, 9), card(Suit::Coins, 3)]
    );
    assert_eq!(game.deck().cards()[0], card(Suit::Coins, 4));
}

#[test]
fn trick_winner_prefers_strength_within_lead() {
    let trick = [card(Suit::Batons, 7), card(Suit::Batons, 1)];
    assert_eq!(trick_winner(&trick, Suit::Cups), Some(1));
    assert_eq!(winning_card(&trick, Suit::Cups), Some(card(Suit::Batons, 1)));
}

#[test]
fn trump_beats_any_lead() {
    let trick = [card(Suit::Cups, 2), card(Suit::Swords, 2)];
    assert_eq!(trick_winner(&trick, Suit::Swords), Some(1));

    let trick = [
        card(Suit::Cups, 1),
        card(Suit::Swords, 4),
        card(Suit::Swords, 3),
        card(Suit::Cups, 3),
    ];
    assert_eq!(trick_winner(&trick, Suit::Swords), Some(2));
}

#[test]
fn off_suit_cards_never_win() {
    let trick = [
        card(Suit::Coins, 2),
        card(Suit::Batons, 1),
        card(Suit::Cups, 3),
        card(Suit::Coins, 4),
    ];
    assert_eq!(trick_winner(&trick, Suit::Swords), Some(3));
    assert_eq!(trick_winner(&[], Suit::Swords), None);
}

#[test]
fn trump_lead_holds_against_stronger_off_suit() {
    let trick = [card(Suit::Batons, 2), card(Suit::Cups, 1)];
    assert_eq!(trick_winner(&trick, Suit::Batons), Some(0));
}

#[test]
fn score_trick_awards_the_seat_that_played_the_winner() {
    let mut game = unshuffled(4, 2);

    game.play(card(Suit::Coins, 2)).unwrap(); // seat 2 leads coins
    game.play(card(Suit::Coins, 3)).unwrap(); // seat 3
    game.play(card(Suit::Cups, 2)).unwrap(); // seat 0 trumps
    game.play(card(Suit::Coins, 1)).unwrap(); // seat 1
    assert_eq!(game.phase(), GamePhase::TrickComplete);
    assert_eq!(game.lead_suit(), Some(Suit::Coins));

    assert_eq!(game.score_trick().unwrap(), 0);
    assert_eq!(game.action_on(), 0);
    assert!(game.trick().is_empty());
    assert_eq!(game.players()[0].score(), 21);
    assert_eq!(game.players()[0].pile().len(), 4);
}

#[test]
fn play_errors() {
    let mut game = unshuffled(2, 0);
    let foreign = card(Suit::Cups, 3); // held by seat 1

    assert!(!game.playable(foreign));
    assert_eq!(game.play(foreign), Err(PlayError::CardNotInHand(foreign)));
    assert_eq!(
        game.play_index(3),
        Err(PlayError::HandIndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        game.score_trick(),
        Err(ScoreError::TrickNotComplete {
            played: 0,
            needed: 2
        })
    );

    game.play_index(0).unwrap();
    assert_eq!(game.action_on(), 1);
    game.play(foreign).unwrap();

    assert!(game.should_score_trick());
    assert_eq!(
        game.play(card(Suit::Cups, 5)),
        Err(PlayError::TrickAlreadyComplete)
    );
    assert_eq!(game.play_index(0), Err(PlayError::TrickAlreadyComplete));
}

#[test]
fn redeal_starts_with_the_trick_winner() {
    let mut game = unshuffled(2, 0);
    // Seat 0: cups 2, 4, 6. Seat 1: cups 3, 5, 7. Deck continues at cups 8.
    game.play(card(Suit::Cups, 2)).unwrap();
    game.play(card(Suit::Cups, 3)).unwrap();
    assert_eq!(game.redeal(), Err(RedealError::TrickInProgress));

    assert_eq!(game.score_trick().unwrap(), 1);
    assert_eq!(game.players()[1].score(), 10);
    assert!(game.needs_redeal());
    assert_eq!(game.phase(), GamePhase::RedealPending);
    assert_eq!(game.play(card(Suit::Cups, 5)), Err(PlayError::RedealPending));

    game.redeal().unwrap();
    assert!(game.players()[1].holds(card(Suit::Cups, 8)));
    assert!(game.players()[0].holds(card(Suit::Cups, 9)));
    assert!(!game.needs_redeal());
    assert_eq!(game.redeal(), Err(RedealError::PlayersHaveCards));
    assert_closure(&game);
}

#[test]
fn briscola_is_the_last_card_dealt() {
    let mut game = unshuffled(4, 0);
    let briscola = game.briscola();

    while game.stock_len() > 0 {
        assert!(!game.briscola_dealt());
        game.play_index(0).unwrap();
        if game.should_score_trick() {
            game.score_trick().unwrap();
        }
        if game.needs_redeal() {
            game.redeal().unwrap();
        }
    }

    assert!(game.briscola_dealt());
    assert!(game.deck().is_empty());
    assert!(game.players().iter().any(|p| p.holds(briscola)));
    assert!(game.players().iter().all(|p| p.hand().len() == HAND_SIZE));
}

#[test]
fn two_player_game_runs_to_completion() {
    for seed in 0..25 {
        let mut game = Game::new(GameOptions::default().with_players(2).with_seed(seed)).unwrap();
        let redeals = play_out(&mut game);

        assert_eq!(redeals, 17);
        assert!(game.game_over());
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(!game.needs_redeal());
        assert_eq!(game.play_index(0), Err(PlayError::GameOver));

        let total: u32 = game.players().iter().map(|p| p.score()).sum();
        assert_eq!(total, 120);
        let piles: usize = game.players().iter().map(|p| p.pile().len()).sum();
        assert_eq!(piles, DECK_SIZE);
    }
}

#[test]
fn four_player_game_runs_to_completion() {
    for seed in 0..25 {
        let options = GameOptions::default()
            .with_first_player((seed % 4) as usize)
            .with_seed(seed);
        let mut game = Game::new(options).unwrap();
        let redeals = play_out(&mut game);

        assert_eq!(redeals, 7);
        assert!(game.game_over());
        assert!(game.players().iter().any(|p| p.pile().contains(&game.briscola())));

        let leaders = game.leaders();
        assert_eq!(leaders.len(), 4);
        assert!(leaders.windows(2).all(|w| w[0].score >= w[1].score));
        let total: u32 = leaders.iter().map(|standing| standing.score).sum();
        assert_eq!(total, 120);
    }
}

#[test]
fn leaders_keep_seat_order_on_ties() {
    let game = unshuffled(4, 1);
    assert_eq!(
        game.leaders(),
        vec![
            Standing { seat: 0, score: 0 },
            Standing { seat: 1, score: 0 },
            Standing { seat: 2, score: 0 },
            Standing { seat: 3, score: 0 },
        ]
    );
}

#[test]
fn display_renders_table() {
    let game = unshuffled(2, 0);
    let text = game.to_string();
    assert!(text.contains("Player 0: hand=[2 of cups, 4 of cups, 6 of cups]"));
    assert!(text.contains("Action on: 0"));
    assert!(text.contains("Briscola: ace of cups | stock: 34"));
}
