//! Property tests over whole games.

use std::collections::HashSet;

use briscola::encoding::{decode_card, encode_card};
use briscola::{Card, DECK_SIZE, Deck, Game, GameOptions, OBSERVATION_LEN, encoding};
use proptest::prelude::*;

fn accounted_cards(game: &Game) -> Vec<Card> {
    let mut all: Vec<Card> = game.deck().cards().to_vec();
    for player in game.players() {
        all.extend_from_slice(player.hand());
        all.extend_from_slice(player.pile());
    }
    all.extend_from_slice(game.trick());
    if !game.briscola_dealt() {
        all.push(game.briscola());
    }
    all
}

proptest! {
    #[test]
    fn index_round_trips(index in 0u8..40) {
        let card = decode_card(index).unwrap();
        prop_assert_eq!(encode_card(card), index);
    }

    #[test]
    fn seeded_shuffle_is_reproducible(seed in any::<u64>()) {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle_seeded(seed);
        b.shuffle_seeded(seed);
        prop_assert_eq!(a.cards(), b.cards());

        let unique: HashSet<Card> = a.cards().iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn games_conserve_cards_and_points(
        seed in any::<u64>(),
        four_players in any::<bool>(),
        choices in prop::collection::vec(0usize..3, 40),
    ) {
        let players = if four_players { 4 } else { 2 };
        let options = GameOptions::default()
            .with_players(players)
            .with_first_player((seed % players as u64) as usize)
            .with_seed(seed);
        let mut game = Game::new(options).unwrap();

        for choice in choices {
            prop_assert!(!game.game_over());
            let seat = game.action_on();
            let observation = encoding::observe(&game, seat).unwrap();
            prop_assert_eq!(observation.len(), OBSERVATION_LEN);
            prop_assert!(observation.iter().all(|&v| usize::from(v) < DECK_SIZE));

            let hand_len = game.players()[seat].hand().len();
            game.play_index(choice % hand_len).unwrap();
            if game.should_score_trick() {
                game.score_trick().unwrap();
            }
            if game.needs_redeal() {
                game.redeal().unwrap();
            }

            let all = accounted_cards(&game);
            prop_assert_eq!(all.len(), DECK_SIZE);
            let unique: HashSet<Card> = all.into_iter().collect();
            prop_assert_eq!(unique.len(), DECK_SIZE);
        }

        prop_assert!(game.game_over());
        let total: u32 = game.players().iter().map(|p| p.score()).sum();
        prop_assert_eq!(total, 120);
    }
}
