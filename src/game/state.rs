//! Game phase types.

/// Game phase, derived from the trick, the hands and the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The acting player must play a card.
    AwaitingPlay,
    /// Every player has played; the trick must be scored.
    TrickComplete,
    /// Hands are short and the stock has cards; players must be dealt one each.
    RedealPending,
    /// The stock and every hand are empty.
    GameOver,
}
