use briscola::{BriscolaEnv, Card, EnvOptions, GamePhase, Player, StepOutcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmEnv {
    env: BriscolaEnv,
}

#[wasm_bindgen]
impl WasmEnv {
    #[wasm_bindgen(constructor)]
    pub fn new(players: u32, seed: u32) -> Result<WasmEnv, JsValue> {
        let options = EnvOptions::default().with_players(players as usize);
        let env = BriscolaEnv::new(options, Some(u64::from(seed))).map_err(js_err)?;
        Ok(Self { env })
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        self.env.reset(Some(u64::from(seed))).map_err(js_err)
    }

    pub fn agent_selection(&self) -> u32 {
        self.env.agent_selection() as u32
    }

    pub fn step(&mut self, action: u8) -> Result<JsValue, JsValue> {
        let outcome = self.env.step(action).map_err(js_err)?;
        to_js_value(&JsStepOutcome::from(outcome))
    }

    pub fn observe(&self, seat: u32) -> Result<JsValue, JsValue> {
        let view = self.env.observe(seat as usize).map_err(js_err)?;
        let observation = JsObservation {
            observation: view.observation.as_array().to_vec(),
            action_mask: view.action_mask.to_vec(),
        };
        to_js_value(&observation)
    }

    pub fn render(&self) -> String {
        self.env.render()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = self.env.game();
        let snapshot = Snapshot {
            phase: phase_to_str(game.phase()),
            players: game.players().iter().map(JsPlayer::from).collect(),
            trick: game.trick().iter().copied().map(card_to_js).collect(),
            briscola: card_to_js(game.briscola()),
            action_on: game.action_on() as u32,
            stock: game.stock_len() as u32,
            rewards: self.env.cumulative_rewards().to_vec(),
        };
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    players: Vec<JsPlayer>,
    trick: Vec<JsCard>,
    briscola: JsCard,
    action_on: u32,
    stock: u32,
    rewards: Vec<u32>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsPlayer {
    hand: Vec<JsCard>,
    pile: u32,
    score: u32,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            hand: player.hand().iter().copied().map(card_to_js).collect(),
            pile: player.pile().len() as u32,
            score: player.score(),
        }
    }
}

#[derive(Serialize)]
struct JsObservation {
    observation: Vec<u8>,
    action_mask: Vec<u8>,
}

#[derive(Serialize)]
struct JsStepOutcome {
    actor: u32,
    trick_winner: Option<u32>,
    rewards: Vec<u32>,
    done: bool,
}

impl From<StepOutcome> for JsStepOutcome {
    fn from(outcome: StepOutcome) -> Self {
        Self {
            actor: outcome.actor as u32,
            trick_winner: outcome.trick_winner.map(|seat| seat as u32),
            rewards: outcome.rewards,
            done: outcome.done,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit().name(),
        rank: card.rank(),
    }
}

fn phase_to_str(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::AwaitingPlay => "AwaitingPlay",
        GamePhase::TrickComplete => "TrickComplete",
        GamePhase::RedealPending => "RedealPending",
        GamePhase::GameOver => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
