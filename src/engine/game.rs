//! The dungeon engine: owns the rooms and the player, walks the grid at
//! random, and reports the run.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::report::{RunReport, RunStats};
use crate::core::{
    Direction, DungeonConfig, DungeonError, GameRng, GridPosition, RandomSource, Result, RoomId,
};
use crate::dungeon::{Interaction, Player, Room};
use crate::layout::DungeonLayout;

/// Rooms adjacent to a room. A grid cell has at most four neighbours.
pub type Neighbours = SmallVec<[RoomId; 4]>;

/// Whether the run continues after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The player moved to this room.
    Moved(RoomId),
    /// The player is in the final room; the run is over.
    Finished,
}

/// Single-player dungeon run.
///
/// ## Lifecycle
///
/// 1. `start_game` puts the player in the entry room (index 0).
/// 2. `step` interacts with the current room, then either finishes (the
///    current room is the last room) or moves to a random adjacent room.
/// 3. `end_game` produces the report.
///
/// `run` does all three. It only stops once the walk lands on the last
/// room; if that room is unreachable from the entry room, it never returns.
#[derive(Clone, Debug)]
pub struct DungeonEngine<R: RandomSource = GameRng> {
    rooms: Vec<Room>,
    player: Player,
    config: DungeonConfig,
    rng: R,
    trail: Vector<RoomId>,
    stats: RunStats,
}

impl<R: RandomSource> DungeonEngine<R> {
    /// Create an engine over pre-built rooms.
    pub fn new(rooms: Vec<Room>, config: DungeonConfig, rng: R) -> Result<Self> {
        if rooms.is_empty() {
            return Err(DungeonError::EmptyLayout);
        }
        if config.grid_width == 0 {
            return Err(DungeonError::InvalidGridWidth(config.grid_width));
        }
        Ok(Self {
            rooms,
            player: Player::new(),
            config,
            rng,
            trail: Vector::new(),
            stats: RunStats::default(),
        })
    }

    /// Build rooms from `layout` using `rng`, then create the engine.
    pub fn from_layout(layout: &DungeonLayout, config: DungeonConfig, mut rng: R) -> Result<Self> {
        let rooms = layout.build_rooms(&mut rng)?;
        Self::new(rooms, config, rng)
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    #[must_use]
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Rooms the player has stood in so far, in order.
    #[must_use]
    pub fn trail(&self) -> &Vector<RoomId> {
        &self.trail
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms.get(id.index()).ok_or(DungeonError::RoomNotFound(id))
    }

    /// The last room in the collection: the run's target.
    #[must_use]
    pub fn final_room(&self) -> RoomId {
        RoomId::new(self.rooms.len() - 1)
    }

    /// The player's current room.
    pub fn current_room(&self) -> Result<RoomId> {
        self.player.current_room().ok_or(DungeonError::NotStarted)
    }

    /// Grid position of a room.
    pub fn position(&self, id: RoomId) -> Result<GridPosition> {
        self.room(id)?;
        Ok(id.position(self.config.grid_width))
    }

    /// Every room one Manhattan step away from `id`, in index order.
    pub fn adjacent_rooms(&self, id: RoomId) -> Result<Neighbours> {
        self.room(id)?;
        let width = self.config.grid_width;
        Ok((0..self.rooms.len())
            .map(RoomId::new)
            .filter(|&other| other != id && id.is_adjacent(other, width))
            .collect())
    }

    /// Put the player in the entry room.
    pub fn start_game(&mut self) {
        self.player.set_current_room(RoomId::ENTRY);
        self.trail = Vector::unit(RoomId::ENTRY);
        info!(rooms = self.rooms.len(), target = %self.final_room(), "game started");
    }

    /// Move to a uniformly chosen adjacent room.
    ///
    /// `direction` is advisory only: every adjacent room is a candidate
    /// whatever direction was asked for.
    pub fn move_player(&mut self, direction: Direction) -> Result<RoomId> {
        let from = self.current_room()?;
        let neighbours = self.adjacent_rooms(from)?;
        if neighbours.is_empty() {
            return Err(DungeonError::NoAdjacentRoom(from));
        }
        let to = neighbours[self.rng.pick(neighbours.len())];

        self.player.set_current_room(to);
        self.trail.push_back(to);
        self.stats.moves += 1;
        debug!(%from, %to, %direction, "moved");
        Ok(to)
    }

    /// Let the player act on the current room's content.
    pub fn interact_current(&mut self) -> Result<Interaction> {
        let id = self.current_room()?;
        let room = self
            .rooms
            .get_mut(id.index())
            .ok_or(DungeonError::RoomNotFound(id))?;

        let interaction = room.interact(&mut self.player, &mut self.rng);
        if self.config.mark_visited {
            room.set_visited();
        }
        self.stats.record(id, &interaction);
        debug!(room = %id, score = self.player.score(), "entered room");
        Ok(interaction)
    }

    /// One iteration of the main loop: interact, then stop or move.
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome> {
        self.step_with(|_| direction)
    }

    /// Like `step`, but rolls a random direction hint when a move is due.
    ///
    /// The hint is drawn after the interaction and only if the player is
    /// about to leave the room.
    pub fn advance(&mut self) -> Result<StepOutcome> {
        self.step_with(|rng: &mut R| Direction::random(rng))
    }

    fn step_with(&mut self, hint: impl FnOnce(&mut R) -> Direction) -> Result<StepOutcome> {
        self.interact_current()?;
        if self.current_room()? == self.final_room() {
            return Ok(StepOutcome::Finished);
        }
        let direction = hint(&mut self.rng);
        self.move_player(direction).map(StepOutcome::Moved)
    }

    /// Play a whole run and report it.
    ///
    /// Does not return until the player reaches the final room.
    pub fn run(&mut self) -> Result<RunReport> {
        self.start_game();
        while self.advance()? != StepOutcome::Finished {}
        self.end_game()
    }

    /// The first visited room in collection order that is not `id`.
    ///
    /// This is not the room the player came from; it is whichever visited
    /// room comes first.
    pub fn previous_room(&self, id: RoomId) -> Result<RoomId> {
        self.room(id)?;
        self.rooms
            .iter()
            .enumerate()
            .find(|(i, room)| *i != id.index() && room.is_visited())
            .map(|(i, _)| RoomId::new(i))
            .ok_or(DungeonError::NoPreviousRoom(id))
    }

    /// Walk back from the current room via `previous_room` until the entry
    /// room, then reverse.
    ///
    /// The walk is bounded by the room count; a walk that runs longer than
    /// that cannot reach the entry room.
    pub fn backward_path(&self) -> Result<Vec<RoomId>> {
        let mut current = self.current_room()?;
        let mut path = Vec::new();
        while current != RoomId::ENTRY {
            if path.len() >= self.rooms.len() {
                return Err(DungeonError::NoPreviousRoom(current));
            }
            path.push(current);
            current = self.previous_room(current)?;
        }
        path.push(RoomId::ENTRY);
        path.reverse();
        Ok(path)
    }

    /// Finish the run: final score, backward-walk path, trail, counters.
    pub fn end_game(&self) -> Result<RunReport> {
        let path = self.backward_path()?;
        info!(score = self.player.score(), moves = self.stats.moves, "game over");
        Ok(RunReport {
            score: self.player.score(),
            path,
            trail: self.trail.clone(),
            stats: self.stats.clone(),
        })
    }
}
