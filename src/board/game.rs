//! The board: cell graph, pieces, turn order and move execution.
//!
//! `Board` is the only mutator of cells, pieces and status. Callers drive
//! it with target events (`submit_selection`) or complete moves
//! (`apply_move`); the built-in opponent goes through the same
//! `apply_move` path.
//!
//! ## Move execution
//!
//! 1. The source must hold a piece of the active color, the target must be
//!    an empty cell.
//! 2. A close-neighbor target clones (+10), a distant-neighbor target
//!    jumps. Anything else is ignored.
//! 3. Every enemy piece on a close neighbor of the target flips color
//!    (+30 each). Only that first ring is affected.
//! 4. The turn passes, status is recomputed, and if Blue is played by the
//!    opponent it replies before control returns.

use smallvec::SmallVec;

use super::cell::Cell;
use super::grid::{self, Grid};
use super::layout::{CellLocator, HexLayout};
use super::piece::Piece;
use super::status::{self, GameStatus};
use crate::core::{
    BoardConfig, CellId, ClockTime, Color, ColorMap, GameRng, HexError, Move, MoveKind,
    MoveOutcome, PieceId, Result, CAPTURE_SCORE,
};
use crate::opponent::{GreedyOpponent, OpponentPolicy};
use crate::record::{self, Record, SlotStatus, HEADER_LINES};

/// A game in progress.
pub struct Board {
    grid: Grid,
    pieces: Vec<Piece>,
    layout: HexLayout,
    status: GameStatus,
    selected: Option<CellId>,
    active: Color,
    vs_opponent: bool,
    opponent: Option<Box<dyn OpponentPolicy>>,
    last_reply: Option<MoveOutcome>,
    config: BoardConfig,
    record_name: String,
    loaded: bool,
}

impl Board {
    /// Fresh starting position.
    #[must_use]
    pub fn new(cell_radius: f32, vs_opponent: bool) -> Self {
        Self::with_config(
            BoardConfig::default()
                .with_cell_radius(cell_radius)
                .with_opponent(vs_opponent),
        )
    }

    /// Fresh starting position from a full configuration.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        let mut board = Self::empty(config, ClockTime::now());
        for (row, slot, color) in grid::starting_pieces() {
            if let Some(cell) = board.grid.at(row, slot) {
                board.place(cell, color);
            }
        }
        board.status.recompute(board.grid.cells(), &board.pieces);
        board
    }

    /// Restore a saved game from the default save directory.
    pub fn load(cell_radius: f32, name: &str) -> Result<Self> {
        Self::load_with_config(BoardConfig::default().with_cell_radius(cell_radius), name)
    }

    /// Restore a saved game.
    ///
    /// The record's own vs-opponent flag overrides `config.vs_opponent`.
    pub fn load_with_config(config: BoardConfig, name: &str) -> Result<Self> {
        let path = record::record_path(&config.save_dir, name, &config.record_extension)?;
        let record = record::read_record(&path)?;
        let mut board = Self::from_record(config, &record)?;
        board.record_name = name.to_string();
        board.loaded = true;
        tracing::info!(path = %path.display(), "loaded game");
        Ok(board)
    }

    /// Rebuild a board from a decoded record, checking it against the grid.
    pub fn from_record(config: BoardConfig, record: &Record) -> Result<Self> {
        if record.slots.len() != grid::SLOT_COUNT {
            return Err(HexError::corrupt(
                0,
                format!("expected {} slots, found {}", grid::SLOT_COUNT, record.slots.len()),
            ));
        }

        let config = BoardConfig {
            vs_opponent: record.vs_opponent,
            ..config
        };
        let mut board = Self::empty(config, record.start);
        board.active = record.active;

        let layout: Vec<Option<CellId>> = board.grid.slots().collect();
        for (index, (slot, status)) in layout.into_iter().zip(&record.slots).enumerate() {
            let line = HEADER_LINES + index + 1;
            match (slot, status.color()) {
                (None, None) => {}
                (None, Some(_)) => return Err(HexError::corrupt(line, "hole slot is occupied")),
                (Some(_), None) => {}
                (Some(cell), Some(color)) => {
                    board.place(cell, color);
                    if status.is_selected() {
                        if board.selected.is_some() {
                            return Err(HexError::corrupt(line, "more than one selected slot"));
                        }
                        board.select(cell);
                    }
                }
            }
        }

        let mut counted: ColorMap<u32> = ColorMap::default();
        for piece in &board.pieces {
            counted[piece.color()] += 1;
        }
        for (line, color) in [(1, Color::Red), (2, Color::Blue)] {
            if counted[color] != record.points[color] {
                return Err(HexError::corrupt(
                    line,
                    format!(
                        "{color} points {} disagree with {} pieces on the board",
                        record.points[color], counted[color]
                    ),
                ));
            }
        }

        board.status = GameStatus::restored(record.points, record.score, record.start);
        board.status.recompute(board.grid.cells(), &board.pieces);
        Ok(board)
    }

    /// Write the current state under `name` and remember it as the record name.
    pub fn save(&mut self, name: &str) -> Result<()> {
        let path = record::record_path(
            &self.config.save_dir,
            name,
            &self.config.record_extension,
        )?;
        record::write_record(&path, &self.to_record())?;
        self.record_name = name.to_string();
        Ok(())
    }

    /// Snapshot of the full state in record form.
    #[must_use]
    pub fn to_record(&self) -> Record {
        let slots = self
            .grid
            .slots()
            .map(|slot| {
                let Some(cell) = slot.and_then(|id| self.grid.cell(id)) else {
                    return SlotStatus::EMPTY;
                };
                match self.color_at(cell.id()) {
                    Some(color) => SlotStatus::occupied(color, cell.is_selected()),
                    None => SlotStatus::EMPTY,
                }
            })
            .collect();

        Record {
            points: ColorMap::new(self.status.red_points(), self.status.blue_points()),
            score: ColorMap::new(self.status.red_score(), self.status.blue_score()),
            start: self.status.start_time(),
            active: self.active,
            vs_opponent: self.vs_opponent,
            slots,
        }
    }

    /// Replace the opponent used when Blue is computer-controlled.
    pub fn set_opponent(&mut self, policy: impl OpponentPolicy + 'static) {
        self.opponent = Some(Box::new(policy));
    }

    // === Input ===

    /// Handle a targeted cell.
    ///
    /// Targeting a piece of the active color (other than the current
    /// selection) selects it. Otherwise, with a selection active, the
    /// target is tried as a move. Whatever happens, a selection that did
    /// not just get set is cleared.
    pub fn submit_selection(&mut self, cell: CellId) {
        if !self.status.is_running() || self.grid.cell(cell).is_none() {
            return;
        }

        if self.selected != Some(cell) && self.color_at(cell) == Some(self.active) {
            self.clear_selection();
            self.select(cell);
            tracing::debug!(%cell, color = %self.active, "selected");
            return;
        }

        if let Some(source) = self.selected {
            self.apply_move(Move::new(source, cell));
        }
        self.clear_selection();
    }

    /// Resolve a pointer position and forward it to `submit_selection`.
    pub fn submit_point(&mut self, x: f32, y: f32) {
        if let Some(cell) = self.layout.cell_at(x, y) {
            self.submit_selection(cell);
        }
    }

    /// Drop the current selection, if any.
    pub fn clear_selection(&mut self) {
        if let Some(cell) = self.selected.take() {
            self.grid.cells_mut()[cell.index()].set_selected(false);
        }
    }

    /// Center the board on a screen point.
    pub fn set_location(&mut self, x: f32, y: f32) {
        self.layout.set_location(x, y);
    }

    // === Moves ===

    /// Execute a move for the active color.
    ///
    /// Returns `None` and changes nothing if the move is not legal. After a
    /// legal move the computer opponent replies if it is now its turn; that
    /// reply is available from [`Board::last_reply`].
    pub fn apply_move(&mut self, mv: Move) -> Option<MoveOutcome> {
        let outcome = self.execute(mv)?;
        self.last_reply = None;
        self.play_opponent_turn();
        Some(outcome)
    }

    /// Class of the move from `source` to `target`, if it is geometrically
    /// legal and the target is free. Ownership and turn are not checked.
    #[must_use]
    pub fn move_kind(&self, source: CellId, target: CellId) -> Option<MoveKind> {
        let source = self.grid.cell(source)?;
        let target = self.grid.cell(target)?;
        if !source.is_occupied() || target.is_occupied() {
            return None;
        }
        if source.is_close_neighbor_of(target.id()) {
            Some(MoveKind::Clone)
        } else if source.is_distant_neighbor_of(target.id()) {
            Some(MoveKind::Jump)
        } else {
            None
        }
    }

    /// Every legal move for `color`, clones first per piece.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.cells_of(color)
            .flat_map(|cell| {
                let source = cell.id();
                self.free_close_neighbors(source)
                    .into_iter()
                    .chain(self.free_distant_neighbors(source))
                    .map(move |target| Move::new(source, target))
            })
            .collect()
    }

    fn execute(&mut self, mv: Move) -> Option<MoveOutcome> {
        if !self.status.is_running() {
            return None;
        }
        let color = self.color_at(mv.source)?;
        if color != self.active {
            return None;
        }
        let kind = self.move_kind(mv.source, mv.target)?;

        match kind {
            MoveKind::Clone => self.place(mv.target, color),
            MoveKind::Jump => {
                let piece = self.grid.cells()[mv.source.index()].occupant()?;
                self.grid.cells_mut()[mv.source.index()].set_occupant(None);
                self.grid.cells_mut()[mv.target.index()].set_occupant(Some(piece));
                self.pieces[piece.index()].set_cell(mv.target);
            }
        }
        self.status.add_score(color, kind.base_score());

        let captured = self.capture_around(mv.target, color);
        self.status
            .add_score(color, CAPTURE_SCORE * captured.len() as u32);

        self.clear_selection();
        self.active = color.opponent();
        self.status.recompute(self.grid.cells(), &self.pieces);

        tracing::debug!(
            %color,
            ?kind,
            source = %mv.source,
            target = %mv.target,
            captured = captured.len(),
            "move"
        );

        Some(MoveOutcome {
            color,
            kind,
            source: mv.source,
            target: mv.target,
            captured,
        })
    }

    /// Flip every enemy piece on a close neighbor of `target`.
    fn capture_around(&mut self, target: CellId, color: Color) -> SmallVec<[CellId; 6]> {
        let neighbors: SmallVec<[CellId; 6]> =
            SmallVec::from_slice(self.grid.cells()[target.index()].close_neighbors());
        let mut captured = SmallVec::new();
        for cell in neighbors {
            let Some(piece) = self.grid.cells()[cell.index()].occupant() else {
                continue;
            };
            let piece = &mut self.pieces[piece.index()];
            if piece.color() != color {
                piece.set_color(color);
                captured.push(cell);
            }
        }
        captured
    }

    fn play_opponent_turn(&mut self) {
        if !self.vs_opponent || self.active != Color::Blue || !self.status.is_running() {
            return;
        }
        let Some(mut opponent) = self.opponent.take() else {
            return;
        };
        let choice = opponent.choose_move(self, Color::Blue);
        self.opponent = Some(opponent);

        self.last_reply = match choice {
            Some(mv) => {
                self.clear_selection();
                self.select(mv.source);
                self.execute(mv)
            }
            None => {
                tracing::debug!("opponent has no move");
                None
            }
        };
    }

    // === Construction helpers ===

    fn empty(config: BoardConfig, start: ClockTime) -> Self {
        let grid = Grid::build();
        let layout = HexLayout::new(config.cell_radius, &grid);
        let rng = config
            .opponent_seed
            .map(GameRng::new)
            .unwrap_or_else(GameRng::from_entropy);
        let opponent: Box<dyn OpponentPolicy> = Box::new(GreedyOpponent::new(rng));

        Self {
            grid,
            pieces: Vec::new(),
            layout,
            status: GameStatus::new(start),
            selected: None,
            active: Color::Red,
            vs_opponent: config.vs_opponent,
            opponent: Some(opponent),
            last_reply: None,
            config,
            record_name: String::new(),
            loaded: false,
        }
    }

    /// Put a new piece of `color` on an empty cell.
    fn place(&mut self, cell: CellId, color: Color) {
        let id = PieceId::from(self.pieces.len());
        self.pieces.push(Piece::new(color, cell));
        self.grid.cells_mut()[cell.index()].set_occupant(Some(id));
    }

    fn select(&mut self, cell: CellId) {
        self.grid.cells_mut()[cell.index()].set_selected(true);
        self.selected = Some(cell);
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Mutable status access, for consuming the changed flag.
    pub fn status_mut(&mut self) -> &mut GameStatus {
        &mut self.status
    }

    /// All cells, holes excluded, indexed by `CellId`.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.grid.cell(id)
    }

    /// The cell at a row/slot position; `None` for holes.
    #[must_use]
    pub fn cell_at_slot(&self, row: usize, slot: usize) -> Option<CellId> {
        self.grid.at(row, slot)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn piece_at(&self, cell: CellId) -> Option<&Piece> {
        let piece = self.grid.cell(cell)?.occupant()?;
        self.pieces.get(piece.index())
    }

    #[must_use]
    pub fn color_at(&self, cell: CellId) -> Option<Color> {
        self.piece_at(cell).map(Piece::color)
    }

    /// Cells holding a piece of `color`, in id order.
    pub fn cells_of(&self, color: Color) -> impl Iterator<Item = &Cell> + '_ {
        self.grid
            .cells()
            .iter()
            .filter(move |cell| self.color_at(cell.id()) == Some(color))
    }

    #[must_use]
    pub fn free_close_neighbors(&self, cell: CellId) -> Vec<CellId> {
        self.grid
            .cell(cell)
            .map(|c| self.free(c.close_neighbors()))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn free_distant_neighbors(&self, cell: CellId) -> Vec<CellId> {
        self.grid
            .cell(cell)
            .map(|c| self.free(c.distant_neighbors()))
            .unwrap_or_default()
    }

    /// Number of `color` pieces on close neighbors of `cell`.
    #[must_use]
    pub fn adjacent_count(&self, cell: CellId, color: Color) -> usize {
        self.grid.cell(cell).map_or(0, |c| {
            c.close_neighbors()
                .iter()
                .filter(|&&n| self.color_at(n) == Some(color))
                .count()
        })
    }

    /// Whether `cell` has an empty close neighbor.
    #[must_use]
    pub fn is_border(&self, cell: CellId) -> bool {
        self.grid.cell(cell).is_some_and(|c| {
            c.close_neighbors()
                .iter()
                .any(|&n| !self.grid.cells()[n.index()].is_occupied())
        })
    }

    /// Whether the piece on `cell` has any legal target.
    #[must_use]
    pub fn can_move(&self, cell: CellId) -> bool {
        self.grid
            .cell(cell)
            .is_some_and(|c| c.is_occupied() && status::has_free_target(self.grid.cells(), c))
    }

    /// Empty close and distant neighbors of the selected cell.
    #[must_use]
    pub fn highlighted_targets(&self) -> (Vec<CellId>, Vec<CellId>) {
        match self.selected {
            Some(cell) => (self.free_close_neighbors(cell), self.free_distant_neighbors(cell)),
            None => (Vec::new(), Vec::new()),
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<CellId> {
        self.selected
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active
    }

    #[must_use]
    pub fn vs_opponent(&self) -> bool {
        self.vs_opponent
    }

    /// The opponent's reply to the most recent move, if it made one.
    #[must_use]
    pub fn last_reply(&self) -> Option<&MoveOutcome> {
        self.last_reply.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Name of the record this board was loaded from or last saved to.
    #[must_use]
    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    #[must_use]
    pub fn was_loaded(&self) -> bool {
        self.loaded
    }

    fn free(&self, cells: &[CellId]) -> Vec<CellId> {
        cells
            .iter()
            .copied()
            .filter(|n| !self.grid.cells()[n.index()].is_occupied())
            .collect()
    }
}
