//! Board model: sides, pieces, positions and the 8×8 grid.
//!
//! Only dark squares (`(row + col)` odd) are ever occupied. The standard
//! setup puts Black on rows 0–2 and White on rows 5–7; White moves first
//! and advances toward row 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

pub const BOARD_SIZE: u8 = 8;

/// The two sides, `w` and `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward step.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The farthest row, where pawns promote.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }

    /// Seat at the table: White is seat 0, Black seat 1.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        match self {
            Side::White => PlayerId::new(0),
            Side::Black => PlayerId::new(1),
        }
    }

    #[must_use]
    pub const fn from_player(player: PlayerId) -> Option<Side> {
        match player.0 {
            0 => Some(Side::White),
            1 => Some(Side::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

impl From<Side> for PlayerId {
    fn from(side: Side) -> Self {
        side.player()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Pawn,
    King,
}

/// A piece. The owner never changes; the rank only ever goes Pawn → King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    owner: Side,
    rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn pawn(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::Pawn,
        }
    }

    #[must_use]
    pub const fn king(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    #[must_use]
    pub const fn owner(self) -> Side {
        self.owner
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// The same piece crowned. Kings stay kings.
    #[must_use]
    pub const fn promoted(self) -> Self {
        Self::king(self.owner)
    }

    fn symbol(self) -> char {
        match (self.owner, self.rank) {
            (Side::White, Rank::Pawn) => 'w',
            (Side::White, Rank::King) => 'W',
            (Side::Black, Rank::Pawn) => 'b',
            (Side::Black, Rank::King) => 'B',
        }
    }
}

/// A square coordinate, always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Panics if the coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position off the board");
        Self { row, col }
    }

    /// `None` when the coordinate is off the board.
    #[must_use]
    pub fn checked(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        ((0..size).contains(&row) && (0..size).contains(&col)).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `steps` diagonal steps away in direction `(dr, dc)`.
    #[must_use]
    pub fn step(self, (dr, dc): (i8, i8), steps: i8) -> Option<Self> {
        Self::checked(self.row as i8 + dr * steps, self.col as i8 + dc * steps)
    }

    /// The square halfway between two positions two steps apart.
    #[must_use]
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Empty or holding a piece.
pub type Square = Option<Piece>;

/// The 8×8 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Twelve pawns a side on the dark squares of the three home rows.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for pos in Self::dark_squares() {
            match pos.row() {
                0..=2 => board.place(pos, Piece::pawn(Side::Black)),
                5..=7 => board.place(pos, Piece::pawn(Side::White)),
                _ => {}
            }
        }
        board
    }

    /// Every playable square, row-major.
    pub fn dark_squares() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter(|pos| pos.is_dark())
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row() as usize][pos.col() as usize]
    }

    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Put a piece on a dark square, replacing whatever was there.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        debug_assert!(pos.is_dark(), "pieces live on dark squares, not {pos}");
        self.squares[pos.row() as usize][pos.col() as usize] = Some(piece);
    }

    /// Take whatever is on `pos` off the board.
    pub fn remove(&mut self, pos: Position) -> Square {
        self.squares[pos.row() as usize][pos.col() as usize].take()
    }

    /// Every piece belonging to `side`, row-major.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Self::dark_squares().filter_map(move |pos| {
            self.get(pos)
                .filter(|piece| piece.owner() == side)
                .map(|piece| (pos, piece))
        })
    }

    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.piece_count(Side::White) + self.piece_count(Side::Black)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Eight rows of eight characters, row 0 first: `.` empty, `w`/`b` pawns,
/// `W`/`B` kings.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = self
                    .get(Position::new(row, col))
                    .map_or('.', Piece::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown square '{symbol}' at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("piece on light square ({row}, {col})")]
    LightSquare { row: usize, col: usize },
}

/// Parses the diagram written by `Display`. Blank lines and surrounding
/// whitespace are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(BoardParseError::RowLength { row, len });
            }
            for (col, symbol) in line.chars().enumerate() {
                let piece = match symbol {
                    '.' => continue,
                    'w' => Piece::pawn(Side::White),
                    'W' => Piece::king(Side::White),
                    'b' => Piece::pawn(Side::Black),
                    'B' => Piece::king(Side::Black),
                    _ => return Err(BoardParseError::UnknownSymbol { symbol, row, col }),
                };
                let pos = Position::new(row as u8, col as u8);
                if !pos.is_dark() {
                    return Err(BoardParseError::LightSquare { row, col });
                }
                board.place(pos, piece);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let board = Board::standard();
        assert_eq!(board.piece_count(Side::White), 12);
        assert_eq!(board.piece_count(Side::Black), 12);
        assert!(board.pieces(Side::Black).all(|(pos, _)| pos.row() <= 2 && pos.is_dark()));
        assert!(board.pieces(Side::White).all(|(pos, _)| pos.row() >= 5 && pos.is_dark()));
        assert!(board
            .pieces(Side::White)
            .chain(board.pieces(Side::Black))
            .all(|(_, piece)| !piece.is_king()));
    }

    #[test]
    fn test_display_round_trips() {
        let board = Board::standard();
        let text = board.to_string();
        assert!(text.starts_with(".b.b.b.b\n"));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_diagrams() {
        assert_eq!("........".parse::<Board>(), Err(BoardParseError::RowCount(1)));

        let light = "w.......\n........\n........\n........\n........\n........\n........\n........";
        assert_eq!(light.parse::<Board>(), Err(BoardParseError::LightSquare { row: 0, col: 0 }));

        let unknown = ".x......\n........\n........\n........\n........\n........\n........\n........";
        assert!(matches!(
            unknown.parse::<Board>(),
            Err(BoardParseError::UnknownSymbol { symbol: 'x', .. })
        ));
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::checked(-1, 0).is_none());
        assert!(Position::checked(0, 8).is_none());
        assert_eq!(Position::checked(7, 7), Some(Position::new(7, 7)));
        assert_eq!(Position::new(2, 1).step((1, 1), 2), Some(Position::new(4, 3)));
        assert_eq!(Position::new(2, 1).midpoint(Position::new(4, 3)), Position::new(3, 2));
    }

    #[test]
    fn test_promotion_is_one_way() {
        let pawn = Piece::pawn(Side::Black);
        let king = pawn.promoted();
        assert!(king.is_king());
        assert_eq!(king.owner(), Side::Black);
        assert_eq!(king.promoted(), king);
    }

    #[test]
    fn test_side_seats() {
        assert_eq!(PlayerId::from(Side::White), PlayerId::new(0));
        assert_eq!(Side::from_player(PlayerId::new(1)), Some(Side::Black));
        assert_eq!(Side::from_player(PlayerId::new(2)), None);
        assert_eq!(Side::White.opponent(), Side::Black);
    }
}
