use super::{Color, Coord, Kind, Move, MoveList, Piece};

/*
 * MODULE IS RESPONSIBLE FOR
 * POSITION STATE AND ITS MUTATION
 */

/// Castling wing, king-side or queen-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wing {
    King,
    Queen,
}

impl Wing {
    pub fn index(self) -> usize {
        match self {
            Wing::King => 0,
            Wing::Queen => 1,
        }
    }

    /// Starting square of this wing's rook for the given color.
    pub fn rook_home(self, color: Color) -> Coord {
        let file = match self {
            Wing::King => 7,
            Wing::Queen => 0,
        };
        Coord::new(file, color.home_rank())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Mailbox board, rank-major from the top rank down.
    pub board: [Piece; 64],
    pub side_to_move: Color,
    /// [color][wing] castling availability.
    pub castling: [[bool; 2]; 2],
    /// File of a double pawn push by [color], capturable by the opponent
    /// exactly one ply; cleared by the pusher's next move.
    pub en_passant: [Option<u8>; 2],
    /// Occupied squares per color, absent slots NULL.
    pub piece_list: [[Coord; 16]; 2],
    /// Cached king squares per color.
    pub kings: [Coord; 2],
    /// Cached attack status of each king.
    pub in_check: [bool; 2],
    pub ply: u32,
    /// Zobrist digest of the current state; 0 marks an unhashed scratch copy.
    pub hash: u64,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_fen(super::START_FEN).expect("start position FEN parses")
    }
}

impl Position {
    /// A board with no pieces on it. Setup code and tests place pieces with
    /// `put` and then call `refresh` to rebuild the cached state.
    pub fn empty() -> Self {
        Self {
            board: [Piece::EMPTY; 64],
            side_to_move: Color::White,
            castling: [[false; 2]; 2],
            en_passant: [None; 2],
            piece_list: [[Coord::NULL; 16]; 2],
            kings: [Coord::NULL; 2],
            in_check: [false; 2],
            ply: 0,
            hash: 0,
        }
    }

    pub fn get(&self, at: Coord) -> Piece {
        if at.is_null() {
            Piece::EMPTY
        } else {
            self.board[at.index()]
        }
    }

    /// Place `piece` on `at`, keeping the piece lists and king cache in sync.
    /// Placing `Piece::EMPTY` clears the square.
    pub fn put(&mut self, at: Coord, piece: Piece) {
        if at.is_null() {
            return;
        }
        let old = self.board[at.index()];
        if !old.is_empty() {
            self.relocate_piece(old.color, at, Coord::NULL);
        }
        self.board[at.index()] = piece;
        if !piece.is_empty() {
            self.relocate_piece(piece.color, Coord::NULL, at);
            if piece.kind == Kind::King {
                self.kings[piece.color.index()] = at;
            }
        }
    }

    /// Rewrite the piece-list slot holding `from` to hold `to`. `to == NULL`
    /// removes the entry; `from == NULL` claims a free slot.
    pub(crate) fn relocate_piece(&mut self, color: Color, from: Coord, to: Coord) {
        for slot in self.piece_list[color.index()].iter_mut() {
            if *slot == from {
                *slot = to;
                return;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    pub fn castling_right(&self, color: Color, wing: Wing) -> bool {
        self.castling[color.index()][wing.index()]
    }

    pub fn king(&self, color: Color) -> Coord {
        self.kings[color.index()]
    }

    pub fn pieces(&self, color: Color) -> &[Coord; 16] {
        &self.piece_list[color.index()]
    }

    /// Recompute the cached check flags and the hash. Needed after manual
    /// board setup; `make_move` maintains them incrementally.
    pub fn refresh(&mut self) {
        self.in_check[0] = self.is_attacked(self.kings[0], Color::Black);
        self.in_check[1] = self.is_attacked(self.kings[1], Color::White);
        self.hash = self.compute_hash();
    }

    /// True if any piece of `by` could capture on `at`: rays outward from the
    /// square for sliders, jump and step lookups for knights, kings and pawns.
    pub fn is_attacked(&self, at: Coord, by: Color) -> bool {
        if at.is_null() {
            return false;
        }

        // A pawn of `by` attacks `at` from one rank behind `by`'s push
        // direction, on either neighboring file.
        for df in [-1i8, 1] {
            let p = self.get(at.offset(df, -by.forward()));
            if p.kind == Kind::Pawn && p.color == by {
                return true;
            }
        }

        for &(df, dr) in &KNIGHT_JUMPS {
            let p = self.get(at.offset(df, dr));
            if p.kind == Kind::Knight && p.color == by {
                return true;
            }
        }

        for &(df, dr) in &KING_STEPS {
            let p = self.get(at.offset(df, dr));
            if p.kind == Kind::King && p.color == by {
                return true;
            }
        }

        for &(df, dr) in &BISHOP_DIRS {
            let mut sq = at.offset(df, dr);
            while !sq.is_null() {
                let p = self.get(sq);
                if !p.is_empty() {
                    if p.color == by && (p.kind == Kind::Bishop || p.kind == Kind::Queen) {
                        return true;
                    }
                    break;
                }
                sq = sq.offset(df, dr);
            }
        }

        for &(df, dr) in &ROOK_DIRS {
            let mut sq = at.offset(df, dr);
            while !sq.is_null() {
                let p = self.get(sq);
                if !p.is_empty() {
                    if p.color == by && (p.kind == Kind::Rook || p.kind == Kind::Queen) {
                        return true;
                    }
                    break;
                }
                sq = sq.offset(df, dr);
            }
        }

        false
    }

    /// Apply `mv` and update every derived field. With `compute_hash` false
    /// the hash is set to 0, marking a scratch state that must not be cached.
    pub fn make_move(&mut self, mv: Move, compute_hash: bool) {
        let mover = self.get(mv.from);
        let target = self.get(mv.to);
        let us = mover.color;
        let them = us.opposite();

        self.en_passant[us.index()] = None;

        match mover.kind {
            Kind::Pawn => {
                let dr = mv.to.rank as i8 - mv.from.rank as i8;
                if dr.abs() == 2 {
                    self.en_passant[us.index()] = Some(mv.from.file);
                } else if mv.from.file != mv.to.file && target.is_empty() {
                    // En passant: the captured pawn sits beside the mover.
                    self.put(Coord::new(mv.to.file, mv.from.rank), Piece::EMPTY);
                }
            }
            Kind::King => {
                self.castling[us.index()] = [false; 2];
                let df = mv.to.file as i8 - mv.from.file as i8;
                if df.abs() == 2 {
                    let wing = if df > 0 { Wing::King } else { Wing::Queen };
                    let rook_from = wing.rook_home(us);
                    let rook_to = match wing {
                        Wing::King => Coord::new(5, mv.from.rank),
                        Wing::Queen => Coord::new(3, mv.from.rank),
                    };
                    let rook = self.get(rook_from);
                    self.put(rook_from, Piece::EMPTY);
                    self.put(rook_to, rook);
                }
            }
            Kind::Rook => {
                for wing in [Wing::King, Wing::Queen] {
                    if mv.from == wing.rook_home(us) {
                        self.castling[us.index()][wing.index()] = false;
                    }
                }
            }
            _ => {}
        }

        if target.kind == Kind::Rook {
            for wing in [Wing::King, Wing::Queen] {
                if mv.to == wing.rook_home(them) {
                    self.castling[them.index()][wing.index()] = false;
                }
            }
        }

        self.put(mv.from, Piece::EMPTY);
        let arriving = if mover.kind == Kind::Pawn && mv.to.rank == us.promotion_rank() {
            Piece::new(us, Kind::Queen)
        } else {
            mover
        };
        self.put(mv.to, arriving);

        self.side_to_move = us.opposite();
        self.in_check[0] = self.is_attacked(self.kings[0], Color::Black);
        self.in_check[1] = self.is_attacked(self.kings[1], Color::White);
        self.ply += 1;
        self.hash = if compute_hash { self.compute_hash() } else { 0 };
    }

    /// True if `mv` removes an opposing piece: an occupied destination or a
    /// pawn diagonal (the en-passant case lands on an empty square).
    pub fn is_capture(&self, mv: Move) -> bool {
        !self.get(mv.to).is_empty()
            || (self.get(mv.from).kind == Kind::Pawn && mv.from.file != mv.to.file)
    }

    fn move_is_safe(&self, mv: Move, mover: Color) -> bool {
        let mut next = self.clone();
        next.make_move(mv, false);
        !next.in_check(mover)
    }

    /// Full legality: the move matches the mover's pattern, the mover is the
    /// side to move, the destination holds no king, and the mover's own king
    /// is not attacked afterwards.
    pub fn is_legal(&self, mv: Move) -> bool {
        let piece = self.get(mv.from);
        !piece.is_empty()
            && piece.color == self.side_to_move
            && self.get(mv.to).kind != Kind::King
            && self.is_possible(mv)
            && self.move_is_safe(mv, piece.color)
    }

    pub fn legal_moves_from(&self, from: Coord) -> MoveList {
        self.moves_from(from)
            .into_iter()
            .filter(|&mv| self.is_legal(mv))
            .collect()
    }

    pub fn all_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for &at in self.pieces(self.side_to_move) {
            if at.is_null() {
                continue;
            }
            moves.extend(self.legal_moves_from(at));
        }
        moves
    }

    /// Whether `color` has any legal move, regardless of whose turn it is.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        for &at in self.pieces(color) {
            if at.is_null() {
                continue;
            }
            for mv in self.moves_from(at) {
                if self.get(mv.to).kind == Kind::King {
                    continue;
                }
                if self.move_is_safe(mv, color) {
                    return true;
                }
            }
        }
        false
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_moves(color)
    }

    /// Node count to `depth`, for validating move generation.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let mut next = self.clone();
            next.make_move(mv, false);
            nodes += next.perft(depth - 1);
        }
        nodes
    }

    /// Per-root-move perft breakdown, printed for debugging move generation.
    pub fn divide(&self, depth: u32) -> u64 {
        let mut total = 0;
        for mv in self.all_legal_moves() {
            let mut next = self.clone();
            next.make_move(mv, false);
            let count = next.perft(depth - 1);
            println!("{mv}: {count}");
            total += count;
        }
        println!("\nTotal: {total}");
        total
    }
}

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
