use crate::attacks::AttackTable;
use crate::pieces::PieceKind;
use crate::problem::{Report, SearchError, SearchOptions};
use crate::solution::{Placement, Solution};
use crate::state::{BoardSnapshot, BoardState};

/// Backtracking placement engine for one ordering of the piece multiset.
///
/// The engine scans squares in increasing linear order and always offers
/// the current square to the next pending kind of the ordering. It never
/// tries an alternative kind at the same square within one pass; complete
/// coverage of all kind-to-square assignments comes from running one pass
/// per distinct ordering (see [`crate::search::orderings`]).
///
/// Counters accumulate across passes and are harvested once with
/// [`Engine::into_report`].
pub struct Engine<'a> {
    table: &'a AttackTable,
    num_squares: usize,
    total_pieces: usize,

    state: BoardState,
    /// Pending kinds, popped from the back; seeded per pass so pops follow
    /// the ordering.
    problem_list: Vec<PieceKind>,
    /// Placements so far, in increasing-square order.
    solution_list: Vec<Placement>,
    /// One saved board per placement, taken just before it was applied.
    snapshots: Vec<BoardSnapshot>,

    max_nodes: u64,
    collect: bool,

    num_solutions: u64,
    num_backtracks: u64,
    num_nodes: u64,
    solutions: Vec<Solution>,
}

impl<'a> Engine<'a> {
    pub fn new(table: &'a AttackTable, total_pieces: usize, options: &SearchOptions) -> Self {
        let num_squares = table.board().size();
        Self {
            table,
            num_squares,
            total_pieces,
            state: BoardState::empty(num_squares),
            problem_list: Vec::with_capacity(total_pieces),
            solution_list: Vec::with_capacity(total_pieces),
            snapshots: Vec::with_capacity(total_pieces),
            max_nodes: options.limits.max_nodes,
            collect: options.collect_solutions,
            num_solutions: 0,
            num_backtracks: 0,
            num_nodes: 0,
            solutions: Vec::new(),
        }
    }

    /// Exhaust the search tree for one ordering, accumulating counters.
    pub fn run(&mut self, ordering: &[PieceKind]) -> Result<(), SearchError> {
        assert_eq!(ordering.len(), self.total_pieces);

        self.state.reset();
        self.problem_list.clear();
        self.problem_list.extend(ordering.iter().rev());
        self.solution_list.clear();
        self.snapshots.clear();

        let mut pos: usize = 0;
        loop {
            if pos >= self.num_squares {
                // Nothing placed means the tree for this ordering is
                // exhausted, whether or not kinds are still pending.
                if self.solution_list.is_empty() {
                    break;
                }
                pos = self.backtrack();
                continue;
            }

            let sq = pos as u16;
            if !self.state.is_safe(sq) {
                pos += 1;
                continue;
            }

            self.num_nodes += 1;
            if self.num_nodes > self.max_nodes {
                return Err(SearchError::LimitExceeded {
                    limit: self.max_nodes,
                    observed: self.num_nodes,
                    num_solutions: self.num_solutions,
                    num_backtracks: self.num_backtracks,
                });
            }

            let kind = self
                .problem_list
                .pop()
                .expect("a kind is pending whenever the scan continues");

            // The square is unattacked, but the candidate may attack a
            // placed piece; the relation is not symmetric across kinds.
            if self.attacks_placed(kind, sq) {
                self.problem_list.push(kind);
                pos += 1;
                continue;
            }

            self.snapshots.push(self.state.snapshot());
            self.state.apply(self.table, kind, sq);
            self.solution_list.push(Placement { square: sq, kind });

            if self.solution_list.len() == self.total_pieces {
                self.num_solutions += 1;
                if self.collect {
                    self.solutions.push(Solution {
                        placements: self.solution_list.clone(),
                    });
                }
                pos = self.backtrack();
                continue;
            }

            pos += 1;
        }

        Ok(())
    }

    /// Undo the most recent placement and resume the scan just past it.
    fn backtrack(&mut self) -> usize {
        let placed = self
            .solution_list
            .pop()
            .expect("backtrack requires a placement");
        let snap = self
            .snapshots
            .pop()
            .expect("snapshot stack tracks the placement stack");

        self.state.restore(snap);
        self.problem_list.push(placed.kind);
        self.num_backtracks += 1;

        placed.square as usize + 1
    }

    fn attacks_placed(&self, kind: PieceKind, sq: u16) -> bool {
        let mask = self.table.mask(kind, sq);
        self.solution_list.iter().any(|p| mask.get(p.square))
    }

    pub fn into_report(self, num_orderings: u64) -> Report {
        Report {
            num_solutions: self.num_solutions,
            num_backtracks: self.num_backtracks,
            num_orderings,
            num_nodes: self.num_nodes,
            solutions: self.solutions,
        }
    }
}
