use crate::prover::Clause;
use indexmap::set::IndexSet;
use std::collections::{HashMap, BinaryHeap};
use std::cmp::Ordering;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// id's used to reference interned clauses
pub struct ClauseId(usize);

impl ClauseId {
    pub(crate) fn new(idx: usize) -> ClauseId {
        ClauseId(idx)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a clause in the set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// one of the clauses of the normal form
    Given,
    /// the result of cancelling `pivot` between two earlier clauses
    Resolvent { parents: (ClauseId, ClauseId), pivot: String },
}

#[derive(Debug)]
/// interns clauses, and provides lookup by atom and polarity
pub struct ClosedClauseSet {
    /// the set of all clauses we have encountered thus far
    pub clauses: IndexSet<Clause>,

    /// how each clause was obtained, indexed like `clauses`
    origins: Vec<Origin>,

    /// Represent actions which lead to other states in a search space
    action_queue: BinaryHeap<Action>,

    /// maps atom names to their positive/negative occurrences in clauses
    occurrences: HashMap<String, Occurrences>,

    /// Set to the id of the empty clause once it is derived
    contradiction: Option<ClauseId>,
}

impl ClosedClauseSet {
    pub fn new() -> ClosedClauseSet {
        ClosedClauseSet {
            clauses: IndexSet::new(),
            origins: Vec::new(),
            action_queue: BinaryHeap::new(),
            occurrences: HashMap::new(),
            contradiction: None,
        }
    }
    /// Inserts a clause of the normal form
    pub fn integrate_clause(&mut self, clause: Clause) -> ClauseId {
        self.integrate(clause, Origin::Given)
    }
    /// Inserts the clause, providing the index into the set.
    /// A clause already present keeps its first id and origin.
    /// Otherwise updates the occurrences with all of its literals,
    /// then updates the action queue with every clause it can cancel against
    fn integrate(&mut self, clause: Clause, origin: Origin) -> ClauseId {
        let (idx, inserted) = self.clauses.insert_full(clause);
        let clause_id = ClauseId(idx);
        if !inserted {
            return clause_id;
        }
        self.origins.push(origin);
        let clause = match self.clauses.get_index(idx) {
            Some(clause) => clause,
            None => return clause_id,
        };

        if clause.is_empty() {
            self.contradiction.get_or_insert(clause_id);
            // return early: the empty clause doesn't have any literals to cancel
            return clause_id;
        }

        // count the complementary pairs shared with each partner, remembering one pivot
        let mut partners: HashMap<ClauseId, (String, usize)> = HashMap::new();
        for (name, truth_value) in clause.iter() {
            let occr = match self.occurrences.get(name) {
                Some(occr) => occr,
                None => continue,
            };
            for id in occr.get(!truth_value) {
                let hits = partners.entry(*id)
                    .or_insert_with(|| (name.clone(), 0));
                hits.1 += 1;
            }
        }
        // two or more complementary pairs only ever resolve into a tautology, so nip that right now
        for (other_id, (pivot, count)) in partners.into_iter() {
            if count != 1 {
                continue;
            }
            // the resolvent loses the pivot from both sides
            let estimate = self.get(other_id).num_terms() + clause.num_terms() - 2;
            self.action_queue.push(Action::Resolve {
                estimate,
                ids: (clause_id, other_id),
                pivot,
            });
        }

        for (name, truth_value) in clause.iter() {
            self.occurrences
                .entry(name.clone())
                .or_insert_with(Occurrences::new)
                .insert(*truth_value, clause_id);
        }

        clause_id
    }
    pub fn get(&self, id: ClauseId) -> &Clause {
        &self.clauses[id.0]
    }
    pub fn origin(&self, id: ClauseId) -> &Origin {
        &self.origins[id.0]
    }
    pub fn len(&self) -> usize {
        self.clauses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
    /// The id of the empty clause, if it has been derived
    pub fn contradiction(&self) -> Option<ClauseId> {
        self.contradiction
    }
    /// Cancel complementary literals between clauses until the empty clause appears
    /// or nothing new can be derived
    pub fn has_contradiction(&mut self) -> bool {
        if self.contradiction.is_some() {
            // we can return early in this case
            return true;
        }
        while let Some(Action::Resolve { ids: (left_id, right_id), pivot, .. }) = self.action_queue.pop() {
            let resolvent = self.get(left_id).resolve(self.get(right_id));
            let clause = match resolvent {
                Some(clause) => clause,
                None => continue,
            };
            trace!("cancelled {} between {:?} and {:?}: {:?}", pivot, left_id, right_id, clause);
            self.integrate(clause, Origin::Resolvent { parents: (left_id, right_id), pivot });
            if self.contradiction.is_some() {
                return true;
            }
        }
        // no further actions to take means the empty clause is not derivable
        false
    }
    /// Every clause that the empty clause was derived from, in the order they entered the set
    pub fn refutation_ancestry(&self) -> Vec<ClauseId> {
        let mut needed = Vec::new();
        let mut todo = self.contradiction.into_iter().collect::<Vec<_>>();
        while let Some(id) = todo.pop() {
            if needed.contains(&id) {
                continue;
            }
            needed.push(id);
            if let Origin::Resolvent { parents: (left, right), .. } = self.origin(id) {
                todo.push(*left);
                todo.push(*right);
            }
        }
        needed.sort();
        needed
    }
}

/// The type of the distance heuristic
type EstimateType = usize;

/// Represents a branch from the current state of a ClosedClauseSet in the search space
#[derive(Debug, Clone)]
enum Action {
    /// Resolving two clauses by cancelling one pair of opposing literals
    Resolve {
        estimate: EstimateType,
        ids: (ClauseId, ClauseId),
        pivot: String,
    },
}
impl Action {
    /// Provide a heuristic of how close this action is to deriving the empty clause
    fn estimate(&self) -> EstimateType {
        match self {
            Action::Resolve { estimate, .. } => *estimate,
        }
    }
}
/// `Action`s are ordered by the estimate we provide them,
/// we want the "greatest" action (i.e., the one prioritized by the binary heap) to be the one with the smallest estimate
impl Eq for Action { }
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        other.estimate() == self.estimate()
    }
}
impl Ord for Action {
    fn cmp(&self, other: &Self) -> Ordering {
        other.estimate().cmp(&self.estimate())
    }
}
impl PartialOrd for Action {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
struct Occurrences {
    truthy: Vec<ClauseId>,
    falsy: Vec<ClauseId>,
}
impl Occurrences {
    fn new() -> Occurrences {
        Occurrences {
            truthy: vec![],
            falsy: vec![]
        }
    }
    fn get(&self, truth_value: bool) -> &[ClauseId] {
        if truth_value {
            self.truthy.as_slice()
        } else {
            self.falsy.as_slice()
        }
    }
    fn insert(&mut self, truth_value: bool, clause_id: ClauseId) {
        let ids = if truth_value {
            &mut self.truthy
        } else {
            &mut self.falsy
        };
        ids.push(clause_id);
        ids.dedup();
    }
}

impl fmt::Debug for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clause {}", self.0)
    }
}
