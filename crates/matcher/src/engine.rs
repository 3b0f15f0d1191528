//! Two-pass fuzzy subsequence matching.
//!
//! The simple pass finds *some* in-order placement of the query in the
//! target, scanning one char at a time. The strict pass then retries the
//! query while jumping between word beginnings on every mismatch; when it
//! succeeds its positions win and the score is not multiplied by the
//! simple-match penalty.
//!
//! Both passes are written as small state machines so every transition of
//! the backtracking is visible in one `match`.

use prepare::{BoundaryTable, PreparedQuery, PreparedTarget};

use crate::session::MatchSession;
use crate::types::{FuzzyMatch, MatchConfig, MatchError, MatchOutcome};


/// Which engine variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tolerance {
    /// Both passes may swap one adjacent pair of query chars.
    Typo,
    /// No transpositions anywhere.
    Strict,
}

impl Tolerance {
    pub fn from_allow_typo(allow_typo: bool) -> Self {
        if allow_typo {
            Tolerance::Typo
        } else {
            Tolerance::Strict
        }
    }

    pub fn allows_typo(self) -> bool {
        matches!(self, Tolerance::Typo)
    }
}

/// Matches `query` against `target`, tolerating one adjacent transposition.
pub fn match_with_typo(
    query: &PreparedQuery,
    target: &PreparedTarget,
    session: &mut MatchSession,
    cfg: &MatchConfig,
) -> Result<MatchOutcome, MatchError> {
    match_prepared(query, target, session, Tolerance::Typo, cfg)
}

/// Matches `query` against `target` without any typo allowance.
pub fn match_strict_only(
    query: &PreparedQuery,
    target: &PreparedTarget,
    session: &mut MatchSession,
    cfg: &MatchConfig,
) -> Result<MatchOutcome, MatchError> {
    match_prepared(query, target, session, Tolerance::Strict, cfg)
}

/// Runs the variant selected by `tolerance`.
pub fn match_prepared(
    query: &PreparedQuery,
    target: &PreparedTarget,
    session: &mut MatchSession,
    tolerance: Tolerance,
    cfg: &MatchConfig,
) -> Result<MatchOutcome, MatchError> {
    if query.is_empty() {
        return Err(MatchError::EmptyQuery);
    }
    if target.is_empty() {
        return Err(MatchError::EmptyTarget);
    }
    Ok(evaluate(query.codes(), target, session, tolerance, cfg))
}

/// Core of both variants. `query` and `target` must be non-empty.
pub(crate) fn evaluate(
    query: &[u32],
    target: &PreparedTarget,
    session: &mut MatchSession,
    tolerance: Tolerance,
    cfg: &MatchConfig,
) -> MatchOutcome {
    let codes = target.codes().as_slice();

    let Some(simple_typo) = simple_pass(query, codes, tolerance, &mut session.simple) else {
        return MatchOutcome::NoMatch;
    };

    let strict = strict_pass(
        query,
        codes,
        target.boundaries(),
        session.simple[0],
        tolerance,
        &mut session.strict,
    );

    let (positions, typo_used, used_strict_phase) = match strict {
        Some(strict_typo) => (&session.strict, strict_typo.is_some(), true),
        None => (&session.simple, simple_typo.is_some(), false),
    };

    // Penalties come from user config; clamp at i64::MIN rather than overflow.
    let mut score = score_positions(positions);
    if !used_strict_phase {
        score = score.saturating_mul(cfg.simple_penalty_factor);
    }
    if typo_used {
        score = score.saturating_sub(cfg.typo_penalty);
    }
    score = score.saturating_sub((codes.len() - query.len()) as i64);

    MatchOutcome::Match(FuzzyMatch {
        score,
        matched_positions: positions.clone(),
        used_strict_phase,
        typo_used,
    })
}

/// Query index read at cursor `q` while the transposition at `typo` is active.
#[inline]
fn transposed(typo: Option<usize>, q: usize) -> usize {
    match typo {
        Some(k) if q == k => k + 1,
        Some(k) if q == k + 1 => k,
        _ => q,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimpleState {
    Scanning,
    Recovering,
}

/// Greedy left-to-right placement of `query` in `target`.
///
/// On success `found` holds one target index per query char and the return
/// value is the transposition that was needed, if any.
fn simple_pass(
    query: &[u32],
    target: &[u32],
    tolerance: Tolerance,
    found: &mut Vec<usize>,
) -> Option<Option<usize>> {
    found.clear();

    let mut state = SimpleState::Scanning;
    let mut typo: Option<usize> = None;
    let mut q = 0usize;
    let mut t = 0usize;
    let mut wanted = query[0];

    loop {
        match state {
            SimpleState::Scanning => {
                if t >= target.len() {
                    if !tolerance.allows_typo() {
                        return None;
                    }
                    state = SimpleState::Recovering;
                    continue;
                }
                if target[t] == wanted {
                    found.push(t);
                    q += 1;
                    if q == query.len() {
                        return Some(typo);
                    }
                    wanted = query[transposed(typo, q)];
                }
                t += 1;
            }
            SimpleState::Recovering => {
                if q <= 1 {
                    return None;
                }
                match typo {
                    None => {
                        q -= 1;
                        // Swapping equal chars changes nothing; keep backing up.
                        if query[q] == wanted {
                            continue;
                        }
                        typo = Some(q);
                    }
                    Some(1) => return None,
                    Some(k) => {
                        q = k - 1;
                        typo = Some(q);
                        wanted = query[k];
                        if query[q] == wanted {
                            continue;
                        }
                    }
                }
                found.truncate(q);
                t = found[q - 1] + 1;
                state = SimpleState::Scanning;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrictState {
    Scanning,
    Backtracking,
    Retrying,
}

/// Word-beginning aware placement of `query`, starting near `first_simple`.
///
/// Mismatches jump to the next beginning instead of the next char. When the
/// target runs out the last placement is undone; when nothing is left to
/// undo the next transposition is tried (typo variant only).
fn strict_pass(
    query: &[u32],
    target: &[u32],
    table: &BoundaryTable,
    first_simple: usize,
    tolerance: Tolerance,
    found: &mut Vec<usize>,
) -> Option<Option<usize>> {
    found.clear();

    let start = if first_simple == 0 {
        0
    } else {
        table.next_after(first_simple - 1)
    };
    if start >= target.len() {
        return None;
    }

    let mut state = StrictState::Scanning;
    let mut typo: Option<usize> = None;
    let mut t = start;

    loop {
        match state {
            StrictState::Scanning => {
                if t >= target.len() {
                    state = if found.is_empty() {
                        StrictState::Retrying
                    } else {
                        StrictState::Backtracking
                    };
                    continue;
                }
                let q = found.len();
                if query[transposed(typo, q)] == target[t] {
                    found.push(t);
                    if found.len() == query.len() {
                        return Some(typo);
                    }
                    t += 1;
                } else {
                    t = table.next_after(t);
                }
            }
            StrictState::Backtracking => {
                let last = found.pop()?;
                t = table.next_after(last);
                state = StrictState::Scanning;
            }
            StrictState::Retrying => {
                if !tolerance.allows_typo() {
                    return None;
                }
                typo = Some(next_typo(query, typo)?);
                t = start;
                state = StrictState::Scanning;
            }
        }
    }
}

/// Next transposition index after `current`, skipping swaps of equal chars.
fn next_typo(query: &[u32], current: Option<usize>) -> Option<usize> {
    let from = current.map_or(1, |k| k + 1);
    (from..)
        .take_while(|k| k + 1 < query.len())
        .find(|&k| query[k] != query[k + 1])
}

/// Gap cost of `positions`: every index that does not directly follow the
/// previous one subtracts itself.
fn score_positions(positions: &[usize]) -> i64 {
    let mut score = 0i64;
    let mut previous: Option<usize> = None;
    for &p in positions {
        let contiguous = match previous {
            Some(prev) => prev + 1 == p,
            None => p == 0,
        };
        if !contiguous {
            score -= p as i64;
        }
        previous = Some(p);
    }
    score
}
