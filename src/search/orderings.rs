use crate::attacks::AttackTable;
use crate::pieces::{Material, PieceKind};
use crate::problem::{Problem, Report, SearchError, SearchOptions};
use crate::search::engine::Engine;

/// Number of distinct orderings of the multiset:
/// `(Σnᵢ)! / Πnᵢ!`, i.e. the multinomial coefficient.
pub fn distinct_orderings(material: &Material) -> u128 {
    let mut result: u128 = 1;
    let mut remaining = material.total() as u128;
    for (_, n) in material.counts() {
        result *= choose(remaining, n as u128);
        remaining -= n as u128;
    }
    result
}

fn choose(n: u128, k: u128) -> u128 {
    let mut acc: u128 = 1;
    for i in 1..=k {
        acc = acc * (n - k + i) / i;
    }
    acc
}

/// Call `f` once per distinct ordering of the multiset.
///
/// Orderings are built recursively from the per-kind counts, so repeated
/// kinds never produce the same sequence twice and no dedup set is needed.
/// Kinds are offered in decreasing attack reach, so the first ordering is
/// the default longest-reach-first seed.
pub fn for_each_distinct<F>(material: &Material, f: &mut F) -> Result<(), SearchError>
where
    F: FnMut(&[PieceKind]) -> Result<(), SearchError>,
{
    let total = material.total();
    let mut counts = material.counts();
    let mut prefix: Vec<PieceKind> = Vec::with_capacity(total);
    next_slot(&mut counts, &mut prefix, total, f)
}

fn next_slot<F>(
    counts: &mut [(PieceKind, u32); 5],
    prefix: &mut Vec<PieceKind>,
    total: usize,
    f: &mut F,
) -> Result<(), SearchError>
where
    F: FnMut(&[PieceKind]) -> Result<(), SearchError>,
{
    if prefix.len() == total {
        return f(prefix);
    }

    for i in 0..counts.len() {
        if counts[i].1 == 0 {
            continue;
        }
        counts[i].1 -= 1;
        prefix.push(counts[i].0);

        next_slot(counts, prefix, total, f)?;

        prefix.pop();
        counts[i].1 += 1;
    }

    Ok(())
}

/// Solve the instance: validate, build the attack table once, run one full
/// engine pass per distinct ordering and aggregate the counters.
///
/// Every solution is found under exactly one ordering (the one matching
/// its kinds read in increasing square order), so the accumulated count
/// has no duplicates.
pub fn play(problem: &Problem, options: &SearchOptions) -> Result<Report, SearchError> {
    problem.validate()?;

    let table = AttackTable::build(problem.board);
    let mut engine = Engine::new(&table, problem.material.total(), options);

    let mut num_orderings: u64 = 0;
    for_each_distinct(&problem.material, &mut |ordering| {
        num_orderings += 1;
        engine.run(ordering)
    })?;

    Ok(engine.into_report(num_orderings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_kind_has_one_ordering() {
        let mat = Material::new().with_queens(8);
        assert_eq!(distinct_orderings(&mat), 1);
    }

    #[test]
    fn multinomial_counts() {
        // [R, K, K] -> 3!/2! = 3
        let mat = Material::new().with_rooks(1).with_kings(2);
        assert_eq!(distinct_orderings(&mat), 3);

        // [R, R, N, N, N, N] -> 6!/(2!*4!) = 15
        let mat = Material::new().with_rooks(2).with_knights(4);
        assert_eq!(distinct_orderings(&mat), 15);

        // One of each -> 5! = 120
        let mat = Material::new()
            .with_kings(1)
            .with_queens(1)
            .with_rooks(1)
            .with_bishops(1)
            .with_knights(1);
        assert_eq!(distinct_orderings(&mat), 120);
    }

    #[test]
    fn enumeration_matches_multinomial() {
        let mat = Material::new().with_rooks(2).with_knights(4).with_kings(1);
        let mut seen = 0u128;
        for_each_distinct(&mat, &mut |ordering| {
            assert_eq!(ordering.len(), 7);
            seen += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, distinct_orderings(&mat));
    }
}
