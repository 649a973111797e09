use crate::domain::Team;
use crate::services::search::SearchQuery;
use chrono::{DateTime, Local};
use std::cmp::Ordering;
use tracing::debug;

/// A team annotated with its rank in the complete, unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTeam<'a> {
    pub true_rank: usize,
    pub team: &'a Team,
}

impl RankedTeam<'_> {
    pub fn tier(&self) -> RankTier {
        RankTier::from_rank(self.true_rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    /// Top four.
    Playoff,
    /// Five through twelve.
    Bracket,
    Top25,
    Unranked,
}

impl RankTier {
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0..=4 => Self::Playoff,
            5..=12 => Self::Bracket,
            13..=25 => Self::Top25,
            _ => Self::Unranked,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Playoff => "CFP",
            Self::Bracket => "BKT",
            Self::Top25 => "T25",
            Self::Unranked => "",
        }
    }
}

/// Rating descending. NaN ratings sort after every number and compare equal
/// to each other, so the ordering stays total.
fn by_rating_desc(a: &Team, b: &Team) -> Ordering {
    match b.ranking.partial_cmp(&a.ranking) {
        Some(ordering) => ordering,
        None => a.ranking.is_nan().cmp(&b.ranking.is_nan()),
    }
}

/// Indices of `teams` in display order. Stable, so equal ratings keep the
/// order the service returned them in.
fn rank_order(teams: &[Team]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.sort_by(|&a, &b| by_rating_desc(&teams[a], &teams[b]));
    order
}

fn filter_in_order<'a, P>(teams: &'a [Team], order: &[usize], predicate: P) -> Vec<RankedTeam<'a>>
where
    P: Fn(&Team) -> bool,
{
    order
        .iter()
        .enumerate()
        .filter(|(_, &idx)| predicate(&teams[idx]))
        .map(|(position, &idx)| RankedTeam {
            true_rank: position + 1,
            team: &teams[idx],
        })
        .collect()
}

/// Ranks every team in `teams` 1..=N by position in a stable descending sort,
/// then keeps the teams accepted by `predicate` without renumbering them.
/// Exact ties get consecutive, distinct ranks.
pub fn derive_rankings<P>(teams: &[Team], predicate: P) -> Vec<RankedTeam<'_>>
where
    P: Fn(&Team) -> bool,
{
    filter_in_order(teams, &rank_order(teams), predicate)
}

/// The authoritative team list of one fetch, with ranks derived once.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    teams: Vec<Team>,
    order: Vec<usize>,
    fetched_at: Option<DateTime<Local>>,
}

impl Leaderboard {
    pub fn new(teams: Vec<Team>) -> Self {
        let order = rank_order(&teams);
        debug!("Derived true ranks for {} teams", teams.len());
        Self {
            teams,
            order,
            fetched_at: Some(Local::now()),
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Teams in the order the service returned them.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }

    pub fn ranked(&self) -> Vec<RankedTeam<'_>> {
        self.filter(|_| true)
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<RankedTeam<'_>>
    where
        P: Fn(&Team) -> bool,
    {
        filter_in_order(&self.teams, &self.order, predicate)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<RankedTeam<'_>> {
        self.filter(|team| query.matches(team))
    }

    /// First team with this exact name.
    pub fn find(&self, name: &str) -> Option<RankedTeam<'_>> {
        self.order
            .iter()
            .enumerate()
            .find(|(_, &idx)| self.teams[idx].name == name)
            .map(|(position, &idx)| RankedTeam {
                true_rank: position + 1,
                team: &self.teams[idx],
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, ranking: f64) -> Team {
        Team {
            name: name.to_string(),
            wins: 0,
            losses: 0,
            ranking,
            games: Vec::new(),
        }
    }

    fn names_and_ranks(ranked: &[RankedTeam<'_>]) -> Vec<(String, usize)> {
        ranked
            .iter()
            .map(|r| (r.team.name.clone(), r.true_rank))
            .collect()
    }

    #[test]
    fn ties_are_broken_by_source_order() {
        let teams = vec![team("A", 10.0), team("B", 20.0), team("C", 20.0)];
        let ranked = derive_rankings(&teams, |_| true);
        assert_eq!(
            names_and_ranks(&ranked),
            vec![("B".into(), 1), ("C".into(), 2), ("A".into(), 3)]
        );
    }

    #[test]
    fn empty_list_yields_empty_result() {
        assert!(derive_rankings(&[], |_| true).is_empty());
        assert!(Leaderboard::default().ranked().is_empty());
    }

    #[test]
    fn ranks_are_a_permutation_with_max_first() {
        let teams = vec![
            team("Iowa", 3.5),
            team("Ohio State", 41.0),
            team("Akron", -12.25),
            team("Navy", 3.5),
            team("Utah", 0.0),
            team("Duke", -0.0),
        ];
        let ranked = derive_rankings(&teams, |_| true);
        let mut ranks: Vec<usize> = ranked.iter().map(|r| r.true_rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=teams.len()).collect::<Vec<_>>());
        assert_eq!(ranked[0].team.name, "Ohio State");
        assert_eq!(ranked[0].true_rank, 1);
        // 0.0 and -0.0 compare equal, source order decides.
        assert_eq!(ranked[3].team.name, "Utah");
        assert_eq!(ranked[4].team.name, "Duke");
    }

    #[test]
    fn filtering_never_renumbers() {
        let teams = vec![
            team("Georgia", 28.0),
            team("Oregon", 35.5),
            team("Alabama", 30.0),
            team("Texas", 31.0),
            team("Iowa", 12.0),
        ];
        let full = derive_rankings(&teams, |_| true);
        let predicates: Vec<Box<dyn Fn(&Team) -> bool>> = vec![
            Box::new(|t: &Team| t.name.contains('a')),
            Box::new(|t: &Team| t.ranking < 30.0),
            Box::new(|_: &Team| false),
            Box::new(|t: &Team| t.name == "Iowa"),
        ];
        for predicate in predicates {
            for filtered in derive_rankings(&teams, &predicate) {
                let expected = full
                    .iter()
                    .find(|r| r.team.name == filtered.team.name)
                    .map(|r| r.true_rank);
                assert_eq!(Some(filtered.true_rank), expected);
            }
        }
    }

    #[test]
    fn filtered_output_is_sorted_by_rating() {
        let teams = vec![
            team("Iowa", 12.0),
            team("Georgia", 28.0),
            team("Kentucky", 2.0),
            team("Alabama", 30.0),
        ];
        let ranked = derive_rankings(&teams, |t| t.name != "Georgia");
        assert_eq!(
            names_and_ranks(&ranked),
            vec![("Alabama".into(), 1), ("Iowa".into(), 3), ("Kentucky".into(), 4)]
        );
    }

    #[test]
    fn nan_ratings_sink_to_the_bottom() {
        let teams = vec![team("X", f64::NAN), team("Y", -50.0), team("Z", 1.0)];
        let ranked = derive_rankings(&teams, |_| true);
        assert_eq!(
            names_and_ranks(&ranked),
            vec![("Z".into(), 1), ("Y".into(), 2), ("X".into(), 3)]
        );
    }

    #[test]
    fn search_keeps_true_rank_for_conference_match() {
        let board = Leaderboard::new(vec![
            team("Oregon", 40.0),
            team("Alabama", 30.0),
            team("Ohio State", 35.0),
        ]);
        let hits = board.search(&SearchQuery::new("sec"));
        assert_eq!(names_and_ranks(&hits), vec![("Alabama".into(), 3)]);
        assert_eq!(hits[0].tier(), RankTier::Playoff);
    }

    #[test]
    fn leaderboard_find_and_source_order() {
        let board = Leaderboard::new(vec![team("A", 1.0), team("B", 2.0)]);
        assert_eq!(board.teams()[0].name, "A");
        assert_eq!(board.find("A").map(|r| r.true_rank), Some(2));
        assert!(board.find("C").is_none());
        assert!(board.fetched_at().is_some());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn rank_tiers() {
        assert_eq!(RankTier::from_rank(1), RankTier::Playoff);
        assert_eq!(RankTier::from_rank(4), RankTier::Playoff);
        assert_eq!(RankTier::from_rank(5), RankTier::Bracket);
        assert_eq!(RankTier::from_rank(12), RankTier::Bracket);
        assert_eq!(RankTier::from_rank(25), RankTier::Top25);
        assert_eq!(RankTier::from_rank(26), RankTier::Unranked);
    }
}
