use crate::domain::{conference_of, Team};

/// Case-insensitive substring match over team name and conference label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, team: &Team) -> bool {
        self.matches_name(&team.name)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        name.to_lowercase().contains(&self.needle)
            || conference_of(name)
                .label()
                .to_lowercase()
                .contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> Team {
        Team {
            name: name.to_string(),
            wins: 0,
            losses: 0,
            ranking: 30.0,
            games: Vec::new(),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let q = SearchQuery::new("");
        assert!(q.is_empty());
        assert!(q.matches(&team("Alabama")));
        assert!(q.matches(&team("")));
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let q = SearchQuery::new("OHIO");
        assert!(q.matches(&team("Ohio State")));
        assert!(q.matches(&team("ohio")));
        assert!(!q.matches(&team("Miami (OH)")));
        assert!(!q.matches(&team("Alabama")));
    }

    #[test]
    fn matches_on_conference_label() {
        let q = SearchQuery::new("sec");
        assert!(q.matches(&team("Alabama")));
        assert!(!q.matches(&team("Oregon")));
    }

    #[test]
    fn unknown_teams_match_other() {
        let q = SearchQuery::new("other");
        assert!(q.matches(&team("Montana State")));
        assert!(!q.matches(&team("Georgia")));
    }

    #[test]
    fn multi_word_conference() {
        let q = SearchQuery::new("big ");
        assert!(q.matches(&team("Iowa")));
        assert!(q.matches(&team("Utah")));
        assert!(!q.matches(&team("Clemson")));
    }
}
