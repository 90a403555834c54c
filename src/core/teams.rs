//! Static NFL franchise table used to synthesize team-defense entries.

/// An NFL franchise as Sleeper abbreviates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub abbr: &'static str,
    pub name: &'static str,
}

impl Team {
    /// Split the franchise name on its first whitespace: ("Kansas", "City Chiefs").
    ///
    /// A single-word name yields an empty last part.
    pub fn name_parts(&self) -> (&'static str, &'static str) {
        match self.name.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest),
            None => (self.name, ""),
        }
    }
}

const fn team(abbr: &'static str, name: &'static str) -> Team {
    Team { abbr, name }
}

/// All 32 franchises, sorted by abbreviation.
pub static TEAMS: [Team; 32] = [
    team("ARI", "Arizona Cardinals"),
    team("ATL", "Atlanta Falcons"),
    team("BAL", "Baltimore Ravens"),
    team("BUF", "Buffalo Bills"),
    team("CAR", "Carolina Panthers"),
    team("CHI", "Chicago Bears"),
    team("CIN", "Cincinnati Bengals"),
    team("CLE", "Cleveland Browns"),
    team("DAL", "Dallas Cowboys"),
    team("DEN", "Denver Broncos"),
    team("DET", "Detroit Lions"),
    team("GB", "Green Bay Packers"),
    team("HOU", "Houston Texans"),
    team("IND", "Indianapolis Colts"),
    team("JAX", "Jacksonville Jaguars"),
    team("KC", "Kansas City Chiefs"),
    team("LAC", "Los Angeles Chargers"),
    team("LAR", "Los Angeles Rams"),
    team("LV", "Las Vegas Raiders"),
    team("MIA", "Miami Dolphins"),
    team("MIN", "Minnesota Vikings"),
    team("NE", "New England Patriots"),
    team("NO", "New Orleans Saints"),
    team("NYG", "New York Giants"),
    team("NYJ", "New York Jets"),
    team("PHI", "Philadelphia Eagles"),
    team("PIT", "Pittsburgh Steelers"),
    team("SEA", "Seattle Seahawks"),
    team("SF", "San Francisco 49ers"),
    team("TB", "Tampa Bay Buccaneers"),
    team("TEN", "Tennessee Titans"),
    team("WAS", "Washington Commanders"),
];
