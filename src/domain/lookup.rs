use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;

const LOGO_BASE: &str = "https://a.espncdn.com/i/teamlogos/ncaa/500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conference {
    Sec,
    BigTen,
    Acc,
    Big12,
    Independent,
    American,
    MountainWest,
    SunBelt,
    Mac,
    Cusa,
    Other,
}

impl Conference {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sec => "SEC",
            Self::BigTen => "Big Ten",
            Self::Acc => "ACC",
            Self::Big12 => "Big 12",
            Self::Independent => "Independent",
            Self::American => "AAC",
            Self::MountainWest => "Mountain West",
            Self::SunBelt => "Sun Belt",
            Self::Mac => "MAC",
            Self::Cusa => "CUSA",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static CONFERENCE_MAP: OnceCell<HashMap<&'static str, Conference>> = OnceCell::new();
static LOGO_MAP: OnceCell<HashMap<&'static str, &'static str>> = OnceCell::new();

fn conference_map() -> &'static HashMap<&'static str, Conference> {
    CONFERENCE_MAP.get_or_init(|| {
        use Conference::*;

        let groups: [(Conference, &[&'static str]); 10] = [
            (
                Sec,
                &[
                    "Alabama", "Georgia", "LSU", "Florida", "Tennessee", "Texas", "Texas A&M",
                    "Auburn", "Ole Miss", "Mississippi State", "Arkansas", "Kentucky",
                    "South Carolina", "Missouri", "Vanderbilt", "Oklahoma",
                ],
            ),
            (
                BigTen,
                &[
                    "Ohio State", "Michigan", "Penn State", "USC", "Oregon", "Washington",
                    "UCLA", "Michigan State", "Iowa", "Wisconsin", "Nebraska", "Minnesota",
                    "Indiana", "Purdue", "Maryland", "Rutgers", "Northwestern", "Illinois",
                ],
            ),
            (
                Acc,
                &[
                    "Clemson", "Florida State", "Miami", "North Carolina", "NC State",
                    "Louisville", "Duke", "Virginia Tech", "Virginia", "Georgia Tech",
                    "Boston College", "Syracuse", "Wake Forest", "Pittsburgh", "Stanford",
                    "California", "SMU",
                ],
            ),
            (
                Big12,
                &[
                    "Kansas State", "TCU", "Baylor", "Texas Tech", "Oklahoma State",
                    "West Virginia", "Iowa State", "Kansas", "BYU", "Utah", "Colorado",
                    "Arizona", "Arizona State", "Cincinnati", "Houston", "UCF",
                ],
            ),
            (Independent, &["Notre Dame", "UConn", "UMass", "Army"]),
            (
                American,
                &[
                    "Memphis", "Tulane", "Navy", "South Florida", "East Carolina", "Temple",
                    "UAB", "North Texas", "UTSA", "Charlotte", "Tulsa", "Florida Atlantic",
                    "Rice",
                ],
            ),
            (
                MountainWest,
                &[
                    "Boise State", "San Diego State", "Fresno State", "Air Force",
                    "Colorado State", "Wyoming", "New Mexico", "Nevada", "UNLV",
                    "San Jose State", "Utah State", "Hawaii",
                ],
            ),
            (
                SunBelt,
                &[
                    "App State", "Appalachian State", "Coastal Carolina", "James Madison",
                    "Marshall", "Georgia Southern", "Louisiana", "Louisiana Lafayette", "Troy",
                    "Arkansas State", "South Alabama", "Georgia State", "Old Dominion",
                    "Southern Miss", "Southern Mississippi", "Texas State", "ULM",
                ],
            ),
            (
                Mac,
                &[
                    "Toledo", "Miami (OH)", "Miami OH", "Ohio", "Bowling Green",
                    "Northern Illinois", "Ball State", "Western Michigan", "Central Michigan",
                    "Eastern Michigan", "Buffalo", "Kent State", "Akron",
                ],
            ),
            (
                Cusa,
                &[
                    "Western Kentucky", "Liberty", "Middle Tennessee", "Jacksonville State",
                    "Louisiana Tech", "New Mexico State", "Sam Houston State", "Sam Houston",
                    "UTEP", "Florida International", "FIU", "Kennesaw State",
                ],
            ),
        ];

        groups
            .iter()
            .flat_map(|(conference, teams)| teams.iter().map(move |team| (*team, *conference)))
            .collect()
    })
}

fn logo_map() -> &'static HashMap<&'static str, &'static str> {
    LOGO_MAP.get_or_init(|| {
        HashMap::from([
            // SEC
            ("Alabama", "333"),
            ("Georgia", "61"),
            ("LSU", "99"),
            ("Florida", "57"),
            ("Tennessee", "2633"),
            ("Texas", "251"),
            ("Texas A&M", "245"),
            ("Auburn", "2"),
            ("Ole Miss", "145"),
            ("Mississippi State", "344"),
            ("Arkansas", "8"),
            ("Kentucky", "96"),
            ("South Carolina", "2579"),
            ("Missouri", "142"),
            ("Vanderbilt", "238"),
            ("Oklahoma", "201"),
            // Big Ten
            ("Ohio State", "194"),
            ("Michigan", "130"),
            ("Penn State", "213"),
            ("USC", "30"),
            ("Oregon", "2483"),
            ("Washington", "264"),
            ("UCLA", "26"),
            ("Michigan State", "127"),
            ("Iowa", "2294"),
            ("Wisconsin", "275"),
            ("Nebraska", "158"),
            ("Minnesota", "135"),
            ("Indiana", "84"),
            ("Purdue", "2509"),
            ("Maryland", "120"),
            ("Rutgers", "164"),
            ("Northwestern", "77"),
            ("Illinois", "356"),
            // ACC
            ("Clemson", "228"),
            ("Florida State", "52"),
            ("Miami", "2390"),
            ("Miami (FL)", "2390"),
            ("Miami FL", "2390"),
            ("North Carolina", "153"),
            ("NC State", "152"),
            ("Louisville", "97"),
            ("Duke", "150"),
            ("Virginia Tech", "259"),
            ("Virginia", "258"),
            ("Georgia Tech", "59"),
            ("Boston College", "103"),
            ("Syracuse", "183"),
            ("Wake Forest", "154"),
            ("Pittsburgh", "221"),
            ("Stanford", "24"),
            ("California", "25"),
            ("SMU", "2567"),
            // Big 12
            ("Kansas State", "2306"),
            ("TCU", "2628"),
            ("Baylor", "239"),
            ("Texas Tech", "2641"),
            ("Oklahoma State", "197"),
            ("West Virginia", "277"),
            ("Iowa State", "66"),
            ("Kansas", "2305"),
            ("BYU", "252"),
            ("Utah", "254"),
            ("Colorado", "38"),
            ("Arizona", "12"),
            ("Arizona State", "9"),
            ("Cincinnati", "2132"),
            ("Houston", "248"),
            ("UCF", "2116"),
            // Independents
            ("Notre Dame", "87"),
            ("UConn", "41"),
            ("UMass", "113"),
            ("Army", "349"),
            ("Army West Point", "349"),
            // American
            ("Memphis", "235"),
            ("Tulane", "2655"),
            ("Navy", "2426"),
            ("South Florida", "58"),
            ("Temple", "218"),
            ("East Carolina", "151"),
            ("Tulsa", "202"),
            ("UTSA", "2636"),
            ("UT San Antonio", "2636"),
            ("North Texas", "249"),
            ("Charlotte", "2429"),
            ("Florida Atlantic", "2226"),
            ("Rice", "242"),
            ("UAB", "5"),
            // Mountain West
            ("Boise State", "68"),
            ("San Diego State", "21"),
            ("Fresno State", "278"),
            ("Air Force", "2005"),
            ("Wyoming", "2849"),
            ("Colorado State", "36"),
            ("Nevada", "2440"),
            ("UNLV", "2439"),
            ("New Mexico", "167"),
            ("San José State", "23"),
            ("San Jose State", "23"),
            ("SJSU", "23"),
            ("Utah State", "328"),
            ("Hawaii", "62"),
            ("Hawaiʻi", "62"),
            ("Hawai'i", "62"),
            // Sun Belt
            ("App State", "2026"),
            ("Appalachian State", "2026"),
            ("Coastal Carolina", "324"),
            ("James Madison", "256"),
            ("Marshall", "276"),
            ("Georgia Southern", "290"),
            ("Georgia State", "2247"),
            ("Troy", "2653"),
            ("South Alabama", "6"),
            ("Louisiana", "309"),
            ("Louisiana Lafayette", "309"),
            ("UL Lafayette", "309"),
            ("Southern Miss", "2572"),
            ("Southern Mississippi", "2572"),
            ("Arkansas State", "2032"),
            ("Louisiana Monroe", "2433"),
            ("UL Monroe", "2433"),
            ("ULM", "2433"),
            ("Texas State", "326"),
            ("Old Dominion", "295"),
            // MAC
            ("Toledo", "2649"),
            ("Miami (OH)", "193"),
            ("Miami OH", "193"),
            ("Ohio", "195"),
            ("Bowling Green", "189"),
            ("Northern Illinois", "2459"),
            ("Ball State", "2050"),
            ("Eastern Michigan", "2199"),
            ("Western Michigan", "2711"),
            ("Central Michigan", "2117"),
            ("Buffalo", "2084"),
            ("Kent State", "2309"),
            ("Akron", "2006"),
            // CUSA
            ("Liberty", "2335"),
            ("Western Kentucky", "98"),
            ("Jacksonville State", "55"),
            ("Louisiana Tech", "2348"),
            ("Middle Tennessee", "2393"),
            ("UTEP", "2638"),
            ("New Mexico State", "166"),
            ("Sam Houston", "2534"),
            ("Sam Houston State", "2534"),
            ("FIU", "2229"),
            ("Florida International", "2229"),
            ("Kennesaw State", "338"),
        ])
    })
}

/// Conference for an exact team name; unknown names are `Other`.
pub fn conference_of(team: &str) -> Conference {
    conference_map()
        .get(team)
        .copied()
        .unwrap_or(Conference::Other)
}

pub fn logo_url(team: &str) -> Option<String> {
    logo_map()
        .get(team)
        .map(|id| format!("{LOGO_BASE}/{id}.png"))
}
