use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

/// Groups of interchangeable given names.
///
/// Every name in a group is linked to every other name in the same group.
/// A name may appear in several groups (`bert` is short for both `robert`
/// and `albert`), but two names are only linked when they share a group.
const NICKNAME_GROUPS: &[&[&str]] = &[
    &["abigail", "abby", "gail"],
    &["albert", "al", "bert", "bertie"],
    &["alexander", "alex", "alec", "sandy", "xander"],
    &["alexandra", "alex", "sandra", "sandy", "lexi"],
    &["alfred", "al", "alf", "fred", "freddie"],
    &["allan", "alan", "allen", "al"],
    &["andrew", "andy", "drew"],
    &["anthony", "tony"],
    &["barbara", "barb", "barbie", "babs"],
    &["benjamin", "ben", "benny", "benji"],
    &["catherine", "katherine", "kathryn", "cathy", "kathy", "kate", "katie", "kat", "kit"],
    &["charles", "charlie", "chuck", "chas", "chaz"],
    &["christine", "christina", "chris", "chrissy", "tina"],
    &["christopher", "chris", "kit", "topher"],
    &["cynthia", "cindy"],
    &["daniel", "dan", "danny"],
    &["david", "dave", "davey"],
    &["deborah", "debra", "debbie", "deb"],
    &["donald", "don", "donnie"],
    &["dorothy", "dot", "dottie", "dolly"],
    &["edward", "ed", "eddie", "ted", "teddy", "ned"],
    &["elizabeth", "liz", "lizzie", "beth", "betsy", "betty", "eliza", "libby"],
    &["eugene", "gene"],
    &["frances", "fran", "frannie"],
    &["francis", "frank", "frankie"],
    &["frederick", "fred", "freddie", "fritz"],
    &["gerald", "gerry", "jerry"],
    &["gregory", "greg"],
    &["harold", "hal", "harry"],
    &["henry", "hank", "harry", "hal"],
    &["james", "jim", "jimmy", "jamie"],
    &["jennifer", "jen", "jenny", "jenn"],
    &["jessica", "jess", "jessie"],
    &["john", "jack", "johnny", "jon"],
    &["jonathan", "jon", "jonny"],
    &["joseph", "joe", "joey"],
    &["joshua", "josh"],
    &["judith", "judy"],
    &["kenneth", "ken", "kenny"],
    &["lawrence", "larry"],
    &["leonard", "leo", "len", "lenny"],
    &["margaret", "maggie", "meg", "peggy", "peg", "marge", "margie", "greta"],
    &["matthew", "matt"],
    &["michael", "mike", "mikey", "mick", "mickey"],
    &["nathaniel", "nathan", "nate", "nat"],
    &["nicholas", "nick", "nicky", "nico"],
    &["pamela", "pam"],
    &["patricia", "pat", "patty", "trish", "tricia"],
    &["patrick", "pat", "paddy"],
    &["peter", "pete"],
    &["philip", "phillip", "phil"],
    &["rebecca", "becky", "becca"],
    &["richard", "rick", "ricky", "rich", "richie", "dick"],
    &["robert", "bob", "bobby", "rob", "robbie", "bert"],
    &["ronald", "ron", "ronnie"],
    &["samuel", "sam", "sammy"],
    &["samantha", "sam", "sammie"],
    &["stephen", "steven", "steve", "stevie"],
    &["susan", "sue", "susie", "suzy"],
    &["theodore", "ted", "teddy", "theo"],
    &["thomas", "tom", "tommy"],
    &["timothy", "tim", "timmy"],
    &["victoria", "vicky", "tori"],
    &["walter", "walt", "wally"],
    &["william", "bill", "billy", "will", "willy", "willie", "liam"],
    &["zachary", "zach", "zack"],
];

static NICKNAME_TABLE: Lazy<NicknameTable> = Lazy::new(NicknameTable::build);

/// Bidirectional lookup over [`NICKNAME_GROUPS`]
#[derive(Debug)]
pub struct NicknameTable {
    /// name -> indices of the groups containing it
    name_to_groups: HashMap<&'static str, Vec<usize>>,
}

impl NicknameTable {
    fn build() -> Self {
        let mut name_to_groups: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (idx, group) in NICKNAME_GROUPS.iter().enumerate() {
            for &name in *group {
                let groups = name_to_groups.entry(name).or_default();
                if !groups.contains(&idx) {
                    groups.push(idx);
                }
            }
        }
        Self { name_to_groups }
    }

    /// The process-wide table, built on first use and never modified afterwards
    pub fn global() -> &'static Self {
        &NICKNAME_TABLE
    }

    /// All names interchangeable with `token`, always including `token` itself
    #[must_use]
    pub fn variants(&self, token: &str) -> BTreeSet<String> {
        let mut variants = BTreeSet::new();
        variants.insert(token.to_string());
        if let Some(groups) = self.name_to_groups.get(token) {
            for &idx in groups {
                variants.extend(NICKNAME_GROUPS[idx].iter().map(|s| (*s).to_string()));
            }
        }
        variants
    }
}
