/// Contracted English forms and the spellings a learner may type instead.
///
/// Keys keep their apostrophe; lookups are made with normalized words, which
/// have none, so a key is only reached through one of its values.
pub const ENGLISH_EQUIVALENTS: &[(&str, &[&str])] = &[
    ("i'm", &["im", "i am"]),
    ("you're", &["youre", "you are"]),
    ("he's", &["hes", "he is", "he has"]),
    ("she's", &["shes", "she is", "she has"]),
    ("it's", &["its", "it is", "it has"]),
    ("we're", &["were", "we are"]),
    ("they're", &["theyre", "they are"]),
    ("that's", &["thats", "that is", "that has"]),
    ("there's", &["theres", "there is", "there has"]),
    ("here's", &["heres", "here is", "here has"]),
    ("what's", &["whats", "what is", "what has"]),
    ("where's", &["wheres", "where is", "where has"]),
    ("who's", &["whos", "who is", "who has"]),
    ("how's", &["hows", "how is", "how has"]),
    ("when's", &["whens", "when is", "when has"]),
    ("why's", &["whys", "why is", "why has"]),
    ("let's", &["lets", "let us"]),
    ("won't", &["wont", "will not"]),
    ("can't", &["cant", "cannot", "can not"]),
    ("don't", &["dont", "do not"]),
    ("doesn't", &["doesnt", "does not"]),
    ("didn't", &["didnt", "did not"]),
    ("wouldn't", &["wouldnt", "would not"]),
    ("couldn't", &["couldnt", "could not"]),
    ("shouldn't", &["shouldnt", "should not"]),
    ("haven't", &["havent", "have not"]),
    ("hasn't", &["hasnt", "has not"]),
    ("hadn't", &["hadnt", "had not"]),
    ("isn't", &["isnt", "is not"]),
    ("aren't", &["arent", "are not"]),
    ("wasn't", &["wasnt", "was not"]),
    ("weren't", &["werent", "were not"]),
    ("i'll", &["ill", "i will"]),
    ("you'll", &["youll", "you will"]),
    ("he'll", &["hell", "he will"]),
    ("she'll", &["shell", "she will"]),
    ("it'll", &["itll", "it will"]),
    ("we'll", &["well", "we will"]),
    ("they'll", &["theyll", "they will"]),
    ("i've", &["ive", "i have"]),
    ("you've", &["youve", "you have"]),
    ("we've", &["weve", "we have"]),
    ("they've", &["theyve", "they have"]),
    ("i'd", &["id", "i would", "i had"]),
    ("you'd", &["youd", "you would", "you had"]),
    ("he'd", &["hed", "he would", "he had"]),
    ("she'd", &["shed", "she would", "she had"]),
    ("we'd", &["wed", "we would", "we had"]),
    ("they'd", &["theyd", "they would", "they had"]),
];

/// Bidirectional lookup over a fixed set of equivalent phrasings.
#[derive(Debug, Clone, Copy)]
pub struct EquivalenceTable {
    groups: &'static [(&'static str, &'static [&'static str])],
}

impl EquivalenceTable {
    pub fn new(groups: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { groups }
    }

    pub fn english() -> Self {
        Self::new(ENGLISH_EQUIVALENTS)
    }

    /// The word itself followed by every phrasing registered as equivalent
    /// to it, without duplicates. A variant may span several words.
    pub fn variants<'a>(&self, word: &'a str) -> Vec<&'a str> {
        let mut variants: Vec<&'a str> = vec![word];
        for (key, values) in self.groups {
            if *key == word {
                push_unique(&mut variants, values.iter().copied());
            } else if values.contains(&word) {
                push_unique(&mut variants, std::iter::once(*key));
                push_unique(&mut variants, values.iter().copied());
            }
        }
        variants
    }

    /// Whether two single words are registered equivalents, checked in both
    /// directions. Identical words are not considered here.
    pub fn are_equivalent(&self, reference_word: &str, user_word: &str) -> bool {
        self.groups.iter().any(|(key, values)| {
            (*key == reference_word && values.contains(&user_word))
                || (values.contains(&reference_word)
                    && (*key == user_word || values.contains(&user_word)))
        })
    }
}

impl Default for EquivalenceTable {
    fn default() -> Self {
        Self::english()
    }
}

fn push_unique<'a>(into: &mut Vec<&'a str>, items: impl Iterator<Item = &'a str>) {
    for item in items {
        if !into.contains(&item) {
            into.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_variants_of_plain_word_is_itself() {
        assert_eq!(EquivalenceTable::english().variants("fine"), vec!["fine"]);
    }

    #[test]
    fn test_variants_from_value_include_key_and_siblings() {
        let variants = EquivalenceTable::english().variants("im");
        assert_eq!(variants, vec!["im", "i'm", "i am"]);
    }

    #[test]
    fn test_variants_from_key() {
        let variants = EquivalenceTable::english().variants("don't");
        assert_eq!(variants, vec!["don't", "dont", "do not"]);
    }

    #[test]
    fn test_variants_have_no_duplicates() {
        let table = EquivalenceTable::english();
        for (_, values) in ENGLISH_EQUIVALENTS {
            for value in *values {
                let variants = table.variants(value);
                let unique: HashSet<&str> = variants.iter().copied().collect();
                assert_eq!(variants.len(), unique.len(), "duplicates for {value}");
            }
        }
    }

    #[test]
    fn test_are_equivalent_both_directions() {
        let table = EquivalenceTable::english();
        assert!(table.are_equivalent("dont", "don't"));
        assert!(table.are_equivalent("don't", "dont"));
        assert!(table.are_equivalent("cant", "cannot"));
        assert!(!table.are_equivalent("dont", "do"));
        assert!(!table.are_equivalent("fine", "fine"));
    }

    #[test]
    fn test_custom_table() {
        static GROUPS: &[(&str, &[&str])] = &[("gonna", &["going to"])];
        let table = EquivalenceTable::new(GROUPS);
        assert_eq!(table.variants("gonna"), vec!["gonna", "going to"]);
        assert!(table.variants("im").len() == 1);
    }
}
