// ============================================================
// Layer 4 — Porter Stemmer
// ============================================================
// English suffix stripping (Porter, 1980). Two tokens that stem
// to the same string are the same feature for every vectorizer.
//
// Which Porter?
//   The rule tables are the classic algorithm as Martin Porter
//   published it in C, including its two later rules (-bli → -ble,
//   -logi → -log). On top of that it takes NLTK's short-word
//   extensions, so the vocabulary agrees with NLTK's default mode
//   on the words where the classic rules mangle most:
//     - a small table of irregular forms (dying → die, skies → sky)
//     - four-letter -ies / -ied keep their e (lies → lie, died → die)
//   NLTK's other departures (its step 1c and the extra step 2
//   and 5 rules) are not taken, so e.g. "day" stems to "dai".
//
// Tokens are lowercased first. Tokens of one or two characters
// and tokens with non-ASCII letters come back lowercased but
// otherwise untouched.
//
// Working state is a byte buffer `b` holding the word and `j`,
// the length of the stem left in front of the suffix most
// recently matched by `ends`.

/// Reduce a single token to its stem. Total and deterministic.
pub fn stem(token: &str) -> String {
    PorterStemmer::new().stem(token)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    pub fn stem(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if lower.len() <= 2 || !lower.bytes().all(|c| c.is_ascii_lowercase()) {
            return lower;
        }
        if let Some(&(_, stem)) = IRREGULAR_FORMS.iter().find(|(word, _)| *word == lower) {
            return stem.to_string();
        }

        let mut w = Word {
            b: lower.into_bytes(),
            j: 0,
        };
        w.step1ab();
        if w.b.len() > 1 {
            w.step1c();
            w.step2();
            w.step3();
            w.step4();
            w.step5();
        }

        // Only ASCII bytes were ever written into the buffer.
        w.b.into_iter().map(char::from).collect()
    }
}

/// Whole words stemmed by lookup instead of by rule.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("skies", "sky"),
    ("sky", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

struct Word {
    b: Vec<u8>,
    j: usize,
}

impl Word {
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in the stem `b[..j]`.
    fn measure(&self) -> usize {
        let j = self.j;
        let mut n = 0;
        let mut i = 0;
        while i < j && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < j && !self.is_consonant(i) {
                i += 1;
            }
            if i >= j {
                return n;
            }
            while i < j && self.is_consonant(i) {
                i += 1;
            }
            n += 1;
            if i >= j {
                return n;
            }
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.j).any(|i| !self.is_consonant(i))
    }

    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// consonant-vowel-consonant ending at `i`, last letter not w, x or y
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2) {
            return false;
        }
        !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        if self.b.ends_with(suffix.as_bytes()) {
            self.j = self.b.len() - suffix.len();
            true
        } else {
            false
        }
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate(self.j);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn replace_if_measured(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }

    fn last(&self) -> usize {
        self.b.len() - 1
    }

    /// Plurals and -ed / -ing.
    fn step1ab(&mut self) {
        // lies → lie, died → die rather than li, di
        if self.b.len() == 4 && (self.b.ends_with(b"ies") || self.b.ends_with(b"ied")) {
            self.b.pop();
            return;
        }

        if self.b.ends_with(b"s") {
            if self.ends("sses") {
                self.set_to("ss");
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b.len() >= 2 && self.b[self.b.len() - 2] != b's' {
                self.b.pop();
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.b.pop();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.b.truncate(self.j);
            self.j = self.b.len();
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.last()) {
                if !matches!(self.b[self.last()], b'l' | b's' | b'z') {
                    self.b.pop();
                }
            } else {
                self.j = self.b.len();
                if self.measure() == 1 && self.cvc(self.last()) {
                    self.set_to("e");
                }
            }
        }
    }

    /// Terminal y → i when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let last = self.last();
            self.b[last] = b'i';
        }
    }

    /// Double suffixes map to single ones.
    fn step2(&mut self) {
        self.apply_rules(STEP2_RULES);
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        self.apply_rules(STEP3_RULES);
    }

    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Strip -ant, -ence etc. in context <c>vcvc<v>.
    fn step4(&mut self) {
        for suffix in STEP4_SUFFIXES {
            if !self.ends(suffix) {
                continue;
            }
            if *suffix == "ion" && !(self.j >= 1 && matches!(self.b[self.j - 1], b's' | b't')) {
                // -ion only counts after s or t; nothing else can match now
                return;
            }
            if self.measure() > 1 {
                self.b.truncate(self.j);
            }
            return;
        }
    }

    /// Final -e and -ll.
    fn step5(&mut self) {
        self.j = self.b.len();
        if self.b[self.last()] == b'e' {
            let m = self.measure();
            let len = self.b.len();
            if m > 1 || (m == 1 && !(len >= 2 && self.cvc(len - 2))) {
                self.b.pop();
                self.j = self.b.len();
            }
        }
        if self.b[self.last()] == b'l' && self.double_consonant(self.last()) && self.measure() > 1 {
            self.b.pop();
        }
    }
}
