//! # Rule Table
//!
//! The single source of truth for every document: lengths, punctuation,
//! issuer prefixes and the ordered verifier-digit checks. The codec in
//! [`crate::codec`] is generic over this table; adding a document means
//! adding rows here, not branches there.
//!
//! Checks run in the order listed. A check may read positions written by
//! an earlier check (the second CPF digit covers the first; Bahia computes
//! its last digit first and feeds it to the other).

use crate::checksum::Rule;
use crate::kind::DocumentKind;
use crate::uf::Uf;

/// Positions a check reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// The first `n` positions.
    Prefix(usize),
    /// Arbitrary positions, in weight order.
    Indices(&'static [usize]),
}

/// One verifier digit: where it goes, what it covers, how it is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Check {
    /// Index of the verifier digit in the full document.
    pub at: usize,
    /// Positions fed to the weighted sum.
    pub over: Span,
    /// One weight per position in `over`.
    pub weights: &'static [u8],
    /// Reduction applied to the weighted sum.
    pub rule: Rule,
}

impl Check {
    /// Gather the digits this check covers.
    pub fn sequence(&self, digits: &[u8]) -> Vec<u8> {
        match self.over {
            Span::Prefix(n) => digits[..n].to_vec(),
            Span::Indices(indices) => indices.iter().map(|&i| digits[i]).collect(),
        }
    }
}

/// A concrete digit layout of a document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Total digit count including verifier digits.
    pub len: usize,
    /// Punctuation template with one `#` per digit.
    pub template: &'static str,
    /// Leading digit groups the issuer assigns. Empty means unrestricted.
    pub prefixes: &'static [&'static str],
    /// Verifier digits in computation order.
    pub checks: &'static [Check],
}

impl Layout {
    /// Whether `index` holds a verifier digit.
    pub fn is_check_position(&self, index: usize) -> bool {
        self.checks.iter().any(|c| c.at == index)
    }
}

/// Everything the codec needs to know about one document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scheme {
    /// Accepted layouts. Generation always uses the first.
    pub layouts: &'static [Layout],
    /// Reject documents whose digits are all identical.
    pub rejects_repeated: bool,
    /// The final verifier digit may be the letter `X`.
    pub check_letter: bool,
    /// Index of a two-digit electoral region code (`01..=28`).
    pub region_at: Option<usize>,
}

impl Scheme {
    /// Layout matching a digit count.
    pub fn layout_for(&self, len: usize) -> Option<&'static Layout> {
        self.layouts.iter().find(|l| l.len == len)
    }

    /// Accepted digit counts, current layout first.
    pub fn lengths(&self) -> Vec<usize> {
        self.layouts.iter().map(|l| l.len).collect()
    }

    /// The layout used for generation.
    pub fn primary(&self) -> &'static Layout {
        &self.layouts[0]
    }
}

/// Rule table entry for a document kind.
pub fn scheme(kind: DocumentKind) -> &'static Scheme {
    match kind {
        DocumentKind::Cpf => &CPF,
        DocumentKind::Cnpj => &CNPJ,
        DocumentKind::Rg => &RG,
        DocumentKind::Pis => &PIS,
        DocumentKind::Renavam => &RENAVAM,
        DocumentKind::VoterTitle => &VOTER_TITLE,
        DocumentKind::Certificate => &CERTIFICATE,
        DocumentKind::StateRegistration(uf) => state_registration(uf),
    }
}

// ---------------------------------------------------------------------------
// Weight vectors
// ---------------------------------------------------------------------------

const W_7_2: &[u8] = &[7, 6, 5, 4, 3, 2];
const W_8_2: &[u8] = &[8, 7, 6, 5, 4, 3, 2];
const W_9_2: &[u8] = &[9, 8, 7, 6, 5, 4, 3, 2];
const W_10_2: &[u8] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const W_11_2: &[u8] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const W_3_2_9_2: &[u8] = &[3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const W_4_3_2_9_2: &[u8] = &[4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const W_5_2_9_2: &[u8] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const W_6_2_9_2: &[u8] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const W_RG: &[u8] = &[2, 3, 4, 5, 6, 7, 8, 9];
const W_VOTER_FIRST: &[u8] = &[0, 0, 2, 3, 4, 5, 6, 7, 8, 9];
const W_VOTER_SECOND: &[u8] = &[7, 8, 9];
const W_CERTIFICATE_FIRST: &[u8] = &[
    2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
];
const W_CERTIFICATE_SECOND: &[u8] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8,
    9,
];

const W_MG_FIRST: &[u8] = &[1, 2, 1, 1, 2, 1, 2, 1, 2, 1, 2];
const W_MG_SECOND: &[u8] = &[3, 2, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const W_PE_LEGACY: &[u8] = &[5, 4, 3, 2, 1, 9, 8, 7, 6, 5, 4, 3, 2];
const W_PR_FIRST: &[u8] = &[3, 2, 7, 6, 5, 4, 3, 2];
const W_PR_SECOND: &[u8] = &[4, 3, 2, 7, 6, 5, 4, 3, 2];
const W_RJ: &[u8] = &[2, 7, 6, 5, 4, 3, 2];
const W_RS: &[u8] = &[2, 9, 8, 7, 6, 5, 4, 3, 2];
const W_RR: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8];
const W_SP_FIRST: &[u8] = &[1, 3, 4, 5, 6, 7, 8, 10];
const W_SP_SECOND: &[u8] = &[3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2];

// ---------------------------------------------------------------------------
// National documents
// ---------------------------------------------------------------------------

static CPF: Scheme = Scheme {
    layouts: &[Layout {
        len: 11,
        template: "###.###.###-##",
        prefixes: &[],
        checks: &[
            Check { at: 9, over: Span::Prefix(9), weights: W_10_2, rule: Rule::Mod11 },
            Check { at: 10, over: Span::Prefix(10), weights: W_11_2, rule: Rule::Mod11 },
        ],
    }],
    rejects_repeated: true,
    check_letter: false,
    region_at: None,
};

static CNPJ: Scheme = Scheme {
    layouts: &[Layout {
        len: 14,
        template: "##.###.###/####-##",
        prefixes: &[],
        checks: &[
            Check { at: 12, over: Span::Prefix(12), weights: W_5_2_9_2, rule: Rule::Mod11 },
            Check { at: 13, over: Span::Prefix(13), weights: W_6_2_9_2, rule: Rule::Mod11 },
        ],
    }],
    rejects_repeated: true,
    check_letter: false,
    region_at: None,
};

static RG: Scheme = Scheme {
    layouts: &[Layout {
        len: 9,
        template: "##.###.###-#",
        prefixes: &[],
        checks: &[Check { at: 8, over: Span::Prefix(8), weights: W_RG, rule: Rule::Mod11TenAsX }],
    }],
    rejects_repeated: false,
    check_letter: true,
    region_at: None,
};

static PIS: Scheme = Scheme {
    layouts: &[Layout {
        len: 11,
        template: "###.#####.##-#",
        prefixes: &[],
        checks: &[Check { at: 10, over: Span::Prefix(10), weights: W_3_2_9_2, rule: Rule::Mod11 }],
    }],
    rejects_repeated: false,
    check_letter: false,
    region_at: None,
};

// Nine-digit numbers predate the 2013 expansion; the two missing leading
// zeros contribute nothing to the sum, so the tail of the weights applies.
static RENAVAM: Scheme = Scheme {
    layouts: &[
        Layout {
            len: 11,
            template: "###########",
            prefixes: &[],
            checks: &[Check { at: 10, over: Span::Prefix(10), weights: W_3_2_9_2, rule: Rule::Mod11 }],
        },
        Layout {
            len: 9,
            template: "#########",
            prefixes: &[],
            checks: &[Check { at: 8, over: Span::Prefix(8), weights: W_9_2, rule: Rule::Mod11 }],
        },
    ],
    rejects_repeated: false,
    check_letter: false,
    region_at: None,
};

// The region code rides along at weight zero so the reduction can see it.
static VOTER_TITLE: Scheme = Scheme {
    layouts: &[Layout {
        len: 12,
        template: "#### #### ####",
        prefixes: &[],
        checks: &[
            Check {
                at: 10,
                over: Span::Indices(&[8, 9, 0, 1, 2, 3, 4, 5, 6, 7]),
                weights: W_VOTER_FIRST,
                rule: Rule::Electoral,
            },
            Check {
                at: 11,
                over: Span::Indices(&[8, 9, 10]),
                weights: W_VOTER_SECOND,
                rule: Rule::Electoral,
            },
        ],
    }],
    rejects_repeated: false,
    check_letter: false,
    region_at: Some(8),
};

static CERTIFICATE: Scheme = Scheme {
    layouts: &[Layout {
        len: 32,
        template: "###### ## ## #### # ##### ### ####### ##",
        prefixes: &[],
        checks: &[
            Check {
                at: 30,
                over: Span::Prefix(30),
                weights: W_CERTIFICATE_FIRST,
                rule: Rule::Mod11RemainderTenAsOne,
            },
            Check {
                at: 31,
                over: Span::Prefix(31),
                weights: W_CERTIFICATE_SECOND,
                rule: Rule::Mod11RemainderTenAsOne,
            },
        ],
    }],
    rejects_repeated: false,
    check_letter: false,
    region_at: None,
};

// ---------------------------------------------------------------------------
// State registrations
// ---------------------------------------------------------------------------

macro_rules! single {
    ($len:expr, $template:expr, $prefixes:expr, $checks:expr $(,)?) => {
        Scheme {
            layouts: &[Layout {
                len: $len,
                template: $template,
                prefixes: $prefixes,
                checks: $checks,
            }],
            rejects_repeated: false,
            check_letter: false,
            region_at: None,
        }
    };
}

/// Nine digits, one mod-11 digit over the first eight with weights 9..2.
const NINE_MOD11: &[Check] = &[Check { at: 8, over: Span::Prefix(8), weights: W_9_2, rule: Rule::Mod11 }];

const TWO_DIGIT_13: &[Check] = &[
    Check { at: 11, over: Span::Prefix(11), weights: W_4_3_2_9_2, rule: Rule::Mod11 },
    Check { at: 12, over: Span::Prefix(12), weights: W_5_2_9_2, rule: Rule::Mod11 },
];

static IE_AC: Scheme = single!(13, "##.###.###/###-##", &["01"], TWO_DIGIT_13);
static IE_AL: Scheme = single!(9, "##.###.###-#", &["24"], NINE_MOD11);
static IE_AP: Scheme = single!(
    9,
    "##.###.###-#",
    &["03"],
    &[Check { at: 8, over: Span::Prefix(8), weights: W_9_2, rule: Rule::Amapa }],
);
static IE_AM: Scheme = single!(9, "##.###.###-#", &[], NINE_MOD11);

static IE_BA: Scheme = Scheme {
    layouts: &[
        Layout {
            len: 9,
            template: "#######-##",
            prefixes: &[],
            checks: &[
                Check { at: 8, over: Span::Prefix(7), weights: W_8_2, rule: Rule::Bahia { selector: 1 } },
                Check {
                    at: 7,
                    over: Span::Indices(&[0, 1, 2, 3, 4, 5, 6, 8]),
                    weights: W_9_2,
                    rule: Rule::Bahia { selector: 1 },
                },
            ],
        },
        Layout {
            len: 8,
            template: "######-##",
            prefixes: &[],
            checks: &[
                Check { at: 7, over: Span::Prefix(6), weights: W_7_2, rule: Rule::Bahia { selector: 0 } },
                Check {
                    at: 6,
                    over: Span::Indices(&[0, 1, 2, 3, 4, 5, 7]),
                    weights: W_8_2,
                    rule: Rule::Bahia { selector: 0 },
                },
            ],
        },
    ],
    rejects_repeated: false,
    check_letter: false,
    region_at: None,
};

static IE_CE: Scheme = single!(9, "########-#", &[], NINE_MOD11);
static IE_DF: Scheme = single!(13, "##.######.###-##", &["07"], TWO_DIGIT_13);
static IE_ES: Scheme = single!(9, "###.###.##-#", &[], NINE_MOD11);
static IE_GO: Scheme = single!(
    9,
    "##.###.###-#",
    &["10", "11", "15"],
    &[Check { at: 8, over: Span::Prefix(8), weights: W_9_2, rule: Rule::Goias }],
);
static IE_MA: Scheme = single!(9, "##.###.###-#", &["12"], NINE_MOD11);
static IE_MT: Scheme = single!(
    11,
    "##########-#",
    &[],
    &[Check { at: 10, over: Span::Prefix(10), weights: W_3_2_9_2, rule: Rule::Mod11 }],
);
static IE_MS: Scheme = single!(9, "##.###.###-#", &["28", "50"], NINE_MOD11);

// The first digit is computed over the base with a zero inserted after the
// three-digit municipality code; the flattened weights skip that zero.
static IE_MG: Scheme = single!(
    13,
    "###.###.###/####",
    &[],
    &[
        Check { at: 11, over: Span::Prefix(11), weights: W_MG_FIRST, rule: Rule::Mod10DigitSum },
        Check { at: 12, over: Span::Prefix(12), weights: W_MG_SECOND, rule: Rule::Mod11 },
    ],
);

static IE_PA: Scheme = single!(9, "##-######-#", &["15"], NINE_MOD11);
static IE_PB: Scheme = single!(9, "##.###.###-#", &[], NINE_MOD11);
static IE_PR: Scheme = single!(
    10,
    "###.#####-##",
    &[],
    &[
        Check { at: 8, over: Span::Prefix(8), weights: W_PR_FIRST, rule: Rule::Mod11 },
        Check { at: 9, over: Span::Prefix(9), weights: W_PR_SECOND, rule: Rule::Mod11 },
    ],
);

static IE_PE: Scheme = Scheme {
    layouts: &[
        Layout {
            len: 9,
            template: "#######-##",
            prefixes: &[],
            checks: &[
                Check { at: 7, over: Span::Prefix(7), weights: W_8_2, rule: Rule::Mod11 },
                Check { at: 8, over: Span::Prefix(8), weights: W_9_2, rule: Rule::Mod11 },
            ],
        },
        Layout {
            len: 14,
            template: "##.#.###.#######-#",
            prefixes: &[],
            checks: &[Check { at: 13, over: Span::Prefix(13), weights: W_PE_LEGACY, rule: Rule::Mod11Rollover }],
        },
    ],
    rejects_repeated: false,
    check_letter: false,
    region_at: None,
};

static IE_PI: Scheme = single!(9, "##.###.###-#", &["19"], NINE_MOD11);
static IE_RJ: Scheme = single!(
    8,
    "##.###.##-#",
    &[],
    &[Check { at: 7, over: Span::Prefix(7), weights: W_RJ, rule: Rule::Mod11 }],
);

static IE_RN: Scheme = Scheme {
    layouts: &[
        Layout {
            len: 9,
            template: "##.###.###-#",
            prefixes: &["20"],
            checks: NINE_MOD11,
        },
        Layout {
            len: 10,
            template: "##.#.###.###-#",
            prefixes: &["20"],
            checks: &[Check { at: 9, over: Span::Prefix(9), weights: W_10_2, rule: Rule::Mod11 }],
        },
    ],
    rejects_repeated: false,
    check_letter: false,
    region_at: None,
};

static IE_RS: Scheme = single!(
    10,
    "###/#######",
    &[],
    &[Check { at: 9, over: Span::Prefix(9), weights: W_RS, rule: Rule::Mod11 }],
);
static IE_RO: Scheme = single!(
    14,
    "#############-#",
    &[],
    &[Check { at: 13, over: Span::Prefix(13), weights: W_6_2_9_2, rule: Rule::Mod11Rollover }],
);
static IE_RR: Scheme = single!(
    9,
    "########-#",
    &["24"],
    &[Check { at: 8, over: Span::Prefix(8), weights: W_RR, rule: Rule::Mod9 }],
);
static IE_SC: Scheme = single!(9, "###.###.###", &[], NINE_MOD11);
static IE_SP: Scheme = single!(
    12,
    "###.###.###.###",
    &[],
    &[
        Check { at: 8, over: Span::Prefix(8), weights: W_SP_FIRST, rule: Rule::Mod11Remainder },
        Check { at: 11, over: Span::Prefix(11), weights: W_SP_SECOND, rule: Rule::Mod11Remainder },
    ],
);
static IE_SE: Scheme = single!(9, "##.###.###-#", &[], NINE_MOD11);

// Eleven-digit numbers carry a two-digit activity code at positions 3-4
// that the verifier digit skips.
static IE_TO: Scheme = Scheme {
    layouts: &[
        Layout {
            len: 9,
            template: "##.###.###-#",
            prefixes: &[],
            checks: NINE_MOD11,
        },
        Layout {
            len: 11,
            template: "##.##.######-#",
            prefixes: &[],
            checks: &[Check {
                at: 10,
                over: Span::Indices(&[0, 1, 4, 5, 6, 7, 8, 9]),
                weights: W_9_2,
                rule: Rule::Mod11,
            }],
        },
    ],
    rejects_repeated: false,
    check_letter: false,
    region_at: None,
};

fn state_registration(uf: Uf) -> &'static Scheme {
    match uf {
        Uf::Ac => &IE_AC,
        Uf::Al => &IE_AL,
        Uf::Ap => &IE_AP,
        Uf::Am => &IE_AM,
        Uf::Ba => &IE_BA,
        Uf::Ce => &IE_CE,
        Uf::Df => &IE_DF,
        Uf::Es => &IE_ES,
        Uf::Go => &IE_GO,
        Uf::Ma => &IE_MA,
        Uf::Mt => &IE_MT,
        Uf::Ms => &IE_MS,
        Uf::Mg => &IE_MG,
        Uf::Pa => &IE_PA,
        Uf::Pb => &IE_PB,
        Uf::Pr => &IE_PR,
        Uf::Pe => &IE_PE,
        Uf::Pi => &IE_PI,
        Uf::Rj => &IE_RJ,
        Uf::Rn => &IE_RN,
        Uf::Rs => &IE_RS,
        Uf::Ro => &IE_RO,
        Uf::Rr => &IE_RR,
        Uf::Sc => &IE_SC,
        Uf::Sp => &IE_SP,
        Uf::Se => &IE_SE,
        Uf::To => &IE_TO,
    }
}
