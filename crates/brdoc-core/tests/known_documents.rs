//! Published and hand-checked document numbers.
//!
//! State registration numbers are the examples printed by each state's
//! Sintegra page. Every vector must validate as-is; mutating any single
//! digit of the selected vectors must not.

use brdoc_core::{parse, validate, DocumentKind, Rejection, Uf};

fn assert_valid(kind: DocumentKind, input: &str) {
    let verdict = validate(kind, input);
    assert!(
        verdict.valid,
        "{kind} {input:?} rejected: {:?}",
        verdict.message
    );
}

/// Replace digit `index` (counted over digits only) with each other value
/// and assert every variant is rejected.
fn assert_every_mutation_rejected(kind: DocumentKind, raw: &str, positions: std::ops::Range<usize>) {
    let digits: Vec<u8> = raw.bytes().map(|b| b - b'0').collect();
    for index in positions {
        for replacement in 0..=9u8 {
            if replacement == digits[index] {
                continue;
            }
            let mutated: String = digits
                .iter()
                .enumerate()
                .map(|(i, &d)| if i == index { replacement } else { d })
                .map(|d| char::from(b'0' + d))
                .collect();
            assert!(
                !validate(kind, &mutated).valid,
                "{kind}: {mutated} accepted after mutating position {index}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// National documents
// ---------------------------------------------------------------------------

#[test]
fn cpf() {
    assert_valid(DocumentKind::Cpf, "111.444.777-35");
    assert_valid(DocumentKind::Cpf, "11144477735");
}

#[test]
fn cpf_base_mutations_are_rejected() {
    assert_every_mutation_rejected(DocumentKind::Cpf, "11144477735", 0..9);
}

#[test]
fn cpf_every_repdigit_is_degenerate() {
    for d in 0..=9 {
        let input = d.to_string().repeat(11);
        let verdict = validate(DocumentKind::Cpf, &input);
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, Some(Rejection::DegenerateInput), "{input}");
    }
}

#[test]
fn cnpj() {
    assert_valid(DocumentKind::Cnpj, "11.222.333/0001-81");
    assert_eq!(
        parse(DocumentKind::Cnpj, "00.000.000/0000-00"),
        Err(Rejection::DegenerateInput)
    );
}

#[test]
fn pis() {
    assert_valid(DocumentKind::Pis, "120.56310.12-2");
    assert_valid(DocumentKind::Pis, "12345678900");
}

#[test]
fn renavam() {
    assert_valid(DocumentKind::Renavam, "00639884962");
    assert_valid(DocumentKind::Renavam, "63988989180");
    assert_valid(DocumentKind::Renavam, "01234567897");
}

#[test]
fn renavam_legacy_nine_digits() {
    // The legacy form drops the two leading zeros.
    assert_valid(DocumentKind::Renavam, "639884962");
    let doc = parse(DocumentKind::Renavam, "639884962").unwrap();
    assert_eq!(doc.formatted(), "639884962");
}

#[test]
fn renavam_base_mutations_are_rejected() {
    assert_every_mutation_rejected(DocumentKind::Renavam, "00639884962", 0..10);
}

#[test]
fn rg() {
    for input in [
        "24.678.131-2",
        "12.345.678-2",
        "11.111.111-0",
        "10.000.002-2",
        "24.157.323-3",
        "10.000.006-X",
    ] {
        assert_valid(DocumentKind::Rg, input);
    }
}

#[test]
fn voter_title() {
    assert_valid(DocumentKind::VoterTitle, "0043 5687 0906");
}

#[test]
fn voter_title_sp_and_mg_turn_zero_into_one() {
    // Same base: SP yields first check digit 1, RJ yields 0.
    assert_valid(DocumentKind::VoterTitle, "1000 0001 0116");
    assert_valid(DocumentKind::VoterTitle, "1000 0001 0302");
}

#[test]
fn voter_title_decomposes_into_base_region_and_checks() {
    let doc = parse(DocumentKind::VoterTitle, "004356870906").unwrap();
    let raw = doc.digits();
    assert_eq!(&raw[..8], "00435687");
    assert_eq!(&raw[8..10], "09");
    assert_eq!(&raw[10..], "06");
    assert_eq!(doc.states(), vec![Uf::Sc]);
}

#[test]
fn voter_title_wrong_lengths() {
    for input in ["0043 5687 090", "0043 5687 09066", ""] {
        assert!(matches!(
            parse(DocumentKind::VoterTitle, input),
            Err(Rejection::LengthMismatch { .. })
        ));
    }
}

#[test]
fn certificate() {
    assert_valid(DocumentKind::Certificate, "52601815908301661318609139099615");
    let doc = parse(DocumentKind::Certificate, "52601815908301661318609139099615").unwrap();
    assert_eq!(doc.formatted(), "526018 15 90 8301 6 61318 609 1390996 15");
}

// ---------------------------------------------------------------------------
// State registrations
// ---------------------------------------------------------------------------

const STATE_REGISTRATIONS: &[(Uf, &str)] = &[
    (Uf::Ac, "01.004.823/001-12"),
    (Uf::Al, "24000004-8"),
    (Uf::Ap, "03.012.345-9"),
    (Uf::Ba, "123456-63"),
    (Uf::Ba, "612345-57"),
    (Uf::Ba, "1000003-06"),
    (Uf::Ce, "06000001-5"),
    (Uf::Df, "07.300001.001-09"),
    (Uf::Es, "99999999-0"),
    (Uf::Go, "10.987.654-7"),
    (Uf::Ma, "12000038-5"),
    (Uf::Mt, "0013000001-9"),
    (Uf::Mg, "062.307.904/0081"),
    (Uf::Pa, "15-999999-5"),
    (Uf::Pb, "06000001-5"),
    (Uf::Pr, "123.45678-50"),
    (Uf::Pe, "0321418-40"),
    (Uf::Pi, "19.301.656-7"),
    (Uf::Rj, "99.999.99-3"),
    (Uf::Rn, "20.040.040-1"),
    (Uf::Rn, "20.0.040.040-0"),
    (Uf::Rs, "224/3658792"),
    (Uf::Ro, "0000000062521-3"),
    (Uf::Rr, "24006628-1"),
    (Uf::Sc, "251.040.852"),
    (Uf::Sp, "110.042.490.114"),
    (Uf::Se, "27123456-3"),
    (Uf::To, "29.010.227-8"),
];

#[test]
fn state_registrations() {
    for &(uf, input) in STATE_REGISTRATIONS {
        assert_valid(DocumentKind::StateRegistration(uf), input);
    }
}

#[test]
fn state_registrations_are_not_interchangeable() {
    assert!(!validate(DocumentKind::StateRegistration(Uf::Sp), "224/3658792").valid);
    assert!(!validate(DocumentKind::StateRegistration(Uf::Rs), "110.042.490.114").valid);
}

#[test]
fn state_registration_formatting() {
    let cases = [
        (Uf::Mg, "0623079040081", "062.307.904/0081"),
        (Uf::Sp, "110042490114", "110.042.490.114"),
        (Uf::Ba, "100000306", "1000003-06"),
        (Uf::Ba, "12345663", "123456-63"),
        (Uf::Rn, "2000400400", "20.0.040.040-0"),
    ];
    for (uf, raw, formatted) in cases {
        let doc = parse(DocumentKind::StateRegistration(uf), raw).unwrap();
        assert_eq!(doc.formatted(), formatted);
    }
}

#[test]
fn state_registration_prefixes() {
    assert_eq!(
        parse(DocumentKind::StateRegistration(Uf::Ac), "02.004.823/001-12"),
        Err(Rejection::UnexpectedPrefix {
            expected: vec!["01"],
        })
    );
    assert!(matches!(
        parse(DocumentKind::StateRegistration(Uf::Go), "20.987.654-7"),
        Err(Rejection::UnexpectedPrefix { .. })
    ));
}

#[test]
fn bahia_mutations_are_rejected() {
    assert_every_mutation_rejected(DocumentKind::StateRegistration(Uf::Ba), "100000306", 7..9);
}

#[test]
fn sao_paulo_check_positions() {
    // Digits 9 and 12 are verifier digits.
    let err = parse(DocumentKind::StateRegistration(Uf::Sp), "110.042.491.114").unwrap_err();
    assert_eq!(
        err,
        Rejection::ChecksumMismatch {
            position: 8,
            expected: '0',
            found: '1',
        }
    );
}
