//! Published BIP-39 vectors: entropy to phrase, and phrase plus "TREZOR" to seed.

use hdseed_core::{Mnemonic, MnemonicError, Seed, derive_seed, validate};

struct Vector {
    entropy: &'static str,
    phrase: &'static str,
    seed: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        entropy: "00000000000000000000000000000000",
        phrase: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        seed: "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
    },
    Vector {
        entropy: "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        phrase: "legal winner thank year wave sausage worth useful legal winner thank yellow",
        seed: "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607",
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffff",
        phrase: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        seed: "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069",
    },
    Vector {
        entropy: "808080808080808080808080808080808080808080808080",
        phrase: "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter always",
        seed: "107d7c02a5aa6f38c58083ff74f04c607c2d2c0ecc55501dadd72d025b751bc27fe913ffb796f841c49b1d33b610cf0e91d3aa239027f5e99fe4ce9e5088cd65",
    },
    Vector {
        entropy: "8080808080808080808080808080808080808080808080808080808080808080",
        phrase: "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
        seed: "c0c519bd0e91a2ed54357d9d1ebef6f5af218a153624cf4f2da911a0ed8f7a09e2ef61af0aca007096df430022f7a2b6fb91661a9589097069720d015e4e982f",
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        phrase: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        seed: "dd48c104698c30cfe2b6142103248622fb7bb0ff692eebb00089b32d22484e1613912f0a5b694407be899ffd31ed3992c456cdf60f5d4564b8ba3f05a69890ad",
    },
    Vector {
        entropy: "9e885d952ad362caeb4efe34a8e91bd2",
        phrase: "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        seed: "274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028",
    },
    Vector {
        entropy: "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
        phrase: "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy gospel tennis maple dilemma loan word shrug inflict delay length",
        seed: "64c87cde7e12ecf6704ab95bb1408bef047c22db4cc7491c4271d170a1b213d20b385bc1588d9c7b38f1b39d415665b8a9030c9ec653d75e65f847d8fc1fc440",
    },
];

#[test]
fn entropy_encodes_to_phrase() {
    for v in VECTORS {
        let entropy = hex::decode(v.entropy).unwrap();
        let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
        assert_eq!(mnemonic.phrase(), v.phrase, "entropy {}", v.entropy);
    }
}

#[test]
fn phrase_decodes_to_entropy() {
    for v in VECTORS {
        let mnemonic = Mnemonic::parse(v.phrase).unwrap();
        assert_eq!(hex::encode(mnemonic.entropy()), v.entropy);
        validate(v.phrase).unwrap();
    }
}

#[test]
fn trezor_passphrase_seeds() {
    for v in VECTORS {
        let seed = derive_seed(v.phrase, "TREZOR").unwrap();
        assert_eq!(hex::encode(seed.as_bytes()), v.seed, "phrase {}", v.phrase);
    }
}

#[test]
fn empty_passphrase_seed() {
    let seed = derive_seed(VECTORS[0].phrase, "").unwrap();
    assert_eq!(
        hex::encode(seed.as_bytes()),
        "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
    );
}

#[test]
fn seed_does_not_validate_phrase() {
    // Raw stretching accepts anything; validation is a separate step.
    let raw = Seed::derive("not a mnemonic", "");
    assert_ne!(raw.as_bytes(), &[0u8; 64]);
    assert!(matches!(
        derive_seed("not a mnemonic", ""),
        Err(MnemonicError::InvalidMnemonic(_))
    ));
}

#[test]
fn last_word_carries_checksum() {
    let phrase = VECTORS[1].phrase.replace("yellow", "year");
    assert!(matches!(
        validate(&phrase),
        Err(MnemonicError::ChecksumMismatch { .. })
    ));
}

#[test]
fn unknown_word_reports_position() {
    let phrase = VECTORS[1].phrase.replace("wave", "wavy");
    assert_eq!(
        validate(&phrase),
        Err(MnemonicError::UnknownWord {
            word: "wavy".into(),
            position: 4,
        })
    );
}

#[test]
fn unsupported_bit_sizes() {
    for bits in [0, 100, 127, 150, 300, 512] {
        assert_eq!(
            Mnemonic::generate(bits).unwrap_err(),
            MnemonicError::InvalidBitSize { bits }
        );
    }
}
