//! Conversions across all three cases

use snaker::{split, to_lower_camel, to_snake, to_upper_camel};

/// Same identifier as (snake, UpperCamel, lowerCamel)
const TRIPLES: &[[&str; 3]] = &[
    ["one", "One", "one"],
    ["o_n_e", "ONE", "oNE"],
    ["id", "ID", "id"],
    ["i", "I", "i"],
    [
        "this_has_to_be_converted_correctly_id",
        "ThisHasToBeConvertedCorrectlyID",
        "thisHasToBeConvertedCorrectlyID",
    ],
    ["this_id_is_fine", "ThisIDIsFine", "thisIDIsFine"],
    ["this_https_connection", "ThisHTTPSConnection", "thisHTTPSConnection"],
    [
        "hello_https_connection_id",
        "HelloHTTPSConnectionID",
        "helloHTTPSConnectionID",
    ],
    ["https_id", "HTTPSID", "httpsID"],
    ["project_id", "ProjectID", "projectID"],
];

const CONVERTERS: [(&str, fn(&str) -> String); 3] = [
    ("snake", to_snake),
    ("upper_camel", to_upper_camel),
    ("lower_camel", to_lower_camel),
];

#[test]
fn test_every_form_converts_to_every_form() {
    for triple in TRIPLES {
        for (target, (name, convert)) in CONVERTERS.iter().enumerate() {
            for &source in triple.iter() {
                assert_eq!(
                    convert(source),
                    triple[target],
                    "{} -> {}",
                    source,
                    name
                );
            }
        }
    }
}

#[test]
fn test_round_trips_through_other_forms() {
    for triple in TRIPLES {
        for (i, (name, convert)) in CONVERTERS.iter().enumerate() {
            let (via_name, via) = CONVERTERS[(i + 1) % 3];
            let (other_name, other) = CONVERTERS[(i + 2) % 3];

            for &source in triple.iter() {
                assert_eq!(
                    convert(via(source).as_str()),
                    triple[i],
                    "{} -> {} -> {}",
                    source,
                    via_name,
                    name
                );
                assert_eq!(
                    convert(via(other(source).as_str()).as_str()),
                    triple[i],
                    "{} -> {} -> {} -> {}",
                    source,
                    other_name,
                    via_name,
                    name
                );
            }
        }
    }
}

#[test]
fn test_longest_initialism_wins() {
    assert_eq!(split("HTTPSID"), vec!["HTTPS", "ID"]);
    assert_eq!(to_snake("HTTPSID"), "https_id");
}

#[test]
fn test_initialisms_only_recognized_in_uppercase() {
    assert_eq!(to_snake("HttpsId"), "https_id");
    assert_eq!(to_snake("userId"), "user_id");
    assert_eq!(to_upper_camel("userId"), "UserID");
    assert_eq!(to_snake("userid"), "userid");
}

#[test]
fn test_upper_camel_keeps_word_tails() {
    assert_eq!(to_upper_camel("iPhone_model"), "IPhoneModel");
    assert_eq!(to_upper_camel("maxValue"), "MaxValue");
}

#[test]
fn test_stray_underscores() {
    assert_eq!(to_snake("__init__"), "__init__");
    assert_eq!(to_upper_camel("__init__"), "Init");
    assert_eq!(to_lower_camel("__init__"), "Init");
    assert_eq!(to_lower_camel("user__id"), "userID");
}

#[test]
fn test_empty_input() {
    assert!(split("").is_empty());
    assert!(snaker::split_camel("").is_empty());
    assert!(snaker::split_snake("").is_empty());
    assert_eq!(to_snake(""), "");
    assert_eq!(to_upper_camel(""), "");
    assert_eq!(to_lower_camel(""), "");
}

#[test]
fn test_unusual_input_keeps_every_character() {
    let camel = ["123", "ÀÉÎ", "a-b c", "日本語ID", "IDé", "AHTTPSIDURL", "ǅx", "éID"];
    for s in camel {
        assert_eq!(split(s).concat(), s, "split_camel({:?})", s);
        assert_eq!(to_snake(s).replace('_', ""), s.to_lowercase(), "to_snake({:?})", s);
    }

    let snake = ["ﬁle_name", "_", "__", "ID_", "a__b", "_日本語_id"];
    for s in snake {
        assert_eq!(split(s).join("_"), s, "split_snake({:?})", s);
        assert_eq!(to_snake(s), s.to_lowercase(), "to_snake({:?})", s);
        assert!(!to_upper_camel(s).contains('_'), "to_upper_camel({:?})", s);
        assert!(!to_lower_camel(s).contains('_'), "to_lower_camel({:?})", s);
    }
}
