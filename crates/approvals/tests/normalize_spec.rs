use approvals::normalize;

const SAMPLES: &[&str] = &[
    "KTHXBYE",
    "the spec",
    "a 2009 party",
    "the !@#$%^&*(){}+| name",
    "omf             g",
    "\nThe::Class       \t \r\n \x0cname\n",
    "  leading and trailing  ",
    "__already_snake__",
    "MiXeD CaSe 42 Things",
    "tabs\tand\nnewlines\r\n",
    "crate::module::Type::method",
    "---",
    "straße",
    "ﬁle name",
    "Große Straße",
    "",
];

#[test]
fn given_uppercase_when_normalize_then_downcases() {
    assert_eq!(normalize("KTHXBYE"), "kthxbye");
}

#[test]
fn given_spaces_when_normalize_then_replaced_with_underscores() {
    assert_eq!(normalize("the spec"), "the_spec");
}

#[test]
fn given_digits_when_normalize_then_left_alone() {
    assert_eq!(normalize("a 2009 party"), "a_2009_party");
}

#[test]
fn given_funky_characters_when_normalize_then_deleted() {
    assert_eq!(normalize("the !@#$%^&*(){}+| name"), "the_name");
}

#[test]
fn given_space_run_when_normalize_then_collapsed_to_one_underscore() {
    assert_eq!(normalize("omf             g"), "omf_g");
}

#[test]
fn given_all_sorts_of_whitespace_when_normalize_then_removed() {
    let name = "
The::Class       \t \r\n \x0cname
      ";
    assert_eq!(normalize(name), "the_class_name");
}

#[test]
fn given_letters_that_uppercase_to_ascii_when_normalize_then_folded_in_every_case() {
    assert_eq!(normalize("straße"), "strasse");
    assert_eq!(normalize("STRASSE"), normalize("straße"));
    assert_eq!(normalize("ﬁle"), "file");
    assert_eq!(normalize("ﬁle"), normalize(&"ﬁle".to_uppercase()));
}

#[test]
fn given_any_input_when_normalize_then_only_safe_characters_remain() {
    for sample in SAMPLES {
        let name = normalize(sample);
        assert!(
            name.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "unsafe character in {:?}",
            name
        );
        assert!(!name.starts_with('_'), "leading underscore in {:?}", name);
        assert!(!name.ends_with('_'), "trailing underscore in {:?}", name);
        assert!(!name.contains("__"), "underscore run in {:?}", name);
    }
}

#[test]
fn given_normalized_name_when_normalize_again_then_unchanged() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn given_case_variants_when_normalize_then_same_name() {
    for sample in SAMPLES {
        let name = normalize(sample);
        assert_eq!(normalize(&sample.to_uppercase()), name);
        assert_eq!(normalize(&sample.to_lowercase()), name);
    }
}
