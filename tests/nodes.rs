use regex_compose::{BuildError, ErrorKind, Group, Regex, RegexNode, DIGIT, WORD};

#[test]
fn literal_renders_verbatim() {
    assert_eq!(Regex::new("spam"), "spam");
    assert_eq!(Regex::new(r"a.b\d"), r"a.b\d");
}

#[test]
fn escaped_literal_quotes_metacharacters() {
    assert_eq!(Regex::escaped("1+1=2?"), r"1\+1=2\?");
}

#[test]
fn concatenation_joins_without_separator() {
    let joined = Regex::concat(["spam", "eggs", "bacon"]).expect("non-empty concat");
    assert_eq!(joined, "spameggsbacon");
    assert_eq!(Regex::new("spam") + "eggs", "spameggs");
    assert_eq!(Regex::new("spam").then(Regex::new("eggs")), "spameggs");
}

#[test]
fn concatenation_flattens_nested_concats() {
    let left = Regex::new("a") + "b";
    let joined = left + (Regex::new("c") + "d");
    match joined.node() {
        RegexNode::Concat(nodes) => assert_eq!(nodes.len(), 4),
        other => panic!("expected concat node, got {other:?}"),
    }
}

#[test]
fn empty_concatenation_is_rejected() {
    let err = Regex::concat(Vec::<Regex>::new()).expect_err("empty concat");
    assert_eq!(err, BuildError::EmptyConcat);
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn alternation_joins_with_bar_and_no_group() {
    assert_eq!(Regex::new("spam") | "eggs", "spam|eggs");
    assert_eq!(Regex::alternation(["spam", "eggs"]).unwrap(), "spam|eggs");
    assert_eq!(Regex::new("spam") + (Regex::new("spam") | "eggs"), "spamspam|eggs");
}

#[test]
fn chained_alternation_is_flat() {
    let alt = (Regex::new("a") | "b") | "c";
    match alt.node() {
        RegexNode::Alt(branches) => assert_eq!(branches.len(), 3),
        other => panic!("expected alternation node, got {other:?}"),
    }
    assert_eq!(alt, "a|b|c");
    assert_eq!(Regex::new("a").or(Regex::new("b").or("c")), "a|b|c");
}

#[test]
fn alternation_needs_two_branches() {
    let err = Regex::alternation(["spam"]).expect_err("single branch");
    assert_eq!(err, BuildError::TooFewAlternatives { found: 1 });
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn scoped_alternation_uses_non_capturing_group() {
    let scoped = Regex::new("spam") + (Regex::new("spam") | "eggs").non_capturing();
    assert_eq!(scoped, "spam(?:spam|eggs)");
}

#[test]
fn char_sets_keep_item_order() {
    assert_eq!(Regex::any_of(["spam"]).unwrap(), "[spam]");
    assert_eq!(Regex::any_of([('a', 'm')]).unwrap(), "[a-m]");
    assert_eq!(Regex::none_of(["s", "p"]).unwrap(), "[^sp]");
    assert_eq!(Regex::any_of(['z', 'a', 'z']).unwrap(), "[zaz]");
}

#[test]
fn char_sets_mix_items_and_ranges() {
    use regex_compose::SetItem;

    let set = Regex::any_of([
        SetItem::from("s"),
        SetItem::from("p"),
        SetItem::from(("a", "m")),
    ])
    .unwrap();
    assert_eq!(set, "[spa-m]");
    let negated = Regex::none_of([SetItem::from("s"), SetItem::from(('a', 'm'))]).unwrap();
    assert_eq!(negated, "[^sa-m]");
}

#[test]
fn char_sets_escape_set_metacharacters() {
    assert_eq!(Regex::any_of(["]", "^", "-", "["]).unwrap(), r"[\]\^\-\[]");
    assert_eq!(Regex::any_of(["a-z"]).unwrap(), r"[a\-z]");
}

#[test]
fn char_sets_pass_escapes_through() {
    assert_eq!(Regex::any_of([r"\d", r"\]", "_"]).unwrap(), r"[\d\]_]");
    assert_eq!(Regex::any_of([&*DIGIT, &*WORD]).unwrap(), r"[\d\w]");
    assert_eq!(Regex::any_of([r"\"]).unwrap(), r"[\\]");
}

#[test]
fn empty_char_sets_are_rejected() {
    assert_eq!(
        Regex::any_of(Vec::<&str>::new()).expect_err("no items"),
        BuildError::EmptySet
    );
    assert_eq!(Regex::any_of([""]).expect_err("empty item"), BuildError::EmptySetItem);
    assert_eq!(
        Regex::none_of([("a", "")]).expect_err("empty range end"),
        BuildError::EmptySetItem
    );
}

#[test]
fn group_forms() {
    assert_eq!(Regex::new("spam").group(), "(spam)");
    assert_eq!(Regex::new("spam").named("eggs").unwrap(), "(?P<eggs>spam)");
    assert_eq!(Regex::new("spam").non_capturing(), "(?:spam)");
    assert_eq!(Regex::backref(42).unwrap(), r"\42");
    assert_eq!(Regex::named_backref("eggs").unwrap(), "(?P=eggs)");
}

#[test]
fn group_builder_matches_shortcuts() {
    assert_eq!(Group::new().expr("spam").build().unwrap(), "(spam)");
    assert_eq!(
        Group::new().expr("spam").capture(false).build().unwrap(),
        "(?:spam)"
    );
    assert_eq!(Group::new().number(1).build().unwrap(), r"\1");
    assert_eq!(Group::new().name("eggs").build().unwrap(), "(?P=eggs)");
}

#[test]
fn group_name_must_be_an_identifier() {
    for name in ["", "1st", "spam eggs", "a-b"] {
        let err = Regex::new("x").named(name).expect_err("invalid name");
        assert_eq!(err, BuildError::InvalidGroupName { name: name.to_string() });
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert!(Regex::named_backref("not valid").is_err());
}

#[test]
fn group_argument_combinations_are_checked() {
    let err = Group::new().number(42).name("spam").build().unwrap_err();
    assert_eq!(err, BuildError::NamedNumberReference { name: "spam".into() });
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = Group::new().expr("spam").name("spam").capture(false).build().unwrap_err();
    assert_eq!(err, BuildError::NamedNonCapturing { name: "spam".into() });

    let err = Group::new().number(3).capture(false).build().unwrap_err();
    assert_eq!(err, BuildError::NonCapturingReference);

    let err = Group::new().name("spam").capture(false).build().unwrap_err();
    assert_eq!(err, BuildError::NonCapturingReference);

    assert_eq!(Group::new().build().unwrap_err(), BuildError::EmptyGroup);

    let err = Group::new().expr("spam").number(1).build().unwrap_err();
    assert_eq!(err, BuildError::ChildWithReference { number: 1 });
    assert_eq!(err.kind(), ErrorKind::Configuration);
    let err = Group::new().number(1).expr("spam").build().unwrap_err();
    assert_eq!(err, BuildError::ChildWithReference { number: 1 });
}

#[test]
fn group_numbers_start_at_one() {
    let err = Regex::backref(0).expect_err("group zero");
    assert_eq!(err, BuildError::InvalidGroupNumber { number: 0 });
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn backreferences_are_not_checked_against_defined_groups() {
    assert_eq!(Regex::new("spam") + Regex::backref(9).unwrap(), r"spam\9");
    assert_eq!(Regex::named_backref("missing").unwrap(), "(?P=missing)");
}

#[test]
fn lookaround_wrappers() {
    assert_eq!(Regex::new("spam").lookahead(), "(?=spam)");
    assert_eq!(Regex::new("spam").negative_lookahead(), "(?!spam)");
    assert_eq!(Regex::new("spam").lookbehind(), "(?<=spam)");
    assert_eq!(Regex::new("spam").negative_lookbehind(), "(?<!spam)");
}

#[test]
fn lookahead_composition_suffixes_the_assertion() {
    let spam = Regex::new("spam");
    assert_eq!(spam.followed_by("eggs"), "spam(?=eggs)");
    assert_eq!(spam.not_followed_by("eggs"), "spam(?!eggs)");
}

#[test]
fn lookbehind_composition_prefixes_the_assertion() {
    let eggs = Regex::new("eggs");
    assert_eq!(eggs.preceded_by("spam"), "(?<=spam)eggs");
    assert_eq!(eggs.not_preceded_by("spam"), "(?<!spam)eggs");
}

#[test]
fn conditional_with_and_without_else() {
    let with_else =
        Regex::conditional("spam", "eggs", Some(Regex::new("bacon"))).unwrap();
    assert_eq!(with_else, "(?(spam)eggs|bacon)");
    assert_eq!(
        Regex::conditional(42u32, "eggs", Some("bacon")).unwrap(),
        "(?(42)eggs|bacon)"
    );
    assert_eq!(Regex::conditional(1u32, "spam", None::<Regex>).unwrap(), "(?(1)spam)");
}

#[test]
fn conditional_group_reference_is_validated() {
    assert_eq!(
        Regex::conditional(0u32, "spam", None::<Regex>).unwrap_err(),
        BuildError::InvalidGroupNumber { number: 0 }
    );
    assert_eq!(
        Regex::conditional("no good", "spam", None::<Regex>).unwrap_err(),
        BuildError::InvalidGroupName { name: "no good".into() }
    );
}

#[test]
fn comment_renders_and_rejects_terminator() {
    assert_eq!(Regex::comment("spam").unwrap(), "(?#spam)");
    let err = Regex::comment("spam) eggs").expect_err("contains terminator");
    assert_eq!(err, BuildError::CommentTerminator { text: "spam) eggs".into() });
    assert_eq!(err.kind(), ErrorKind::Validation);
}
