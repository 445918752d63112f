use lexibuild::{features, Alphabet, Feature};

#[test]
fn letters_and_symbols_are_classified() {
    let alphabet = Alphabet::new("ab", "'", &[]);
    let set = features("a'b", &alphabet);
    assert!(set.contains(&Feature::Letter('a')));
    assert!(set.contains(&Feature::Letter('b')));
    assert!(set.contains(&Feature::Symbol('\'')));
    assert_eq!(set.len(), 3);
}

#[test]
fn out_of_alphabet_characters_contribute_nothing() {
    let alphabet = Alphabet::new("ab", "", &[]);
    let set = features("axb", &alphabet);
    assert_eq!(set.len(), 2);
    assert!(!set.contains(&Feature::Letter('x')));
}

#[test]
fn digraph_emitted_once_regardless_of_occurrences() {
    let alphabet = Alphabet::new("lu", "", &["ll"]);
    let set = features("llull", &alphabet);
    let digraphs = set
        .iter()
        .filter(|f| matches!(f, Feature::Digraph(_)))
        .count();
    assert_eq!(digraphs, 1);
    assert!(set.contains(&Feature::Digraph("ll".to_string())));
}

#[test]
fn digraph_matches_across_whole_word() {
    let alphabet = Alphabet::new("abcqu", "", &["qu"]);
    assert!(features("baqua", &alphabet).contains(&Feature::Digraph("qu".to_string())));
    assert!(!features("quqless", &alphabet).is_empty());
    assert!(!features("qaub", &alphabet).contains(&Feature::Digraph("qu".to_string())));
}

#[test]
fn extraction_is_pure() {
    let alphabet = Alphabet::catalan();
    let a = features("l·lengua", &alphabet);
    let b = features("l·lengua", &alphabet);
    assert_eq!(a, b);
}

#[test]
fn validity_rejects_empty_and_symbol_only_words() {
    let alphabet = Alphabet::catalan();
    assert!(!alphabet.is_valid_word(""));
    assert!(!alphabet.is_valid_word("'"));
    assert!(!alphabet.is_valid_word("-·"));
    assert!(alphabet.is_valid_word("l'aigua"));
}

#[test]
fn validity_rejects_out_of_alphabet_characters() {
    let alphabet = Alphabet::catalan();
    assert!(!alphabet.is_valid_word("anys2"));
    assert!(!alphabet.is_valid_word("straße"));
    assert!(alphabet.is_valid_word("català"));
}

#[test]
fn extend_grows_and_tolerates_duplicate_digraphs() {
    let mut alphabet = Alphabet::new("a", "", &["ll"]);
    alphabet.extend("b", "'", &["ll".to_string(), "ny".to_string()]);
    assert!(alphabet.is_letter('a'));
    assert!(alphabet.is_letter('b'));
    assert!(alphabet.is_symbol('\''));
    assert_eq!(alphabet.digraphs, vec!["ll", "ll", "ny"]);
}

#[test]
fn target_features_cover_all_three_kinds() {
    let alphabet = Alphabet::new("ab", "-", &["ab"]);
    let target = alphabet.target_features();
    assert_eq!(target.len(), 4);
    assert!(target.contains(&Feature::Letter('a')));
    assert!(target.contains(&Feature::Symbol('-')));
    assert!(target.contains(&Feature::Digraph("ab".to_string())));
}
