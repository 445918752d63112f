use lexibuild::{parse_corpus, Alphabet};

#[test]
fn parses_rank_word_frequency_lines_in_order() {
    let data = "1\tde\t117064\n2\tla\t89132\n3\tque\t73219\n";
    let entries = parse_corpus(data.as_bytes(), &Alphabet::catalan()).unwrap();
    let words: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(words, vec!["de", "la", "que"]);
    assert_eq!(entries[0].frequency, 117064);
}

#[test]
fn words_are_trimmed_and_lowercased() {
    let data = "1\tBarcelona \t500\n";
    let entries = parse_corpus(data.as_bytes(), &Alphabet::catalan()).unwrap();
    assert_eq!(entries[0].text, "barcelona");
}

#[test]
fn short_and_malformed_lines_are_skipped() {
    let data = "1\tsol\n\n2\tcasa\tmolts\n3\tmar\t42\n";
    let entries = parse_corpus(data.as_bytes(), &Alphabet::catalan()).unwrap();
    let words: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(words, vec!["mar"]);
}

#[test]
fn invalid_words_are_dropped() {
    let data = "1\t2021\t900\n2\tl'any\t800\n3\t···\t700\n4\tcafé?\t600\n";
    let entries = parse_corpus(data.as_bytes(), &Alphabet::catalan()).unwrap();
    let words: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(words, vec!["l'any"]);
}

#[test]
fn accented_catalan_words_pass_the_master_filter() {
    let data = "1\tmón\t100\n2\taixò\t90\n3\tl·lengua\t80\n";
    let entries = parse_corpus(data.as_bytes(), &Alphabet::catalan()).unwrap();
    assert_eq!(entries.len(), 3);
}
