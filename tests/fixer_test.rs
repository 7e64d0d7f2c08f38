use contraction_fix::prelude::*;

fn fixer() -> ContractionFixer {
    ContractionFixer::new(FixerConfig::default()).unwrap()
}

#[test]
fn test_basic_contractions() {
    let fixer = fixer();
    assert_eq!(fixer.fix("I can't do it"), "I cannot do it");
    assert_eq!(fixer.fix("They're coming"), "They are coming");
    assert_eq!(fixer.fix("it's a nice day"), "it is a nice day");
    assert_eq!(fixer.fix("we shouldn't've gone"), "we should not have gone");
}

#[test]
fn test_possessives_are_preserved() {
    let fixer = fixer();
    assert_eq!(fixer.fix("John's car"), "John's car");
    assert_eq!(fixer.fix("the dog's bone"), "the dog's bone");
    assert_eq!(fixer.fix("James's hat"), "James's hat");
}

#[test]
fn test_time_word_suffix_expands() {
    let fixer = fixer();
    assert_eq!(
        fixer.fix("today's weather is nice"),
        "today is weather is nice"
    );
}

#[test]
fn test_case_preservation() {
    let fixer = fixer();
    assert_eq!(fixer.fix("I CAN'T"), "I CANNOT");
    assert_eq!(fixer.fix("Don't go"), "Do not go");
    assert_eq!(fixer.fix("don't go"), "do not go");
    assert_eq!(fixer.fix("idk"), "I do not know");
}

#[test]
fn test_informal_and_slang() {
    let fixer = fixer();
    assert_eq!(fixer.fix("I'm goin' home"), "I am going home");
    assert_eq!(fixer.fix("y'all ready?"), "you all ready?");
    assert_eq!(fixer.fix("btw that was fun"), "by the way that was fun");

    let plain = ContractionFixer::new(FixerConfig::new(false, false)).unwrap();
    assert_eq!(plain.fix("I'm goin' home btw"), "I am goin' home btw");
}

#[test]
fn test_word_boundaries() {
    let fixer = fixer();
    // slang keys inside longer words are not matched
    assert_eq!(fixer.fix("fantasy cabtwo"), "fantasy cabtwo");
    assert_eq!(fixer.fix("(can't)"), "(cannot)");
}

#[test]
fn test_idempotence() {
    let fixer = fixer();
    let texts = [
        "I can't believe it's not butter",
        "They're sure we'll win, idk",
        "John's dog's bone",
        "y'all gotta see this",
    ];
    for text in texts {
        let once = fixer.fix(text);
        assert_eq!(fixer.fix(&once), once, "input: {}", text);
    }
}

#[test]
fn test_round_trip() {
    let fixer = fixer();
    let text = "I can't go, they're here and we'll see";
    let fixed = fixer.fix(text);
    assert_eq!(fixed, "I cannot go, they are here and we will see");

    let contracted = fixer.contract(&fixed);
    assert_eq!(contracted, "I can't go, they're here and we'll see");
    assert_eq!(fixer.fix(&contracted), fixed);
}

#[test]
fn test_contract_case() {
    let fixer = fixer();
    assert_eq!(fixer.contract("I am sure it is fine"), "I'm sure it's fine");
    assert_eq!(fixer.contract("DO NOT touch"), "DON'T touch");
    assert_eq!(fixer.contract("They are here"), "They're here");
}

#[test]
fn test_batch_matches_individual_calls() {
    let fixer = fixer();
    let texts = vec![
        "I can't".to_string(),
        "".to_string(),
        "we'll see".to_string(),
        "nothing here".to_string(),
    ];

    let batch = fixer.fix_batch(&texts[..]);
    let single: Vec<String> = texts.iter().map(|t| fixer.fix(t)).collect();
    assert_eq!(batch, single);

    let batch = fixer.contract_batch(&batch[..]);
    let single: Vec<String> = single.iter().map(|t| fixer.contract(t)).collect();
    assert_eq!(batch, single);
}

#[test]
fn test_add_and_remove_contraction() {
    let fixer = fixer();
    assert_eq!(fixer.fix("I'm gonna do it"), "I am gonna do it");

    fixer.add_contraction("gonna", "going to");
    assert!(fixer.contains("gonna"));
    assert_eq!(fixer.fix("I'm gonna do it"), "I am going to do it");

    fixer.remove_contraction("gonna");
    assert!(!fixer.contains("gonna"));
    assert_eq!(fixer.fix("I'm gonna do it"), "I am gonna do it");
}

#[test]
fn test_empty_and_noop_text() {
    let fixer = fixer();
    assert_eq!(fixer.fix(""), "");
    assert_eq!(fixer.contract(""), "");
    assert_eq!(fixer.fix("Hello, world."), "Hello, world.");
    assert!(fixer.preview_default("Hello, world.").is_empty());
}

#[test]
fn test_preview() {
    let fixer = fixer();
    let text = "Well, I can't say";
    let matches = fixer.preview(text, 3);
    assert_eq!(matches.len(), 1);

    let record = &matches[0];
    assert_eq!(record.text, "can't");
    assert_eq!(&text[record.start..record.end], "can't");
    assert_eq!(record.replacement, "cannot");
    assert_eq!(record.context, " I can't sa");
}

#[test]
fn test_month_abbreviation() {
    let fixer = fixer();
    assert_eq!(fixer.fix("due Jan. 5"), "due January 5");
    assert_eq!(fixer.fix("Janet"), "Janet");
}

#[test]
fn test_facade() {
    assert_eq!(
        contraction_fix::fix("idk, they're late", true, true).unwrap(),
        "I do not know, they are late"
    );
    assert_eq!(
        contraction_fix::contract("you are right", false, false).unwrap(),
        "you're right"
    );
}
