//! Breakdown formatting over scanner output

use strtok_core::{analyze, expand, tokenize, AnalyzeOptions, TokenKind};

#[test]
fn test_expand_single_token() {
    assert_eq!(expand(&tokenize("ab")), vec!["Token: \"ab\" --> 'a', 'b'"]);
}

#[test]
fn test_expand_empty() {
    assert!(expand(&tokenize("")).is_empty());
}

#[test]
fn test_expand_keeps_order() {
    let lines = expand(&tokenize("hi: 42"));
    assert_eq!(
        lines,
        vec![
            "Token: \"hi\" --> 'h', 'i'",
            "Token: \":\" --> ':'",
            "Token: \" \" --> ' '",
            "Token: \"42\" --> '4', '2'",
        ]
    );
}

#[test]
fn test_expand_multibyte_characters() {
    assert_eq!(expand(&tokenize("né")), vec!["Token: \"né\" --> 'n', 'é'"]);
}

#[test]
fn test_analyze_matches_separate_calls() {
    let input = "  abc123\n!!  @@  ";
    let analysis = analyze(input, &AnalyzeOptions::default());
    let tokens = tokenize(input.trim());

    assert_eq!(analysis.tokens, tokens);
    assert_eq!(analysis.breakdown, expand(&tokens));
    assert_eq!(analysis.tokens[0].kind(), TokenKind::Word);
}

#[test]
fn test_analysis_serializes() {
    let analysis = analyze("a:1", &AnalyzeOptions::default());
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["tokens"][0]["kind"], "Word");
    assert_eq!(json["tokens"][1]["text"], ":");
    assert_eq!(json["tokens"][2]["kind"], "Numeric");
    assert_eq!(json["breakdown"][2], "Token: \"1\" --> '1'");
}
