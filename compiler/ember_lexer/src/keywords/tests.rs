use super::*;

#[test]
fn test_standard_keywords() {
    let d = Dialect::Standard;
    assert_eq!(d.classify("let"), Word::Keyword(TokenKind::Let));
    assert_eq!(d.classify("const"), Word::Keyword(TokenKind::Const));
    assert_eq!(d.classify("fn"), Word::Keyword(TokenKind::Fn));
    assert_eq!(d.classify("import"), Word::Keyword(TokenKind::Import));
    assert_eq!(d.classify("set"), Word::Identifier);
}

#[test]
fn test_prose_keywords() {
    let d = Dialect::Prose;
    assert_eq!(d.classify("set"), Word::Keyword(TokenKind::Let));
    assert_eq!(d.classify("fix"), Word::Keyword(TokenKind::Const));
    assert_eq!(d.classify("otherwise"), Word::Keyword(TokenKind::Else));
    assert_eq!(d.classify("let"), Word::Identifier);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(Dialect::Standard.classify("WHILE"), Word::Keyword(TokenKind::While));
    assert_eq!(Dialect::Prose.classify("During"), Word::Keyword(TokenKind::While));
    assert_eq!(Dialect::Standard.classify("Prose"), Word::Switch(Dialect::Prose));
}

#[test]
fn test_switch_words() {
    assert_eq!(Dialect::Standard.classify("prose"), Word::Switch(Dialect::Prose));
    assert_eq!(Dialect::Prose.classify("standard"), Word::Switch(Dialect::Standard));
    // Only the active dialect's switch word is special.
    assert_eq!(Dialect::Standard.classify("standard"), Word::Identifier);
}

#[test]
fn test_tables_cover_same_kinds() {
    let kinds = |d: Dialect| d.keywords().iter().map(|&(_, k)| k).collect::<Vec<_>>();
    assert_eq!(kinds(Dialect::Standard), kinds(Dialect::Prose));
    assert!(kinds(Dialect::Standard).iter().all(|k| k.is_keyword()));
}

#[test]
fn test_from_str() {
    assert_eq!("prose".parse::<Dialect>(), Ok(Dialect::Prose));
    assert_eq!("Standard".parse::<Dialect>(), Ok(Dialect::Standard));
    assert_eq!("klingon".parse::<Dialect>(), Err(UnknownDialect("klingon".into())));
}
