use iregex::{
    CompileCache, CompileOptions, Engine, Flags, Regex, alternate, concatenate,
    consts::{ANYTHING, DIGIT, LETTER, NEWLINE, WORD, WORD_BOUNDARY},
};
use tests::{compile_whole, init_tracing, matches_whole};

#[test]
fn exactly_three_digits() -> anyhow::Result<()> {
    let three = DIGIT.exactly(3)?;
    assert_eq!(three, r"\d{3}");
    assert!(matches_whole(&three, "123")?);
    assert!(!matches_whole(&three, "12")?);
    assert!(!matches_whole(&three, "1234")?);
    Ok(())
}

#[test]
fn optional_sequence() -> anyhow::Result<()> {
    let ab = Regex::literal("ab").optional()?;
    assert!(matches_whole(&ab, "")?);
    assert!(matches_whole(&ab, "ab")?);
    assert!(!matches_whole(&ab, "a")?);
    Ok(())
}

#[test]
fn repetition_bounds() -> anyhow::Result<()> {
    let some = Regex::literal("ab").m_to_n(2, 3)?;
    assert!(!matches_whole(&some, "ab")?);
    assert!(matches_whole(&some, "abab")?);
    assert!(matches_whole(&some, "ababab")?);
    assert!(!matches_whole(&some, "abababab")?);

    let many = Regex::literal("ab").m_or_more(2)?;
    assert!(!matches_whole(&many, "ab")?);
    assert!(matches_whole(&many, "abababab")?);

    let plus = LETTER.one_or_more()?;
    assert!(!matches_whole(&plus, "")?);
    assert!(matches_whole(&plus, "abcXYZ")?);
    Ok(())
}

#[test]
fn lazy_repetition() -> anyhow::Result<()> {
    let tag = concatenate("<", ANYTHING.clone())?.concat(">")?;
    let lazy = concatenate("<", Regex::literal(".").zero_or_more()?.lazy()?)?.concat(">")?;
    let haystack = "<a><b>";
    assert_eq!(tag.compile()?.find(haystack)?, Some(0..6));
    assert_eq!(lazy.compile()?.find(haystack)?, Some(0..3));
    Ok(())
}

#[test]
fn named_captures() -> anyhow::Result<()> {
    init_tracing();
    let pair = concatenate(
        DIGIT.to_named_capture_group("n1")?,
        LETTER.to_named_capture_group("n2")?,
    )?;
    let compiled = compile_whole(&pair)?;
    assert_eq!(compiled.capture_names(), ["n1", "n2"]);
    assert_eq!(compiled.captures_name("7q", "n1")?, Some("7"));
    assert_eq!(compiled.captures_name("7q", "n2")?, Some("q"));
    assert_eq!(compiled.captures_name("q7", "n1")?, None);
    Ok(())
}

#[test]
fn alternation() -> anyhow::Result<()> {
    let fizzbuzz = alternate(alternate("fizz", "buzz")?, "fizzbuzz")?;
    for word in ["fizz", "buzz", "fizzbuzz"] {
        assert!(matches_whole(&fizzbuzz, word)?, "{word}");
    }
    assert!(!matches_whole(&fizzbuzz, "fizzfizz")?);
    Ok(())
}

#[test]
fn newlines_in_any_convention() -> anyhow::Result<()> {
    let lines = Regex::literal("a").concat(NEWLINE.clone())?.concat("b")?;
    for text in ["a\nb", "a\r\nb", "a\rb"] {
        assert!(matches_whole(&lines, text)?, "{text:?}");
    }
    assert!(!matches_whole(&lines, "a\n\nb")?);
    assert!(matches_whole(&Regex::literal("a").newlines().concat("b")?, "a\n\r\nb")?);
    Ok(())
}

#[test]
fn classes_match_literally() -> anyhow::Result<()> {
    let signs = Regex::any_of(['+', '-', '^'])?;
    for sign in ["+", "-", "^"] {
        assert!(matches_whole(&signs, sign)?, "{sign}");
    }
    assert!(!matches_whole(&signs, ",")?);

    let dot = Regex::any_of(['.'])?;
    assert!(matches_whole(&dot, ".")?);
    assert!(!matches_whole(&dot, "x")?);

    let not_digit = Regex::none_of([&*DIGIT])?;
    assert!(matches_whole(&not_digit, "x")?);
    assert!(!matches_whole(&not_digit, "5")?);
    Ok(())
}

#[test]
fn lookaround_falls_back() -> anyhow::Result<()> {
    init_tracing();

    // A word directly followed by a digit.
    let before_digit = WORD.one_or_more()?.concat(DIGIT.to_lookahead())?;
    let compiled = before_digit.compile()?;
    assert_eq!(compiled.engine(), Engine::Backtracking);
    assert_eq!(compiled.find("abc def1")?, Some(4..7));

    let price = concatenate(Regex::escaped("$").to_lookbehind(), DIGIT.one_or_more()?)?;
    let compiled = price.compile()?;
    assert_eq!(compiled.find("costs $42")?, Some(7..9));

    let bare = concatenate(
        WORD_BOUNDARY.clone(),
        Regex::literal("-").to_negative_lookbehind(),
    )?
    .concat(DIGIT.one_or_more()?)?;
    let compiled = bare.compile()?;
    assert_eq!(compiled.find("-5 7")?, Some(3..4));
    Ok(())
}

#[test]
fn options() -> anyhow::Result<()> {
    let hello = Regex::literal("hello");
    let options = CompileOptions {
        flags: Flags::CASE_INSENSITIVE,
        anchored: true,
        ..CompileOptions::default()
    };
    let compiled = hello.compile_with(&options)?;
    assert!(compiled.is_match("HeLLo")?);
    assert!(!compiled.is_match("HeLLo!")?);

    let backtracking = CompileOptions {
        engine: Engine::Backtracking,
        ..options
    };
    let compiled = hello.compile_with(&backtracking)?;
    assert_eq!(compiled.engine(), Engine::Backtracking);
    assert!(compiled.is_match("HELLO")?);
    Ok(())
}

#[test]
fn cache_is_shared() -> anyhow::Result<()> {
    let cache = CompileCache::new();
    let options = CompileOptions::default();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let re = DIGIT.one_or_more().and_then(|re| re.to_named_capture_group("n"));
                let compiled = cache.get_or_compile(&re.unwrap(), &options).unwrap();
                assert_eq!(compiled.captures_name("x12", "n").unwrap(), Some("12"));
            });
        }
    });
    assert_eq!(cache.len(), 1);
    Ok(())
}
