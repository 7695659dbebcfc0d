use crate::{
    extract_quotations, flatten, ApostrophePolicy, QuoteConfig, QuoteExtractor, QuoteFamily,
    QuoteSpan,
};
use std::ops::Range;

const DOCUMENTS: &[&str] = &[
    "\"Hello,\" he said, \"how are you doing?\"",
    "``Hello ``how `are ``you doing?'''''''",
    "``Hel ``lo ``how'' are you'' doing?''",
    "“Hel «lo “how” are you» doing?”",
    "'\"Hello,\" he said, \"how are you doing?\"'",
    "It was all very 「well to say `Drink me,' but the wise little Alice was\n\
     not going to do THAT in a hurry. ‘No, I'll \"look\" first,’ she said, «and\n\
     see whether it's marked ``poison'' or \"not»",
    "\"Where?\"\n\n\"I don't see 'im!\"\n\n\"Bigger, he's behind the trunk!\" the girl whimpered.",
    "Words blah bla 'Hello,\n\n 'I am the second paragraph.\n\n'I am the last.' more",
    "\"a 'b\" c' d «e ‹f» g› 『h』 」",
    "''Tis nobler' Words blah bla 'I went,' he said, ‹and› `so' on''",
    "",
    "no glyphs at all",
];

fn whole(text: &str) -> Vec<Range<usize>> {
    vec![0..text.chars().count()]
}

fn extract(text: &str) -> Vec<QuoteSpan> {
    extract_quotations(text, &whole(text)).unwrap()
}

fn texts(quotes: &[QuoteSpan]) -> Vec<&str> {
    flatten(quotes).iter().map(|quote| quote.text.as_str()).collect()
}

#[test]
fn spans_are_nested_or_disjoint() {
    for text in DOCUMENTS {
        let quotes = extract(text);
        let all = flatten(&quotes);
        for a in all.iter() {
            for b in all.iter() {
                assert!(
                    a.is_disjoint(b) || a.contains(b) || b.contains(a),
                    "{:?} and {:?} partially overlap in {:?}",
                    a.text,
                    b.text,
                    text
                );
            }
        }
    }
}

#[test]
fn children_are_strictly_inside_and_sorted() {
    fn check(quote: &QuoteSpan) {
        for (index, child) in quote.children.iter().enumerate() {
            assert!(quote.contains(child) && child.range() != quote.range());
            assert_eq!(child.index, index);
            check(child);
        }
        for pair in quote.children.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
    for text in DOCUMENTS {
        extract(text).iter().for_each(check);
    }
}

#[test]
fn top_level_indices_follow_document_order() {
    for text in DOCUMENTS {
        let quotes = extract(text);
        for (index, quote) in quotes.iter().enumerate() {
            assert_eq!(quote.index, index);
        }
        for pair in quotes.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
    }
}

#[test]
fn text_round_trips_through_offsets() {
    for text in DOCUMENTS {
        let chars: Vec<char> = text.chars().collect();
        for quote in flatten(&extract(text)) {
            let slice: String = chars[quote.start..quote.end].iter().collect();
            assert_eq!(slice, quote.text);
        }
    }
}

#[test]
fn stray_closers_do_not_change_other_spans() {
    let pairs = [
        (
            "“Hello,” he said» and «went».",
            "“Hello,” he said and «went».",
        ),
        ("He left” then “came back.”", "He left then “came back.”"),
        ("a 」 「b」 ›", "a  「b」 "),
        ("done.” ``Then?''", "done. ``Then?''"),
    ];
    for (with_stray, without) in pairs.iter() {
        assert_eq!(
            texts(&extract(with_stray)),
            texts(&extract(without)),
            "{:?}",
            with_stray
        );
    }
}

#[test]
fn unclosed_openers_contribute_nothing() {
    let quotes = extract("«never closed and “this one is” fine");
    assert_eq!(texts(&quotes), vec!["“this one is”"]);

    assert!(extract("『nothing ends").is_empty());
    assert!(extract("``dangling latex").is_empty());
}

#[test]
fn three_paragraph_continuation_maps_to_three_sentences() {
    let text = "He began: \"One.\n\n\"Two.\n\n\"Three.\" And stopped.";
    let starts = [0, 17, 24, 34];
    let mut sentences: Vec<Range<usize>> = starts.windows(2).map(|w| w[0]..w[1]).collect();
    sentences.push(34..text.chars().count());

    let quotes = extract_quotations(text, &sentences).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].text, "\"One.\n\n\"Two.\n\n\"Three.\"");
    assert_eq!((quotes[0].sentence_begin, quotes[0].sentence_end), (0, 2));
}

#[test]
fn possessive_closes_by_default() {
    let text = "'Jones' cow is cuter!'";
    let quotes = extract(text);
    assert_eq!(texts(&quotes), vec!["'Jones'"]);

    let literal = QuoteExtractor::new(
        QuoteConfig::default().with_apostrophe_policy(ApostrophePolicy::PreferLiteral),
    );
    let quotes = literal.extract(text, &whole(text)).unwrap();
    assert_eq!(texts(&quotes), vec![text]);
}

#[test]
fn single_quotes_can_be_disabled() {
    let text = "'Hello,' she said, \"it's `fine'\"";
    let extractor = QuoteExtractor::new(QuoteConfig::doubles_only());
    let quotes = extractor.extract(text, &whole(text)).unwrap();
    assert_eq!(texts(&quotes), vec!["\"it's `fine'\""]);
    assert_eq!(quotes[0].family, QuoteFamily::StraightDouble);
}

#[test]
fn single_newline_paragraphs_when_configured() {
    let text = "“One\n“Two”";
    assert_eq!(texts(&extract(text)), vec!["“Two”"]);

    let extractor = QuoteExtractor::new(QuoteConfig::default().with_paragraph_break_newlines(1));
    let quotes = extractor.extract(text, &whole(text)).unwrap();
    assert_eq!(texts(&quotes), vec![text]);
}

#[test]
fn extractor_is_shared_across_threads() {
    let extractor = QuoteExtractor::default();
    let results: Vec<Vec<QuoteSpan>> = std::thread::scope(|scope| {
        let handles: Vec<_> = DOCUMENTS
            .iter()
            .map(|text| {
                let extractor = &extractor;
                scope.spawn(move || extractor.extract(text, &whole(text)).unwrap())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for (text, quotes) in DOCUMENTS.iter().zip(results) {
        assert_eq!(quotes, extract(text));
    }
}

#[test]
fn serializes_for_annotation_stores() {
    let quotes = extract("«a “b” c»");
    let value = serde_json::to_value(&quotes[0]).unwrap();
    assert_eq!(value["family"], "AngleDouble");
    assert_eq!(value["start"], 0);
    assert_eq!(value["end"], 9);
    assert_eq!(value["children"][0]["text"], "“b”");
    assert_eq!(value["tokens"], serde_json::Value::Null);
}
