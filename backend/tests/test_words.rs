mod helpers;

use sedra_backend::{get_words, parse_words};

#[test]
fn test_build_word_javascript() {
    let js = get_words(&helpers::word_records());
    let expected = concat!(
        "Object.freeze([,",
        r#"w(2,"l)bwh","la)b,wuh",6883480,128),"#,
        r#"w(2,"l)bwhy","la)b,wuh_y",6883476,128),"#,
        r#"w(2,"l)bwhyn","la)b,wuhyen",6883544,128),"#,
        ",,,",
        r#"w(2,"l)bwk","la)b,wuk,",6883492,128),"#,
        r#"w(2,"l)bwkwn","la)b,wuk,wun",6883556,128),"#,
        r#"w(null,"l)bwn","la)b,wun",6883568,128),"#,
        r#"w(2,"l)by","lo)b,y",6883504,128),"#,
        r#"w(3,")bhwt)",")ab,ohwut,o)",6914048,192),"#,
        ",",
        r#"w(4,")bhwn",")eb'hwun",6881492,128),"#,
        r#"w(4,"w)bky","we)b'ek,y",6882984,128),"#,
        r#"w(4,")b)",")eb'o)",6881280,320),"#,
        ",,,,",
        r#"w(5,")bd",")ob,ed,",109772800,128),"#,
        r#"w(1742,"mTl","meTul",0,192),"#,
        r#"w(1518,"kl","k'ul",0,0),"#,
        r#"w(3541,"r$n)","ri$ono)",6881280,192),"#,
        r#"w(2854,"dqsry)-dpylypws","d'qesariya)-d,p,yilyip'wOs",1024,128)]);"#,
    );
    assert_eq!(js.words, expected);
    assert_eq!(js.no_y, "Object.freeze([23,24]);");
    assert_eq!(js.no_w, "Object.freeze([21,22]);");
}

#[test]
fn test_word_slot_is_id_minus_one() {
    let table = parse_words(&helpers::word_records());
    assert_eq!(table.words.len(), 24);
    for (i, slot) in table.words.iter().enumerate() {
        let id = i + 1;
        let missing = matches!(id, 4..=6 | 12 | 16..=19);
        assert_eq!(slot.is_none(), missing, "word id {}", id);
    }
    assert_eq!(table.words[20].as_ref().map(|w| w.vocalised.as_str()), Some("meTul"));
}

#[test]
fn test_word_table_json_round_trip() {
    let table = parse_words(&helpers::word_records());
    let json = serde_json::to_string(&table).unwrap();
    let back: sedra_backend::types::WordTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}
