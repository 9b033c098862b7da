mod helpers;

use sedra_backend::{get_english, parse_english};

#[test]
fn test_parse_english_file() {
    let parse = get_english(&helpers::english_records());
    let expected = concat!(
        "Object.freeze([,",
        r#"e(7,"lost","","","",0,false),"#,
        r#"e(7,"perishing","","","",0,false),"#,
        r#"e(8,"pipe","","","",0,false),"#,
        r#"e(8,"flute","","","",0,false),"#,
        r#"e(9,"Abijah","","","(son of Rehoboam)",2,false),"#,
        r#"e(10,"Abijah","","","(founder of a course of priests)",2,false),"#,
        r#"e(11,"Abiud","","","",0,false),"#,
        r#"e(12,"Abilene","","","",0,false),"#,
        r#"e(13,"Abiathar","","","",0,false),"#,
        r#"e(14,"mourner","","","",0,false),"#,
        r#"e(15,"grieve","","","",4096,false),"#,
        r#"e(15,"mourn","","","",4096,false),"#,
        r#"e(16,"mourning","","","",0,false),"#,
        r#"e(16,"grief","","","",0,false),"#,
        r#"e(16,"sadness","","","",0,false),"#,
        r#"e(17,"stone","","","",0,false),"#,
        r#"e(18,"Abraham","","","",0,false),"#,
        r#"e(18,"Abram","","","",-234,true),"#,
        r#"e(71,"kindle","","","w/ &nwuro)&",10240,false),"#,
        r#"e(74,"near","","","w/ &(al&",0,false),"#,
        r#"e(1088,"Taverns","The Three","","w/ &t'lot,&",0,false),"#,
        r#"e(1522,"each one","","","",0,false),"#,
        r#"e(1522,"each and every one","","","(*kl-xd___xd*)",0,false),"#,
        r#"e(2716,"break","","out against","w/ &(al&",8208,false)]);"#,
    );
    assert_eq!(parse.english, expected);

    let lids = "Object.freeze({7:[14,15],8:[16,17],9:[18],10:[19],11:[20],12:[21],13:[22],14:[23],15:[24,25],16:[26,27,28],17:[29],18:[30,31],71:[124],74:[131],1088:[1895],1522:[2717,2718],2716:[4733]});";
    assert_eq!(parse.lids, lids);
}

#[test]
fn test_sticky_reference_history() {
    let table = parse_english(&helpers::records(&[
        r#"3:1,1:7,"a","","","",0,0"#,
        r#"3:2,NULL,"b","","","",0,0"#,
        r#"3:3,NULL,"c","","","",0,0"#,
        r#"3:4,1:8,"d","","","",0,0"#,
    ]));
    let refs: Vec<Option<u32>> = table.english.iter().map(|e| e.lexeme_ref).collect();
    assert_eq!(refs, vec![Some(7), Some(7), Some(7), Some(8)]);
}
