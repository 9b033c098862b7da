/// Join record lines with the CRLF terminator of the Sedra export.
#[allow(dead_code)]
pub fn records(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{}\r\n", l)).collect()
}

#[allow(dead_code)]
pub fn word_records() -> String {
    records(&[
        r#"2:1,1:2,"LABOH","LaAB,uOH",6883480,128"#,
        r#"2:2,1:2,"LABOH;","LaAB,uOH_;",6883476,128"#,
        r#"2:3,1:2,"LABOH;N","LaAB,uOHe;N",6883544,128"#,
        r#"2:7,1:2,"LABOC","LaAB,uOC,",6883492,128"#,
        r#"2:8,1:2,"LABOCON","LaAB,uOC,uON",6883556,128"#,
        r#"2:9,NULL,"LABON","LaAB,uON",6883568,128"#,
        r#"2:10,1:2,"LAB;","LoAB,;",6883504,128"#,
        r#"2:11,1:3,"ABHOTA","AaB,oHuOT,oA",6914048,192"#,
        r#"2:13,1:4,"ABHON","AeB'HuON",6881492,128"#,
        r#"2:14,1:4,"OABC;","OeAB'eC,;",6882984,128"#,
        r#"2:15,1:4,"ABA","AeB'oA",6881280,320"#,
        r#"2:20,1:5,"ABD","AoB,eD,",109772800,128"#,
        r#"2:21,1:1742,"MYL","MeYuL",0,192"#,
        r#"2:22,1:1518,"CL","C'uL",0,0"#,
        r#"2:23,1:3541,"RWNA","RiWoNoA",6881280,192"#,
        r#"2:24,1:2854,"DXSR;A-DI;L;IOS","D'XeSaRi;aA-D,I,i;Li;I'oOS",1024,128"#,
    ])
}

#[allow(dead_code)]
pub fn english_records() -> String {
    records(&[
        r#"3:14,1:7,"lost","","","",0,0"#,
        r#"3:15,NULL,"perishing","","","",0,0"#,
        r#"3:16,1:8,"pipe","","","",0,0"#,
        r#"3:17,1:8,"flute","","","",0,0"#,
        r#"3:18,1:9,"Abijah","","","(son of Rehoboam)",2,0"#,
        r#"3:19,1:10,"Abijah","","","(founder of a course of priests)",2,0"#,
        r#"3:20,1:11,"Abiud","","","",0,0"#,
        r#"3:21,1:12,"Abilene","","","",0,0"#,
        r#"3:22,1:13,"Abiathar","","","",0,0"#,
        r#"3:23,1:14,"mourner","","","",0,0"#,
        r#"3:24,1:15,"grieve","","","",4096,0"#,
        r#"3:25,1:15,"mourn","","","",4096,0"#,
        r#"3:26,1:16,"mourning","","","",0,0"#,
        r#"3:27,1:16,"grief","","","",0,0"#,
        r#"3:28,1:16,"sadness","","","",0,0"#,
        r#"3:29,1:17,"stone","","","",0,0"#,
        r#"3:30,1:18,"Abraham","","","",0,0"#,
        r#"3:31,NULL,"Abram","","","",-234,1"#,
        r#"3:124,1:71,"kindle","","","w/ &NuORoA& ",10240,0"#,
        r#"3:131,1:74,"near","","","w/ &EaL&",0,0"#,
        r#"3:1895,1:1088,"Taverns","The Three","","w/ &T'LoT,&",0,0"#,
        r#"3:2717,1:1522,"each one","","","",0,0"#,
        r#"3:2718,NULL,"each and every one","","","(*CL-KD___KD*) ",0,0"#,
        r#"3:4733,1:2716,"break","","out against","w/ &EaL& ",8208,0"#,
    ])
}

#[allow(dead_code)]
pub fn etymology_records() -> String {
    records(&[
        r#"4:1,1:1,"a\255h\256r",5"#,
        r#"4:2,1:20,"a\255gc\256n",5"#,
        r#"4:3,1:22,"a\255gro\256w",5"#,
        r#"4:4,1:36,"ei\310dow",5"#,
        r#"4:5,1:46,"eu\255jaristi\256a",5"#,
        r#"4:6,1:50,"eu\255agge\256lion",5"#,
        r#"4:7,1:53,"o\261gkinow",5"#,
        r#"4:8,1:57,"eu\255roklu\256dcn",5"#,
        r#"4:9,1:61,"64.000000",6"#,
        r#"4:10,1:75,"eu\310",5"#,
        r#"4:11,1:77,"86.000000",8"#,
        r#"4:12,1:1797,"me\256n",5"#,
        r#"4:13,1:97,"ei\255k\224\264",5"#,
        r#"4:14,1:106,"e\261jidna",5"#,
        r#"4:15,1:119,"o\261jlow",5"#,
        r#"4:16,1:122,"xe\256now",5"#,
        r#"4:17,1:161,"a\255me\256yustow",5"#,
        r#"4:19,1:191,"a\255na\256gkh",5"#,
        r#"4:20,1:198,"a\255nyu\256patow",5"#,
        r#"4:21,NULL,"409.000000",8"#,
        r#"4:22,1:859,"zeu\264gos",5"#,
    ])
}

#[allow(dead_code)]
pub fn ubs_records() -> String {
    records(&[
        "0:1,520100101,33565194,64",
        "0:2,520100102,33563576,0",
        "0:3,520100103,33564000,0",
        "0:4,520100104,33566955,16",
        "0:5,520100105,33557677,0",
        "0:6,520100106,33558659,24",
        "0:7,520100107,33557677,0",
        "0:8,520100108,33554599,36",
        "0:9,520100201,33554597,0",
        "0:-32628,541601508,33567919,0",
        "0:-32627,541601509,33572533,0",
        "0:-32626,541601510,33557662,-28672",
        "0:-32625,541601511,33555860,4100",
        "0:-32624,541601512,33555337,0",
        "0:-32623,541601513,33558837,0",
        "0:-32622,541601514,33563118,0",
        "0:-32621,541601515,33565392,-32764",
        "0:-32620,541601516,33565838,0",
        "0:-32619,541601517,33574171,0",
        "0:-32618,541601518,33557095,0",
        "0:-32617,541601519,33555871,-32752",
    ])
}
