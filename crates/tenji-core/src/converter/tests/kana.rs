use super::tenji;

#[test]
fn test_seion() {
    let expected = "⠁⠃⠉⠋⠊⠀⠡⠣⠩⠫⠪⠀⠱⠳⠹⠻⠺⠀⠕⠗⠝⠟⠞⠀⠅⠇⠍⠏⠎⠀⠥⠧⠭⠯⠮⠀⠵⠷⠽⠿⠾⠀⠌⠬⠜⠀⠑⠓⠙⠛⠚⠀⠄⠔⠴";
    let hiragana = "あいうえお　かきくけこ　さしすせそ　たちつてと　なにぬねの　はひふへほ　まみむめも　やゆよ　らりるれろ　わをん";
    // Half-width and full-width spaces both become the blank cell.
    let katakana = "アイウエオ カキクケコ　サシスセソ　タチツテト　ナニヌネノ　ハヒフヘホ　マミムメモ　ヤユヨ　ラリルレロ　ワヲン";
    assert_eq!(tenji(hiragana), expected);
    assert_eq!(tenji(katakana), expected);
}

#[test]
fn test_vowels() {
    assert_eq!(tenji("あいうえお"), "⠁⠃⠉⠋⠊");
}

#[test]
fn test_dakuon_handakuon() {
    let expected = "⠐⠡⠐⠣⠐⠩⠐⠫⠐⠪⠀⠐⠱⠐⠳⠐⠹⠐⠻⠐⠺⠀⠐⠕⠐⠗⠐⠝⠐⠟⠐⠞⠀⠐⠥⠐⠧⠐⠭⠐⠯⠐⠮⠀⠠⠥⠠⠧⠠⠭⠠⠯⠠⠮";
    assert_eq!(
        tenji("がぎぐげご　ざじずぜぞ　だぢづでど　ばびぶべぼ　ぱぴぷぺぽ"),
        expected
    );
    assert_eq!(
        tenji("ガギグゲゴ　ザジズゼゾ　ダヂヅデド　バビブベボ　パピプペポ"),
        expected
    );
}

#[test]
fn test_yoon() {
    let expected = "⠈⠡⠈⠩⠈⠪⠀⠈⠱⠈⠹⠈⠺⠀⠈⠕⠈⠝⠈⠞⠀⠈⠅⠈⠍⠈⠎⠀⠈⠥⠈⠭⠈⠮⠀⠈⠵⠈⠽⠈⠾⠀⠈⠑⠈⠙⠈⠚⠀⠘⠡⠘⠩⠘⠪⠀⠘⠱⠘⠹⠘⠺⠀⠘⠕⠘⠝⠘⠞⠀⠘⠥⠘⠭⠘⠮⠀⠨⠥⠨⠭⠨⠮";
    assert_eq!(
        tenji("きゃきゅきょ　しゃしゅしょ　ちゃちゅちょ　にゃにゅにょ　ひゃひゅひょ　みゃみゅみょ　りゃりゅりょ　ぎゃぎゅぎょ　じゃじゅじょ　ぢゃぢゅぢょ　びゃびゅびょ　ぴゃぴゅぴょ"),
        expected
    );
    assert_eq!(
        tenji("キャキュキョ　シャシュショ　チャチュチョ　ニャニュニョ　ヒャヒュヒョ　ミャミュミョ　リャリュリョ　ギャギュギョ　ジャジュジョ　ヂャヂュヂョ　ビャビュビョ　ピャピュピョ"),
        expected
    );
}

#[test]
fn test_tokusyuon() {
    let expected = "⠈⠋⠈⠫⠈⠻⠘⠻⠈⠟⠈⠏⠈⠯⠀⠢⠃⠢⠋⠢⠊⠀⠢⠡⠢⠣⠢⠫⠢⠪⠀⠲⠡⠲⠣⠲⠫⠲⠪⠀⠢⠕⠢⠗⠢⠟⠢⠞⠀⠢⠥⠢⠧⠢⠯⠢⠮⠀⠲⠥⠲⠧⠲⠯⠲⠮⠀⠈⠳⠘⠳⠈⠗⠘⠗⠢⠝⠲⠝⠨⠝⠸⠝⠨⠬⠸⠬⠨⠜⠸⠜⠐⠉";
    assert_eq!(
        tenji("いぇきぇしぇじぇちぇにぇひぇ　うぃうぇうぉ　くぁくぃくぇくぉ　ぐぁぐぃぐぇぐぉ　つぁつぃつぇつぉ　ふぁふぃふぇふぉ　ゔぁゔぃゔぇゔぉ　すぃずぃてぃでぃとぅどぅてゅでゅふゅゔゅふょゔょゔ"),
        expected
    );
    assert_eq!(
        tenji("イェキェシェジェチェニェヒェ　ウィウェウォ　クァクィクェクォ　グァグィグェグォ　ツァツィツェツォ　ファフィフェフォ　ヴァヴィヴェヴォ　スィズィティディトゥドゥテュデュフュヴュフョヴョヴ"),
        expected
    );
}

#[test]
fn test_sokuon_chouon() {
    assert_eq!(
        tenji("あっち　そっち　どっち　おかあさん　おとーさんと　うんどーかいへ　いった"),
        "⠁⠂⠗⠀⠺⠂⠗⠀⠐⠞⠂⠗⠀⠊⠡⠁⠱⠴⠀⠊⠞⠒⠱⠴⠞⠀⠉⠴⠐⠞⠒⠡⠃⠯⠀⠃⠂⠕"
    );
}

#[test]
fn test_standalone_small_kana_skipped() {
    // No combination for ア+ャ: ア is written, the small kana is dropped.
    assert_eq!(tenji("あゃ"), "⠁");
    assert_eq!(tenji("ゃ"), "");
    assert_eq!(tenji("ァィゥェォ"), "");
}

#[test]
fn test_consumed_small_kana_not_reemitted() {
    // キャ is one unit; ャ must not produce a second cell.
    assert_eq!(tenji("きゃ"), "⠈⠡");
    assert_eq!(tenji("きゃあ"), "⠈⠡⠁");
}

#[test]
fn test_kanji_and_unmapped_dropped() {
    assert_eq!(tenji("漢字"), "");
    assert_eq!(tenji("その人と"), "⠺⠎⠞");
    assert_eq!(tenji("「あ」"), "⠁");
}

#[test]
fn test_kana_punctuation() {
    assert_eq!(tenji("あ。"), "⠁⠲");
    assert_eq!(tenji("あ、い"), "⠁⠰⠃");
    assert_eq!(tenji("ね？"), "⠏⠢");
    assert_eq!(tenji("ね！"), "⠏⠖");
}
