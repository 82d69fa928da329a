//! Integration tests for parsing realistic sheet exports.

use navi_sheet::parse_venues;
use navi_types::{Playground, DEFAULT_AREA};

/// A Japanese-titled export as editors actually produce it: full-width
/// spaces, mixed tokens, a multi-line note, a blank spacer row and a row
/// whose name was never filled in.
const JAPANESE_SHEET: &str = "\
名前,住所,エリア,緯度,経度,授乳室,おむつ替え,ベビーカー貸出,遊び場,営業時間,メモ
Siam Paragon,\"991 Rama I Rd, Pathum Wan\",Pathumwan,13.7462,100.5347,あり,○,可,有料,10:00-22:00,\"授乳室は4F\nベビールームあり\"
ICONSIAM,299 Charoen Nakhon Rd,Khlong San,13.7267 N,100.5105 E,はい,はい,,無料,,
,,,,,,,,,,
,Sukhumvit Soi 24,Watthana,13.73,100.57,yes,yes,yes,free,,
EmQuartier,693 Sukhumvit Rd,Watthana,abc,,Ｙｅｓ,no,ok,キッズスペースなし,,\"Say \"\"hi\"\" to staff\"
";

/// The same venues with English titles in a different column order.
const ENGLISH_SHEET: &str = "\
Title,Area,Nursing Room,Changing Table,Stroller Rental,Kids Area,Opening Hours,Note,Location,Latitude,Longitude
Siam Paragon,Pathumwan,yes,yes,yes,paid,10:00-22:00,,991 Rama I Rd,13.7462,100.5347
Lumpini Park,,no,no,no,free,04:30-21:00,Bring mosquito spray,Rama IV Rd,13.7314,100.5414
";

#[test]
fn test_japanese_sheet() {
    let venues = parse_venues(JAPANESE_SHEET).unwrap();

    let names: Vec<&str> = venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Siam Paragon", "ICONSIAM", "EmQuartier"]);

    let paragon = &venues[0];
    assert_eq!(paragon.slug, "siam-paragon");
    assert_eq!(paragon.address, "991 Rama I Rd, Pathum Wan");
    assert!(paragon.nursing && paragon.diaper && paragon.stroller);
    assert_eq!(paragon.playground, Playground::Paid);
    assert_eq!(paragon.tips.as_deref(), Some("授乳室は4F\nベビールームあり"));

    let iconsiam = &venues[1];
    assert_eq!(iconsiam.area, "Khlong San");
    assert_eq!(iconsiam.lat, 13.7267);
    assert_eq!(iconsiam.lng, 100.5105);
    assert!(!iconsiam.stroller);
    assert_eq!(iconsiam.playground, Playground::Free);
    assert_eq!(iconsiam.hours, None);

    let emq = &venues[2];
    assert_eq!(emq.lat, 0.0);
    assert_eq!(emq.lng, 0.0);
    assert!(emq.nursing);
    assert!(!emq.diaper);
    assert!(emq.stroller);
    assert_eq!(emq.playground, Playground::None);
    assert_eq!(emq.tips.as_deref(), Some("Say \"hi\" to staff"));
}

#[test]
fn test_english_sheet_column_order() {
    let venues = parse_venues(ENGLISH_SHEET).unwrap();
    assert_eq!(venues.len(), 2);

    let paragon = &venues[0];
    assert_eq!(paragon.address, "991 Rama I Rd");
    assert_eq!(paragon.lat, 13.7462);
    assert_eq!(paragon.playground, Playground::Paid);

    let park = &venues[1];
    assert_eq!(park.slug, "lumpini-park");
    assert_eq!(park.area, DEFAULT_AREA);
    assert!(!park.nursing);
    assert_eq!(park.playground, Playground::Free);
    assert_eq!(park.tips.as_deref(), Some("Bring mosquito spray"));
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse_venues(JAPANESE_SHEET).unwrap();
    let second = parse_venues(JAPANESE_SHEET).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_headers_yield_defaults() {
    let venues = parse_venues("name,colour,price\nToy Library,red,100\n").unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].area, DEFAULT_AREA);
    assert!(!venues[0].nursing);
}

#[test]
fn test_header_only() {
    assert!(parse_venues("名前,エリア\n").unwrap().is_empty());
    assert!(parse_venues("").unwrap().is_empty());
}
