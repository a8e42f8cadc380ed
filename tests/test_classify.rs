mod common;

use common::fixtures;
use stylist::extract::{face, undertone};
use stylist::models::{EyeColor, HairColor, RgbColor, SkinTone, Undertone, VeinColor};

fn rgb(hex: &str) -> RgbColor {
    RgbColor::from_hex(hex).expect("test hex")
}

#[test]
fn brightness_buckets() {
    // brightness 0
    let dark = face::classify(rgb("#000000"));
    assert_eq!(dark.hair, HairColor::Black);
    assert_eq!(dark.skin, SkinTone::Dark);

    // brightness 75
    let dim = face::classify(rgb("#4b4b4b"));
    assert_eq!(dim.hair, HairColor::Black);
    assert_eq!(dim.skin, SkinTone::Dark);

    // brightness 100
    let mid = face::classify(rgb("#969600"));
    assert_eq!(mid.hair, HairColor::Brown);
    assert_eq!(mid.skin, SkinTone::Medium);

    // brightness 150 lands in the brighter bucket
    let bright = face::classify(rgb("#969696"));
    assert_eq!(bright.hair, HairColor::Blonde);
    assert_eq!(bright.skin, SkinTone::Fair);
}

#[test]
fn brightness_boundaries() {
    // 79 vs 80: the 80 boundary goes to the middle bucket
    assert_eq!(face::classify(rgb("#4f4f4f")).hair, HairColor::Black);
    assert_eq!(face::classify(rgb("#505050")).hair, HairColor::Brown);

    // 149 vs 150
    assert_eq!(face::classify(rgb("#959595")).hair, HairColor::Brown);
    assert_eq!(face::classify(rgb("#969696")).hair, HairColor::Blonde);
}

#[test]
fn eye_color_is_constant_and_hex_is_shared() {
    let attrs = face::classify(rgb("#123456"));
    assert_eq!(attrs.eye, EyeColor::Brown);
    assert_eq!(attrs.hex, "#123456");

    let delta = attrs.delta();
    let hexes: Vec<&str> = delta
        .iter()
        .filter(|(key, _)| key.name().ends_with("Hex"))
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(hexes, vec!["#123456", "#123456", "#123456"]);
}

#[test]
fn undertone_channel_dominance() {
    let cool = undertone::classify(rgb("#0000ff"));
    assert_eq!(cool.vein, VeinColor::BluePurple);
    assert_eq!(cool.undertone, Undertone::Cool);

    let warm = undertone::classify(rgb("#00ff00"));
    assert_eq!(warm.vein, VeinColor::Greenish);
    assert_eq!(warm.undertone, Undertone::Warm);

    // a tie is not dominance
    let tie = undertone::classify(rgb("#ffffff"));
    assert_eq!(tie.vein, VeinColor::BluePurple);
    assert_eq!(tie.undertone, Undertone::Neutral);

    // red dominance also falls through to neutral
    let red = undertone::classify(rgb("#ff0000"));
    assert_eq!(red.vein, VeinColor::BluePurple);
    assert_eq!(red.undertone, Undertone::Neutral);
}

#[test]
fn classification_end_to_end_from_photo_bytes() {
    let attrs = face::extract(&fixtures::solid_png(0x96, 0x96, 0x96)).unwrap();
    assert_eq!(attrs.hair, HairColor::Blonde);
    assert_eq!(attrs.skin, SkinTone::Fair);
    assert_eq!(attrs.hex, "#969696");

    let veins = undertone::extract(&fixtures::solid_png(20, 30, 200)).unwrap();
    assert_eq!(veins.undertone, Undertone::Cool);
}
