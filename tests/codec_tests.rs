// Host-side tests for the query-string codec.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod easing {
    include!("../src/core/easing.rs");
}
mod params {
    include!("../src/core/params.rs");
}
mod codec {
    include!("../src/core/codec.rs");
}

use codec::*;
use params::*;

#[test]
fn decode_number_falls_back_when_absent_or_garbage() {
    assert_eq!(decode_number(None, 0.12), 0.12);
    assert_eq!(decode_number(Some("abc"), 0.12), 0.12);
    assert_eq!(decode_number(Some(""), 0.12), 0.12);
    assert_eq!(decode_number(Some("0.5"), 0.12), 0.5);
}

#[test]
fn decode_number_rejects_non_finite_values() {
    assert_eq!(decode_number(Some("NaN"), 1.0), 1.0);
    assert_eq!(decode_number(Some("inf"), 1.0), 1.0);
    assert_eq!(decode_number(Some("-infinity"), 1.0), 1.0);
    assert_eq!(decode_number(Some("1e999"), 1.0), 1.0); // overflows to inf
}

#[test]
fn decode_number_accepts_padding_and_exponents() {
    assert_eq!(decode_number(Some("  0.25 "), 0.0), 0.25);
    assert_eq!(decode_number(Some("1e-3"), 0.0), 0.001);
    assert_eq!(decode_number(Some("-2"), 0.0), -2.0);
}

#[test]
fn decode_enum_only_accepts_exact_members() {
    assert_eq!(
        decode_enum(Some("bogus"), &Easing::ALL, Easing::EaseInOut),
        Easing::EaseInOut
    );
    assert_eq!(
        decode_enum(Some("quadOut"), &Easing::ALL, Easing::EaseInOut),
        Easing::QuadOut
    );
    // case matters
    assert_eq!(
        decode_enum(Some("QuadOut"), &Easing::ALL, Easing::Linear),
        Easing::Linear
    );
    assert_eq!(decode_enum(None, &Easing::ALL, Easing::Linear), Easing::Linear);
}

#[test]
fn decode_enum_works_on_plain_strings() {
    let allowed = ["linear", "easeInOut", "quadOut"];
    assert_eq!(decode_enum(Some("linear"), &allowed, "easeInOut"), "linear");
    assert_eq!(decode_enum(Some("cubic"), &allowed, "easeInOut"), "easeInOut");
}

#[test]
fn encode_defaults_in_key_order() {
    let q = encode_params(&CameraParams::default());
    assert_eq!(q, "followSpeed=0.12&lag=0.1&easing=easeInOut&shake=0");
}

#[test]
fn encode_omits_absent_fields() {
    let patch = ParamPatch {
        lag: Some(0.25),
        ..ParamPatch::default()
    };
    assert_eq!(encode(&patch), "lag=0.25");
    assert_eq!(encode(&ParamPatch::default()), "");
}

// Value a range input reports at `index` steps: the browser snaps to a
// decimal step string, which `value_as_number` reads as f64.
fn slider_value(index: u32, step: f64, decimals: usize) -> f32 {
    let text = format!("{:.*}", decimals, index as f64 * step);
    text.parse::<f64>().unwrap() as f32
}

#[test]
fn every_slider_step_survives_encode_then_decode() {
    // Follow Speed and Lag: 0..=1 in 0.005 steps. Shake: 0..=10 in 0.1 steps.
    let unit_steps: Vec<f32> = (0..=200).map(|i| slider_value(i, 0.005, 3)).collect();
    let shake_steps: Vec<f32> = (0..=100).map(|i| slider_value(i, 0.1, 1)).collect();

    for easing in Easing::ALL {
        for (i, &follow_speed) in unit_steps.iter().enumerate() {
            for (j, &lag) in unit_steps.iter().enumerate() {
                let p = CameraParams {
                    follow_speed,
                    lag,
                    easing,
                    shake: shake_steps[(i + j) % shake_steps.len()],
                };
                assert_eq!(decode_query(&encode_params(&p)), p, "query: {}", encode_params(&p));
            }
        }
        for &shake in &shake_steps {
            let p = CameraParams {
                shake,
                easing,
                ..CameraParams::default()
            };
            assert_eq!(decode_query(&encode_params(&p)), p, "query: {}", encode_params(&p));
        }
    }
}

#[test]
fn decode_params_repairs_each_field_independently() {
    let p = decode_query("followSpeed=fast&lag=0.3&easing=bounce&shake=");
    let d = CameraParams::default();
    assert_eq!(p.follow_speed, d.follow_speed);
    assert_eq!(p.lag, 0.3);
    assert_eq!(p.easing, d.easing);
    assert_eq!(p.shake, d.shake);
}

#[test]
fn decode_of_empty_query_is_defaults() {
    assert_eq!(decode_query(""), CameraParams::default());
    assert_eq!(decode_query("?"), CameraParams::default());
    assert_eq!(decode_query("unrelated=1"), CameraParams::default());
}

#[test]
fn parse_query_decodes_escapes_and_plus() {
    let q = parse_query("?a=1&b=hello%20world&c=x+y&d&&e=%ZZ&f=%4");
    assert_eq!(q.get("a"), Some("1"));
    assert_eq!(q.get("b"), Some("hello world"));
    assert_eq!(q.get("c"), Some("x y"));
    assert_eq!(q.get("d"), Some(""));
    assert_eq!(q.get("e"), Some("%ZZ"));
    assert_eq!(q.get("f"), Some("%4"));
    assert_eq!(q.get("missing"), None);
}

#[test]
fn parse_query_first_occurrence_wins() {
    let q = parse_query("followSpeed=0.3&followSpeed=0.9");
    assert_eq!(q.get("followSpeed"), Some("0.3"));
    assert_eq!(decode_params(&q).follow_speed, 0.3);
}
