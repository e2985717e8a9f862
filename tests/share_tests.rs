// Host-side tests for share links, preset import and the comparison harness.
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
mod store {
    include!("../src/core/store.rs");
}
mod sim {
    include!("../src/core/sim.rs");
}
mod share {
    include!("../src/core/share.rs");
}
mod compare {
    include!("../src/core/compare.rs");
}

use compare::*;
use glam::Vec2;
use params::*;
use share::*;
use sim::{LoopState, SimState};

const EXAMPLE_LINK: &str =
    "https://example.com/labs/camera?followSpeed=0.5&lag=0.2&easing=quadOut&shake=3";

fn expected_example() -> CameraParams {
    CameraParams {
        follow_speed: 0.5,
        lag: 0.2,
        easing: Easing::QuadOut,
        shake: 3.0,
    }
}

#[test]
fn share_path_uses_lab_route() {
    assert_eq!(
        share_path(&CameraParams::default()),
        "/labs/camera?followSpeed=0.12&lag=0.1&easing=easeInOut&shake=0"
    );
}

#[test]
fn share_link_is_absolute_and_reimports() {
    let p = expected_example();
    let link = share_link("https://example.com/", &p);
    assert_eq!(link, EXAMPLE_LINK);
    assert_eq!(import_preset(&link), Ok(p));
}

#[test]
fn import_reads_example_link() {
    assert_eq!(import_preset(EXAMPLE_LINK), Ok(expected_example()));
}

#[test]
fn import_ignores_fragment_and_surrounding_whitespace() {
    let p = import_preset("  http://localhost:3000/labs/camera?lag=0.3#top  ").unwrap();
    assert_eq!(p.lag, 0.3);
    assert_eq!(p.follow_speed, CameraParams::default().follow_speed);
}

#[test]
fn import_repairs_bad_values_in_a_well_formed_link() {
    let link = "https://example.com/labs/camera?followSpeed=abc&easing=wobble";
    let p = import_preset(link).unwrap();
    assert_eq!(p, CameraParams::default());
    let p = import_preset("https://example.com").unwrap();
    assert_eq!(p, CameraParams::default());
}

#[test]
fn import_rejects_malformed_links() {
    assert_eq!(import_preset(""), Err(ImportError::Empty));
    assert_eq!(import_preset("   "), Err(ImportError::Empty));
    let malformed = [
        "followSpeed=0.5",
        "://example.com/?lag=1",
        "1http://example.com",
        "/labs/camera?lag=0.3",
        "https://",
        "http://exa mple.com/labs/camera?lag=0.3",
        "https://example.com:notaport/labs/camera?lag=0.3",
        "https://[bad/labs/camera?lag=0.3",
        "https://exa<mple>.com/?lag=0.3",
    ];
    for link in malformed {
        assert!(
            matches!(import_preset(link), Err(ImportError::Malformed { .. })),
            "accepted {:?}",
            link
        );
    }
}

#[test]
fn import_reports_the_parser_error() {
    assert_eq!(
        import_preset("https://example.com:notaport/?lag=0.3"),
        Err(ImportError::Malformed {
            link: "https://example.com:notaport/?lag=0.3".to_string(),
            source: url::ParseError::InvalidPort,
        })
    );
    assert!(matches!(
        import_preset("/labs/camera?lag=0.3"),
        Err(ImportError::Malformed {
            source: url::ParseError::RelativeUrlWithoutBase,
            ..
        })
    ));
}

#[test]
fn import_error_messages_name_the_link() {
    let err = import_preset("nope").unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn comparison_sides_start_independent_with_defaults() {
    let cmp = Comparison::new(Vec2::new(800.0, 500.0));
    assert_eq!(cmp.a.label, SideLabel::A);
    assert_eq!(cmp.b.label, SideLabel::B);
    assert_eq!(cmp.a.store.params(), CameraParams::default());
    assert_eq!(cmp.b.store.params(), CameraParams::default());
    assert_eq!(SideLabel::B.title(), "Preset B");
}

#[test]
fn import_into_a_leaves_b_untouched() {
    let mut cmp = Comparison::new(Vec2::new(800.0, 500.0));
    cmp.b.sim.pointer_moved(Vec2::new(0.0, 0.0));
    cmp.b.sim.step(1.0 / 60.0);
    let b_state = cmp.b.sim.state();

    let imported = cmp.import_into_a(EXAMPLE_LINK).unwrap();
    assert_eq!(imported, expected_example());
    assert_eq!(cmp.a.store.params(), expected_example());
    assert_eq!(cmp.a.sim.params(), expected_example());

    assert_eq!(cmp.b.store.params(), CameraParams::default());
    assert_eq!(cmp.b.sim.params(), CameraParams::default());
    assert_eq!(cmp.b.sim.state(), b_state);
}

#[test]
fn failed_import_changes_nothing() {
    let mut cmp = Comparison::new(Vec2::new(800.0, 500.0));
    cmp.a.set_param(ParamUpdate::Lag(0.75));
    cmp.a.sim.pointer_moved(Vec2::new(10.0, 10.0));
    cmp.a.sim.step(1.0 / 60.0);
    let a_state = cmp.a.sim.state();

    assert!(cmp.import_into_a("not a url").is_err());
    assert!(cmp.import_into_a("http://exa mple.com/labs/camera?lag=0.3").is_err());
    assert!(cmp.import_into_a("https://[bad/labs/camera?lag=0.3").is_err());
    assert_eq!(cmp.a.store.params().lag, 0.75);
    assert_eq!(cmp.a.sim.state(), a_state);
}

#[test]
fn side_changes_restart_its_simulation() {
    let mut cmp = Comparison::new(Vec2::new(800.0, 500.0));
    let centered = SimState::centered(Vec2::new(800.0, 500.0));
    cmp.b.sim.pointer_moved(Vec2::new(0.0, 0.0));
    cmp.b.sim.step(1.0 / 60.0);
    assert_ne!(cmp.b.sim.state(), centered);

    cmp.side_mut(SideLabel::B).set_param(ParamUpdate::FollowSpeed(0.8));
    assert_eq!(cmp.b.sim.params().follow_speed, 0.8);
    assert_eq!(cmp.b.sim.state(), centered);
    assert_eq!(cmp.b.sim.loop_state(), LoopState::Running);

    cmp.b.reset();
    assert_eq!(cmp.b.sim.params(), CameraParams::default());
}

#[test]
fn hydrate_restarts_with_merged_params() {
    let mut cmp = Comparison::new(Vec2::new(800.0, 500.0));
    cmp.a.set_param(ParamUpdate::Shake(9.0));
    cmp.a.hydrate_from(&ParamPatch {
        easing: Some(Easing::Linear),
        ..ParamPatch::default()
    });
    let p = cmp.a.sim.params();
    assert_eq!(p.easing, Easing::Linear);
    assert_eq!(p.shake, CameraParams::default().shake);
}
