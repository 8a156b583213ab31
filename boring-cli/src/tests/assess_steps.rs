//! Behaviour-driven step definitions driving the assess CLI scenarios.

use super::helpers::{SAMPLE_PLACES, StubProviderBuilder};
use super::*;
use crate::assess::run_assess_with;
use boring_core::PlacesError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct AssessWorld {
    builder: RefCell<Option<StubProviderBuilder>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl AssessWorld {
    fn new() -> Self {
        Self {
            builder: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args(&self, args: &[&str]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["boring".to_owned(), "assess".to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }
}

#[fixture]
fn world() -> AssessWorld {
    AssessWorld::new()
}

#[given("a places service reporting a bar, a cafe and a chapel")]
fn service_with_places(#[from(world)] world: &AssessWorld) {
    *world.builder.borrow_mut() = Some(StubProviderBuilder::with_places_json(SAMPLE_PLACES));
}

#[given("a places service that denies the request")]
fn service_denied(#[from(world)] world: &AssessWorld) {
    *world.builder.borrow_mut() = Some(StubProviderBuilder::with_error(
        PlacesError::RequestDenied {
            message: "The provided API key is invalid.".to_owned(),
        },
    ));
}

#[given("I pass a location in lower Manhattan")]
fn pass_location(#[from(world)] world: &AssessWorld) {
    world.push_args(&[
        "--latitude",
        "40.7128",
        "--longitude",
        "-74.006",
    ]);
}

#[given("I pass a latitude of 95 degrees")]
fn pass_bad_latitude(#[from(world)] world: &AssessWorld) {
    world.push_args(&["--latitude", "95", "--longitude", "0"]);
}

#[given("I pass an API key")]
fn pass_api_key(#[from(world)] world: &AssessWorld) {
    world.push_args(&["--api-key", "test-key"]);
}

#[given("I ask for text output")]
fn ask_for_text(#[from(world)] world: &AssessWorld) {
    world.push_args(&["--format", "text"]);
}

#[when("I run the assess command")]
fn run_assess_command(#[from(world)] world: &AssessWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Assess(args) => {
            let guard = world.builder.borrow();
            let builder = guard.as_ref().expect("builder configured");
            let mut buffer = world.stdout.borrow_mut();
            run_assess_with(args, builder, &mut *buffer)
        }
        Command::Score(_) => panic!("expected assess command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints a JSON report with 2 landmarks and their score details")]
fn prints_json_report(#[from(world)] world: &AssessWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = world.stdout.borrow();
    let report: serde_json::Value =
        serde_json::from_slice(&stdout).expect("output should be JSON");
    assert_eq!(report["totalLandmarks"], 2);
    assert_eq!(report["userLocation"]["latitude"], 40.7128);
    assert_eq!(report["landmarks"][0]["categories"], serde_json::json!(["bar"]));
    assert_eq!(
        report["landmarks"][0]["scoreDetails"],
        serde_json::json!({
            "distanceComponent": 1.0,
            "ratingComponent": 1.0,
            "ratingCountComponent": 1.0
        })
    );
    assert_eq!(report["landmarks"][1]["scoreDetails"]["ratingComponent"], 0.0);
}

#[then("the command succeeds and calls the area dull")]
fn calls_area_dull(#[from(world)] world: &AssessWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    assert!(stdout.starts_with("Area at (40.7128, -74.006) is dull"), "got {stdout}");
}

#[then("the command fails because the api-key option is missing")]
fn fails_missing_api_key(#[from(world)] world: &AssessWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_API_KEY);
            assert_eq!(*env, ENV_ASSESS_API_KEY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the location is invalid")]
fn fails_invalid_location(#[from(world)] world: &AssessWorld) {
    let error = world.error();
    assert!(error.starts_with("InvalidCoordinate"), "got {error}");
}

#[then("the command fails with a places error")]
fn fails_with_places_error(#[from(world)] world: &AssessWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::Places(PlacesError::RequestDenied { .. }) => {
            assert_eq!(
                error.to_string(),
                "places request denied: The provided API key is invalid."
            );
        }
        other => panic!("expected Places error, found {other:?}"),
    }
    assert!(world.stdout.borrow().is_empty());
}

macro_rules! register_assess_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/assess_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: AssessWorld) {
            let _ = world;
        }
    };
}

register_assess_scenario!(assess_json, "assessing an area as JSON");
register_assess_scenario!(assess_text, "assessing an area as text");
register_assess_scenario!(assess_missing_key, "rejecting a missing API key");
register_assess_scenario!(assess_bad_latitude, "rejecting an impossible latitude");
register_assess_scenario!(assess_denied, "surfacing a denied places request");
