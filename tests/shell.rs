use std::fs;
use std::io::Cursor;

use bus_fee_manager::{
    load_or_seed, load_routes, load_students, run_app, App, Config, RouteStore, StudentStore,
};

struct Outcome {
    output: String,
    routes: RouteStore,
    students: StudentStore,
}

fn run_session(config: &Config, input: impl AsRef<[u8]>) -> Outcome {
    let (routes, students) = load_or_seed(config).unwrap();
    let mut app = App::new(
        config.clone(),
        routes,
        students,
        Cursor::new(input.as_ref().to_vec()),
        Vec::new(),
    );
    run_app(&mut app).unwrap();

    let routes = app.routes().clone();
    let students = app.students().clone();
    let output = String::from_utf8(app.into_output()).unwrap();
    Outcome {
        output,
        routes,
        students,
    }
}

#[test]
fn test_first_run_seeds_and_exit_persists() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path().join("data"));

    let outcome = run_session(&config, "1\n\n0\n");
    assert!(outcome.output.contains("College Bus Fee & Route Manager"));
    assert!(outcome
        .output
        .contains("ID: 1 | North Campus | Distance: 4.50 km | Rate: 6.00 per km"));
    assert!(outcome.output.trim_end().ends_with("Goodbye."));

    let mut routes = RouteStore::new();
    let mut students = StudentStore::new();
    assert_eq!(load_routes(&config.routes_path(), &mut routes).unwrap(), 3);
    assert_eq!(load_students(&config.students_path(), &mut students).unwrap(), 2);
    assert_eq!(routes.records(), outcome.routes.records());
}

#[test]
fn test_add_route_student_and_issue_slip() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path()).without_seed();

    let input = "2\nRing Road\n12\n5\n\n\
                 5\nMeera Iyer\n1\n\n\
                 7\n1\n\n\
                 8\n\n\
                 0\n";
    let outcome = run_session(&config, input);

    assert!(outcome.output.contains("Added route with ID 1"));
    assert!(outcome.output.contains("Added student with ID 1"));
    assert!(outcome.output.contains("Fee for Meera Iyer (ID 1): 110.00"));
    assert!(outcome.output.contains("Fee slip appended to"));
    assert!(outcome
        .output
        .contains("Route Ring Road (ID 1): 1 students | Revenue: 110.00"));

    let log = fs::read_to_string(config.receipts_path()).unwrap();
    assert!(log.contains("Student ID: 1\nName: Meera Iyer\nRoute: Ring Road (ID 1)\n"));
    assert!(log.contains("Distance: 12.00 km | Rate: 5.00 | Amount: 110.00"));
}

#[test]
fn test_invalid_input_is_reported_and_reprompted() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path()).without_seed();

    let input = "banana\n\n\
                 2\n   \nShort Hop\nfar\n-2\n3\n4\n\n\
                 0\n";
    let outcome = run_session(&config, input);

    assert!(outcome.output.contains("Invalid input."));
    assert!(outcome.output.contains("Route name is required."));
    assert!(outcome.output.contains("Distance must be a number."));
    assert!(outcome.output.contains("Distance must be zero or more."));
    assert!(outcome.output.contains("Added route with ID 1"));

    let route = outcome.routes.get(1).unwrap();
    assert_eq!(route.name, "Short Hop");
    assert_eq!(route.distance_km, 3.0);
    assert_eq!(route.rate_per_km, 4.0);
}

#[test]
fn test_missing_records_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path()).without_seed();

    let outcome = run_session(&config, "3\n9\n\n6\n9\n\n7\n9\n\n0\n");
    assert!(outcome.output.contains("No route with ID 9."));
    assert!(outcome.output.contains("No student with ID 9."));
    assert!(outcome.output.contains("Student not found."));
}

#[test]
fn test_dangling_route_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path()).without_seed();

    let outcome = run_session(&config, "5\nLone Rider\n42\n\n7\n1\n\n0\n");
    assert!(outcome.output.contains("Added student with ID 1"));
    assert!(outcome.output.contains("No route with ID 42"));
    assert!(outcome.output.contains("Fee for Lone Rider (ID 1): 0.00"));
    assert!(outcome.output.contains("Failed to write fee slip: route 42 not found"));
    assert_eq!(outcome.students.get(1).unwrap().route_id, 42);
    assert!(!config.receipts_path().exists());
}

#[test]
fn test_counter_reseeds_from_saved_ids() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());

    // Seeded routes 1..=3; drop route 3 and save.
    let first = run_session(&config, "3\n3\n\n6\n2\n\n9\n\n0\n");
    assert!(first.output.contains("Removed route 3 (West Market)."));
    assert!(first.output.contains("Removed student 2 (Priya Singh)."));

    let outcome = run_session(&config, "2\nSouth Gate\n6\n2\n\n0\n");
    assert!(outcome.output.contains("Added route with ID 3"));
    let ids: Vec<_> = outcome.routes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_end_of_input_still_saves() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path()).without_seed();

    let outcome = run_session(&config, "2\nNight Bus\n7\n3\n");
    assert!(outcome.output.contains("Added route with ID 1"));
    assert!(outcome.output.trim_end().ends_with("Goodbye."));

    let mut routes = RouteStore::new();
    assert_eq!(load_routes(&config.routes_path(), &mut routes).unwrap(), 1);
    assert_eq!(routes.records()[0].name, "Night Bus");
}

#[test]
fn test_non_utf8_input_is_invalid_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path()).without_seed();

    let mut input = b"2\nNight Bus\n7\n3\n\n".to_vec();
    input.extend_from_slice(b"\xe9\n\n");
    input.extend_from_slice(b"2\nDay\xffBus\n4\n\xe9\n2\n\n0\n");
    let outcome = run_session(&config, input);

    assert!(outcome.output.contains("Invalid input."));
    assert!(outcome.output.contains("Rate must be a number."));
    assert!(outcome.output.contains("Added route with ID 2"));
    assert!(outcome.output.trim_end().ends_with("Goodbye."));

    let mut routes = RouteStore::new();
    assert_eq!(load_routes(&config.routes_path(), &mut routes).unwrap(), 2);
    assert_eq!(routes.records()[0].name, "Night Bus");
    assert_eq!(routes.records()[1].name, "Day\u{FFFD}Bus");
}

#[test]
fn test_captured_output_has_no_escape_codes() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path()).without_seed();

    let outcome = run_session(&config, "1\n\nnope\n\n0\n");
    assert!(outcome.output.contains("Invalid input."));
    assert!(!outcome.output.contains('\u{1b}'));
}
