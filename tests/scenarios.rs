use indoor_propagation::access_point::read_access_points;
use indoor_propagation::floor_plan::read_walls;
use indoor_propagation::station::read_stations;
use indoor_propagation::{
    assign_station, path_loss, AssignmentTable, CalibrationCoefficients, Error, FloorPlan, Point,
    Regime, Station,
};

const OFFICE_PLAN: &str = "\
x1,y1,x2,y2
0,0,20,0
20,0,20,10
20,10,0,10
0,10,0,0
10,0,10,4
10,6,10,10
";

const OFFICE_CALIBRATION: &str = "18.7 46.8 20 46.4\n0 0 0 0 9 9\n";

const OFFICE_ACCESS_POINTS: &str = "\
id,x,y,channel,ssid
west,5,5,36,office-w
east,15,5,44,office-e
";

fn office() -> (FloorPlan, CalibrationCoefficients) {
    let calibration = CalibrationCoefficients::parse(OFFICE_CALIBRATION, 5.0).unwrap();
    let walls = read_walls(OFFICE_PLAN.as_bytes()).unwrap();
    let plan = FloorPlan::calibrated(walls, &calibration, None).unwrap();
    (plan, calibration)
}

#[test]
fn single_wall_end_to_end() {
    let calibration = CalibrationCoefficients::parse("18.7 46.8 20 46.4 12", 5.0).unwrap();
    let walls = read_walls("x1,y1,x2,y2\n0,0,0,10\n".as_bytes()).unwrap();
    let plan = FloorPlan::calibrated(walls, &calibration, None).unwrap();

    let result = path_loss(&Point::new(-5.0, 5.0), &Point::new(5.0, 5.0), &plan, &calibration);
    let expected = 20.0 * (10.0f64 / 1.0).log10() + 46.4 + 0.0 + 12.0;
    assert!((result.loss_db - expected).abs() < 1e-9);
    assert_eq!(result.intersected_walls, vec![0]);
}

#[test]
fn nearer_access_point_is_chosen_in_open_space() {
    let calibration = CalibrationCoefficients::parse("18.7 46.8 20 46.4", 5.0).unwrap();
    let plan = FloorPlan::calibrated(Vec::new(), &calibration, None).unwrap();
    let aps = read_access_points("id,x,y,channel,ssid\nap0,0,0,1,a\nap1,20,0,6,b\n".as_bytes()).unwrap();
    let station = Station::new("sta", Point::new(5.0, 0.0));

    let chosen = assign_station(&station, &aps, &plan, &calibration).unwrap();
    assert_eq!(chosen.id, "ap0");
    assert_eq!(chosen.channel.number, 1);
}

#[test]
fn doorway_lets_signal_through_unobstructed() {
    let (plan, calibration) = office();

    // through the gap between the two partition walls
    let through_door = path_loss(&Point::new(5.0, 5.0), &Point::new(15.0, 5.0), &plan, &calibration);
    assert_eq!(through_door.regime, Regime::LineOfSight);

    // through the lower partition
    let through_wall = path_loss(&Point::new(5.0, 2.0), &Point::new(15.0, 2.0), &plan, &calibration);
    assert_eq!(through_wall.intersected_walls, vec![4]);
    let expected = 20.0 + 46.4 + 9.0;
    assert!((through_wall.loss_db - expected).abs() < 1e-9);

    // outer walls carry no attenuation but still switch the regime
    let outside = path_loss(&Point::new(5.0, 5.0), &Point::new(5.0, -5.0), &plan, &calibration);
    assert_eq!(outside.intersected_walls, vec![0]);
    assert_eq!(outside.regime, Regime::Obstructed);
    assert!((outside.loss_db - (20.0 + 46.4)).abs() < 1e-9);
}

#[test]
fn office_assignment() {
    let (plan, calibration) = office();
    let aps = read_access_points(OFFICE_ACCESS_POINTS.as_bytes()).unwrap();
    let stations = read_stations("id,x,y\nsta0,2,2\nsta1,18,8\nsta2,11,1\n".as_bytes()).unwrap();

    let table = AssignmentTable::build(&stations, &aps, &plan, &calibration).unwrap();
    let chosen: Vec<&str> = table.assignments().iter().map(|a| a.access_point.as_str()).collect();
    assert_eq!(chosen, vec!["west", "east", "east"]);
    assert_eq!(table.get("sta2").unwrap().channel.ssid, "office-e");
}

#[test]
fn assignment_is_stable_across_runs() {
    let (plan, calibration) = office();
    let aps = read_access_points(OFFICE_ACCESS_POINTS.as_bytes()).unwrap();
    // equidistant from both access points, through the doorway
    let stations = vec![Station::new("mid", Point::new(10.0, 5.0))];

    for _ in 0..5 {
        let table = AssignmentTable::build(&stations, &aps, &plan, &calibration).unwrap();
        assert_eq!(table.assignments()[0].access_point, "west");
    }
}

#[test]
fn short_calibration_aborts_setup() {
    let calibration = CalibrationCoefficients::parse("18.7 46.8 20 46.4 0 0 0", 5.0).unwrap();
    let walls = read_walls(OFFICE_PLAN.as_bytes()).unwrap();
    match FloorPlan::calibrated(walls, &calibration, Some(5.0)) {
        Err(Error::WallCountMismatch { walls: 6, coefficients: 3 }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn unusable_calibration_aborts_before_assignment() {
    for &(content, frequency) in &[
        ("NaN 46.8 20 46.4", 5.0),
        ("18.7 46.8 inf 46.4", 5.0),
        ("18.7 46.8 20 46.4", 0.0),
        ("18.7 46.8 20 46.4", -2.4),
    ] {
        match CalibrationCoefficients::parse(content, frequency) {
            Err(Error::InvalidCoefficient { .. }) => {}
            other => panic!("{:?} at {} GHz gave {:?}", content, frequency, other),
        }
    }

    // a usable calibration picks the near access point even when it is declared last
    let calibration = CalibrationCoefficients::parse("18.7 46.8 20 46.4", 5.0).unwrap();
    let plan = FloorPlan::calibrated(Vec::new(), &calibration, None).unwrap();
    let aps = read_access_points("id,x,y,channel,ssid\nfar,100,0,1,a\nnear,0,0,6,b\n".as_bytes()).unwrap();
    let station = Station::new("sta", Point::new(5.0, 0.0));
    assert_eq!(assign_station(&station, &aps, &plan, &calibration).unwrap().id, "near");
}
