use indoor_propagation::access_point::read_access_points;
use indoor_propagation::assignment::{AssignmentTable, PathLossMatrix};
use indoor_propagation::calibration::CalibrationCoefficients;
use indoor_propagation::error::Result;
use indoor_propagation::floor_plan::FloorPlan;
use indoor_propagation::path_loss::FIXED_REFERENCE_FREQUENCY_GHZ;
use indoor_propagation::station::{random_stations, read_stations, Station};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(StructOpt)]
struct Opt {
    /// Floor plan CSV with one wall per row (x1,y1,x2,y2), in meters
    #[structopt(long, parse(from_os_str))]
    floor_plan: PathBuf,

    /// Calibration file: A1 B1 A2 B2 followed by one attenuation per wall, in dB
    #[structopt(long, parse(from_os_str))]
    calibration: PathBuf,

    /// Access point CSV (id,x,y,channel,ssid); earlier rows win ties
    #[structopt(long, parse(from_os_str))]
    access_points: PathBuf,

    /// Station CSV (id,x,y)
    #[structopt(long, parse(from_os_str), required_unless = "random-stations")]
    stations: Option<PathBuf>,

    /// Place this many stations uniformly inside the floor plan instead
    #[structopt(long, conflicts_with = "stations")]
    random_stations: Option<usize>,

    /// Seed for random station placement
    #[structopt(long, default_value = "1")]
    seed: u64,

    /// Attenuation in dB applied to every wall when the calibration has no per-wall values
    #[structopt(long)]
    default_wall_attenuation: Option<f64>,

    /// Reference frequency of the calibration in GHz
    #[structopt(long, default_value = "5.0")]
    reference_frequency: f64,

    /// Directory the CSV reports are written to
    #[structopt(long, default_value = "assignment-results", parse(from_os_str))]
    output_dir: PathBuf,

    /// Also write the full station x access point path loss matrix
    #[structopt(long)]
    matrix: bool,

    /// Log filter used when RUST_LOG is not set
    #[structopt(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn write_rows<T: Serialize>(path: &Path, rows: impl Iterator<Item = T>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(&row)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), "report written");
    Ok(())
}

fn load_stations(opt: &Opt, floor_plan: &FloorPlan) -> Result<Vec<Station>> {
    if let Some(path) = &opt.stations {
        return read_stations(File::open(path)?);
    }
    // structopt requires one of --stations / --random-stations
    let count = opt.random_stations.unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(opt.seed);
    random_stations(count, floor_plan, &mut rng)
}

fn run(opt: Opt) -> Result<()> {
    let calibration = CalibrationCoefficients::load(&opt.calibration, opt.reference_frequency)?;
    let floor_plan = FloorPlan::load(&opt.floor_plan, &calibration, opt.default_wall_attenuation)?;
    let per_wall = !calibration.wall_attenuation_db.is_empty();
    info!(walls = floor_plan.len(), per_wall, "floor plan loaded");
    if floor_plan.is_empty() {
        warn!("floor plan has no walls, every path is line of sight");
    }

    let access_points = read_access_points(File::open(&opt.access_points)?)?;
    let stations = load_stations(&opt, &floor_plan)?;
    info!(
        access_points = access_points.len(),
        stations = stations.len(),
        "topology loaded"
    );

    for ap in &access_points {
        if let Some(freq) = ap.channel.center_frequency_ghz() {
            if (freq - calibration.reference_frequency_ghz).abs() > 1.0 {
                warn!(
                    access_point = %ap.id,
                    channel = ap.channel.number,
                    channel_ghz = freq,
                    reference_ghz = calibration.reference_frequency_ghz,
                    fixed_ghz = FIXED_REFERENCE_FREQUENCY_GHZ,
                    "channel band differs from the calibration reference frequency"
                );
            }
        }
    }

    let table = AssignmentTable::build(&stations, &access_points, &floor_plan, &calibration)?;
    for (ap, count) in table.load(&access_points) {
        info!(access_point = ap, stations = count, "access point load");
    }

    if !opt.output_dir.exists() {
        fs::create_dir_all(&opt.output_dir)?;
    }
    write_rows(&opt.output_dir.join("assignments.csv"), table.rows())?;

    if opt.matrix {
        let matrix = PathLossMatrix::compute(&stations, &access_points, &floor_plan, &calibration);
        write_rows(&opt.output_dir.join("path_loss_matrix.csv"), matrix.rows())?;
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    init_logging(&opt.log_level);

    if let Err(e) = run(opt) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
