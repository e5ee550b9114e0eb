use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use planwpl::consts::{
    DEFAULT_GIMBAL_ANGLE, DEFAULT_INITIAL_WAIT, DEFAULT_LOITER_RADIUS, DEFAULT_SPEED_FLYING,
    DEFAULT_SPEED_LANDING, DEFAULT_SPEED_TAKEOFF, DEFAULT_WAYPOINT_RADIUS, DEFAULT_WAYPOINT_TIME,
    OUTPUT_FRAME, WPL_LINE_ENDING,
};
use planwpl::plan::load_plan;
use planwpl::protocol::{ImageFormat, MavFrame};

use planwpl::prelude::*;

const PLAN_EXTENSION: &str = "plan";
const WPL_EXTENSION: &str = "txt";

/// Convert a QGroundControl `.plan` file into a QGC WPL 120 flight plan for the Parrot Anafi.
#[derive(Parser, Debug)]
#[command(name = "planwpl", author, version, about, long_about = None)]
struct Cli {
    /// Path to .plan file to convert
    plan_path: PathBuf,

    /// Output path (default: same as .plan file with .txt extension)
    #[arg(long, visible_alias = "out-path")]
    out: Option<PathBuf>,

    /// Override planned home: "lat,lon" or "lat,lon,alt"
    #[arg(long, visible_alias = "force-home", allow_hyphen_values = true)]
    home: Option<HomeOverride>,

    /// Takeoff speed, m/s [1.0, 10.0]
    #[arg(long, default_value_t = DEFAULT_SPEED_TAKEOFF)]
    speed_takeoff: f64,

    /// Speed between waypoints, m/s [1.0, 10.0]
    #[arg(long, default_value_t = DEFAULT_SPEED_FLYING)]
    speed_flying: f64,

    /// Landing speed, m/s [1.0, 10.0]
    #[arg(long, default_value_t = DEFAULT_SPEED_LANDING)]
    speed_landing: f64,

    /// Acceptance radius for waypoints that do not set one, m
    #[arg(long, default_value_t = DEFAULT_WAYPOINT_RADIUS)]
    waypoint_radius: f64,

    /// Time to hold at waypoints that do not set one, s
    #[arg(long, default_value_t = DEFAULT_WAYPOINT_TIME)]
    waypoint_time: f64,

    /// Radius for loiter items that do not set one, m
    #[arg(long, default_value_t = DEFAULT_LOITER_RADIUS)]
    loiter_radius: f64,

    /// Image format: snapshot, jpeg, jpeg-fisheye, raw (raw DNG is unreliable)
    #[arg(long, default_value = "jpeg")]
    image_format: ImageFormat,

    /// Gimbal tilt before takeoff, degrees (negative is down) [-90.0, 90.0]
    #[arg(long, default_value_t = DEFAULT_GIMBAL_ANGLE, allow_negative_numbers = true)]
    gimbal_angle: f64,

    /// Delay before takeoff (time to connect FreeFlight), s
    #[arg(long, default_value_t = DEFAULT_INITIAL_WAIT)]
    initial_wait: f64,

    /// Turn towards each next waypoint instead of keeping yaw from the plan
    #[arg(long)]
    track_yaw: bool,

    /// Do not add takeoff, return to home, and landing sequence
    #[arg(long)]
    no_envelope: bool,

    /// Altitude of home waypoints (default: altitude of the first waypoint), m
    #[arg(long)]
    envelope_altitude: Option<f64>,

    /// Output coordinate frame (only 3 is supported by the autopilot)
    #[arg(long, default_value_t = OUTPUT_FRAME.id())]
    frame: u8,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn) // Suppress everything below `warn` for third-party modules.
        .filter_module(env!("CARGO_PKG_NAME"), log_level) // Log level for current package
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.plan_path.extension().and_then(|ext| ext.to_str()) != Some(PLAN_EXTENSION) {
        return Err(Error::InvalidConf(format!(
            "{:?} is not a .{PLAN_EXTENSION} file",
            cli.plan_path
        )));
    }
    let out_path = cli
        .out
        .clone()
        .unwrap_or_else(|| cli.plan_path.with_extension(WPL_EXTENSION));

    let conf = ConverterConf::builder()
        .frame(MavFrame::from(cli.frame))
        .speed_takeoff(cli.speed_takeoff)
        .speed_flying(cli.speed_flying)
        .speed_landing(cli.speed_landing)
        .waypoint_radius(cli.waypoint_radius)
        .waypoint_time(cli.waypoint_time)
        .loiter_radius(cli.loiter_radius)
        .image_format(cli.image_format)
        .gimbal_angle(cli.gimbal_angle)
        .initial_wait(cli.initial_wait)
        .track_yaw(cli.track_yaw)
        .envelope(!cli.no_envelope)
        .envelope_altitude(cli.envelope_altitude)
        .build()?;
    log::debug!("{conf:?}");

    let document = load_plan(&cli.plan_path)?;
    match (&cli.home, document.home()) {
        (Some(home), Some(planned)) => {
            log::info!("home override {home:?} replaces planned home {planned:?}")
        }
        (None, None) => log::warn!("plan has no home position and no override is provided"),
        _ => {}
    }

    let wpl = convert_to_wpl(&document, cli.home.as_ref(), &conf)?;
    fs::write(&out_path, &wpl)?;

    log::info!(
        "[{out_path:?}] written {} waypoints",
        wpl.split(WPL_LINE_ENDING)
            .filter(|line| !line.is_empty())
            .count()
            - 1
    );
    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_original_options() {
        let cli = Cli::try_parse_from([
            "planwpl",
            "mission.plan",
            "--out",
            "out.txt",
            "--force-home",
            "-33.86,151.21,12",
            "--gimbal-angle",
            "-45",
            "--image-format",
            "jpeg-fisheye",
            "--track-yaw",
        ])
        .unwrap();

        assert_eq!(cli.plan_path, PathBuf::from("mission.plan"));
        assert_eq!(cli.out, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.home, Some(HomeOverride::new(-33.86, 151.21, Some(12.0))));
        assert_eq!(cli.gimbal_angle, -45.0);
        assert_eq!(cli.image_format, ImageFormat::JpegFisheye);
        assert!(cli.track_yaw);
        assert!(!cli.no_envelope);
        assert_eq!(cli.frame, 3);
    }

    #[test]
    fn non_plan_inputs_are_rejected() {
        let cli = Cli::try_parse_from(["planwpl", "mission.json"]).unwrap();
        assert!(matches!(run(cli), Err(Error::InvalidConf(_))));
    }
}
