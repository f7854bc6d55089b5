use craftsim::{Scenario, ScenarioConfig, Vehicle};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "launch.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn display_state(craft: &Vehicle, t: f64) {
    let s = &craft.state;
    println!(
        "Time: {:.2} s | Pos: ({:.2}, {:.2}, {:.2}) km | Vel: ({:.2}, {:.2}, {:.2}) m/s | \
         Speed: {:.2} m/s | Fuel: {:.2} kg | Mass: {:.2} kg | Engine: {}",
        t,
        s.x.x / 1000.0,
        s.x.y / 1000.0,
        s.x.z / 1000.0,
        s.v.x,
        s.v.y,
        s.v.z,
        s.v.norm(),
        s.fuel_mass,
        craft.total_mass(),
        if s.engine_on { "ON" } else { "OFF" },
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let Scenario {
        parameters,
        bodies,
        mut vehicle,
    } = Scenario::build_scenario(scenario_cfg);

    let mut t = 0.0;
    display_state(&vehicle, t);

    while t < parameters.t_end {
        let result = craftsim::step_simulation(&mut vehicle, &bodies, parameters.h0)?;
        t += parameters.h0;
        display_state(&vehicle, t);

        if let Some(name) = result.impact {
            println!("CRASH! Impacted {} at time {:.2} s.", name, t);
            break;
        }
    }

    println!("--- Simulation End ---");
    Ok(())
}
