/// HMD3D Terminal Demo - Stereo Cube
///
/// Renders a cube in side-by-side stereo: the left half of the terminal is
/// the left eye's view, the right half the right eye's.
/// Controls:
///   - WASD / Arrow Keys: Rotate the cube
///   - Z/X: Dolly the cube toward/away from the viewer
///   - Q/ESC: Quit
///
/// Usage: hmd3d-terminal [display-profile.json]
/// Without an argument the built-in headset profile is used.

use std::env;
use std::fs;
use std::io;

use hmd3d_core::{DisplayParameters, Mesh};
use hmd3d_terminal::TerminalApp;

fn load_profile(path: &str) -> io::Result<DisplayParameters> {
    let raw = fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read display profile {path}: {e}"),
        )
    })?;
    let profile: DisplayParameters = serde_json::from_str(&raw).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse display profile {path}: {e}"),
        )
    })?;
    profile.validate().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid display profile {path}: {e}"),
        )
    })?;
    Ok(profile)
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let display = if args.len() > 1 {
        let profile = load_profile(&args[1])?;
        log::info!("loaded display profile from {}", args[1]);
        profile
    } else {
        DisplayParameters::default()
    };

    let cube = Mesh::cube(0.3);

    log::info!("starting stereo renderer (press Q to quit)");
    let mut app = TerminalApp::new(cube, display)?;
    app.run()
}
