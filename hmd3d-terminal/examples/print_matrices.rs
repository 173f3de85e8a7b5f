/// Example: compute one frame of stereo matrices and print them
///
/// Usage: cargo run --example print_matrices

use std::error::Error;

use hmd3d_core::{DisplayParameters, FrameState, StereoTransforms};

fn main() -> Result<(), Box<dyn Error>> {
    let display = DisplayParameters::default();
    let mut transforms = StereoTransforms::new(display)?;

    let state = FrameState::default();
    transforms.update(&state)?;

    println!("model:{}", transforms.model_mat());
    println!("view (left eye):{}", transforms.stereo_view_mat().left);
    println!("view (right eye):{}", transforms.stereo_view_mat().right);
    println!(
        "projection (left eye):{}",
        transforms.stereo_projection_mat().left
    );
    println!(
        "projection (right eye):{}",
        transforms.stereo_projection_mat().right
    );

    Ok(())
}
