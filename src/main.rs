use ntnda_image_rs::image_pipeline::{
    ChannelToImagePipeline, ConvertConfig, Frame, FrameDescriptor, ScalePolicy,
};
use ntnda_image_rs::logger;

use tracing::{error, info};

/// Synthetic 12-bit color frame with the color planes on the middle axis.
fn synthetic_frame(nx: usize, ny: usize) -> Vec<u16> {
    let mut data = Vec::with_capacity(nx * ny * 3);
    for y in 0..ny {
        for c in 0..3 {
            for x in 0..nx {
                data.push(((x * (c + 1) + y) % 4096) as u16);
            }
        }
    }
    data
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting frame to image demo...");

    let config = ConvertConfig::builder()
        .image_size(800)
        .policy(ScalePolicy::Auto)
        .show_limits(true)
        .build();
    let mut pipeline = ChannelToImagePipeline::new(config);

    info!("Image size: {}", pipeline.config().image_size);
    info!("Scale policy: {:?}", pipeline.config().policy);

    let (nx, ny) = (2048, 1536);
    let data = synthetic_frame(nx, ny);
    let frame = Frame::new(&data, FrameDescriptor::from_sizes(&[nx, 3, ny]));

    match pipeline.process_with_timings(&frame) {
        Ok(timings) => {
            timings.log_summary();
            if let Some(image) = pipeline.latest() {
                info!(
                    nx = image.nx(),
                    ny = image.ny(),
                    nz = image.nz(),
                    compression = image.compression,
                    pixel_type = %image.pixel_type,
                    "Conversion successful"
                );
            }
            let channel = pipeline.channel_stats();
            let image = pipeline.image_stats();
            info!(
                data_min = channel.data_min,
                data_max = channel.data_max,
                image_min = image.image_min,
                image_max = image.image_max,
                "Limits"
            );
        }
        Err(e) => error!("Conversion failed: {}", e),
    }

    pipeline.set_policy(ScalePolicy::Manual);
    pipeline.set_manual_limits(500.0, 1500.0)?;
    pipeline.process(&frame)?;
    info!(
        frames = pipeline.state().frames_recorded(),
        "Manual limits applied"
    );

    Ok(())
}
