use vatform::{
    CrossBleedParams, GridPatternParams, LatticeParams, Layer, LayerStack, NullJob, PixelBuffer,
    ProgressTracker, RunOptions, ShrinkageParams, compensate_stack, decompose_stack, dot_lattice,
    grid_pattern, line_lattice,
};

fn write_png(buffer: &PixelBuffer, name: &str) -> anyhow::Result<()> {
    let dir = std::path::Path::new("target").join("pattern_preview");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(name);
    image::save_buffer_with_format(
        &path,
        buffer.data(),
        buffer.width(),
        buffer.height(),
        image::ColorType::L8,
        image::ImageFormat::Png,
    )?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let (width, height) = (512u32, 320u32);

    let grid = grid_pattern(width, height, &GridPatternParams::default())?;
    write_png(&grid, "grid.png")?;

    let lattice = LatticeParams::default();
    write_png(&dot_lattice(width, height, &lattice)?, "dots.png")?;
    write_png(&line_lattice(width, height, &lattice)?, "lines.png")?;

    // A small solid box printed over 6 layers, then run through both
    // stack operations back to back.
    let mut solid = PixelBuffer::new(width, height);
    for y in 100..220 {
        for x in 150..360 {
            solid.set(x, y, 255);
        }
    }
    let layers = (0..6).map(|_| Layer::new(solid.clone(), 2.2)).collect();
    let mut stack = LayerStack::from_layers(width, height, layers)?;

    let progress = ProgressTracker::new();
    let opts = RunOptions::default();

    let stats = decompose_stack(
        &mut stack,
        &ShrinkageParams::default(),
        &opts,
        &progress,
        &mut NullJob,
    )?;
    println!(
        "decompose: {} layers in, {} out",
        stats.layers_in, stats.layers_out
    );

    let stats = compensate_stack(&mut stack, &CrossBleedParams::default(), &opts, &progress)?;
    println!(
        "compensate: {} layers rewritten of {}",
        stats.layers_rewritten, stats.layers_in
    );

    if let Some(layer) = stack.layer(4) {
        write_png(layer.buffer(), "decomposed_gap_fill.png")?;
    }

    Ok(())
}
