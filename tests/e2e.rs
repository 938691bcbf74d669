mod common;

use common::synthetic_image::{gray_ramp, noise};
use image::{ImageFormat, Rgba, RgbaImage};
use pixelsort::core_modules::utils::image_helper::image_helper::{
    OutputFormat, derive_output_path, load, save, select_output_format,
};
use pixelsort::{
    Color, CombinerRegistry, ParallelPipeline, PixelSortPipeline, Rgba16Image, SortOrder,
    SortableBuffer,
};
use std::sync::Arc;

#[test]
fn two_pixel_scenario_with_basic() {
    let mut image = Rgba16Image::new(2, 1);
    image.put_pixel(0, 0, Rgba([65535, 0, 0, 65535]));
    image.put_pixel(1, 0, Rgba([0, 0, 0, 65535]));

    let registry = CombinerRegistry::with_defaults();
    let basic = registry.lookup("basic").expect("basic");
    let pipeline = PixelSortPipeline::new(basic, SortOrder::Descending);
    let sorted = pipeline.run(&image);

    assert_eq!(*sorted.get_pixel(0, 0), Rgba([65535, 0, 0, 65535]));
    assert_eq!(*sorted.get_pixel(1, 0), Rgba([0, 0, 0, 65535]));
}

#[test]
fn ramp_is_reversed_by_every_luma_combiner() {
    let ramp = gray_ramp(32, 4);
    let registry = CombinerRegistry::with_defaults();

    let names = [
        "alpha blend",
        "perceived (option 1)",
        "perceived (option 2, no alpha)",
        "standard objective",
    ];
    for name in names {
        let combiner = registry.lookup(name).expect(name);
        let pipeline = PixelSortPipeline::new(combiner, SortOrder::Descending);
        let sorted = pipeline.run(&ramp);
        let first = sorted.get_pixel(0, 0).0[0];
        let last = sorted.get_pixel(31, 3).0[0];
        assert_eq!(first, 65535, "{name}");
        assert_eq!(last, 0, "{name}");
    }
}

#[test]
fn every_combiner_sorts_noise_monotonically() {
    let source = noise(41, 17, 7);
    let registry = CombinerRegistry::with_defaults();

    for combiner in registry.registered() {
        let mut buffer = SortableBuffer::from_image(&source, combiner.as_ref());
        assert_eq!(buffer.len(), 41 * 17);
        buffer.sort(SortOrder::Descending);
        let values = buffer.values();
        assert!(
            values.windows(2).all(|pair| pair[0] >= pair[1]),
            "{} produced a non-monotonic order",
            combiner.name()
        );
    }
}

#[test]
fn unsorted_write_into_eight_bit_sink_quantizes() {
    let source = noise(9, 9, 3);
    let registry = CombinerRegistry::with_defaults();
    let basic = registry.lookup("basic").expect("basic");
    let buffer = SortableBuffer::from_image(&source, basic.as_ref());

    let mut out = RgbaImage::new(9, 9);
    buffer.write_to(&mut out);
    for (x, y, pixel) in out.enumerate_pixels() {
        assert_eq!(*pixel, Color::from(*source.get_pixel(x, y)).to_rgba8());
    }
}

#[tokio::test]
async fn parallel_and_sequential_agree_on_scores() {
    let source = Arc::new(noise(64, 48, 11));
    let registry = CombinerRegistry::with_defaults();
    let combiner = registry.lookup("standard objective").expect("known");

    let sequential =
        PixelSortPipeline::new(Arc::clone(&combiner), SortOrder::Descending).run(source.as_ref());
    let parallel = ParallelPipeline::with_workers(Arc::clone(&combiner), SortOrder::Descending, 5)
        .run(Arc::clone(&source))
        .await
        .expect("parallel run");

    let score = |image: &Rgba16Image| -> Vec<u64> {
        image.pixels().map(|p| combiner.combine(&Color::from(*p))).collect()
    };
    assert_eq!(score(&sequential), score(&parallel));
}

#[test_log::test]
fn png_file_round_trip() {
    let dir = tempfile::tempdir().expect("create scratch dir");
    let input = dir.path().join("ramp.png");
    save(&input, &gray_ramp(16, 2), OutputFormat::Png, 100).expect("write input");

    let loaded = load(&input).expect("read input");
    let format = select_output_format(loaded.format);
    assert_eq!(format, OutputFormat::Png);

    let registry = CombinerRegistry::with_defaults();
    let combiner = registry.lookup("perceived (option 1)").expect("known");
    let pipeline = PixelSortPipeline::new(combiner, SortOrder::Ascending);
    let sorted = pipeline.run(&loaded.image);

    let output = derive_output_path(&input, None, format);
    assert_eq!(output, dir.path().join("ramp_sorted.png"));
    save(&output, &sorted, format, 100).expect("write output");

    let reread = load(&output).expect("read output");
    assert_eq!(reread.format, Some(ImageFormat::Png));
    assert_eq!(reread.image, sorted);
    assert_eq!(reread.image.get_pixel(0, 0).0[0], 0);
    assert_eq!(reread.image.get_pixel(15, 1).0[0], 65535);
}
