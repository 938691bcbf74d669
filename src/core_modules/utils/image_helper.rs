pub mod image_helper {
    use crate::error::Result;
    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::png::PngEncoder;
    use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Rgba};
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::{Path, PathBuf};

    pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

    const SORTED_SUFFIX: &str = "_sorted";
    pub const DEFAULT_JPEG_QUALITY: u8 = 100;

    /// A decoded image and the format it was detected as.
    pub struct LoadedImage {
        pub image: Rgba16Image,
        pub format: Option<ImageFormat>,
    }

    /// The formats the sorter writes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum OutputFormat {
        Png,
        Jpeg,
    }

    impl OutputFormat {
        pub fn extension(&self) -> &'static str {
            match self {
                OutputFormat::Png => "png",
                OutputFormat::Jpeg => "jpg",
            }
        }
    }

    /// JPEG stays JPEG. Everything else is written as PNG.
    pub fn select_output_format(input: Option<ImageFormat>) -> OutputFormat {
        match input {
            Some(ImageFormat::Jpeg) => OutputFormat::Jpeg,
            Some(ImageFormat::Png | ImageFormat::Gif | ImageFormat::Tiff) => OutputFormat::Png,
            other => {
                log::warn!(
                    "Not sure what to do with image format {other:?}. Defaulting to writing a PNG."
                );
                OutputFormat::Png
            }
        }
    }

    /// `<input stem>_sorted.<ext>` beside the input, or `explicit` with its
    /// extension swapped for the output format's.
    pub fn derive_output_path(
        input: &Path,
        explicit: Option<&Path>,
        format: OutputFormat,
    ) -> PathBuf {
        match explicit {
            Some(output) => output.with_extension(format.extension()),
            None => {
                let stem = input
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                input.with_file_name(format!("{stem}{SORTED_SUFFIX}.{}", format.extension()))
            }
        }
    }

    /// Decodes `path`, guessing the format from its content, into 16-bit RGBA.
    pub fn load(path: &Path) -> Result<LoadedImage> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let image = reader.decode()?.into_rgba16();

        Ok(LoadedImage { image, format })
    }

    pub fn save(
        path: &Path,
        image: &Rgba16Image,
        format: OutputFormat,
        jpeg_quality: u8,
    ) -> Result<()> {
        let output = BufWriter::new(File::create(path)?);

        match format {
            OutputFormat::Png => {
                let encoder = PngEncoder::new(output);
                DynamicImage::ImageRgba16(image.clone()).write_with_encoder(encoder)?;
            }
            OutputFormat::Jpeg => {
                // JPEG carries neither alpha nor 16-bit samples.
                let encoder = JpegEncoder::new_with_quality(output, jpeg_quality);
                let rgb = DynamicImage::ImageRgba16(image.clone()).into_rgb8();
                DynamicImage::ImageRgb8(rgb).write_with_encoder(encoder)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::image_helper::*;
    use image::{ImageFormat, Rgba};
    use std::path::{Path, PathBuf};

    #[test]
    fn jpeg_stays_jpeg() {
        assert_eq!(select_output_format(Some(ImageFormat::Jpeg)), OutputFormat::Jpeg);
    }

    #[test]
    fn other_formats_become_png() {
        for format in [ImageFormat::Png, ImageFormat::Gif, ImageFormat::Tiff, ImageFormat::Bmp] {
            assert_eq!(select_output_format(Some(format)), OutputFormat::Png);
        }
        assert_eq!(select_output_format(None), OutputFormat::Png);
    }

    #[test]
    fn default_output_sits_beside_input() {
        let path = derive_output_path(Path::new("/pics/cat.jpeg"), None, OutputFormat::Jpeg);
        assert_eq!(path, PathBuf::from("/pics/cat_sorted.jpg"));

        let path = derive_output_path(Path::new("dog.gif"), None, OutputFormat::Png);
        assert_eq!(path, PathBuf::from("dog_sorted.png"));

        let path = derive_output_path(Path::new("my.holiday.tif"), None, OutputFormat::Png);
        assert_eq!(path, PathBuf::from("my.holiday_sorted.png"));
    }

    #[test]
    fn explicit_output_gets_the_format_extension() {
        let explicit = Path::new("out/result.tiff");
        let path = derive_output_path(Path::new("in.png"), Some(explicit), OutputFormat::Png);
        assert_eq!(path, PathBuf::from("out/result.png"));
    }

    #[test]
    fn png_round_trip_keeps_sixteen_bits() {
        let image = Rgba16Image::from_fn(8, 3, |x, y| {
            Rgba([x as u16 * 4001, y as u16 * 9001, 12345, 65535 - x as u16])
        });
        let dir = tempfile::tempdir().expect("Error creating scratch dir.");
        let path = dir.path().join("round_trip.png");

        save(&path, &image, OutputFormat::Png, DEFAULT_JPEG_QUALITY).expect("Error Saving File.");
        let loaded = load(&path).expect("Error Loading File.");

        assert_eq!(loaded.format, Some(ImageFormat::Png));
        assert_eq!(loaded.image, image);
    }

    #[test]
    fn jpeg_is_written_and_detected() {
        let image = Rgba16Image::from_pixel(16, 16, Rgba([40000, 20000, 10000, 65535]));
        let dir = tempfile::tempdir().expect("Error creating scratch dir.");
        let path = dir.path().join("solid.jpg");

        save(&path, &image, OutputFormat::Jpeg, DEFAULT_JPEG_QUALITY).expect("Error Saving File.");
        let loaded = load(&path).expect("Error Loading File.");

        assert_eq!(loaded.format, Some(ImageFormat::Jpeg));
        assert_eq!(loaded.image.dimensions(), (16, 16));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Path::new("/definitely/not/here.png")).is_err());
    }
}
