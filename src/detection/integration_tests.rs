use std::fs::File;
use std::path::{Path, PathBuf};

use tiff::encoder::{colortype, TiffEncoder};

use crate::config::{Config, DetectionMethod, Overrides, RuntimeBuilder};
use crate::detection::InsertionEvent;
use crate::output::write_events_csv;
use crate::stack::{load_tiff_stack, SampleFormat};

/// Integration tests running the full load -> detect -> write pipeline on real TIFF files
#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u32 = 16;
    const HEIGHT: u32 = 12;

    /// Low-contrast 16-bit background: 1000 +/- 3 in a fixed pattern.
    fn background() -> Vec<u16> {
        (0..(WIDTH * HEIGHT))
            .map(|i| if (i * 7) % 3 == 0 { 1003 } else { 997 })
            .collect()
    }

    fn brighten(frame: &mut [u16], pixels: &[(u32, u32)], amount: u16) {
        for &(y, x) in pixels {
            frame[(y * WIDTH + x) as usize] += amount;
        }
    }

    /// Five frames: a 2x2 spot appears in frame 2, a single-pixel spot in frame 4.
    fn write_synthetic_stack(path: &Path) {
        let base = background();
        let mut with_spot = base.clone();
        brighten(&mut with_spot, &[(3, 5), (3, 6), (4, 5), (4, 6)], 400);
        let mut with_two_spots = with_spot.clone();
        brighten(&mut with_two_spots, &[(9, 12)], 250);

        let frames = [&base, &base, &with_spot, &with_spot, &with_two_spots];

        let mut encoder = TiffEncoder::new(File::create(path).unwrap()).unwrap();
        for frame in frames {
            encoder
                .write_image::<colortype::Gray16>(WIDTH, HEIGHT, frame)
                .unwrap();
        }
    }

    fn run(input: &Path, config: &Config) -> Vec<InsertionEvent> {
        let stack = load_tiff_stack(input).unwrap();
        let (detector, params) = RuntimeBuilder::from_config(config);
        detector.detect(&stack, &params).events
    }

    #[test]
    fn test_synthetic_stack_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cell.tif");
        write_synthetic_stack(&input);

        let stack = load_tiff_stack(&input).unwrap();
        assert_eq!(stack.shape(), (5, HEIGHT as usize, WIDTH as usize));
        assert_eq!(stack.sample_format(), SampleFormat::U16);
        assert_eq!(stack.to_string(), "(5, 12, 16)");

        let events = run(&input, &Config::default());
        assert_eq!(
            events,
            vec![
                InsertionEvent {
                    frame: 2,
                    y: 3,
                    x: 5,
                    intensity: 400.0,
                },
                InsertionEvent {
                    frame: 4,
                    y: 9,
                    x: 12,
                    intensity: 250.0,
                },
            ]
        );

        let output: PathBuf = dir.path().join("events.csv");
        let saved = write_events_csv(&events, &output).unwrap();
        assert_eq!(saved, 2);

        let csv = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            csv,
            "frame,y,x,intensity\n2,3,5,400.0\n4,9,12,250.0\n"
        );
    }

    #[test]
    fn test_parallel_method_matches_sequential_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cell.tif");
        write_synthetic_stack(&input);

        let sequential = run(&input, &Config::default());

        let mut parallel_config = Config::default();
        parallel_config.apply_overrides(Overrides {
            method: Some(DetectionMethod::ParallelFrameDifference),
            threads: Some(3),
            ..Default::default()
        });
        let parallel = run(&input, &parallel_config);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_high_threshold_finds_nothing_but_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cell.tif");
        write_synthetic_stack(&input);

        let mut config = Config::default();
        config.apply_overrides(Overrides {
            threshold: Some(1000.0),
            ..Default::default()
        });
        let events = run(&input, &config);
        assert!(events.is_empty());

        let output = dir.path().join("empty.csv");
        write_events_csv(&events, &output).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "frame,y,x,intensity\n"
        );
    }
}
